//! Static one-task-per-row multiplication on a fixed-size pool.
//!
//! The result matrix is allocated up front and cut into its rows. Every row
//! becomes one task holding the `&mut` slice of that row and nothing else, and
//! all tasks are queued on the pool before the caller waits on any of them.
//! Surplus tasks wait in the queue until a worker frees up. The scope the
//! tasks are spawned in is the join-all barrier.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use rayon::ThreadPool;
use tracing::{debug, error, info};

use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::kernel;
use crate::matrix::{Element, Matrix};

#[derive(Debug, Clone)]
pub struct WorkDealing {
    workers: usize,
}

impl WorkDealing {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            workers: config.workers(),
        })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    fn build_pool(&self) -> Result<ThreadPool> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("deal-{}", i))
            .build()?;
        Ok(pool)
    }

    /// Runs `job(row, out)` for every row in `0..rows` as its own pool task,
    /// where `out` is row `row` of the result, then waits for all of them.
    ///
    /// A failing or panicking task does not stop the others. Once every task
    /// has finished, the failed rows are reported together as
    /// [`Error::RowTasksFailed`].
    pub fn deal<F>(&self, rows: usize, cols: usize, job: F) -> Result<Matrix>
    where
        F: Fn(usize, &mut [Element]) -> Result<()> + Sync,
    {
        let pool = self.build_pool()?;
        let mut result = Matrix::zeros(rows, cols);
        let mut failed = vec![false; rows];

        info!(rows, cols, workers = self.workers, "work dealing started");

        let job = &job;
        let mut remaining = result.as_mut_slice();
        pool.scope_fifo(|scope| {
            for (row, failed) in failed.iter_mut().enumerate() {
                let (out, rest) = std::mem::take(&mut remaining).split_at_mut(cols);
                remaining = rest;
                scope.spawn_fifo(move |_| {
                    match panic::catch_unwind(AssertUnwindSafe(|| job(row, out))) {
                        Ok(Ok(())) => {}
                        Ok(Err(e)) => {
                            error!(row, error = %e, "row task failed");
                            *failed = true;
                        }
                        Err(payload) => {
                            error!(row, panic = panic_message(&*payload), "row task panicked");
                            *failed = true;
                        }
                    }
                });
            }
            debug!(submitted = rows, "all row tasks submitted");
        });

        // Every task has finished once the scope returns.
        drop(pool);

        let failed: Vec<usize> = failed
            .iter()
            .enumerate()
            .filter_map(|(row, &failed)| failed.then_some(row))
            .collect();
        if !failed.is_empty() {
            return Err(Error::RowTasksFailed(failed));
        }
        Ok(result)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}

impl Engine for WorkDealing {
    fn name(&self) -> &str {
        "Work Dealing"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        kernel::check_dimensions(a, b)?;
        self.deal(a.rows(), b.cols(), |row, out| {
            kernel::multiply_rows(a, b, row..row + 1, out)
        })
    }
}
