//! Recursive fork/join multiplication on a work-stealing pool.
//!
//! The row range is halved until it is no larger than the threshold. Both
//! halves are forked with `rayon::join`; idle workers steal queued halves from
//! busy ones. Each task receives the output rows it is responsible for as a
//! `&mut` slice carved off with `split_at_mut`, so sibling tasks can never
//! write the same row and the merge is the join itself.

use std::ops::Range;

use tracing::{info, trace};

use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::Result;
use crate::kernel;
use crate::matrix::{Element, Matrix};

#[derive(Debug, Clone)]
pub struct WorkStealing {
    threshold: usize,
    workers: usize,
}

impl WorkStealing {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            threshold: config.threshold,
            workers: config.workers(),
        })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl Engine for WorkStealing {
    fn name(&self) -> &str {
        "Work Stealing"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        kernel::check_dimensions(a, b)?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("steal-{}", i))
            .build()?;

        info!(
            rows = a.rows(),
            cols = b.cols(),
            workers = self.workers,
            threshold = self.threshold,
            "work stealing started"
        );

        let mut result = Matrix::zeros(a.rows(), b.cols());
        let out = result.as_mut_slice();
        pool.install(|| fork_join(a, b, 0..a.rows(), out, self.threshold))?;

        // Workers exit once the pool handle is gone.
        drop(pool);
        Ok(result)
    }
}

/// Computes `rows` of the product into `out`, which holds exactly those rows.
fn fork_join(
    a: &Matrix,
    b: &Matrix,
    rows: Range<usize>,
    out: &mut [Element],
    threshold: usize,
) -> Result<()> {
    let len = rows.end - rows.start;
    if len <= threshold {
        trace!(start = rows.start, end = rows.end, "leaf");
        return kernel::multiply_rows(a, b, rows, out);
    }

    let mid = rows.start + len / 2;
    let (upper, lower) = out.split_at_mut((mid - rows.start) * b.cols());
    let (left, right) = rayon::join(
        || fork_join(a, b, rows.start..mid, upper, threshold),
        || fork_join(a, b, mid..rows.end, lower, threshold),
    );
    left?;
    right
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn engine(threshold: usize, workers: usize) -> WorkStealing {
        let config = EngineConfig::default()
            .with_threshold(threshold)
            .with_workers(workers);
        WorkStealing::new(&config).unwrap()
    }

    fn sequence(rows: usize, cols: usize, seed: Element) -> Matrix {
        let data = (0..rows * cols)
            .map(|i| (i as Element * 7 + seed) % 23 - 11)
            .collect();
        Matrix::from_vec(rows, cols, data).unwrap()
    }

    #[test]
    fn test_example() {
        let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
        let c = engine(10, 2).multiply(&a, &b).unwrap();
        assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
    }

    #[test]
    fn test_threshold_invariance() {
        let a = sequence(37, 9, 3);
        let b = sequence(9, 5, 1);
        let expected = kernel::multiply(&a, &b).unwrap();

        for threshold in [1, 2, 3, 10, 36, 37, 100] {
            let c = engine(threshold, 4).multiply(&a, &b).unwrap();
            assert_eq!(c, expected, "threshold {}", threshold);
        }
    }

    #[test]
    fn test_single_worker() {
        let a = sequence(25, 4, 0);
        let b = sequence(4, 6, 5);
        let c = engine(1, 1).multiply(&a, &b).unwrap();
        assert_eq!(c, kernel::multiply(&a, &b).unwrap());
    }

    #[test]
    fn test_config_carried_over() {
        let stealing = engine(7, 3);
        assert_eq!(stealing.threshold(), 7);
        assert_eq!(stealing.workers(), 3);
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let config = EngineConfig::default().with_threshold(0);
        assert!(matches!(
            WorkStealing::new(&config),
            Err(Error::InvalidThreshold)
        ));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = sequence(3, 2, 0);
        let b = sequence(3, 2, 0);
        assert!(matches!(
            engine(1, 2).multiply(&a, &b),
            Err(Error::DimensionMismatch(3, 2, 3, 2))
        ));
    }

    #[test]
    fn test_child_failure_propagates() {
        let a = sequence(8, 2, 0);
        let b = sequence(2, 2, 0);
        let pool = rayon::ThreadPoolBuilder::new().num_threads(2).build().unwrap();
        // Output one row short: the trailing leaf sees a truncated slice.
        let mut out = vec![0; 7 * 2];
        let result = pool.install(|| fork_join(&a, &b, 0..8, &mut out, 1));
        assert!(matches!(result, Err(Error::OutputLength { .. })));
    }
}
