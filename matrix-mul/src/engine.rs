//! Common interface of the parallel multiplication engines.

use crate::error::Result;
use crate::matrix::Matrix;

/// A parallel strategy for computing `A x B`.
///
/// Every implementation must return the same matrix as
/// [`kernel::multiply`](crate::kernel::multiply) for the same inputs,
/// however it splits the work. Inputs are only ever read, so any number of
/// worker threads may share them.
pub trait Engine: Send + Sync {
    /// Short human-readable name used in logs and reports.
    fn name(&self) -> &str;

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;
}
