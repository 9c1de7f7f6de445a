//! Error types for matrix-mul operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("matrix dimension mismatch: A is {0}x{1}, B is {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),

    #[error("row {row} has {len} elements, expected {expected}")]
    JaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("buffer of {len} elements cannot hold a {rows}x{cols} matrix")]
    BufferLength { rows: usize, cols: usize, len: usize },

    #[error("row range {start}..{end} out of bounds for {rows} rows")]
    RowRange { start: usize, end: usize, rows: usize },

    #[error("output buffer holds {got} elements, expected {expected}")]
    OutputLength { expected: usize, got: usize },

    #[error("split threshold must be at least 1")]
    InvalidThreshold,

    #[error("worker count must be at least 1")]
    InvalidWorkers,

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("row tasks failed for rows {0:?}")]
    RowTasksFailed(Vec<usize>),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
