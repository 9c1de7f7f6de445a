//! Parallel dense integer matrix multiplication.
//!
//! `matrix-mul` computes C = A × B with two interchangeable schedulers and
//! times them against each other:
//!
//! - [`WorkStealing`] halves the row range recursively down to a threshold
//!   and forks the halves onto a rayon pool, where idle workers steal
//!   pending halves from busy ones.
//! - [`WorkDealing`] deals one task per output row to a fixed-size pool up
//!   front and waits for all of them.
//!
//! Both run the same sequential [`kernel`] on their leaves and must produce
//! identical results, whatever the split.
//!
//! # Example
//!
//! ```
//! use matrix_mul::{Engine, EngineConfig, Matrix, WorkDealing, WorkStealing};
//!
//! fn main() -> Result<(), matrix_mul::Error> {
//!     let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]])?;
//!     let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]])?;
//!     let config = EngineConfig::default();
//!
//!     let stolen = WorkStealing::new(&config)?.multiply(&a, &b)?;
//!     let dealt = WorkDealing::new(&config)?.multiply(&a, &b)?;
//!
//!     assert_eq!(stolen.to_rows(), vec![vec![19, 22], vec![43, 50]]);
//!     assert_eq!(stolen, dealt);
//!     Ok(())
//! }
//! ```

pub mod config;
mod engine;
mod error;
pub mod generate;
pub mod kernel;
mod matrix;
pub mod prompt;
pub mod report;
pub mod timing;
mod work_dealing;
mod work_stealing;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{Error, Result};
pub use matrix::{Element, Matrix};
pub use work_dealing::WorkDealing;
pub use work_stealing::WorkStealing;
