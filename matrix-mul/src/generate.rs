//! Random matrix generation.

use rand::Rng;

use crate::matrix::{Element, Matrix};

/// Builds a `rows x cols` matrix with values drawn uniformly from
/// `min..=max`. Panics if `max < min`; input collection rejects that first.
pub fn generate<R: Rng>(
    rows: usize,
    cols: usize,
    min: Element,
    max: Element,
    rng: &mut R,
) -> Matrix {
    Matrix::from_fn(rows, cols, |_, _| rng.gen_range(min..=max))
}

pub fn generate_random(rows: usize, cols: usize, min: Element, max: Element) -> Matrix {
    generate(rows, cols, min, max, &mut rand::thread_rng())
}
