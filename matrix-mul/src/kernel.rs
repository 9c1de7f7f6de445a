//! Sequential triple-loop kernel shared by both engines.

use std::ops::Range;

use crate::error::{Error, Result};
use crate::matrix::{Element, Matrix};

/// Checks that `A.cols == B.rows`.
pub fn check_dimensions(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(Error::DimensionMismatch(a.rows(), a.cols(), b.rows(), b.cols()));
    }
    Ok(())
}

/// Computes rows `rows` of `A x B` into `out`.
///
/// `out` covers exactly those rows: `(rows.end - rows.start) * B.cols`
/// elements, with output row `rows.start` at offset 0. Products and sums wrap
/// on overflow.
pub fn multiply_rows(
    a: &Matrix,
    b: &Matrix,
    rows: Range<usize>,
    out: &mut [Element],
) -> Result<()> {
    check_dimensions(a, b)?;
    if rows.start > rows.end || rows.end > a.rows() {
        return Err(Error::RowRange {
            start: rows.start,
            end: rows.end,
            rows: a.rows(),
        });
    }

    let p = b.cols();
    let expected = (rows.end - rows.start) * p;
    if out.len() != expected {
        return Err(Error::OutputLength {
            expected,
            got: out.len(),
        });
    }

    for (offset, i) in rows.enumerate() {
        let a_row = a.row(i);
        let out_row = &mut out[offset * p..(offset + 1) * p];
        for (j, cell) in out_row.iter_mut().enumerate() {
            let mut sum: Element = 0;
            for (k, &a_ik) in a_row.iter().enumerate() {
                sum = sum.wrapping_add(a_ik.wrapping_mul(b[(k, j)]));
            }
            *cell = sum;
        }
    }

    Ok(())
}

/// Single-threaded `A x B` over the full row range.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_dimensions(a, b)?;
    let mut result = Matrix::zeros(a.rows(), b.cols());
    multiply_rows(a, b, 0..a.rows(), result.as_mut_slice())?;
    Ok(result)
}
