//! Dense row-major integer matrix.

use std::fmt;
use std::ops::Index;

use crate::error::{Error, Result};

/// Element type shared by both engines. Arithmetic on it wraps on overflow.
pub type Element = i64;

/// A rectangular `rows x cols` grid of integers stored in one flat buffer.
///
/// Row `i` occupies `data[i * cols..(i + 1) * cols]`, so a contiguous run of
/// rows is a contiguous slice and can be handed out with `split_at_mut`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Element>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1;
        }
        m
    }

    /// Builds a matrix by evaluating `f(row, col)` in row-major order.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Element) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// Builds a matrix from nested rows, rejecting jagged input.
    pub fn from_rows(rows: Vec<Vec<Element>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |row| row.len());
        let mut data = Vec::with_capacity(n_rows * n_cols);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(Error::JaggedRow {
                    row: i,
                    len: row.len(),
                    expected: n_cols,
                });
            }
            data.extend(row);
        }

        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    pub fn from_vec(rows: usize, cols: usize, data: Vec<Element>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::BufferLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Element> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, i: usize) -> &[Element] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [Element] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[Element]> {
        // chunks(0) panics, and a zero-width matrix still has `rows` empty rows.
        (0..self.rows).map(move |i| self.row(i))
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Element] {
        &mut self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<Element>> {
        self.rows_iter().map(<[Element]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Element;

    fn index(&self, (row, col): (usize, usize)) -> &Element {
        assert!(col < self.cols, "column {} out of bounds for {} columns", col, self.cols);
        &self.data[row * self.cols + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
