//! Interactive collection of matrix sizes and the element value range.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::matrix::Element;

/// Everything needed to generate the two input matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Rows of A.
    pub rows_a: usize,
    /// Columns of A, which are also the rows of B.
    pub cols_a: usize,
    /// Columns of B.
    pub cols_b: usize,
    pub min: Element,
    pub max: Element,
}

/// Reads whitespace-separated values from `input`, writing a prompt to
/// `output` before each one. Several values may share a line.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn read_dimensions(&mut self) -> Result<Dimensions> {
        let rows_a = self.ask_positive("Enter the number of rows for matrix A: ")?;
        let cols_a =
            self.ask_positive("Enter the number of columns for matrix A / rows for matrix B: ")?;
        let cols_b = self.ask_positive("Enter the number of columns for matrix B: ")?;
        let min: Element = self.ask("Enter the minimum value for elements: ")?;
        let max: Element = self.ask("Enter the maximum value for elements: ")?;

        if max < min {
            return Err(Error::InvalidInput(format!(
                "maximum {} is less than minimum {}",
                max, min
            )));
        }

        Ok(Dimensions {
            rows_a,
            cols_a,
            cols_b,
            min,
            max,
        })
    }

    fn ask_positive(&mut self, prompt: &str) -> Result<usize> {
        let value: usize = self.ask(prompt)?;
        if value == 0 {
            return Err(Error::InvalidInput("dimensions must be positive".to_string()));
        }
        Ok(value)
    }

    fn ask<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| Error::InvalidInput(format!("not a valid number: {:?}", token)))
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::UnexpectedEof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str) -> (Result<Dimensions>, String) {
        let mut output = Vec::new();
        let result = Prompter::new(input.as_bytes(), &mut output).read_dimensions();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_one_value_per_line() {
        let (dims, output) = read("2\n3\n4\n-5\n5\n");
        assert_eq!(
            dims.unwrap(),
            Dimensions {
                rows_a: 2,
                cols_a: 3,
                cols_b: 4,
                min: -5,
                max: 5
            }
        );
        assert!(output.starts_with("Enter the number of rows for matrix A: "));
        assert!(output.ends_with("Enter the maximum value for elements: "));
    }

    #[test]
    fn test_values_on_one_line() {
        let (dims, _) = read("1 1 1 0 0\n");
        let dims = dims.unwrap();
        assert_eq!((dims.rows_a, dims.cols_a, dims.cols_b), (1, 1, 1));
        assert_eq!((dims.min, dims.max), (0, 0));
    }

    #[test]
    fn test_rejects_zero_dimension() {
        let (dims, _) = read("2 0 4 1 2\n");
        assert!(matches!(dims, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_inverted_range() {
        let (dims, _) = read("2 2 2 10 1\n");
        assert!(matches!(dims, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_garbage() {
        let (dims, _) = read("two\n");
        assert!(matches!(dims, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_eof() {
        let (dims, _) = read("2 2\n");
        assert!(matches!(dims, Err(Error::UnexpectedEof)));
    }
}
