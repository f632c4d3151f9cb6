//! Dense row-major matrix used for adjacency and constraint inputs.

use std::ops::{Index, IndexMut};

use crate::errors::{ErrorInfo, RewireError};

/// Dense matrix stored as a flat row-major buffer.
///
/// The shape is fixed at construction. Element `(i, j)` lives at
/// `i * cols + j`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Adjacency matrices carry real edge weights; `0.0` means "no edge".
pub type AdjacencyMatrix = Matrix<f64>;

impl<T> Matrix<T> {
    /// Wraps a row-major buffer, checking that its length matches the shape.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, RewireError> {
        let expected = rows.checked_mul(cols).ok_or_else(|| {
            RewireError::Shape(
                ErrorInfo::new("buffer-length", "matrix dimensions overflow")
                    .with_context("rows", rows.to_string())
                    .with_context("cols", cols.to_string()),
            )
        })?;
        if data.len() != expected {
            return Err(RewireError::Shape(
                ErrorInfo::new(
                    "buffer-length",
                    "buffer length does not match the matrix shape",
                )
                .with_context("rows", rows.to_string())
                .with_context("cols", cols.to_string())
                .with_context("len", data.len().to_string()),
            ));
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a matrix from a list of rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, RewireError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(Vec::len).unwrap_or(0);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(RewireError::Shape(
                    ErrorInfo::new("ragged-rows", "matrix rows have different lengths")
                        .with_context("row", idx.to_string())
                        .with_context("expected", n_cols.to_string())
                        .with_context("found", row.len().to_string()),
                ));
            }
            data.extend(row);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)` pair.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns a reference to `(row, col)` or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Row-major view of the underlying buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over rows as slices.
    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks(0) panics; a zero-column matrix has an empty buffer anyway.
        self.data.chunks(self.cols.max(1))
    }

    /// Fails with a `Shape` error unless the matrix is square.
    pub fn ensure_square(&self) -> Result<usize, RewireError> {
        if self.is_square() {
            Ok(self.rows)
        } else {
            Err(RewireError::Shape(
                ErrorInfo::new("not-square", "matrix is not square")
                    .with_context("rows", self.rows.to_string())
                    .with_context("cols", self.cols.to_string()),
            ))
        }
    }
}

impl<T: Clone> Matrix<T> {
    /// Creates a `rows x cols` matrix filled with `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Copies the matrix into a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.row_iter().map(<[T]>::to_vec).collect()
    }
}

impl Matrix<f64> {
    /// Square zero matrix, i.e. the empty graph on `n` vertices.
    pub fn zeros(n: usize) -> Self {
        Self::filled(n, n, 0.0)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}
