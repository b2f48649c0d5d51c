//! Dense matrix types for instances, concept classes, and bags.
//!
//! A [`DenseMatrix`] stores an ordered sequence of fixed-length instances as
//! a row-major `Vec<f64>`. Construction validates shape, so every matrix in
//! circulation has consistent dimensionality; instances are immutable once
//! created (no public mutators).
//!
//! [`MatrixView`] is the borrowed counterpart used by the kernel so that the
//! contiguous rectangular-collection storage and standalone matrices share
//! one code path without copying.

use serde::{Deserialize, Serialize};

use crate::error::{MilesError, MilesResult};

/// Dense row-major matrix of f64 values.
///
/// Rows are instances, columns are feature dimensions. Used for concept
/// classes (n×p) and bags (m×p).
///
/// # Example
///
/// ```
/// use miles_core::DenseMatrix;
///
/// let m = DenseMatrix::from_rows(vec![
///     vec![1.0, 2.0, 3.0],
///     vec![4.0, 5.0, 6.0],
/// ]).unwrap();
/// assert_eq!(m.rows(), 2);
/// assert_eq!(m.cols(), 3);
/// assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DenseMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl DenseMatrix {
    /// Create a matrix from a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns `BufferShapeMismatch` if `data.len() != rows * cols`.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> MilesResult<Self> {
        if data.len() != rows * cols {
            return Err(MilesError::BufferShapeMismatch {
                rows,
                cols,
                actual: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a matrix from per-instance rows.
    ///
    /// Row 0 fixes the feature dimension; every later row must match it.
    ///
    /// # Errors
    ///
    /// Returns `RaggedRows` naming the first row whose length disagrees.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> MilesResult<Self> {
        let n = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MilesError::RaggedRows {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: n,
            cols,
        })
    }

    /// Create a zero matrix of the given shape.
    #[inline]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Number of instances (rows).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Feature dimension (columns).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Immutable access to the row-major buffer.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Instance `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Iterator over instances in row order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.cols.max(1)).take(self.rows)
    }

    /// Borrowed view over the whole matrix.
    #[inline]
    pub fn view(&self) -> MatrixView<'_> {
        MatrixView {
            data: &self.data,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

/// Borrowed dense matrix view.
///
/// Either a whole [`DenseMatrix`] or one bag inside a contiguous
/// rectangular collection. `Copy`, so the kernel passes it by value.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a> {
    data: &'a [f64],
    rows: usize,
    cols: usize,
}

impl<'a> MatrixView<'a> {
    /// Construct a view over a row-major slice.
    ///
    /// Callers must guarantee `data.len() == rows * cols`; this is enforced
    /// in debug builds only since views are produced from already-validated
    /// owners.
    #[inline]
    pub(crate) fn from_parts(data: &'a [f64], rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// Number of instances (rows).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Feature dimension (columns).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Instance `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    #[inline]
    pub fn row(&self, i: usize) -> &'a [f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_buffer() {
        let err = DenseMatrix::new(vec![1.0, 2.0, 3.0], 2, 2).unwrap_err();
        assert_eq!(
            err,
            MilesError::BufferShapeMismatch {
                rows: 2,
                cols: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_from_rows_and_access() {
        let m = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])
            .unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.row(0), &[1.0, 2.0]);
        assert_eq!(m.row(2), &[5.0, 6.0]);
        assert_eq!(m.data().len(), 6);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err =
            DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            MilesError::RaggedRows {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_from_rows_empty_is_zero_by_zero() {
        let m = DenseMatrix::from_rows(vec![]).unwrap();
        assert_eq!(m.rows(), 0);
        assert_eq!(m.cols(), 0);
    }

    #[test]
    fn test_iter_rows_matches_row() {
        let m = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let collected: Vec<&[f64]> = m.iter_rows().collect();
        assert_eq!(collected, vec![m.row(0), m.row(1)]);
    }

    #[test]
    fn test_view_row_access() {
        let m = DenseMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
            .unwrap();
        let v = m.view();
        assert_eq!(v.rows(), 2);
        assert_eq!(v.cols(), 3);
        assert_eq!(v.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_zeros() {
        let m = DenseMatrix::zeros(2, 4);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 4);
        assert!(m.data().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let m = DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let bytes = bincode::serialize(&m).expect("serialize failed");
        let restored: DenseMatrix = bincode::deserialize(&bytes).expect("deserialize failed");
        assert_eq!(m, restored);
    }
}
