//! Compressed sparse row matrix representation.
//!
//! [`CsrMatrix`] exists so that sparse input is *representable* at the
//! kernel boundary: the collection embedder must recognize a sparse concept
//! class or bag and reject it explicitly, never densify it behind the
//! caller's back. The kernel performs no arithmetic on this type.
//!
//! # Design Decisions
//!
//! - **Validation on construction**: fail fast with detailed error types
//! - **Sorted column indices per row**: the canonical CSR invariant, checked
//!   in a single pass
//! - **No `to_dense()`**: densification is a caller decision, not a kernel
//!   fallback

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Sparse f64 matrix in compressed sparse row format.
///
/// `row_ptr` has `rows + 1` entries; row `i` owns the half-open slice
/// `col_indices[row_ptr[i]..row_ptr[i + 1]]` with matching `values`.
/// Column indices are sorted ascending and unique within each row.
///
/// # Example
///
/// ```
/// use miles_core::CsrMatrix;
///
/// // 2x4 matrix with entries (0,1)=2.0 and (1,3)=5.0
/// let m = CsrMatrix::new(2, 4, vec![0, 1, 2], vec![1, 3], vec![2.0, 5.0]).unwrap();
/// assert_eq!(m.nnz(), 2);
/// assert_eq!(m.shape(), (2, 4));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsrMatrix {
    rows: usize,
    cols: usize,
    row_ptr: Vec<usize>,
    col_indices: Vec<usize>,
    values: Vec<f64>,
}

impl CsrMatrix {
    /// Create a new CSR matrix with validation.
    ///
    /// # Errors
    ///
    /// Returns `Err(SparseMatrixError)` if:
    /// - `col_indices.len() != values.len()` (LengthMismatch)
    /// - `row_ptr` does not have `rows + 1` entries, does not start at 0,
    ///   does not end at `nnz`, or decreases (BadRowPtr)
    /// - any column index is `>= cols` (IndexOutOfBounds)
    /// - column indices within a row are unsorted or duplicated
    ///   (UnsortedOrDuplicate)
    pub fn new(
        rows: usize,
        cols: usize,
        row_ptr: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<f64>,
    ) -> Result<Self, SparseMatrixError> {
        if col_indices.len() != values.len() {
            return Err(SparseMatrixError::LengthMismatch {
                indices_len: col_indices.len(),
                values_len: values.len(),
            });
        }

        if row_ptr.len() != rows + 1
            || row_ptr.first() != Some(&0)
            || row_ptr.last() != Some(&col_indices.len())
        {
            return Err(SparseMatrixError::BadRowPtr {
                rows,
                nnz: col_indices.len(),
            });
        }

        for (row, window) in row_ptr.windows(2).enumerate() {
            let (start, end) = (window[0], window[1]);
            if end < start || end > col_indices.len() {
                return Err(SparseMatrixError::BadRowPtr {
                    rows,
                    nnz: col_indices.len(),
                });
            }

            let mut prev: Option<usize> = None;
            for &col in &col_indices[start..end] {
                if col >= cols {
                    return Err(SparseMatrixError::IndexOutOfBounds {
                        row,
                        index: col,
                        max: cols.saturating_sub(1),
                    });
                }
                if let Some(p) = prev {
                    if col <= p {
                        return Err(SparseMatrixError::UnsortedOrDuplicate { row, index: col });
                    }
                }
                prev = Some(col);
            }
        }

        Ok(Self {
            rows,
            cols,
            row_ptr,
            col_indices,
            values,
        })
    }

    /// Create an all-zero sparse matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            row_ptr: vec![0; rows + 1],
            col_indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored (non-zero) entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.col_indices.len()
    }
}

/// Errors for CsrMatrix construction.
///
/// Returned by `CsrMatrix::new()` when structural validation fails.
#[derive(Debug, Clone, PartialEq)]
pub enum SparseMatrixError {
    /// The column-index and value vectors have different lengths.
    LengthMismatch {
        /// Length of the column-index vector
        indices_len: usize,
        /// Length of the values vector
        values_len: usize,
    },

    /// The row-pointer array is malformed for the declared shape.
    BadRowPtr {
        /// Declared row count
        rows: usize,
        /// Number of stored entries
        nnz: usize,
    },

    /// A column index exceeds the declared column count.
    IndexOutOfBounds {
        /// Row in which the violation was found
        row: usize,
        /// The invalid column index
        index: usize,
        /// The maximum valid column index
        max: usize,
    },

    /// Column indices within a row are unsorted or duplicated.
    UnsortedOrDuplicate {
        /// Row in which the violation was found
        row: usize,
        /// The index where the violation was detected
        index: usize,
    },
}

impl fmt::Display for SparseMatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch {
                indices_len,
                values_len,
            } => write!(
                f,
                "column indices length ({}) != values length ({})",
                indices_len, values_len
            ),
            Self::BadRowPtr { rows, nnz } => write!(
                f,
                "row pointer array is inconsistent with {} rows and {} stored entries",
                rows, nnz
            ),
            Self::IndexOutOfBounds { row, index, max } => {
                write!(f, "row {}: column index {} exceeds maximum {}", row, index, max)
            }
            Self::UnsortedOrDuplicate { row, index } => write!(
                f,
                "row {}: column indices must be sorted ascending without duplicates, failed at {}",
                row, index
            ),
        }
    }
}

impl Error for SparseMatrixError {}
