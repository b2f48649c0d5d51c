//! Input matrix representation: dense or sparse.
//!
//! Concept classes and bags enter the kernel as a [`Matrix`], which is
//! either a [`DenseMatrix`] the kernel can compute on or a [`CsrMatrix`]
//! it must refuse. [`Matrix::require_dense`] is the single choke point
//! where sparse input fails.

use serde::{Deserialize, Serialize};

use crate::error::{MilesError, MilesResult};
use crate::types::{CsrMatrix, DenseMatrix};

/// A matrix in either dense or sparse representation.
///
/// # Example
///
/// ```
/// use miles_core::{CsrMatrix, DenseMatrix, Matrix};
///
/// let dense: Matrix = DenseMatrix::from_rows(vec![vec![1.0, 2.0]]).unwrap().into();
/// assert!(dense.require_dense("concept class").is_ok());
///
/// let sparse: Matrix = CsrMatrix::zeros(3, 2).into();
/// assert!(sparse.require_dense("concept class").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Matrix {
    /// Dense row-major storage, accepted by the kernel.
    Dense(DenseMatrix),
    /// Compressed sparse row storage, rejected by the kernel.
    Sparse(CsrMatrix),
}

impl Matrix {
    /// Number of rows (instances).
    pub fn rows(&self) -> usize {
        match self {
            Self::Dense(m) => m.rows(),
            Self::Sparse(m) => m.rows(),
        }
    }

    /// Number of columns (feature dimension).
    pub fn cols(&self) -> usize {
        match self {
            Self::Dense(m) => m.cols(),
            Self::Sparse(m) => m.cols(),
        }
    }

    /// Whether this matrix is in sparse representation.
    #[inline]
    pub fn is_sparse(&self) -> bool {
        matches!(self, Self::Sparse(_))
    }

    /// Return the dense matrix, or fail with `UnsupportedRepresentation`.
    ///
    /// `location` names the input for the error message, e.g.
    /// `"concept class"` or `"bag 3"`.
    pub fn require_dense(&self, location: &str) -> MilesResult<&DenseMatrix> {
        match self {
            Self::Dense(m) => Ok(m),
            Self::Sparse(_) => Err(MilesError::UnsupportedRepresentation {
                location: location.to_string(),
            }),
        }
    }
}

impl From<DenseMatrix> for Matrix {
    fn from(m: DenseMatrix) -> Self {
        Self::Dense(m)
    }
}

impl From<CsrMatrix> for Matrix {
    fn from(m: CsrMatrix) -> Self {
        Self::Sparse(m)
    }
}
