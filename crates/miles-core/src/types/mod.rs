//! Data model: matrices, bag collections, and the embedding output.

mod collection;
mod dense;
mod embedding;
mod matrix;
mod sparse;

pub use collection::{BagCollection, BagStack};
pub use dense::{DenseMatrix, MatrixView};
pub use embedding::EmbeddingMatrix;
pub use matrix::Matrix;
pub use sparse::{CsrMatrix, SparseMatrixError};
