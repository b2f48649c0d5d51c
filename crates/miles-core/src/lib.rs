//! MILES Embedding Kernel
//!
//! Converts a multiple-instance-learning problem (variable-cardinality
//! bags of instances) into a fixed-dimension feature matrix consumable by
//! a standard vector classifier. Given a concept class (a pool of
//! reference instances, typically every training instance pooled across
//! labeled bags) and a collection of bags, the kernel produces, for each
//! bag, a vector whose k-th coordinate is the maximum Gaussian similarity
//! between concept instance k and any instance in the bag.
//!
//! # Architecture
//!
//! Data flows strictly upward through four layers:
//!
//! - distance primitives ([`euclidean_distance`], [`gaussian_distance`])
//! - the most-likely estimator ([`most_likely_estimator`]): one concept
//!   against one bag, reduced by maximum
//! - the bag embedder ([`embed_bag`]): every concept against one bag
//! - the collection embedder ([`embed_collection`]): every concept against
//!   every bag, in parallel, assembled into an [`EmbeddingMatrix`]
//!
//! The kernel is purely computational: no I/O, no shared mutable state,
//! fail-fast structured errors, read-only inputs, caller-owned output.
//!
//! # Example
//!
//! ```
//! use miles_core::{embed_collection, DenseMatrix, DistanceKind, Matrix};
//!
//! let concept_class: Matrix = DenseMatrix::from_rows(vec![
//!     vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
//!     vec![-1.0, -2.0, -3.0, -4.0, -5.0, -6.0],
//! ]).unwrap().into();
//!
//! let bags = vec![
//!     DenseMatrix::from_rows(vec![vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]]).unwrap(),
//!     DenseMatrix::from_rows(vec![
//!         vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0],
//!         vec![13.0, 14.0, 15.0, 16.0, 17.0, 18.0],
//!     ]).unwrap(),
//! ];
//!
//! let embedded = embed_collection(
//!     &concept_class,
//!     &bags.into(),
//!     3.0,
//!     DistanceKind::Euclidean,
//! ).unwrap();
//!
//! // One column per bag, one row per concept instance
//! assert_eq!(embedded.shape(), (2, 2));
//! assert_eq!(embedded.get(0, 0), 1.0);
//! ```

pub mod config;
pub mod error;
pub mod kernel;
pub mod synthetic;
pub mod types;

// Re-exports for convenience
pub use config::EmbeddingParams;
pub use error::{MilesError, MilesResult};
pub use kernel::distance::{euclidean_distance, gaussian_distance, DistanceKind};
pub use kernel::embed::{embed_bag, embed_collection};
pub use kernel::estimator::most_likely_estimator;
pub use types::{
    BagCollection, BagStack, CsrMatrix, DenseMatrix, EmbeddingMatrix, Matrix, MatrixView,
    SparseMatrixError,
};
