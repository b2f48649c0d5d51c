//! Error types for miles-core.
//!
//! This module defines the central error type [`MilesError`] used throughout
//! the crate, along with the [`MilesResult<T>`] type alias.
//!
//! All kernel operations are fail-fast and non-recovering: no retries, no
//! default substitution, no partial matrices. A failure at any single bag or
//! concept row aborts the entire collection-level call. The kernel performs
//! no logging or user-facing formatting inside error paths; callers decide
//! how to present failures.
//!
//! # Examples
//!
//! ```rust
//! use miles_core::MilesError;
//!
//! let error = MilesError::BagDimensionMismatch {
//!     bag_index: 3,
//!     expected: 37,
//!     actual: 36,
//! };
//! assert!(error.to_string().contains("bag 3"));
//! ```

use thiserror::Error;

/// Result alias used by all kernel operations.
pub type MilesResult<T> = Result<T, MilesError>;

/// Top-level error type for the embedding kernel.
///
/// Provides structured variants for every failure mode, enabling precise
/// pattern matching and informative messages.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MilesError {
    /// The requested distance kind is recognized but not implemented, or not
    /// recognized at all.
    ///
    /// # When This Occurs
    ///
    /// - Passing `DistanceKind::Rbf`, `Rbf2`, or `Gaussian` to the estimator
    /// - Parsing a distance-kind string the kernel does not know
    ///
    /// Unimplemented kinds never fall back to `euclidean`.
    #[error("unsupported distance kind `{kind}`: only `euclidean` is implemented")]
    UnsupportedKernel {
        /// Name of the rejected kind
        kind: String,
    },

    /// A bag with zero instances was given to the estimator.
    ///
    /// The max-similarity reduction is undefined over an empty instance set,
    /// so this fails instead of returning NaN or a sentinel.
    #[error("empty bag: the max-similarity reduction is undefined over zero instances")]
    EmptyBag,

    /// Two vectors of different lengths were compared.
    #[error("vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension of the reference vector
        expected: usize,
        /// Dimension actually supplied
        actual: usize,
    },

    /// A bag's feature dimension disagrees with the concept class.
    ///
    /// Reported by `embed_collection` before any numeric work, naming the
    /// offending bag.
    #[error("bag {bag_index}: feature dimension mismatch: concept class has {expected}, bag has {actual}")]
    BagDimensionMismatch {
        /// Index of the offending bag in input order
        bag_index: usize,
        /// Feature dimension of the concept class
        expected: usize,
        /// Feature dimension of the bag
        actual: usize,
    },

    /// The bandwidth parameter is not strictly positive and finite.
    ///
    /// Similarity divides by sigma squared, so zero, negative, and
    /// non-finite values are rejected up front.
    #[error("bandwidth sigma must be strictly positive and finite, got {sigma}")]
    NonPositiveSigma {
        /// The rejected value
        sigma: f64,
    },

    /// A sparse matrix was supplied where the kernel requires dense input.
    ///
    /// Sparse input is explicitly unsupported: the kernel fails fast rather
    /// than attempt implicit densification.
    #[error("sparse matrix supplied as {location}: sparse input is not supported, densify before embedding")]
    UnsupportedRepresentation {
        /// Which input was sparse, e.g. `"concept class"` or `"bag 3"`
        location: String,
    },

    /// A dense matrix buffer does not match its declared shape.
    #[error("matrix buffer has {actual} elements, expected {rows}x{cols}")]
    BufferShapeMismatch {
        /// Declared row count
        rows: usize,
        /// Declared column count
        cols: usize,
        /// Buffer length actually supplied
        actual: usize,
    },

    /// A dense matrix was built from rows of inconsistent length.
    #[error("row {row} has {actual} elements, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of row 0
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },
}
