//! Bag and collection embedding.
//!
//! [`embed_bag`] applies the most-likely estimator across every concept
//! instance for one bag; [`embed_collection`] applies it across a whole
//! collection, producing the concept×bag embedding matrix consumed by a
//! downstream classifier.
//!
//! Per-coordinate computations are independent: each reads the shared
//! read-only concept class and one bag, and writes one disjoint output
//! slot. The collection embedder exploits this with rayon across bags;
//! column order always equals input bag order.

use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use crate::error::{MilesError, MilesResult};
use crate::kernel::distance::DistanceKind;
use crate::kernel::estimator::{estimate, validate_params};
use crate::types::{BagCollection, DenseMatrix, EmbeddingMatrix, Matrix, MatrixView};

/// Embed one bag against the entire concept class.
///
/// Coordinate `k` of the result is the most-likely-estimator similarity of
/// concept instance `k` to the bag. The output length always equals the
/// concept-class size, regardless of bag size.
///
/// # Errors
///
/// Any estimator failure (unsupported kernel, empty bag, non-positive
/// sigma, dimension mismatch) aborts the whole vector computation and
/// propagates unchanged.
///
/// # Example
///
/// ```
/// use miles_core::{embed_bag, DenseMatrix, DistanceKind};
///
/// let concept_class = DenseMatrix::from_rows(vec![
///     vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
///     vec![-1.0, -2.0, -3.0, -4.0, -5.0, -6.0],
/// ]).unwrap();
/// let bag = DenseMatrix::from_rows(vec![
///     vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
///     vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0],
/// ]).unwrap();
///
/// let embedded = embed_bag(&concept_class, &bag, 1.0, DistanceKind::Euclidean).unwrap();
/// assert_eq!(embedded.len(), 2);
/// assert_eq!(embedded[0], 1.0);
/// assert!(embedded[1] < 1e-6);
/// ```
pub fn embed_bag(
    concept_class: &DenseMatrix,
    bag: &DenseMatrix,
    sigma: f64,
    kind: DistanceKind,
) -> MilesResult<Vec<f64>> {
    validate_params(sigma, kind)?;
    embed_bag_view(concept_class.view(), bag.view(), sigma)
}

/// Embed one bag view; parameters already validated.
fn embed_bag_view(
    concept_class: MatrixView<'_>,
    bag: MatrixView<'_>,
    sigma: f64,
) -> MilesResult<Vec<f64>> {
    (0..concept_class.rows())
        .map(|k| estimate(concept_class.row(k), bag, sigma))
        .collect()
}

/// Embed a whole bag collection, producing the n×l embedding matrix.
///
/// Column `i` of the result is `embed_bag(concept_class, bag_i, ..)`; the
/// column order matches input bag order exactly. Bags are embedded in
/// parallel, each writing its own column.
///
/// Representation and shape are checked before any numeric work:
///
/// # Errors
///
/// - `UnsupportedRepresentation` if the concept class or any bag is
///   sparse; sparse input is never densified implicitly
/// - `BagDimensionMismatch` naming the first bag whose feature dimension
///   disagrees with the concept class
/// - any estimator failure, which aborts the entire call with no partial
///   matrix
pub fn embed_collection(
    concept_class: &Matrix,
    bags: &BagCollection,
    sigma: f64,
    kind: DistanceKind,
) -> MilesResult<EmbeddingMatrix> {
    validate_params(sigma, kind)?;
    let concepts = concept_class.require_dense("concept class")?;

    // Representation + dimension pre-pass over the whole collection
    let views: Vec<MatrixView<'_>> = (0..bags.len())
        .map(|i| bags.bag_view(i))
        .collect::<MilesResult<_>>()?;
    let p = concepts.cols();
    for (i, view) in views.iter().enumerate() {
        if view.rows() == 0 {
            return Err(MilesError::EmptyBag);
        }
        if view.cols() != p {
            return Err(MilesError::BagDimensionMismatch {
                bag_index: i,
                expected: p,
                actual: view.cols(),
            });
        }
    }

    let start = Instant::now();
    let columns: Vec<Vec<f64>> = views
        .par_iter()
        .map(|bag| embed_bag_view(concepts.view(), *bag, sigma))
        .collect::<MilesResult<_>>()?;

    debug!(
        concepts = concepts.rows(),
        bags = views.len(),
        sigma,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "embedded bag collection"
    );

    Ok(EmbeddingMatrix::from_columns(columns, concepts.rows()))
}
