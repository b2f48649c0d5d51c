//! The most-likely estimator.
//!
//! For one concept instance and one bag, computes the Gaussian similarity
//! profile against every instance in the bag and reduces it to a single
//! scalar via maximum. The max reduction is the diverse-density estimator:
//! it identifies the bag instance most consistent with the candidate
//! concept location.

use crate::error::{MilesError, MilesResult};
use crate::kernel::distance::DistanceKind;
use crate::types::{DenseMatrix, MatrixView};

/// Validate the shared estimator parameters.
///
/// Checked up front by every kernel entry point so that invalid sigma or an
/// unimplemented kind fails even when the input is empty and no similarity
/// would otherwise be evaluated.
pub(crate) fn validate_params(sigma: f64, kind: DistanceKind) -> MilesResult<()> {
    if !kind.is_implemented() {
        return Err(MilesError::UnsupportedKernel {
            kind: kind.to_string(),
        });
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(MilesError::NonPositiveSigma { sigma });
    }
    Ok(())
}

/// Similarity of one concept instance to the closest instance in a bag.
///
/// For every bag row `j`, computes `s_j = exp(-‖bag[j] − concept‖² / σ²)`
/// and returns `max_j s_j`. The result is exactly `1.0` when the concept
/// matches some bag row, and decays toward `0.0` as the nearest bag
/// instance moves away, at a rate controlled by `sigma` (larger sigma,
/// slower decay).
///
/// # Errors
///
/// - `UnsupportedKernel` for any kind other than `Euclidean`
/// - `NonPositiveSigma` if `sigma` is not strictly positive and finite
/// - `EmptyBag` if the bag has no instances
/// - `DimensionMismatch` if the bag's feature dimension differs from the
///   concept's
///
/// # Example
///
/// ```
/// use miles_core::{most_likely_estimator, DenseMatrix, DistanceKind};
///
/// let bag = DenseMatrix::from_rows(vec![
///     vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
///     vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0],
/// ]).unwrap();
/// let sim = most_likely_estimator(
///     &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
///     &bag,
///     3.0,
///     DistanceKind::Euclidean,
/// ).unwrap();
/// assert_eq!(sim, 1.0);
/// ```
pub fn most_likely_estimator(
    concept: &[f64],
    bag: &DenseMatrix,
    sigma: f64,
    kind: DistanceKind,
) -> MilesResult<f64> {
    validate_params(sigma, kind)?;
    estimate(concept, bag.view(), sigma)
}

/// Core reduction over an already-validated parameter set.
///
/// Separated so the collection embedder validates once, not per (concept,
/// bag) pair.
pub(crate) fn estimate(concept: &[f64], bag: MatrixView<'_>, sigma: f64) -> MilesResult<f64> {
    if bag.rows() == 0 {
        return Err(MilesError::EmptyBag);
    }
    if bag.cols() != concept.len() {
        return Err(MilesError::DimensionMismatch {
            expected: concept.len(),
            actual: bag.cols(),
        });
    }

    let inv_sigma_sq = 1.0 / (sigma * sigma);
    let mut best = f64::NEG_INFINITY;
    for j in 0..bag.rows() {
        let mut dist_sq = 0.0;
        for (x, c) in bag.row(j).iter().zip(concept) {
            let d = x - c;
            dist_sq += d * d;
        }
        let similarity = (-dist_sq * inv_sigma_sq).exp();
        if similarity > best {
            best = similarity;
        }
    }
    Ok(best)
}
