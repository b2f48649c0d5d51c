//! Distance and similarity primitives.
//!
//! Pure, stateless functions over fixed-length f64 slices, plus the closed
//! [`DistanceKind`] enumeration selecting the estimator's behavior. Both
//! vectors are always required explicitly: a caller that wants distance to
//! the origin passes a zero vector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{MilesError, MilesResult};

/// Distance kind selecting the estimator's similarity profile.
///
/// Only `Euclidean` is implemented. The remaining variants are recognized
/// selectors without an implementation; the estimator surfaces them as
/// [`MilesError::UnsupportedKernel`] instead of silently falling back to
/// `Euclidean`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceKind {
    /// Gaussian similarity over Euclidean distance; the implemented kind.
    Euclidean,
    /// Radial-basis kernel; recognized but unimplemented.
    Rbf,
    /// Radial-basis kernel variant; recognized but unimplemented.
    Rbf2,
    /// Gaussian kernel with explicit gamma; recognized but unimplemented.
    Gaussian,
}

impl DistanceKind {
    /// Whether the estimator implements this kind.
    #[inline]
    pub fn is_implemented(&self) -> bool {
        matches!(self, Self::Euclidean)
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Rbf => "rbf",
            Self::Rbf2 => "rbf2",
            Self::Gaussian => "gaussian",
        }
    }
}

impl fmt::Display for DistanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceKind {
    type Err = MilesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euclidean" => Ok(Self::Euclidean),
            "rbf" => Ok(Self::Rbf),
            "rbf2" => Ok(Self::Rbf2),
            "gaussian" => Ok(Self::Gaussian),
            other => Err(MilesError::UnsupportedKernel {
                kind: other.to_string(),
            }),
        }
    }
}

/// Euclidean (L2) distance between two vectors.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the vectors differ in length.
///
/// # Example
///
/// ```
/// use miles_core::euclidean_distance;
///
/// let d = euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> MilesResult<f64> {
    if a.len() != b.len() {
        return Err(MilesError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    let dist_sq: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum();
    Ok(dist_sq.sqrt())
}

/// Gaussian similarity `exp(-gamma * d^2)` over Euclidean distance.
///
/// Public primitive; the most-likely estimator uses its own sigma-scaled
/// form rather than this function.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the vectors differ in length.
pub fn gaussian_distance(a: &[f64], b: &[f64], gamma: f64) -> MilesResult<f64> {
    let d = euclidean_distance(a, b)?;
    Ok((-gamma * d * d).exp())
}
