//! Embedding parameter configuration.
//!
//! [`EmbeddingParams`] bundles the bandwidth and distance kind for callers
//! that carry them through configuration files or service state. The kernel
//! itself takes both as explicit call arguments; this struct is a
//! convenience wrapper with validation, not a source of hidden defaults.
//! There is no `Default` impl: sigma has no sensible default.

use serde::{Deserialize, Serialize};

use crate::error::MilesResult;
use crate::kernel::distance::DistanceKind;
use crate::kernel::embed::{embed_bag, embed_collection};
use crate::kernel::estimator::validate_params;
use crate::types::{BagCollection, DenseMatrix, EmbeddingMatrix, Matrix};

/// Bandwidth and distance kind for one embedding run.
///
/// # Example
///
/// ```
/// use miles_core::{DistanceKind, EmbeddingParams};
///
/// let params = EmbeddingParams::new(3.0);
/// assert_eq!(params.kind, DistanceKind::Euclidean);
/// assert!(params.validate().is_ok());
/// assert!(EmbeddingParams::new(0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingParams {
    /// Bandwidth; larger sigma means slower similarity decay and less
    /// regularization. Must be strictly positive and finite.
    pub sigma: f64,
    /// Distance kind; only `Euclidean` is implemented.
    pub kind: DistanceKind,
}

impl EmbeddingParams {
    /// Parameters with the given sigma and the `Euclidean` kind.
    #[inline]
    pub fn new(sigma: f64) -> Self {
        Self {
            sigma,
            kind: DistanceKind::Euclidean,
        }
    }

    /// Replace the distance kind.
    #[inline]
    pub fn with_kind(mut self, kind: DistanceKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check that these parameters are usable by the kernel.
    ///
    /// # Errors
    ///
    /// `NonPositiveSigma` or `UnsupportedKernel`, matching what the kernel
    /// entry points would report.
    pub fn validate(&self) -> MilesResult<()> {
        validate_params(self.sigma, self.kind)
    }

    /// Embed one bag with these parameters.
    pub fn embed_bag(
        &self,
        concept_class: &DenseMatrix,
        bag: &DenseMatrix,
    ) -> MilesResult<Vec<f64>> {
        embed_bag(concept_class, bag, self.sigma, self.kind)
    }

    /// Embed a bag collection with these parameters.
    pub fn embed_collection(
        &self,
        concept_class: &Matrix,
        bags: &BagCollection,
    ) -> MilesResult<EmbeddingMatrix> {
        embed_collection(concept_class, bags, self.sigma, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MilesError;

    #[test]
    fn test_new_defaults_to_euclidean() {
        let params = EmbeddingParams::new(1.5);
        assert_eq!(params.sigma, 1.5);
        assert_eq!(params.kind, DistanceKind::Euclidean);
    }

    #[test]
    fn test_validate_rejects_bad_sigma() {
        for sigma in [0.0, -3.0, f64::NAN] {
            let err = EmbeddingParams::new(sigma).validate().unwrap_err();
            assert!(matches!(err, MilesError::NonPositiveSigma { .. }), "sigma={sigma}");
        }
    }

    #[test]
    fn test_validate_rejects_unimplemented_kind() {
        let err = EmbeddingParams::new(1.0)
            .with_kind(DistanceKind::Rbf)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            MilesError::UnsupportedKernel {
                kind: "rbf".to_string()
            }
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let params = EmbeddingParams::new(3.0);
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"euclidean\""), "got {json}");
        let back: EmbeddingParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn test_params_embed_delegates_to_kernel() {
        let concept_class =
            DenseMatrix::from_rows(vec![vec![1.0, 2.0], vec![5.0, 5.0]]).unwrap();
        let bag = DenseMatrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let params = EmbeddingParams::new(2.0);

        let embedded = params.embed_bag(&concept_class, &bag).unwrap();
        assert_eq!(embedded[0], 1.0);

        let matrix = params
            .embed_collection(&concept_class.clone().into(), &vec![bag].into())
            .unwrap();
        assert_eq!(matrix.shape(), (2, 1));
        assert_eq!(matrix.column(0), embedded.as_slice());
    }
}
