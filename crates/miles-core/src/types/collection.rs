//! Bag collections: rectangular and ragged.
//!
//! A multiple-instance collection is either *uniform* (every bag has the
//! same instance count, stored contiguously as one l×m×p buffer) or
//! *ragged* (independently shaped per-bag matrices). Both are first-class
//! inputs to the collection embedder; the uniform case is a storage
//! optimization, not a separate code path, since iteration yields the
//! same per-bag [`MatrixView`]s either way.

use serde::{Deserialize, Serialize};

use crate::error::{MilesError, MilesResult};
use crate::types::{DenseMatrix, Matrix, MatrixView};

/// Contiguous stack of `bags` equally sized bags, each `bag_size`×`dim`.
///
/// The rectangular 3-D array case: bag `i` occupies the row-major slab
/// `data[i * bag_size * dim..(i + 1) * bag_size * dim]`.
///
/// # Example
///
/// ```
/// use miles_core::BagStack;
///
/// // 2 bags, each 1 instance of dimension 3
/// let stack = BagStack::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 1, 3).unwrap();
/// assert_eq!(stack.bag(1).row(0), &[4.0, 5.0, 6.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BagStack {
    data: Vec<f64>,
    bags: usize,
    bag_size: usize,
    dim: usize,
}

impl BagStack {
    /// Create a stack from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns `BufferShapeMismatch` if
    /// `data.len() != bags * bag_size * dim`.
    pub fn new(data: Vec<f64>, bags: usize, bag_size: usize, dim: usize) -> MilesResult<Self> {
        if data.len() != bags * bag_size * dim {
            return Err(MilesError::BufferShapeMismatch {
                rows: bags * bag_size,
                cols: dim,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            bags,
            bag_size,
            dim,
        })
    }

    /// Create a stack by concatenating equally shaped dense bags.
    ///
    /// # Errors
    ///
    /// Returns `RaggedRows` naming the first bag whose instance count
    /// disagrees with bag 0, or `BagDimensionMismatch` naming the first bag
    /// whose feature dimension disagrees.
    pub fn from_bags(bags: &[DenseMatrix]) -> MilesResult<Self> {
        let bag_size = bags.first().map_or(0, DenseMatrix::rows);
        let dim = bags.first().map_or(0, DenseMatrix::cols);
        let mut data = Vec::with_capacity(bags.len() * bag_size * dim);
        for (i, bag) in bags.iter().enumerate() {
            if bag.cols() != dim {
                return Err(MilesError::BagDimensionMismatch {
                    bag_index: i,
                    expected: dim,
                    actual: bag.cols(),
                });
            }
            if bag.rows() != bag_size {
                return Err(MilesError::RaggedRows {
                    row: i,
                    expected: bag_size,
                    actual: bag.rows(),
                });
            }
            data.extend_from_slice(bag.data());
        }
        Ok(Self {
            data,
            bags: bags.len(),
            bag_size,
            dim,
        })
    }

    /// Number of bags.
    #[inline]
    pub fn len(&self) -> usize {
        self.bags
    }

    /// Whether the stack holds no bags.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bags == 0
    }

    /// Instances per bag.
    #[inline]
    pub fn bag_size(&self) -> usize {
        self.bag_size
    }

    /// Feature dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// View of bag `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn bag(&self, i: usize) -> MatrixView<'_> {
        assert!(i < self.bags, "bag index {i} out of range ({} bags)", self.bags);
        let slab = self.bag_size * self.dim;
        MatrixView::from_parts(&self.data[i * slab..(i + 1) * slab], self.bag_size, self.dim)
    }
}

/// An ordered collection of bags in either representation.
///
/// Column `i` of the embedding produced from a collection always
/// corresponds to `bag_view(i)`, for both variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BagCollection {
    /// All bags share one shape; contiguous storage.
    Uniform(BagStack),
    /// Bags are independently shaped; each may be dense or sparse.
    Ragged(Vec<Matrix>),
}

impl BagCollection {
    /// Number of bags in the collection.
    pub fn len(&self) -> usize {
        match self {
            Self::Uniform(stack) => stack.len(),
            Self::Ragged(bags) => bags.len(),
        }
    }

    /// Whether the collection holds no bags.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dense view of bag `i`, in input order.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedRepresentation` naming the bag if it is sparse.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn bag_view(&self, i: usize) -> MilesResult<MatrixView<'_>> {
        match self {
            Self::Uniform(stack) => Ok(stack.bag(i)),
            Self::Ragged(bags) => {
                let dense = bags[i].require_dense(&format!("bag {i}"))?;
                Ok(dense.view())
            }
        }
    }
}

impl From<BagStack> for BagCollection {
    fn from(stack: BagStack) -> Self {
        Self::Uniform(stack)
    }
}

impl From<Vec<Matrix>> for BagCollection {
    fn from(bags: Vec<Matrix>) -> Self {
        Self::Ragged(bags)
    }
}

impl From<Vec<DenseMatrix>> for BagCollection {
    fn from(bags: Vec<DenseMatrix>) -> Self {
        Self::Ragged(bags.into_iter().map(Matrix::Dense).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CsrMatrix;

    fn bag(rows: Vec<Vec<f64>>) -> DenseMatrix {
        DenseMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_stack_new_validates_buffer() {
        let err = BagStack::new(vec![1.0; 5], 2, 1, 3).unwrap_err();
        assert!(matches!(err, MilesError::BufferShapeMismatch { .. }));
    }

    #[test]
    fn test_stack_bag_views() {
        let stack = BagStack::new((0..12).map(f64::from).collect(), 2, 2, 3).unwrap();
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.bag(0).row(1), &[3.0, 4.0, 5.0]);
        assert_eq!(stack.bag(1).row(0), &[6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_stack_from_bags_matches_direct_views() {
        let bags = vec![
            bag(vec![vec![1.0, 2.0], vec![3.0, 4.0]]),
            bag(vec![vec![5.0, 6.0], vec![7.0, 8.0]]),
        ];
        let stack = BagStack::from_bags(&bags).unwrap();
        assert_eq!(stack.bag_size(), 2);
        assert_eq!(stack.dim(), 2);
        for (i, b) in bags.iter().enumerate() {
            for j in 0..b.rows() {
                assert_eq!(stack.bag(i).row(j), b.row(j));
            }
        }
    }

    #[test]
    fn test_stack_from_bags_rejects_uneven_sizes() {
        let bags = vec![
            bag(vec![vec![1.0, 2.0]]),
            bag(vec![vec![3.0, 4.0], vec![5.0, 6.0]]),
        ];
        let err = BagStack::from_bags(&bags).unwrap_err();
        assert_eq!(
            err,
            MilesError::RaggedRows {
                row: 1,
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn test_stack_from_bags_rejects_mixed_dims() {
        let bags = vec![bag(vec![vec![1.0, 2.0]]), bag(vec![vec![3.0, 4.0, 5.0]])];
        let err = BagStack::from_bags(&bags).unwrap_err();
        assert_eq!(
            err,
            MilesError::BagDimensionMismatch {
                bag_index: 1,
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_ragged_collection_order_and_views() {
        let collection: BagCollection = vec![
            bag(vec![vec![1.0, 2.0]]),
            bag(vec![vec![3.0, 4.0], vec![5.0, 6.0]]),
        ]
        .into();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.bag_view(0).unwrap().rows(), 1);
        assert_eq!(collection.bag_view(1).unwrap().rows(), 2);
        assert_eq!(collection.bag_view(1).unwrap().row(1), &[5.0, 6.0]);
    }

    #[test]
    fn test_ragged_sparse_bag_is_rejected_by_view() {
        let collection: BagCollection = BagCollection::Ragged(vec![
            Matrix::Dense(bag(vec![vec![1.0, 2.0]])),
            Matrix::Sparse(CsrMatrix::zeros(3, 2)),
        ]);
        assert!(collection.bag_view(0).is_ok());
        let err = collection.bag_view(1).unwrap_err();
        assert_eq!(
            err,
            MilesError::UnsupportedRepresentation {
                location: "bag 1".to_string()
            }
        );
    }

    #[test]
    fn test_empty_collection() {
        let collection: BagCollection = Vec::<DenseMatrix>::new().into();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
    }
}
