//! Embedding matrix output type.
//!
//! The sole durable artifact of the kernel: an n×l dense matrix where
//! column `i` is bag `i`'s embedding against the concept class and row `k`
//! is concept `k`'s similarity across all bags. Created fresh per call and
//! handed to the caller; no hidden mutable state.

use serde::{Deserialize, Serialize};

/// Dense n×l embedding matrix.
///
/// Stored column-major: each bag's length-n embedding vector is one
/// contiguous column, so downstream classifiers can take `column(i)` as
/// bag `i`'s feature vector without copying.
///
/// # Example
///
/// ```
/// use miles_core::EmbeddingMatrix;
///
/// let m = EmbeddingMatrix::from_columns(vec![vec![1.0, 0.5], vec![0.2, 0.9]], 2);
/// assert_eq!(m.concepts(), 2);
/// assert_eq!(m.bags(), 2);
/// assert_eq!(m.column(1), &[0.2, 0.9]);
/// assert_eq!(m.get(1, 0), 0.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingMatrix {
    /// Column-major buffer, length `concepts * bags`.
    data: Vec<f64>,
    concepts: usize,
    bags: usize,
}

impl EmbeddingMatrix {
    /// Assemble a matrix from per-bag embedding columns, in bag order.
    ///
    /// `concepts` is passed explicitly so an empty collection still yields
    /// a correctly shaped n×0 matrix.
    ///
    /// # Panics
    ///
    /// Panics if any column's length differs from `concepts`.
    pub fn from_columns(columns: Vec<Vec<f64>>, concepts: usize) -> Self {
        let bags = columns.len();
        let mut data = Vec::with_capacity(concepts * bags);
        for (i, column) in columns.iter().enumerate() {
            assert_eq!(
                column.len(),
                concepts,
                "column {i} has {} entries, expected {concepts}",
                column.len()
            );
            data.extend_from_slice(column);
        }
        Self {
            data,
            concepts,
            bags,
        }
    }

    /// Number of concept-class instances (rows).
    #[inline]
    pub fn concepts(&self) -> usize {
        self.concepts
    }

    /// Number of bags (columns).
    #[inline]
    pub fn bags(&self) -> usize {
        self.bags
    }

    /// Shape as `(concepts, bags)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.concepts, self.bags)
    }

    /// Bag `i`'s embedding vector (column `i`).
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.bags()`.
    #[inline]
    pub fn column(&self, i: usize) -> &[f64] {
        &self.data[i * self.concepts..(i + 1) * self.concepts]
    }

    /// Iterator over bag embeddings in bag order.
    pub fn columns(&self) -> impl Iterator<Item = &[f64]> {
        self.data
            .chunks_exact(self.concepts.max(1))
            .take(self.bags)
    }

    /// Similarity of concept `k` to every bag, gathered across columns.
    ///
    /// # Panics
    ///
    /// Panics if `k >= self.concepts()`.
    pub fn row(&self, k: usize) -> Vec<f64> {
        assert!(k < self.concepts, "concept index {k} out of range");
        (0..self.bags).map(|i| self.get(k, i)).collect()
    }

    /// Entry at concept row `k`, bag column `i`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, k: usize, i: usize) -> f64 {
        assert!(k < self.concepts, "concept index {k} out of range");
        self.data[i * self.concepts + k]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_columns_layout() {
        let m = EmbeddingMatrix::from_columns(
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]],
            3,
        );
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.column(0), &[1.0, 2.0, 3.0]);
        assert_eq!(m.column(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.get(2, 1), 6.0);
        assert_eq!(m.row(0), vec![1.0, 4.0]);
    }

    #[test]
    fn test_empty_collection_keeps_concept_count() {
        let m = EmbeddingMatrix::from_columns(vec![], 5);
        assert_eq!(m.shape(), (5, 0));
        assert_eq!(m.columns().count(), 0);
    }

    #[test]
    #[should_panic(expected = "column 1")]
    fn test_mismatched_column_length_panics() {
        EmbeddingMatrix::from_columns(vec![vec![1.0, 2.0], vec![3.0]], 2);
    }

    #[test]
    fn test_columns_iterator_matches_column() {
        let m = EmbeddingMatrix::from_columns(vec![vec![1.0, 2.0], vec![3.0, 4.0]], 2);
        let cols: Vec<&[f64]> = m.columns().collect();
        assert_eq!(cols, vec![m.column(0), m.column(1)]);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let m = EmbeddingMatrix::from_columns(vec![vec![1.0, 0.25], vec![0.5, 0.75]], 2);
        let bytes = bincode::serialize(&m).expect("serialize failed");
        let restored: EmbeddingMatrix =
            bincode::deserialize(&bytes).expect("deserialize failed");
        assert_eq!(m, restored);
    }
}
