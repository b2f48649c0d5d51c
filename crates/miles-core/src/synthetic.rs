//! Synthetic multiple-instance data generation.
//!
//! Generates the classic five-Gaussian benchmark layout: instances are
//! drawn from unit-covariance normal distributions centered at (5,5),
//! (5,-5), (-5,5), (-5,-5), and (0,0). A bag is positive when it contains
//! instances from at least two of the first three distributions, negative
//! when it contains at most one such instance.
//!
//! The generators take the RNG explicitly so tests and benchmarks can seed
//! them deterministically. Positive/negative labels stay external metadata:
//! the kernel never consumes them, so these functions hand back plain
//! matrices grouped by label.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::types::DenseMatrix;

/// Feature dimension of generated instances.
pub const INSTANCE_DIM: usize = 2;

/// Distribution centers; the first three are the "positive" distributions.
const CENTERS: [[f64; INSTANCE_DIM]; 5] = [
    [5.0, 5.0],
    [5.0, -5.0],
    [-5.0, 5.0],
    [-5.0, -5.0],
    [0.0, 0.0],
];

/// Draw one instance from the distribution at `CENTERS[which]`.
fn sample_instance<R: Rng + ?Sized>(rng: &mut R, which: usize) -> Vec<f64> {
    CENTERS[which]
        .iter()
        .map(|&center| {
            let noise: f64 = StandardNormal.sample(rng);
            center + noise
        })
        .collect()
}

/// Generate one positive bag of `bag_size` instances.
///
/// The first two instances come from distinct draws over the positive
/// distributions; the rest may come from any of the five.
///
/// # Panics
///
/// Panics if `bag_size < 2`: a positive bag needs at least two instances
/// from the positive distributions.
pub fn positive_bag<R: Rng + ?Sized>(rng: &mut R, bag_size: usize) -> DenseMatrix {
    assert!(bag_size >= 2, "a positive bag needs at least 2 instances");
    let mut rows = Vec::with_capacity(bag_size);
    let c0 = rng.gen_range(0..3);
    rows.push(sample_instance(rng, c0));
    let c1 = rng.gen_range(0..3);
    rows.push(sample_instance(rng, c1));
    for _ in 2..bag_size {
        let c = rng.gen_range(0..5);
        rows.push(sample_instance(rng, c));
    }
    DenseMatrix::from_rows(rows).expect("generated rows share INSTANCE_DIM")
}

/// Generate one negative bag of `bag_size` instances.
///
/// At most one instance comes from the positive distributions; once one
/// has been drawn, the remaining instances are restricted to the last two.
pub fn negative_bag<R: Rng + ?Sized>(rng: &mut R, bag_size: usize) -> DenseMatrix {
    let mut rows = Vec::with_capacity(bag_size);
    let mut used_positive = false;
    for _ in 0..bag_size {
        let mut which = rng.gen_range(0..5);
        if used_positive && which < 3 {
            which = rng.gen_range(3..5);
        }
        if which < 3 {
            used_positive = true;
        }
        rows.push(sample_instance(rng, which));
    }
    DenseMatrix::from_rows(rows).expect("generated rows share INSTANCE_DIM")
}

/// Generate `n_positive` positive and `n_negative` negative bags.
pub fn generate_bags<R: Rng + ?Sized>(
    rng: &mut R,
    n_positive: usize,
    n_negative: usize,
    bag_size: usize,
) -> (Vec<DenseMatrix>, Vec<DenseMatrix>) {
    let positive = (0..n_positive).map(|_| positive_bag(rng, bag_size)).collect();
    let negative = (0..n_negative).map(|_| negative_bag(rng, bag_size)).collect();
    (positive, negative)
}

/// Pool every instance from the given bags into one concept class.
///
/// The usual MILES setup: the concept class is the set of all training
/// instances across all labeled bags.
pub fn concept_class_from_bags(bags: &[DenseMatrix]) -> DenseMatrix {
    let rows = bags
        .iter()
        .flat_map(|bag| bag.iter_rows().map(<[f64]>::to_vec))
        .collect();
    DenseMatrix::from_rows(rows).expect("pooled bags share INSTANCE_DIM")
}
