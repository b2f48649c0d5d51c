//! Collection-embedding benchmarks.
//!
//! Measures embed_collection over synthetic five-Gaussian MIL data at the
//! sizes the classic benchmark uses (40 bags of 17 two-dimensional
//! instances, concept class pooled from all bags).
//!
//! Run: cargo bench -p miles-core -- embed_collection

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use miles_core::synthetic::{concept_class_from_bags, generate_bags};
use miles_core::{embed_collection, BagCollection, BagStack, DistanceKind, Matrix};

fn setup(bag_size: usize) -> (Matrix, Vec<miles_core::DenseMatrix>) {
    let mut rng = ChaCha8Rng::seed_from_u64(0x1135);
    let (positive, negative) = generate_bags(&mut rng, 20, 20, bag_size);
    let all: Vec<_> = positive.into_iter().chain(negative).collect();
    let concept_class = concept_class_from_bags(&all).into();
    (concept_class, all)
}

fn bench_embed_ragged(c: &mut Criterion) {
    let mut group = c.benchmark_group("embed_collection_ragged");
    for bag_size in [17, 64] {
        let (concept_class, bags) = setup(bag_size);
        let collection: BagCollection = bags.into();
        group.bench_with_input(
            BenchmarkId::from_parameter(bag_size),
            &bag_size,
            |b, _| {
                b.iter(|| {
                    embed_collection(
                        black_box(&concept_class),
                        black_box(&collection),
                        3.0,
                        DistanceKind::Euclidean,
                    )
                    .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_embed_uniform(c: &mut Criterion) {
    let (concept_class, bags) = setup(17);
    let collection: BagCollection = BagStack::from_bags(&bags).unwrap().into();
    c.bench_function("embed_collection_uniform_17", |b| {
        b.iter(|| {
            embed_collection(
                black_box(&concept_class),
                black_box(&collection),
                3.0,
                DistanceKind::Euclidean,
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_embed_ragged, bench_embed_uniform);
criterion_main!(benches);
