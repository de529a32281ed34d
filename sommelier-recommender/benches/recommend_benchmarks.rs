//! Criterion benchmarks for the catalog recommender.
//!
//! Measures recommendation time across catalog sizes to track the cost of
//! scoring, sorting and swap selection.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package sommelier-recommender
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sommelier_core::{
    AddOn, Doneness, RecommendRequest, Recommender, SteakCut, SteakOrder, UserPreferences,
};
use sommelier_recommender::CatalogRecommender;

mod bench_support;

use bench_support::{BENCHMARK_SEED, generate_catalog};

/// Catalog sizes to benchmark.
const CATALOG_SIZES: &[usize] = &[6, 100, 1_000, 10_000];

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let recommender = CatalogRecommender::default();
    let order =
        SteakOrder::new(SteakCut::Ribeye, Doneness::MediumRare).with_add_on(AddOn::AuPoivre);
    let preferences = UserPreferences::default();

    for &size in CATALOG_SIZES {
        let catalog = generate_catalog(size, BENCHMARK_SEED);
        let request = RecommendRequest::new(&catalog, &order, &preferences);

        let throughput_size = u64::try_from(size).unwrap_or(u64::MAX);
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("wines", size), &size, |b, _| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Benchmarking recommendation, result is intentionally discarded"
                )]
                let _ = recommender.recommend(&request);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_recommend);
criterion_main!(benches);
