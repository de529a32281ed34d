//! Benchmark support utilities for the recommender.
//!
//! Generates deterministic synthetic wine lists so runs are comparable.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sommelier_core::{Structure, Wine};

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Grapes to cycle through so swap selection has work to do.
const GRAPES: [&str; 6] = [
    "Cabernet Sauvignon",
    "Merlot",
    "Zinfandel Blend",
    "Pinot Noir",
    "Grenache Blend",
    "Malbec",
];

/// Generate `count` wines with random structure and prices up to 250.
#[must_use]
pub fn generate_catalog(count: usize, seed: u64) -> Vec<Wine> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .zip(1_u64..)
        .map(|(index, id)| {
            #[expect(
                clippy::integer_division_remainder_used,
                reason = "Modulo for cyclic assignment is intentional"
            )]
            let grape = GRAPES.get(index % GRAPES.len()).copied().unwrap_or("Merlot");
            let structure = Structure::new(
                rng.gen_range(1..=10),
                rng.gen_range(1..=10),
                rng.gen_range(1..=10),
                rng.gen_range(1..=10),
                rng.gen_range(1..=10),
                rng.gen_range(1..=10),
            );
            Wine {
                id,
                name: format!("Synthetic {id}"),
                grape: grape.to_owned(),
                style: "Red".to_owned(),
                region: "Benchmark Hills".to_owned(),
                price: rng.gen_range(10.0..250.0),
                vintage: None,
                structure,
            }
        })
        .collect()
}
