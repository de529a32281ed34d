//! Property-based tests for the catalog recommender.
//!
//! # Invariants tested
//!
//! - **Bounded top:** at most three picks, all affordable, none flagged as a
//!   swap.
//! - **Ordering:** top scores never increase, and no affordable wine left out
//!   of the top outscores the last pick.
//! - **Swap gating:** a swap clears the threshold, uses a grape absent from
//!   the top, and is missing only when no such wine exists.

use std::collections::BTreeSet;

use proptest::prelude::*;
use sommelier_core::test_support::wine_with_structure;
use sommelier_core::{
    AddOn, Budget, Doneness, FoodProfile, RecommendRequest, Recommendations, Recommender, Scorer,
    SteakCut, SteakOrder, Structure, UserPreferences, Wine,
};
use sommelier_recommender::{CatalogRecommender, RecommenderConfig};
use sommelier_scorer::PairingScorer;

const GRAPES: [&str; 5] = ["Cabernet Sauvignon", "Merlot", "Syrah", "Pinot Noir", "Malbec"];

fn structure_strategy() -> impl Strategy<Value = Structure> {
    prop::array::uniform6(1_u8..=10_u8)
        .prop_map(|[tannin, oak, spice, funk, body, acidity]| {
            Structure::new(tannin, oak, spice, funk, body, acidity)
        })
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Wine>> {
    prop::collection::vec(
        (
            prop::sample::select(GRAPES.to_vec()),
            0.0_f64..150.0_f64,
            structure_strategy(),
        ),
        0..12,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .zip(1_u64..)
            .map(|((grape, price, structure), id)| wine_with_structure(id, grape, price, structure))
            .collect()
    })
}

fn order_strategy() -> impl Strategy<Value = SteakOrder> {
    (
        prop::sample::select(SteakCut::ALL.to_vec()),
        prop::sample::select(Doneness::ALL.to_vec()),
        prop::sample::subsequence(AddOn::ALL.to_vec(), 0..=AddOn::ALL.len()),
    )
        .prop_map(|(cut, doneness, add_ons)| SteakOrder {
            cut,
            doneness,
            add_ons: add_ons.into_iter().collect::<BTreeSet<_>>(),
        })
}

#[expect(clippy::float_arithmetic, reason = "budget ceiling offsets the floor")]
fn budget_strategy() -> impl Strategy<Value = Budget> {
    (0.0_f64..100.0_f64, 0.0_f64..150.0_f64).prop_map(|(min, width)| Budget {
        min,
        max: min + width,
    })
}

fn recommend(catalog: &[Wine], order: &SteakOrder, preferences: &UserPreferences) -> Recommendations {
    let request = RecommendRequest::new(catalog, order, preferences);
    match CatalogRecommender::default().recommend(&request) {
        Ok(recommendations) => recommendations,
        Err(err) => panic!("generated request should be valid: {err}"),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: picks are few, affordable and ordered best first.
    #[test]
    fn top_picks_are_bounded_and_descending(
        catalog in catalog_strategy(),
        order in order_strategy(),
        budget in budget_strategy(),
    ) {
        let preferences = UserPreferences::default().with_budget(budget);
        let picks = recommend(&catalog, &order, &preferences);

        prop_assert!(picks.top.len() <= RecommenderConfig::default().top_n);
        prop_assert!(picks.top.iter().all(|pick| budget.contains(pick.wine.price)));
        prop_assert!(picks.top.iter().all(|pick| !pick.is_swap));
        let descending = picks.top.windows(2).all(|pair| match pair {
            [first, second] => first.score >= second.score,
            _ => true,
        });
        prop_assert!(descending);
    }

    /// Property: no affordable wine outside the top beats the last pick.
    #[test]
    fn omitted_wines_never_outscore_the_top(
        catalog in catalog_strategy(),
        order in order_strategy(),
        budget in budget_strategy(),
    ) {
        let preferences = UserPreferences::default().with_budget(budget);
        let picks = recommend(&catalog, &order, &preferences);
        let profile = FoodProfile::derive(&order);
        let scorer = PairingScorer::default();
        let top_ids: BTreeSet<u64> = picks.top.iter().map(|pick| pick.id).collect();

        if let Some(last) = picks.top.last() {
            for wine in catalog
                .iter()
                .filter(|wine| budget.contains(wine.price) && !top_ids.contains(&wine.id))
            {
                let score = scorer.score(wine, &profile, &preferences);
                prop_assert!(score <= last.score, "wine {} scored {score} above {}", wine.id, last.score);
            }
        } else {
            prop_assert!(catalog.iter().all(|wine| !budget.contains(wine.price)));
        }
    }

    /// Property: a swap is offered exactly when an eligible wine exists.
    #[test]
    fn swap_is_gated_by_threshold_and_grape(
        catalog in catalog_strategy(),
        order in order_strategy(),
        budget in budget_strategy(),
    ) {
        let preferences = UserPreferences::default().with_budget(budget);
        let picks = recommend(&catalog, &order, &preferences);
        let threshold = RecommenderConfig::default().swap_threshold;
        let top_grapes: BTreeSet<&str> = picks.top.iter().map(|pick| pick.wine.grape.as_str()).collect();
        let profile = FoodProfile::derive(&order);
        let scorer = PairingScorer::default();
        let eligible = catalog.iter().any(|wine| {
            budget.contains(wine.price)
                && !top_grapes.contains(wine.grape.as_str())
                && scorer.score(wine, &profile, &preferences) >= threshold
        });

        match &picks.swap {
            Some(swap) => {
                prop_assert!(swap.is_swap);
                prop_assert!(swap.score >= threshold);
                prop_assert!(!top_grapes.contains(swap.wine.grape.as_str()));
                prop_assert!(eligible);
            }
            None => prop_assert!(!eligible),
        }
    }
}
