//! Test-only fixtures shared by unit, behaviour and property tests.

use std::collections::HashMap;

use crate::{
    Doneness, FoodProfile, Scorer, SteakCut, SteakOrder, Structure, UserPreferences, Wine,
};

/// `Scorer` returning preset scores keyed by wine id.
///
/// Wines without a preset score `0.0`. Useful for driving ranking and swap
/// selection without depending on the real scoring formula.
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    scores: HashMap<u64, f64>,
}

impl FixedScorer {
    /// Build a scorer from `(wine id, score)` pairs.
    pub fn new<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = (u64, f64)>,
    {
        Self {
            scores: scores.into_iter().collect(),
        }
    }
}

impl Scorer for FixedScorer {
    fn score(&self, wine: &Wine, _profile: &FoodProfile, _preferences: &UserPreferences) -> f64 {
        Self::sanitise(self.scores.get(&wine.id).copied().unwrap_or(0.0))
    }
}

/// Build a mid-structured wine with the given id, grape and price.
///
/// The name is derived from the id so assertions can tell wines apart.
#[must_use]
pub fn sample_wine(id: u64, grape: &str, price: f64) -> Wine {
    wine_with_structure(id, grape, price, Structure::new(5, 5, 5, 5, 5, 5))
}

/// Build a wine with an explicit structure.
#[must_use]
pub fn wine_with_structure(id: u64, grape: &str, price: f64, structure: Structure) -> Wine {
    Wine {
        id,
        name: format!("Wine {id}"),
        grape: grape.to_owned(),
        style: "Red".to_owned(),
        region: "Test Valley".to_owned(),
        price,
        vintage: None,
        structure,
    }
}

/// The reference order: ribeye, medium-rare, no add-ons.
#[must_use]
pub const fn ribeye_medium_rare() -> SteakOrder {
    SteakOrder::new(SteakCut::Ribeye, Doneness::MediumRare)
}
