//! Facade crate for the Sommelier wine pairing engine.
//!
//! This crate re-exports the core domain types and the default scorer, and
//! exposes the catalog recommender behind the `recommender` feature.
//!
//! # Examples
//! ```
//! use sommelier_engine::{
//!     CatalogRecommender, RecommendRequest, Recommender, SteakOrder, UserPreferences,
//!     seed_catalog,
//! };
//!
//! let catalog = seed_catalog();
//! let order = SteakOrder::default();
//! let preferences = UserPreferences::default();
//! let picks = CatalogRecommender::default()
//!     .recommend(&RecommendRequest::new(&catalog, &order, &preferences))
//!     .expect("seed catalog is valid");
//! assert_eq!(picks.top.len(), 3);
//! ```

#![forbid(unsafe_code)]

pub use sommelier_core::{
    AddOn, Attribute, Budget, Doneness, FoodProfile, LEVEL_RANGE, ParseVariantError,
    PreferencesError, RecommendError, RecommendRequest, Recommendations, Recommender, Scorer,
    SteakCut, SteakOrder, Structure, UserPreferences, Wine, WineError, WineRecommendation,
    seed_catalog,
};

pub use sommelier_scorer::{PairingScorer, ScoreBreakdown, ScoreWeights, ScoreWeightsError, explain};

#[cfg(feature = "recommender")]
pub use sommelier_recommender::{CatalogRecommender, PairingSession, RecommenderConfig};
