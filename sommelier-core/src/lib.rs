//! Core domain types for the Sommelier pairing engine.
//!
//! These models describe wines, steak orders and diner preferences, plus the
//! food profile derived from an order. Constructors that accept free-form
//! values return `Result` so invalid input surfaces before scoring.
//!
//! The crate also defines the two engine seams: [`Scorer`], which rates one
//! wine against a food profile, and [`Recommender`], which ranks a catalog.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod preferences;
pub mod profile;
pub mod recommendation;
pub mod scorer;
pub mod steak;
pub mod wine;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::seed_catalog;
pub use preferences::{Budget, PreferencesError, UserPreferences};
pub use profile::FoodProfile;
pub use recommendation::{
    RecommendError, RecommendRequest, Recommendations, Recommender, WineRecommendation,
};
pub use scorer::Scorer;
pub use steak::{AddOn, Doneness, ParseVariantError, SteakCut, SteakOrder};
pub use wine::{Attribute, LEVEL_RANGE, Structure, Wine, WineError};
