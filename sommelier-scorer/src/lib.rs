//! Scoring and rationale utilities for Sommelier wine pairings.
//!
//! The crate provides two complementary capabilities:
//! - **Pairing scores** rate a wine against the food profile derived from a
//!   steak order and the diner's tolerances and budget. [`PairingScorer`]
//!   implements the [`Scorer`](sommelier_core::Scorer) trait so recommenders
//!   can plug it in, and [`PairingScorer::breakdown`] exposes each weighted
//!   component for auditing.
//! - **Explanations** turn a scored wine into a short rationale of at most
//!   three sentences via [`explain`].
//!
//! # Examples
//!
//! ```
//! use sommelier_core::{FoodProfile, Scorer, SteakOrder, UserPreferences, seed_catalog};
//! use sommelier_scorer::{PairingScorer, explain};
//!
//! let catalog = seed_catalog();
//! let order = SteakOrder::default();
//! let profile = FoodProfile::derive(&order);
//! let artemis = &catalog[0];
//! let score = PairingScorer::default().score(artemis, &profile, &UserPreferences::default());
//! assert!((score - 84.55).abs() < 1e-9);
//! assert!(explain(artemis, &order, score).starts_with("This pairs really well!"));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod explain;
mod pairing;
mod weights;

pub use explain::{
    FANTASTIC_THRESHOLD, MAX_SENTENCES, STRONG_THRESHOLD, explain, style_descriptor,
};
pub use pairing::{PairingScorer, ScoreBreakdown, tolerance_fit};
pub use weights::{ScoreWeights, ScoreWeightsError};
