//! Catalog ranking for Sommelier steak pairings.
//!
//! This crate provides [`CatalogRecommender`], the default implementation of
//! the [`Recommender`](sommelier_core::Recommender) trait. It filters a
//! catalog to the diner's budget, scores every affordable wine with a
//! pluggable [`Scorer`](sommelier_core::Scorer), keeps the best few as top
//! picks and looks further down the ranking for a well-scoring wine of a
//! different grape to offer as a swap.
//!
//! [`PairingSession`] holds the order, preferences and last result for a
//! caller that edits an order over time and refreshes recommendations.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod session;

pub use engine::{CatalogRecommender, RecommenderConfig, swap_explanation};
pub use session::PairingSession;
