//! Recommendation requests, results and the `Recommender` seam.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::{PreferencesError, SteakOrder, UserPreferences, Wine, WineError};

/// A wine offered to the diner, with its score and rationale.
///
/// # Examples
/// ```
/// use sommelier_core::{Structure, Wine, WineRecommendation};
///
/// # fn main() -> Result<(), sommelier_core::WineError> {
/// let wine = Wine::new(3, "Ridge", "Zinfandel Blend", "Red", "Sonoma, CA", 48.0,
///     Structure::new(7, 5, 8, 3, 8, 6))?;
/// let pick = WineRecommendation::top_pick(wine, 75.3, "This pairs really well!".into());
/// assert_eq!(pick.id, 3);
/// assert_eq!(pick.score_label(), "75% Match");
/// assert!(!pick.is_swap);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WineRecommendation {
    /// Identity of the recommendation; the recommended wine's id.
    pub id: u64,
    /// The recommended wine.
    pub wine: Wine,
    /// Match score in `0.0..=100.0`.
    pub score: f64,
    /// Short natural-language rationale.
    pub explanation: String,
    /// Whether this is the alternative-grape suggestion rather than a top pick.
    pub is_swap: bool,
}

impl WineRecommendation {
    /// Wrap a ranked top pick.
    #[must_use]
    pub const fn top_pick(wine: Wine, score: f64, explanation: String) -> Self {
        Self {
            id: wine.id,
            wine,
            score,
            explanation,
            is_swap: false,
        }
    }

    /// Wrap a swap suggestion.
    #[must_use]
    pub const fn swap(wine: Wine, score: f64, explanation: String) -> Self {
        Self {
            id: wine.id,
            wine,
            score,
            explanation,
            is_swap: true,
        }
    }

    /// Render the score as a whole-number percentage, e.g. `"85% Match"`.
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{:.0}% Match", self.score)
    }

    /// Convert the score to a rating out of five stars.
    #[expect(
        clippy::float_arithmetic,
        reason = "star rating rescales the percentage"
    )]
    #[must_use]
    pub fn star_rating(&self) -> f64 {
        self.score / 20.0
    }
}

/// Outcome of a recommendation pass.
///
/// `top` is ordered by descending score; ties keep catalog order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendations {
    /// Best matches, at most the recommender's configured limit.
    pub top: Vec<WineRecommendation>,
    /// Alternative grape worth trying, when one scores well enough.
    pub swap: Option<WineRecommendation>,
}

impl Recommendations {
    /// No affordable matches.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            top: Vec::new(),
            swap: None,
        }
    }

    /// Report whether neither a top pick nor a swap was produced.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.top.is_empty() && self.swap.is_none()
    }
}

/// Inputs for one recommendation pass.
///
/// The request borrows everything; recommenders never retain references
/// across calls.
#[derive(Debug, Clone, Copy)]
pub struct RecommendRequest<'a> {
    /// Wines to choose from, in catalog order.
    pub catalog: &'a [Wine],
    /// The steak being paired.
    pub order: &'a SteakOrder,
    /// The diner's tolerances and budget.
    pub preferences: &'a UserPreferences,
}

impl<'a> RecommendRequest<'a> {
    /// Bundle the inputs for a recommendation pass.
    #[must_use]
    pub const fn new(
        catalog: &'a [Wine],
        order: &'a SteakOrder,
        preferences: &'a UserPreferences,
    ) -> Self {
        Self {
            catalog,
            order,
            preferences,
        }
    }

    /// Check the preferences and every catalog entry.
    ///
    /// Wine ids double as recommendation ids, so they must be unique within
    /// the catalog.
    ///
    /// # Errors
    /// Returns [`RecommendError`] describing the first invalid input.
    pub fn validate(&self) -> Result<(), RecommendError> {
        self.preferences.validate()?;
        let mut seen = BTreeSet::new();
        self.catalog.iter().try_for_each(|wine| {
            wine.validate()
                .map_err(|source| RecommendError::InvalidWine {
                    id: wine.id,
                    source,
                })?;
            if seen.insert(wine.id) {
                Ok(())
            } else {
                Err(RecommendError::DuplicateWine { id: wine.id })
            }
        })
    }
}

/// Errors returned by [`Recommender::recommend`].
///
/// An empty result is not an error; these only flag malformed input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    /// The preferences violated their invariants.
    #[error("invalid preferences: {0}")]
    InvalidPreferences(#[from] PreferencesError),
    /// A catalog entry violated its invariants.
    #[error("catalog wine {id} is invalid: {source}")]
    InvalidWine {
        /// Identifier of the offending wine.
        id: u64,
        /// Underlying validation failure.
        #[source]
        source: WineError,
    },
    /// Two catalog entries shared an id.
    #[error("catalog lists wine id {id} more than once")]
    DuplicateWine {
        /// The repeated identifier.
        id: u64,
    },
}

/// Rank a catalog for a steak order.
///
/// Implementations are stateless between calls and must be `Send + Sync`.
pub trait Recommender: Send + Sync {
    /// Produce ranked picks and an optional swap suggestion.
    ///
    /// # Errors
    /// Returns [`RecommendError`] when the request fails validation.
    fn recommend(&self, request: &RecommendRequest<'_>) -> Result<Recommendations, RecommendError>;
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests should fail fast when setup breaks")]
mod tests {
    use super::*;
    use crate::Structure;
    use rstest::{fixture, rstest};

    struct EchoRecommender;

    impl Recommender for EchoRecommender {
        fn recommend(
            &self,
            request: &RecommendRequest<'_>,
        ) -> Result<Recommendations, RecommendError> {
            request.validate()?;
            Ok(Recommendations {
                top: request
                    .catalog
                    .iter()
                    .cloned()
                    .map(|wine| WineRecommendation::top_pick(wine, 50.0, String::new()))
                    .collect(),
                swap: None,
            })
        }
    }

    #[fixture]
    fn wine() -> Wine {
        Wine::new(
            7,
            "House Red",
            "Merlot",
            "Red",
            "Somewhere",
            20.0,
            Structure::new(5, 5, 5, 5, 5, 5),
        )
        .expect("valid wine")
    }

    #[rstest]
    fn returns_recommendations_for_valid_request(wine: Wine) {
        let catalog = [wine];
        let order = SteakOrder::default();
        let preferences = UserPreferences::default();
        let request = RecommendRequest::new(&catalog, &order, &preferences);
        let result = EchoRecommender.recommend(&request).expect("valid request");
        assert_eq!(result.top.len(), 1);
    }

    #[rstest]
    fn rejects_inverted_budget(wine: Wine) {
        let catalog = [wine];
        let order = SteakOrder::default();
        let mut preferences = UserPreferences::default();
        preferences.budget.min = 300.0;
        let request = RecommendRequest::new(&catalog, &order, &preferences);
        let err = EchoRecommender.recommend(&request).expect_err("inverted budget");
        assert!(matches!(err, RecommendError::InvalidPreferences(_)));
    }

    #[rstest]
    fn rejects_corrupted_wine(mut wine: Wine) {
        wine.structure.oak = 0;
        let catalog = [wine];
        let order = SteakOrder::default();
        let preferences = UserPreferences::default();
        let request = RecommendRequest::new(&catalog, &order, &preferences);
        let err = EchoRecommender.recommend(&request).expect_err("bad wine");
        assert!(matches!(err, RecommendError::InvalidWine { id: 7, .. }));
    }

    #[rstest]
    fn rejects_repeated_wine_id(wine: Wine) {
        let twin = Wine {
            name: "House Red Reserve".into(),
            ..wine.clone()
        };
        let catalog = [wine, twin];
        let order = SteakOrder::default();
        let preferences = UserPreferences::default();
        let request = RecommendRequest::new(&catalog, &order, &preferences);
        let err = EchoRecommender.recommend(&request).expect_err("repeated id");
        assert_eq!(err, RecommendError::DuplicateWine { id: 7 });
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "test compares floating point values")]
    fn swap_wrapper_sets_flag(wine: Wine) {
        let swap = WineRecommendation::swap(wine, 70.0, "Try it.".into());
        assert!(swap.is_swap);
        assert_eq!(swap.id, 7);
        assert!((swap.star_rating() - 3.5).abs() < 1e-9);
    }

    #[rstest]
    #[case(84.55, "85% Match")]
    #[case(0.0, "0% Match")]
    #[case(100.0, "100% Match")]
    fn score_label_rounds_to_whole_percent(wine: Wine, #[case] score: f64, #[case] expected: &str) {
        let pick = WineRecommendation::top_pick(wine, score, String::new());
        assert_eq!(pick.score_label(), expected);
    }

    #[rstest]
    fn empty_has_nothing() {
        assert!(Recommendations::empty().is_empty());
        assert_eq!(Recommendations::default(), Recommendations::empty());
    }
}
