//! `CatalogRecommender` ranking an in-memory catalog with a pluggable scorer.

use std::cmp::Ordering;

use sommelier_core::{
    FoodProfile, RecommendError, RecommendRequest, Recommendations, Recommender, Scorer,
    SteakOrder, Wine, WineRecommendation,
};
use sommelier_scorer::{PairingScorer, explain};

/// Configuration for [`CatalogRecommender`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommenderConfig {
    /// Number of top picks to return.
    pub top_n: usize,
    /// Lowest score a wine may have to be offered as a swap.
    pub swap_threshold: f64,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            top_n: 3,
            swap_threshold: 65.0,
        }
    }
}

/// Rationale attached to a swap suggestion.
///
/// # Examples
/// ```
/// use sommelier_core::{SteakOrder, seed_catalog};
/// use sommelier_recommender::swap_explanation;
///
/// let catalog = seed_catalog();
/// assert_eq!(
///     swap_explanation(&catalog[2], &SteakOrder::default()),
///     "If you want to mix it up, try this Zinfandel Blend \u{2013} it's a different style \
///      but still pairs beautifully with your Ribeye."
/// );
/// ```
#[must_use]
pub fn swap_explanation(wine: &Wine, order: &SteakOrder) -> String {
    format!(
        "If you want to mix it up, try this {} \u{2013} it's a different style but still pairs \
         beautifully with your {}.",
        wine.grape, order.cut
    )
}

/// Default recommender over a caller-supplied catalog.
///
/// Wines outside the budget are dropped, the rest are scored against a food
/// profile derived once per request and ranked by a stable descending sort,
/// so equal scores keep catalog order.
///
/// # Examples
/// ```
/// use sommelier_core::{RecommendRequest, Recommender, SteakOrder, UserPreferences, seed_catalog};
/// use sommelier_recommender::CatalogRecommender;
///
/// let catalog = seed_catalog();
/// let order = SteakOrder::default();
/// let preferences = UserPreferences::default();
/// let picks = CatalogRecommender::default()
///     .recommend(&RecommendRequest::new(&catalog, &order, &preferences))
///     .expect("seed catalog is valid");
/// let names: Vec<_> = picks.top.iter().map(|pick| pick.wine.name.as_str()).collect();
/// assert_eq!(names, ["Stag's Leap Artemis", "Duckhorn Merlot", "Caymus Cabernet"]);
/// assert_eq!(picks.swap.map(|swap| swap.wine.grape).as_deref(), Some("Zinfandel Blend"));
/// ```
#[derive(Debug, Clone)]
pub struct CatalogRecommender<S>
where
    S: Scorer,
{
    scorer: S,
    config: RecommenderConfig,
}

impl<S> CatalogRecommender<S>
where
    S: Scorer,
{
    /// Construct a recommender using default configuration.
    pub fn new(scorer: S) -> Self {
        Self::with_config(scorer, RecommenderConfig::default())
    }

    /// Construct a recommender with explicit configuration.
    pub const fn with_config(scorer: S, config: RecommenderConfig) -> Self {
        Self { scorer, config }
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Score and rank the affordable wines, best first.
    fn rank<'w>(&self, request: &RecommendRequest<'w>) -> Vec<(&'w Wine, f64)> {
        let budget = &request.preferences.budget;
        let profile = FoodProfile::derive(request.order);
        let mut ranked: Vec<(&Wine, f64)> = request
            .catalog
            .iter()
            .filter(|wine| budget.contains(wine.price))
            .map(|wine| {
                let score = self.scorer.score(wine, &profile, request.preferences);
                (wine, score)
            })
            .collect();

        ranked.sort_by(|(_, lhs_score), (_, rhs_score)| {
            rhs_score.partial_cmp(lhs_score).unwrap_or(Ordering::Equal)
        });
        ranked
    }

    /// First well-scoring wine whose grape is absent from the top picks.
    fn pick_swap<'w>(
        &self,
        ranked: &[(&'w Wine, f64)],
        top: &[(&'w Wine, f64)],
    ) -> Option<(&'w Wine, f64)> {
        ranked
            .iter()
            .filter(|(_, score)| *score >= self.config.swap_threshold)
            .find(|(candidate, _)| top.iter().all(|(pick, _)| pick.grape != candidate.grape))
            .copied()
    }
}

impl Default for CatalogRecommender<PairingScorer> {
    fn default() -> Self {
        Self::new(PairingScorer::default())
    }
}

impl<S> Recommender for CatalogRecommender<S>
where
    S: Scorer,
{
    fn recommend(&self, request: &RecommendRequest<'_>) -> Result<Recommendations, RecommendError> {
        request.validate()?;

        let ranked = self.rank(request);
        if ranked.is_empty() {
            let budget = &request.preferences.budget;
            log::info!(
                "no wine among {} fits the budget {}..={}",
                request.catalog.len(),
                budget.min,
                budget.max
            );
            return Ok(Recommendations::empty());
        }

        let top_count = self.config.top_n.min(ranked.len());
        let (top, _) = ranked.split_at(top_count);
        let swap = self.pick_swap(&ranked, top);
        log::debug!(
            "ranked {} affordable wines of {}; swap candidate: {:?}",
            ranked.len(),
            request.catalog.len(),
            swap.map(|(wine, _)| wine.id)
        );

        Ok(Recommendations {
            top: top
                .iter()
                .map(|&(wine, score)| {
                    let explanation = explain(wine, request.order, score);
                    WineRecommendation::top_pick(wine.clone(), score, explanation)
                })
                .collect(),
            swap: swap.map(|(wine, score)| {
                WineRecommendation::swap(wine.clone(), score, swap_explanation(wine, request.order))
            }),
        })
    }
}
