//! Caller-held pairing state: the order being built, the diner's
//! preferences and the last recommendations.

use sommelier_core::{
    RecommendError, RecommendRequest, Recommendations, Recommender, SteakOrder, UserPreferences,
    Wine,
};

/// State for one diner editing an order and refreshing recommendations.
///
/// The session never recomputes on its own; callers edit the order or
/// preferences and then call [`PairingSession::refresh`]. A failed refresh
/// leaves the previous result untouched.
///
/// # Examples
/// ```
/// use sommelier_core::{AddOn, seed_catalog};
/// use sommelier_recommender::{CatalogRecommender, PairingSession};
///
/// let catalog = seed_catalog();
/// let recommender = CatalogRecommender::default();
/// let mut session = PairingSession::new();
/// session.order_mut().toggle_add_on(AddOn::AuPoivre);
/// let picks = session.refresh(&recommender, &catalog).expect("seed catalog is valid");
/// assert_eq!(picks.top.len(), 3);
///
/// session.reset();
/// assert!(session.recommendations().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairingSession {
    order: SteakOrder,
    preferences: UserPreferences,
    recommendations: Recommendations,
}

impl PairingSession {
    /// Start with the default order and preferences and no result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing order and preferences.
    #[must_use]
    pub const fn with_order(order: SteakOrder, preferences: UserPreferences) -> Self {
        Self {
            order,
            preferences,
            recommendations: Recommendations::empty(),
        }
    }

    /// The order being paired.
    #[must_use]
    pub const fn order(&self) -> &SteakOrder {
        &self.order
    }

    /// Edit the order. The stored result is not recomputed.
    pub const fn order_mut(&mut self) -> &mut SteakOrder {
        &mut self.order
    }

    /// The diner's preferences.
    #[must_use]
    pub const fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    /// Edit the preferences. The stored result is not recomputed.
    pub const fn preferences_mut(&mut self) -> &mut UserPreferences {
        &mut self.preferences
    }

    /// Result of the last successful refresh.
    #[must_use]
    pub const fn recommendations(&self) -> &Recommendations {
        &self.recommendations
    }

    /// Recompute recommendations for the current order and preferences.
    ///
    /// The stored result is replaced only once the new one is complete.
    ///
    /// # Errors
    /// Returns [`RecommendError`] when the request fails validation; the
    /// previous result is kept.
    pub fn refresh<R>(
        &mut self,
        recommender: &R,
        catalog: &[Wine],
    ) -> Result<&Recommendations, RecommendError>
    where
        R: Recommender + ?Sized,
    {
        let request = RecommendRequest::new(catalog, &self.order, &self.preferences);
        let fresh = recommender.recommend(&request)?;
        self.recommendations = fresh;
        Ok(&self.recommendations)
    }

    /// Restore the default order and preferences and clear the result.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
