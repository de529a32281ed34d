//! Score wines against a food profile and the diner's preferences.
//!
//! The `Scorer` trait assigns a match percentage to a [`Wine`] given the
//! [`FoodProfile`] derived from an order and the diner's
//! [`UserPreferences`].

use crate::{FoodProfile, UserPreferences, Wine};

/// Upper bound of a reported match score.
pub const MAX_SCORE: f64 = 100.0;

/// Calculate a match score for a wine.
///
/// Higher scores indicate a better pairing. Implementations must be
/// thread-safe (`Send` + `Sync`) so a scorer can be shared between
/// recommenders. Scoring is infallible and deterministic: identical inputs
/// always produce the identical score.
///
/// Implementations must return finite values in `0.0..=100.0`; use
/// [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use sommelier_core::{FoodProfile, Scorer, SteakOrder, Structure, UserPreferences, Wine};
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(&self, _wine: &Wine, _profile: &FoodProfile, _prefs: &UserPreferences) -> f64 {
///         Self::sanitise(120.0)
///     }
/// }
///
/// # fn main() -> Result<(), sommelier_core::WineError> {
/// let structure = Structure::new(6, 6, 3, 2, 7, 5);
/// let wine = Wine::new(2, "Duckhorn", "Merlot", "Red", "Napa Valley, CA", 55.0, structure)?;
/// let profile = FoodProfile::derive(&SteakOrder::default());
/// assert_eq!(FlatScorer.score(&wine, &profile, &UserPreferences::default()), 100.0);
/// # Ok(())
/// # }
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `wine` according to `profile` and `preferences`.
    fn score(&self, wine: &Wine, profile: &FoodProfile, preferences: &UserPreferences) -> f64;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=100.0`.
    #[must_use]
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, MAX_SCORE)
    }
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(&self, wine: &Wine, profile: &FoodProfile, preferences: &UserPreferences) -> f64 {
        (**self).score(wine, profile, preferences)
    }
}
