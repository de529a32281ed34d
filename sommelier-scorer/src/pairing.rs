//! Weighted pairing score combining structure, flavour, tolerance and value.
//!
//! The score sums four components and renormalises them to a percentage of
//! the points achievable for the request:
//!
//! 1. structural match: tannin against tannin need, body against fattiness;
//! 2. flavour harmony: spice and funk against the add-on adjusted levels;
//! 3. preference alignment: how well each bold attribute respects the
//!    diner's tolerance;
//! 4. value bonus: how far below the budget ceiling the wine is priced.
//!
//! The value bonus only applies when the budget range is positive. When it
//! is not, its ceiling is also left out of the achievable points, so a
//! zero-width budget neither rewards nor penalises any wine.
#![forbid(unsafe_code)]

use sommelier_core::{Budget, FoodProfile, Scorer, UserPreferences, Wine};

use crate::weights::{ScoreWeights, ScoreWeightsError};

/// Largest value of a single fit before weighting.
const MAX_FIT: f64 = 10.0;
/// Number of tolerance fits in the preference component.
const TOLERANCE_COUNT: f64 = 4.0;

/// Per-component points awarded to a wine.
///
/// Components are reported after weighting but before normalisation. The
/// value bonus is unclamped and may be negative for wines above the budget
/// ceiling or exceed its weight for wines below the floor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Tannin against the food's tannin need.
    pub tannin_fit: f64,
    /// Body against the cut's fattiness.
    pub body_fit: f64,
    /// Spice against the food's spice level.
    pub spice_fit: f64,
    /// Funk against the food's funk level.
    pub funk_fit: f64,
    /// Sum of the weighted tolerance fits.
    pub preference: f64,
    /// Budget bonus; `None` when the budget range is not positive.
    pub value_bonus: Option<f64>,
    /// Points achievable for this request.
    pub max_points: f64,
}

impl ScoreBreakdown {
    /// Structural match points.
    #[expect(clippy::float_arithmetic, reason = "component sums")]
    #[must_use]
    pub fn structural(&self) -> f64 {
        self.tannin_fit + self.body_fit
    }

    /// Flavour harmony points.
    #[expect(clippy::float_arithmetic, reason = "component sums")]
    #[must_use]
    pub fn harmony(&self) -> f64 {
        self.spice_fit + self.funk_fit
    }

    /// Sum of all awarded points.
    #[expect(clippy::float_arithmetic, reason = "component sums")]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.structural() + self.harmony() + self.preference + self.value_bonus.unwrap_or(0.0)
    }

    /// Points as a percentage of the achievable points, before clamping.
    ///
    /// Returns `0.0` when nothing is achievable.
    #[expect(clippy::float_arithmetic, reason = "normalising to a percentage")]
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.max_points <= 0.0 {
            return 0.0;
        }
        self.total() / self.max_points * 100.0
    }
}

/// How well a wine's `level` respects a diner's `tolerance`, in `0.0..=1.0`.
///
/// Levels at or below the tolerance fit fully; each point above costs a
/// tenth.
///
/// # Examples
/// ```
/// use sommelier_scorer::tolerance_fit;
///
/// assert_eq!(tolerance_fit(4, 5), 1.0);
/// assert!((tolerance_fit(8, 5) - 0.7).abs() < 1e-9);
/// assert_eq!(tolerance_fit(10, 0), 0.0);
/// ```
#[expect(clippy::float_arithmetic, reason = "fractional tolerance penalty")]
#[must_use]
pub fn tolerance_fit(level: u8, tolerance: u8) -> f64 {
    if level <= tolerance {
        return 1.0;
    }
    let excess = f64::from(level - tolerance);
    (1.0 - excess / 10.0).max(0.0)
}

#[expect(clippy::float_arithmetic, reason = "distance-based fit")]
fn fit(level: u8, target: f64, weight: f64) -> f64 {
    (MAX_FIT - (f64::from(level) - target).abs()).max(0.0) * weight
}

#[expect(clippy::float_arithmetic, reason = "price ratio within the budget")]
fn value_bonus(price: f64, budget: &Budget, weight: f64) -> Option<f64> {
    let range = budget.range();
    (range > 0.0).then(|| (budget.max - price) / range * weight)
}

/// Default [`Scorer`] for steak pairings.
///
/// # Examples
/// ```
/// use sommelier_core::{FoodProfile, SteakOrder, UserPreferences, seed_catalog};
/// use sommelier_scorer::PairingScorer;
///
/// let catalog = seed_catalog();
/// let profile = FoodProfile::derive(&SteakOrder::default());
/// let breakdown = PairingScorer::default()
///     .breakdown(&catalog[0], &profile, &UserPreferences::default());
/// assert!((breakdown.tannin_fit - 19.3).abs() < 1e-9);
/// assert_eq!(breakdown.max_points, 100.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PairingScorer {
    weights: ScoreWeights,
}

impl PairingScorer {
    /// Construct a scorer with custom weights.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when the weights fail validation.
    pub fn with_weights(weights: ScoreWeights) -> Result<Self, ScoreWeightsError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Weights in use.
    #[must_use]
    pub const fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Compute every component for `wine`.
    #[expect(clippy::float_arithmetic, reason = "weighted point budgets")]
    #[must_use]
    pub fn breakdown(
        &self,
        wine: &Wine,
        profile: &FoodProfile,
        preferences: &UserPreferences,
    ) -> ScoreBreakdown {
        let weights = &self.weights;
        let structure = &wine.structure;

        let tolerance_sum = tolerance_fit(structure.tannin, preferences.tannin_tolerance)
            + tolerance_fit(structure.oak, preferences.oak_tolerance)
            + tolerance_fit(structure.spice, preferences.spice_tolerance)
            + tolerance_fit(structure.funk, preferences.funk_tolerance);

        let value_bonus = value_bonus(wine.price, &preferences.budget, weights.value);
        let fit_points = MAX_FIT * (weights.tannin + weights.body + weights.spice + weights.funk);
        let max_points = fit_points
            + TOLERANCE_COUNT * weights.preference
            + value_bonus.map_or(0.0, |_| weights.value);

        ScoreBreakdown {
            tannin_fit: fit(structure.tannin, profile.tannin_need, weights.tannin),
            body_fit: fit(structure.body, f64::from(profile.fattiness), weights.body),
            spice_fit: fit(structure.spice, f64::from(profile.spice_level), weights.spice),
            funk_fit: fit(structure.funk, f64::from(profile.funk_level), weights.funk),
            preference: tolerance_sum * weights.preference,
            value_bonus,
            max_points,
        }
    }
}

impl Scorer for PairingScorer {
    fn score(&self, wine: &Wine, profile: &FoodProfile, preferences: &UserPreferences) -> f64 {
        Self::sanitise(self.breakdown(wine, profile, preferences).percentage())
    }
}
