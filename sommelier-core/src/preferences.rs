//! Diner preferences: tolerances for the four bold attributes plus a budget.

use thiserror::Error;

use crate::wine::{Attribute, LEVEL_RANGE};

const DEFAULT_TOLERANCE: u8 = 5;
const DEFAULT_BUDGET_MAX: f64 = 200.0;

/// Inclusive price range the diner is willing to pay.
///
/// # Examples
/// ```
/// use sommelier_core::Budget;
///
/// # fn main() -> Result<(), sommelier_core::PreferencesError> {
/// let budget = Budget::new(20.0, 80.0)?;
/// assert!(budget.contains(80.0));
/// assert!(!budget.contains(80.5));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Budget {
    /// Lowest acceptable price.
    pub min: f64,
    /// Highest acceptable price.
    pub max: f64,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: DEFAULT_BUDGET_MAX,
        }
    }
}

impl Budget {
    /// Validate and construct a [`Budget`].
    ///
    /// # Errors
    /// Returns [`PreferencesError`] when either bound is negative or not
    /// finite, or when `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, PreferencesError> {
        let budget = Self { min, max };
        budget.validate()?;
        Ok(budget)
    }

    /// Re-check the invariants enforced by [`Budget::new`].
    ///
    /// # Errors
    /// See [`Budget::new`].
    pub fn validate(&self) -> Result<(), PreferencesError> {
        for value in [self.min, self.max] {
            if !value.is_finite() || value < 0.0 {
                return Err(PreferencesError::InvalidBudget { value });
            }
        }
        if self.min > self.max {
            return Err(PreferencesError::InvertedBudget {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Width of the range, `max - min`.
    #[expect(clippy::float_arithmetic, reason = "budget width is a price difference")]
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Report whether `price` lies within the inclusive range.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        (self.min..=self.max).contains(&price)
    }
}

/// How much of each bold attribute the diner enjoys, plus their budget.
///
/// Tolerances are upper comfort bounds on the `1..=10` scale: a wine at or
/// below the tolerance is fully acceptable.
///
/// # Examples
/// ```
/// use sommelier_core::{Attribute, Budget, UserPreferences};
///
/// # fn main() -> Result<(), sommelier_core::PreferencesError> {
/// let preferences = UserPreferences::new(7, 5, 3, 2, Budget::new(0.0, 60.0)?)?;
/// assert_eq!(preferences.tolerance(Attribute::Tannin), Some(7));
/// assert_eq!(preferences.tolerance(Attribute::Body), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserPreferences {
    /// Tannin tolerance.
    pub tannin_tolerance: u8,
    /// Oak tolerance.
    pub oak_tolerance: u8,
    /// Spice tolerance.
    pub spice_tolerance: u8,
    /// Funk tolerance.
    pub funk_tolerance: u8,
    /// Acceptable price range.
    pub budget: Budget,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            tannin_tolerance: DEFAULT_TOLERANCE,
            oak_tolerance: DEFAULT_TOLERANCE,
            spice_tolerance: DEFAULT_TOLERANCE,
            funk_tolerance: DEFAULT_TOLERANCE,
            budget: Budget::default(),
        }
    }
}

/// Errors returned when validating [`UserPreferences`] or [`Budget`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PreferencesError {
    /// A tolerance fell outside `1..=10`.
    #[error("{attribute} tolerance {tolerance} is outside 1..=10")]
    ToleranceOutOfRange {
        /// Attribute the tolerance applies to.
        attribute: Attribute,
        /// Tolerance supplied.
        tolerance: u8,
    },
    /// A budget bound was negative or not finite.
    #[error("budget bound {value} must be a finite, non-negative amount")]
    InvalidBudget {
        /// Offending bound.
        value: f64,
    },
    /// The minimum budget exceeded the maximum.
    #[error("budget minimum {min} exceeds maximum {max}")]
    InvertedBudget {
        /// Minimum supplied.
        min: f64,
        /// Maximum supplied.
        max: f64,
    },
}

impl UserPreferences {
    /// Validate and construct [`UserPreferences`].
    ///
    /// # Errors
    /// Returns [`PreferencesError`] when a tolerance is off the scale or the
    /// budget is invalid.
    pub fn new(
        tannin_tolerance: u8,
        oak_tolerance: u8,
        spice_tolerance: u8,
        funk_tolerance: u8,
        budget: Budget,
    ) -> Result<Self, PreferencesError> {
        let preferences = Self {
            tannin_tolerance,
            oak_tolerance,
            spice_tolerance,
            funk_tolerance,
            budget,
        };
        preferences.validate()?;
        Ok(preferences)
    }

    /// Replace the budget while returning `self` for chaining.
    #[must_use]
    pub const fn with_budget(mut self, budget: Budget) -> Self {
        self.budget = budget;
        self
    }

    /// Return the tolerance for `attribute`.
    ///
    /// Body and acidity carry no tolerance and yield `None`.
    #[must_use]
    pub const fn tolerance(&self, attribute: Attribute) -> Option<u8> {
        match attribute {
            Attribute::Tannin => Some(self.tannin_tolerance),
            Attribute::Oak => Some(self.oak_tolerance),
            Attribute::Spice => Some(self.spice_tolerance),
            Attribute::Funk => Some(self.funk_tolerance),
            Attribute::Body | Attribute::Acidity => None,
        }
    }

    /// Re-check the invariants enforced by [`UserPreferences::new`].
    ///
    /// # Errors
    /// See [`UserPreferences::new`].
    pub fn validate(&self) -> Result<(), PreferencesError> {
        let tolerances = [
            (Attribute::Tannin, self.tannin_tolerance),
            (Attribute::Oak, self.oak_tolerance),
            (Attribute::Spice, self.spice_tolerance),
            (Attribute::Funk, self.funk_tolerance),
        ];
        if let Some((attribute, tolerance)) = tolerances
            .into_iter()
            .find(|(_, tolerance)| !LEVEL_RANGE.contains(tolerance))
        {
            return Err(PreferencesError::ToleranceOutOfRange {
                attribute,
                tolerance,
            });
        }
        self.budget.validate()
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests should fail fast when setup breaks")]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_match_the_menu() {
        let preferences = UserPreferences::default();
        assert_eq!(preferences.tannin_tolerance, 5);
        assert_eq!(preferences.funk_tolerance, 5);
        assert_eq!(preferences.budget, Budget { min: 0.0, max: 200.0 });
        assert!(preferences.validate().is_ok());
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(10.0, 10.0)]
    #[case(0.0, 300.0)]
    fn budget_accepts_ordered_bounds(#[case] min: f64, #[case] max: f64) {
        assert!(Budget::new(min, max).is_ok());
    }

    #[rstest]
    fn budget_rejects_inverted_bounds() {
        let err = Budget::new(50.0, 40.0).expect_err("inverted budget");
        assert_eq!(err, PreferencesError::InvertedBudget { min: 50.0, max: 40.0 });
    }

    #[rstest]
    #[case(-1.0, 10.0)]
    #[case(0.0, f64::INFINITY)]
    #[case(f64::NAN, 10.0)]
    fn budget_rejects_invalid_bounds(#[case] min: f64, #[case] max: f64) {
        let err = Budget::new(min, max).expect_err("invalid bound");
        assert!(matches!(err, PreferencesError::InvalidBudget { .. }));
    }

    #[rstest]
    #[case(0, 5, 5, 5, Attribute::Tannin)]
    #[case(5, 11, 5, 5, Attribute::Oak)]
    #[case(5, 5, 5, 0, Attribute::Funk)]
    fn rejects_off_scale_tolerances(
        #[case] tannin: u8,
        #[case] oak: u8,
        #[case] spice: u8,
        #[case] funk: u8,
        #[case] expected: Attribute,
    ) {
        let err = UserPreferences::new(tannin, oak, spice, funk, Budget::default())
            .expect_err("off-scale tolerance");
        match err {
            PreferencesError::ToleranceOutOfRange { attribute, .. } => {
                assert_eq!(attribute, expected);
            }
            other => panic!("expected ToleranceOutOfRange, found {other:?}"),
        }
    }

    #[rstest]
    fn budget_bounds_are_inclusive() {
        let budget = Budget::new(48.0, 65.0).expect("valid budget");
        assert!(budget.contains(48.0));
        assert!(budget.contains(65.0));
        assert!(!budget.contains(47.99));
        assert_eq!(budget.range(), 17.0);
    }
}
