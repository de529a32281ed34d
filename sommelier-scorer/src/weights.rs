//! Tunable point budgets for each scoring component.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Multipliers applied to each fit before summing.
///
/// Fits run from `0` to `10`, so each structural or harmony weight is a tenth
/// of that component's point budget. The preference weight applies to each
/// of the four tolerance fits (`0` to `1`), and the value weight is the
/// ceiling of the budget bonus. The defaults total 100 points:
/// 40 structural, 30 harmony, 20 preference and 10 value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier on the tannin fit.
    pub tannin: f64,
    /// Multiplier on the body fit.
    pub body: f64,
    /// Multiplier on the spice fit.
    pub spice: f64,
    /// Multiplier on the funk fit.
    pub funk: f64,
    /// Points per fully respected tolerance.
    pub preference: f64,
    /// Ceiling of the value bonus.
    pub value: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            tannin: 2.0,
            body: 2.0,
            spice: 1.5,
            funk: 1.5,
            preference: 5.0,
            value: 10.0,
        }
    }
}

/// Errors returned by [`ScoreWeights::validate`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScoreWeightsError {
    /// A weight was negative or not finite.
    #[error("{component} weight {weight} must be finite and non-negative")]
    InvalidWeight {
        /// Name of the component.
        component: &'static str,
        /// Weight supplied.
        weight: f64,
    },
    /// Every weight was zero, leaving nothing to score.
    #[error("at least one weight must be positive")]
    AllZero,
}

impl ScoreWeights {
    /// Check that every weight is usable.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when a weight is negative or not finite,
    /// or when all weights are zero.
    pub fn validate(&self) -> Result<(), ScoreWeightsError> {
        let components = [
            ("tannin", self.tannin),
            ("body", self.body),
            ("spice", self.spice),
            ("funk", self.funk),
            ("preference", self.preference),
            ("value", self.value),
        ];
        if let Some((component, weight)) = components
            .into_iter()
            .find(|(_, weight)| !weight.is_finite() || *weight < 0.0)
        {
            return Err(ScoreWeightsError::InvalidWeight { component, weight });
        }
        if components.iter().all(|(_, weight)| *weight == 0.0) {
            return Err(ScoreWeightsError::AllZero);
        }
        Ok(())
    }
}
