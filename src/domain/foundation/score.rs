//! Bounded score value objects.
//!
//! `UnitScore` lives on `[0, 1]` (confidences, tone scores, risk scores),
//! `Valence` lives on `[-1, 1]` (sentiment, risk contributions).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0.0 and 1.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitScore(f64);

impl UnitScore {
    /// Zero.
    pub const ZERO: Self = Self(0.0);

    /// One.
    pub const ONE: Self = Self(1.0);

    /// Creates a new UnitScore, clamping to the valid range.
    ///
    /// NaN collapses to zero.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a UnitScore, returning error if out of range.
    pub fn try_new(field: &str, value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range(field, 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for UnitScore {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for UnitScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A signed value between -1.0 and 1.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Valence(f64);

impl Valence {
    /// Neutral valence.
    pub const NEUTRAL: Self = Self(0.0);

    /// Creates a new Valence, clamping to the valid range.
    ///
    /// NaN collapses to neutral.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::NEUTRAL;
        }
        Self(value.clamp(-1.0, 1.0))
    }

    /// Creates a Valence, returning error if out of range.
    pub fn try_new(field: &str, value: f64) -> Result<Self, ValidationError> {
        if !(-1.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range(field, -1.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Valence {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for Valence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_score_new_clamps() {
        assert_eq!(UnitScore::new(-0.2).value(), 0.0);
        assert_eq!(UnitScore::new(0.42).value(), 0.42);
        assert_eq!(UnitScore::new(1.7).value(), 1.0);
    }

    #[test]
    fn unit_score_nan_is_zero() {
        assert_eq!(UnitScore::new(f64::NAN), UnitScore::ZERO);
    }

    #[test]
    fn unit_score_try_new_rejects_out_of_range() {
        let result = UnitScore::try_new("confidence", 1.01);
        match result {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "confidence");
                assert_eq!(actual, 1.01);
            }
            _ => panic!("Expected OutOfRange error"),
        }
        assert!(UnitScore::try_new("confidence", 0.98).is_ok());
    }

    #[test]
    fn valence_new_clamps_both_sides() {
        assert_eq!(Valence::new(-3.0).value(), -1.0);
        assert_eq!(Valence::new(2.0).value(), 1.0);
        assert_eq!(Valence::new(-0.3).value(), -0.3);
    }

    #[test]
    fn valence_try_new_rejects_out_of_range() {
        assert!(Valence::try_new("risk_contribution", -1.2).is_err());
        assert!(Valence::try_new("risk_contribution", -0.3).is_ok());
    }

    #[test]
    fn scores_display_with_two_decimals() {
        assert_eq!(format!("{}", UnitScore::new(0.756)), "0.76");
        assert_eq!(format!("{}", Valence::new(-0.5)), "-0.50");
    }

    #[test]
    fn scores_serialize_transparently() {
        let json = serde_json::to_string(&UnitScore::new(0.75)).unwrap();
        assert_eq!(json, "0.75");
        let json = serde_json::to_string(&Valence::new(-0.25)).unwrap();
        assert_eq!(json, "-0.25");
    }
}
