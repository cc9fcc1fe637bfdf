//! Score normalization and tiering.
//!
//! Judge models report scores in whatever convention their grading prompt
//! suggested: a 0.0-1.0 fraction, a 1-10 rubric, or a percentage.
//! Downstream aggregation and display want a single scale, so every raw
//! score funnels through [`normalize_score_to_pct`] first.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Result};

/// Map a raw score onto the canonical 0-100 percentage scale.
///
/// The convention is inferred from the value's range, checked in order:
/// negative values clamp to 0, values up to 1.0 are read as a fraction,
/// values up to 10.0 as a 1-10 rubric (1 maps to 0%, 10 to 100%, linear in
/// between), values up to 100.0 pass through unchanged, and anything larger
/// clamps to 100.
///
/// A value of exactly `1.0` is read as a full-scale fraction, not the
/// rubric minimum: the fraction rule is checked first. Callers relying on
/// rubric semantics at the boundary must convert before calling.
///
/// # Errors
///
/// Returns [`EvalError::NonFiniteScore`] for NaN and infinite inputs.
/// Every finite input succeeds and yields a value in `[0.0, 100.0]`.
pub fn normalize_score_to_pct(score: f64) -> Result<f64> {
    if !score.is_finite() {
        return Err(EvalError::NonFiniteScore(score));
    }

    let pct = if score < 0.0 {
        0.0
    } else if score <= 1.0 {
        score * 100.0
    } else if score <= 10.0 {
        (score - 1.0) / 9.0 * 100.0
    } else if score <= 100.0 {
        score
    } else {
        100.0
    };

    Ok(pct)
}

/// Mean of an evaluation's per-dimension sub-scores on the normalized
/// scale, or `None` for an empty map.
///
/// Sub-scores in the same response may use different conventions; each is
/// normalized independently before averaging.
pub fn mean_dimension_pct(dimensions: &HashMap<String, f64>) -> Result<Option<f64>> {
    if dimensions.is_empty() {
        return Ok(None);
    }

    let mut total = 0.0;
    for value in dimensions.values() {
        total += normalize_score_to_pct(*value)?;
    }

    Ok(Some(total / dimensions.len() as f64))
}

/// Display bucket for a normalized score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreTier {
    Excellent,
    Good,
    Acceptable,
    Poor,
}

impl ScoreTier {
    pub fn from_pct(pct: f64) -> Self {
        if pct >= 90.0 {
            ScoreTier::Excellent
        } else if pct >= 70.0 {
            ScoreTier::Good
        } else if pct >= 50.0 {
            ScoreTier::Acceptable
        } else {
            ScoreTier::Poor
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreTier::Excellent => write!(f, "Excellent"),
            ScoreTier::Good => write!(f, "Good"),
            ScoreTier::Acceptable => write!(f, "Acceptable"),
            ScoreTier::Poor => write!(f, "Poor"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_fraction() {
        assert_eq!(normalize_score_to_pct(0.0).unwrap(), 0.0);
        assert_eq!(normalize_score_to_pct(0.5).unwrap(), 50.0);
        assert_eq!(normalize_score_to_pct(0.85).unwrap(), 85.0);
    }

    #[test]
    fn test_normalize_fraction_wins_boundary() {
        // 1.0 is ambiguous between "full fraction" and "rubric minimum";
        // the fraction rule matches first.
        assert_eq!(normalize_score_to_pct(1.0).unwrap(), 100.0);
    }

    #[test]
    fn test_normalize_rubric() {
        assert_eq!(normalize_score_to_pct(5.5).unwrap(), 50.0);
        assert_eq!(normalize_score_to_pct(10.0).unwrap(), 100.0);
        let low = normalize_score_to_pct(1.000001).unwrap();
        assert!(low > 0.0 && low < 0.001);
    }

    #[test]
    fn test_normalize_percentage_passthrough() {
        assert_eq!(normalize_score_to_pct(75.0).unwrap(), 75.0);
        assert_eq!(normalize_score_to_pct(10.5).unwrap(), 10.5);
        assert_eq!(normalize_score_to_pct(100.0).unwrap(), 100.0);
    }

    #[test]
    fn test_normalize_clamps_negative() {
        assert_eq!(normalize_score_to_pct(-5.0).unwrap(), 0.0);
        assert_eq!(normalize_score_to_pct(-100.0).unwrap(), 0.0);
        assert_eq!(normalize_score_to_pct(-0.001).unwrap(), 0.0);
    }

    #[test]
    fn test_normalize_clamps_over_scale() {
        assert_eq!(normalize_score_to_pct(150.0).unwrap(), 100.0);
        assert_eq!(normalize_score_to_pct(100.001).unwrap(), 100.0);
    }

    #[test]
    fn test_normalize_rejects_non_finite() {
        assert!(matches!(
            normalize_score_to_pct(f64::NAN),
            Err(EvalError::NonFiniteScore(_))
        ));
        assert!(matches!(
            normalize_score_to_pct(f64::INFINITY),
            Err(EvalError::NonFiniteScore(_))
        ));
        assert!(matches!(
            normalize_score_to_pct(f64::NEG_INFINITY),
            Err(EvalError::NonFiniteScore(_))
        ));
    }

    #[test]
    fn test_normalize_idempotent_on_percentages() {
        // Values already in percentage range pass through unchanged, so a
        // second normalization is a no-op.
        for pct in [10.5, 25.0, 50.0, 99.9, 100.0] {
            let once = normalize_score_to_pct(pct).unwrap();
            assert_eq!(once, pct);
            assert_eq!(normalize_score_to_pct(once).unwrap(), once);
        }
    }

    #[test]
    fn test_normalize_monotonic_within_segments() {
        let segments: [&[f64]; 4] = [
            &[-100.0, -5.0, -0.001],
            &[0.0, 0.25, 0.5, 0.99, 1.0],
            &[1.001, 2.0, 5.5, 9.0, 10.0],
            &[10.001, 25.0, 75.0, 100.0],
        ];
        for segment in segments {
            let mut last = f64::NEG_INFINITY;
            for score in segment {
                let pct = normalize_score_to_pct(*score).unwrap();
                assert!(pct >= last, "not monotonic at {}", score);
                last = pct;
            }
        }
    }

    #[test]
    fn test_mean_dimension_pct_empty() {
        assert_eq!(mean_dimension_pct(&HashMap::new()).unwrap(), None);
    }

    #[test]
    fn test_mean_dimension_pct_mixed_conventions() {
        let dimensions = HashMap::from([
            ("clarity".to_string(), 0.9),
            ("specificity".to_string(), 5.5),
        ]);
        // 0.9 -> 90%, 5.5 -> 50%
        assert_eq!(mean_dimension_pct(&dimensions).unwrap(), Some(70.0));
    }

    #[test]
    fn test_mean_dimension_pct_non_finite() {
        let dimensions = HashMap::from([("clarity".to_string(), f64::NAN)]);
        assert!(mean_dimension_pct(&dimensions).is_err());
    }

    #[test]
    fn test_score_tier_excellent() {
        assert_eq!(ScoreTier::from_pct(95.0), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_pct(90.0), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_pct(100.0), ScoreTier::Excellent);
    }

    #[test]
    fn test_score_tier_good() {
        assert_eq!(ScoreTier::from_pct(85.0), ScoreTier::Good);
        assert_eq!(ScoreTier::from_pct(70.0), ScoreTier::Good);
    }

    #[test]
    fn test_score_tier_acceptable() {
        assert_eq!(ScoreTier::from_pct(65.0), ScoreTier::Acceptable);
        assert_eq!(ScoreTier::from_pct(50.0), ScoreTier::Acceptable);
    }

    #[test]
    fn test_score_tier_poor() {
        assert_eq!(ScoreTier::from_pct(45.0), ScoreTier::Poor);
        assert_eq!(ScoreTier::from_pct(0.0), ScoreTier::Poor);
    }

    #[test]
    fn test_score_tier_boundary_cases() {
        assert_eq!(ScoreTier::from_pct(89.99), ScoreTier::Good);
        assert_eq!(ScoreTier::from_pct(69.99), ScoreTier::Acceptable);
        assert_eq!(ScoreTier::from_pct(49.99), ScoreTier::Poor);
    }

    #[test]
    fn test_score_tier_display() {
        assert_eq!(format!("{}", ScoreTier::Excellent), "Excellent");
        assert_eq!(format!("{}", ScoreTier::Good), "Good");
        assert_eq!(format!("{}", ScoreTier::Acceptable), "Acceptable");
        assert_eq!(format!("{}", ScoreTier::Poor), "Poor");
    }
}
