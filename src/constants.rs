//! Scoring constants and numeric helpers
//!
//! All tunables for the scoring engine live here so the reward/penalty shape
//! can be adjusted in one place without touching the update algorithm.

/// Lower bound for every score tracked by the engine
pub const MIN_SCORE: f64 = 0.0;

/// Upper bound for every score tracked by the engine
pub const MAX_SCORE: f64 = 100.0;

/// Baseline score assigned before any quiz or assessment data exists
pub const DEFAULT_SCORE: f64 = 70.0;

/// Flat component of an improvement reward
pub const BASE_REWARD: f64 = 2.0;

/// Flat component of a mistake penalty (subtracted, always positive here)
pub const BASE_PENALTY: f64 = 3.0;

/// Severity contribution per point of sub-label severity
pub const SEVERITY_MULTIPLIER: f64 = 0.5;

/// Clamp a score into the valid [MIN_SCORE, MAX_SCORE] range
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(MIN_SCORE, MAX_SCORE)
}

/// Round to 1 decimal place (label scores)
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to 2 decimal places (sub-label scores, overall score, deltas)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_score_bounds() {
        assert_eq!(clamp_score(-5.0), MIN_SCORE);
        assert_eq!(clamp_score(104.2), MAX_SCORE);
        assert_eq!(clamp_score(55.5), 55.5);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round1(70.06), 70.1);
        assert_eq!(round1(70.04), 70.0);
        assert_eq!(round2(70.006), 70.01);
        assert_eq!(round2(69.994), 69.99);
    }
}
