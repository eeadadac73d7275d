//! Severity-weighted aggregation
//!
//! The single source of truth for effective scores and weighted means. Both
//! the baseline initializer and the incremental updater go through these
//! functions; label scores and the overall score therefore always agree on
//! the fallback rule for unassessed sub-labels.

use crate::constants::{round1, round2, DEFAULT_SCORE};
use crate::profile::UserScores;
use crate::taxonomy::{self, Label, SubLabel};

/// Effective score of a sub-label: its assessed value if present, else the
/// parent label's current score.
pub fn effective_score(profile: &UserScores, sublabel: &SubLabel) -> f64 {
    match profile.sub_label_scores.get(sublabel.id) {
        Some(score) => *score,
        None => profile.label_score(sublabel.label),
    }
}

/// Severity-weighted mean over one label's sub-labels, rounded to 1 decimal.
pub fn label_score(profile: &UserScores, label: Label) -> f64 {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for sublabel in taxonomy::sublabels_for(label) {
        let weight = f64::from(sublabel.severity);
        weighted_sum += effective_score(profile, sublabel) * weight;
        total_weight += weight;
    }

    if total_weight > 0.0 {
        round1(weighted_sum / total_weight)
    } else {
        DEFAULT_SCORE
    }
}

/// Severity-weighted mean over the full taxonomy, rounded to 2 decimals.
///
/// Formula: `round(Σ(score_i × severity_i) / Σ(severity_i), 2)`, where each
/// score is the sub-label's effective score.
pub fn overall_score(profile: &UserScores) -> f64 {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for sublabel in taxonomy::all_sublabels() {
        let weight = f64::from(sublabel.severity);
        weighted_sum += effective_score(profile, sublabel) * weight;
        total_weight += weight;
    }

    if total_weight > 0.0 {
        round2(weighted_sum / total_weight)
    } else {
        DEFAULT_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::find_sublabel;

    #[test]
    fn test_effective_score_prefers_assessed_value() {
        let mut profile = UserScores::new();
        let sublabel = find_sublabel("impulsivity").unwrap();

        assert_eq!(effective_score(&profile, sublabel), DEFAULT_SCORE);

        profile.sub_label_scores.insert("impulsivity".to_string(), 42.5);
        assert_eq!(effective_score(&profile, sublabel), 42.5);
    }

    #[test]
    fn test_effective_score_falls_back_to_parent_label() {
        let mut profile = UserScores::new();
        profile.label_scores.insert(Label::EmotionalMastery, 55.0);

        let sublabel = find_sublabel("mood_volatility").unwrap();
        assert_eq!(effective_score(&profile, sublabel), 55.0);
    }

    #[test]
    fn test_overall_score_of_fresh_profile_is_default() {
        // Every effective score falls back to DEFAULT_SCORE, so the
        // weighted mean collapses to it exactly.
        let profile = UserScores::new();
        assert_eq!(overall_score(&profile), DEFAULT_SCORE);
    }

    #[test]
    fn test_overall_score_is_idempotent() {
        let mut profile = UserScores::new();
        profile.sub_label_scores.insert("catastrophizing".to_string(), 31.0);

        let first = overall_score(&profile);
        let second = overall_score(&profile);
        assert_eq!(first, second);
    }

    #[test]
    fn test_label_score_weights_by_severity() {
        let mut profile = UserScores::new();
        profile.label_scores.insert(Label::EthicalMoral, 70.0);
        profile
            .sub_label_scores
            .insert("cruelty_and_callousness".to_string(), 0.0);

        // One severity-9 sub-label at 0 against nine others still at 70:
        // (0*9 + 70*(72-9)) / 72, rounded to 1 decimal
        let total: f64 = crate::taxonomy::sublabels_for(Label::EthicalMoral)
            .iter()
            .map(|s| f64::from(s.severity))
            .sum();
        let expected = crate::constants::round1(70.0 * (total - 9.0) / total);
        assert_eq!(label_score(&profile, Label::EthicalMoral), expected);
    }

    #[test]
    fn test_single_assessed_sublabel_moves_overall() {
        let mut profile = UserScores::new();
        let baseline = overall_score(&profile);

        profile.sub_label_scores.insert("substance_misuse".to_string(), 10.0);
        let after = overall_score(&profile);

        assert!(after < baseline);
    }
}
