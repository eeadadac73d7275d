//! Incremental score updates
//!
//! Applies one classifier event to a profile: the sub-label score moves by a
//! severity-weighted step, its parent label is recomputed as a weighted mean,
//! and a new history point records the overall-score delta. The three writes
//! happen inside one call, so callers never observe a half-applied update.

use crate::constants::{
    clamp_score, round2, BASE_PENALTY, BASE_REWARD, DEFAULT_SCORE, SEVERITY_MULTIPLIER,
};
use crate::error::ScoreError;
use crate::profile::{AssessmentEvent, ChartPoint, UserScores};
use crate::scoring::{effective_score, label_score, overall_score};
use crate::taxonomy;
use chrono::Utc;

/// Apply one assessment event to the profile.
///
/// The step size is `(base + severity × multiplier) × magnitude`, added for
/// improvements and subtracted for mistakes, with the result clamped to
/// [0, 100]. Magnitude is taken at face value; only the resulting score is
/// clamped. An unknown sub-label fails with `UnknownSubLabel` and leaves the
/// profile untouched.
pub fn apply_assessment(
    profile: &mut UserScores,
    event: &AssessmentEvent,
) -> Result<(), ScoreError> {
    let sublabel = taxonomy::find_sublabel(&event.sub_label)
        .ok_or_else(|| ScoreError::UnknownSubLabel(event.sub_label.clone()))?;

    let current = effective_score(profile, sublabel);
    let severity = f64::from(sublabel.severity);

    let new_score = if event.is_improvement {
        let change = (BASE_REWARD + severity * SEVERITY_MULTIPLIER) * event.magnitude;
        clamp_score(current + change)
    } else {
        let change = (BASE_PENALTY + severity * SEVERITY_MULTIPLIER) * event.magnitude;
        clamp_score(current - change)
    };

    profile
        .sub_label_scores
        .insert(sublabel.id.to_string(), round2(new_score));

    // Recompute the whole parent label, not just the touched sub-label
    let recomputed = label_score(profile, sublabel.label);
    profile.label_scores.insert(sublabel.label, recomputed);

    let previous_overall = profile
        .history
        .last()
        .map(|point| point.overall_score)
        .unwrap_or(DEFAULT_SCORE);
    let new_overall = overall_score(profile);

    profile.history.push(ChartPoint {
        timestamp: Utc::now(),
        overall_score: new_overall,
        delta: round2(new_overall - previous_overall),
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Label;
    use pretty_assertions::assert_eq;

    fn event(sub_label: &str, is_improvement: bool, magnitude: f64) -> AssessmentEvent {
        AssessmentEvent {
            sub_label: sub_label.to_string(),
            is_improvement,
            magnitude,
        }
    }

    #[test]
    fn test_improvement_step_matches_formula() {
        let mut profile = UserScores::new();
        profile.label_scores.insert(Label::EmotionalMastery, 50.0);

        // anger_management has severity 6; change = (2.0 + 6*0.5) * 1.0 = 5.0
        apply_assessment(&mut profile, &event("anger_management", true, 1.0)).unwrap();

        assert_eq!(profile.sub_label_scores["anger_management"], 55.0);
    }

    #[test]
    fn test_penalty_step_matches_formula() {
        let mut profile = UserScores::new();
        profile.label_scores.insert(Label::EmotionalMastery, 50.0);

        // change = (3.0 + 6*0.5) * 0.5 = 3.0, subtracted
        apply_assessment(&mut profile, &event("anger_management", false, 0.5)).unwrap();

        assert_eq!(profile.sub_label_scores["anger_management"], 47.0);
    }

    #[test]
    fn test_unassessed_sublabel_starts_from_parent_label() {
        let mut profile = UserScores::new();
        profile.label_scores.insert(Label::PhysicalLifestyle, 40.0);

        // Falls back to 40.0, not the global default of 70.0
        apply_assessment(&mut profile, &event("sleep_neglect", true, 1.0)).unwrap();

        // severity 4: change = 2.0 + 4*0.5 = 4.0
        assert_eq!(profile.sub_label_scores["sleep_neglect"], 44.0);
    }

    #[test]
    fn test_scores_stay_clamped() {
        let mut profile = UserScores::new();
        profile.label_scores.insert(Label::EthicalMoral, 2.0);

        for _ in 0..10 {
            apply_assessment(&mut profile, &event("cruelty_and_callousness", false, 1.0)).unwrap();
        }
        assert_eq!(profile.sub_label_scores["cruelty_and_callousness"], 0.0);

        for _ in 0..30 {
            apply_assessment(&mut profile, &event("cruelty_and_callousness", true, 1.0)).unwrap();
        }
        assert_eq!(profile.sub_label_scores["cruelty_and_callousness"], 100.0);

        for (_, score) in &profile.sub_label_scores {
            assert!((0.0..=100.0).contains(score));
        }
        for label in Label::ALL {
            assert!((0.0..=100.0).contains(&profile.label_score(label)));
        }
    }

    #[test]
    fn test_reward_never_decreases_and_penalty_never_increases() {
        let mut profile = UserScores::new();
        profile.label_scores.insert(Label::IdentityGrowth, 50.0);

        apply_assessment(&mut profile, &event("fixed_mindset", true, 0.3)).unwrap();
        let after_reward = profile.sub_label_scores["fixed_mindset"];
        assert!(after_reward >= 50.0);

        apply_assessment(&mut profile, &event("fixed_mindset", false, 0.3)).unwrap();
        assert!(profile.sub_label_scores["fixed_mindset"] <= after_reward);
    }

    #[test]
    fn test_parent_label_recomputed_as_weighted_mean() {
        let mut profile = UserScores::new();

        apply_assessment(&mut profile, &event("projection", false, 1.0)).unwrap();

        let expected = crate::scoring::label_score(&profile, Label::CognitiveClarity);
        assert_eq!(profile.label_score(Label::CognitiveClarity), expected);
        assert!(profile.label_score(Label::CognitiveClarity) < DEFAULT_SCORE);
    }

    #[test]
    fn test_history_delta_chain() {
        let mut profile = UserScores::new();

        apply_assessment(&mut profile, &event("procrastination", false, 1.0)).unwrap();
        apply_assessment(&mut profile, &event("procrastination", false, 1.0)).unwrap();
        apply_assessment(&mut profile, &event("procrastination", true, 1.0)).unwrap();

        assert_eq!(profile.history.len(), 3);
        // First delta is against the default baseline (no prior history)
        let first = &profile.history[0];
        assert_eq!(first.delta, round2(first.overall_score - DEFAULT_SCORE));

        for i in 1..profile.history.len() {
            let expected =
                round2(profile.history[i].overall_score - profile.history[i - 1].overall_score);
            assert_eq!(profile.history[i].delta, expected);
            assert!(profile.history[i].timestamp >= profile.history[i - 1].timestamp);
        }
    }

    #[test]
    fn test_unknown_sublabel_leaves_profile_untouched() {
        let mut profile = UserScores::new();
        let before = profile.clone();

        let err =
            apply_assessment(&mut profile, &event("telepathic_overreach", true, 1.0)).unwrap_err();

        assert!(matches!(err, ScoreError::UnknownSubLabel(ref id) if id == "telepathic_overreach"));
        assert_eq!(profile.label_scores, before.label_scores);
        assert_eq!(profile.sub_label_scores, before.sub_label_scores);
        assert_eq!(profile.history.len(), before.history.len());
    }

    #[test]
    fn test_oversized_magnitude_is_not_rejected() {
        // Magnitude is a caller contract; only the resulting score is clamped
        let mut profile = UserScores::new();

        apply_assessment(&mut profile, &event("impulsivity", true, 50.0)).unwrap();
        assert_eq!(profile.sub_label_scores["impulsivity"], 100.0);
    }
}
