//! Profile data model
//!
//! `UserScores` is the aggregate the engine operates on: the six label scores,
//! the sparse set of assessed sub-label scores, and the append-only history of
//! overall-score snapshots. It is created empty by the hosting system, seeded
//! once by `baseline::initialize_from_quiz`, and mutated by
//! `update::apply_assessment`. The engine assumes exclusive access for the
//! duration of each call; callers serialize concurrent updates per profile.

use crate::constants::DEFAULT_SCORE;
use crate::taxonomy::Label;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

fn default_magnitude() -> f64 {
    1.0
}

/// One classifier verdict about an observed behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentEvent {
    /// Sub-label id from the fixed taxonomy
    pub sub_label: String,
    /// True when the user did well or practiced; false for a mistake
    pub is_improvement: bool,
    /// How significant the event was, nominally 0.0-1.0
    #[serde(default = "default_magnitude")]
    pub magnitude: f64,
}

/// One entry in the overall-score history. Positive delta = improving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    pub timestamp: DateTime<Utc>,
    /// Overall score at this point (0-100)
    pub overall_score: f64,
    /// Change versus the previous point; always 0 for the first entry
    pub delta: f64,
}

/// Longitudinal score profile for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserScores {
    pub profile_id: Uuid,
    /// Spider chart: all six labels, always present (0-100)
    pub label_scores: BTreeMap<Label, f64>,
    /// Assessed sub-label scores, keyed by sub-label id; sparse. A missing
    /// entry means "inherit the parent label's score".
    pub sub_label_scores: BTreeMap<String, f64>,
    /// Append-only overall-score history, oldest first
    pub history: Vec<ChartPoint>,
}

impl Default for UserScores {
    fn default() -> Self {
        Self::new()
    }
}

impl UserScores {
    /// Create a fresh profile with every label at the default baseline
    pub fn new() -> Self {
        Self {
            profile_id: Uuid::new_v4(),
            label_scores: Label::ALL
                .into_iter()
                .map(|label| (label, DEFAULT_SCORE))
                .collect(),
            sub_label_scores: BTreeMap::new(),
            history: Vec::new(),
        }
    }

    /// Current score for a label; fresh profiles report the default baseline
    pub fn label_score(&self, label: Label) -> f64 {
        self.label_scores.get(&label).copied().unwrap_or(DEFAULT_SCORE)
    }

    /// Load a profile snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the profile to a JSON snapshot
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fresh_profile_defaults() {
        let profile = UserScores::new();

        assert_eq!(profile.label_scores.len(), 6);
        for label in Label::ALL {
            assert_eq!(profile.label_score(label), DEFAULT_SCORE);
        }
        assert!(profile.sub_label_scores.is_empty());
        assert!(profile.history.is_empty());
    }

    #[test]
    fn test_profile_json_round_trip() {
        let mut profile = UserScores::new();
        profile.sub_label_scores.insert("impulsivity".to_string(), 62.25);
        profile.history.push(ChartPoint {
            timestamp: Utc::now(),
            overall_score: 68.4,
            delta: 0.0,
        });

        let json = profile.to_json().unwrap();
        let loaded = UserScores::from_json(&json).unwrap();

        assert_eq!(loaded.profile_id, profile.profile_id);
        assert_eq!(loaded.label_scores, profile.label_scores);
        assert_eq!(loaded.sub_label_scores, profile.sub_label_scores);
        assert_eq!(loaded.history.len(), 1);
        assert_eq!(loaded.history[0].overall_score, 68.4);
    }

    #[test]
    fn test_event_magnitude_defaults_to_one() {
        let event: AssessmentEvent =
            serde_json::from_str(r#"{"sub_label": "impulsivity", "is_improvement": true}"#)
                .unwrap();
        assert_eq!(event.magnitude, 1.0);
    }

    #[test]
    fn test_label_scores_serialize_with_stable_keys() {
        let profile = UserScores::new();
        let json = profile.to_json().unwrap();
        for label in Label::ALL {
            assert!(json.contains(label.as_str()), "missing key {}", label.as_str());
        }
    }
}
