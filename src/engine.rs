//! Stateful engine wrapper
//!
//! `ScoreEngine` owns one profile and strings the free functions together for
//! hosts that want a single handle per user. Its JSON snapshot methods let
//! the hosting system persist and restore engine state between calls; the
//! persistence medium itself stays outside this crate.

use crate::baseline::initialize_from_quiz;
use crate::charts::{line_chart, spider_chart, LineChartEntry};
use crate::error::ScoreError;
use crate::profile::{AssessmentEvent, UserScores};
use crate::quiz;
use crate::scoring::overall_score;
use crate::update::apply_assessment;
use std::collections::{BTreeMap, HashMap};

/// Scoring engine bound to a single user's profile
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    profile: UserScores,
}

impl ScoreEngine {
    /// Create an engine around a fresh profile
    pub fn new() -> Self {
        Self {
            profile: UserScores::new(),
        }
    }

    /// Wrap an existing profile
    pub fn from_profile(profile: UserScores) -> Self {
        Self { profile }
    }

    /// Seed the profile from answers to the built-in onboarding catalog
    pub fn initialize(&mut self, answers: &HashMap<String, i64>) -> Result<(), ScoreError> {
        initialize_from_quiz(&mut self.profile, quiz::catalog(), answers)
    }

    /// Apply one classifier event
    pub fn apply(&mut self, event: &AssessmentEvent) -> Result<(), ScoreError> {
        apply_assessment(&mut self.profile, event)
    }

    /// Current severity-weighted overall score
    pub fn overall(&self) -> f64 {
        overall_score(&self.profile)
    }

    /// Spider chart projection
    pub fn spider(&self) -> BTreeMap<String, f64> {
        spider_chart(&self.profile)
    }

    /// Line chart projection
    pub fn line(&self) -> Vec<LineChartEntry> {
        line_chart(&self.profile)
    }

    /// The wrapped profile
    pub fn profile(&self) -> &UserScores {
        &self.profile
    }

    /// Load engine state from a profile JSON snapshot
    pub fn load(&mut self, json: &str) -> Result<(), ScoreError> {
        self.profile = UserScores::from_json(json)?;
        Ok(())
    }

    /// Save engine state as a profile JSON snapshot
    pub fn save(&self) -> Result<String, ScoreError> {
        Ok(self.profile.to_json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_SCORE;
    use pretty_assertions::assert_eq;

    fn improvement(sub_label: &str) -> AssessmentEvent {
        AssessmentEvent {
            sub_label: sub_label.to_string(),
            is_improvement: true,
            magnitude: 1.0,
        }
    }

    #[test]
    fn test_initialize_then_apply() {
        let mut engine = ScoreEngine::new();

        let answers: HashMap<String, i64> =
            [("em_1".to_string(), 3), ("cc_1".to_string(), 3)].into();
        engine.initialize(&answers).unwrap();
        assert_eq!(engine.line().len(), 1);

        engine.apply(&improvement("confirmation_bias")).unwrap();
        assert_eq!(engine.line().len(), 2);
        assert_eq!(engine.spider().len(), 6);
    }

    #[test]
    fn test_overall_matches_last_history_point() {
        let mut engine = ScoreEngine::new();
        engine.apply(&improvement("complacency")).unwrap();

        let last = engine.line().last().unwrap().overall_score;
        assert_eq!(engine.overall(), last);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut engine = ScoreEngine::new();
        engine.apply(&improvement("workaholism")).unwrap();

        let snapshot = engine.save().unwrap();

        let mut restored = ScoreEngine::new();
        restored.load(&snapshot).unwrap();

        assert_eq!(restored.overall(), engine.overall());
        assert_eq!(restored.line().len(), engine.line().len());
        assert_eq!(
            restored.profile().sub_label_scores,
            engine.profile().sub_label_scores
        );
    }

    #[test]
    fn test_fresh_engine_reports_default_overall() {
        let engine = ScoreEngine::new();
        assert_eq!(engine.overall(), DEFAULT_SCORE);
    }
}
