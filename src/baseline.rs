//! Quiz-to-baseline conversion
//!
//! Converts a completed onboarding quiz into the profile's initial label
//! scores and its first history point. Questions the user skipped contribute
//! nothing; a label with no answered questions keeps the default baseline.

use crate::constants::{round1, DEFAULT_SCORE};
use crate::error::ScoreError;
use crate::profile::{ChartPoint, UserScores};
use crate::quiz::{QuizQuestion, QuizShape};
use crate::scoring::overall_score;
use crate::taxonomy::Label;
use chrono::Utc;
use std::collections::HashMap;

/// Seed a profile from quiz answers.
///
/// `answers` maps question id to an answer token: a 0-based option index for
/// scenario questions, a 1-5 rating for scale questions. Questions absent
/// from `answers` are skipped. Each label's score becomes the arithmetic mean
/// of its answered questions, rounded to 1 decimal; unanswered labels keep
/// `DEFAULT_SCORE`. Finally the aggregate overall score is appended as the
/// first history point with `delta = 0`.
///
/// There is no guard against re-initializing an already-seeded profile: a
/// second call overwrites the label scores and appends another history point.
/// Callers own that decision.
pub fn initialize_from_quiz(
    profile: &mut UserScores,
    questions: &[QuizQuestion],
    answers: &HashMap<String, i64>,
) -> Result<(), ScoreError> {
    let mut label_buckets: HashMap<Label, Vec<f64>> = HashMap::new();

    for question in questions {
        let answer = match answers.get(&question.id) {
            Some(answer) => *answer,
            None => continue,
        };

        let score = question_score(question, answer)?;
        label_buckets.entry(question.label).or_default().push(score);
    }

    for label in Label::ALL {
        let score = match label_buckets.get(&label) {
            Some(scores) if !scores.is_empty() => {
                round1(scores.iter().sum::<f64>() / scores.len() as f64)
            }
            _ => DEFAULT_SCORE,
        };
        profile.label_scores.insert(label, score);
    }

    let initial_overall = overall_score(profile);
    profile.history.push(ChartPoint {
        timestamp: Utc::now(),
        overall_score: initial_overall,
        delta: 0.0,
    });

    Ok(())
}

/// Score one answered question on the 0-100 scale
fn question_score(question: &QuizQuestion, answer: i64) -> Result<f64, ScoreError> {
    match question.shape {
        QuizShape::Scenario => {
            if question.options.is_empty() {
                return Err(ScoreError::MissingOptions(question.id.clone()));
            }
            let index = usize::try_from(answer).ok().filter(|i| *i < question.options.len());
            match index {
                Some(i) => Ok(question.options[i].1),
                None => Err(ScoreError::OutOfRange {
                    question_id: question.id.clone(),
                    answer,
                }),
            }
        }
        QuizShape::AgreeDisagree | QuizShape::SelfRating => {
            if !(1..=5).contains(&answer) {
                return Err(ScoreError::OutOfRange {
                    question_id: question.id.clone(),
                    answer,
                });
            }
            let rating = answer as f64;
            if question.inverted {
                Ok((5.0 - rating) / 4.0 * 100.0)
            } else {
                Ok((rating - 1.0) / 4.0 * 100.0)
            }
        }
    }
}
