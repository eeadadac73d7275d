//! Mindgauge - Scoring engine for longitudinal behavioral trait profiles
//!
//! Mindgauge maintains a per-user profile across six behavioral labels, each
//! backed by a fixed taxonomy of severity-weighted sub-labels. A profile is
//! seeded once from an onboarding quiz and adjusted incrementally from
//! classifier events, with every change recorded in an append-only history:
//! quiz answers → baseline initialization → profile; classifier event →
//! incremental update → profile; profile → chart projections.
//!
//! The engine is synchronous and I/O-free. Delivery of the quiz, the
//! classifier producing events, persistence, and rendering all live in the
//! hosting system.

pub mod baseline;
pub mod charts;
pub mod constants;
pub mod engine;
pub mod error;
pub mod profile;
pub mod quiz;
pub mod scoring;
pub mod taxonomy;
pub mod update;

pub use baseline::initialize_from_quiz;
pub use charts::{line_chart, spider_chart, LineChartEntry};
pub use engine::ScoreEngine;
pub use error::ScoreError;
pub use profile::{AssessmentEvent, ChartPoint, UserScores};
pub use scoring::{effective_score, overall_score};
pub use taxonomy::{find_sublabel, sublabels_for, Label, SubLabel};
pub use update::apply_assessment;

/// Engine version embedded in CLI output
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for CLI output
pub const PRODUCER_NAME: &str = "mindgauge";
