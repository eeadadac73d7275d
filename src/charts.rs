//! Chart view projections
//!
//! Read-only transforms of a profile into the shapes the rendering layer
//! consumes: a spider chart over the six labels and a line chart over the
//! overall-score history.

use crate::profile::UserScores;
use crate::taxonomy::Label;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One line-chart entry with an RFC 3339 timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineChartEntry {
    pub timestamp: String,
    pub overall_score: f64,
    pub delta: f64,
}

/// Spider chart data: label id to current score, always all six entries
pub fn spider_chart(profile: &UserScores) -> BTreeMap<String, f64> {
    Label::ALL
        .into_iter()
        .map(|label| (label.as_str().to_string(), profile.label_score(label)))
        .collect()
}

/// Line chart series: one entry per history point, in insertion order
pub fn line_chart(profile: &UserScores) -> Vec<LineChartEntry> {
    profile
        .history
        .iter()
        .map(|point| LineChartEntry {
            timestamp: point.timestamp.to_rfc3339(),
            overall_score: point.overall_score,
            delta: point.delta,
        })
        .collect()
}
