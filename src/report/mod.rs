pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::scores::MetricDetails;

/// Scoring result in the shape the UI renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub overall_score: u32,
    pub max_score: u32,
    pub total_duration: f64,
    pub word_count: usize,
    pub speech_rate: f64,
    pub criteria_scores: Vec<CriteriaScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriteriaScore {
    pub category: String,
    pub metrics: Vec<MetricReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricReport {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
    pub feedback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<MetricDetails>,
}

/// Emitted instead of a report when scoring fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub error: String,
    pub overall_score: u32,
    pub criteria_scores: Vec<CriteriaScore>,
}

impl ErrorReport {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            overall_score: 0,
            criteria_scores: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
