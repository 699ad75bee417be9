use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::rubric::Criterion;

#[derive(Debug, Clone, PartialEq)]
pub struct MetricScore {
    pub criterion: Criterion,
    pub score: u32,
    pub feedback: String,
    pub details: Option<MetricDetails>,
}

impl MetricScore {
    /// Clamps `score` to the criterion's maximum.
    pub fn new(criterion: Criterion, score: u32, feedback: impl Into<String>) -> Self {
        Self {
            criterion,
            score: score.min(criterion.max_score()),
            feedback: feedback.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: MetricDetails) -> Self {
        self.details = Some(details);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricDetails {
    Salutation(SalutationDetails),
    Keywords(KeywordDetails),
    Flow(FlowDetails),
    SpeechRate(SpeechRateDetails),
    Grammar(GrammarDetails),
    Richness(RichnessDetails),
    Fillers(FillerDetails),
    Sentiment(SentimentDetails),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalutationDetails {
    pub tier: Option<String>,
    pub matched_phrase: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMatch {
    pub category: String,
    pub keyword: String,
    pub similarity: f64,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordDetails {
    pub matches: Vec<KeywordMatch>,
    pub missing: Vec<String>,
    pub raw_points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDetails {
    pub correct: bool,
    pub sections: Vec<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRateDetails {
    pub words_per_minute: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarIssueSummary {
    pub rule: String,
    pub message: String,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarDetails {
    pub backend: String,
    pub issue_count: usize,
    pub accuracy: f64,
    pub issues: Vec<GrammarIssueSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RichnessDetails {
    pub mtld: f64,
    pub type_token_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillerDetails {
    pub filler_count: usize,
    pub rate_per_hundred: f64,
    pub found: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentDetails {
    pub positive_probability: f64,
    pub compound: f64,
    pub positive_words: Vec<String>,
}

/// All sub-scores of one transcript, in rubric order.
#[derive(Debug, Clone, PartialEq)]
pub struct RubricScores {
    pub metrics: Vec<MetricScore>,
}

impl RubricScores {
    pub fn overall(&self) -> u32 {
        self.metrics.iter().map(|m| m.score).sum()
    }
}
