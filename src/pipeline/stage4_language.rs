use std::collections::HashSet;

use crate::grammar::{GrammarChecker, GrammarError, GrammarIssue};
use crate::model::rubric::Criterion;
use crate::model::scores::{
    GrammarDetails, GrammarIssueSummary, MetricDetails, MetricScore, RichnessDetails,
};
use crate::model::thresholds::ScoringProfile;
use crate::pipeline::stage1_prepare::PreparedTranscript;
use crate::report::round_to;

/// Issues listed in the report; the count always covers all of them.
const MAX_REPORTED_ISSUES: usize = 20;

#[derive(Debug, Clone)]
pub struct Stage4Output {
    pub grammar: MetricScore,
    pub richness: MetricScore,
}

pub fn run_stage4(
    prepared: &PreparedTranscript<'_>,
    checker: &dyn GrammarChecker,
    profile: &ScoringProfile,
) -> Result<Stage4Output, GrammarError> {
    let issues = checker.check(prepared.text)?;
    let grammar = score_grammar(prepared.word_count, &issues, checker.name(), profile);
    let richness = score_richness(prepared.text, profile);
    tracing::debug!(
        grammar_issues = issues.len(),
        grammar = grammar.score,
        richness = richness.score,
        "language scored"
    );
    Ok(Stage4Output { grammar, richness })
}

/// `1 - min(issues / words * weight, 1)`.
pub fn grammar_accuracy(issue_count: usize, word_count: usize, weight: f64) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    let penalty = issue_count as f64 / word_count as f64 * weight;
    1.0 - penalty.min(1.0)
}

pub fn score_grammar(
    word_count: usize,
    issues: &[GrammarIssue],
    backend: &str,
    profile: &ScoringProfile,
) -> MetricScore {
    let accuracy = grammar_accuracy(issues.len(), word_count, profile.grammar_error_weight);
    let score = profile.grammar_accuracy.lookup(accuracy);
    let feedback = match issues.len() {
        0 => "Grammar and language accuracy: no issues found".to_string(),
        n => format!(
            "Grammar and language accuracy: {} issue(s) in {} words",
            n, word_count
        ),
    };
    MetricScore::new(Criterion::Error, score, feedback).with_details(MetricDetails::Grammar(
        GrammarDetails {
            backend: backend.to_string(),
            issue_count: issues.len(),
            accuracy: round_to(accuracy, 4),
            issues: issues
                .iter()
                .take(MAX_REPORTED_ISSUES)
                .map(|i| GrammarIssueSummary {
                    rule: i.rule_id.clone(),
                    message: i.message.clone(),
                    offset: i.offset,
                })
                .collect(),
        },
    ))
}

/// Lower-cased whitespace words with ASCII punctuation removed.
pub fn richness_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.chars()
                .filter(|c| !c.is_ascii_punctuation())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

pub fn type_token_ratio(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let types: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    types.len() as f64 / tokens.len() as f64
}

fn mtld_pass<'a, I>(tokens: I, n_tokens: usize, full_ttr: f64, threshold: f64) -> f64
where
    I: Iterator<Item = &'a String>,
{
    let mut types: HashSet<&str> = HashSet::new();
    let mut counter = 0usize;
    let mut factors = 0.0f64;
    let mut ttr = 1.0f64;

    for token in tokens {
        counter += 1;
        types.insert(token.as_str());
        ttr = types.len() as f64 / counter as f64;
        if ttr <= threshold {
            factors += 1.0;
            counter = 0;
            types.clear();
        }
    }
    if counter > 0 {
        factors += (1.0 - ttr) / (1.0 - threshold);
    }
    if factors == 0.0 {
        if full_ttr >= 1.0 {
            factors = 1.0;
        } else {
            factors = (1.0 - full_ttr) / (1.0 - threshold);
        }
    }
    n_tokens as f64 / factors
}

/// Measure of Textual Lexical Diversity: mean of a forward and a backward pass.
pub fn mtld(tokens: &[String], threshold: f64) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let full_ttr = type_token_ratio(tokens);
    let forward = mtld_pass(tokens.iter(), tokens.len(), full_ttr, threshold);
    let backward = mtld_pass(tokens.iter().rev(), tokens.len(), full_ttr, threshold);
    (forward + backward) / 2.0
}

pub fn score_richness(text: &str, profile: &ScoringProfile) -> MetricScore {
    let tokens = richness_tokens(text);
    let value = mtld(&tokens, profile.mtld_threshold);
    let ttr = type_token_ratio(&tokens);
    let score = profile.richness.lookup(value / 100.0);
    MetricScore::new(
        Criterion::Richness,
        score,
        format!(
            "Vocabulary diversity and richness: MTLD {:.2}",
            value
        ),
    )
    .with_details(MetricDetails::Richness(RichnessDetails {
        mtld: round_to(value, 2),
        type_token_ratio: round_to(ttr, 4),
    }))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_language.rs"]
mod tests;
