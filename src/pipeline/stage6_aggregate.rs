use crate::model::rubric::{category_order, total_max_score};
use crate::model::scores::{MetricScore, RubricScores};
use crate::pipeline::stage1_prepare::PreparedTranscript;
use crate::pipeline::stage2_content::Stage2Output;
use crate::pipeline::stage3_delivery::Stage3Output;
use crate::pipeline::stage4_language::Stage4Output;
use crate::pipeline::stage5_engagement::Stage5Output;
use crate::report::{AnalysisReport, CriteriaScore, MetricReport, round_to};

#[derive(Debug, Clone)]
pub struct Stage6Inputs<'a> {
    pub prepared: &'a PreparedTranscript<'a>,
    pub content: Stage2Output,
    pub delivery: Stage3Output,
    pub language: Stage4Output,
    pub engagement: Stage5Output,
}

pub fn run_stage6(inputs: Stage6Inputs<'_>) -> AnalysisReport {
    let words_per_minute = inputs.delivery.words_per_minute;
    let scores = RubricScores {
        metrics: vec![
            inputs.content.salutation,
            inputs.content.keywords,
            inputs.content.flow,
            inputs.delivery.speech_rate,
            inputs.language.grammar,
            inputs.language.richness,
            inputs.delivery.fillers,
            inputs.engagement.sentiment,
        ],
    };
    build_report(&scores, inputs.prepared, words_per_minute)
}

/// Groups metric scores by category, in rubric order.
pub fn build_report(
    scores: &RubricScores,
    prepared: &PreparedTranscript<'_>,
    words_per_minute: f64,
) -> AnalysisReport {
    let mut criteria_scores = Vec::new();
    for &category in category_order() {
        let metrics: Vec<MetricReport> = scores
            .metrics
            .iter()
            .filter(|m| m.criterion.category() == category)
            .map(metric_report)
            .collect();
        if metrics.is_empty() {
            continue;
        }
        criteria_scores.push(CriteriaScore {
            category: category.label().to_string(),
            metrics,
        });
    }

    let overall_score = scores.overall();
    tracing::info!(
        overall = overall_score,
        max = total_max_score(),
        words = prepared.word_count,
        "transcript scored"
    );

    AnalysisReport {
        overall_score,
        max_score: total_max_score(),
        total_duration: prepared.duration_secs,
        word_count: prepared.word_count,
        speech_rate: round_to(words_per_minute, 2),
        criteria_scores,
    }
}

fn metric_report(metric: &MetricScore) -> MetricReport {
    tracing::debug!(
        criterion = metric.criterion.key(),
        score = metric.score,
        "metric"
    );
    MetricReport {
        name: metric.criterion.metric_name().to_string(),
        score: metric.score,
        max_score: metric.criterion.max_score(),
        feedback: metric.feedback.clone(),
        details: metric.details.clone(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_aggregate.rs"]
mod tests;
