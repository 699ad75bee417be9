use super::*;
use crate::fixtures::sample_transcript;
use crate::model::rubric::Criterion;
use crate::pipeline::stage1_prepare::run_stage1;

fn scores(values: [u32; 8]) -> RubricScores {
    let criteria = [
        Criterion::Salutation,
        Criterion::KeyWord,
        Criterion::Flow,
        Criterion::SpeechRate,
        Criterion::Error,
        Criterion::Richness,
        Criterion::FillerWordRate,
        Criterion::Sentiment,
    ];
    RubricScores {
        metrics: criteria
            .iter()
            .zip(values)
            .map(|(&c, v)| MetricScore::new(c, v, format!("{} feedback", c.key())))
            .collect(),
    }
}

#[test]
fn test_build_report_groups_by_category() {
    let t = sample_transcript(60.0);
    let prepared = run_stage1(&t, 5);
    let report = build_report(&scores([4, 28, 5, 10, 10, 8, 15, 3]), &prepared, 133.0);

    assert_eq!(report.overall_score, 83);
    assert_eq!(report.max_score, 100);
    assert_eq!(report.word_count, 133);
    assert_eq!(report.total_duration, 60.0);
    assert_eq!(report.speech_rate, 133.0);

    let categories: Vec<&str> = report
        .criteria_scores
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(
        categories,
        vec![
            "Content & Structure",
            "Speech Rate",
            "Language & Grammar",
            "Clarity",
            "Engagement"
        ]
    );
    let content = &report.criteria_scores[0];
    assert_eq!(content.metrics.len(), 3);
    assert_eq!(content.metrics[1].name, "Keyword Presence");
    assert_eq!(content.metrics[1].max_score, 30);
    assert_eq!(content.metrics[1].feedback, "KeyWord feedback");
}

#[test]
fn test_speech_rate_rounded_in_report() {
    let t = sample_transcript(47.0);
    let prepared = run_stage1(&t, 5);
    let report = build_report(&scores([0; 8]), &prepared, 133.0 / (47.0 / 60.0));
    assert_eq!(report.speech_rate, 169.79);
    assert_eq!(report.overall_score, 0);
}
