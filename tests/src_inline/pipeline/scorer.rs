use super::*;
use crate::fixtures::{SCRAMBLED_INTRO, sample_transcript};
use crate::grammar::{GrammarIssue, RuleChecker};

struct UnreachableService;

impl GrammarChecker for UnreachableService {
    fn name(&self) -> &'static str {
        "unreachable"
    }

    fn check(&self, _text: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        Err(GrammarError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        })
    }
}

fn scorer() -> RubricScorer {
    RubricScorer::new(
        RubricLexicon::load(None).unwrap(),
        ScoringProfile::default_v1(),
        Box::new(RuleChecker::new()),
    )
}

#[test]
fn test_sample_scores_83_at_one_minute() {
    let report = scorer().score(&sample_transcript(60.0)).unwrap();
    assert_eq!(report.overall_score, 83);
    assert_eq!(report.max_score, 100);
    assert_eq!(report.word_count, 133);
    assert_eq!(report.speech_rate, 133.0);

    let per_metric: Vec<u32> = report
        .criteria_scores
        .iter()
        .flat_map(|c| c.metrics.iter().map(|m| m.score))
        .collect();
    assert_eq!(per_metric, vec![4, 28, 5, 10, 10, 8, 15, 3]);
}

#[test]
fn test_fast_delivery_lowers_speech_rate_only() {
    let report = scorer().score(&sample_transcript(40.0)).unwrap();
    // 133 words in 40 s is 199.5 words per minute.
    assert_eq!(report.speech_rate, 199.5);
    assert_eq!(report.overall_score, 75);
}

#[test]
fn test_scrambled_intro_loses_flow() {
    let transcript = Transcript {
        text: SCRAMBLED_INTRO.to_string(),
        duration_secs: 10.0,
    };
    let report = scorer().score(&transcript).unwrap();
    let flow = &report.criteria_scores[0].metrics[2];
    assert_eq!(flow.name, "Flow & Structure");
    assert_eq!(flow.score, 0);
}

#[test]
fn test_invalid_transcript_rejected() {
    let err = scorer().score(&sample_transcript(0.0)).unwrap_err();
    assert!(matches!(err, ScoreError::Input(_)));
}

#[test]
fn test_grammar_service_failure_is_an_error() {
    let scorer = RubricScorer::new(
        RubricLexicon::load(None).unwrap(),
        ScoringProfile::default(),
        Box::new(UnreachableService),
    );
    assert_eq!(scorer.grammar_backend(), "unreachable");
    let err = scorer.score(&sample_transcript(60.0)).unwrap_err();
    assert!(matches!(err, ScoreError::Grammar(GrammarError::Status { status: 502, .. })));
    assert!(err.to_string().starts_with("grammar check failed:"));
}
