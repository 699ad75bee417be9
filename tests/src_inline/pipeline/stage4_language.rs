use super::*;
use crate::fixtures::sample_transcript;
use crate::grammar::RuleChecker;
use crate::pipeline::stage1_prepare::run_stage1;

struct FailingChecker;

impl GrammarChecker for FailingChecker {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn check(&self, _text: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        Err(GrammarError::Config("offline".to_string()))
    }
}

fn issue(offset: usize) -> GrammarIssue {
    GrammarIssue {
        rule_id: "LOWERCASE_I".to_string(),
        message: "The pronoun 'I' is always capitalized.".to_string(),
        offset,
        length: 1,
    }
}

#[test]
fn test_grammar_accuracy() {
    assert_eq!(grammar_accuracy(0, 133, 10.0), 1.0);
    assert!((grammar_accuracy(2, 100, 10.0) - 0.8).abs() < 1e-12);
    assert_eq!(grammar_accuracy(20, 100, 10.0), 0.0);
    assert_eq!(grammar_accuracy(0, 0, 10.0), 0.0);
}

#[test]
fn test_score_grammar_with_issues() {
    let profile = ScoringProfile::default_v1();
    let issues: Vec<GrammarIssue> = (0..2).map(issue).collect();
    let score = score_grammar(100, &issues, "rules", &profile);
    assert_eq!(score.score, 8);
    assert_eq!(
        score.feedback,
        "Grammar and language accuracy: 2 issue(s) in 100 words"
    );

    let many: Vec<GrammarIssue> = (0..30).map(issue).collect();
    match score_grammar(1000, &many, "rules", &profile).details {
        Some(MetricDetails::Grammar(d)) => {
            assert_eq!(d.issue_count, 30);
            assert_eq!(d.issues.len(), MAX_REPORTED_ISSUES);
            assert_eq!(d.backend, "rules");
        }
        other => panic!("unexpected details: {other:?}"),
    }
}

#[test]
fn test_richness_tokens() {
    assert_eq!(
        richness_tokens("Hello, World! don't ..."),
        vec!["hello".to_string(), "world".to_string(), "dont".to_string()]
    );
}

#[test]
fn test_mtld_all_distinct_equals_length() {
    let tokens: Vec<String> = ["one", "two", "three", "four", "five"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(mtld(&tokens, 0.72), 5.0);
    assert_eq!(mtld(&[], 0.72), 0.0);
    assert_eq!(type_token_ratio(&tokens), 1.0);
}

#[test]
fn test_mtld_repetitive_text_is_low() {
    let tokens: Vec<String> = std::iter::repeat("again".to_string()).take(40).collect();
    // Every second token closes a factor.
    assert_eq!(mtld(&tokens, 0.72), 2.0);
}

#[test]
fn test_sample_language_scores() {
    let t = sample_transcript(60.0);
    let prepared = run_stage1(&t, 5);
    let out = run_stage4(&prepared, &RuleChecker::new(), &ScoringProfile::default_v1()).unwrap();
    assert_eq!(out.grammar.score, 10);
    assert_eq!(
        out.grammar.feedback,
        "Grammar and language accuracy: no issues found"
    );
    assert_eq!(out.richness.score, 8);
    assert_eq!(
        out.richness.feedback,
        "Vocabulary diversity and richness: MTLD 78.44"
    );
    match out.richness.details {
        Some(MetricDetails::Richness(d)) => {
            assert_eq!(d.mtld, 78.44);
            assert_eq!(d.type_token_ratio, 0.6466);
        }
        other => panic!("unexpected details: {other:?}"),
    }
}

#[test]
fn test_checker_failure_propagates() {
    let t = sample_transcript(60.0);
    let prepared = run_stage1(&t, 5);
    assert!(matches!(
        run_stage4(&prepared, &FailingChecker, &ScoringProfile::default_v1()),
        Err(GrammarError::Config(_))
    ));
}
