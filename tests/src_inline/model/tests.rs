use super::rubric::{Category, Criterion, category_order, criterion_order, total_max_score};
use super::scores::{MetricScore, RubricScores};
use super::thresholds::ScoringProfile;

#[test]
fn test_weights_sum_to_one_hundred() {
    assert_eq!(total_max_score(), 100);
    assert_eq!(Criterion::KeyWord.max_score(), 30);
    assert_eq!(Criterion::Sentiment.max_score(), 15);
}

#[test]
fn test_every_category_has_criteria() {
    for &category in category_order() {
        assert!(
            criterion_order().iter().any(|c| c.category() == category),
            "{category:?} has no criteria"
        );
    }
    assert_eq!(Criterion::Richness.category(), Category::LanguageAndGrammar);
    assert_eq!(Category::ContentAndStructure.label(), "Content & Structure");
    assert_eq!(Criterion::FillerWordRate.key(), "FillerWordRate");
}

#[test]
fn test_speech_rate_bands() {
    let p = ScoringProfile::default_v1();
    assert_eq!(p.speech_rate.lookup(125.0), 10);
    assert_eq!(p.speech_rate.lookup(111.0), 10);
    assert_eq!(p.speech_rate.lookup(140.9), 10);
    assert_eq!(p.speech_rate.lookup(150.0), 6);
    assert_eq!(p.speech_rate.lookup(95.0), 6);
    // No gap between 110 and 111.
    assert_eq!(p.speech_rate.lookup(110.5), 6);
    assert_eq!(p.speech_rate.lookup(170.0), 2);
    assert_eq!(p.speech_rate.lookup(40.0), 2);
    assert_eq!(p.speech_rate.lookup(f64::NAN), 2);
}

#[test]
fn test_quality_bands_have_no_gaps() {
    let p = ScoringProfile::default_v1();
    assert_eq!(p.grammar_accuracy.lookup(1.0), 10);
    assert_eq!(p.grammar_accuracy.lookup(0.9), 10);
    assert_eq!(p.grammar_accuracy.lookup(0.8999999999995), 8);
    assert_eq!(p.grammar_accuracy.lookup(0.5), 6);
    assert_eq!(p.grammar_accuracy.lookup(0.49999999999), 4);
    assert_eq!(p.grammar_accuracy.lookup(0.0), 2);
    // MTLD above 100 stays in the top band.
    assert_eq!(p.richness.lookup(1.35), 10);
    assert_eq!(p.richness.lookup(0.78), 8);
}

#[test]
fn test_filler_bands_inclusive_upper() {
    let p = ScoringProfile::default_v1();
    assert_eq!(p.filler_rate.lookup(0.0), 15);
    assert_eq!(p.filler_rate.lookup(3.0), 15);
    assert_eq!(p.filler_rate.lookup(3.5), 12);
    assert_eq!(p.filler_rate.lookup(6.0), 12);
    assert_eq!(p.filler_rate.lookup(9.0), 9);
    assert_eq!(p.filler_rate.lookup(12.0), 6);
    assert_eq!(p.filler_rate.lookup(12.1), 3);
}

#[test]
fn test_sentiment_bands() {
    let p = ScoringProfile::default_v1();
    assert_eq!(p.sentiment.lookup(0.95), 15);
    assert_eq!(p.sentiment.lookup(0.75), 12);
    assert_eq!(p.sentiment.lookup(0.5), 9);
    assert_eq!(p.sentiment.lookup(0.3), 6);
    assert_eq!(p.sentiment.lookup(0.08), 3);
}

#[test]
fn test_metric_score_is_clamped() {
    let m = MetricScore::new(Criterion::Salutation, 9, "x");
    assert_eq!(m.score, 5);
    let scores = RubricScores {
        metrics: vec![m, MetricScore::new(Criterion::KeyWord, 28, "y")],
    };
    assert_eq!(scores.overall(), 33);
}
