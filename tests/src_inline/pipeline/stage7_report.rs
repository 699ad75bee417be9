use super::*;
use crate::report::{CriteriaScore, MetricReport};

fn small_report() -> AnalysisReport {
    AnalysisReport {
        overall_score: 9,
        max_score: 100,
        total_duration: 30.0,
        word_count: 12,
        speech_rate: 24.0,
        criteria_scores: vec![CriteriaScore {
            category: "Content & Structure".to_string(),
            metrics: vec![MetricReport {
                name: "Salutation Level".to_string(),
                score: 4,
                max_score: 5,
                feedback: "Salutation effectiveness: 4/5 (mid greeting)".to_string(),
                details: None,
            }],
        }],
    }
}

#[test]
fn test_write_reports_creates_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("nested/out");
    let written = write_reports(&small_report(), &out_dir).unwrap();

    assert_eq!(written.score_path, out_dir.join(SCORE_FILE));
    assert_eq!(written.report_path, out_dir.join(REPORT_FILE));

    let json = std::fs::read_to_string(&written.score_path).unwrap();
    assert!(json.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["overallScore"], 9);
    assert_eq!(value["criteriaScores"][0]["metrics"][0]["maxScore"], 5);

    let text = std::fs::read_to_string(&written.report_path).unwrap();
    assert!(text.starts_with("Self-Introduction Rubric Report\n"));
}

#[test]
fn test_emit_report_formats() {
    let report = small_report();

    let mut json = Vec::new();
    emit_report(&report, OutputFormat::Json, &mut json).unwrap();
    let json = String::from_utf8(json).unwrap();
    assert!(json.ends_with("}\n"));
    assert!(json.contains("\"wordCount\": 12"));

    let mut text = Vec::new();
    emit_report(&report, OutputFormat::Text, &mut text).unwrap();
    let text = String::from_utf8(text).unwrap();
    assert!(text.contains("Overall score: 9/100 (needs improvement)"));
    assert!(text.contains("1. Content & Structure (4/5)"));
}
