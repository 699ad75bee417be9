use crate::report::{AnalysisReport, CriteriaScore};

pub fn render_report_text(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("Self-Introduction Rubric Report\n");
    out.push_str("===============================\n\n");

    out.push_str(&format!(
        "Overall score: {}/{} ({})\n",
        report.overall_score,
        report.max_score,
        overall_label(report.overall_score, report.max_score)
    ));
    out.push_str(&format!("Duration: {:.1} s\n", report.total_duration));
    out.push_str(&format!("Word count: {}\n", report.word_count));
    out.push_str(&format!("Speech rate: {:.2} words/min\n\n", report.speech_rate));

    for (idx, criteria) in report.criteria_scores.iter().enumerate() {
        render_category(&mut out, idx + 1, criteria);
    }

    out
}

fn render_category(out: &mut String, number: usize, criteria: &CriteriaScore) {
    let earned: u32 = criteria.metrics.iter().map(|m| m.score).sum();
    let max: u32 = criteria.metrics.iter().map(|m| m.max_score).sum();
    out.push_str(&format!(
        "{}. {} ({}/{})\n",
        number, criteria.category, earned, max
    ));
    for metric in &criteria.metrics {
        out.push_str(&format!(
            "   - {}: {}/{}\n     {}\n",
            metric.name, metric.score, metric.max_score, metric.feedback
        ));
    }
    out.push('\n');
}

fn overall_label(score: u32, max: u32) -> &'static str {
    if max == 0 {
        return "n/a";
    }
    let pct = score as f64 / max as f64;
    if pct >= 0.85 {
        "excellent"
    } else if pct >= 0.70 {
        "good"
    } else if pct >= 0.50 {
        "fair"
    } else {
        "needs improvement"
    }
}
