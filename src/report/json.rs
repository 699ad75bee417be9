use crate::report::{AnalysisReport, ErrorReport};

pub fn render_report_json(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Single line so callers reading stdout line by line still get valid JSON.
pub fn render_error_json(report: &ErrorReport) -> String {
    serde_json::to_string(report).unwrap_or_else(|_| {
        format!(
            "{{\"error\":{},\"overallScore\":0,\"criteriaScores\":[]}}",
            serde_json::Value::String(report.error.clone())
        )
    })
}
