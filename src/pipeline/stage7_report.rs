use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::report::json::render_report_json;
use crate::report::text::render_report_text;
use crate::report::{AnalysisReport, OutputFormat};

pub const SCORE_FILE: &str = "score.json";
pub const REPORT_FILE: &str = "report.txt";

#[derive(Debug, Clone)]
pub struct WrittenReports {
    pub score_path: PathBuf,
    pub report_path: PathBuf,
}

/// Writes `score.json` and `report.txt` into `out_dir`, creating it if needed.
pub fn write_reports(report: &AnalysisReport, out_dir: &Path) -> std::io::Result<WrittenReports> {
    fs::create_dir_all(out_dir)?;

    let score_path = out_dir.join(SCORE_FILE);
    let json = render_report_json(report).map_err(std::io::Error::other)?;
    write_file(&score_path, &json)?;

    let report_path = out_dir.join(REPORT_FILE);
    write_file(&report_path, &render_report_text(report))?;

    Ok(WrittenReports {
        score_path,
        report_path,
    })
}

pub fn emit_report<W: Write>(
    report: &AnalysisReport,
    format: OutputFormat,
    out: &mut W,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Json => {
            let json = render_report_json(report).map_err(std::io::Error::other)?;
            writeln!(out, "{json}")
        }
        OutputFormat::Text => write!(out, "{}", render_report_text(report)),
    }
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage7_report.rs"]
mod tests;
