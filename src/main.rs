mod config;
mod grammar;
mod input;
mod lexicon;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use tracing::Level;

use crate::config::{ConfigError, GrammarBackend, ScorerConfig};
use crate::grammar::{GrammarChecker, LanguageToolChecker, RuleChecker};
use crate::input::{TranscriptSource, load_transcript, source_label};
use crate::lexicon::RubricLexicon;
use crate::model::thresholds::ScoringProfile;
use crate::pipeline::stage7_report::{emit_report, write_reports};
use crate::pipeline::{RubricScorer, ScoreError};
use crate::report::json::render_error_json;
use crate::report::{ErrorReport, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "introscore",
    version,
    about = "Score a self-introduction transcript against the speaking rubric"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one transcript and print (or write) the breakdown.
    Score(ScoreArgs),
}

#[derive(Debug, Clone, Args)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["text", "input", "payload", "payload_file"])
))]
struct ScoreArgs {
    /// Transcript text.
    #[arg(long)]
    text: Option<String>,
    /// Transcript file (plain text or .gz).
    #[arg(long)]
    input: Option<PathBuf>,
    /// JSON payload: {"introduction": "...", "duration": <seconds>}.
    #[arg(long)]
    payload: Option<String>,
    /// File holding a JSON payload.
    #[arg(long)]
    payload_file: Option<PathBuf>,
    /// Speech duration in seconds; overrides the payload's duration.
    #[arg(long, env = "INTROSCORE_DURATION")]
    duration: Option<f64>,
    /// TOML configuration file.
    #[arg(long, env = "INTROSCORE_CONFIG")]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    grammar_backend: Option<GrammarBackendArg>,
    /// LanguageTool server base URL.
    #[arg(long, env = "INTROSCORE_LANGUAGETOOL_URL")]
    grammar_endpoint: Option<String>,
    /// Sentiment lexicon in VADER layout (token<TAB>valence).
    #[arg(long)]
    lexicon: Option<PathBuf>,
    /// Minimum similarity for a keyword category to count (0..=1).
    #[arg(long)]
    keyword_threshold: Option<f64>,
    /// Directory for score.json and report.txt.
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = FormatArg::Json)]
    format: FormatArg,
    #[arg(long, env = "INTROSCORE_LOG", default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GrammarBackendArg {
    Rules,
    Languagetool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Json,
    Text,
}

fn main() {
    let cli = Cli::parse();
    let Command::Score(args) = cli.command;

    logging::init_logging(logging::parse_level(&args.log_level).unwrap_or(Level::WARN));

    if let Err(err) = run(&args) {
        tracing::error!("{err}");
        println!("{}", render_error_json(&ErrorReport::new(err.to_string())));
        std::process::exit(1);
    }
}

fn run(args: &ScoreArgs) -> Result<(), ScoreError> {
    let config = resolve_config(args)?;

    let source = transcript_source(args)?;
    let transcript = load_transcript(&source, args.duration)?;
    tracing::info!(
        "scoring transcript from {} ({:.1} s)",
        source_label(&source),
        transcript.duration_secs
    );

    let lexicon = RubricLexicon::load(config.sentiment.lexicon_path.as_deref())?;
    let mut profile = ScoringProfile::default_v1();
    profile.keyword_match_threshold = config.keywords.match_threshold;

    let scorer = RubricScorer::new(lexicon, profile, build_grammar_checker(&config)?);
    tracing::debug!("grammar backend: {}", scorer.grammar_backend());
    let report = scorer.score(&transcript)?;

    if let Some(out_dir) = &args.out {
        let written = write_reports(&report, out_dir)?;
        tracing::info!(
            "wrote {} and {}",
            written.score_path.display(),
            written.report_path.display()
        );
    }

    let format = match args.format {
        FormatArg::Json => OutputFormat::Json,
        FormatArg::Text => OutputFormat::Text,
    };
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    emit_report(&report, format, &mut lock)?;
    Ok(())
}

/// Config file first, then command-line overrides.
fn resolve_config(args: &ScoreArgs) -> Result<ScorerConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => ScorerConfig::from_file(path)?,
        None => ScorerConfig::default(),
    };
    if let Some(backend) = args.grammar_backend {
        config.grammar.backend = match backend {
            GrammarBackendArg::Rules => GrammarBackend::Rules,
            GrammarBackendArg::Languagetool => GrammarBackend::LanguageTool,
        };
    }
    if let Some(endpoint) = &args.grammar_endpoint {
        config.grammar.endpoint = endpoint.clone();
    }
    if let Some(path) = &args.lexicon {
        config.sentiment.lexicon_path = Some(path.clone());
    }
    if let Some(threshold) = args.keyword_threshold {
        config.keywords.match_threshold = threshold;
    }
    config.validate()?;
    Ok(config)
}

fn transcript_source(args: &ScoreArgs) -> Result<TranscriptSource, ScoreError> {
    if let Some(text) = &args.text {
        return Ok(TranscriptSource::Inline(text.clone()));
    }
    if let Some(path) = &args.input {
        return Ok(TranscriptSource::File(path.clone()));
    }
    if let Some(raw) = &args.payload {
        return Ok(TranscriptSource::Payload(raw.clone()));
    }
    if let Some(path) = &args.payload_file {
        return Ok(TranscriptSource::PayloadFile(path.clone()));
    }
    Err(input::InputError::MissingInput(
        "one of --text, --input, --payload, --payload-file".to_string(),
    )
    .into())
}

fn build_grammar_checker(config: &ScorerConfig) -> Result<Box<dyn GrammarChecker>, ScoreError> {
    match config.grammar.backend {
        GrammarBackend::Rules => Ok(Box::new(RuleChecker::new())),
        GrammarBackend::LanguageTool => {
            let checker = LanguageToolChecker::new(
                &config.grammar.endpoint,
                &config.grammar.language,
                config.grammar.timeout(),
            )?;
            tracing::info!("using LanguageTool at {}", checker.check_url());
            Ok(Box::new(checker))
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/fixtures.rs"]
mod fixtures;

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
