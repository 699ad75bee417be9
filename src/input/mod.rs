use std::path::{Path, PathBuf};

pub mod payload;
pub mod reader;

use payload::parse_payload;
use reader::read_text;

#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub text: String,
    pub duration_secs: f64,
}

#[derive(Debug, Clone)]
pub enum TranscriptSource {
    Inline(String),
    File(PathBuf),
    Payload(String),
    PayloadFile(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Resolves the transcript text and speech duration.
///
/// Payload sources carry their own duration; `duration_override` replaces it
/// when given. Plain text sources require `duration_override`.
pub fn load_transcript(
    source: &TranscriptSource,
    duration_override: Option<f64>,
) -> Result<Transcript, InputError> {
    let (text, payload_duration) = match source {
        TranscriptSource::Inline(text) => (text.clone(), None),
        TranscriptSource::File(path) => {
            tracing::info!("reading transcript from {}", path.display());
            (read_text(path)?, None)
        }
        TranscriptSource::Payload(raw) => {
            let payload = parse_payload(raw)?;
            (payload.introduction, Some(payload.duration))
        }
        TranscriptSource::PayloadFile(path) => {
            tracing::info!("reading payload from {}", path.display());
            let payload = parse_payload(&read_text(path)?)?;
            (payload.introduction, Some(payload.duration))
        }
    };

    let duration_secs = duration_override.or(payload_duration).ok_or_else(|| {
        InputError::MissingInput("speech duration (use --duration)".to_string())
    })?;

    let transcript = Transcript {
        text,
        duration_secs,
    };
    validate_transcript(&transcript)?;
    Ok(transcript)
}

pub fn validate_transcript(transcript: &Transcript) -> Result<(), InputError> {
    if transcript.text.split_whitespace().next().is_none() {
        return Err(InputError::InvalidInput(
            "introduction text is empty".to_string(),
        ));
    }
    if !transcript.duration_secs.is_finite() || transcript.duration_secs <= 0.0 {
        return Err(InputError::InvalidInput(format!(
            "duration must be a positive number of seconds, got {}",
            transcript.duration_secs
        )));
    }
    Ok(())
}

pub fn source_label(source: &TranscriptSource) -> String {
    match source {
        TranscriptSource::Inline(_) => "inline".to_string(),
        TranscriptSource::Payload(_) => "payload".to_string(),
        TranscriptSource::File(path) | TranscriptSource::PayloadFile(path) => {
            display_name(path)
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
