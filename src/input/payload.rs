use serde::Deserialize;

use crate::input::InputError;

/// Request body the web front-end forwards: `{"introduction": ..., "duration": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntroPayload {
    pub introduction: String,
    pub duration: f64,
}

#[derive(Debug, Deserialize)]
struct RawPayload {
    introduction: Option<String>,
    duration: Option<RawDuration>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDuration {
    Number(f64),
    Text(String),
}

pub fn parse_payload(raw: &str) -> Result<IntroPayload, InputError> {
    let parsed: RawPayload = serde_json::from_str(raw)
        .map_err(|e| InputError::Parse(format!("payload is not valid JSON: {e}")))?;

    let introduction = parsed
        .introduction
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| InputError::MissingInput("payload field 'introduction'".to_string()))?;

    let duration = match parsed.duration {
        Some(RawDuration::Number(v)) => v,
        Some(RawDuration::Text(s)) => s.trim().parse::<f64>().map_err(|_| {
            InputError::InvalidInput(format!("payload field 'duration' is not numeric: {s}"))
        })?,
        None => {
            return Err(InputError::MissingInput(
                "payload field 'duration'".to_string(),
            ));
        }
    };

    Ok(IntroPayload {
        introduction,
        duration,
    })
}
