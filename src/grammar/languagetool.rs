use std::time::Duration;

use serde::Deserialize;

use crate::grammar::{GrammarChecker, GrammarError, GrammarIssue};

pub const PUBLIC_ENDPOINT: &str = "https://api.languagetool.org";

/// Client for a LanguageTool server's `/v2/check` endpoint.
#[derive(Debug, Clone)]
pub struct LanguageToolChecker {
    client: reqwest::blocking::Client,
    check_url: String,
    language: String,
}

#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<CheckMatch>,
}

#[derive(Debug, Deserialize)]
struct CheckMatch {
    #[serde(default)]
    message: String,
    #[serde(default)]
    offset: usize,
    #[serde(default)]
    length: usize,
    rule: Option<CheckRule>,
}

#[derive(Debug, Deserialize)]
struct CheckRule {
    id: String,
}

impl LanguageToolChecker {
    pub fn new(endpoint: &str, language: &str, timeout: Duration) -> Result<Self, GrammarError> {
        let base = endpoint.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(GrammarError::Config(
                "LanguageTool endpoint is empty".to_string(),
            ));
        }
        if language.trim().is_empty() {
            return Err(GrammarError::Config(
                "LanguageTool language is empty".to_string(),
            ));
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("introscore/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            check_url: format!("{base}/v2/check"),
            language: language.trim().to_string(),
        })
    }

    pub fn check_url(&self) -> &str {
        &self.check_url
    }
}

impl GrammarChecker for LanguageToolChecker {
    fn name(&self) -> &'static str {
        "languagetool"
    }

    fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        tracing::debug!("POST {} ({} bytes)", self.check_url, text.len());
        let response = self
            .client
            .post(&self.check_url)
            .form(&[("language", self.language.as_str()), ("text", text)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GrammarError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let parsed: CheckResponse = response.json()?;
        Ok(parsed
            .matches
            .into_iter()
            .map(|m| GrammarIssue {
                rule_id: m
                    .rule
                    .map(|r| r.id)
                    .unwrap_or_else(|| "UNKNOWN".to_string()),
                message: m.message,
                offset: m.offset,
                length: m.length,
            })
            .collect())
    }
}
