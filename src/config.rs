//! Optional TOML configuration.
//!
//! Every section and field may be omitted; command-line flags are applied on
//! top of whatever the file provides.
//!
//! ```toml
//! [grammar]
//! backend = "languagetool"
//! endpoint = "https://api.languagetool.org"
//! language = "en-US"
//! timeout_secs = 20
//!
//! [keywords]
//! match_threshold = 0.75
//!
//! [sentiment]
//! lexicon_path = "vader_lexicon.txt"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grammar::languagetool::PUBLIC_ENDPOINT;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScorerConfig {
    pub grammar: GrammarSection,
    pub keywords: KeywordSection,
    pub sentiment: SentimentSection,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GrammarBackend {
    #[default]
    Rules,
    LanguageTool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GrammarSection {
    pub backend: GrammarBackend,
    pub endpoint: String,
    pub language: String,
    pub timeout_secs: u64,
}

impl Default for GrammarSection {
    fn default() -> Self {
        Self {
            backend: GrammarBackend::Rules,
            endpoint: PUBLIC_ENDPOINT.to_string(),
            language: "en-US".to_string(),
            timeout_secs: 20,
        }
    }
}

impl GrammarSection {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct KeywordSection {
    pub match_threshold: f64,
}

impl Default for KeywordSection {
    fn default() -> Self {
        Self {
            match_threshold: 0.75,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SentimentSection {
    pub lexicon_path: Option<PathBuf>,
}

impl ScorerConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })?;
        // Relative lexicon paths are taken from the config file's directory.
        Ok(config.resolve_relative_to(path.parent().unwrap_or_else(|| Path::new("."))))
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: "<inline>".to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = self.keywords.match_threshold;
        if !t.is_finite() || !(0.0..=1.0).contains(&t) {
            return Err(ConfigError::Validation(format!(
                "keywords.match_threshold must be within [0, 1], got {t}"
            )));
        }
        if self.grammar.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "grammar.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.grammar.backend == GrammarBackend::LanguageTool
            && self.grammar.endpoint.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "grammar.endpoint is required for the languagetool backend".to_string(),
            ));
        }
        Ok(())
    }

    fn resolve_relative_to(mut self, base: &Path) -> Self {
        if let Some(path) = &self.sentiment.lexicon_path {
            if path.is_relative() {
                self.sentiment.lexicon_path = Some(base.join(path));
            }
        }
        self
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
