use std::collections::HashMap;
use std::path::Path;

use crate::input::reader::read_text;
use crate::lexicon::LexiconError;

const BUILTIN_LEXICON: &str = include_str!("../../data/sentiment_lexicon.tsv");

/// Normalisation constant for the compound polarity, as in VADER.
const COMPOUND_ALPHA: f64 = 15.0;

/// Token valences in VADER lexicon layout: `token<TAB>valence[<TAB>...]`.
#[derive(Debug, Clone, Default)]
pub struct SentimentLexicon {
    valences: HashMap<String, f64>,
}

impl SentimentLexicon {
    pub fn builtin() -> Result<Self, LexiconError> {
        Self::parse(BUILTIN_LEXICON, "builtin")
    }

    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let content = read_text(path).map_err(|e| LexiconError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let lexicon = Self::parse(&content, &path.display().to_string())?;
        tracing::info!(
            "loaded sentiment lexicon {} ({} entries)",
            path.display(),
            lexicon.len()
        );
        Ok(lexicon)
    }

    pub fn parse(content: &str, origin: &str) -> Result<Self, LexiconError> {
        let mut valences = HashMap::new();
        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim_end();
            if line.trim().is_empty() || line.starts_with("# ") {
                continue;
            }
            let mut fields = line.split('\t');
            let token = fields.next().unwrap_or("").trim();
            let value = fields.next().map(str::trim).unwrap_or("");
            if token.is_empty() {
                continue;
            }
            let valence = value.parse::<f64>().map_err(|_| LexiconError::Parse {
                origin: origin.to_string(),
                line: idx + 1,
                message: format!("valence for '{token}' is not numeric: '{value}'"),
            })?;
            if valences.insert(token.to_lowercase(), valence).is_some() {
                tracing::warn!(
                    "duplicate lexicon token '{}' in {} (line {}); keeping last",
                    token,
                    origin,
                    idx + 1
                );
            }
        }
        let lexicon = Self { valences };
        if lexicon.is_empty() {
            return Err(LexiconError::Parse {
                origin: origin.to_string(),
                line: 0,
                message: "lexicon has no entries".to_string(),
            });
        }
        Ok(lexicon)
    }

    pub fn valence(&self, token: &str) -> f64 {
        self.valences.get(token).copied().unwrap_or(0.0)
    }

    pub fn is_positive(&self, token: &str) -> bool {
        self.valence(token) > 0.0
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }

    /// Sum of token valences squashed into `[-1, 1]`.
    pub fn compound(&self, tokens: &[String]) -> f64 {
        let sum: f64 = tokens.iter().map(|t| self.valence(t)).sum();
        if sum == 0.0 {
            return 0.0;
        }
        let norm = sum / (sum * sum + COMPOUND_ALPHA).sqrt();
        norm.clamp(-1.0, 1.0)
    }
}
