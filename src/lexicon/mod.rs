pub mod defs;
pub mod flow;
pub mod sentiment;

use std::path::Path;

pub use defs::{KeywordCategoryDef, SalutationDef};
pub use flow::{FlowPatterns, Section};
pub use sentiment::SentimentLexicon;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("failed to load lexicon {path}: {message}")]
    Load { path: String, message: String },
    #[error("lexicon {origin}, line {line}: {message}")]
    Parse {
        origin: String,
        line: usize,
        message: String,
    },
}

/// Everything the scorers look words up in, built once per run.
#[derive(Debug, Clone)]
pub struct RubricLexicon {
    pub salutations: &'static [SalutationDef],
    pub keyword_categories: &'static [KeywordCategoryDef],
    pub fillers: &'static [&'static str],
    pub flow: FlowPatterns,
    pub sentiment: SentimentLexicon,
}

impl RubricLexicon {
    pub fn load(sentiment_path: Option<&Path>) -> Result<Self, LexiconError> {
        let sentiment = match sentiment_path {
            Some(path) => SentimentLexicon::load(path)?,
            None => SentimentLexicon::builtin()?,
        };
        Ok(Self {
            salutations: defs::builtin_salutations(),
            keyword_categories: defs::builtin_keyword_categories(),
            fillers: defs::builtin_fillers(),
            flow: FlowPatterns::builtin()?,
            sentiment,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/lexicon/tests.rs"]
mod tests;
