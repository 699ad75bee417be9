pub mod languagetool;
pub mod rules;

pub use languagetool::LanguageToolChecker;
pub use rules::RuleChecker;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarIssue {
    pub rule_id: String,
    pub message: String,
    /// Position in the checked text; LanguageTool counts chars, `RuleChecker` bytes.
    pub offset: usize,
    pub length: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("grammar service request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("grammar service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid grammar checker configuration: {0}")]
    Config(String),
}

pub trait GrammarChecker {
    fn name(&self) -> &'static str;
    fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, GrammarError>;
}

#[cfg(test)]
#[path = "../../tests/src_inline/grammar/tests.rs"]
mod tests;
