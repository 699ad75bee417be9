pub mod stage1_prepare;
pub mod stage2_content;
pub mod stage3_delivery;
pub mod stage4_language;
pub mod stage5_engagement;
pub mod stage6_aggregate;
pub mod stage7_report;

use crate::config::ConfigError;
use crate::grammar::{GrammarChecker, GrammarError};
use crate::input::{InputError, Transcript, validate_transcript};
use crate::lexicon::{LexiconError, RubricLexicon};
use crate::model::thresholds::ScoringProfile;
use crate::report::AnalysisReport;

use stage1_prepare::run_stage1;
use stage2_content::run_stage2;
use stage3_delivery::run_stage3;
use stage4_language::run_stage4;
use stage5_engagement::run_stage5;
use stage6_aggregate::{Stage6Inputs, run_stage6};

#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
    #[error("grammar check failed: {0}")]
    Grammar(#[from] GrammarError),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs every rubric scorer over a transcript.
pub struct RubricScorer {
    lexicon: RubricLexicon,
    profile: ScoringProfile,
    grammar: Box<dyn GrammarChecker>,
}

impl RubricScorer {
    pub fn new(
        lexicon: RubricLexicon,
        profile: ScoringProfile,
        grammar: Box<dyn GrammarChecker>,
    ) -> Self {
        Self {
            lexicon,
            profile,
            grammar,
        }
    }

    pub fn grammar_backend(&self) -> &'static str {
        self.grammar.name()
    }

    pub fn score(&self, transcript: &Transcript) -> Result<AnalysisReport, ScoreError> {
        validate_transcript(transcript)?;

        let prepared = run_stage1(transcript, self.profile.flow_min_sentence_chars);
        tracing::debug!(
            words = prepared.word_count,
            sentences = prepared.sentences.len(),
            "transcript prepared"
        );

        let content = run_stage2(&prepared, &self.lexicon, &self.profile);
        let delivery = run_stage3(&prepared, self.lexicon.fillers, &self.profile);
        let language = run_stage4(&prepared, self.grammar.as_ref(), &self.profile)?;
        let engagement = run_stage5(&prepared, &self.lexicon.sentiment, &self.profile);

        Ok(run_stage6(Stage6Inputs {
            prepared: &prepared,
            content,
            delivery,
            language,
            engagement,
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/scorer.rs"]
mod tests;
