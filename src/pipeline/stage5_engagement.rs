use crate::lexicon::SentimentLexicon;
use crate::model::rubric::Criterion;
use crate::model::scores::{MetricDetails, MetricScore, SentimentDetails};
use crate::model::thresholds::ScoringProfile;
use crate::pipeline::stage1_prepare::PreparedTranscript;
use crate::report::round_to;

#[derive(Debug, Clone)]
pub struct Stage5Output {
    pub sentiment: MetricScore,
}

pub fn run_stage5(
    prepared: &PreparedTranscript<'_>,
    lexicon: &SentimentLexicon,
    profile: &ScoringProfile,
) -> Stage5Output {
    let sentiment = score_sentiment(&prepared.tokens, lexicon, profile);
    tracing::debug!(sentiment = sentiment.score, "engagement scored");
    Stage5Output { sentiment }
}

/// Share of tokens with a positive lexicon valence, rounded to 4 decimals.
pub fn positive_word_probability(tokens: &[String], lexicon: &SentimentLexicon) -> f64 {
    let total = tokens.len().max(1);
    let positive = tokens.iter().filter(|t| lexicon.is_positive(t)).count();
    round_to(positive as f64 / total as f64, 4)
}

pub fn score_sentiment(
    tokens: &[String],
    lexicon: &SentimentLexicon,
    profile: &ScoringProfile,
) -> MetricScore {
    let probability = positive_word_probability(tokens, lexicon);
    let compound = lexicon.compound(tokens);
    let score = profile.sentiment.lookup(probability);

    let mut positive_words: Vec<String> = Vec::new();
    for token in tokens {
        if lexicon.is_positive(token) && !positive_words.contains(token) {
            positive_words.push(token.clone());
        }
    }

    let tone = if compound >= 0.05 {
        "positive"
    } else if compound <= -0.05 {
        "negative"
    } else {
        "neutral"
    };
    MetricScore::new(
        Criterion::Sentiment,
        score,
        format!(
            "Positive tone and engagement: {:.1}% positive words, overall tone {}",
            probability * 100.0,
            tone
        ),
    )
    .with_details(MetricDetails::Sentiment(SentimentDetails {
        positive_probability: probability,
        compound: round_to(compound, 4),
        positive_words,
    }))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_engagement.rs"]
mod tests;
