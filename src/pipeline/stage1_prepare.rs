use crate::input::Transcript;

#[derive(Debug, Clone)]
pub struct PreparedTranscript<'a> {
    pub text: &'a str,
    pub duration_secs: f64,
    /// Whitespace-separated words; the denominator of every rate.
    pub word_count: usize,
    /// Lower-cased `\w+` runs.
    pub tokens: Vec<String>,
    /// Lower-cased words with inner apostrophes kept, punctuation dropped.
    pub phrase_tokens: Vec<String>,
    pub sentences: Vec<&'a str>,
}

impl PreparedTranscript<'_> {
    /// Whether `phrase` occurs as a contiguous token sequence.
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        self.count_phrase(phrase) > 0
    }

    pub fn count_phrase(&self, phrase: &str) -> usize {
        let needle = phrase_tokens(phrase);
        count_sequence(&self.phrase_tokens, &needle)
    }
}

pub fn run_stage1<'a>(transcript: &'a Transcript, min_sentence_chars: usize) -> PreparedTranscript<'a> {
    let text = transcript.text.as_str();
    PreparedTranscript {
        text,
        duration_secs: transcript.duration_secs,
        word_count: text.split_whitespace().count(),
        tokens: word_tokens(text),
        phrase_tokens: phrase_tokens(text),
        sentences: split_sentences(text, min_sentence_chars),
    }
}

pub fn word_tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

pub fn phrase_tokens(text: &str) -> Vec<String> {
    let normalized = text.replace('\u{2019}', "'");
    normalized
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Splits on runs of `.`, `!`, `?`; keeps trimmed sentences longer than
/// `min_chars` characters.
pub fn split_sentences(text: &str, min_chars: usize) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > min_chars)
        .collect()
}

pub fn count_sequence(haystack: &[String], needle: &[String]) -> usize {
    if needle.is_empty() || needle.len() > haystack.len() {
        return 0;
    }
    haystack
        .windows(needle.len())
        .filter(|w| w.iter().zip(needle).all(|(a, b)| a == b))
        .count()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_prepare.rs"]
mod tests;
