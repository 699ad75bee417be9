use std::collections::BTreeMap;

use crate::model::rubric::Criterion;
use crate::model::scores::{FillerDetails, MetricDetails, MetricScore, SpeechRateDetails};
use crate::model::thresholds::ScoringProfile;
use crate::pipeline::stage1_prepare::PreparedTranscript;
use crate::report::round_to;

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub words_per_minute: f64,
    pub speech_rate: MetricScore,
    pub fillers: MetricScore,
}

pub fn run_stage3(
    prepared: &PreparedTranscript<'_>,
    fillers: &[&str],
    profile: &ScoringProfile,
) -> Stage3Output {
    let words_per_minute = speech_rate(prepared.word_count, prepared.duration_secs);
    let speech_rate = score_speech_rate(words_per_minute, profile);
    let fillers = score_fillers(prepared, fillers, profile);
    tracing::debug!(
        wpm = words_per_minute,
        speech_rate = speech_rate.score,
        fillers = fillers.score,
        "delivery scored"
    );
    Stage3Output {
        words_per_minute,
        speech_rate,
        fillers,
    }
}

/// Words per minute; 0 for a non-positive duration.
pub fn speech_rate(word_count: usize, duration_secs: f64) -> f64 {
    if duration_secs <= 0.0 || !duration_secs.is_finite() {
        return 0.0;
    }
    word_count as f64 / (duration_secs / 60.0)
}

pub fn score_speech_rate(words_per_minute: f64, profile: &ScoringProfile) -> MetricScore {
    let score = profile.speech_rate.lookup(words_per_minute);
    let rounded = round_to(words_per_minute, 2);
    let pace = if words_per_minute < 111.0 {
        "slow"
    } else if words_per_minute < 141.0 {
        "ideal"
    } else {
        "fast"
    };
    MetricScore::new(
        Criterion::SpeechRate,
        score,
        format!("Speech pace: {rounded} words/minute ({pace})"),
    )
    .with_details(MetricDetails::SpeechRate(SpeechRateDetails {
        words_per_minute: rounded,
    }))
}

pub fn count_fillers(prepared: &PreparedTranscript<'_>, fillers: &[&str]) -> BTreeMap<String, usize> {
    let mut found = BTreeMap::new();
    for &filler in fillers {
        let n = prepared.count_phrase(filler);
        if n > 0 {
            found.insert(filler.to_string(), n);
        }
    }
    found
}

pub fn score_fillers(
    prepared: &PreparedTranscript<'_>,
    fillers: &[&str],
    profile: &ScoringProfile,
) -> MetricScore {
    let found = count_fillers(prepared, fillers);
    let filler_count: usize = found.values().sum();
    let rate = if prepared.word_count == 0 {
        0.0
    } else {
        filler_count as f64 / prepared.word_count as f64 * 100.0
    };
    let score = profile.filler_rate.lookup(rate);
    let feedback = if filler_count == 0 {
        "Clarity and filler word usage: no filler words detected".to_string()
    } else {
        format!(
            "Clarity and filler word usage: {} filler word(s), {:.2} per 100 words",
            filler_count, rate
        )
    };
    MetricScore::new(Criterion::FillerWordRate, score, feedback).with_details(
        MetricDetails::Fillers(FillerDetails {
            filler_count,
            rate_per_hundred: round_to(rate, 2),
            found,
        }),
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_delivery.rs"]
mod tests;
