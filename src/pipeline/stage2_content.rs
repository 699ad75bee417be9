use std::collections::{BTreeMap, HashSet};

use crate::lexicon::defs::{KeywordCategoryDef, KeywordGroup, SalutationDef, SalutationTier};
use crate::lexicon::{FlowPatterns, RubricLexicon, Section};
use crate::model::rubric::Criterion;
use crate::model::scores::{
    FlowDetails, KeywordDetails, KeywordMatch, MetricDetails, MetricScore, SalutationDetails,
};
use crate::model::thresholds::ScoringProfile;
use crate::pipeline::stage1_prepare::{PreparedTranscript, count_sequence, phrase_tokens};
use crate::report::round_to;

/// Similarity given to a keyword whose tokens all occur, but not contiguously.
const SCATTERED_TOKEN_WEIGHT: f64 = 0.8;

#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub salutation: MetricScore,
    pub keywords: MetricScore,
    pub flow: MetricScore,
}

pub fn run_stage2(
    prepared: &PreparedTranscript<'_>,
    lexicon: &RubricLexicon,
    profile: &ScoringProfile,
) -> Stage2Output {
    let salutation = score_salutation(prepared, lexicon.salutations);
    let keywords = score_keywords(
        prepared,
        lexicon.keyword_categories,
        profile.keyword_match_threshold,
    );
    let flow = score_flow(prepared, &lexicon.flow, profile.flow_min_sentences);
    tracing::debug!(
        salutation = salutation.score,
        keywords = keywords.score,
        flow = flow.score,
        "content scored"
    );
    Stage2Output {
        salutation,
        keywords,
        flow,
    }
}

pub fn score_salutation(prepared: &PreparedTranscript<'_>, defs: &[SalutationDef]) -> MetricScore {
    let mut best: Option<(SalutationTier, &str)> = None;
    for def in defs {
        if best.is_some_and(|(tier, _)| tier >= def.tier) {
            continue;
        }
        if let Some(phrase) = def.phrases.iter().copied().find(|p| prepared.contains_phrase(p)) {
            best = Some((def.tier, phrase));
        }
    }

    let criterion = Criterion::Salutation;
    let score = best.map(|(tier, _)| tier.points()).unwrap_or(0);
    let feedback = match best {
        Some((tier, _)) => format!(
            "Salutation effectiveness: {}/{} ({} greeting)",
            score,
            criterion.max_score(),
            tier.label()
        ),
        None => format!(
            "Salutation effectiveness: 0/{} (no greeting found)",
            criterion.max_score()
        ),
    };
    MetricScore::new(criterion, score, feedback).with_details(MetricDetails::Salutation(
        SalutationDetails {
            tier: best.map(|(tier, _)| tier.label().to_string()),
            matched_phrase: best.map(|(_, phrase)| phrase.to_string()),
        },
    ))
}

/// Crude suffix stripping so "plays"/"playing"/"played" meet "play".
pub fn stem(token: &str) -> String {
    let t = token.to_lowercase();
    let n = t.chars().count();
    if n > 5 && t.ends_with("ing") {
        return t[..t.len() - 3].to_string();
    }
    if n > 4 && t.ends_with("ies") {
        return format!("{}y", &t[..t.len() - 3]);
    }
    if n > 4 && t.ends_with("ed") {
        return t[..t.len() - 2].to_string();
    }
    if n > 3 && t.ends_with('s') && !t.ends_with("ss") && !t.ends_with('\'') {
        return t[..t.len() - 1].to_string();
    }
    t
}

#[derive(Debug, Clone)]
pub struct KeywordIndex {
    stems: Vec<String>,
    stem_set: HashSet<String>,
}

impl KeywordIndex {
    pub fn new(prepared: &PreparedTranscript<'_>) -> Self {
        let stems: Vec<String> = prepared.phrase_tokens.iter().map(|t| stem(t)).collect();
        let stem_set = stems.iter().cloned().collect();
        Self { stems, stem_set }
    }

    /// 1.0 for a contiguous hit, otherwise the present-token fraction scaled
    /// by `SCATTERED_TOKEN_WEIGHT`.
    pub fn similarity(&self, keyword: &str) -> f64 {
        let needle: Vec<String> = phrase_tokens(keyword).iter().map(|t| stem(t)).collect();
        if needle.is_empty() {
            return 0.0;
        }
        if count_sequence(&self.stems, &needle) > 0 {
            return 1.0;
        }
        if needle.len() == 1 {
            return 0.0;
        }
        let present = needle.iter().filter(|t| self.stem_set.contains(*t)).count();
        SCATTERED_TOKEN_WEIGHT * present as f64 / needle.len() as f64
    }
}

pub fn score_keywords(
    prepared: &PreparedTranscript<'_>,
    categories: &[KeywordCategoryDef],
    threshold: f64,
) -> MetricScore {
    let index = KeywordIndex::new(prepared);
    let mut matches = Vec::new();
    let mut missing = Vec::new();
    let mut raw_points = 0u32;

    for category in categories {
        let mut best: Option<(&str, f64)> = None;
        for &keyword in category.keywords {
            let sim = index.similarity(keyword);
            if best.is_none_or(|(_, b)| sim > b) {
                best = Some((keyword, sim));
            }
        }
        match best {
            Some((keyword, sim)) if sim >= threshold => {
                raw_points += category.points;
                matches.push(KeywordMatch {
                    category: category.id.to_string(),
                    keyword: keyword.to_string(),
                    similarity: round_to(sim, 3),
                    points: category.points,
                });
            }
            _ => {
                if category.group == KeywordGroup::MustHave {
                    tracing::debug!("must-have category '{}' not covered", category.id);
                }
                missing.push(category.id.to_string());
            }
        }
    }

    let criterion = Criterion::KeyWord;
    let score = raw_points.min(criterion.max_score());
    let mut feedback = format!(
        "Key information coverage: {}/{}",
        score,
        criterion.max_score()
    );
    if !missing.is_empty() {
        feedback.push_str(&format!(" (missing: {})", missing.join(", ")));
    }
    MetricScore::new(criterion, score, feedback).with_details(MetricDetails::Keywords(
        KeywordDetails {
            matches,
            missing,
            raw_points,
        },
    ))
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowAnalysis {
    pub correct: bool,
    /// First sentence index of each section that occurs.
    pub first_index: BTreeMap<Section, usize>,
    pub reason: Option<String>,
}

impl FlowAnalysis {
    fn fail(first_index: BTreeMap<Section, usize>, reason: impl Into<String>) -> Self {
        Self {
            correct: false,
            first_index,
            reason: Some(reason.into()),
        }
    }

    /// Sections ordered by where they first appear.
    pub fn ordered_sections(&self) -> Vec<Section> {
        let mut ordered: Vec<(usize, Section)> =
            self.first_index.iter().map(|(s, i)| (*i, *s)).collect();
        ordered.sort();
        ordered.into_iter().map(|(_, s)| s).collect()
    }
}

/// Expected order: salutation, name, mandatory, optional (if any), closing.
pub fn analyze_flow(sentences: &[&str], patterns: &FlowPatterns, min_sentences: usize) -> FlowAnalysis {
    let mut first_index = BTreeMap::new();
    if sentences.len() < min_sentences {
        return FlowAnalysis::fail(
            first_index,
            format!(
                "too few sentences ({} found, {} needed)",
                sentences.len(),
                min_sentences
            ),
        );
    }

    for (idx, sentence) in sentences.iter().enumerate() {
        if let Some(section) = patterns.classify(&sentence.to_lowercase()) {
            first_index.entry(section).or_insert(idx);
        }
    }

    let required = [
        Section::Salutation,
        Section::Name,
        Section::Mandatory,
        Section::Closing,
    ];
    let missing: Vec<&str> = required
        .iter()
        .filter(|s| !first_index.contains_key(*s))
        .map(|s| s.label())
        .collect();
    if !missing.is_empty() {
        return FlowAnalysis::fail(
            first_index,
            format!("missing sections: {}", missing.join(", ")),
        );
    }

    let mut chain = vec![Section::Salutation, Section::Name, Section::Mandatory];
    if first_index.contains_key(&Section::Optional) {
        chain.push(Section::Optional);
    }
    chain.push(Section::Closing);

    for pair in chain.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if first_index[&a] >= first_index[&b] {
            return FlowAnalysis::fail(
                first_index,
                format!("{} should come before {}", a.label(), b.label()),
            );
        }
    }

    FlowAnalysis {
        correct: true,
        first_index,
        reason: None,
    }
}

pub fn score_flow(
    prepared: &PreparedTranscript<'_>,
    patterns: &FlowPatterns,
    min_sentences: usize,
) -> MetricScore {
    let analysis = analyze_flow(&prepared.sentences, patterns, min_sentences);
    let criterion = Criterion::Flow;
    let score = if analysis.correct {
        criterion.max_score()
    } else {
        0
    };
    let mut feedback = format!("Introduction flow: {}/{}", score, criterion.max_score());
    if let Some(reason) = &analysis.reason {
        feedback.push_str(&format!(" ({reason})"));
    }
    MetricScore::new(criterion, score, feedback).with_details(MetricDetails::Flow(FlowDetails {
        correct: analysis.correct,
        sections: analysis
            .ordered_sections()
            .iter()
            .map(|s| s.label().to_string())
            .collect(),
        reason: analysis.reason.clone(),
    }))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_content.rs"]
mod tests;
