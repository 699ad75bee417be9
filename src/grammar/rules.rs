use crate::grammar::{GrammarChecker, GrammarError, GrammarIssue};

/// Words that legitimately repeat ("I had had enough").
const REPEAT_ALLOWED: &[&str] = &["had", "that"];

/// Vowel-initial words pronounced with a consonant sound ("a university").
const CONSONANT_SOUND_PREFIXES: &[&str] = &["uni", "use", "usu", "uti", "eu", "one", "once"];

/// Consonant-initial words pronounced with a vowel sound ("an hour").
const VOWEL_SOUND_PREFIXES: &[&str] = &["hour", "honest", "honor", "honour", "heir"];

/// Offline, deterministic checker covering the mistakes that show up most
/// in transcribed student speech.
#[derive(Debug, Clone, Default)]
pub struct RuleChecker;

impl RuleChecker {
    pub fn new() -> Self {
        Self
    }
}

impl GrammarChecker for RuleChecker {
    fn name(&self) -> &'static str {
        "rules"
    }

    fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        let words = word_spans(text);
        let mut issues = Vec::new();
        check_lowercase_i(text, &words, &mut issues);
        check_repeated_words(text, &words, &mut issues);
        check_articles(text, &words, &mut issues);
        check_sentence_start(text, &mut issues);
        check_spacing(text, &mut issues);
        check_final_punctuation(text, &mut issues);
        issues.sort_by_key(|i| (i.offset, i.rule_id.clone()));
        Ok(issues)
    }
}

#[derive(Debug, Clone, Copy)]
struct WordSpan {
    start: usize,
    end: usize,
}

impl WordSpan {
    fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '\u{2019}'
}

fn word_spans(text: &str) -> Vec<WordSpan> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    for (idx, c) in text.char_indices() {
        if is_word_char(c) {
            if start.is_none() {
                start = Some(idx);
            }
        } else if let Some(s) = start.take() {
            spans.push(WordSpan { start: s, end: idx });
        }
    }
    if let Some(s) = start {
        spans.push(WordSpan {
            start: s,
            end: text.len(),
        });
    }
    spans
}

fn issue(rule_id: &str, message: String, offset: usize, length: usize) -> GrammarIssue {
    GrammarIssue {
        rule_id: rule_id.to_string(),
        message,
        offset,
        length,
    }
}

fn only_whitespace_between(text: &str, a: &WordSpan, b: &WordSpan) -> bool {
    text[a.end..b.start].chars().all(char::is_whitespace)
}

fn check_lowercase_i(text: &str, words: &[WordSpan], issues: &mut Vec<GrammarIssue>) {
    for w in words {
        let word = w.text(text);
        if word == "i" || word.starts_with("i'") || word.starts_with("i\u{2019}") {
            issues.push(issue(
                "LOWERCASE_I",
                "The pronoun 'I' is always capitalized.".to_string(),
                w.start,
                1,
            ));
        }
    }
}

fn check_repeated_words(text: &str, words: &[WordSpan], issues: &mut Vec<GrammarIssue>) {
    for pair in words.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let wa = a.text(text).to_lowercase();
        if wa != b.text(text).to_lowercase() || !only_whitespace_between(text, a, b) {
            continue;
        }
        if REPEAT_ALLOWED.contains(&wa.as_str()) || wa.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        issues.push(issue(
            "REPEATED_WORD",
            format!("Possible repeated word: '{wa}'."),
            a.start,
            b.end - a.start,
        ));
    }
}

fn starts_with_vowel_sound(word: &str) -> Option<bool> {
    let lower = word.to_lowercase();
    let first = lower.chars().next()?;
    if !first.is_alphabetic() {
        return None;
    }
    if VOWEL_SOUND_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return Some(true);
    }
    if CONSONANT_SOUND_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return Some(false);
    }
    Some(matches!(first, 'a' | 'e' | 'i' | 'o' | 'u'))
}

fn check_articles(text: &str, words: &[WordSpan], issues: &mut Vec<GrammarIssue>) {
    for pair in words.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if !only_whitespace_between(text, a, b) {
            continue;
        }
        let article = a.text(text).to_lowercase();
        let next = b.text(text);
        // Single letters ("a B section") are spelled out, skip them.
        if next.chars().count() < 2 {
            continue;
        }
        let Some(vowel) = starts_with_vowel_sound(next) else {
            continue;
        };
        let message = match (article.as_str(), vowel) {
            ("a", true) => format!("Use 'an' instead of 'a' before '{next}'."),
            ("an", false) => format!("Use 'a' instead of 'an' before '{next}'."),
            _ => continue,
        };
        issues.push(issue("EN_A_VS_AN", message, a.start, a.end - a.start));
    }
}

fn check_sentence_start(text: &str, issues: &mut Vec<GrammarIssue>) {
    let mut expect_capital = true;
    let mut after_terminator = false;
    for (idx, c) in text.char_indices() {
        if matches!(c, '.' | '!' | '?') {
            after_terminator = true;
            continue;
        }
        if c.is_whitespace() {
            if after_terminator {
                expect_capital = true;
                after_terminator = false;
            }
            continue;
        }
        after_terminator = false;
        if !expect_capital {
            continue;
        }
        if c.is_alphabetic() {
            if c.is_lowercase() {
                issues.push(issue(
                    "UPPERCASE_SENTENCE_START",
                    "This sentence does not start with an uppercase letter.".to_string(),
                    idx,
                    c.len_utf8(),
                ));
            }
            expect_capital = false;
        } else if c.is_numeric() {
            expect_capital = false;
        }
    }
}

fn check_spacing(text: &str, issues: &mut Vec<GrammarIssue>) {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut idx = 0usize;
    while idx < chars.len() {
        let (offset, c) = chars[idx];

        if c == ' ' {
            let mut run_end = idx;
            while run_end + 1 < chars.len() && chars[run_end + 1].1 == ' ' {
                run_end += 1;
            }
            let next = chars.get(run_end + 1).map(|&(_, ch)| ch);
            let prev = idx.checked_sub(1).map(|p| chars[p].1);
            let inside_line = prev.is_some_and(|p| !p.is_whitespace())
                && next.is_some_and(|n| !n.is_whitespace());
            if run_end > idx && inside_line {
                issues.push(issue(
                    "WHITESPACE_RULE",
                    "Possible typo: you repeated a whitespace.".to_string(),
                    offset,
                    run_end - idx + 1,
                ));
            }
            if let Some(p) = next.filter(|n| matches!(n, ',' | '.' | '!' | '?' | ';' | ':')) {
                if prev.is_some_and(|ch| ch.is_alphanumeric()) {
                    issues.push(issue(
                        "COMMA_PARENTHESIS_WHITESPACE",
                        format!("Don't put a space before '{p}'."),
                        offset,
                        run_end - idx + 1,
                    ));
                }
            }
            idx = run_end + 1;
            continue;
        }

        if c == ',' {
            if let Some(&(_, next)) = chars.get(idx + 1) {
                if next.is_alphabetic() {
                    issues.push(issue(
                        "COMMA_PARENTHESIS_WHITESPACE",
                        "Put a space after the comma.".to_string(),
                        offset,
                        1,
                    ));
                }
            }
        }
        idx += 1;
    }
}

fn check_final_punctuation(text: &str, issues: &mut Vec<GrammarIssue>) {
    let trimmed = text.trim_end();
    let Some(last) = trimmed.chars().last() else {
        return;
    };
    if !matches!(last, '.' | '!' | '?' | '"' | '\'' | ')' | '\u{201d}') {
        issues.push(issue(
            "PUNCTUATION_PARAGRAPH_END",
            "The text does not end with punctuation.".to_string(),
            trimmed.len() - last.len_utf8(),
            last.len_utf8(),
        ));
    }
}
