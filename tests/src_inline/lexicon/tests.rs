use super::defs::{builtin_fillers, builtin_keyword_categories, builtin_salutations};
use super::flow::{FlowPatterns, Section, builtin_sections};
use super::sentiment::SentimentLexicon;
use super::{LexiconError, RubricLexicon};

#[test]
fn test_salutation_tiers_strongest_first() {
    let defs = builtin_salutations();
    assert_eq!(defs.len(), 3);
    assert!(defs.windows(2).all(|w| w[0].tier > w[1].tier));
    assert_eq!(defs[0].tier.points(), 5);
    let mid = defs[1].phrases;
    assert!(!mid.contains(&"Salutations everyone"));
    assert!(!mid.contains(&"To all attendees, hello"));
}

#[test]
fn test_keyword_points_total() {
    let total: u32 = builtin_keyword_categories().iter().map(|c| c.points).sum();
    assert_eq!(total, 28);
    assert!(builtin_keyword_categories().iter().all(|c| !c.keywords.is_empty()));
}

#[test]
fn test_fillers_lowercase() {
    assert!(builtin_fillers().iter().all(|f| f.chars().all(|c| !c.is_uppercase())));
    assert!(builtin_fillers().contains(&"you know"));
}

#[test]
fn test_flow_patterns_compile_and_classify() {
    let flow = FlowPatterns::builtin().unwrap();
    assert_eq!(flow.matchers.len(), builtin_sections().len());
    assert_eq!(flow.classify("good morning everyone"), Some(Section::Salutation));
    assert_eq!(flow.classify("my name is arjun"), Some(Section::Name));
    assert_eq!(flow.classify("i am 13 years old"), Some(Section::Name));
    assert_eq!(flow.classify("there are 4 people in my family"), Some(Section::Mandatory));
    assert_eq!(flow.classify("i love painting"), Some(Section::Optional));
    assert_eq!(flow.classify("thank you for listening"), Some(Section::Closing));
    assert_eq!(flow.classify("the sky was grey"), None);
}

#[test]
fn test_flow_patterns_keep_full_phrases() {
    let flow = FlowPatterns::builtin().unwrap();
    // Only the full "looking forward to sharing my story" is a greeting.
    assert_eq!(
        flow.classify("looking forward to working with you"),
        Some(Section::Optional)
    );
    assert_eq!(
        flow.classify("i am delighted to be part of this class"),
        Some(Section::Name)
    );
    assert_eq!(
        flow.classify("delighted to introduce myself"),
        Some(Section::Salutation)
    );
    assert_eq!(flow.classify("that's all about me"), Some(Section::Closing));
}

#[test]
fn test_invalid_pattern_reported() {
    let defs = [super::flow::SectionDef {
        section: Section::Closing,
        patterns: &[r"(unclosed"],
    }];
    assert!(matches!(
        FlowPatterns::compile(&defs),
        Err(LexiconError::Pattern { .. })
    ));
}

#[test]
fn test_builtin_sentiment_lexicon() {
    let lex = SentimentLexicon::builtin().unwrap();
    assert!(lex.len() > 100);
    assert!(lex.is_positive("happy"));
    assert!(lex.is_positive("wish"));
    assert!(!lex.is_positive("sad"));
    assert!(lex.valence("afraid") < 0.0);
    assert!(!lex.is_positive("table"));
    assert_eq!(lex.valence("table"), 0.0);
}

#[test]
fn test_sentiment_lexicon_parse_vader_layout() {
    let content = "# comment line\nhappy\t2.7\t0.8\t[3, 2, 3]\nawful\t-2.0\t1.0\n\n";
    let lex = SentimentLexicon::parse(content, "test").unwrap();
    assert_eq!(lex.len(), 2);
    assert_eq!(lex.valence("happy"), 2.7);
    assert_eq!(lex.valence("awful"), -2.0);
}

#[test]
fn test_sentiment_lexicon_parse_errors() {
    assert!(matches!(
        SentimentLexicon::parse("happy\tvery\n", "test"),
        Err(LexiconError::Parse { line: 1, .. })
    ));
    assert!(SentimentLexicon::parse("# only a comment\n", "test").is_err());
}

#[test]
fn test_compound_is_bounded() {
    let lex = SentimentLexicon::builtin().unwrap();
    let positive: Vec<String> = ["love", "great", "happy"].iter().map(|s| s.to_string()).collect();
    let negative: Vec<String> = ["hate", "worst"].iter().map(|s| s.to_string()).collect();
    let neutral: Vec<String> = vec!["table".to_string()];
    let c = lex.compound(&positive);
    assert!(c > 0.9 && c <= 1.0);
    assert!(lex.compound(&negative) < -0.8);
    assert_eq!(lex.compound(&neutral), 0.0);
}

#[test]
fn test_rubric_lexicon_loads_external_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.txt");
    std::fs::write(&path, "brilliant\t2.8\n").unwrap();
    let lex = RubricLexicon::load(Some(&path)).unwrap();
    assert_eq!(lex.sentiment.len(), 1);
    assert!(RubricLexicon::load(Some(&dir.path().join("missing.txt"))).is_err());
    assert!(RubricLexicon::load(None).unwrap().sentiment.len() > 100);
}
