use super::*;

fn parse(args: &[&str]) -> ScoreArgs {
    let mut argv = vec!["introscore", "score"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    let Command::Score(args) = cli.command;
    args
}

#[test]
fn test_parse_args_text_source_defaults() {
    let args = parse(&["--text", "Hello there", "--duration", "30"]);
    assert_eq!(args.text.as_deref(), Some("Hello there"));
    assert_eq!(args.duration, Some(30.0));
    assert_eq!(args.format, FormatArg::Json);
    assert!(args.out.is_none());
    assert!(matches!(
        transcript_source(&args).unwrap(),
        TranscriptSource::Inline(_)
    ));
}

#[test]
fn test_parse_args_requires_exactly_one_source() {
    assert!(Cli::try_parse_from(["introscore", "score", "--duration", "30"]).is_err());
    assert!(
        Cli::try_parse_from([
            "introscore",
            "score",
            "--text",
            "hi",
            "--input",
            "intro.txt"
        ])
        .is_err()
    );
}

#[test]
fn test_parse_args_payload_file_and_text_format() {
    let args = parse(&["--payload-file", "req.json", "--format", "text"]);
    assert_eq!(args.format, FormatArg::Text);
    match transcript_source(&args).unwrap() {
        TranscriptSource::PayloadFile(p) => assert_eq!(p, PathBuf::from("req.json")),
        other => panic!("unexpected source: {other:?}"),
    }
}

#[test]
fn test_resolve_config_cli_overrides() {
    let args = parse(&[
        "--text",
        "hi",
        "--grammar-backend",
        "languagetool",
        "--grammar-endpoint",
        "http://localhost:8081",
        "--keyword-threshold",
        "0.5",
    ]);
    let config = resolve_config(&args).unwrap();
    assert_eq!(config.grammar.backend, GrammarBackend::LanguageTool);
    assert_eq!(config.grammar.endpoint, "http://localhost:8081");
    assert_eq!(config.keywords.match_threshold, 0.5);
}

#[test]
fn test_resolve_config_rejects_bad_threshold() {
    let args = parse(&["--text", "hi", "--keyword-threshold", "1.5"]);
    assert!(matches!(
        resolve_config(&args),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_build_grammar_checker_default_is_rules() {
    let checker = build_grammar_checker(&ScorerConfig::default()).unwrap();
    assert_eq!(checker.name(), "rules");
}
