//! Integration tests for jidhr-analysis
//!
//! Tests cover:
//! - Config file loading and validation
//! - Factory-built filters over token streams
//! - Analyzer behavior driven by config

use std::collections::HashMap;
use std::fs;

use jidhr_analysis::{
    AnalysisError, Analyzer, AnalyzerConfig, IsriAnalyzer, StemFilterFactory, Token,
};

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_config_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analyzer.json");

    let config = AnalyzerConfig {
        stemming: false,
        min_token_length: 2,
        ..Default::default()
    };
    config.to_path(&path).unwrap();

    let loaded = AnalyzerConfig::from_path(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_file_rejects_invalid_lengths() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analyzer.json");
    fs::write(&path, r#"{"min_token_length": 8, "max_token_length": 4}"#).unwrap();

    let err = AnalyzerConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidConfig(_)));
}

#[test]
fn test_config_file_reports_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analyzer.json");
    fs::write(&path, "{ not json").unwrap();

    let err = AnalyzerConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, AnalysisError::Config(_)));
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AnalyzerConfig::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, AnalysisError::Io(_)));
}

// ============================================================================
// Filter Tests
// ============================================================================

#[test]
fn test_factory_filter_over_token_stream() {
    let factory = StemFilterFactory::from_args(HashMap::new()).unwrap();
    let filter = factory.create();

    let stream = ["والكتاب", " ", "استخدام", "هناك"]
        .into_iter()
        .enumerate()
        .map(|(position, text)| Token::new(text, position));
    let out = filter.filter(stream);

    let texts: Vec<&str> = out.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["كتب", "خدم", "هناك"]);
    let positions: Vec<usize> = out.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![0, 2, 3]);
}

#[test]
fn test_factory_rejects_unknown_parameters() {
    let mut args = HashMap::new();
    args.insert("ignoreCase".to_string(), "true".to_string());
    let err = StemFilterFactory::from_args(args).unwrap_err();
    assert!(matches!(err, AnalysisError::UnknownArgument(ref keys) if keys == "ignoreCase"));
}

// ============================================================================
// Analyzer Tests
// ============================================================================

#[test]
fn test_analyzer_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analyzer.json");
    fs::write(&path, r#"{"min_token_length": 3}"#).unwrap();

    let analyzer = IsriAnalyzer::new(AnalyzerConfig::from_path(&path).unwrap());
    assert_eq!(analyzer.config().min_token_length, 3);

    let tokens = analyzer.analyze("ذهب الطلاب إلى المكتبة");
    assert_eq!(tokens, vec!["ذهب", "طلب", "الى", "كتب"]);
}

#[test]
fn test_analyzer_keeps_stop_words_intact() {
    let analyzer = IsriAnalyzer::default();
    let tokens = analyzer.analyze("الَّذِي يكتبون");
    assert_eq!(tokens, vec!["الذي", "كتب"]);
}
