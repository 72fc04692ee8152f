//! Tests for resolver configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        tie_break = "insertion"

        [limits]
        max_tokens = 5000
        max_total_symbols = 200000
    "#;

    let config = ResolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.tie_break, TieBreak::Insertion);
    assert_eq!(config.limits.max_tokens, Some(5000));
    assert_eq!(config.limits.max_total_symbols, Some(200000));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        tie_break: insertion
        limits:
          max_tokens: 5000
    "#;

    let config = ResolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.tie_break, TieBreak::Insertion);
    assert_eq!(config.limits.max_tokens, Some(5000));
    assert_eq!(config.limits.max_total_symbols, None);
}

#[test]
fn test_defaults() {
    let config = ResolverConfig::from_toml_str("").unwrap();
    assert_eq!(config.tie_break, TieBreak::Sorted);
    assert_eq!(config.limits, LimitsConfig::default());
}

#[test]
fn test_builder() {
    let config = ResolverConfig::new()
        .with_tie_break(TieBreak::Insertion)
        .with_max_tokens(100)
        .with_max_total_symbols(10000);

    assert_eq!(config.tie_break, TieBreak::Insertion);
    assert_eq!(config.limits.max_tokens, Some(100));
    assert_eq!(config.limits.max_total_symbols, Some(10000));
}

#[test]
fn test_invalid_toml_rejected() {
    let result = ResolverConfig::from_toml_str("tie_break = \"random\"");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}
