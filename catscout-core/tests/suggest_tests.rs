// Tests for category autocompletion and random suggestions

use catscout_core::suggest::{SuggestIndex, FALLBACK_SUGGESTIONS};
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

fn index_with(entries: &[(&str, &[&str])]) -> SuggestIndex {
    let buckets: HashMap<String, Vec<String>> = entries
        .iter()
        .map(|(key, names)| {
            (
                key.to_string(),
                names.iter().map(|n| n.to_string()).collect(),
            )
        })
        .collect();
    SuggestIndex::from_buckets(buckets)
}

// ============================================================================
// Autocomplete Tests
// ============================================================================

#[test]
fn test_autocomplete_filters_by_prefix() {
    let index = index_with(&[("Fuß", &["Fußball", "Fußgänger", "Futur"])]);
    let matches = index.autocomplete("fußb");
    assert_eq!(matches, vec!["Fußball"]);
}

#[test]
fn test_autocomplete_is_case_insensitive() {
    let index = index_with(&[("Chi", &["China", "Chile"])]);
    let matches = index.autocomplete("CHI");
    assert_eq!(matches, vec!["China", "Chile"]);
}

#[test]
fn test_autocomplete_capitalizes_bucket_key() {
    let index = index_with(&[("Spo", &["Sport"])]);
    assert_eq!(index.autocomplete("spo"), vec!["Sport"]);
    assert_eq!(index.autocomplete("sPO"), vec!["Sport"]);
}

#[test]
fn test_autocomplete_skips_namespaced_categories() {
    let index = index_with(&[("Wik", &["Wikipedia:Hauptseite", "Wikinger"])]);
    assert_eq!(index.autocomplete("wik"), vec!["Wikinger"]);
}

#[test]
fn test_autocomplete_empty_prefix_yields_nothing() {
    let index = index_with(&[("Chi", &["China"])]);
    assert!(index.autocomplete("").is_empty());
}

#[test]
fn test_autocomplete_unknown_bucket_yields_nothing() {
    let index = index_with(&[("Chi", &["China"])]);
    assert!(index.autocomplete("xyz").is_empty());
}

// ============================================================================
// Random Suggestion Tests
// ============================================================================

#[test]
fn test_suggest_draws_from_index() {
    let index = index_with(&[("Chi", &["China", "Chile"]), ("Spo", &["Sport"])]);
    let suggestions = index.suggest(2);
    assert_eq!(suggestions.len(), 2);
    for name in &suggestions {
        assert!(["China", "Chile", "Sport"].contains(&name.as_str()));
    }
}

#[test]
fn test_suggest_caps_at_available_names() {
    let index = index_with(&[("Chi", &["China"])]);
    assert_eq!(index.suggest(5), vec!["China"]);
}

#[test]
fn test_suggest_falls_back_when_index_empty() {
    let index = SuggestIndex::default();
    let suggestions = index.suggest(3);
    assert_eq!(suggestions.len(), FALLBACK_SUGGESTIONS.len());
    assert!(suggestions.contains(&"Fußball".to_string()));
}

#[test]
fn test_suggest_falls_back_when_only_namespaced_names() {
    let index = index_with(&[("Wik", &["Wikipedia:Hauptseite"])]);
    assert_eq!(index.suggest(1).len(), FALLBACK_SUGGESTIONS.len());
}

// ============================================================================
// Index Loading Tests
// ============================================================================

#[test]
fn test_load_index_from_json_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    write!(temp_file, r#"{{"Chi": ["China", "Chile"]}}"#)?;

    let index = SuggestIndex::load(temp_file.path())?;
    assert_eq!(index.autocomplete("chi"), vec!["China", "Chile"]);
    Ok(())
}

#[test]
fn test_load_index_rejects_invalid_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    write!(temp_file, "not json")?;

    assert!(SuggestIndex::load(temp_file.path()).is_err());
    Ok(())
}

#[test]
fn test_load_index_missing_file_is_an_error() {
    assert!(SuggestIndex::load(std::path::Path::new("/nonexistent/index.json")).is_err());
}
