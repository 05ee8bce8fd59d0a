//! Category autocompletion and random suggestions.
//!
//! Suggestions come from a pregenerated JSON index mapping capitalized
//! three-letter prefixes to category names. The index is optional; without
//! one, a small fixed list keeps the feature usable.

use anyhow::Context;
use catscout_finder::category;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Shown when no index is available or the index has nothing to offer.
pub const FALLBACK_SUGGESTIONS: [&str; 3] = ["China", "19. Jahrhundert", "Fußball"];

#[derive(Debug, Default)]
pub struct SuggestIndex {
    buckets: HashMap<String, Vec<String>>,
}

impl SuggestIndex {
    /// Load the index from a JSON file of `{prefix: [category, ...]}`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        info!("Loading suggestion index from '{}'", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read suggestion index {}", path.display()))?;
        let buckets: HashMap<String, Vec<String>> = serde_json::from_str(&content)
            .with_context(|| format!("Invalid suggestion index {}", path.display()))?;
        Ok(Self { buckets })
    }

    pub fn from_buckets(buckets: HashMap<String, Vec<String>>) -> Self {
        Self { buckets }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Category names starting with `prefix`, case-insensitively.
    /// Namespace-qualified names are never suggested.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let key = capitalize(&prefix.chars().take(3).collect::<String>());
        let prefix = prefix.to_lowercase();
        self.buckets
            .get(&key)
            .map(|names| {
                names
                    .iter()
                    .filter(|name| !category::is_namespaced(name))
                    .filter(|name| name.to_lowercase().starts_with(&prefix))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// A random selection of `count` category names, falling back to the
    /// fixed list when the index has nothing to offer.
    pub fn suggest(&self, count: usize) -> Vec<String> {
        let candidates: Vec<&String> = self
            .buckets
            .values()
            .flatten()
            .filter(|name| !category::is_namespaced(name))
            .collect();

        if candidates.is_empty() {
            return FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
        }

        let mut rng = rand::thread_rng();
        candidates
            .choose_multiple(&mut rng, count)
            .map(|name| name.to_string())
            .collect()
    }
}

/// First character uppercased, the rest lowercased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
