//! Process-wide configuration.
//!
//! Built once at startup and never mutated afterwards; components receive
//! it by reference.

use crate::catalog;
use catscout_finder::graph::GraphService;
use catscout_finder::Finder;
use serde::{Deserialize, Serialize};

/// Default number of subcategory levels to expand.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Default maximum number of pages to return.
pub const DEFAULT_SAMPLE_CAP: usize = 10;

/// Maintenance tags recognized by the tag query, in stored form.
pub const DEFAULT_TAGS: [&str; 5] = [
    "Überarbeiten",
    "Lückenhaft",
    "Veraltet",
    "Belege_fehlen",
    "Allgemeinverständlichkeit",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutConfig {
    pub tags: Vec<String>,
    pub broken_link_catalog: Vec<String>,
    pub max_depth: usize,
    pub sample_cap: usize,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            tags: DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
            broken_link_catalog: catalog::broken_link_catalog(),
            max_depth: DEFAULT_MAX_DEPTH,
            sample_cap: DEFAULT_SAMPLE_CAP,
        }
    }
}

impl ScoutConfig {
    /// Build a finder over `service` configured from this config.
    pub fn finder<S: GraphService>(&self, service: S) -> Finder<S> {
        Finder::new(service)
            .with_tags(self.tags.clone())
            .with_broken_link_catalog(self.broken_link_catalog.clone())
            .with_max_depth(self.max_depth)
            .with_sample_cap(self.sample_cap)
    }
}
