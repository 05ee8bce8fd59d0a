//! Top-level orchestration of a find request.

use crate::aggregate;
use crate::category;
use crate::error::{FindError, Result};
use crate::expand::{self, ExpandProgressCallback};
use crate::graph::GraphService;
use crate::result::FindReport;
use crate::sample;
use tracing::info;

pub struct Finder<S> {
    service: S,
    tags: Vec<String>,
    broken_link_catalog: Vec<String>,
    max_depth: usize,
    sample_cap: usize,
    progress_callback: Option<ExpandProgressCallback>,
}

impl<S: GraphService> Finder<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            tags: Vec::new(),
            broken_link_catalog: Vec::new(),
            max_depth: 3,
            sample_cap: 10,
            progress_callback: None,
        }
    }

    /// Maintenance-tag labels recognized by the tag query.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Broken-citation categories queried as the second problem source.
    /// Not part of the traversed tree.
    pub fn with_broken_link_catalog(mut self, catalog: Vec<String>) -> Self {
        self.broken_link_catalog = catalog;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_sample_cap(mut self, cap: usize) -> Self {
        self.sample_cap = cap;
        self
    }

    pub fn with_progress_callback(mut self, callback: ExpandProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Find a bounded sample of pages below `category` that need editorial
    /// attention.
    ///
    /// Expands the category subtree, aggregates the two problem sources
    /// over it, and samples the result. A fault during expansion degrades
    /// to the categories discovered so far; a fault in the problem queries
    /// is fatal for the request.
    pub async fn find_articles(&self, category: &str) -> Result<FindReport> {
        let root = category::normalize(category);
        if root.is_empty() {
            return Err(FindError::EmptyCategory);
        }

        info!("Finding articles below '{}'", root);

        let tree = expand::expand_subtree(
            &self.service,
            &root,
            self.max_depth,
            self.progress_callback.as_ref(),
        )
        .await;
        let categories: Vec<String> = tree.into_iter().collect();

        let problems = aggregate::collect_problems(
            &self.service,
            &categories,
            &self.tags,
            &self.broken_link_catalog,
        )
        .await?;

        let (pages, more) = sample::finalize(problems, self.sample_cap);
        info!(
            "Found {} pages below '{}' ({} categories examined, more: {})",
            pages.len(),
            root,
            categories.len(),
            more
        );

        Ok(FindReport {
            category: category::display(&root),
            pages,
            more,
        })
    }
}
