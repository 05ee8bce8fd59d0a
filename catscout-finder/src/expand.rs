//! Bounded-depth expansion of a category subtree.

use crate::category;
use crate::graph::GraphService;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Called after each expansion level with (depth, total categories found).
pub type ExpandProgressCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// Collect the set of categories at or below `root`, following subcategory
/// links for at most `max_depth` levels.
///
/// The expansion is an iterative breadth-first loop: at each level the
/// frontier (minus namespace-qualified names, which are never expanded) is
/// submitted as one batch query, and only categories not already in the
/// accumulated set become the next frontier. Cycles terminate through the
/// depth bound, not through cycle detection.
///
/// A failed level query is treated as yielding no subcategories: the error
/// is logged, traversal stops, and everything discovered so far is kept.
/// The returned set therefore always contains at least the normalized root.
pub async fn expand_subtree<S: GraphService>(
    service: &S,
    root: &str,
    max_depth: usize,
    progress: Option<&ExpandProgressCallback>,
) -> HashSet<String> {
    let root = category::normalize(root);
    let mut tree = HashSet::from([root.clone()]);
    let mut frontier = vec![root];

    for depth in 0..max_depth {
        // Namespace-qualified categories stay in the set but are leaves
        // for traversal purposes.
        frontier.retain(|name| !category::is_namespaced(name));
        if frontier.is_empty() {
            break;
        }

        debug!(
            "Expanding {} categories at depth {}",
            frontier.len(),
            depth + 1
        );

        let subcategories = match service.subcategories_of(&frontier).await {
            Ok(subcategories) => subcategories,
            Err(e) => {
                warn!("Subcategory query failed at depth {}: {}", depth + 1, e);
                break;
            }
        };

        frontier = subcategories
            .into_iter()
            .filter(|name| tree.insert(name.clone()))
            .collect();

        if let Some(callback) = progress {
            callback(depth + 1, tree.len());
        }
    }

    tree
}
