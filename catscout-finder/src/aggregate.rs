//! Aggregation of per-page problems across the two problem sources.

use crate::category;
use crate::error::Result;
use crate::graph::{GraphService, RowResult};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Page title -> problem labels accumulated across both sources, in the
/// order encountered. Duplicates survive until the sampler deduplicates.
pub type ProblemMap = HashMap<String, Vec<String>>;

/// Query both problem sources over the expanded category set and merge the
/// results into one map.
///
/// The two queries are independent and run concurrently; the merge itself
/// is serialized, tag-source rows first. Tag labels are stored in display
/// form (underscores as spaces); broken-citation labels are taken verbatim.
///
/// A failure of either whole query propagates: partial problem data would
/// silently under-report, so the caller decides what to do. A failure of an
/// individual row is logged and the row skipped.
pub async fn collect_problems<S: GraphService>(
    service: &S,
    categories: &[String],
    tags: &[String],
    catalog: &[String],
) -> Result<ProblemMap> {
    let (tag_rows, link_rows) = futures::future::try_join(
        service.tagged_pages(categories, tags),
        service.broken_link_pages(categories, catalog),
    )
    .await?;

    debug!(
        "Problem queries returned {} tag rows and {} broken-link rows",
        tag_rows.len(),
        link_rows.len()
    );

    let mut problems = ProblemMap::new();
    merge_rows(&mut problems, tag_rows, category::display);
    merge_rows(&mut problems, link_rows, str::to_string);
    Ok(problems)
}

fn merge_rows(problems: &mut ProblemMap, rows: Vec<RowResult>, render: fn(&str) -> String) {
    for row in rows {
        match row {
            Ok(row) => problems
                .entry(row.page)
                .or_default()
                .push(render(&row.label)),
            Err(e) => {
                warn!("Failed to extract problem from query result: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::mock::MockGraph;
    use crate::graph::{ProblemRow, RowError};

    fn row(page: &str, label: &str) -> RowResult {
        Ok(ProblemRow {
            page: page.to_string(),
            label: label.to_string(),
        })
    }

    fn categories() -> Vec<String> {
        vec!["Sport".to_string()]
    }

    #[tokio::test]
    async fn test_merges_both_sources_per_page() {
        let graph = MockGraph {
            tag_rows: vec![row("ArticleA", "Veraltet")],
            link_rows: vec![row("ArticleA", "Defekter Weblink")],
            ..MockGraph::default()
        };

        let problems = collect_problems(&graph, &categories(), &[], &[])
            .await
            .unwrap();

        assert_eq!(
            problems["ArticleA"],
            vec!["Veraltet".to_string(), "Defekter Weblink".to_string()]
        );
    }

    #[tokio::test]
    async fn test_tag_labels_rendered_with_spaces() {
        let graph = MockGraph {
            tag_rows: vec![row("ArticleA", "Belege_fehlen")],
            ..MockGraph::default()
        };

        let problems = collect_problems(&graph, &categories(), &[], &[])
            .await
            .unwrap();

        assert_eq!(problems["ArticleA"], vec!["Belege fehlen".to_string()]);
    }

    #[tokio::test]
    async fn test_broken_link_labels_taken_verbatim() {
        let graph = MockGraph {
            link_rows: vec![row("ArticleB", "Ungeprüfte_Archivlinks_2018-04")],
            ..MockGraph::default()
        };

        let problems = collect_problems(&graph, &categories(), &[], &[])
            .await
            .unwrap();

        assert_eq!(
            problems["ArticleB"],
            vec!["Ungeprüfte_Archivlinks_2018-04".to_string()]
        );
    }

    #[tokio::test]
    async fn test_duplicates_kept_at_this_stage() {
        let graph = MockGraph {
            tag_rows: vec![row("ArticleA", "Lückenhaft"), row("ArticleA", "Lückenhaft")],
            ..MockGraph::default()
        };

        let problems = collect_problems(&graph, &categories(), &[], &[])
            .await
            .unwrap();

        assert_eq!(problems["ArticleA"].len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_row_skipped() {
        let graph = MockGraph {
            tag_rows: vec![
                Err(RowError::MissingField("page")),
                row("ArticleA", "Veraltet"),
            ],
            ..MockGraph::default()
        };

        let problems = collect_problems(&graph, &categories(), &[], &[])
            .await
            .unwrap();

        assert_eq!(problems.len(), 1);
        assert_eq!(problems["ArticleA"], vec!["Veraltet".to_string()]);
    }

    #[tokio::test]
    async fn test_query_failure_propagates() {
        let graph = MockGraph {
            fail_problems: true,
            ..MockGraph::default()
        };

        let result = collect_problems(&graph, &categories(), &[], &[]).await;
        assert!(result.is_err());
    }
}
