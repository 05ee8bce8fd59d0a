//! Deduplication and size-bounded sampling of the aggregated problem map.

use crate::aggregate::ProblemMap;
use crate::result::PageProblems;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Turn the problem map into the final page list.
///
/// Each page's problem list is deduplicated (first occurrence wins). If
/// more than `cap` distinct pages were found, a uniform random sample of
/// exactly `cap` pages is drawn without replacement and the second return
/// value is `true`. Sampling is uniform over pages, not weighted by how
/// many problems a page carries. The returned list is sorted by page name
/// for stable display.
pub fn finalize(problems: ProblemMap, cap: usize) -> (Vec<PageProblems>, bool) {
    let mut pages: Vec<PageProblems> = problems
        .into_iter()
        .map(|(page, labels)| {
            let mut seen = HashSet::new();
            let problems = labels
                .into_iter()
                .filter(|label| seen.insert(label.clone()))
                .collect();
            PageProblems { page, problems }
        })
        .collect();

    let more = pages.len() > cap;
    if more {
        let mut rng = rand::thread_rng();
        pages.shuffle(&mut rng);
        pages.truncate(cap);
    }

    pages.sort_by(|a, b| a.page.cmp(&b.page));
    (pages, more)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &[&str])]) -> ProblemMap {
        entries
            .iter()
            .map(|(page, labels)| {
                (
                    page.to_string(),
                    labels.iter().map(|l| l.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_problem_lists_deduplicated() {
        let (pages, more) = finalize(
            map(&[("ArticleA", &["Lückenhaft", "Lückenhaft", "Veraltet"])]),
            10,
        );
        assert!(!more);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].problems, vec!["Lückenhaft", "Veraltet"]);
    }

    #[test]
    fn test_under_cap_returns_everything() {
        let (pages, more) = finalize(map(&[("A", &["x"]), ("B", &["y"])]), 10);
        assert!(!more);
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn test_exactly_cap_is_not_truncated() {
        let entries: Vec<(String, Vec<String>)> = (0..10)
            .map(|i| (format!("Article{i}"), vec!["x".to_string()]))
            .collect();
        let (pages, more) = finalize(entries.into_iter().collect(), 10);
        assert!(!more);
        assert_eq!(pages.len(), 10);
    }

    #[test]
    fn test_over_cap_samples_exactly_cap() {
        let entries: Vec<(String, Vec<String>)> = (0..15)
            .map(|i| (format!("Article{i:02}"), vec!["x".to_string()]))
            .collect();
        let (pages, more) = finalize(entries.into_iter().collect(), 10);
        assert!(more);
        assert_eq!(pages.len(), 10);

        // No page appears twice in the sample.
        let distinct: HashSet<&str> = pages.iter().map(|p| p.page.as_str()).collect();
        assert_eq!(distinct.len(), 10);
    }

    #[test]
    fn test_idempotent_below_cap() {
        let input = map(&[("A", &["x", "y", "x"]), ("B", &["z"])]);
        let (first, _) = finalize(input.clone(), 10);
        let (second, _) = finalize(input, 10);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_map() {
        let (pages, more) = finalize(ProblemMap::new(), 10);
        assert!(pages.is_empty());
        assert!(!more);
    }
}
