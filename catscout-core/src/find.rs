//! Orchestration of a find request against an HTTP graph service.

use crate::config::ScoutConfig;
use catscout_finder::expand::ExpandProgressCallback;
use catscout_finder::{FindError, FindReport, HttpGraphService};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;

/// Options for one find request.
pub struct FindOptions {
    pub category: String,
    pub service_url: String,
    pub max_depth: usize,
    pub sample_cap: usize,
    pub timeout_secs: u64,
    pub show_progress: bool,
}

/// Execute a find request with the given options.
///
/// Builds the HTTP-backed graph service and a configured finder, then runs
/// the expand/aggregate/sample pipeline. With `show_progress` set, a
/// spinner tracks the expansion levels.
pub async fn execute_find(
    options: FindOptions,
    config: &ScoutConfig,
) -> Result<FindReport, FindError> {
    let FindOptions {
        category,
        service_url,
        max_depth,
        sample_cap,
        timeout_secs,
        show_progress,
    } = options;

    let progress_bar = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb.set_message(format!("Searching below '{}'...", category));
        Some(Arc::new(pb))
    } else {
        None
    };

    let service = HttpGraphService::with_timeout(&service_url, timeout_secs)?;
    let mut finder = config
        .finder(service)
        .with_max_depth(max_depth)
        .with_sample_cap(sample_cap);

    if let Some(ref pb) = progress_bar {
        let pb_clone = pb.clone();
        let callback: ExpandProgressCallback = Arc::new(move |depth, total| {
            pb_clone.set_message(format!("Depth {}: {} categories found", depth, total));
        });
        finder = finder.with_progress_callback(callback);
    }

    let result = finder.find_articles(&category).await;

    if let Some(ref pb) = progress_bar {
        match &result {
            Ok(report) => pb.finish_with_message(format!(
                "Done: {} pages found below '{}'",
                report.pages.len(),
                report.category
            )),
            Err(_) => pb.finish_and_clear(),
        }
    }

    result
}
