use catscout_core::find::{execute_find, FindOptions};
use catscout_core::report::{render_report, ReportFormat};
use catscout_core::suggest::SuggestIndex;
use catscout_core::ScoutConfig;
use clap::ArgMatches;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use tracing::warn;
use url::Url;

const DEFAULT_INDEX_PATH: &str = "~/.config/catscout/categories.json";

/// Resolve the suggestion index path, expanding `~`.
pub fn resolve_index_path(index_arg: Option<&String>) -> PathBuf {
    let raw = index_arg.map(|s| s.as_str()).unwrap_or(DEFAULT_INDEX_PATH);
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Load the suggestion index, falling back to an empty one when the file
/// is missing or unreadable. Suggestions still work via the fixed fallback
/// list.
pub fn load_index(index_arg: Option<&String>) -> SuggestIndex {
    let path = resolve_index_path(index_arg);
    match SuggestIndex::load(&path) {
        Ok(index) => index,
        Err(e) => {
            warn!("No usable suggestion index: {:#}", e);
            SuggestIndex::default()
        }
    }
}

pub async fn handle_find(args: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let category = args.get_one::<String>("category").unwrap();
    let service_url = args.get_one::<Url>("service-url").unwrap();
    let depth = args.get_one::<usize>("depth").unwrap();
    let limit = args.get_one::<usize>("limit").unwrap();
    let timeout = args.get_one::<u64>("timeout").unwrap();
    let format_arg = args.get_one::<String>("format").unwrap();
    let output = args.get_one::<PathBuf>("output");

    let format = match ReportFormat::from_str(format_arg) {
        Some(format) => format,
        None => {
            eprintln!("{} Unknown report format: {}", "[!]".red(), format_arg);
            std::process::exit(1);
        }
    };

    let config = ScoutConfig::default();
    let options = FindOptions {
        category: category.clone(),
        service_url: service_url.as_str().to_string(),
        max_depth: *depth,
        sample_cap: *limit,
        timeout_secs: *timeout,
        show_progress: output.is_none(),
    };

    let report = match execute_find(options, &config).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} Find failed: {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    let rendered = render_report(&report, &format);
    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, &rendered) {
                eprintln!(
                    "{} Failed to write report to {}: {}",
                    "[!]".red(),
                    path.display(),
                    e
                );
                std::process::exit(1);
            }
            println!("Report saved to {}", path.display());
        }
        None => {
            println!("\n{rendered}");
        }
    }
}

pub fn handle_suggest(args: &ArgMatches) {
    let count = args.get_one::<usize>("count").unwrap();
    let index = load_index(args.get_one::<String>("index"));

    println!("Try one of these categories:\n");
    for name in index.suggest(*count) {
        println!("  {}", name.cyan());
    }
}

pub fn handle_complete(args: &ArgMatches) {
    let prefix = args.get_one::<String>("PREFIX").unwrap();
    let index = load_index(args.get_one::<String>("index"));

    let matches = index.autocomplete(prefix);
    if matches.is_empty() {
        println!("No categories starting with '{prefix}'.");
        return;
    }
    for name in matches {
        println!("{name}");
    }
}
