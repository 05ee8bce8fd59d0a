//! Report rendering for find results.

use catscout_finder::FindReport;
use chrono::Local;
use colored::Colorize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Markdown,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            _ => None,
        }
    }
}

pub fn render_report(report: &FindReport, format: &ReportFormat) -> String {
    match format {
        ReportFormat::Text => render_text(report),
        ReportFormat::Json => {
            serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
        }
        ReportFormat::Markdown => render_markdown(report),
    }
}

fn render_text(report: &FindReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Articles in need of attention below '{}'\n\n",
        report.category.bold()
    ));

    if report.pages.is_empty() {
        out.push_str("Nothing found. Either the category is clean or it does not exist.\n");
        return out;
    }

    for page in &report.pages {
        out.push_str(&format!("  {}\n", page.page.green()));
        for problem in &page.problems {
            out.push_str(&format!("    - {problem}\n"));
        }
    }

    out.push_str(&format!("\n{} pages listed", report.pages.len()));
    if report.more {
        out.push_str(" (random sample, more results exist)");
    }
    out.push('\n');
    out
}

fn render_markdown(report: &FindReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Maintenance backlog: {}\n\n", report.category));
    out.push_str(&format!(
        "Generated: {}\n\n",
        Local::now().format("%Y-%m-%d %H:%M")
    ));

    if report.pages.is_empty() {
        out.push_str("No pages found.\n");
        return out;
    }

    for page in &report.pages {
        out.push_str(&format!("- **{}**: {}\n", page.page, page.problems.join(", ")));
    }

    if report.more {
        out.push_str("\n*Random sample; more results exist.*\n");
    }
    out
}
