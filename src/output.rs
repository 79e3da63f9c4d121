//! CLI output formatting for every command.
//!
//! Output is **information-centric, not file-centric**: each page leads with
//! its position in the manifest and its title, with routes and file paths as
//! indented context lines.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Pages
//! 001 Use Kubernetes
//!     Route: /decisions/decision-0001 - Use Kubernetes
//!     Source: decisions/decision-0001 - Use Kubernetes.md
//! 002 Setup Guide (doc-0002)
//!     Route: /doc-0002-setup
//!     Source: docs/doc-0002-setup.md
//!
//! Found 2 pages
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! 001 Use Kubernetes → decisions/decision-0001 - Use Kubernetes.html
//!     Page: src/pages/decisions/decision-0001 - Use Kubernetes.jsx
//! 002 Setup Guide → doc-0002-setup.html
//!     Page: src/pages/doc-0002-setup.jsx
//!
//! Removed
//!     old-page.html
//!
//! Generated 2 pages, 3 HTML entries
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::generate::GenerateSummary;
use crate::naming;
use crate::scan::ScannedDocument;
use crate::types::PageDescriptor;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Page header: index + title, with the id when there is one.
///
/// ```text
/// 002 Setup Guide (doc-0002)
/// 001 Use Kubernetes
/// ```
fn page_header(index: usize, page: &PageDescriptor) -> String {
    if page.id.is_empty() {
        format!("{} {}", format_index(index), page.title)
    } else {
        format!("{} {} ({})", format_index(index), page.title, page.id)
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the inventory printed by `check`.
///
/// `pages` is in manifest order; `documents` supplies source files, shown
/// relative to `root` when possible. Scanned source paths are canonical, so
/// `root` should be too.
pub fn format_check_output(
    pages: &[PageDescriptor],
    documents: &[ScannedDocument],
    root: &Path,
) -> Vec<String> {
    let sources: HashMap<&str, &Path> = documents
        .iter()
        .map(|d| (d.front_matter.path.as_str(), d.record.source_path.as_path()))
        .collect();

    let mut lines = vec!["Pages".to_string()];
    for (i, page) in pages.iter().enumerate() {
        lines.push(page_header(i + 1, page));
        lines.push(format!("{}Route: {}", indent(1), page.route));
        if let Some(source) = sources.get(page.path.as_str()) {
            let shown = source.strip_prefix(root).unwrap_or(source);
            lines.push(format!("{}Source: {}", indent(1), shown.display()));
        }
    }

    lines.push(String::new());
    lines.push(format!("Found {}", plural(pages.len(), "page")));
    lines
}

/// Print check output to stdout.
pub fn print_check_output(pages: &[PageDescriptor], documents: &[ScannedDocument], root: &Path) {
    for line in format_check_output(pages, documents, root) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate
// ============================================================================

/// Format the result of a generation run.
pub fn format_generate_output(summary: &GenerateSummary) -> Vec<String> {
    let mut lines = Vec::new();
    let shells: HashSet<&str> = summary.entries.iter().map(|e| e.path.as_str()).collect();

    lines.push("Home → index.html".to_string());
    for (i, page) in summary.pages.iter().enumerate() {
        let html_path = naming::html_path_for_route(&page.route);
        if shells.contains(html_path.as_str()) {
            lines.push(format!("{} → {}", page_header(i + 1, page), html_path));
        } else {
            lines.push(page_header(i + 1, page));
        }
        lines.push(format!("{}Page: {}", indent(1), page.file_path));
    }

    if !summary.removed.is_empty() {
        lines.push(String::new());
        lines.push("Removed".to_string());
        for path in &summary.removed {
            lines.push(format!("{}{}", indent(1), path));
        }
    }

    lines.push(String::new());
    let entries = match summary.entries.len() {
        1 => "1 HTML entry".to_string(),
        n => format!("{n} HTML entries"),
    };
    lines.push(format!(
        "Generated {}, {}",
        plural(summary.pages.len(), "page"),
        entries
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(summary: &GenerateSummary) {
    for line in format_generate_output(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Prerender
// ============================================================================

/// Format the files written by `prerender`.
pub fn format_prerender_output(written: &[String], dist: &Path) -> Vec<String> {
    let mut lines: Vec<String> = written
        .iter()
        .map(|file| format!("{} → {}", file, dist.join(file).display()))
        .collect();
    lines.push(String::new());
    lines.push(format!("Prerendered {}", plural(written.len(), "route")));
    lines
}

/// Print prerender output to stdout.
pub fn print_prerender_output(written: &[String], dist: &Path) {
    for line in format_prerender_output(written, dist) {
        println!("{}", line);
    }
}
