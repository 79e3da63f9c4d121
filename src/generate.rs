//! Generation run: scan, render every artifact, write it all out.
//!
//! ## Output Structure (default layout)
//!
//! ```text
//! project/
//! ├── src/pages/                  # removed and rebuilt on every run
//! │   ├── index.jsx               # home page
//! │   ├── doc-0002-setup.jsx
//! │   └── decisions/
//! │       └── decision-0001 - Use Kubernetes.jsx
//! ├── src/lib/
//! │   ├── docPages.js             # route manifest module
//! │   └── routes.json             # route manifest for prerender
//! ├── index.html                  # HTML shells, one per route
//! ├── doc-0002-setup.html
//! ├── decisions/
//! │   └── decision-0001 - Use Kubernetes.html
//! └── html-entries.json           # bundler inputs
//! ```
//!
//! Documents are scanned before anything is touched, so a run that fails on
//! a bad document leaves the previous output in place. Once writing starts,
//! the pages directory is replaced wholesale.
//!
//! Output depends only on the documents and the configuration: no
//! timestamps, no hash-map ordering. Running twice gives identical bytes.

use crate::config::{BasePath, SiteConfig};
use crate::home;
use crate::html;
use crate::manifest;
use crate::pages;
use crate::render::RenderError;
use crate::scan::{self, ScanError, ScannedDocument};
use crate::types::{HtmlEntry, PageDescriptor};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot remove {}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What a generation run produced.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    /// Route manifest, in manifest order.
    pub pages: Vec<PageDescriptor>,
    /// HTML shells written, home first.
    pub entries: Vec<HtmlEntry>,
    /// Shells from a previous run that no longer have a route.
    pub removed: Vec<String>,
}

/// Route manifest for a set of scanned documents, in manifest order.
pub fn plan(documents: &[ScannedDocument], config: &SiteConfig) -> Vec<PageDescriptor> {
    let mut pages: Vec<PageDescriptor> = documents
        .iter()
        .map(|doc| pages::descriptor(doc, &config.output.pages_dir))
        .collect();
    manifest::sort_pages(&mut pages);
    pages
}

/// Run the full generation for the project at `root`.
pub fn generate(
    root: &Path,
    config: &SiteConfig,
    base: &BasePath,
) -> Result<GenerateSummary, GenerateError> {
    let documents = scan::scan(root, config)?;
    info!(documents = documents.len(), "scan complete");

    let pages_dir = root.join(&config.output.pages_dir);
    reset_dir(&pages_dir)?;

    for doc in &documents {
        let contents = pages::render_page(doc, &config.pages)?;
        write_file(
            &pages_dir.join(format!("{}.jsx", doc.front_matter.path)),
            &contents,
        )?;
    }

    let pages = plan(&documents, config);

    let lib_dir = root.join(&config.output.lib_dir);
    write_file(
        &lib_dir.join(manifest::DOC_PAGES_FILE),
        &manifest::render_doc_pages(&pages, &config.output.lib_dir, &config.output.pages_dir),
    )?;
    write_file(
        &lib_dir.join(manifest::ROUTES_FILE),
        &manifest::render_routes_json(&pages)?,
    )?;
    write_file(&pages_dir.join(home::HOME_FILE), &home::render_home(config))?;

    let html_dir = root.join(&config.output.html_dir);
    let entries_path = html_dir.join(&config.output.entries_file);
    let shells = html::render_shells(&pages, config, base);
    let removed = remove_stale_shells(&html_dir, &entries_path, &shells)?;

    for shell in &shells {
        write_file(&html_dir.join(&shell.entry.path), &shell.contents)?;
    }
    let entries: Vec<HtmlEntry> = shells.into_iter().map(|s| s.entry).collect();
    write_file(&entries_path, &html::render_entries_json(&entries)?)?;

    info!(
        pages = pages.len(),
        shells = entries.len(),
        removed = removed.len(),
        "generation complete"
    );
    Ok(GenerateSummary {
        pages,
        entries,
        removed,
    })
}

/// Delete shells listed in the previous entries file that this run will
/// not write again.
fn remove_stale_shells(
    html_dir: &Path,
    entries_path: &Path,
    shells: &[html::HtmlShell],
) -> Result<Vec<String>, GenerateError> {
    let previous = match fs::read_to_string(entries_path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(GenerateError::Remove {
                path: entries_path.to_path_buf(),
                source,
            });
        }
    };

    let mut removed = Vec::new();
    for stale in html::stale_shell_paths(&previous) {
        if shells.iter().any(|s| s.entry.path == stale) {
            continue;
        }
        let path = html_dir.join(&stale);
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "removed stale shell");
                removed.push(stale);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(source) => return Err(GenerateError::Remove { path, source }),
        }
    }
    Ok(removed)
}

/// Remove `dir` with everything in it, then recreate it empty.
fn reset_dir(dir: &Path) -> Result<(), GenerateError> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(source) => {
            return Err(GenerateError::Remove {
                path: dir.to_path_buf(),
                source,
            });
        }
    }
    fs::create_dir_all(dir).map_err(|source| GenerateError::Write {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), GenerateError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| GenerateError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "wrote");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn generate_writes_every_artifact() {
        let tmp = TempDir::new().unwrap();
        write_doc(
            tmp.path(),
            "docs/doc-0002-setup.md",
            "---\nid: doc-0002\ntitle: Setup Guide\n---\n# Setup\n",
        );

        let summary = generate(tmp.path(), &SiteConfig::default(), &BasePath::root()).unwrap();
        assert_eq!(summary.pages.len(), 1);
        assert_eq!(summary.entries.len(), 2);

        for file in [
            "src/pages/doc-0002-setup.jsx",
            "src/pages/index.jsx",
            "src/lib/docPages.js",
            "src/lib/routes.json",
            "index.html",
            "doc-0002-setup.html",
            "html-entries.json",
        ] {
            assert!(tmp.path().join(file).is_file(), "missing {file}");
        }
    }

    #[test]
    fn pages_dir_is_rebuilt_from_scratch() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "docs/a.md", "");
        write_doc(tmp.path(), "src/pages/leftover.jsx", "old");

        generate(tmp.path(), &SiteConfig::default(), &BasePath::root()).unwrap();
        assert!(!tmp.path().join("src/pages/leftover.jsx").exists());
        assert!(tmp.path().join("src/pages/a.jsx").exists());
    }

    #[test]
    fn failed_scan_leaves_previous_output() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "docs/a.md", "");
        generate(tmp.path(), &SiteConfig::default(), &BasePath::root()).unwrap();

        write_doc(tmp.path(), "docs/b.md", "---\ntitle: [broken\n---\n");
        let result = generate(tmp.path(), &SiteConfig::default(), &BasePath::root());
        assert!(matches!(result, Err(GenerateError::Scan(_))));
        assert!(tmp.path().join("src/pages/a.jsx").exists());
    }

    #[test]
    fn stale_shells_are_removed() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "docs/keep.md", "");
        write_doc(tmp.path(), "docs/old/gone.md", "");
        generate(tmp.path(), &SiteConfig::default(), &BasePath::root()).unwrap();
        assert!(tmp.path().join("old/gone.html").exists());

        fs::remove_file(tmp.path().join("docs/old/gone.md")).unwrap();
        let summary = generate(tmp.path(), &SiteConfig::default(), &BasePath::root()).unwrap();

        assert_eq!(summary.removed, vec!["old/gone.html"]);
        assert!(!tmp.path().join("old/gone.html").exists());
        assert!(tmp.path().join("keep.html").exists());
        assert!(tmp.path().join("index.html").exists());
    }

    #[test]
    fn unrelated_html_is_not_touched() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "docs/a.md", "");
        write_doc(tmp.path(), "public/404.html", "<p>404</p>");

        generate(tmp.path(), &SiteConfig::default(), &BasePath::root()).unwrap();
        generate(tmp.path(), &SiteConfig::default(), &BasePath::root()).unwrap();
        assert!(tmp.path().join("public/404.html").exists());
    }

    #[test]
    fn plan_orders_by_id() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "docs/a.md", "---\nid: doc-0003\n---\n");
        write_doc(tmp.path(), "docs/b.md", "---\nid: doc-0001\n---\n");
        write_doc(tmp.path(), "docs/c.md", "");

        let config = SiteConfig::default();
        let docs = scan::scan(tmp.path(), &config).unwrap();
        let pages = plan(&docs, &config);
        assert_eq!(page_paths(&pages), vec!["c", "b", "a"]);
    }
}
