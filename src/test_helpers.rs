//! Shared test utilities for the docsite-gen test suite.
//!
//! Provides fixture setup, document writers and lookup helpers that work with
//! scan-phase and manifest data.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let config = load_config(tmp.path(), None).unwrap();
//! let docs = scan(tmp.path(), &config).unwrap();
//!
//! let doc = find_document(&docs, "/doc-0002-setup");
//! assert_eq!(doc.front_matter.title, "Setup Guide");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::ScannedDocument;
use crate::types::PageDescriptor;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/project/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/project");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write `content` to `root/relative`, creating parent directories.
pub fn write_doc(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a scanned document by route. Panics if not found.
pub fn find_document<'a>(docs: &'a [ScannedDocument], route: &str) -> &'a ScannedDocument {
    docs.iter().find(|d| d.route() == route).unwrap_or_else(|| {
        let routes: Vec<String> = docs.iter().map(|d| d.route()).collect();
        panic!("document '{route}' not found. Available: {routes:?}")
    })
}

/// All page paths in manifest order.
pub fn page_paths(pages: &[PageDescriptor]) -> Vec<&str> {
    pages.iter().map(|p| p.path.as_str()).collect()
}
