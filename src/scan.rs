//! Document discovery and front matter extraction.
//!
//! Stage 1 of the pipeline. Walks every configured source tree, reads each
//! document's front matter and produces the list of [`ScannedDocument`]s the
//! later stages render.
//!
//! ## Directory Structure
//!
//! ```text
//! docs/                                  # source: category "docs", no prefix
//! ├── doc-0001-overview.md               # → /doc-0001-overview
//! ├── doc-0002-setup.md                  # → /doc-0002-setup
//! └── guides/
//!     └── deploy.md                      # → /guides/deploy
//! decisions/                             # source: category "decisions", prefix "decisions"
//! └── decision-0001 - Use Kubernetes.md  # → /decisions/decision-0001 - Use Kubernetes
//! ```
//!
//! ## Traversal
//!
//! Directories are walked with an explicit stack, so deeply nested trees do
//! not grow the call stack. Entries are visited in file-name order, which
//! makes the discovery order, and therefore the output, deterministic.
//! Hidden entries (leading `.`) are documents like any other.
//!
//! Symlinked directories are followed. A link back to one of its own
//! ancestors is reported as [`ScanError::SymlinkLoop`].
//!
//! ## Validation
//!
//! Every failure is fatal; there are no partial results:
//! - unreadable or missing source directory, unreadable document
//! - malformed front matter
//! - two documents mapping to the same route
//! - a document whose route would shadow the home page (`/index`)
//! - two documents mapping to the same HTML entry name (`a_b` and `a/b`)

use crate::config::{SiteConfig, SourceConfig};
use crate::frontmatter::{self, FrontMatterError};
use crate::metadata;
use crate::naming;
use crate::types::FrontMatter;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("symlink loop: {} points back to one of its parent directories", .0.display())]
    SymlinkLoop(PathBuf),
    #[error(transparent)]
    FrontMatter(#[from] FrontMatterError),
    #[error("route {route} is produced by both {} and {}", first.display(), second.display())]
    DuplicateRoute {
        route: String,
        first: PathBuf,
        second: PathBuf,
    },
    #[error("{}: route /index is reserved for the home page", .0.display())]
    ReservedRoute(PathBuf),
    #[error("HTML entry `{name}` is produced by both {} and {}", first.display(), second.display())]
    DuplicateEntry {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
    #[error("{}: HTML entry `index` is reserved for the home page", .0.display())]
    ReservedEntry(PathBuf),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ScanError + '_ {
    move |source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// A discovered document file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Absolute path of the document.
    pub source_path: PathBuf,
    /// Route path: source prefix + path inside the source, `/`-separated,
    /// extension removed (`decisions/decision-0001`).
    pub relative_path: String,
    /// Path inside the source tree, `/`-separated, extension removed.
    pub source_relative: String,
    pub file_name: String,
    /// Extension as written on disk, without the dot.
    pub extension: String,
    pub category: String,
}

/// A document with its resolved metadata.
#[derive(Debug, Clone)]
pub struct ScannedDocument {
    pub record: DocumentRecord,
    pub front_matter: FrontMatter,
    /// Bundler import of the document content (`@docs/setup.md?mdx`).
    pub import_path: String,
}

impl ScannedDocument {
    pub fn route(&self) -> String {
        naming::route_for(&self.record.relative_path)
    }
}

/// Scan every configured source below `root`.
///
/// Documents are returned in discovery order: sources in configuration
/// order, files depth-first in name order within each source.
pub fn scan(root: &Path, config: &SiteConfig) -> Result<Vec<ScannedDocument>, ScanError> {
    let mut documents = Vec::new();
    let mut routes: HashMap<String, PathBuf> = HashMap::new();
    let mut entries: HashMap<String, PathBuf> = HashMap::new();

    for source in &config.sources {
        let dir = root.join(&source.dir);
        let records = discover(&dir, source)?;
        debug!(source = %dir.display(), count = records.len(), "discovered documents");

        for record in records {
            if record.relative_path == "index" {
                return Err(ScanError::ReservedRoute(record.source_path));
            }
            let route = naming::route_for(&record.relative_path);
            if let Some(first) = routes.get(&route) {
                return Err(ScanError::DuplicateRoute {
                    route,
                    first: first.clone(),
                    second: record.source_path,
                });
            }
            // Bundler inputs are keyed by entry name, so `a_b` and `a/b` clash.
            let entry = naming::entry_name(&naming::html_path_for_route(&route));
            if entry == "index" {
                return Err(ScanError::ReservedEntry(record.source_path));
            }
            if let Some(first) = entries.get(&entry) {
                return Err(ScanError::DuplicateEntry {
                    name: entry,
                    first: first.clone(),
                    second: record.source_path,
                });
            }
            routes.insert(route, record.source_path.clone());
            entries.insert(entry, record.source_path.clone());

            documents.push(read_document(record, source)?);
        }
    }

    Ok(documents)
}

/// Read one document and resolve its front matter.
pub fn read_document(
    record: DocumentRecord,
    source: &SourceConfig,
) -> Result<ScannedDocument, ScanError> {
    let content = fs::read_to_string(&record.source_path).map_err(io_error(&record.source_path))?;
    let raw = frontmatter::parse(&record.source_path, &content)?;
    let front_matter = metadata::resolve_front_matter(&raw, &record);
    let import_path = format!(
        "{}/{}.{}?mdx",
        source.import_alias(),
        record.source_relative,
        record.extension
    );
    debug!(path = %record.relative_path, title = %front_matter.title, "parsed document");

    Ok(ScannedDocument {
        record,
        front_matter,
        import_path,
    })
}

/// A directory entry waiting on the worklist.
struct Pending {
    path: PathBuf,
    /// Components below the source root, including this entry's name.
    components: Vec<String>,
    /// Canonical paths of the directories above this entry.
    ancestors: Rc<Vec<PathBuf>>,
}

/// Enumerate every document below `dir` recognized by `source`.
pub fn discover(dir: &Path, source: &SourceConfig) -> Result<Vec<DocumentRecord>, ScanError> {
    let root = fs::canonicalize(dir).map_err(io_error(dir))?;
    if !root.is_dir() {
        return Err(ScanError::Io {
            path: dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    let mut records = Vec::new();
    let mut stack = children(&root, &[], Rc::new(vec![root.clone()]))?;
    stack.reverse();

    while let Some(entry) = stack.pop() {
        let meta = fs::metadata(&entry.path).map_err(io_error(&entry.path))?;

        if meta.is_dir() {
            let canonical = fs::canonicalize(&entry.path).map_err(io_error(&entry.path))?;
            if entry.ancestors.contains(&canonical) {
                return Err(ScanError::SymlinkLoop(entry.path));
            }
            let mut ancestors = (*entry.ancestors).clone();
            ancestors.push(canonical);

            let mut nested = children(&entry.path, &entry.components, Rc::new(ancestors))?;
            nested.reverse();
            stack.extend(nested);
        } else if meta.is_file() {
            let Some(file_name) = entry.components.last() else {
                continue;
            };
            if source.matches_extension(file_name) {
                records.push(build_record(&entry, source));
            }
        }
    }

    Ok(records)
}

/// Entries of `dir`, sorted by name.
fn children(
    dir: &Path,
    parent: &[String],
    ancestors: Rc<Vec<PathBuf>>,
) -> Result<Vec<Pending>, ScanError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let entry = entry.map_err(io_error(dir))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    Ok(names
        .into_iter()
        .map(|name| {
            let mut components = parent.to_vec();
            components.push(name.clone());
            Pending {
                path: dir.join(&name),
                components,
                ancestors: Rc::clone(&ancestors),
            }
        })
        .collect())
}

fn build_record(entry: &Pending, source: &SourceConfig) -> DocumentRecord {
    let file_name = entry.components.last().cloned().unwrap_or_default();
    let file_path = Path::new(&file_name);
    let stem = file_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.clone());
    let extension = file_path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut parts = entry.components.clone();
    if let Some(last) = parts.last_mut() {
        *last = stem;
    }
    let source_relative = parts.join("/");
    let relative_path = match source.route_prefix() {
        "" => source_relative.clone(),
        prefix => format!("{prefix}/{source_relative}"),
    };

    DocumentRecord {
        source_path: entry.path.clone(),
        relative_path,
        source_relative,
        file_name,
        extension,
        category: source.category.clone(),
    }
}
