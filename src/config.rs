//! Project configuration.
//!
//! Handles loading, validating, and merging `docsite.toml`. The file is
//! optional and sparse: stock defaults are overridden by whatever keys the
//! project sets.
//!
//! ## Config File Location
//!
//! ```text
//! web-docs/
//! ├── docsite.toml         # Optional, overrides stock defaults
//! ├── docs/                # Default document source
//! ├── src/pages/           # Generated page artifacts (wiped on every run)
//! ├── src/lib/docPages.js  # Generated route manifest
//! └── index.html           # Generated HTML shells
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Documentation"
//!
//! [output]
//! pages_dir = "src/pages"
//! lib_dir = "src/lib"
//! html_dir = "."
//! dist_dir = "dist"
//! entries_file = "html-entries.json"
//!
//! [pages]
//! layout = "layouts/DocsLayout"            # relative to the parent of pages_dir
//! components = "components/MDXComponents"
//! mount_id = "root"
//!
//! [html]
//! stylesheet = "tailwind.css"
//! icon = "branding/logo.svg"
//!
//! [[sources]]
//! dir = "docs"
//! category = "docs"
//! route_prefix = ""
//! import_alias = "@docs"                   # defaults to "@" + category
//! extensions = ["md"]
//! ```
//!
//! Unknown keys are rejected to catch typos early. A `[[sources]]` list in
//! the project file replaces the stock list entirely.
//!
//! ## Base Path
//!
//! The URL prefix the site is served under is not part of the file: it comes
//! from `--base-path` / `BASE_PATH`, is resolved once into a [`BasePath`],
//! and is passed explicitly to everything that computes asset references.

use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Default config file name, looked up in the project root.
pub const CONFIG_FILE: &str = "docsite.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Project configuration loaded from `docsite.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub output: OutputConfig,
    pub pages: PagesConfig,
    pub html: HtmlConfig,
    pub sources: Vec<SourceConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteSection::default(),
            output: OutputConfig::default(),
            pages: PagesConfig::default(),
            html: HtmlConfig::default(),
            sources: vec![SourceConfig::docs()],
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation("site.title must not be empty".into()));
        }
        // pages_dir is deleted on every run; keep it strictly inside the project.
        let pages_dir = match contained_parts(&self.output.pages_dir) {
            Some(parts) if !parts.is_empty() => parts,
            _ => {
                return Err(ConfigError::Validation(
                    "output.pages_dir must be a non-empty relative path without `..`".into(),
                ));
            }
        };
        let lib_dir = match contained_parts(&self.output.lib_dir) {
            Some(parts) if !parts.is_empty() => parts,
            _ => {
                return Err(ConfigError::Validation(
                    "output.lib_dir must be a non-empty relative path without `..`".into(),
                ));
            }
        };
        let Some(html_dir) = contained_parts(&self.output.html_dir) else {
            return Err(ConfigError::Validation(
                "output.html_dir must be a relative path without `..`".into(),
            ));
        };
        if lib_dir.starts_with(&pages_dir) {
            return Err(ConfigError::Validation(
                "output.lib_dir must not be inside output.pages_dir".into(),
            ));
        }
        if html_dir.starts_with(&pages_dir) {
            return Err(ConfigError::Validation(
                "output.html_dir must not be inside output.pages_dir".into(),
            ));
        }
        if self.output.entries_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output.entries_file must not be empty".into(),
            ));
        }
        for (i, source) in self.sources.iter().enumerate() {
            if source.dir.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "sources[{i}].dir must not be empty"
                )));
            }
            if source.category.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "sources[{i}].category must not be empty"
                )));
            }
            if source.extensions.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "sources[{i}].extensions must not be empty"
                )));
            }
            if source
                .extensions
                .iter()
                .any(|e| e.is_empty() || e.starts_with('.'))
            {
                return Err(ConfigError::Validation(format!(
                    "sources[{i}].extensions are written without a leading dot (\"md\")"
                )));
            }
            if source.route_prefix.split('/').any(|part| part == "..") {
                return Err(ConfigError::Validation(format!(
                    "sources[{i}].route_prefix must not contain `..`"
                )));
            }
            let overlaps = contained_parts(&source.dir).is_some_and(|source_dir| {
                source_dir.starts_with(&pages_dir) || pages_dir.starts_with(&source_dir)
            });
            if overlaps {
                return Err(ConfigError::Validation(format!(
                    "sources[{i}].dir and output.pages_dir must not overlap"
                )));
            }
        }
        Ok(())
    }
}

/// Normal components of a relative path that stays inside the project.
///
/// `None` for absolute paths and paths with `..`; `.` yields no components.
fn contained_parts(dir: &str) -> Option<Vec<&OsStr>> {
    let mut parts = Vec::new();
    for component in Path::new(dir).components() {
        match component {
            Component::Normal(part) => parts.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(parts)
}

/// Site-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Shown on the home page and appended to every page's `<title>`.
    pub title: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Documentation".to_string(),
        }
    }
}

/// Where generated files go, relative to the project root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Per-document page artifacts and the home page. Removed on every run.
    pub pages_dir: String,
    /// Route manifest (`docPages.js`, `routes.json`).
    pub lib_dir: String,
    /// HTML entry shells and the entries file.
    pub html_dir: String,
    /// Bundler output, read and rewritten by `prerender`.
    pub dist_dir: String,
    /// JSON list of HTML entries, inside `html_dir`.
    pub entries_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pages_dir: "src/pages".to_string(),
            lib_dir: "src/lib".to_string(),
            html_dir: ".".to_string(),
            dist_dir: "dist".to_string(),
            entries_file: "html-entries.json".to_string(),
        }
    }
}

/// Page artifact settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagesConfig {
    /// Layout component, relative to the parent of `pages_dir`.
    pub layout: String,
    /// Module exporting `MDXWrapper`, relative to the parent of `pages_dir`.
    pub components: String,
    /// DOM element id every page mounts into.
    pub mount_id: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            layout: "layouts/DocsLayout".to_string(),
            components: "components/MDXComponents".to_string(),
            mount_id: "root".to_string(),
        }
    }
}

/// Asset references emitted into HTML shells.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HtmlConfig {
    pub stylesheet: String,
    pub icon: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            stylesheet: "tailwind.css".to_string(),
            icon: "branding/logo.svg".to_string(),
        }
    }
}

/// A directory tree of documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Directory to scan, relative to the project root.
    pub dir: String,
    /// Category recorded on every page from this source; default `type`.
    pub category: String,
    /// Prepended to routes of this source (`decisions` → `/decisions/...`).
    #[serde(default)]
    pub route_prefix: String,
    /// Bundler alias the page artifacts import documents through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_alias: Option<String>,
    /// Recognized document extensions, without the dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

impl SourceConfig {
    fn docs() -> Self {
        Self {
            dir: "docs".to_string(),
            category: "docs".to_string(),
            route_prefix: String::new(),
            import_alias: None,
            extensions: default_extensions(),
        }
    }

    /// Import alias, defaulting to `@<category>`.
    pub fn import_alias(&self) -> String {
        match &self.import_alias {
            Some(alias) => alias.trim_end_matches('/').to_string(),
            None => format!("@{}", self.category),
        }
    }

    /// Route prefix with surrounding slashes removed.
    pub fn route_prefix(&self) -> &str {
        self.route_prefix.trim_matches('/')
    }

    /// Whether `file_name` carries one of this source's extensions.
    pub fn matches_extension(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .map(|ext| {
                let ext = ext.to_string_lossy();
                self.extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
            })
            .unwrap_or(false)
    }
}

// =============================================================================
// Base path
// =============================================================================

/// URL prefix the generated site is served under.
///
/// Trailing slashes are stripped; an empty value or `/` means the site is
/// served from the root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BasePath(Option<String>);

impl BasePath {
    /// The site root.
    pub fn root() -> Self {
        Self(None)
    }

    /// Resolve from a raw setting such as the `BASE_PATH` variable.
    pub fn from_setting(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().trim_end_matches('/')) {
            Some(prefix) if !prefix.is_empty() => Self(Some(prefix.to_string())),
            _ => Self(None),
        }
    }

    pub fn is_root(&self) -> bool {
        self.0.is_none()
    }

    /// Absolute reference to `asset` under this base (`/docs-app` + `x.css`
    /// → `/docs-app/x.css`; at the root, `/x.css`).
    pub fn join(&self, asset: &str) -> String {
        let asset = asset.trim_start_matches('/');
        match &self.0 {
            Some(prefix) => format!("{prefix}/{asset}"),
            None => format!("/{asset}"),
        }
    }

    /// The prefix with its trailing slash (`/docs-app/`, or `/` at the root).
    pub fn as_prefix(&self) -> String {
        self.join("")
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay (including arrays) replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the project config.
///
/// With `explicit` set, that file must exist. Otherwise `docsite.toml` in
/// `root` is used when present, and stock defaults when not.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    let overlay = match explicit {
        Some(path) => {
            let raw = load_raw_config(path)?;
            if raw.is_none() {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "config file does not exist",
                    ),
                });
            }
            raw
        }
        None => load_raw_config(&root.join(CONFIG_FILE))?,
    };
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `docsite.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docsite-gen configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.
#
# The URL prefix the site is served under is not configured here: pass
# --base-path or set BASE_PATH (e.g. BASE_PATH=/docs-app/).

[site]
# Shown on the home page and appended to every page <title>.
title = "Documentation"

# ---------------------------------------------------------------------------
# Output locations (relative to the project root)
# ---------------------------------------------------------------------------
[output]
# Page artifacts. This directory is deleted and rebuilt on every run.
pages_dir = "src/pages"
# Route manifest: docPages.js and routes.json.
lib_dir = "src/lib"
# HTML entry shells, one per route.
html_dir = "."
# Bundler output read by the prerender command.
dist_dir = "dist"
# JSON list of HTML entries for the bundler, inside html_dir.
entries_file = "html-entries.json"

# ---------------------------------------------------------------------------
# Page artifacts
# ---------------------------------------------------------------------------
[pages]
# Imported by every page, relative to the parent of pages_dir.
layout = "layouts/DocsLayout"
components = "components/MDXComponents"
# DOM element id pages mount into.
mount_id = "root"

# ---------------------------------------------------------------------------
# HTML shells
# ---------------------------------------------------------------------------
[html]
stylesheet = "tailwind.css"
icon = "branding/logo.svg"

# ---------------------------------------------------------------------------
# Document sources. Listing any [[sources]] replaces this default list.
# ---------------------------------------------------------------------------
[[sources]]
dir = "docs"
category = "docs"
route_prefix = ""
# import_alias = "@docs"    # defaults to "@" + category
extensions = ["md"]

# A second tree served under /decisions:
#
# [[sources]]
# dir = "decisions"
# category = "decisions"
# route_prefix = "decisions"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.site.title, "Documentation");
        assert_eq!(config.output.pages_dir, "src/pages");
        assert_eq!(config.output.lib_dir, "src/lib");
        assert_eq!(config.output.entries_file, "html-entries.json");
        assert_eq!(config.html.stylesheet, "tailwind.css");
        assert_eq!(config.sources.len(), 1);
        assert_eq!(config.sources[0].category, "docs");
    }

    #[test]
    fn parse_partial_config() {
        let config: SiteConfig = toml::from_str(
            r#"
[site]
title = "Roro Kube Documentation"
"#,
        )
        .unwrap();
        assert_eq!(config.site.title, "Roro Kube Documentation");
        assert_eq!(config.output.pages_dir, "src/pages");
        assert_eq!(config.sources[0].dir, "docs");
    }

    #[test]
    fn source_defaults_fill_in() {
        let config: SiteConfig = toml::from_str(
            r#"
[[sources]]
dir = "../backlog/decisions"
category = "decisions"
"#,
        )
        .unwrap();
        let source = &config.sources[0];
        assert_eq!(source.route_prefix(), "");
        assert_eq!(source.import_alias(), "@decisions");
        assert_eq!(source.extensions, vec!["md"]);
    }

    #[test]
    fn source_route_prefix_is_trimmed() {
        let mut source = SourceConfig::docs();
        source.route_prefix = "/decisions/".to_string();
        assert_eq!(source.route_prefix(), "decisions");
    }

    #[test]
    fn source_extension_match_is_case_insensitive() {
        let source = SourceConfig::docs();
        assert!(source.matches_extension("README.MD"));
        assert!(source.matches_extension("a.md"));
        assert!(!source.matches_extension("a.mdx"));
        assert!(!source.matches_extension("md"));
    }

    #[test]
    fn explicit_import_alias_wins() {
        let mut source = SourceConfig::docs();
        source.import_alias = Some("@content/".to_string());
        assert_eq!(source.import_alias(), "@content");
    }

    // =========================================================================
    // BasePath tests
    // =========================================================================

    #[test]
    fn base_path_unset_or_slash_is_root() {
        assert!(BasePath::from_setting(None).is_root());
        assert!(BasePath::from_setting(Some("")).is_root());
        assert!(BasePath::from_setting(Some("/")).is_root());
    }

    #[test]
    fn base_path_strips_trailing_slash() {
        let base = BasePath::from_setting(Some("/docs-app/"));
        assert!(!base.is_root());
        assert_eq!(base.join("tailwind.css"), "/docs-app/tailwind.css");
        assert_eq!(base.as_prefix(), "/docs-app/");
    }

    #[test]
    fn base_path_root_join() {
        assert_eq!(BasePath::root().join("/src/pages/index.jsx"), "/src/pages/index.jsx");
        assert_eq!(BasePath::root().as_prefix(), "/");
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path(), None).unwrap();
        assert_eq!(config.site.title, "Documentation");
    }

    #[test]
    fn load_config_reads_project_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
[html]
stylesheet = "styles.css"
"#,
        )
        .unwrap();
        let config = load_config(tmp.path(), None).unwrap();
        assert_eq!(config.html.stylesheet, "styles.css");
        assert_eq!(config.html.icon, "branding/logo.svg");
    }

    #[test]
    fn load_config_explicit_file_must_exist() {
        let tmp = TempDir::new().unwrap();
        let result = load_config(tmp.path(), Some(&tmp.path().join("missing.toml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "this is not valid toml [[[").unwrap();
        let result = load_config(tmp.path(), None);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn sources_list_replaces_default() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
[[sources]]
dir = "backlog/docs"
category = "docs"

[[sources]]
dir = "backlog/decisions"
category = "decisions"
route_prefix = "decisions"
"#,
        )
        .unwrap();
        let config = load_config(tmp.path(), None).unwrap();
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.sources[0].dir, "backlog/docs");
        assert_eq!(config.sources[1].route_prefix(), "decisions");
    }

    // =========================================================================
    // Unknown key rejection and validation
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
[output]
page_dir = "pages"
"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_source_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
[[sources]]
dir = "docs"
category = "docs"
alias = "@docs"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_escaping_pages_dir() {
        let mut config = SiteConfig::default();
        config.output.pages_dir = "../elsewhere".to_string();
        assert!(config.validate().is_err());

        config.output.pages_dir = ".".to_string();
        assert!(config.validate().is_err());

        config.output.pages_dir = "/tmp/pages".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_pages_dir_overlapping_a_source() {
        let mut config = SiteConfig::default();
        config.output.pages_dir = "docs".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("overlap"));

        config.output.pages_dir = "./docs/generated".to_string();
        assert!(config.validate().is_err());

        config.output.pages_dir = "site".to_string();
        config.sources[0].dir = "site/docs".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_output_dirs_inside_pages_dir() {
        let mut config = SiteConfig::default();
        config.output.lib_dir = "src/pages/lib".to_string();
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.output.html_dir = "src/pages".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_html_dir_stays_in_project() {
        let mut config = SiteConfig::default();
        config.output.html_dir = "../public".to_string();
        assert!(config.validate().is_err());

        config.output.html_dir = "/var/www".to_string();
        assert!(config.validate().is_err());

        config.output.html_dir = "public".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_dotted_extensions() {
        let mut config = SiteConfig::default();
        config.sources[0].extensions = vec![".md".to_string()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("extensions"));
    }

    #[test]
    fn validate_rejects_empty_category() {
        let mut config = SiteConfig::default();
        config.sources[0].category = " ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            r#"
[site]
title = ""
"#,
        )
        .unwrap();
        let result = load_config(tmp.path(), None);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // merge_toml / stock config tests
    // =========================================================================

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[html]
stylesheet = "tailwind.css"
icon = "logo.svg"
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[html]
icon = "favicon.svg"
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let html = merged.get("html").unwrap();
        assert_eq!(html.get("icon").unwrap().as_str(), Some("favicon.svg"));
        assert_eq!(html.get("stylesheet").unwrap().as_str(), Some("tailwind.css"));
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config.site.title, "Documentation");
        assert_eq!(config.output.pages_dir, "src/pages");
        assert_eq!(config.pages.layout, "layouts/DocsLayout");
        assert_eq!(config.sources.len(), 1);
        assert_eq!(config.sources[0].import_alias(), "@docs");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        for section in ["site", "output", "pages", "html", "sources"] {
            assert!(val.get(section).is_some(), "missing {section}");
        }
    }
}
