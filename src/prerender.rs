//! Per-route HTML for a built site.
//!
//! After the bundler has built `dist/`, only `dist/index.html` references
//! the hashed bundle. This stage copies its script and stylesheet tags into
//! one HTML file per route, so every route can be loaded directly:
//!
//! ```text
//! dist/index.html                 ← read: <script src>, <link href> tags
//! src/lib/routes.json             ← read: routes
//! dist/doc-0002-setup.html        → written
//! dist/decisions/decision-1.html  → written
//! ```
//!
//! Under a base path, root-absolute references (`/assets/x.js`) are moved
//! below it (`/docs-app/assets/x.js`). References already below the base
//! path are left alone.

use crate::config::{BasePath, SiteConfig};
use crate::manifest;
use crate::naming;
use crate::types::PageDescriptor;
use maud::{DOCTYPE, PreEscaped, html};
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

static SCRIPT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<script[^>]*src="([^"]+)"[^>]*></script>"#).expect("script pattern is valid")
});

static LINK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<link[^>]*href="([^"]+)"[^>]*>"#).expect("link pattern is valid")
});

static ICON_REL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"rel="(?:shortcut )?icon""#).expect("icon pattern is valid"));

#[derive(Error, Debug)]
pub enum PrerenderError {
    #[error("{} not found; build the site before prerendering", .0.display())]
    MissingIndex(PathBuf),
    #[error("no <script src=\"...\"> tag in {}", .0.display())]
    MissingScript(PathBuf),
    #[error("route manifest {} not found; run `generate` first", .0.display())]
    MissingRoutes(PathBuf),
    #[error("invalid route manifest {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("route {0} does not map to a file inside the output directory")]
    InvalidRoute(String),
    #[error("IO error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Asset references taken from the built home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltAssets {
    pub script_src: String,
    /// Complete `<link>` tags, icon links excluded.
    pub links: Vec<String>,
}

/// Pull the entry script and link tags out of built HTML.
///
/// Returns `None` when there is no script tag with a `src`.
pub fn extract_assets(index_html: &str) -> Option<BuiltAssets> {
    let script_src = SCRIPT_TAG.captures(index_html)?.get(1)?.as_str().to_string();
    let links = LINK_TAG
        .find_iter(index_html)
        .map(|m| m.as_str())
        .filter(|tag| !ICON_REL.is_match(tag))
        .map(String::from)
        .collect();
    Some(BuiltAssets { script_src, links })
}

/// Move a root-absolute reference below `base`.
fn rebase(reference: &str, base: &BasePath) -> String {
    if base.is_root() || !reference.starts_with('/') || reference.starts_with("//") {
        return reference.to_string();
    }
    let prefix = base.as_prefix();
    if reference.starts_with(&prefix) {
        reference.to_string()
    } else {
        base.join(reference)
    }
}

/// Rewrite every root-absolute `href` in a link tag.
fn rebase_link(tag: &str, base: &BasePath) -> String {
    if base.is_root() {
        return tag.to_string();
    }
    LINK_TAG
        .replace(tag, |caps: &regex::Captures| {
            let whole = &caps[0];
            let href = &caps[1];
            whole.replacen(
                &format!("href=\"{href}\""),
                &format!("href=\"{}\"", rebase(href, base)),
                1,
            )
        })
        .into_owned()
}

/// Render the HTML for one route.
pub fn render_route_html(assets: &BuiltAssets, config: &SiteConfig, base: &BasePath) -> String {
    let links: Vec<String> = assets.links.iter().map(|l| rebase_link(l, base)).collect();
    let script = rebase(&assets.script_src, base);

    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                link rel="icon" type="image/svg+xml" href=(base.join(&config.html.icon));
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @for link in &links {
                    (PreEscaped(link))
                }
                title { (config.site.title) }
            }
            body {
                div id=(config.pages.mount_id) {}
                script type="module" src=(script) {}
            }
        }
    };
    markup.into_string() + "\n"
}

/// Routes to prerender: the home route, then every manifest route.
pub fn routes(pages: &[PageDescriptor]) -> Vec<String> {
    let mut routes = vec!["/".to_string()];
    routes.extend(
        pages
            .iter()
            .map(|p| p.route.clone())
            .filter(|route| route != "/"),
    );
    routes
}

/// Output file for a route, relative to the dist directory.
fn route_file(route: &str) -> Result<String, PrerenderError> {
    let file = naming::html_path_for_route(route);
    let contained = Path::new(&file)
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if contained {
        Ok(file)
    } else {
        Err(PrerenderError::InvalidRoute(route.to_string()))
    }
}

fn read_routes(path: &Path) -> Result<Vec<PageDescriptor>, PrerenderError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(PrerenderError::MissingRoutes(path.to_path_buf()));
        }
        Err(source) => {
            return Err(PrerenderError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&content).map_err(|source| PrerenderError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `<dist>/<route>.html` for every route. Returns the files written,
/// relative to the dist directory.
pub fn prerender(
    root: &Path,
    config: &SiteConfig,
    base: &BasePath,
) -> Result<Vec<String>, PrerenderError> {
    let dist = root.join(&config.output.dist_dir);
    let index_path = dist.join("index.html");
    let index_html = match fs::read_to_string(&index_path) {
        Ok(html) => html,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(PrerenderError::MissingIndex(index_path));
        }
        Err(source) => {
            return Err(PrerenderError::Io {
                path: index_path,
                source,
            });
        }
    };
    let assets =
        extract_assets(&index_html).ok_or_else(|| PrerenderError::MissingScript(index_path.clone()))?;

    let routes_path = root
        .join(&config.output.lib_dir)
        .join(manifest::ROUTES_FILE);
    let pages = read_routes(&routes_path)?;

    let html = render_route_html(&assets, config, base);
    let mut written = Vec::new();
    for route in routes(&pages) {
        let file = route_file(&route)?;
        let path = dist.join(&file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| PrerenderError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, &html).map_err(|source| PrerenderError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(route = %route, file = %file, "prerendered");
        written.push(file);
    }
    Ok(written)
}
