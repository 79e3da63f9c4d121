//! Centralized naming rules: titles from file names, routes, sort keys and
//! the relative paths between generated artifacts.
//!
//! ## Title fallback
//!
//! Documents without a `title` in their front matter are titled after their
//! file name. A leading `doc-NNNN -` or `decision-NNNN -` prefix is dropped
//! along with the extension:
//!
//! - `decision-0001 - Use Kubernetes.md` → "Use Kubernetes"
//! - `doc-0002-setup.md` → "setup"
//! - `getting-started.md` → "getting-started"
//!
//! ## Ordering key
//!
//! Pages are ordered by the first run of digits in their identifier
//! (`doc-0002` → 2). An identifier without digits sorts as 0. This means
//! untagged documents float to the top, ahead of `doc-0001`; ties keep the
//! order in which documents were discovered.

use regex::Regex;
use std::path::{Component, Path};
use std::sync::LazyLock;

static NUMBERED_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:decision|doc)-\d+\s*-\s*").expect("numbered prefix pattern is valid")
});

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit run pattern is valid"));

/// Derive a display title from a document file name.
///
/// Never returns an empty string: if stripping the prefix leaves nothing,
/// the bare file stem is used instead.
pub fn title_from_file_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());

    let title = NUMBERED_PREFIX.replace(&stem, "").trim().to_string();
    if !title.is_empty() {
        return title;
    }
    let stem = stem.trim();
    if stem.is_empty() {
        file_name.to_string()
    } else {
        stem.to_string()
    }
}

/// The first run of ASCII digits in an identifier, if any.
///
/// A digit run too large for `u64` saturates to `u64::MAX`.
pub fn id_number(id: &str) -> Option<u64> {
    FIRST_NUMBER
        .find(id)
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
}

/// Ordering key for an identifier. Identifiers without a number sort as 0,
/// ahead of every numbered page.
pub fn id_sort_key(id: &str) -> u64 {
    id_number(id).unwrap_or(0)
}

/// Site route for a document path: `/` + path.
pub fn route_for(relative_path: &str) -> String {
    format!("/{}", relative_path.trim_start_matches('/'))
}

/// HTML shell path for a route: the root route maps to `index.html`, every
/// other route gets `.html` appended (leading slash dropped).
pub fn html_path_for_route(route: &str) -> String {
    let trimmed = route.trim_start_matches('/');
    if trimmed.is_empty() {
        "index.html".to_string()
    } else {
        format!("{trimmed}.html")
    }
}

/// Bundler entry name for an HTML shell path.
///
/// `decisions/decision-0001.html` → `decisions_decision-0001`; an empty
/// result becomes `index`.
pub fn entry_name(html_path: &str) -> String {
    let name = html_path
        .strip_suffix(".html")
        .unwrap_or(html_path)
        .replace('/', "_");
    let name = name.strip_prefix('_').unwrap_or(&name);
    if name.is_empty() {
        "index".to_string()
    } else {
        name.to_string()
    }
}

/// `"../"` repeated once per `/`-separated segment of `relative_path`.
///
/// A page artifact at `<pages>/a/b.jsx` has path `a/b` and needs `../../`
/// to reach the directory that contains the pages dir.
pub fn depth_prefix(relative_path: &str) -> String {
    let depth = relative_path.split('/').filter(|s| !s.is_empty()).count();
    "../".repeat(depth)
}

/// Join path components with forward slashes, regardless of platform.
pub fn to_slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Relative path from directory `from` to directory `to`, both given
/// relative to the same root (`src/lib` → `src/pages` is `../pages`).
pub fn relative_between(from: &Path, to: &Path) -> String {
    let from_parts = normal_parts(from);
    let to_parts = normal_parts(to);
    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = Vec::new();
    for _ in common..from_parts.len() {
        parts.push("..");
    }
    for part in &to_parts[common..] {
        parts.push(part);
    }
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

fn normal_parts(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_strips_decision_prefix_with_spaces() {
        assert_eq!(
            title_from_file_name("decision-0001 - Use Kubernetes.md"),
            "Use Kubernetes"
        );
    }

    #[test]
    fn title_strips_doc_prefix_without_spaces() {
        assert_eq!(title_from_file_name("doc-0002-setup.md"), "setup");
    }

    #[test]
    fn title_keeps_unprefixed_names() {
        assert_eq!(
            title_from_file_name("getting-started.md"),
            "getting-started"
        );
    }

    #[test]
    fn title_prefix_needs_digits() {
        assert_eq!(title_from_file_name("doc-intro.md"), "doc-intro");
    }

    #[test]
    fn title_falls_back_to_stem_when_prefix_is_everything() {
        assert_eq!(title_from_file_name("doc-0003-.md"), "doc-0003-");
    }

    #[test]
    fn sort_key_uses_first_digit_run() {
        assert_eq!(id_sort_key("doc-0002"), 2);
        assert_eq!(id_sort_key("decision-0010"), 10);
        assert_eq!(id_sort_key("v2-rev7"), 2);
    }

    #[test]
    fn id_number_is_optional() {
        assert_eq!(id_number("doc-0002"), Some(2));
        assert_eq!(id_number("doc-0000"), Some(0));
        assert_eq!(id_number("intro"), None);
    }

    #[test]
    fn sort_key_defaults_to_zero() {
        assert_eq!(id_sort_key(""), 0);
        assert_eq!(id_sort_key("intro"), 0);
    }

    #[test]
    fn sort_key_saturates_on_overflow() {
        assert_eq!(id_sort_key("doc-99999999999999999999999"), u64::MAX);
    }

    #[test]
    fn routes_get_leading_slash() {
        assert_eq!(route_for("doc-0002-setup"), "/doc-0002-setup");
        assert_eq!(route_for("decisions/x"), "/decisions/x");
    }

    #[test]
    fn html_paths_for_routes() {
        assert_eq!(html_path_for_route("/"), "index.html");
        assert_eq!(html_path_for_route("/doc-1"), "doc-1.html");
        assert_eq!(
            html_path_for_route("/decisions/decision-1"),
            "decisions/decision-1.html"
        );
    }

    #[test]
    fn entry_names_flatten_separators() {
        assert_eq!(entry_name("index.html"), "index");
        assert_eq!(entry_name("doc-1.html"), "doc-1");
        assert_eq!(entry_name("decisions/decision-1.html"), "decisions_decision-1");
        assert_eq!(entry_name(".html"), "index");
    }

    #[test]
    fn entry_names_strip_one_leading_underscore() {
        assert_eq!(entry_name("_index.html"), "index");
        assert_eq!(entry_name("__draft.html"), "_draft");
    }

    #[test]
    fn depth_prefix_counts_segments() {
        assert_eq!(depth_prefix("index"), "../");
        assert_eq!(depth_prefix("doc-0002-setup"), "../");
        assert_eq!(depth_prefix("guides/deploy/aws"), "../../../");
    }

    #[test]
    fn slash_paths_drop_dot_components() {
        assert_eq!(to_slash_path(Path::new("./src/pages")), "src/pages");
    }

    #[test]
    fn relative_between_sibling_dirs() {
        assert_eq!(
            relative_between(Path::new("src/lib"), Path::new("src/pages")),
            "../pages"
        );
    }

    #[test]
    fn relative_between_nested_and_same() {
        assert_eq!(
            relative_between(Path::new("src/pages"), Path::new("src/pages")),
            "."
        );
        assert_eq!(
            relative_between(Path::new("generated/lib"), Path::new("src/pages")),
            "../../src/pages"
        );
    }
}
