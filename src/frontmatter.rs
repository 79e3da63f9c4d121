//! Front matter block extraction.
//!
//! A document may open with a metadata block:
//!
//! ```text
//! ---                      +++
//! id: doc-0002             id = "doc-0002"
//! title: Setup Guide       title = "Setup Guide"
//! ---                      +++
//! ```
//!
//! `---` blocks are YAML (closed by `---` or `...`), `+++` blocks are TOML.
//! Anything else on the first line means the document has no front matter.
//!
//! Scalar values (strings, numbers, booleans, dates) become strings. Keys
//! that this generator reads (see [`RECOGNIZED_KEYS`]) must hold scalars;
//! lists and tables under other keys (`tags`, `authors`, ...) are ignored.
//!
//! A malformed block is an error, never "no front matter": skipping it would
//! silently publish the document with default metadata.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Keys the generator reads. These must hold scalar values.
pub const RECOGNIZED_KEYS: &[&str] = &[
    "id",
    "title",
    "type",
    "category",
    "created_date",
    "date",
    "updated_date",
];

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("{}: front matter block is never closed (expected a `{delimiter}` line)", path.display())]
    Unterminated {
        path: PathBuf,
        delimiter: &'static str,
    },
    #[error("{}: invalid YAML front matter", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("{}: invalid TOML front matter", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{}: front matter must be a mapping of keys to values", path.display())]
    NotAMapping { path: PathBuf },
    #[error("{}: front matter key `{key}` must be a single value, not a list or table", path.display())]
    NonScalar { path: PathBuf, key: String },
}

/// A document split into its front matter fields and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrontMatter<'a> {
    /// Scalar fields, stringified. Empty when the document has no block.
    pub fields: BTreeMap<String, String>,
    /// Document content after the block.
    pub body: &'a str,
}

impl RawFrontMatter<'_> {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockFormat {
    Yaml,
    Toml,
}

impl BlockFormat {
    fn open(line: &str) -> Option<Self> {
        match line.trim_end() {
            "---" => Some(Self::Yaml),
            "+++" => Some(Self::Toml),
            _ => None,
        }
    }

    fn closes(self, line: &str) -> bool {
        let line = line.trim_end();
        match self {
            Self::Yaml => line == "---" || line == "...",
            Self::Toml => line == "+++",
        }
    }

    fn delimiter(self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Split `content` into front matter and body.
///
/// `path` is only used for error messages.
pub fn parse<'a>(path: &Path, content: &'a str) -> Result<RawFrontMatter<'a>, FrontMatterError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let (first, rest) = split_first_line(content);

    let Some(format) = BlockFormat::open(first) else {
        return Ok(RawFrontMatter {
            fields: BTreeMap::new(),
            body: content,
        });
    };

    let mut remaining = rest;
    while !remaining.is_empty() {
        let (line, after) = split_first_line(remaining);
        if format.closes(line) {
            let block = &rest[..rest.len() - remaining.len()];
            let fields = match format {
                BlockFormat::Yaml => parse_yaml(path, block)?,
                BlockFormat::Toml => parse_toml(path, block)?,
            };
            return Ok(RawFrontMatter {
                fields,
                body: after,
            });
        }
        remaining = after;
    }

    Err(FrontMatterError::Unterminated {
        path: path.to_path_buf(),
        delimiter: format.delimiter(),
    })
}

/// First line (without its `\n` / `\r\n`) and everything after it.
fn split_first_line(s: &str) -> (&str, &str) {
    match s.find('\n') {
        Some(i) => (s[..i].trim_end_matches('\r'), &s[i + 1..]),
        None => (s, ""),
    }
}

fn parse_yaml(path: &Path, block: &str) -> Result<BTreeMap<String, String>, FrontMatterError> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(block).map_err(|source| FrontMatterError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

    let mapping = match value {
        serde_yaml::Value::Null => return Ok(BTreeMap::new()),
        serde_yaml::Value::Mapping(mapping) => mapping,
        _ => {
            return Err(FrontMatterError::NotAMapping {
                path: path.to_path_buf(),
            });
        }
    };

    let mut fields = BTreeMap::new();
    for (key, value) in mapping {
        let Some(key) = yaml_scalar(&key) else {
            return Err(FrontMatterError::NotAMapping {
                path: path.to_path_buf(),
            });
        };
        match value {
            serde_yaml::Value::Null => {}
            serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_) => {
                reject_if_recognized(path, &key)?;
            }
            other => {
                if let Some(text) = yaml_scalar(&other) {
                    fields.insert(key, text);
                }
            }
        }
    }
    Ok(fields)
}

fn yaml_scalar(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Tagged(tagged) => yaml_scalar(&tagged.value),
        _ => None,
    }
}

fn parse_toml(path: &Path, block: &str) -> Result<BTreeMap<String, String>, FrontMatterError> {
    let table: toml::Table = toml::from_str(block).map_err(|source| FrontMatterError::Toml {
        path: path.to_path_buf(),
        source,
    })?;

    let mut fields = BTreeMap::new();
    for (key, value) in table {
        let text = match value {
            toml::Value::String(s) => s,
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            toml::Value::Boolean(b) => b.to_string(),
            toml::Value::Datetime(d) => d.to_string(),
            toml::Value::Array(_) | toml::Value::Table(_) => {
                reject_if_recognized(path, &key)?;
                continue;
            }
        };
        fields.insert(key, text);
    }
    Ok(fields)
}

fn reject_if_recognized(path: &Path, key: &str) -> Result<(), FrontMatterError> {
    if RECOGNIZED_KEYS.contains(&key) {
        return Err(FrontMatterError::NonScalar {
            path: path.to_path_buf(),
            key: key.to_string(),
        });
    }
    Ok(())
}
