//! SVG templates with brace placeholders
//!
//! A template is plain SVG text containing `{color}`, `{extension}` and
//! `{font_size}`. Literal braces are written as `{{` and `}}`.
//!
//! # Example
//!
//! ```rust
//! use ext_icons::template::{IconParams, Template};
//!
//! let template = Template::from_source("solid", r#"<text fill="{color}">{extension}</text>"#);
//! let svg = template
//!     .render(&IconParams { extension: "PDF", color: "#FF0000", font_size: 10 })
//!     .unwrap();
//! assert_eq!(svg, r##"<text fill="#FF0000">PDF</text>"##);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// File name prefix of templates picked up in batch mode
pub const TEMPLATE_PREFIX: &str = "template_";
/// File name suffix of templates picked up in batch mode
pub const TEMPLATE_SUFFIX: &str = ".svg";

/// Errors that can occur while loading or filling a template
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Error reading a template file
    #[error("error reading template file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error listing the templates directory
    #[error("error reading templates directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Placeholder that is not one of color, extension, font_size
    #[error("unknown placeholder {{{name}}} in template {template}")]
    UnknownPlaceholder { template: String, name: String },

    /// A single `{` or `}` that does not form a placeholder
    #[error("unbalanced '{brace}' at byte {offset} in template {template}")]
    UnbalancedBrace {
        template: String,
        brace: char,
        offset: usize,
    },
}

/// Values substituted into a template for one icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconParams<'a> {
    /// Label as written in the catalog (case preserved)
    pub extension: &'a str,
    /// Fill color, passed through unvalidated
    pub color: &'a str,
    /// Resolved font size
    pub font_size: u32,
}

/// A loaded SVG template
#[derive(Debug, Clone)]
pub struct Template {
    /// Template name (file stem without the `template_` prefix)
    pub name: String,
    /// Raw template text
    pub source: String,
}

impl Template {
    /// Create a template from in-memory text
    pub fn from_source(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Load a template file; the name is derived from the file name
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let source = fs::read_to_string(path).map_err(|e| TemplateError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| template_name(n).unwrap_or(n).to_string())
            .unwrap_or_default();

        Ok(Self { name, source })
    }

    /// Substitute the icon parameters into the template text
    pub fn render(&self, params: &IconParams<'_>) -> Result<String, TemplateError> {
        let src = self.source.as_str();
        let mut out = String::with_capacity(src.len() + 16);
        let mut rest = src;

        while let Some(pos) = rest.find(['{', '}']) {
            out.push_str(&rest[..pos]);
            let offset = src.len() - rest.len() + pos;
            let tail = &rest[pos..];

            if let Some(after) = tail.strip_prefix("{{") {
                out.push('{');
                rest = after;
            } else if let Some(after) = tail.strip_prefix("}}") {
                out.push('}');
                rest = after;
            } else if tail.starts_with('}') {
                return Err(self.unbalanced('}', offset));
            } else {
                let close = tail.find('}').ok_or_else(|| self.unbalanced('{', offset))?;
                let name = &tail[1..close];
                match name {
                    "color" => out.push_str(params.color),
                    "extension" => out.push_str(params.extension),
                    "font_size" => out.push_str(&params.font_size.to_string()),
                    _ if name.contains('{') => return Err(self.unbalanced('{', offset)),
                    _ => {
                        return Err(TemplateError::UnknownPlaceholder {
                            template: self.name.clone(),
                            name: name.to_string(),
                        })
                    }
                }
                rest = &tail[close + 1..];
            }
        }
        out.push_str(rest);

        Ok(out)
    }

    fn unbalanced(&self, brace: char, offset: usize) -> TemplateError {
        TemplateError::UnbalancedBrace {
            template: self.name.clone(),
            brace,
            offset,
        }
    }
}

/// Extract `<name>` from a `template_<name>.svg` file name
pub fn template_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_prefix(TEMPLATE_PREFIX)?
        .strip_suffix(TEMPLATE_SUFFIX)
        .filter(|name| !name.is_empty())
}

/// A template file found in a templates directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Template name, used as the output subdirectory
    pub name: String,
    /// Full path to the template file
    pub path: PathBuf,
}

/// List `template_<name>.svg` files in `dir`, sorted by file name.
///
/// Returns `Ok(None)` when the directory does not exist.
pub fn discover(dir: &Path) -> Result<Option<Vec<TemplateFile>>, TemplateError> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let read_dir_err = |e| TemplateError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut found = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        if !entry.file_type().map_err(read_dir_err)?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if let Some(name) = template_name(file_name) {
            found.push(TemplateFile {
                name: name.to_string(),
                path: entry.path(),
            });
        }
    }
    found.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(Some(found))
}
