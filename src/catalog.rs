//! Extension catalog loading and rewriting
//!
//! The catalog is a JSON object mapping extension names to either a bare
//! color string or a config object:
//!
//! ```json
//! {
//!     "PDF": "#FF0000",
//!     "TYPESCRIPT": { "color": "#3178C6", "font_size": 5, "aliases": ["TS"] }
//! }
//! ```
//!
//! Entry order is preserved so icons are generated in file order. Values of
//! any other JSON type are skipped with a warning but still count as primary
//! extensions and survive a rewrite.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::ser::Serialize;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Color used for config objects without a `color` key
pub const DEFAULT_COLOR: &str = "#000000";

/// Errors that can occur when loading or saving a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Error reading the catalog file
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Error writing the catalog file
    #[error("failed to write catalog {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid JSON, or not a JSON object
    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A config object has a field of the wrong type
    #[error("invalid entry for extension '{extension}': {message}")]
    InvalidEntry { extension: String, message: String },
}

/// Configuration of one primary extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEntry {
    /// `"EXT": "#RRGGBB"`
    ColorOnly(String),
    /// `"EXT": { "color": ..., "font_size": ..., "aliases": [...] }`
    FullSpec(EntrySpec),
}

/// Body of a [`CatalogEntry::FullSpec`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EntrySpec {
    pub color: Option<String>,
    pub font_size: Option<u32>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl CatalogEntry {
    /// Color of this entry, falling back to `default_color`
    pub fn color<'a>(&'a self, default_color: &'a str) -> &'a str {
        match self {
            CatalogEntry::ColorOnly(color) => color,
            CatalogEntry::FullSpec(spec) => spec.color.as_deref().unwrap_or(default_color),
        }
    }

    /// Explicit font size, if any
    pub fn font_size(&self) -> Option<u32> {
        match self {
            CatalogEntry::ColorOnly(_) => None,
            CatalogEntry::FullSpec(spec) => spec.font_size,
        }
    }

    /// Aliases in declaration order
    pub fn aliases(&self) -> &[String] {
        match self {
            CatalogEntry::ColorOnly(_) => &[],
            CatalogEntry::FullSpec(spec) => &spec.aliases,
        }
    }

    /// Parse one value; `Ok(None)` for values that are neither a string
    /// nor an object
    fn from_value(extension: &str, value: &Value) -> Result<Option<Self>, CatalogError> {
        match value {
            Value::String(color) => Ok(Some(CatalogEntry::ColorOnly(color.clone()))),
            Value::Object(_) => EntrySpec::deserialize(value)
                .map(|spec| Some(CatalogEntry::FullSpec(spec)))
                .map_err(|e| CatalogError::InvalidEntry {
                    extension: extension.to_string(),
                    message: e.to_string(),
                }),
            _ => Ok(None),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A parsed catalog
///
/// Keeps the raw JSON alongside the typed entries so that a rewrite only
/// touches the entries that were removed.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<(String, CatalogEntry)>,
    skipped: Vec<String>,
    raw: Map<String, Value>,
}

impl Catalog {
    /// Parse a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: Map<String, Value> = serde_json::from_str(json)?;
        let mut entries = Vec::with_capacity(raw.len());
        let mut skipped = Vec::new();

        for (ext, value) in &raw {
            match CatalogEntry::from_value(ext, value)? {
                Some(entry) => entries.push((ext.clone(), entry)),
                None => {
                    warning!(
                        "catalog";
                        "Skipping '{}': expected a color string or an object, found {}",
                        ext,
                        json_kind(value)
                    );
                    skipped.push(ext.clone());
                }
            }
        }

        Ok(Self {
            entries,
            skipped,
            raw,
        })
    }

    /// Load a catalog from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    /// Renderable entries in file order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.entries.iter().map(|(ext, entry)| (ext.as_str(), entry))
    }

    /// All primary extension names in file order, skipped ones included
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.raw.keys().map(String::as_str)
    }

    /// Primaries whose value is neither a color string nor an object
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Look up an entry by its exact primary name
    pub fn get(&self, extension: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|(ext, _)| ext == extension)
            .map(|(_, entry)| entry)
    }

    /// Check if a primary extension exists
    pub fn contains(&self, extension: &str) -> bool {
        self.raw.contains_key(extension)
    }

    /// Number of primary extensions, skipped ones included
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Check if the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Remove a primary extension, returning whether it was present
    pub fn remove(&mut self, extension: &str) -> bool {
        self.entries.retain(|(ext, _)| ext != extension);
        self.skipped.retain(|ext| ext != extension);
        self.raw.shift_remove(extension).is_some()
    }

    /// Serialize with four-space indentation
    pub fn to_pretty_json(&self) -> Result<String, CatalogError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.raw.serialize(&mut ser)?;
        // serde_json only ever emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write the catalog back to `path`
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let json = self.to_pretty_json()?;
        fs::write(path, json).map_err(|e| CatalogError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_both_entry_kinds() {
        let catalog = Catalog::from_json(
            r##"{
                "PDF": "#FF0000",
                "TYPESCRIPT": { "color": "#3178C6", "font_size": 5, "aliases": ["TS", "MTS"] }
            }"##,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get("PDF"),
            Some(&CatalogEntry::ColorOnly("#FF0000".into()))
        );
        assert_eq!(
            catalog.get("TYPESCRIPT"),
            Some(&CatalogEntry::FullSpec(EntrySpec {
                color: Some("#3178C6".into()),
                font_size: Some(5),
                aliases: vec!["TS".into(), "MTS".into()],
            }))
        );
    }

    #[test]
    fn test_preserves_insertion_order() {
        let catalog = Catalog::from_json(r##"{"ZIP": "#1", "A": "#2", "MD": "#3"}"##).unwrap();
        let names: Vec<_> = catalog.extensions().collect();
        assert_eq!(names, vec!["ZIP", "A", "MD"]);
    }

    #[test]
    fn test_entry_defaults() {
        let catalog = Catalog::from_json(r#"{"RS": {}}"#).unwrap();
        let entry = catalog.get("RS").unwrap();
        assert_eq!(entry.color(DEFAULT_COLOR), "#000000");
        assert_eq!(entry.font_size(), None);
        assert!(entry.aliases().is_empty());
    }

    #[test]
    fn test_skips_unsupported_values() {
        let catalog =
            Catalog::from_json(r##"{"PDF": "#F00", "BIN": 1, "LEGACY": null, "X": []}"##)
                .unwrap();

        let rendered: Vec<_> = catalog.entries().map(|(ext, _)| ext).collect();
        assert_eq!(rendered, vec!["PDF"]);
        assert_eq!(catalog.skipped(), ["BIN", "LEGACY", "X"]);
        assert_eq!(catalog.len(), 4);
        assert!(catalog.contains("BIN"));
        assert_eq!(catalog.get("BIN"), None);
    }

    #[test]
    fn test_rewrite_keeps_skipped_values() {
        let mut catalog = Catalog::from_json(r##"{"BIN": 1, "PDF": "#F00"}"##).unwrap();
        catalog.remove("PDF");
        assert_eq!(catalog.to_pretty_json().unwrap(), "{\n    \"BIN\": 1\n}");
        assert!(catalog.skipped().contains(&"BIN".to_string()));

        catalog.remove("BIN");
        assert!(catalog.skipped().is_empty());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_rejects_wrong_typed_fields() {
        let err = Catalog::from_json(r#"{"PDF": {"font_size": "big"}}"#).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidEntry { ref extension, .. } if extension == "PDF"
        ));
    }

    #[test]
    fn test_rejects_non_object_json() {
        assert!(matches!(
            Catalog::from_json("[1, 2]"),
            Err(CatalogError::Json(_))
        ));
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_remove_keeps_order_and_unknown_keys() {
        let mut catalog = Catalog::from_json(
            r##"{"A": "#1", "B": {"color": "#2", "note": "keep me"}, "C": "#3"}"##,
        )
        .unwrap();

        assert!(catalog.remove("A"));
        assert!(!catalog.remove("A"));
        assert!(!catalog.contains("A"));

        let expected = r##"{
    "B": {
        "color": "#2",
        "note": "keep me"
    },
    "C": "#3"
}"##;
        assert_eq!(catalog.to_pretty_json().unwrap(), expected);
    }
}
