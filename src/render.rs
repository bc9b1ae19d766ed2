//! Writing a single icon file

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IconError;
use crate::font::font_size_for;
use crate::template::{IconParams, Template};

/// What happened to one icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconOutcome {
    /// The file was written
    Generated { path: PathBuf, font_size: u32 },
    /// The file already existed and overwriting was not requested
    Skipped { path: PathBuf },
}

impl IconOutcome {
    /// Path of the icon file
    pub fn path(&self) -> &Path {
        match self {
            IconOutcome::Generated { path, .. } | IconOutcome::Skipped { path } => path,
        }
    }

    /// File name of the icon, for status messages
    pub fn file_name(&self) -> String {
        self.path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, IconOutcome::Generated { .. })
    }
}

/// Output file name for an extension: lowercased, with `.svg`
pub fn icon_file_name(extension: &str) -> String {
    format!("{}.svg", extension.to_lowercase())
}

/// Render one icon into `output_dir`.
///
/// An existing file is left untouched unless `force` is set. The font size
/// is derived from the extension length when `font_size` is `None`.
pub fn render_icon(
    extension: &str,
    color: &str,
    output_dir: &Path,
    template: &Template,
    font_size: Option<u32>,
    force: bool,
) -> Result<IconOutcome, IconError> {
    let path = output_dir.join(icon_file_name(extension));

    if path.exists() && !force {
        return Ok(IconOutcome::Skipped { path });
    }

    let font_size = font_size_for(extension, font_size);
    let svg = template.render(&IconParams {
        extension,
        color,
        font_size,
    })?;

    let write_err = |source| IconError::Write {
        path: path.clone(),
        source,
    };
    fs::create_dir_all(output_dir).map_err(write_err)?;
    fs::write(&path, svg).map_err(write_err)?;

    Ok(IconOutcome::Generated { path, font_size })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn template() -> Template {
        Template::from_source("t", "{extension}|{color}|{font_size}")
    }

    #[test]
    fn test_icon_file_name_is_lowercase() {
        assert_eq!(icon_file_name("PDF"), "pdf.svg");
        assert_eq!(icon_file_name("Makefile"), "makefile.svg");
    }

    #[test]
    fn test_render_writes_file() {
        let dir = TempDir::new().unwrap();
        let outcome =
            render_icon("PDF", "#FF0000", dir.path(), &template(), None, false).unwrap();

        assert_eq!(
            outcome,
            IconOutcome::Generated {
                path: dir.path().join("pdf.svg"),
                font_size: 10,
            }
        );
        assert_eq!(outcome.file_name(), "pdf.svg");
        assert_eq!(
            fs::read_to_string(dir.path().join("pdf.svg")).unwrap(),
            "PDF|#FF0000|10"
        );
    }

    #[test]
    fn test_render_creates_output_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("icons").join("solid");
        render_icon("md", "#111", &nested, &template(), Some(7), false).unwrap();
        assert_eq!(
            fs::read_to_string(nested.join("md.svg")).unwrap(),
            "md|#111|7"
        );
    }

    #[test]
    fn test_existing_file_skipped_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pdf.svg");
        fs::write(&path, "original").unwrap();

        let outcome =
            render_icon("PDF", "#FF0000", dir.path(), &template(), None, false).unwrap();
        assert_eq!(outcome, IconOutcome::Skipped { path: path.clone() });
        assert!(!outcome.is_generated());
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_existing_file_overwritten_with_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pdf.svg");
        fs::write(&path, "original").unwrap();

        let outcome =
            render_icon("PDF", "#FF0000", dir.path(), &template(), None, true).unwrap();
        assert!(outcome.is_generated());
        assert_eq!(fs::read_to_string(&path).unwrap(), "PDF|#FF0000|10");
    }

    #[test]
    fn test_malformed_template_surfaces_error() {
        let dir = TempDir::new().unwrap();
        let bad = Template::from_source("bad", "{label}");
        let result = render_icon("PDF", "#FF0000", dir.path(), &bad, None, false);
        assert!(matches!(result, Err(IconError::Template(_))));
        assert!(!dir.path().join("pdf.svg").exists());
    }
}
