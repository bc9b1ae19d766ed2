//! ext-icons - SVG file-type icons from a color catalog
//!
//! A JSON catalog maps file extensions to colors (with optional aliases and
//! font sizes). Each extension and alias is rendered into an SVG template,
//! one file per name.
//!
//! # Example
//!
//! ```rust
//! use ext_icons::{process_catalog, Catalog, GeneratorConfig, Template};
//!
//! let dir = tempfile::TempDir::new().unwrap();
//! let catalog = Catalog::from_json(r##"{"PDF": "#FF0000"}"##).unwrap();
//! let template = Template::from_source("solid", "<svg>{extension}</svg>");
//!
//! let report =
//!     process_catalog(&catalog, &template, dir.path(), &GeneratorConfig::default(), false)
//!         .unwrap();
//! assert_eq!(report.generated, 1);
//! assert!(dir.path().join("pdf.svg").exists());
//! ```

#[macro_use]
pub mod logger;

pub mod catalog;
pub mod check;
pub mod config;
pub mod error;
pub mod font;
pub mod generate;
pub mod render;
pub mod template;

pub use catalog::{Catalog, CatalogEntry, CatalogError, EntrySpec, DEFAULT_COLOR};
pub use check::{analyze_aliases, run_check, AliasReport, AliasWarning, CheckOutcome};
pub use config::{ConfigError, GeneratorConfig};
pub use error::IconError;
pub use font::{font_size, font_size_for};
pub use generate::{
    generate_all_templates, generate_from_catalog, process_catalog, BatchOutcome,
    GenerationReport,
};
pub use render::{icon_file_name, render_icon, IconOutcome};
pub use template::{IconParams, Template, TemplateError, TemplateFile};
