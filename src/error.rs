//! Top-level error type

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::template::TemplateError;

/// Errors that abort a generation or check run
#[derive(Debug, Error)]
pub enum IconError {
    /// Catalog could not be read, parsed or saved
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Template could not be read or filled
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Config file could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Icon file or output directory could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the confirmation answer failed
    #[error("failed to read confirmation: {0}")]
    Prompt(#[source] std::io::Error),
}
