//! Catalog processing and batch generation
//!
//! [`generate_from_catalog`] renders every extension and alias of a catalog
//! with one template. [`generate_all_templates`] runs it once per
//! `template_<name>.svg` found in the templates directory, writing to
//! `<icons_dir>/<name>/`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::config::GeneratorConfig;
use crate::error::IconError;
use crate::logger;
use crate::render::{render_icon, IconOutcome};
use crate::template::{self, Template};

/// Counts for one catalog/template run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Template name
    pub template: String,
    /// Directory the icons were written to
    pub output_dir: PathBuf,
    /// Icons written
    pub generated: usize,
    /// Icons left untouched because they already existed
    pub skipped: usize,
}

impl GenerationReport {
    fn record(&mut self, outcome: &IconOutcome) {
        if outcome.is_generated() {
            self.generated += 1;
        } else {
            self.skipped += 1;
        }
    }

    /// Total number of icons visited
    pub fn total(&self) -> usize {
        self.generated + self.skipped
    }
}

/// Why a batch run produced nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// The templates directory does not exist
    MissingTemplatesDir(PathBuf),
    /// The templates directory has no `template_*.svg` files
    NoTemplates(PathBuf),
    /// One report per template, in file name order
    Completed(Vec<GenerationReport>),
}

impl BatchOutcome {
    /// Reports of the templates that ran
    pub fn reports(&self) -> &[GenerationReport] {
        match self {
            BatchOutcome::Completed(reports) => reports,
            _ => &[],
        }
    }

    /// Icons written across all templates
    pub fn generated(&self) -> usize {
        self.reports().iter().map(|r| r.generated).sum()
    }
}

/// Render every catalog entry and alias with a template already in memory.
///
/// Icons are produced in catalog order; the aliases of an extension follow
/// it directly, in list order, sharing its color and font size.
pub fn process_catalog(
    catalog: &Catalog,
    template: &Template,
    output_dir: &Path,
    config: &GeneratorConfig,
    force: bool,
) -> Result<GenerationReport, IconError> {
    let mut report = GenerationReport {
        template: template.name.clone(),
        output_dir: output_dir.to_path_buf(),
        ..Default::default()
    };

    fs::create_dir_all(output_dir).map_err(|source| IconError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;

    for (extension, entry) in catalog.entries() {
        let color = entry.color(&config.default_color);
        let font_size = entry.font_size();

        let names = std::iter::once(extension).chain(entry.aliases().iter().map(String::as_str));
        for name in names {
            let outcome = render_icon(name, color, output_dir, template, font_size, force)?;
            announce(&outcome);
            report.record(&outcome);
        }
    }

    Ok(report)
}

fn announce(outcome: &IconOutcome) {
    if logger::is_quiet() {
        return;
    }
    match outcome {
        IconOutcome::Generated { font_size, .. } => {
            log!("generate"; "Icon generated: {}", outcome.file_name());
            debug!("generate"; "  font size {}", font_size);
        }
        IconOutcome::Skipped { .. } => {
            log!("generate"; "File {} already exists, it will not be overwritten.", outcome.file_name());
        }
    }
}

/// Load a template and a catalog from disk and render every icon.
pub fn generate_from_catalog(
    catalog_path: &Path,
    output_dir: &Path,
    template_path: &Path,
    config: &GeneratorConfig,
    force: bool,
) -> Result<GenerationReport, IconError> {
    let template = Template::load(template_path)?;
    debug!("generate"; "template {}", template_path.display());

    let catalog = Catalog::from_file(catalog_path)?;
    debug!("generate"; "{} extensions in {}", catalog.len(), catalog_path.display());

    process_catalog(&catalog, &template, output_dir, config, force)
}

/// Render the catalog once per template in `config.templates_dir`.
///
/// A missing directory or an empty one is reported and is not an error.
pub fn generate_all_templates(
    catalog_path: &Path,
    config: &GeneratorConfig,
    force: bool,
) -> Result<BatchOutcome, IconError> {
    let templates_dir = &config.templates_dir;

    let Some(templates) = template::discover(templates_dir)? else {
        log!("batch"; "Directory {} does not exist.", templates_dir.display());
        return Ok(BatchOutcome::MissingTemplatesDir(templates_dir.clone()));
    };

    if templates.is_empty() {
        log!("batch"; "No templates found in directory {}.", templates_dir.display());
        return Ok(BatchOutcome::NoTemplates(templates_dir.clone()));
    }

    let mut reports = Vec::with_capacity(templates.len());
    for template_file in &templates {
        let output_dir = config.icons_dir.join(&template_file.name);
        log!("batch"; "Generating icons with template {}...", template_file.name);
        debug!("batch"; "output directory {}", output_dir.display());

        let report =
            generate_from_catalog(catalog_path, &output_dir, &template_file.path, config, force)?;
        reports.push(report);
    }

    Ok(BatchOutcome::Completed(reports))
}
