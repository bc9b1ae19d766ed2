//! Alias consistency checks
//!
//! [`analyze_aliases`] is a pure scan of a catalog. [`run_check`] prints its
//! findings and, when some primary extensions are also claimed as aliases,
//! asks a confirmation callback whether to delete those primaries from the
//! catalog file.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::IconError;
use crate::render::icon_file_name;

/// Problems found while scanning aliases
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasWarning {
    /// An alias has the same name as a primary extension
    ShadowsExtension { alias: String, extension: String },
    /// An alias was already claimed by an earlier extension
    DuplicateAlias {
        alias: String,
        extension: String,
        first_owner: String,
    },
    /// Different spellings that produce the same output file
    FileNameCollision { file_name: String, names: Vec<String> },
}

impl fmt::Display for AliasWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasWarning::ShadowsExtension { alias, extension } => write!(
                f,
                "Alias '{}' for extension '{}' is already defined as a main extension.",
                alias, extension
            ),
            AliasWarning::DuplicateAlias {
                alias,
                extension,
                first_owner,
            } => write!(
                f,
                "Alias '{}' for extension '{}' is already an alias for extension '{}'.",
                alias, extension, first_owner
            ),
            AliasWarning::FileNameCollision { file_name, names } => write!(
                f,
                "Names {} all write {}.",
                names
                    .iter()
                    .map(|n| format!("'{}'", n))
                    .collect::<Vec<_>>()
                    .join(", "),
                file_name
            ),
        }
    }
}

/// Result of scanning a catalog's aliases
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasReport {
    /// Number of primary extensions
    pub extension_count: usize,
    /// Each distinct alias with the extension that claimed it first
    pub aliases: Vec<(String, String)>,
    /// Warnings in scan order
    pub warnings: Vec<AliasWarning>,
    /// Primary extensions that are also used as aliases, in catalog order
    pub extensions_also_aliases: Vec<String>,
}

impl AliasReport {
    /// Number of distinct aliases
    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Extension that first claimed `alias`
    pub fn owner_of(&self, alias: &str) -> Option<&str> {
        self.aliases
            .iter()
            .find(|(a, _)| a == alias)
            .map(|(_, ext)| ext.as_str())
    }
}

/// Scan a catalog for alias collisions
pub fn analyze_aliases(catalog: &Catalog) -> AliasReport {
    let primaries: HashSet<&str> = catalog.extensions().collect();
    let mut owners: HashMap<&str, &str> = HashMap::new();
    let mut report = AliasReport {
        extension_count: catalog.len(),
        ..Default::default()
    };

    for (extension, entry) in catalog.entries() {
        for alias in entry.aliases() {
            if primaries.contains(alias.as_str()) {
                report.warnings.push(AliasWarning::ShadowsExtension {
                    alias: alias.clone(),
                    extension: extension.to_string(),
                });
            }
            if let Some(first_owner) = owners.get(alias.as_str()) {
                report.warnings.push(AliasWarning::DuplicateAlias {
                    alias: alias.clone(),
                    extension: extension.to_string(),
                    first_owner: first_owner.to_string(),
                });
            } else {
                owners.insert(alias.as_str(), extension);
                report.aliases.push((alias.clone(), extension.to_string()));
            }
        }
    }

    report.warnings.extend(file_name_collisions(catalog));
    report.extensions_also_aliases = catalog
        .extensions()
        .filter(|ext| owners.contains_key(ext))
        .map(str::to_string)
        .collect();

    report
}

/// Group every distinct name by output file, keeping groups of two or more
fn file_name_collisions(catalog: &Catalog) -> Vec<AliasWarning> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();

    let names = catalog.entries().flat_map(|(ext, entry)| {
        std::iter::once(ext).chain(entry.aliases().iter().map(String::as_str))
    });
    for name in names {
        let file_name = icon_file_name(name);
        let slot = *index.entry(file_name.clone()).or_insert_with(|| {
            groups.push((file_name, Vec::new()));
            groups.len() - 1
        });
        let spellings = &mut groups[slot].1;
        if !spellings.iter().any(|n| n == name) {
            spellings.push(name.to_string());
        }
    }

    groups
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|(file_name, names)| AliasWarning::FileNameCollision { file_name, names })
        .collect()
}

/// What `run_check` did with the catalog file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// No primary extension is also an alias
    Clean,
    /// The user declined; the file was left untouched
    Declined,
    /// These primaries were removed and the file rewritten
    Removed(Vec<String>),
}

/// Check the catalog at `path` and optionally remove primaries that are also
/// aliases.
///
/// `confirm` receives the offending names and decides whether to rewrite the
/// file. It is only called when there is something to remove.
pub fn run_check<F>(path: &Path, confirm: F) -> Result<(AliasReport, CheckOutcome), IconError>
where
    F: FnOnce(&[String]) -> std::io::Result<bool>,
{
    let mut catalog = Catalog::from_file(path)?;
    let report = analyze_aliases(&catalog);

    for warning in &report.warnings {
        warning!("check"; "{}", warning);
    }

    log!("check"; "List of aliases:");
    for (alias, extension) in &report.aliases {
        log!("check"; "  - {} → {}", alias, extension);
    }
    log!(
        "check";
        "Total: {} extensions and {} aliases.",
        report.extension_count,
        report.alias_count()
    );

    if report.extensions_also_aliases.is_empty() {
        log!("check"; "No main extensions that are also aliases found.");
        return Ok((report, CheckOutcome::Clean));
    }

    warning!(
        "check";
        "Main extensions that are also aliases: {}",
        report.extensions_also_aliases.join(", ")
    );

    if !confirm(&report.extensions_also_aliases).map_err(IconError::Prompt)? {
        log!("check"; "No changes made.");
        return Ok((report, CheckOutcome::Declined));
    }

    for extension in &report.extensions_also_aliases {
        catalog.remove(extension);
    }
    catalog.save(path)?;
    log!("check"; "Main extensions that are also aliases have been removed.");

    let removed = report.extensions_also_aliases.clone();
    Ok((report, CheckOutcome::Removed(removed)))
}
