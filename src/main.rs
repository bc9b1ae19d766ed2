//! ext-icons CLI
//!
//! Usage:
//!   ext-icons [OPTIONS] [JSON_FILE]
//!
//! Options:
//!   --output-dir <DIR>     Output directory when a single template is used
//!   --template <FILE>      Template to use; all templates when omitted
//!   --templates-dir <DIR>  Directory searched for template_<name>.svg
//!   --config <FILE>        Generator settings (TOML format)
//!   --force                Overwrite existing icons
//!   --check                Check aliases instead of generating
//!   -h, --help             Print help

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use ext_icons::{
    generate_all_templates, generate_from_catalog, log, logger, run_check, BatchOutcome,
    GeneratorConfig, IconError,
};

#[derive(Parser)]
#[command(name = "ext-icons")]
#[command(about = "Generate icons for file extensions")]
struct Cli {
    /// JSON file of extension/color pairs
    #[arg(default_value = "extensions.json")]
    json_file: PathBuf,

    /// Output directory for the icons (single-template mode)
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// SVG template file; all templates in the templates directory are used when omitted
    #[arg(long)]
    template: Option<PathBuf>,

    /// Directory searched for template_<name>.svg files
    #[arg(long)]
    templates_dir: Option<PathBuf>,

    /// Generator settings file (TOML format)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overwrite existing files
    #[arg(long)]
    force: bool,

    /// Check for duplicates in aliases and extensions
    #[arg(long)]
    check: bool,

    /// Show template paths, output directories and font sizes
    #[arg(short, long)]
    verbose: bool,

    /// Only print warnings and summaries
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    logger::set_verbose(cli.verbose);
    logger::set_quiet(cli.quiet);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), IconError> {
    if cli.check {
        run_check(&cli.json_file, confirm_removal)?;
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(dir) = &cli.templates_dir {
        config.templates_dir = dir.clone();
    }

    match &cli.template {
        Some(template) => {
            let report =
                generate_from_catalog(&cli.json_file, &cli.output_dir, template, &config, cli.force)?;
            log!(
                "generate";
                "Done: {} generated, {} skipped in {}",
                report.generated,
                report.skipped,
                report.output_dir.display()
            );
        }
        None => {
            let outcome = generate_all_templates(&cli.json_file, &config, cli.force)?;
            if let BatchOutcome::Completed(reports) = &outcome {
                for report in reports {
                    log!(
                        "batch";
                        "{}: {} generated, {} skipped in {}",
                        report.template,
                        report.generated,
                        report.skipped,
                        report.output_dir.display()
                    );
                }
            }
            log!("batch"; "Total: {} icons generated", outcome.generated());
        }
    }

    Ok(())
}

/// Ask on stdin whether to delete primaries that are also aliases
fn confirm_removal(_extensions: &[String]) -> io::Result<bool> {
    print!("Do you want to remove these main extensions that are also aliases? (yes/no): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

/// Only a literal "yes" confirms, ignoring case and surrounding whitespace
fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
