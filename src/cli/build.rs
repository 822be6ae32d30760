//! The build command: seed files in, import archive out

use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use tracing::info;

use crate::config::{ExportPaths, Settings};
use crate::error::SeedResult;
use crate::export::ExportArchive;
use crate::services::SeedValidator;
use crate::storage::SeedData;

/// Options for building the archive; all default to the stock layout
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Chart of accounts JSON (default: templates/coa.json)
    #[arg(long, value_name = "PATH")]
    pub coa: Option<PathBuf>,

    /// Journal templates JSON (default: templates/journal-templates.json)
    #[arg(long, value_name = "PATH")]
    pub templates: Option<PathBuf>,

    /// Archive to write (default: outputFile from settings)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Refuse to build when the seed data has integrity problems
    #[arg(long)]
    pub strict: bool,
}

/// What a build produced
#[derive(Debug, Clone)]
pub struct BuildSummary {
    /// Output path as the user sees it (unresolved)
    pub output: PathBuf,
    /// Output path actually written
    pub written_to: PathBuf,
    pub account_count: usize,
    pub template_count: usize,
    pub entry_count: usize,
    pub finding_count: usize,
}

/// Load, check, encode and write the archive
pub fn run_build(
    paths: &ExportPaths,
    settings: &Settings,
    args: &BuildArgs,
) -> SeedResult<BuildSummary> {
    let coa_path = args
        .coa
        .as_ref()
        .map(|p| paths.resolve(p))
        .unwrap_or_else(|| paths.coa_file());
    let templates_path = args
        .templates
        .as_ref()
        .map(|p| paths.resolve(p))
        .unwrap_or_else(|| paths.templates_file());
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.output_file));
    let written_to = paths.resolve(&output);

    let seed = SeedData::load(&coa_path, &templates_path)?;
    let finding_count = SeedValidator::new(&seed).check(args.strict)?;

    let archive = ExportArchive::build(&seed, settings, Local::now().naive_local())?;
    archive.write_to(&written_to)?;

    info!(
        accounts = archive.account_count,
        templates = archive.template_count,
        findings = finding_count,
        "export complete"
    );

    Ok(BuildSummary {
        output,
        written_to,
        account_count: archive.account_count,
        template_count: archive.template_count,
        entry_count: archive.entries().len(),
        finding_count,
    })
}

/// Handle the build command and print the summary
pub fn handle_build(paths: &ExportPaths, settings: &Settings, args: BuildArgs) -> SeedResult<()> {
    let summary = run_build(paths, settings, &args)?;

    println!("Created {}", summary.output.display());
    println!("  - {} chart of accounts", summary.account_count);
    println!("  - {} journal templates", summary.template_count);
    if summary.finding_count > 0 {
        println!(
            "  - {} seed data warning(s); rerun with --strict to fail on them",
            summary.finding_count
        );
    }
    println!();
    println!(
        "Import via: Settings > Import Data > Upload {}",
        summary.output.display()
    );

    Ok(())
}
