use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use seed_export::cli::{handle_build, handle_inspect, BuildArgs};
use seed_export::config::{ExportPaths, Settings};

#[derive(Parser)]
#[command(
    name = "seed-export",
    version,
    about = "Build an accounting import archive from seed files",
    long_about = "Converts templates/coa.json and templates/journal-templates.json \
                  into the ZIP archive accepted by Settings > Import Data. \
                  Run without arguments to build artivisi-seed-data.zip in the \
                  current directory.",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    build: BuildArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the import archive (the default)
    Build(BuildArgs),

    /// List the entries of an archive and check its layout
    Inspect {
        /// Archive to inspect (default: the build output)
        archive: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("seed_export=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = ExportPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;
    tracing::debug!(base_dir = %paths.base_dir().display(), "resolved base directory");

    match cli.command {
        Some(Commands::Build(args)) => handle_build(&paths, &settings, args)?,
        Some(Commands::Inspect { archive }) => handle_inspect(&paths, &settings, archive)?,
        None => handle_build(&paths, &settings, cli.build)?,
    }

    Ok(())
}
