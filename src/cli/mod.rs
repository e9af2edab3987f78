//! Command-line interface for visualgen
//!
//! Provides `generate`, `info` and `completions` subcommands.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod generate;
mod info;
mod utils;

/// Generate Visual Studio project files from a directory tree
#[derive(Parser)]
#[command(name = "visualgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write <NAME>.vcxproj and <NAME>.vcxproj.filters for a directory
    Generate(generate::GenerateArgs),

    /// Show how a directory would be classified without writing anything
    Info(info::InfoArgs),

    /// Print shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // The global level is DEBUG with --verbose and WARN otherwise; per-target RUST_LOG
    // directives (e.g. `visualgen::merge=trace`) still apply on top of it.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Generate(args) => generate::run(args),
        Commands::Info(args) => info::run(args),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "visualgen", &mut std::io::stdout());
            Ok(())
        }
    }
}
