//! Generate command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::utils::{read_optional_text, validate_project_name};
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::ProjectLayout;
use crate::generate::{generate, GenerationRequest};
use crate::merge::{FrameOrigin, FrameSource};

#[derive(Args)]
pub struct GenerateArgs {
    /// Directory to scan; the manifests are written into it
    #[arg(value_name = "DIR")]
    pub path: PathBuf,

    /// Project name (writes <NAME>.vcxproj and <NAME>.vcxproj.filters)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Extensions compiled as sources, comma-separated (e.g. "cpp,c")
    #[arg(value_name = "COMPILE_EXTS")]
    pub compile_ext: Option<String>,

    /// Extensions listed as headers, comma-separated (e.g. "h,hpp")
    #[arg(value_name = "INCLUDE_EXTS")]
    pub include_ext: Option<String>,

    /// Directories to skip, relative to DIR (comma-separated)
    #[arg(short = 'e', long, value_name = "DIRS")]
    pub exclude: Option<String>,

    /// Update the existing project manifest instead of replacing it
    #[arg(short = 'm', long)]
    pub merge: bool,

    /// Manifest to merge from (defaults to DIR/<NAME>.vcxproj)
    #[arg(long, value_name = "FILE", requires = "merge")]
    pub existing: Option<PathBuf>,

    /// File whose text replaces the generated project header
    #[arg(long, value_name = "FILE", conflicts_with = "merge")]
    pub header: Option<PathBuf>,

    /// File whose text replaces the generated project footer
    #[arg(long, value_name = "FILE", conflicts_with = "merge")]
    pub footer: Option<PathBuf>,

    /// Value written as ProjectGuid (defaults to the project name)
    #[arg(long, value_name = "GUID")]
    pub guid: Option<String>,

    /// Path to config file (visualgen.toml or visualgen.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Follow symbolic links when scanning
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Print the manifests instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    validate_project_name(&args.name)?;

    let file_config = load_config(&args.path, args.config.as_deref())?;
    let cli_overrides = CliOverrides {
        compile_extensions: args.compile_ext.clone(),
        include_extensions: args.include_ext.clone(),
        exclude_dirs: args.exclude.clone(),
        project_guid: args.guid.clone(),
        follow_symlinks: if args.follow_symlinks { Some(true) } else { None },
    };
    let settings = merge_cli_with_config(&cli_overrides, &file_config);

    let layout = ProjectLayout::new(&args.path, &args.name);
    let frame = if args.merge {
        let existing = args.existing.clone().unwrap_or_else(|| layout.project_path());
        FrameSource::Merge { existing }
    } else if args.header.is_some() || args.footer.is_some() {
        FrameSource::Custom {
            header: read_optional_text(&args.header)?,
            footer: read_optional_text(&args.footer)?,
        }
    } else {
        FrameSource::Fresh
    };

    let request = GenerationRequest {
        layout,
        scan: settings.scan,
        frame,
        project_guid: settings.project_guid,
        dry_run: args.dry_run,
    };

    println!(
        "Processing {} to {}",
        request.layout.root().display(),
        request.layout.project_path().display()
    );

    let report = generate(&request)
        .with_context(|| format!("Failed to generate project {}", request.layout.name))?;

    if let FrameOrigin::MergeFallback { reason } = &report.frame_origin {
        tracing::info!("Merge fell back to the fresh template: {}", reason);
    }

    if args.dry_run {
        println!("--- {}", request.layout.project_file_name());
        print!("{}", report.manifests.project);
        println!("--- {}", request.layout.filters_file_name());
        print!("{}", report.manifests.filters);
        return Ok(());
    }

    println!(
        "Wrote {} include, {} compile, {} filters",
        report.plan.include.len(),
        report.plan.compile.len(),
        report.plan.filters.len()
    );
    for path in &report.written {
        println!("  {}", path.display());
    }

    Ok(())
}
