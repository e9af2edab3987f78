//! Info command implementation

use anyhow::Result;
use clap::Args;
use serde_json::json;
use std::path::PathBuf;

use super::utils::{default_project_name, validate_project_name};
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::ProjectLayout;
use crate::plan::ProjectPlan;
use crate::scan::{render_filter_tree, scan_project};

#[derive(Args)]
pub struct InfoArgs {
    /// Local directory path to analyze
    #[arg(value_name = "DIR")]
    pub path: PathBuf,

    /// Extensions compiled as sources, comma-separated
    #[arg(value_name = "COMPILE_EXTS")]
    pub compile_ext: Option<String>,

    /// Extensions listed as headers, comma-separated
    #[arg(value_name = "INCLUDE_EXTS")]
    pub include_ext: Option<String>,

    /// Project name whose manifests are ignored while scanning (defaults to the directory name)
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: Option<String>,

    /// Directories to skip, relative to DIR (comma-separated)
    #[arg(short = 'e', long, value_name = "DIRS")]
    pub exclude: Option<String>,

    /// Path to config file (visualgen.toml or visualgen.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Follow symbolic links when scanning
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Show only filters in the tree
    #[arg(long)]
    pub no_files: bool,

    /// Print a JSON summary instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: InfoArgs) -> Result<()> {
    let name = args.name.clone().unwrap_or_else(|| default_project_name(&args.path));
    validate_project_name(&name)?;

    let file_config = load_config(&args.path, args.config.as_deref())?;
    let cli_overrides = CliOverrides {
        compile_extensions: args.compile_ext.clone(),
        include_extensions: args.include_ext.clone(),
        exclude_dirs: args.exclude.clone(),
        project_guid: None,
        follow_symlinks: if args.follow_symlinks { Some(true) } else { None },
    };
    let settings = merge_cli_with_config(&cli_overrides, &file_config);

    let layout = ProjectLayout::new(&args.path, &name);
    let (files, stats) = scan_project(&layout, &settings.scan)?;
    let plan = ProjectPlan::from_classified(&files);

    if args.json {
        let summary = json!({
            "project": name,
            "options": settings.scan,
            "stats": stats,
            "filters": plan.filters,
            "include": plan.include,
            "compile": plan.compile,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Project: {}", name);
    if settings.scan.is_unfiltered() {
        println!("Extensions: none given, every file is compiled");
    } else {
        let list = |set: &crate::domain::ExtensionSet| set.iter().collect::<Vec<_>>().join(", ");
        println!("Compile extensions: {}", list(&settings.scan.compile_extensions));
        println!("Include extensions: {}", list(&settings.scan.include_extensions));
    }

    println!("Statistics:");
    println!("  Files seen: {}", stats.files_seen);
    println!("  Compile files: {}", stats.files_compile);
    println!("  Include files: {}", stats.files_include);
    println!("  Filters: {}", plan.filters.len());
    println!("  Files skipped (hidden): {}", stats.files_skipped_hidden);
    println!("  Files skipped (own manifests): {}", stats.files_skipped_output);
    println!("  Files skipped (extension): {}", stats.files_skipped_extension);
    println!("  Directories traversed: {}", stats.dirs_traversed);
    println!("  Directories pruned: {}", stats.dirs_pruned);

    println!("\n{}", render_filter_tree(&name, &plan, !args.no_files));

    Ok(())
}
