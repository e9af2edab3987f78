//! Merging CLI arguments over file configuration.

use crate::domain::{Config, ExclusionSet, ExtensionSet, ScanOptions};

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub compile_extensions: Option<String>,
    pub include_extensions: Option<String>,
    pub exclude_dirs: Option<String>,
    pub project_guid: Option<String>,
    pub follow_symlinks: Option<bool>,
}

/// Settings after applying CLI > file > defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub scan: ScanOptions,
    pub project_guid: Option<String>,
}

pub fn merge_cli_with_config(cli: &CliOverrides, config: &Config) -> ResolvedSettings {
    let extensions = |from_cli: &Option<String>, from_file: &Option<Vec<String>>| {
        match (from_cli, from_file) {
            (Some(list), _) => ExtensionSet::parse(list),
            (None, Some(items)) => items.iter().collect(),
            (None, None) => ExtensionSet::default(),
        }
    };

    let exclusions = match &cli.exclude_dirs {
        Some(list) => ExclusionSet::parse(list),
        None => config.exclude_dirs.iter().collect(),
    };

    ResolvedSettings {
        scan: ScanOptions {
            compile_extensions: extensions(&cli.compile_extensions, &config.compile_extensions),
            include_extensions: extensions(&cli.include_extensions, &config.include_extensions),
            exclusions,
            follow_symlinks: cli.follow_symlinks.unwrap_or(config.follow_symlinks),
        },
        project_guid: cli.project_guid.clone().or_else(|| config.project_guid.clone()),
    }
}
