//! Core data types shared by the scanner, planner and renderers.

use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

mod config;
mod path;

pub use config::Config;
pub use path::{RelPath, SEPARATOR};

/// Extension of the generated project manifest.
pub const PROJECT_EXTENSION: &str = ".vcxproj";
/// Extension of the generated filter manifest.
pub const FILTERS_EXTENSION: &str = ".vcxproj.filters";

/// Role a file plays in the project. A file may hold both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FileRole {
    Compile,
    Include,
}

impl FileRole {
    /// MSBuild item element name for this role.
    pub fn item_tag(self) -> &'static str {
        match self {
            FileRole::Compile => "ClCompile",
            FileRole::Include => "ClInclude",
        }
    }
}

/// Dot-prefixed extensions such as `.cpp`. Comparison is exact, no case folding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtensionSet(BTreeSet<String>);

impl ExtensionSet {
    /// Parse a list like `"cpp, .c"` or `h,hpp`.
    ///
    /// Surrounding quotes are stripped, entries are split on commas, trimmed of
    /// spaces and dots, and re-prefixed with a single dot.
    pub fn parse(list: &str) -> Self {
        let unquoted = list.trim().trim_matches('"');
        unquoted.split(',').collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.0.contains(extension)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .filter_map(|raw| {
                    let cleaned = raw.as_ref().trim_matches(|c| c == '.' || c == ' ');
                    (!cleaned.is_empty()).then(|| format!(".{}", cleaned))
                })
                .collect(),
        )
    }
}

/// Directories (relative to the scan root) whose whole subtree is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExclusionSet(BTreeSet<RelPath>);

impl ExclusionSet {
    /// Parse a comma-separated list such as `build, third_party/gen`.
    pub fn parse(list: &str) -> Self {
        list.split(',').collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, dir: &RelPath) -> bool {
        self.0.contains(dir)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().filter_map(|raw| RelPath::parse(raw.as_ref())).collect())
    }
}

/// Resolved classification settings handed to the scanner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanOptions {
    pub compile_extensions: ExtensionSet,
    pub include_extensions: ExtensionSet,
    pub exclusions: ExclusionSet,
    pub follow_symlinks: bool,
}

impl ScanOptions {
    /// Both extension sets empty: every surviving file is compiled.
    pub fn is_unfiltered(&self) -> bool {
        self.compile_extensions.is_empty() && self.include_extensions.is_empty()
    }
}

/// Result of classifying a directory tree.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedFiles {
    pub compile: BTreeSet<RelPath>,
    pub include: BTreeSet<RelPath>,
    /// Every directory the walk descended into (pruned ones excluded).
    pub directories: BTreeSet<RelPath>,
}

impl ClassifiedFiles {
    /// Union of both roles.
    pub fn all_files(&self) -> impl Iterator<Item = &RelPath> {
        self.compile.iter().chain(self.include.iter())
    }
}

/// Scanning statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub files_seen: usize,
    pub files_compile: usize,
    pub files_include: usize,
    pub files_skipped_hidden: usize,
    pub files_skipped_output: usize,
    pub files_skipped_extension: usize,
    pub dirs_traversed: usize,
    pub dirs_pruned: usize,
}

/// Where the two manifests of a project live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub name: String,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { root: root.into(), name: name.into() }
    }

    pub fn project_file_name(&self) -> String {
        format!("{}{}", self.name, PROJECT_EXTENSION)
    }

    pub fn filters_file_name(&self) -> String {
        format!("{}{}", self.name, FILTERS_EXTENSION)
    }

    pub fn project_path(&self) -> PathBuf {
        self.root.join(self.project_file_name())
    }

    pub fn filters_path(&self) -> PathBuf {
        self.root.join(self.filters_file_name())
    }

    /// True when `file_name` is one of the generated manifests.
    pub fn is_output_name(&self, file_name: &str) -> bool {
        file_name == self.project_file_name() || file_name == self.filters_file_name()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
