//! Shared CLI utilities.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Read an optional text file given on the command line.
pub fn read_optional_text(path: &Option<PathBuf>) -> Result<Option<String>> {
    path.as_ref()
        .map(|p| {
            std::fs::read_to_string(p).with_context(|| format!("Failed reading {}", p.display()))
        })
        .transpose()
}

/// Reject names that would place the manifests outside the scan root.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("Project name must not be empty");
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        anyhow::bail!("Project name must be a plain file name: {}", name);
    }
    Ok(())
}

/// Default project name: the scan directory's own name.
pub fn default_project_name(root: &Path) -> String {
    root.canonicalize()
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Project".to_string())
}
