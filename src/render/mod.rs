//! Manifest rendering and writing.

pub mod filters;
pub mod project;
pub mod xml;

pub use filters::render_filters;
pub use project::render_project;
pub use xml::escape_xml;

use crate::domain::ProjectLayout;
use crate::error::{GenError, Result};
use crate::merge::Frame;
use crate::plan::ProjectPlan;
use std::path::PathBuf;

/// Text of both manifests, ready to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedManifests {
    pub project: String,
    pub filters: String,
}

pub fn render_manifests(plan: &ProjectPlan, frame: &Frame) -> RenderedManifests {
    RenderedManifests { project: render_project(plan, frame), filters: render_filters(plan) }
}

/// Overwrite the project manifest, then the filter manifest.
///
/// There is no temp-file swap: if the second write fails, the first file has
/// already been replaced.
pub fn write_manifests(layout: &ProjectLayout, rendered: &RenderedManifests) -> Result<Vec<PathBuf>> {
    let targets = [
        (layout.project_path(), &rendered.project),
        (layout.filters_path(), &rendered.filters),
    ];
    let mut written = Vec::with_capacity(targets.len());
    for (path, text) in targets {
        std::fs::write(&path, text).map_err(|e| GenError::write(&path, e))?;
        tracing::debug!("Wrote {} ({} bytes)", path.display(), text.len());
        written.push(path);
    }
    Ok(written)
}
