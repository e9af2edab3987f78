//! End-to-end generation: scan, plan, frame, render, write.

use crate::domain::{ProjectLayout, ScanOptions, ScanStats};
use crate::error::Result;
use crate::merge::{build_frame, FrameOrigin, FrameSource, ProjectGlobals};
use crate::plan::ProjectPlan;
use crate::render::{render_manifests, write_manifests, RenderedManifests};
use crate::scan::scan_project;
use std::path::PathBuf;

/// Everything the generator needs for one run.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub layout: ProjectLayout,
    pub scan: ScanOptions,
    pub frame: FrameSource,
    pub project_guid: Option<String>,
    /// Render but do not touch the destination files.
    pub dry_run: bool,
}

impl GenerationRequest {
    pub fn new(layout: ProjectLayout, scan: ScanOptions) -> Self {
        Self { layout, scan, frame: FrameSource::Fresh, project_guid: None, dry_run: false }
    }

    /// Merge into the project manifest at its default location.
    pub fn merge_in_place(mut self) -> Self {
        self.frame = FrameSource::Merge { existing: self.layout.project_path() };
        self
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub plan: ProjectPlan,
    pub stats: ScanStats,
    pub frame_origin: FrameOrigin,
    pub manifests: RenderedManifests,
    /// Files written, in order. Empty on a dry run.
    pub written: Vec<PathBuf>,
}

/// Run one generation pass.
///
/// The frame is resolved before anything is written, so merging reads the
/// previous manifest even when it is also the destination.
pub fn generate(request: &GenerationRequest) -> Result<GenerationReport> {
    let (files, stats) = scan_project(&request.layout, &request.scan)?;
    let plan = ProjectPlan::from_classified(&files);
    tracing::debug!(
        "Planned {} include, {} compile, {} filters",
        plan.include.len(),
        plan.compile.len(),
        plan.filters.len()
    );
    if plan.is_empty() {
        tracing::warn!("No matching files under {}", request.layout.root().display());
    }

    let globals = ProjectGlobals::new(&request.layout.name, request.project_guid.clone());
    let (frame, frame_origin) = build_frame(&request.frame, &globals);
    let manifests = render_manifests(&plan, &frame);

    let written = if request.dry_run {
        Vec::new()
    } else {
        write_manifests(&request.layout, &manifests)?
    };

    Ok(GenerationReport { plan, stats, frame_origin, manifests, written })
}
