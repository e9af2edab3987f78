//! Directory scanning and classification

use crate::domain::{ClassifiedFiles, ProjectLayout, ScanOptions, ScanStats};
use crate::error::Result;

pub mod scanner;
pub mod tree;

pub use scanner::ProjectScanner;
pub use tree::render_filter_tree;

pub fn scan_project(
    layout: &ProjectLayout,
    options: &ScanOptions,
) -> Result<(ClassifiedFiles, ScanStats)> {
    let mut scanner = ProjectScanner::new(layout.clone(), options.clone());
    let files = scanner.scan()?;
    let stats = scanner.stats().clone();
    Ok((files, stats))
}
