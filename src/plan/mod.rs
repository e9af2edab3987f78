//! Ordered view of a classified tree: the file lists and filter hierarchy the
//! manifests are rendered from.

use crate::domain::{ClassifiedFiles, RelPath};
use serde::Serialize;

pub mod hierarchy;
pub mod order;

pub use hierarchy::derive_filters;
pub use order::ordered;

/// Sorted compile files, include files and filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectPlan {
    pub include: Vec<RelPath>,
    pub compile: Vec<RelPath>,
    pub filters: Vec<RelPath>,
}

impl ProjectPlan {
    pub fn from_classified(files: &ClassifiedFiles) -> Self {
        let filters = derive_filters(files.all_files());
        Self {
            include: ordered(files.include.iter().cloned()),
            compile: ordered(files.compile.iter().cloned()),
            filters: ordered(filters),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.compile.is_empty()
    }
}
