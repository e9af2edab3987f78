//! Scan-root relative paths in the canonical backslash form used by project files.

use crate::utils::to_canonical_separators;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Component, Path};

/// Canonical separator written into every manifest.
pub const SEPARATOR: char = '\\';

/// A file or directory path relative to the scan root.
///
/// Always relative and never empty. Ordering is plain string ordering over the
/// canonical form, so a directory sorts before everything beneath it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelPath(String);

impl RelPath {
    /// Build from a path already stripped of the scan root.
    ///
    /// Returns `None` for empty paths and for anything carrying a root,
    /// prefix or `..` component.
    pub fn from_relative(path: &Path) -> Option<Self> {
        let mut parts = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        if parts.is_empty() {
            return None;
        }
        Some(Self(parts.join(&SEPARATOR.to_string())))
    }

    /// Parse a user-supplied string such as `src/gen` or `src\gen\`.
    pub fn parse(raw: &str) -> Option<Self> {
        let canonical = to_canonical_separators(raw.trim());
        let trimmed = canonical.trim_matches(SEPARATOR);
        if trimmed.is_empty() {
            return None;
        }
        let parts: Vec<&str> =
            trimmed.split(SEPARATOR).filter(|p| !p.is_empty() && *p != ".").collect();
        if parts.is_empty() || parts.contains(&"..") {
            return None;
        }
        Some(Self(parts.join(&SEPARATOR.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last component.
    pub fn file_name(&self) -> &str {
        match self.0.rfind(SEPARATOR) {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// Containing directory, or `None` for an entry directly under the scan root.
    pub fn parent(&self) -> Option<RelPath> {
        self.0.rfind(SEPARATOR).map(|idx| RelPath(self.0[..idx].to_string()))
    }

    /// Dot-prefixed extension of the file name, compared case-sensitively by callers.
    ///
    /// Follows `Path::extension`: `a.tar.gz` gives `.gz`, `.profile` and `Makefile`
    /// give `None`.
    pub fn extension(&self) -> Option<String> {
        Path::new(self.file_name())
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
    }
}

impl fmt::Display for RelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for RelPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
