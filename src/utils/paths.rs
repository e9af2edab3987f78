//! Path normalization

/// Convert forward slashes to the backslash separator used in project files.
pub fn to_canonical_separators(path: &str) -> String {
    path.replace('/', "\\")
}
