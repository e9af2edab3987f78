//! Filter hierarchy derivation.

use crate::domain::RelPath;
use std::collections::HashSet;

/// Every ancestor directory of `files`, excluding the scan root itself.
///
/// Walking up a file's chain stops at the first ancestor already collected:
/// whenever a directory is inserted, all of its own ancestors were inserted
/// in the same walk, so the rest of the chain is already present.
pub fn derive_filters<'a, I>(files: I) -> HashSet<RelPath>
where
    I: IntoIterator<Item = &'a RelPath>,
{
    let mut filters = HashSet::new();
    for file in files {
        let mut current = file.parent();
        while let Some(dir) = current {
            current = dir.parent();
            if !filters.insert(dir) {
                break;
            }
        }
    }
    filters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(raw: &[&str]) -> Vec<RelPath> {
        raw.iter().map(|p| RelPath::parse(p).expect("path")).collect()
    }

    fn sorted(filters: HashSet<RelPath>) -> Vec<String> {
        let mut out: Vec<String> = filters.into_iter().map(|p| p.as_str().to_string()).collect();
        out.sort();
        out
    }

    #[test]
    fn test_collects_all_ancestors() {
        let files = paths(&["src/include/b.h", "src/a.cpp"]);
        assert_eq!(sorted(derive_filters(&files)), vec!["src", "src\\include"]);
    }

    #[test]
    fn test_top_level_files_add_nothing() {
        let files = paths(&["main.cpp", "README"]);
        assert!(derive_filters(&files).is_empty());
    }

    #[test]
    fn test_short_circuit_keeps_chain_complete() {
        // The second file hits `a\b` early; `a\b\c\d` must still bring `a\b\c`.
        let files = paths(&["a/b/x.cpp", "a/b/c/d/y.cpp", "a/e/z.cpp"]);
        let filters = derive_filters(&files);
        for dir in &filters {
            let mut current = dir.parent();
            while let Some(ancestor) = current {
                assert!(filters.contains(&ancestor), "{} missing ancestor {}", dir, ancestor);
                current = ancestor.parent();
            }
        }
        assert_eq!(sorted(filters), vec!["a", "a\\b", "a\\b\\c", "a\\b\\c\\d", "a\\e"]);
    }
}
