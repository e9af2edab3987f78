//! Deterministic ordering of paths.

use crate::domain::RelPath;

/// Sort paths by their canonical string form and drop duplicates.
///
/// Because a directory's string is a strict prefix of its descendants', every
/// parent lands before its children, and the output is identical across runs
/// whatever order the input arrived in.
pub fn ordered<I>(paths: I) -> Vec<RelPath>
where
    I: IntoIterator<Item = RelPath>,
{
    let mut out: Vec<RelPath> = paths.into_iter().collect();
    out.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parents_before_children_and_stable() {
        let raw = ["src\\include", "lib", "src", "src-old", "src\\a"];
        let first = ordered(raw.iter().map(|p| RelPath::parse(p).expect("p")));
        let second = ordered(raw.iter().rev().map(|p| RelPath::parse(p).expect("p")));
        assert_eq!(first, second);

        let strings: Vec<&str> = first.iter().map(RelPath::as_str).collect();
        assert_eq!(strings, vec!["lib", "src", "src-old", "src\\a", "src\\include"]);
    }

    #[test]
    fn test_duplicates_removed() {
        let paths = vec![RelPath::parse("a").expect("p"), RelPath::parse("a").expect("p")];
        assert_eq!(ordered(paths).len(), 1);
    }
}
