//! Directory classifier: walks the scan root once and sorts files into roles.

use crate::domain::{ClassifiedFiles, ProjectLayout, RelPath, ScanOptions, ScanStats};
use crate::error::{GenError, Result};
use ignore::WalkBuilder;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Classifies the files under a project root into compile and include sets.
pub struct ProjectScanner {
    layout: ProjectLayout,
    options: ScanOptions,
    stats: ScanStats,
}

impl ProjectScanner {
    pub fn new(layout: ProjectLayout, options: ScanOptions) -> Self {
        Self { layout, options, stats: ScanStats::default() }
    }

    /// Walk the tree depth-first and classify every regular file.
    ///
    /// Excluded directories are pruned before descent. Hidden files (leading `.`)
    /// and files named like either output manifest are skipped wherever they sit.
    /// Any walk error (unreadable directory, symlink loop) fails the scan.
    pub fn scan(&mut self) -> Result<ClassifiedFiles> {
        self.stats = ScanStats::default();
        let root = self.layout.root().to_path_buf();
        check_root(&root)?;

        let pruned = Arc::new(AtomicUsize::new(0));
        let dir_filter = {
            let root = root.clone();
            let exclusions = self.options.exclusions.clone();
            let pruned = Arc::clone(&pruned);
            move |entry: &ignore::DirEntry| -> bool {
                if entry.depth() == 0 || exclusions.is_empty() {
                    return true;
                }
                if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    return true;
                }
                let excluded = relative_to(&root, entry.path())
                    .is_some_and(|rel| exclusions.contains(&rel));
                if excluded {
                    tracing::debug!("Pruning excluded directory {}", entry.path().display());
                    pruned.fetch_add(1, Ordering::Relaxed);
                }
                !excluded
            }
        };

        let mut builder = WalkBuilder::new(&root);
        builder
            .standard_filters(false) // no gitignore, no hidden-dir skipping
            .follow_links(self.options.follow_symlinks)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(dir_filter);

        let mut classified = ClassifiedFiles::default();
        for entry_result in builder.build() {
            // An unreadable directory or a symlink loop would silently drop files.
            let entry = entry_result.map_err(|err| GenError::scan(&root, err.to_string()))?;
            if entry.depth() == 0 {
                continue;
            }

            let Some(rel) = relative_to(&root, entry.path()) else {
                continue;
            };

            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                self.stats.dirs_traversed += 1;
                classified.directories.insert(rel);
                continue;
            }

            // Follows symlinks, like a regular-file check on the target.
            if !entry.path().is_file() {
                continue;
            }

            self.stats.files_seen += 1;
            self.classify(rel, &mut classified);
        }

        self.stats.dirs_pruned = pruned.load(Ordering::Relaxed);
        self.stats.files_compile = classified.compile.len();
        self.stats.files_include = classified.include.len();
        tracing::debug!("Scan of {} finished: {:?}", root.display(), self.stats);

        Ok(classified)
    }

    fn classify(&mut self, rel: RelPath, classified: &mut ClassifiedFiles) {
        let name = rel.file_name();
        if name.starts_with('.') {
            self.stats.files_skipped_hidden += 1;
            return;
        }
        if self.layout.is_output_name(name) {
            tracing::debug!("Skipping generated manifest {}", rel);
            self.stats.files_skipped_output += 1;
            return;
        }

        let extension = rel.extension();
        let in_set = |set: &crate::domain::ExtensionSet| {
            extension.as_deref().is_some_and(|ext| set.contains(ext))
        };
        let is_compile = self.options.is_unfiltered() || in_set(&self.options.compile_extensions);
        let is_include = in_set(&self.options.include_extensions);

        if !is_compile && !is_include {
            self.stats.files_skipped_extension += 1;
            return;
        }
        if is_include {
            classified.include.insert(rel.clone());
        }
        if is_compile {
            classified.compile.insert(rel);
        }
    }

    /// Get scanning statistics
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }
}

fn check_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(GenError::scan(root, "directory does not exist"));
    }
    if !root.is_dir() {
        return Err(GenError::scan(root, "not a directory"));
    }
    std::fs::read_dir(root).map_err(|e| GenError::scan(root, e.to_string()))?;
    Ok(())
}

fn relative_to(root: &Path, path: &Path) -> Option<RelPath> {
    path.strip_prefix(root).ok().and_then(RelPath::from_relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExclusionSet, ExtensionSet};
    use std::fs;
    use tempfile::TempDir;

    fn options(compile: &str, include: &str, exclude: &str) -> ScanOptions {
        ScanOptions {
            compile_extensions: ExtensionSet::parse(compile),
            include_extensions: ExtensionSet::parse(include),
            exclusions: ExclusionSet::parse(exclude),
            follow_symlinks: false,
        }
    }

    fn names(set: &std::collections::BTreeSet<RelPath>) -> Vec<&str> {
        set.iter().map(RelPath::as_str).collect()
    }

    #[test]
    fn test_classifies_by_extension() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("src/include")).unwrap();
        fs::write(root.join("src/a.cpp"), "int a;").unwrap();
        fs::write(root.join("src/include/b.h"), "#pragma once").unwrap();
        fs::write(root.join("README"), "readme").unwrap();

        let mut scanner =
            ProjectScanner::new(ProjectLayout::new(root, "Demo"), options("cpp,c", "h", ""));
        let files = scanner.scan().unwrap();

        assert_eq!(names(&files.compile), vec!["src\\a.cpp"]);
        assert_eq!(names(&files.include), vec!["src\\include\\b.h"]);
        assert_eq!(scanner.stats().files_skipped_extension, 1);
        assert_eq!(names(&files.directories), vec!["src", "src\\include"]);
    }

    #[test]
    fn test_unfiltered_mode_compiles_everything_visible() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::write(root.join("main.cpp"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();
        fs::write(root.join("Makefile"), "").unwrap();
        fs::write(root.join(".hidden.cpp"), "").unwrap();

        let mut scanner = ProjectScanner::new(ProjectLayout::new(root, "Demo"), options("", "", ""));
        let files = scanner.scan().unwrap();

        assert_eq!(names(&files.compile), vec!["Makefile", "main.cpp", "notes.txt"]);
        assert!(files.include.is_empty());
        assert_eq!(scanner.stats().files_skipped_hidden, 1);
    }

    #[test]
    fn test_file_can_hold_both_roles() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::write(root.join("shared.inl"), "").unwrap();

        let mut scanner =
            ProjectScanner::new(ProjectLayout::new(root, "Demo"), options("inl", "inl", ""));
        let files = scanner.scan().unwrap();

        assert_eq!(names(&files.compile), vec!["shared.inl"]);
        assert_eq!(names(&files.include), vec!["shared.inl"]);
    }

    #[test]
    fn test_excluded_directory_is_pruned() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("build/deep")).unwrap();
        fs::create_dir_all(root.join("src/build")).unwrap();
        fs::write(root.join("build/obj.cpp"), "").unwrap();
        fs::write(root.join("build/deep/x.cpp"), "").unwrap();
        fs::write(root.join("src/a.cpp"), "").unwrap();
        fs::write(root.join("src/build/kept.cpp"), "").unwrap();

        let mut scanner =
            ProjectScanner::new(ProjectLayout::new(root, "Demo"), options("cpp", "", "build"));
        let files = scanner.scan().unwrap();

        assert_eq!(names(&files.compile), vec!["src\\a.cpp", "src\\build\\kept.cpp"]);
        assert!(!files.directories.iter().any(|d| d.as_str().starts_with("build")));
        assert_eq!(scanner.stats().dirs_pruned, 1);
    }

    #[test]
    fn test_nested_exclusion_path() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("src/gen")).unwrap();
        fs::write(root.join("src/gen/auto.cpp"), "").unwrap();
        fs::write(root.join("src/a.cpp"), "").unwrap();

        let mut scanner =
            ProjectScanner::new(ProjectLayout::new(root, "Demo"), options("cpp", "", "src/gen"));
        let files = scanner.scan().unwrap();

        assert_eq!(names(&files.compile), vec!["src\\a.cpp"]);
    }

    #[test]
    fn test_own_outputs_skipped_by_name_anywhere() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("Demo.vcxproj"), "").unwrap();
        fs::write(root.join("Demo.vcxproj.filters"), "").unwrap();
        fs::write(root.join("sub/Demo.vcxproj"), "").unwrap();
        fs::write(root.join("Other.vcxproj"), "").unwrap();

        let mut scanner = ProjectScanner::new(ProjectLayout::new(root, "Demo"), options("", "", ""));
        let files = scanner.scan().unwrap();

        assert_eq!(names(&files.compile), vec!["Other.vcxproj"]);
        assert_eq!(scanner.stats().files_skipped_output, 3);
    }

    #[test]
    fn test_hidden_directories_are_still_walked() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join(".cfg")).unwrap();
        fs::write(root.join(".cfg/settings.h"), "").unwrap();

        let mut scanner =
            ProjectScanner::new(ProjectLayout::new(root, "Demo"), options("", "h", ""));
        let files = scanner.scan().unwrap();

        assert_eq!(names(&files.include), vec![".cfg\\settings.h"]);
    }

    #[test]
    fn test_missing_root_is_scan_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let mut scanner =
            ProjectScanner::new(ProjectLayout::new(&missing, "Demo"), options("", "", ""));
        let err = scanner.scan().unwrap_err();
        assert!(matches!(err, GenError::Scan { .. }));
    }

    #[test]
    fn test_file_root_is_scan_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.cpp");
        fs::write(&file, "").unwrap();
        let mut scanner = ProjectScanner::new(ProjectLayout::new(&file, "Demo"), options("", "", ""));
        assert!(matches!(scanner.scan(), Err(GenError::Scan { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_is_scan_error_when_following() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/a.cpp"), "").unwrap();
        std::os::unix::fs::symlink(root, root.join("src/loop")).unwrap();

        let mut following = options("cpp", "", "");
        following.follow_symlinks = true;
        let mut scanner = ProjectScanner::new(ProjectLayout::new(root, "Demo"), following);
        assert!(matches!(scanner.scan(), Err(GenError::Scan { .. })));

        let mut scanner = ProjectScanner::new(ProjectLayout::new(root, "Demo"), options("cpp", "", ""));
        let files = scanner.scan().unwrap();
        assert_eq!(names(&files.compile), vec!["src\\a.cpp"]);
    }
}
