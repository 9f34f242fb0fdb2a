//! Discovery of content modules in the content directory.

use std::path::Path;
use walkdir::WalkDir;

use crate::diagnostic::GeneratorError;
use crate::registry::{ContentRegistry, ContentUnit};

/// Lists the content modules in `dir`.
///
/// Only direct children are considered. Each regular file whose name ends in
/// `suffix` contributes one unit named after the file minus the suffix. The
/// result is sorted by identifier. An empty directory yields an empty registry.
///
/// Regular files without the suffix and entries that cannot be resolved, such
/// as dangling symlinks, are recorded as skipped rather than failing the run.
/// Only `dir` itself being missing, unreadable or not a directory is an error.
pub fn discover(dir: &Path, suffix: &str) -> Result<ContentRegistry, GeneratorError> {
    let metadata =
        std::fs::metadata(dir).map_err(|e| GeneratorError::unreadable(dir, e.to_string()))?;
    if !metadata.is_dir() {
        return Err(GeneratorError::unreadable(dir, "not a directory"));
    }

    let mut units = Vec::new();
    let mut skipped = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() > 0 => {
                let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                tracing::debug!(path = %path.display(), error = %e, "skipping unresolvable entry");
                skipped.push(path);
                continue;
            }
            Err(e) => return Err(GeneratorError::unreadable(dir, e.to_string())),
        };
        let path = entry.path();

        if !entry.file_type().is_file() {
            tracing::debug!(path = %path.display(), "skipping non-file entry");
            continue;
        }

        let file_name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| GeneratorError::InvalidFileName {
                path: path.to_path_buf(),
            })?;

        match file_name.strip_suffix(suffix) {
            Some(name) if !name.is_empty() => {
                tracing::debug!(identifier = name, path = %path.display(), "discovered content");
                units.push(ContentUnit::new(name, path));
            }
            _ => {
                tracing::debug!(path = %path.display(), suffix, "skipping file without suffix");
                skipped.push(path.to_path_buf());
            }
        }
    }

    Ok(ContentRegistry::from_units(units).with_skipped(skipped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), "module Stub exposing (..)\n").unwrap();
    }

    #[test]
    fn discovers_files_with_suffix() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Beta.elm");
        touch(dir.path(), "Alpha.elm");

        let registry = discover(dir.path(), ".elm").unwrap();
        let names: Vec<&str> = registry.identifiers().map(|i| i.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
        assert!(registry.units()[0].source_path.ends_with("Alpha.elm"));
    }

    #[test]
    fn skips_directories_and_other_suffixes() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Clock.elm");
        touch(dir.path(), "README.md");
        touch(dir.path(), ".elm");
        std::fs::create_dir(dir.path().join("Nested.elm")).unwrap();
        touch(&dir.path().join("Nested.elm"), "Inner.elm");

        let registry = discover(dir.path(), ".elm").unwrap();
        let names: Vec<&str> = registry.identifiers().map(|i| i.as_str()).collect();
        assert_eq!(names, vec!["Clock"]);
    }

    #[test]
    fn empty_directory_yields_empty_registry() {
        let dir = TempDir::new().unwrap();
        let registry = discover(dir.path(), ".elm").unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = discover(&missing, ".elm").unwrap_err();
        assert!(matches!(err, GeneratorError::ContentDirUnreadable { .. }));
    }

    #[test]
    fn file_is_not_a_content_directory() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Content");

        let err = discover(&dir.path().join("Content"), ".elm").unwrap_err();
        match err {
            GeneratorError::ContentDirUnreadable { message, .. } => {
                assert_eq!(message, "not a directory")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn records_files_without_suffix_as_skipped() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Clock.elm");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), ".elm");
        std::fs::create_dir(dir.path().join("assets")).unwrap();

        let registry = discover(dir.path(), ".elm").unwrap();
        let skipped: Vec<String> = registry
            .skipped()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(skipped, vec![".elm", "notes.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_skipped() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Clock.elm");
        std::os::unix::fs::symlink(dir.path().join("gone.elm"), dir.path().join("Broken.elm"))
            .unwrap();

        let registry = discover(dir.path(), ".elm").unwrap();
        let names: Vec<&str> = registry.identifiers().map(|i| i.as_str()).collect();
        assert_eq!(names, vec!["Clock"]);
        assert_eq!(registry.skipped().len(), 1);
        assert!(registry.skipped()[0].ends_with("Broken.elm"));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_file_is_discovered() {
        let dir = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        touch(elsewhere.path(), "Real.elm");
        std::os::unix::fs::symlink(elsewhere.path().join("Real.elm"), dir.path().join("Linked.elm"))
            .unwrap();

        let registry = discover(dir.path(), ".elm").unwrap();
        let names: Vec<&str> = registry.identifiers().map(|i| i.as_str()).collect();
        assert_eq!(names, vec!["Linked"]);
        assert!(registry.skipped().is_empty());
    }
}
