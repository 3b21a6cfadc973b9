use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use ignore::overrides::{Override, OverrideBuilder};
use tracing::debug;

use super::error::ResolveError;

/// Globs a default configuration scans for utility-class usage.
pub const DEFAULT_CONTENT_GLOBS: &[&str] = &["./src/**/*.{rs,html,css}", "./dist/**/*.html"];

/// Which source files are considered for class-usage scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentOptions {
    /// Glob patterns matched against each searchable root. Order is
    /// irrelevant; overlapping patterns do not duplicate matches.
    pub globs: Vec<String>,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            globs: DEFAULT_CONTENT_GLOBS
                .iter()
                .map(|glob| (*glob).to_string())
                .collect(),
        }
    }
}

/// Expand the content globs against every searchable root.
///
/// The result is a deduplicated, deterministically ordered file set. An
/// empty result is valid: it means no utility classes will be generated.
pub fn resolve_content_files(
    content: &ContentOptions,
    roots: &[PathBuf],
) -> Result<BTreeSet<PathBuf>, ResolveError> {
    let mut files = BTreeSet::new();
    if content.globs.is_empty() {
        return Ok(files);
    }

    for root in roots {
        let overrides = compile_globs(&content.globs, root)?;
        let walk = WalkBuilder::new(root)
            .standard_filters(false)
            .overrides(overrides)
            .build();

        for entry in walk.flatten() {
            if entry.file_type().is_some_and(|kind| kind.is_file()) {
                files.insert(entry.into_path());
            }
        }
    }

    debug!(files = files.len(), roots = roots.len(), "expanded content globs");
    Ok(files)
}

/// Compile the glob list into a whitelist override set rooted at `root`.
///
/// Brace alternation expands to the union of its alternatives, so one
/// pattern may admit several extensions under a directory tree.
fn compile_globs(globs: &[String], root: &Path) -> Result<Override, ResolveError> {
    let mut builder = OverrideBuilder::new(root);
    for glob in globs {
        builder
            .add(glob.trim_start_matches("./"))
            .map_err(|source| ResolveError::MalformedGlob {
                pattern: glob.clone(),
                source,
            })?;
    }
    builder.build().map_err(|source| ResolveError::MalformedGlob {
        pattern: globs.join(" "),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"x").unwrap();
    }

    fn options(globs: &[&str]) -> ContentOptions {
        ContentOptions {
            globs: globs.iter().map(|glob| (*glob).to_string()).collect(),
        }
    }

    #[test]
    fn brace_alternation_matches_each_extension() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("src/a.html"));
        touch(&root.join("src/b.css"));
        touch(&root.join("src/c.txt"));

        let files =
            resolve_content_files(&options(&["./src/**/*.{html,css}"]), &[root.to_path_buf()])
                .unwrap();

        let expected: BTreeSet<PathBuf> =
            [root.join("src/a.html"), root.join("src/b.css")].into();
        assert_eq!(files, expected);
    }

    #[test]
    fn overlapping_globs_do_not_duplicate_matches() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("src/a.html"));

        let files = resolve_content_files(
            &options(&["src/**/*.html", "src/**/*.{html,css}"]),
            &[root.to_path_buf()],
        )
        .unwrap();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn resolution_is_deterministic_for_identical_state() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("src/a.html"));
        touch(&root.join("src/nested/b.html"));

        let content = options(&["src/**/*.html"]);
        let first = resolve_content_files(&content, &[root.to_path_buf()]).unwrap();
        let second = resolve_content_files(&content, &[root.to_path_buf()]).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn empty_glob_list_yields_an_empty_set() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("src/a.html"));

        let files = resolve_content_files(&options(&[]), &[dir.path().to_path_buf()]).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn unmatched_globs_are_valid_not_an_error() {
        let dir = tempdir().unwrap();

        let files =
            resolve_content_files(&options(&["src/**/*.html"]), &[dir.path().to_path_buf()])
                .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn malformed_globs_are_rejected() {
        let dir = tempdir().unwrap();

        let err =
            resolve_content_files(&options(&["src/**/*.{html"]), &[dir.path().to_path_buf()])
                .unwrap_err();
        assert!(matches!(err, ResolveError::MalformedGlob { .. }));
    }

    #[test]
    fn multiple_roots_union_their_matches() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        touch(&first.path().join("src/a.html"));
        touch(&second.path().join("src/b.html"));

        let files = resolve_content_files(
            &options(&["src/**/*.html"]),
            &[first.path().to_path_buf(), second.path().to_path_buf()],
        )
        .unwrap();

        assert_eq!(files.len(), 2);
    }
}
