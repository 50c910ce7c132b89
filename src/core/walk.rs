//! Deterministic directory traversal.
//!
//! Each directory is listed one level at a time: files first (primary
//! `index`/`main` files ahead of the rest, both groups sorted), then
//! subdirectories in sorted order. The resulting depth-first,
//! primary-files-first order defines the default concatenation order of
//! the collated document.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::reporter;

use super::{Session, loader::load};

/// Compiled ignore patterns, matched against walk-root-relative paths.
///
/// The traversal treats these as opaque predicates; where the patterns came
/// from (config, gitignore-style files, built-ins) is the config layer's
/// business.
pub struct IgnoreRules {
    root: PathBuf,
    patterns: Vec<Pattern>,
}

impl IgnoreRules {
    /// Compile pattern strings, warning about and skipping invalid ones.
    pub fn compile(root: &Path, patterns: &[String]) -> Self {
        let mut compiled = Vec::new();
        for pattern in patterns {
            match Pattern::new(pattern) {
                Ok(rule) => compiled.push(rule),
                Err(err) => {
                    reporter::warn(format!("Invalid ignore pattern '{}': {}", pattern, err));
                }
            }
        }

        Self {
            root: root.to_path_buf(),
            patterns: compiled,
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let candidate = path.strip_prefix(&self.root).unwrap_or(path);
        let candidate = candidate.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&candidate))
    }
}

/// Walk `base` depth-first, feeding every non-ignored file to the loader.
///
/// Listing failures are reported and the affected entries skipped; the walk
/// itself never aborts the run.
pub fn walk(session: &mut Session, base: &Path, rules: &IgnoreRules) {
    let mut files = Vec::new();
    let mut dirs = Vec::new();

    for entry in WalkDir::new(base).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                reporter::warn(format!("Cannot access path: {}", err));
                continue;
            }
        };

        if rules.is_ignored(entry.path()) {
            continue;
        }

        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        } else if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    let (mut primary, mut rest): (Vec<_>, Vec<_>) =
        files.into_iter().partition(|path| is_primary_file(path));
    primary.sort();
    rest.sort();

    for file in primary.into_iter().chain(rest) {
        load(session, &file);
    }

    dirs.sort();
    for dir in dirs {
        if is_hidden_dir(&dir) {
            continue;
        }
        walk(session, &dir, rules);
    }
}

/// Primary files (`index.*`, `main.*`, any or no extension) sort ahead of
/// everything else in their directory.
fn is_primary_file(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| {
            stem.eq_ignore_ascii_case("index") || stem.eq_ignore_ascii_case("main")
        })
}

fn is_hidden_dir(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}
