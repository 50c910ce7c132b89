//! Core extraction engine.
//!
//! The engine is a recursive, depth-first, fully sequential composition
//! over the file set: the walk feeds files to the loader, the loader gates
//! them through the binary classifier and hands text to the parser, and the
//! parser writes to the collator while re-entering the loader for `+import`
//! (immediately) and `+ref` (after the current file finishes) directives.

mod classify;
mod collate;
mod loader;
mod parse;
mod walk;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{BASE_IGNORE_PATTERNS, Config, ignore_file_patterns};

pub use classify::is_text_file;
pub use collate::Collator;
pub use loader::load;
pub use parse::parse;
pub use walk::{IgnoreRules, walk};

/// Per-run state threaded by `&mut` through the walk/load/parse recursion.
///
/// Owning the processed-file registry and the output buffer here (instead
/// of process-wide statics) lets independent runs coexist, which the unit
/// tests rely on.
pub struct Session {
    /// Absolute paths already handed to the loader. Entries are inserted
    /// before their content is parsed, so import/ref cycles resolve by
    /// treating the second encounter as a no-op.
    pub(crate) processed: HashSet<PathBuf>,
    pub(crate) collator: Collator,
    pub(crate) verbose: bool,
}

impl Session {
    pub fn new(verbose: bool) -> Self {
        Self {
            processed: HashSet::new(),
            collator: Collator::default(),
            verbose,
        }
    }

    /// Number of files the loader has accepted so far.
    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    pub fn into_output(self) -> String {
        self.collator.finalize()
    }
}

/// Run a full extraction over `start_dir` and return the collated text.
///
/// The caller is expected to trim the result. A nonexistent start directory
/// is a fatal error; per-file problems inside the walk are reported to
/// stderr and skipped.
pub fn extract(start_dir: &Path, config: &Config, verbose: bool) -> Result<String> {
    let base = start_dir
        .canonicalize()
        .with_context(|| format!("Cannot access start directory: {}", start_dir.display()))?;

    let rules = assemble_ignore_rules(&base, config)?;
    let mut session = Session::new(verbose);
    walk(&mut session, &base, &rules);

    Ok(session.into_output())
}

/// Combine the built-in ignore set, config-supplied patterns, and patterns
/// sourced from gitignore-style files into one rule set rooted at `base`.
///
/// An unreadable ignore file is fatal (config-level failure); an invalid
/// pattern inside one is warned about and skipped.
fn assemble_ignore_rules(base: &Path, config: &Config) -> Result<IgnoreRules> {
    let mut patterns: Vec<String> = BASE_IGNORE_PATTERNS
        .iter()
        .map(|p| p.to_string())
        .collect();
    patterns.extend(config.ignores.iter().cloned());
    for name in &config.ignore_files {
        patterns.extend(ignore_file_patterns(&base.join(name))?);
    }

    Ok(IgnoreRules::compile(base, &patterns))
}
