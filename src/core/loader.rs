//! File loading and the processed-file registry.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::reporter;

use super::{Session, classify::is_text_file, parse::parse};

/// Load one file, classify it, and hand its text to the parser.
///
/// Synchronous with respect to its own recursive expansion: all downstream
/// imports and references complete before this returns. Each path is
/// accepted at most once per session; a second request for the same
/// identity is a silent no-op, which is also what breaks import/ref cycles.
/// Per-file errors are reported here and never escape to the traversal.
pub fn load(session: &mut Session, path: &Path) {
    if !path.is_absolute() {
        reporter::error(format!("File path must be absolute: {}", path.display()));
        return;
    }

    // Register before reading so a cycle hits the guard, not the disk.
    if !session.processed.insert(path.to_path_buf()) {
        return;
    }

    if let Err(err) = load_file(session, path) {
        reporter::error(format!(
            "Error processing file {}: {:#}",
            path.display(),
            err
        ));
    }
}

fn load_file(session: &mut Session, path: &Path) -> Result<()> {
    let raw = fs::read(path).context("Failed to read file")?;

    if !is_text_file(path, &raw) {
        if session.verbose {
            reporter::note(format!("Skipping binary file: {}", path.display()));
        }
        return Ok(());
    }

    let text = String::from_utf8(raw).context("File is not valid UTF-8")?;
    parse(session, path, &text);
    Ok(())
}
