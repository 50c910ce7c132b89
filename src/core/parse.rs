//! Line classification state machine.
//!
//! Every line of a file is classified as documentation content, an import
//! directive, a reference directive, or ordinary code. Imports load their
//! target inline, before the scan continues; references are collected and
//! loaded after the current file's scan completes.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::utils::resolve_relative;

use super::{Session, loader::load};

// Comment syntax for marked lines. These patterns are a compatibility
// contract with existing documentation sources and must not drift.
static DOC_FILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"##@@\s+FeatureDoc\s+@@##").unwrap());
static DOC_LINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?://|##)@@\s?(.*)$").unwrap());
static IMPORT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\+import\s+(.+)\s*$").unwrap());
static REF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\+ref\s+(.+)\s*$").unwrap());

// List items continue across source gaps without a paragraph break.
static UNORDERED_LIST_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+").unwrap());
static ORDERED_LIST_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+").unwrap());

fn is_list_item(line: &str) -> bool {
    UNORDERED_LIST_PATTERN.is_match(line) || ORDERED_LIST_PATTERN.is_match(line)
}

/// Parse one file's text, appending its documentation to the session
/// collator and re-entering the loader for any directives.
///
/// `path` must be the absolute identity of the file the text came from;
/// directive targets resolve relative to its parent directory.
pub fn parse(session: &mut Session, path: &Path, content: &str) {
    let mut lines: Vec<String> = content.split('\n').map(String::from).collect();

    // A file-level marker folds every line into the documentation stream,
    // original comment syntax and blank lines included.
    if DOC_FILE_PATTERN.is_match(content) {
        for line in &mut lines {
            *line = format!("//@@ {}", line);
        }
    }

    let mut references: Vec<PathBuf> = Vec::new();
    let mut last_doc_line: Option<usize> = None;
    let mut was_list_item = false;

    for (index, line) in lines.iter().enumerate() {
        let Some(captures) = DOC_LINE_PATTERN.captures(line) else {
            continue;
        };
        let doc_line = captures.get(1).map_or("", |m| m.as_str());

        // Imports load inline, at the current output position.
        if let Some(import) = IMPORT_PATTERN.captures(doc_line) {
            load(session, &resolve_relative(path, &import[1]));
            continue;
        }

        // References wait until this file's scan is done.
        if let Some(reference) = REF_PATTERN.captures(doc_line) {
            references.push(resolve_relative(path, &reference[1]));
            continue;
        }

        let current_is_list_item = is_list_item(doc_line);

        // A gap of non-documentation source lines becomes a paragraph
        // break, unless it separates two list items.
        if let Some(last) = last_doc_line
            && last + 1 != index
            && !(current_is_list_item && was_list_item)
        {
            session.collator.insert_blank();
        }

        session.collator.append([doc_line]);

        last_doc_line = Some(index);
        was_list_item = current_is_list_item;
    }

    session.collator.insert_blank();

    for reference in references {
        load(session, &reference);
    }
}
