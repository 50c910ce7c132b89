//! Ordered output buffer with blank-line normalization.

/// Append-only buffer of documentation lines.
///
/// An empty entry represents a paragraph break. The buffer never holds two
/// consecutive empty entries and never starts with one.
#[derive(Debug, Default)]
pub struct Collator {
    entries: Vec<String>,
}

impl Collator {
    /// Append documentation lines. Empty lines are routed through the
    /// idempotent blank insertion instead of being pushed verbatim.
    pub fn append<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) {
        for line in lines {
            if line.is_empty() {
                self.insert_blank();
            } else {
                self.entries.push(line.to_string());
            }
        }
    }

    /// Push a paragraph break, unless the buffer is empty or already ends
    /// with one.
    pub fn insert_blank(&mut self) {
        if self.entries.last().is_some_and(|last| !last.is_empty()) {
            self.entries.push(String::new());
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Join all entries with newline separators. Callers are expected to
    /// trim the result.
    pub fn finalize(&self) -> String {
        self.entries.join("\n")
    }
}
