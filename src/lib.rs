//! Docweave - inline documentation collator
//!
//! Docweave is a CLI tool and library for extracting specially marked
//! comment lines (`//@@` or `##@@`) from a tree of source files and
//! collating them into a single ordered document. Files can compose their
//! documentation across the tree with `+import` (inline inclusion) and
//! `+ref` (deferred inclusion) directives.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and dispatch)
//! - `config`: Configuration file loading and ignore-pattern sourcing
//! - `core`: Core extraction engine (traversal, loading, parsing, collation)
//! - `reporter`: Diagnostic output helpers (stderr only)
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod reporter;
pub mod utils;
