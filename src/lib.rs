//! # vdep-base
//!
//! Core load-path engine for `.v` module dependency analysis.
//!
//! Given a set of search roots, each binding a physical directory tree to a
//! dotted logical prefix, this crate enumerates every reachable file in a
//! fixed order, records every (prefix, suffix) split of each file's logical
//! name, and answers resolution queries with a classification of how
//! unambiguous the match is.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! index   → resolution tables, registries, root drivers and queries
//!   ↓
//! fs      → path canonicalization + ordered directory traversal
//!   ↓
//! base    → primitives (LogicalPath, FileKind, Root)
//! ```
//!
//! `diagnostics` sits beside `fs` and `index`: both report non-fatal
//! conditions through a [`diagnostics::WarningSink`].
//!
//! The surrounding dependency tool (argument parsing, `Require`/`Import`
//! statement extraction, rule emission) consumes this crate through
//! [`index::PathIndex`].

/// Foundation types: LogicalPath, FileKind, Root
pub mod base;

/// Warning sinks for non-fatal ingestion diagnostics
pub mod diagnostics;

/// Filesystem layer: canonicalization, listing, ordered traversal
pub mod fs;

/// Resolution index: decomposition, tables, registries, drivers
pub mod index;

// Re-export commonly needed items
pub use base::{FileKind, LogicalPath, Root};
pub use diagnostics::{CollectedWarnings, LogSink, WarningSink};
pub use fs::{Canonicalizer, DirectoryLister, OsLister};
pub use index::{MatchResult, PathIndex, ResolutionTable};
