//! Resolution tables and the ambiguity arbitration rules.

use indexmap::IndexMap;
use indexmap::map::Entry;
use std::path::{Path, PathBuf};

use crate::base::{LogicalPath, Root};
use crate::fs::Canonicalizer;

// ============================================================================
// MATCH RESULT
// ============================================================================

/// Classified outcome for one (prefix, suffix) key.
///
/// File lists hold the most recent insertion first. A file inserted again
/// (by canonical-path equality, whatever its spelling) is moved to the
/// front, never repeated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchResult {
    /// Files whose complete logical tail equals the queried suffix. More
    /// than one file means the same name was introduced from different
    /// physical files: a true conflict the caller has to report.
    Exact(Vec<PathBuf>),
    /// Files reachable only through a truncated suffix, all originating
    /// from the same root. A partial match from a different root replaces
    /// this one instead of joining it.
    Partial(Root, Vec<PathBuf>),
}

impl MatchResult {
    /// The matched files, most recent first.
    pub fn files(&self) -> &[PathBuf] {
        match self {
            MatchResult::Exact(files) => files,
            MatchResult::Partial(_, files) => files,
        }
    }

    /// Check if this is an exact match.
    pub fn is_exact(&self) -> bool {
        matches!(self, MatchResult::Exact(_))
    }

    /// Check if more than one file claims the key.
    pub fn is_ambiguous(&self) -> bool {
        self.files().len() > 1
    }

    /// The matched file if there is exactly one.
    pub fn single(&self) -> Option<&Path> {
        match self.files() {
            [only] => Some(only),
            _ => None,
        }
    }
}

// ============================================================================
// RESOLUTION TABLE
// ============================================================================

/// A map from (prefix, suffix) keys to classified matches.
///
/// The index keeps three independent instances of this (sources, compiled
/// libraries, everything else). Keys are content-addressed: the table never
/// depends on discovery order, only the file lists inside one entry do.
///
/// Arbitration on insert:
/// - an exact hit always dominates: it discards an existing partial result
///   and ignores later partial insertions for the same key;
/// - partial hits from the root already holding the key accumulate;
/// - a partial hit from a different root resets the entry to that root.
#[derive(Clone, Debug, Default)]
pub struct ResolutionTable {
    entries: IndexMap<(LogicalPath, LogicalPath), MatchResult>,
}

impl ResolutionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `file` under `(prefix, suffix)` for `root`.
    ///
    /// `full` marks the suffix as the complete tail of the file's logical
    /// name, which makes the insertion an exact match.
    pub fn insert(
        &mut self,
        canon: &Canonicalizer,
        root: &Root,
        prefix: LogicalPath,
        suffix: LogicalPath,
        full: bool,
        file: PathBuf,
    ) {
        match self.entries.entry((prefix, suffix)) {
            Entry::Vacant(slot) => {
                let result = if full {
                    MatchResult::Exact(vec![file])
                } else {
                    MatchResult::Partial(root.clone(), vec![file])
                };
                slot.insert(result);
            }
            Entry::Occupied(mut slot) => {
                let replacement = match slot.get_mut() {
                    MatchResult::Exact(files) => {
                        if full {
                            promote_front(canon, files, file);
                        }
                        // a truncated suffix never displaces an exact hit
                        None
                    }
                    MatchResult::Partial(seen_root, files) => {
                        if full {
                            Some(MatchResult::Exact(vec![file]))
                        } else if seen_root == root {
                            promote_front(canon, files, file);
                            None
                        } else {
                            Some(MatchResult::Partial(root.clone(), vec![file]))
                        }
                    }
                };
                if let Some(result) = replacement {
                    slot.insert(result);
                }
            }
        }
    }

    /// Look up a key; an absent prefix is the empty prefix.
    pub fn query(
        &self,
        prefix: Option<&LogicalPath>,
        suffix: &LogicalPath,
    ) -> Option<&MatchResult> {
        let key = (prefix.cloned().unwrap_or_default(), suffix.clone());
        self.entries.get(&key)
    }

    /// Iterate over all keys and their results.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&(LogicalPath, LogicalPath), &MatchResult)> {
        self.entries.iter()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Newest file first; a canonical-path duplicate is moved, not repeated.
fn promote_front(canon: &Canonicalizer, files: &mut Vec<PathBuf>, file: PathBuf) {
    if let Some(pos) = files
        .iter()
        .position(|seen| canon.files_equivalent(seen, &file))
    {
        let seen = files.remove(pos);
        files.insert(0, seen);
    } else {
        files.insert(0, file);
    }
}
