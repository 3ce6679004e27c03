//! Decomposition of a dotted logical name into (prefix, suffix) keys.
//!
//! A file whose logical name is `A.B.C` can be referred to in several ways,
//! depending on which part of the name the reference treats as a namespace
//! prefix and which as the suffix being asked for. Decomposition produces
//! one entry per split point, each carrying the set of suffixes that should
//! reach the file from that prefix:
//!
//! ```text
//! decompose(true, A.B.C) =
//!   prefix ""     suffixes  A.B.C (full)   B.C (partial)   C (partial)
//!   prefix "A"    suffixes  B.C   (full)   C   (partial)
//!   prefix "A.B"  suffixes  C     (full)
//! ```
//!
//! A suffix is `full` when `prefix + suffix` is the complete name; those
//! become exact matches in the tables. Strictly shorter suffixes are
//! partial: usable shortcuts, but only while nothing fuller claims the same
//! key. With `multi` false the shortcuts under the outermost (empty) prefix
//! are suppressed, so from the root namespace only the complete dotted name
//! resolves the file; deeper prefixes keep their suffix sets either way.

use smol_str::SmolStr;

use crate::base::LogicalPath;

/// One suffix a decomposed name can be reached by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suffix {
    /// True when this suffix is the complete tail from its prefix.
    pub full: bool,
    /// The suffix itself.
    pub tail: LogicalPath,
}

/// All suffixes reaching a file from one prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decomposition {
    /// The namespace prefix this entry is keyed under.
    pub from: LogicalPath,
    /// Suffixes in decreasing length; only the first is full.
    pub suffixes: Vec<Suffix>,
}

/// Decompose `name` into every prefix/suffix split, outermost prefix first.
///
/// The empty name has no splits and decomposes to nothing.
pub fn decompose(multi: bool, name: &LogicalPath) -> Vec<Decomposition> {
    split(multi, name.segments())
}

fn split(multi: bool, name: &[SmolStr]) -> Vec<Decomposition> {
    let Some((head, rest)) = name.split_first() else {
        return Vec::new();
    };
    let outer = Decomposition {
        from: LogicalPath::new(),
        suffixes: if multi {
            suffixes_of(name, true)
        } else {
            vec![Suffix {
                full: true,
                tail: LogicalPath::from(name),
            }]
        },
    };
    let mut out = vec![outer];
    for mut deeper in split(true, rest) {
        deeper.from.prepend(head.clone());
        out.push(deeper);
    }
    out
}

/// Tail suffixes of `seq` in decreasing length; only the first carries the
/// caller's `full` flag, the rest are partial.
fn suffixes_of(seq: &[SmolStr], full: bool) -> Vec<Suffix> {
    let Some((_, tail)) = seq.split_first() else {
        return Vec::new();
    };
    let mut out = vec![Suffix {
        full,
        tail: LogicalPath::from(seq),
    }];
    if !tail.is_empty() {
        out.extend(suffixes_of(tail, false));
    }
    out
}
