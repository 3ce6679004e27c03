//! Ordered directory traversal.
//!
//! The companion compiler scans each search root depth first and hands a
//! directory's own files over only after every descendant has been handled,
//! with the most recently discovered sibling subtree first. Dependency
//! output must reproduce that order exactly, so instead of firing a callback
//! at listing time the traversal buffers everything and returns one ordered
//! sequence per root.

use std::path::{Path, PathBuf};

use super::list::{DirEntry, DirectoryLister};
use crate::base::LogicalPath;
use crate::diagnostics::WarningSink;

/// A regular file discovered under a root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkedFile {
    /// Directory the file lives in, spelled the way the root was given.
    pub dir: PathBuf,
    /// Logical prefix of that directory.
    pub prefix: LogicalPath,
    /// Plain filename, extension included.
    pub name: String,
}

/// Everything one traversal discovered.
#[derive(Clone, Debug, Default)]
pub struct Walked {
    /// Regular files in delivery order: descendants before a directory's
    /// own files, later-discovered sibling subtree first.
    pub files: Vec<WalkedFile>,
    /// Every directory that was successfully listed, with its logical
    /// prefix.
    pub dirs: Vec<(PathBuf, LogicalPath)>,
}

/// Walk `dir`, assigning it the logical prefix `prefix`.
///
/// An unlistable directory produces a single warning through `sink` and
/// contributes nothing; this is never an error. With `recursive` false only
/// the immediate regular files are visited and subdirectories are ignored
/// entirely.
pub fn walk(
    lister: &dyn DirectoryLister,
    sink: &mut dyn WarningSink,
    recursive: bool,
    dir: &Path,
    prefix: &LogicalPath,
) -> Walked {
    let mut out = Walked::default();
    out.files = collect(lister, sink, recursive, dir, prefix, &mut out.dirs);
    out
}

/// Delivery order for one subtree: each newly discovered sibling subtree is
/// placed ahead of the previously accumulated ones, and the directory's own
/// files close the sequence.
fn collect(
    lister: &dyn DirectoryLister,
    sink: &mut dyn WarningSink,
    recursive: bool,
    dir: &Path,
    prefix: &LogicalPath,
    visited: &mut Vec<(PathBuf, LogicalPath)>,
) -> Vec<WalkedFile> {
    let entries = match lister.entries(dir) {
        Ok(entries) => entries,
        Err(err) => {
            sink.warn(format!("cannot open {}: {err}", dir.display()));
            return Vec::new();
        }
    };
    visited.push((dir.to_path_buf(), prefix.clone()));

    let mut subtree: Vec<WalkedFile> = Vec::new();
    let mut own: Vec<WalkedFile> = Vec::new();
    for entry in entries {
        match entry {
            DirEntry::Subdir(name) => {
                if recursive {
                    let child_dir = dir.join(&name);
                    let child_prefix = prefix.child(&name);
                    let mut block =
                        collect(lister, sink, true, &child_dir, &child_prefix, visited);
                    block.append(&mut subtree);
                    subtree = block;
                }
            }
            DirEntry::File(name) => own.push(WalkedFile {
                dir: dir.to_path_buf(),
                prefix: prefix.clone(),
                name,
            }),
        }
    }
    subtree.extend(own);
    subtree
}
