//! Directory listing as an injected collaborator.

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Failure to list a directory's immediate entries.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("not a directory")]
    NotADirectory,
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// One immediate entry of a directory, name only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirEntry {
    Subdir(String),
    File(String),
}

/// Lists the immediate entries of a physical directory.
///
/// The traversal engine takes this as a collaborator so tests can drive it
/// with synthetic trees and a fixed listing order.
pub trait DirectoryLister {
    fn entries(&self, dir: &Path) -> Result<Vec<DirEntry>, ListError>;
}

/// The real filesystem, in the order the OS returns entries.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsLister;

impl DirectoryLister for OsLister {
    fn entries(&self, dir: &Path) -> Result<Vec<DirEntry>, ListError> {
        if !dir.is_dir() {
            return Err(ListError::NotADirectory);
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                debug!("skipping non-unicode entry in {}", dir.display());
                continue;
            };
            // Through-the-link metadata: a symlinked directory is still a
            // member of the search root.
            match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_dir() => entries.push(DirEntry::Subdir(name)),
                Ok(meta) if meta.is_file() => entries.push(DirEntry::File(name)),
                Ok(_) => {}
                Err(err) => debug!("skipping {}: {err}", entry.path().display()),
            }
        }
        Ok(entries)
    }
}

/// In-memory lister with a caller-chosen listing order per directory.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MapLister {
    dirs: rustc_hash::FxHashMap<std::path::PathBuf, Vec<DirEntry>>,
}

#[cfg(test)]
impl MapLister {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, dir: impl Into<std::path::PathBuf>, entries: Vec<DirEntry>) {
        self.dirs.insert(dir.into(), entries);
    }
}

#[cfg(test)]
impl DirectoryLister for MapLister {
    fn entries(&self, dir: &Path) -> Result<Vec<DirEntry>, ListError> {
        self.dirs.get(dir).cloned().ok_or(ListError::NotADirectory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_lister_classifies_entries() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("a.v"), b"").unwrap();

        let entries = OsLister.entries(tmp.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.contains(&DirEntry::Subdir("sub".to_owned())));
        assert!(entries.contains(&DirEntry::File("a.v".to_owned())));
    }

    #[test]
    fn test_os_lister_missing_dir() {
        let err = OsLister.entries(Path::new("/definitely/not/a/dir"));
        assert!(matches!(err, Err(ListError::NotADirectory)));
    }
}
