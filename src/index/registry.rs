//! Simple registries: directory prefixes and auxiliary bundle files.

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use crate::base::LogicalPath;
use crate::diagnostics::WarningSink;
use crate::fs::same_root_relative_path;

// ============================================================================
// DIRECTORY REGISTRY
// ============================================================================

/// The logical prefix assigned to each visited physical directory.
///
/// Keys are canonical directories. The traversal writes an entry for every
/// directory it lists; the driver layer reads it back to tell whether a
/// directory already has a logical name (an unregistered one is simply
/// absent, never an error).
#[derive(Clone, Debug, Default)]
pub struct DirRegistry {
    entries: IndexMap<PathBuf, LogicalPath>,
}

impl DirRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the logical prefix of a canonical directory. A rewrite keeps
    /// the latest prefix.
    pub fn register(&mut self, dir: PathBuf, prefix: LogicalPath) {
        self.entries.insert(dir, prefix);
    }

    /// The prefix assigned to a canonical directory, if any.
    pub fn logical_path(&self, dir: &Path) -> Option<&LogicalPath> {
        self.entries.get(dir)
    }

    /// Iterate over all registered directories.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &LogicalPath)> {
        self.entries.iter().map(|(dir, prefix)| (dir.as_path(), prefix))
    }

    /// Number of registered directories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// BUNDLE REGISTRY
// ============================================================================

/// Where a bundle file was first seen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BundleLocation {
    /// Directory holding the file; absent stands for the current directory.
    pub dir: Option<PathBuf>,
    /// The suffix the file was registered with, dot included.
    pub suffix: String,
}

/// Basename-keyed locations for one auxiliary bundle kind.
///
/// The first registration of a basename wins. A later registration with the
/// same basename and suffix from a location that is not path-equivalent is
/// diagnosed and discarded; a re-registration from an equivalent location is
/// a no-op.
#[derive(Clone, Debug, Default)]
pub struct BundleRegistry {
    entries: IndexMap<String, BundleLocation>,
}

impl BundleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `basename` as living in `dir`.
    pub fn register(
        &mut self,
        sink: &mut dyn WarningSink,
        basename: &str,
        dir: Option<&Path>,
        suffix: &str,
    ) {
        if let Some(seen) = self.entries.get(basename) {
            if seen.suffix == suffix
                && !same_root_relative_path(seen.dir.as_deref(), dir)
            {
                sink.warn(format!(
                    "{basename}{suffix} found twice, in {} and {}; keeping the first",
                    location(seen.dir.as_deref()),
                    location(dir),
                ));
            }
            return;
        }
        self.entries.insert(
            basename.to_owned(),
            BundleLocation {
                dir: dir.map(Path::to_path_buf),
                suffix: suffix.to_owned(),
            },
        );
    }

    /// The directory the basename resolves to, if registered with one.
    pub fn find(&self, basename: &str) -> Option<&Path> {
        self.entries.get(basename).and_then(|loc| loc.dir.as_deref())
    }

    /// Number of registered basenames.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn location(dir: Option<&Path>) -> String {
    match dir {
        Some(dir) => dir.display().to_string(),
        None => ".".to_owned(),
    }
}
