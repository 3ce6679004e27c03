//! Path canonicalization for equality comparison.
//!
//! Canonical form is obtained by briefly entering the directory and reading
//! the absolute working directory back, which resolves symlinks, `..` and
//! relative spellings exactly the way the companion compiler does. The
//! working directory is process-global state, so mutation is serialized
//! behind a lock and restored by a guard on every exit path.

use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Serializes working-directory mutation across all canonicalizers.
static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Restores the saved working directory when dropped.
struct CwdGuard {
    saved: PathBuf,
}

impl CwdGuard {
    /// Capture the current working directory, then enter `dir`.
    fn enter(dir: &Path) -> io::Result<Self> {
        let saved = env::current_dir()?;
        env::set_current_dir(dir)?;
        Ok(Self { saved })
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        if let Err(err) = env::set_current_dir(&self.saved) {
            debug!(
                "could not restore working directory {}: {err}",
                self.saved.display()
            );
        }
    }
}

/// Canonicalizes directory paths, caching results.
///
/// Every file shares its parent directory with many siblings, so lookups
/// repeat constantly; the cache keeps them on the read path and only takes
/// the write lock for a first sighting (double-checked, as usual).
#[derive(Debug, Default)]
pub struct Canonicalizer {
    cache: RwLock<FxHashMap<PathBuf, PathBuf>>,
}

impl Canonicalizer {
    /// Create a canonicalizer with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical absolute form of a directory.
    ///
    /// A directory that cannot be entered keeps its spelling, so equality
    /// degrades to syntactic comparison instead of failing ingestion.
    pub fn canonical_dir(&self, dir: &Path) -> PathBuf {
        {
            let cache = self.cache.read();
            if let Some(hit) = cache.get(dir) {
                return hit.clone();
            }
        }

        let resolved = {
            let _cwd = CWD_LOCK.lock();
            resolve_via_cwd(dir)
        };

        let mut cache = self.cache.write();
        cache.entry(dir.to_path_buf()).or_insert(resolved).clone()
    }

    /// True iff both paths name the same directory entry once their parent
    /// directories are canonicalized.
    pub fn files_equivalent(&self, f1: &Path, f2: &Path) -> bool {
        match (f1.file_name(), f2.file_name()) {
            (Some(n1), Some(n2)) => {
                n1 == n2
                    && self.canonical_dir(parent_or_here(f1))
                        == self.canonical_dir(parent_or_here(f2))
            }
            _ => f1 == f2,
        }
    }
}

/// Resolve by entering the directory. The caller holds [`CWD_LOCK`].
fn resolve_via_cwd(dir: &Path) -> PathBuf {
    let _guard = match CwdGuard::enter(dir) {
        Ok(guard) => guard,
        Err(err) => {
            debug!("cannot canonicalize {}: {err}", dir.display());
            return dir.to_path_buf();
        }
    };
    match env::current_dir() {
        Ok(absolute) => absolute,
        Err(err) => {
            debug!("cannot canonicalize {}: {err}", dir.display());
            dir.to_path_buf()
        }
    }
}

/// Parent directory of a file path, with `.` standing in for an implicit one.
fn parent_or_here(file: &Path) -> &Path {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Syntactic location equality, used only for clash suppression.
///
/// An absent path stands for `.`, and an implicit relative form `foo/bar`
/// equals its explicit spelling `./foo/bar`. No filesystem access.
pub fn same_root_relative_path(a: Option<&Path>, b: Option<&Path>) -> bool {
    fn normalized(path: Option<&Path>) -> &Path {
        let path = path.unwrap_or_else(|| Path::new("."));
        path.strip_prefix(".").unwrap_or(path)
    }
    normalized(a) == normalized(b)
}
