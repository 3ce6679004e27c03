//! The resolver context: tables, registries, root drivers and queries.

use std::path::Path;

use super::decompose::decompose;
use super::registry::{BundleRegistry, DirRegistry};
use super::table::{MatchResult, ResolutionTable};
use crate::base::{FileKind, LogicalPath, Root};
use crate::diagnostics::{LogSink, WarningSink};
use crate::fs::{Canonicalizer, DirectoryLister, OsLister, WalkedFile, walk};

// ============================================================================
// PATH INDEX
// ============================================================================

/// All load-path state for one resolution run.
///
/// Created empty, populated by the `add_*` drivers during the root phase
/// (one call per search-path argument, in argument order), then queried
/// read-only for the rest of the run. Nothing is process-global: several
/// independent indexes coexist, which the tests rely on.
///
/// Each driver wraps the same traversal with a different pair of choices:
/// whether subdirectories are entered, and whether files may later be
/// referenced by shortened suffixes of their logical name or only by the
/// complete dotted path.
#[derive(Debug, Default)]
pub struct PathIndex {
    /// `.v` files, plus compiled objects outside bootstrap mode.
    sources: ResolutionTable,
    /// Compiled objects (`.vo`, `.vio`, `.vos`) in bootstrap mode.
    libraries: ResolutionTable,
    /// Every other extension, named by its full filename.
    others: ResolutionTable,
    /// `.mllib` bundles by basename.
    mllibs: BundleRegistry,
    /// `.mlpack` bundles by basename.
    mlpacks: BundleRegistry,
    /// Logical prefix assigned to every visited directory.
    dirs: DirRegistry,
    canon: Canonicalizer,
    boot: bool,
}

impl PathIndex {
    /// Create an empty index. `boot` is the caller-configured bootstrap
    /// flag: with it set, compiled objects feed the library table instead
    /// of the source table.
    pub fn new(boot: bool) -> Self {
        Self {
            boot,
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------
    // Root ingestion
    // ------------------------------------------------------------------

    /// Non-recursive root whose files may be referenced by shortened
    /// suffixes of their logical name. Subdirectories are ignored.
    pub fn add_import_dir(&mut self, dir: &Path, prefix: &LogicalPath) {
        self.add_import_dir_with(&OsLister, &mut LogSink, dir, prefix);
    }

    /// [`Self::add_import_dir`] with explicit collaborators.
    pub fn add_import_dir_with(
        &mut self,
        lister: &dyn DirectoryLister,
        sink: &mut dyn WarningSink,
        dir: &Path,
        prefix: &LogicalPath,
    ) {
        self.ingest(lister, sink, dir, prefix, false, true);
    }

    /// Recursive root whose files resolve only under their complete dotted
    /// path from the root namespace (no suffix shortcut there; deeper
    /// prefixes still accept their own tails).
    pub fn add_qualified_tree(&mut self, dir: &Path, prefix: &LogicalPath) {
        self.add_qualified_tree_with(&OsLister, &mut LogSink, dir, prefix);
    }

    /// [`Self::add_qualified_tree`] with explicit collaborators.
    pub fn add_qualified_tree_with(
        &mut self,
        lister: &dyn DirectoryLister,
        sink: &mut dyn WarningSink,
        dir: &Path,
        prefix: &LogicalPath,
    ) {
        self.ingest(lister, sink, dir, prefix, true, false);
    }

    /// Recursive root whose files may be referenced by shortened suffixes,
    /// subject to the arbitration rules of [`ResolutionTable`].
    pub fn add_import_tree(&mut self, dir: &Path, prefix: &LogicalPath) {
        self.add_import_tree_with(&OsLister, &mut LogSink, dir, prefix);
    }

    /// [`Self::add_import_tree`] with explicit collaborators.
    pub fn add_import_tree_with(
        &mut self,
        lister: &dyn DirectoryLister,
        sink: &mut dyn WarningSink,
        dir: &Path,
        prefix: &LogicalPath,
    ) {
        self.ingest(lister, sink, dir, prefix, true, true);
    }

    /// Collect `.mllib`/`.mlpack` bundles from the immediate directory,
    /// the one the caller also puts on its native-code search path. Other
    /// extensions are ignored here.
    pub fn add_bundle_dir(&mut self, dir: &Path) {
        self.add_bundle_dir_with(&OsLister, &mut LogSink, dir);
    }

    /// [`Self::add_bundle_dir`] with explicit collaborators.
    pub fn add_bundle_dir_with(
        &mut self,
        lister: &dyn DirectoryLister,
        sink: &mut dyn WarningSink,
        dir: &Path,
    ) {
        let walked = walk(lister, sink, false, dir, &LogicalPath::new());
        for (visited, logical) in walked.dirs {
            let canonical = self.canon.canonical_dir(&visited);
            self.dirs.register(canonical, logical);
        }
        for file in walked.files {
            if let Some(base) = file.name.strip_suffix(".mllib") {
                self.mllibs.register(sink, base, Some(&file.dir), ".mllib");
            } else if let Some(base) = file.name.strip_suffix(".mlpack") {
                self.mlpacks.register(sink, base, Some(&file.dir), ".mlpack");
            }
        }
    }

    /// Shared driver body: walk, register directories, classify files.
    fn ingest(
        &mut self,
        lister: &dyn DirectoryLister,
        sink: &mut dyn WarningSink,
        dir: &Path,
        prefix: &LogicalPath,
        recursive: bool,
        multi: bool,
    ) {
        let root = Root::new(self.canon.canonical_dir(dir), prefix.clone());
        let walked = walk(lister, sink, recursive, dir, prefix);
        for (visited, logical) in walked.dirs {
            let canonical = self.canon.canonical_dir(&visited);
            self.dirs.register(canonical, logical);
        }
        for file in walked.files {
            self.record(&root, file, multi);
        }
    }

    // ------------------------------------------------------------------
    // Classification
    // ------------------------------------------------------------------

    /// Route one discovered file into the table its extension selects and
    /// record every (prefix, suffix) split of its logical name there.
    fn record(&mut self, root: &Root, file: WalkedFile, multi: bool) {
        let (kind, stem) = FileKind::classify(&file.name);
        let table = match kind {
            FileKind::Source => &mut self.sources,
            FileKind::Vo | FileKind::Vio | FileKind::Vos => {
                if self.boot {
                    &mut self.libraries
                } else {
                    &mut self.sources
                }
            }
            FileKind::Other => &mut self.others,
        };
        // Sources and objects are keyed by their stem and stored without
        // the extension; the caller re-appends whichever one it needs.
        let name = file.prefix.child(stem);
        let path = file.dir.join(stem);
        for part in decompose(multi, &name) {
            for suffix in part.suffixes {
                table.insert(
                    &self.canon,
                    root,
                    part.from.clone(),
                    suffix.tail,
                    suffix.full,
                    path.clone(),
                );
            }
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Resolve a suffix against the source table.
    pub fn find_source(
        &self,
        prefix: Option<&LogicalPath>,
        suffix: &LogicalPath,
    ) -> Option<&MatchResult> {
        self.sources.query(prefix, suffix)
    }

    /// Resolve a suffix against the catch-all table of other files.
    pub fn find_other(
        &self,
        prefix: Option<&LogicalPath>,
        suffix: &LogicalPath,
    ) -> Option<&MatchResult> {
        self.others.query(prefix, suffix)
    }

    /// True iff the suffix is known to the compiled-library table.
    pub fn is_known_library(
        &self,
        prefix: Option<&LogicalPath>,
        suffix: &LogicalPath,
    ) -> bool {
        self.libraries.query(prefix, suffix).is_some()
    }

    /// The logical prefix previously assigned to a physical directory.
    /// A directory never visited yields `None`.
    pub fn logical_dir(&self, dir: &Path) -> Option<&LogicalPath> {
        let canonical = self.canon.canonical_dir(dir);
        self.dirs.logical_path(&canonical)
    }

    /// The directory holding the named `.mllib` bundle, if one was seen.
    pub fn find_mllib(&self, basename: &str) -> Option<&Path> {
        self.mllibs.find(basename)
    }

    /// The directory holding the named `.mlpack` bundle, if one was seen.
    pub fn find_mlpack(&self, basename: &str) -> Option<&Path> {
        self.mlpacks.find(basename)
    }

    /// The source table.
    pub fn sources(&self) -> &ResolutionTable {
        &self.sources
    }

    /// The compiled-library table.
    pub fn libraries(&self) -> &ResolutionTable {
        &self.libraries
    }

    /// The table of other files.
    pub fn others(&self) -> &ResolutionTable {
        &self.others
    }

    /// The directory registry.
    pub fn dirs(&self) -> &DirRegistry {
        &self.dirs
    }
}
