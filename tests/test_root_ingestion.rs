//! End-to-end root ingestion over real directory trees.
//!
//! These tests drive the public drivers with the OS-backed lister against
//! tempdir fixtures. Fixtures are shaped so every assertion is independent
//! of the order the OS happens to list entries in.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use vdep::base::LogicalPath;
use vdep::diagnostics::CollectedWarnings;
use vdep::fs::{OsLister, walk};
use vdep::index::{MatchResult, PathIndex};

fn lp(s: &str) -> LogicalPath {
    LogicalPath::from_dotted(s)
}

fn touch(path: &Path) {
    fs::write(path, b"").unwrap();
}

/// `root/A.v` and `root/Sub/B.v`.
fn source_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    touch(&tmp.path().join("A.v"));
    fs::create_dir(tmp.path().join("Sub")).unwrap();
    touch(&tmp.path().join("Sub").join("B.v"));
    tmp
}

#[test]
fn test_disk_walk_emits_deepest_first() {
    // A single-child chain has exactly one valid delivery order, whatever
    // the listing order: the deepest directory's files come first and the
    // root's own files come last.
    let tmp = TempDir::new().unwrap();
    touch(&tmp.path().join("c0.v"));
    fs::create_dir(tmp.path().join("d1")).unwrap();
    touch(&tmp.path().join("d1").join("c1.v"));
    fs::create_dir(tmp.path().join("d1").join("d2")).unwrap();
    touch(&tmp.path().join("d1").join("d2").join("c2.v"));

    let mut sink = CollectedWarnings::new();
    let walked = walk(&OsLister, &mut sink, true, tmp.path(), &lp("Lib"));

    let names: Vec<_> = walked.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["c2.v", "c1.v", "c0.v"]);
    assert_eq!(walked.dirs.len(), 3);
    assert!(sink.is_empty());
}

#[test]
fn test_import_tree_queries() {
    let tmp = source_tree();
    let mut index = PathIndex::new(false);
    index.add_import_tree(tmp.path(), &lp("Lib"));

    // Full names are exact from the root namespace.
    let a = index.find_source(None, &lp("Lib.A")).unwrap();
    assert_eq!(a, &MatchResult::Exact(vec![tmp.path().join("A")]));
    assert!(index.find_source(None, &lp("Lib.Sub.B")).unwrap().is_exact());

    // Shortened suffixes reach the same files as partial matches.
    let short = index.find_source(None, &lp("Sub.B")).unwrap();
    assert!(!short.is_exact());
    assert_eq!(short.single(), Some(tmp.path().join("Sub").join("B").as_path()));

    // And an explicit prefix makes the tail exact again.
    assert!(index.find_source(Some(&lp("Lib")), &lp("A")).unwrap().is_exact());
    assert!(
        index
            .find_source(Some(&lp("Lib.Sub")), &lp("B"))
            .unwrap()
            .is_exact()
    );

    assert!(index.find_source(None, &lp("Nope")).is_none());
}

#[test]
fn test_qualified_tree_queries() {
    let tmp = source_tree();
    let mut index = PathIndex::new(false);
    index.add_qualified_tree(tmp.path(), &lp("Lib"));

    assert!(index.find_source(None, &lp("Lib.A")).unwrap().is_exact());
    assert!(index.find_source(None, &lp("Lib.Sub.B")).unwrap().is_exact());

    // No shortcuts from the root namespace.
    assert!(index.find_source(None, &lp("A")).is_none());
    assert!(index.find_source(None, &lp("Sub.B")).is_none());

    // Deeper prefixes still accept their tails.
    assert!(index.find_source(Some(&lp("Lib")), &lp("Sub.B")).unwrap().is_exact());
}

#[test]
fn test_import_dir_is_shallow() {
    let tmp = source_tree();
    let mut index = PathIndex::new(false);
    index.add_import_dir(tmp.path(), &lp("Lib"));

    assert!(index.find_source(None, &lp("Lib.A")).unwrap().is_exact());
    assert!(index.find_source(None, &lp("A")).is_some());
    assert!(index.find_source(None, &lp("Lib.Sub.B")).is_none());
}

#[test]
fn test_partial_arbitration_across_roots() {
    let first = TempDir::new().unwrap();
    touch(&first.path().join("X.v"));
    let second = TempDir::new().unwrap();
    touch(&second.path().join("X.v"));

    let mut index = PathIndex::new(false);
    index.add_import_tree(first.path(), &lp("P1"));
    index.add_import_tree(second.path(), &lp("P2"));

    // Both roots only reach `X` through a truncated suffix; the root seen
    // last wins outright, it does not merge.
    let result = index.find_source(None, &lp("X")).unwrap();
    assert!(!result.is_exact());
    assert_eq!(result.files(), &[second.path().join("X")]);

    // An exact hit for the same key then discards the partial state...
    let third = TempDir::new().unwrap();
    touch(&third.path().join("X.v"));
    index.add_import_tree(third.path(), &lp(""));

    let result = index.find_source(None, &lp("X")).unwrap();
    assert_eq!(result, &MatchResult::Exact(vec![third.path().join("X")]));

    // ...and later partials cannot displace it.
    let fourth = TempDir::new().unwrap();
    touch(&fourth.path().join("X.v"));
    index.add_import_tree(fourth.path(), &lp("P4"));

    let result = index.find_source(None, &lp("X")).unwrap();
    assert_eq!(result, &MatchResult::Exact(vec![third.path().join("X")]));
}

#[test]
fn test_partials_within_one_root_accumulate() {
    let tmp = TempDir::new().unwrap();
    for sub in ["Sub1", "Sub2"] {
        fs::create_dir(tmp.path().join(sub)).unwrap();
        touch(&tmp.path().join(sub).join("X.v"));
    }

    let mut index = PathIndex::new(false);
    index.add_import_tree(tmp.path(), &lp("Lib"));

    let result = index.find_source(None, &lp("X")).unwrap();
    assert!(!result.is_exact());
    assert!(result.is_ambiguous());
    assert_eq!(result.files().len(), 2);
}

#[test]
fn test_exact_conflict_across_roots() {
    let first = TempDir::new().unwrap();
    touch(&first.path().join("A.v"));
    let second = TempDir::new().unwrap();
    touch(&second.path().join("A.v"));

    let mut index = PathIndex::new(false);
    index.add_import_tree(first.path(), &lp("Lib"));
    index.add_import_tree(second.path(), &lp("Lib"));

    let result = index.find_source(None, &lp("Lib.A")).unwrap();
    assert!(result.is_exact());
    assert!(result.is_ambiguous());
    // Newest first.
    assert_eq!(
        result.files(),
        &[second.path().join("A"), first.path().join("A")]
    );
}

#[test]
fn test_bootstrap_object_routing() {
    let tmp = TempDir::new().unwrap();
    touch(&tmp.path().join("M.vo"));

    let mut booted = PathIndex::new(true);
    booted.add_import_tree(tmp.path(), &lp("Lib"));
    assert!(booted.find_source(None, &lp("Lib.M")).is_none());
    assert!(booted.is_known_library(None, &lp("Lib.M")));

    let mut plain = PathIndex::new(false);
    plain.add_import_tree(tmp.path(), &lp("Lib"));
    assert!(plain.find_source(None, &lp("Lib.M")).is_some());
    assert!(!plain.is_known_library(None, &lp("Lib.M")));
}

#[test]
fn test_other_files_resolve_by_full_filename() {
    let tmp = TempDir::new().unwrap();
    touch(&tmp.path().join("notes.txt"));

    let mut index = PathIndex::new(false);
    index.add_import_tree(tmp.path(), &lp("Lib"));

    let name = LogicalPath::from_segments(["Lib", "notes.txt"]);
    let result = index.find_other(None, &name).unwrap();
    assert_eq!(
        result,
        &MatchResult::Exact(vec![tmp.path().join("notes.txt")])
    );
    assert!(index.find_source(None, &name).is_none());
}

#[test]
fn test_bundle_clash_resolves_to_first_location() {
    let first = TempDir::new().unwrap();
    touch(&first.path().join("util.mllib"));
    let second = TempDir::new().unwrap();
    touch(&second.path().join("util.mllib"));

    let mut sink = CollectedWarnings::new();
    let mut index = PathIndex::new(false);
    index.add_bundle_dir_with(&OsLister, &mut sink, first.path());
    index.add_bundle_dir_with(&OsLister, &mut sink, second.path());

    assert_eq!(sink.len(), 1);
    assert_eq!(index.find_mllib("util"), Some(first.path()));
    assert!(index.find_mlpack("util").is_none());
}

#[test]
fn test_logical_dir_is_canonical() {
    let tmp = source_tree();
    let mut index = PathIndex::new(false);
    index.add_import_tree(tmp.path(), &lp("Lib"));

    let sub = tmp.path().join("Sub");
    assert_eq!(index.logical_dir(&sub).unwrap().to_string(), "Lib.Sub");

    // Any spelling of the same directory finds the assignment.
    let detour = tmp.path().join("Sub").join("..").join("Sub");
    assert_eq!(index.logical_dir(&detour).unwrap().to_string(), "Lib.Sub");

    let other = TempDir::new().unwrap();
    assert!(index.logical_dir(other.path()).is_none());
}

#[test]
fn test_missing_root_is_a_warning_not_an_error() {
    let mut sink = CollectedWarnings::new();
    let mut index = PathIndex::new(false);
    index.add_import_tree_with(
        &OsLister,
        &mut sink,
        Path::new("/definitely/not/a/dir"),
        &lp("Lib"),
    );

    assert_eq!(sink.len(), 1);
    assert!(index.sources().is_empty());
    assert!(index.find_source(None, &lp("Lib.A")).is_none());
}
