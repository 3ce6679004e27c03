//! Physical filesystem layer.
//!
//! Everything that touches the disk lives here: path canonicalization
//! ([`Canonicalizer`]), the injected directory-listing collaborator
//! ([`DirectoryLister`] / [`OsLister`]), and the ordered traversal
//! ([`walk`]).

mod list;
mod normalize;
mod walk;

pub use list::{DirEntry, DirectoryLister, ListError, OsLister};
pub use normalize::{Canonicalizer, same_root_relative_path};
pub use walk::{Walked, WalkedFile, walk};

#[cfg(test)]
pub(crate) use list::MapLister;
