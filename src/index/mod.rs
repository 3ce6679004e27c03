//! The resolution index.
//!
//! [`PathIndex`] owns every table and registry for one resolution run:
//! ingestion drivers feed it during the root phase, queries read it back
//! afterwards. The pieces underneath are usable on their own: logical-name
//! decomposition ([`decompose`]), the ambiguity tables
//! ([`ResolutionTable`]), and the simpler registries.

mod decompose;
mod path_index;
mod registry;
mod table;

pub use decompose::{Decomposition, Suffix, decompose};
pub use path_index::PathIndex;
pub use registry::{BundleLocation, BundleRegistry, DirRegistry};
pub use table::{MatchResult, ResolutionTable};
