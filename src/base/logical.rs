//! Dotted logical paths naming modules independent of filesystem location.

use smol_str::SmolStr;
use std::fmt;

/// A dotted logical name: an ordered sequence of identifier segments.
///
/// `LogicalPath` is the naming unit of the whole engine. A search root binds
/// a physical directory to a logical prefix, and every file discovered under
/// it gets the logical name `prefix + stem`. Segment order is significant
/// (outer namespace first), and the empty path is valid: it names the root
/// namespace.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogicalPath {
    segments: Vec<SmolStr>,
}

impl LogicalPath {
    /// The empty path (root namespace).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dot-separated name. The empty string is the empty path, and
    /// empty segments (as in `A..B`) are dropped.
    pub fn from_dotted(name: &str) -> Self {
        Self {
            segments: name
                .split('.')
                .filter(|segment| !segment.is_empty())
                .map(SmolStr::new)
                .collect(),
        }
    }

    /// Build a path from explicit segments. Unlike [`Self::from_dotted`],
    /// a segment may itself contain a dot (a filename like `notes.txt`).
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The segments, outermost first.
    pub fn segments(&self) -> &[SmolStr] {
        &self.segments
    }

    /// This path extended by one inner segment.
    pub fn child(&self, segment: &str) -> Self {
        let mut child = self.clone();
        child.push(segment);
        child
    }

    /// Append an inner segment.
    pub fn push(&mut self, segment: impl Into<SmolStr>) {
        self.segments.push(segment.into());
    }

    /// Insert an outer segment in front of the current ones.
    pub fn prepend(&mut self, segment: SmolStr) {
        self.segments.insert(0, segment);
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the root namespace.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<&[SmolStr]> for LogicalPath {
    fn from(segments: &[SmolStr]) -> Self {
        Self {
            segments: segments.to_vec(),
        }
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl fmt::Debug for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogicalPath({self})")
    }
}
