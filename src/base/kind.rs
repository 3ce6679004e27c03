//! Filename classification by suffix.

/// What a discovered filename is, judged purely by its suffix.
///
/// `Vo`, `Vio` and `Vos` are the three compiled-object variants a build can
/// leave next to (or instead of) a source file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// A `.v` source file.
    Source,
    /// A fully compiled `.vo` object.
    Vo,
    /// A quick-compiled `.vio` object.
    Vio,
    /// A statement-interface `.vos` object.
    Vos,
    /// Any other extension.
    Other,
}

impl FileKind {
    /// Classify a filename and return the stem its logical name is built
    /// from. For [`FileKind::Other`] the stem is the full filename.
    pub fn classify(filename: &str) -> (FileKind, &str) {
        if let Some(stem) = filename.strip_suffix(".v") {
            (FileKind::Source, stem)
        } else if let Some(stem) = filename.strip_suffix(".vo") {
            (FileKind::Vo, stem)
        } else if let Some(stem) = filename.strip_suffix(".vio") {
            (FileKind::Vio, stem)
        } else if let Some(stem) = filename.strip_suffix(".vos") {
            (FileKind::Vos, stem)
        } else {
            (FileKind::Other, filename)
        }
    }

    /// True for the compiled-object variants.
    pub fn is_object(self) -> bool {
        matches!(self, FileKind::Vo | FileKind::Vio | FileKind::Vos)
    }

    /// The suffix this kind strips, if any.
    pub fn extension(self) -> Option<&'static str> {
        match self {
            FileKind::Source => Some(".v"),
            FileKind::Vo => Some(".vo"),
            FileKind::Vio => Some(".vio"),
            FileKind::Vos => Some(".vos"),
            FileKind::Other => None,
        }
    }
}
