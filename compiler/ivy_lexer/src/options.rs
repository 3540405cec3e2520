//! Scanner configuration.

/// What the scanner does with `//` line comments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CommentMode {
    /// Emit `CommentLine` tokens (formatters and doc tools need them).
    #[default]
    Retain,
    /// Skip comments like whitespace.
    Discard,
}

/// Options controlling a [`Scanner`](crate::Scanner).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub comments: CommentMode,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn discard_comments(mut self) -> Self {
        self.comments = CommentMode::Discard;
        self
    }
}
