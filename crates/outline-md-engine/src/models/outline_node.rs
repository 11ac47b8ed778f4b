use serde::Serialize;

/// One bullet line from an outline export, together with the comment lines
/// attached to it.
///
/// Nodes form a flat sequence in source order. Nesting is carried only as
/// `depth`; there are no parent/child links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineNode {
    /// Line text with indentation and the `* ` marker removed.
    pub text: String,
    /// Indentation level in units of [`crate::parsing::INDENT_WIDTH`] spaces.
    pub depth: usize,
    /// Non-bullet lines following the bullet, with the comment prefix sliced off.
    pub comments: Vec<String>,
}

impl OutlineNode {
    pub fn new(text: impl Into<String>, depth: usize, comments: Vec<String>) -> Self {
        Self {
            text: text.into(),
            depth,
            comments,
        }
    }

    pub fn has_comments(&self) -> bool {
        !self.comments.is_empty()
    }
}
