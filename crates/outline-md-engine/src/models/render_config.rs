/// Depth-to-Markdown mapping used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Markdown heading level for depth 0 (1 means `#`).
    pub start_heading: usize,
    /// Deepest depth still rendered as a heading.
    pub heading_depth: usize,
}

impl RenderConfig {
    pub const DEFAULT_START_HEADING: usize = 1;
    pub const DEFAULT_HEADING_DEPTH: usize = 1;

    pub fn new(start_heading: usize, heading_depth: usize) -> Self {
        Self {
            start_heading,
            heading_depth,
        }
    }

    /// Deepest ATX heading level; larger start levels are clamped to it.
    pub const MAX_START_HEADING: usize = 6;

    /// Heading level for a node at `depth`.
    ///
    /// The start level is clamped to `1..=MAX_START_HEADING`, so the level
    /// only grows with `depth`, which is bounded by the input line length.
    pub fn heading_level(&self, depth: usize) -> usize {
        self.start_heading
            .clamp(1, Self::MAX_START_HEADING)
            .saturating_add(depth)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_START_HEADING, Self::DEFAULT_HEADING_DEPTH)
    }
}
