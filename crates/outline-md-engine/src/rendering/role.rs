use crate::models::RenderConfig;

/// How a node is rendered, decided from its depth alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// `depth <= heading_depth`. `level` is the number of `#`s.
    Heading { level: usize },
    /// `depth == heading_depth + 1`.
    Paragraph,
    /// `depth > heading_depth + 1`. `level` counts nesting below the paragraph.
    ListItem { level: usize },
}

impl NodeRole {
    pub fn classify(depth: usize, config: &RenderConfig) -> Self {
        match depth.checked_sub(config.heading_depth) {
            None | Some(0) => Self::Heading {
                level: config.heading_level(depth),
            },
            Some(1) => Self::Paragraph,
            Some(below) => Self::ListItem { level: below - 2 },
        }
    }
}
