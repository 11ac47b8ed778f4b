//! # Markdown Rendering
//!
//! Renders parsed [`OutlineNode`]s as Markdown.
//!
//! ## Classification
//!
//! Each node gets a [`NodeRole`] from its depth: headings up to
//! `heading_depth`, paragraphs one level below, list items past that.
//!
//! ## Spacing
//!
//! Blocks are separated by a single blank line, written before a block
//! rather than after it. The one exception is list items: consecutive items
//! form one list, and an item right after a paragraph whose comments were
//! rendered as a bullet continues that bullet list.
//!
//! | previous                     | next item | next heading / paragraph |
//! |------------------------------|-----------|--------------------------|
//! | (start)                      | -         | -                        |
//! | heading                      | blank     | blank                    |
//! | paragraph                    | blank     | blank                    |
//! | paragraph + bullet comment   | -         | blank                    |
//! | list item                    | -         | blank                    |

pub mod comments;
pub mod role;

pub use comments::{CommentBlock, FENCE};
pub use role::NodeRole;

use crate::{
    models::{OutlineNode, RenderConfig},
    parsing::INDENT_WIDTH,
};

/// Extra indentation for code comments under a list item, aligning them with
/// the item text after `* `.
const LIST_CODE_EXTRA_INDENT: usize = 2;

/// What the renderer emitted last; decides the separator before the next block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrevBlock {
    #[default]
    None,
    Heading,
    Paragraph,
    /// A paragraph whose comments became a `* ` bullet line.
    ParagraphWithBulletComment,
    ListItem,
}

impl PrevBlock {
    /// Whether a blank line goes between `self` and a block with `next` role.
    pub fn needs_separator(self, next: NodeRole) -> bool {
        match (self, next) {
            (Self::None, _) => false,
            (_, NodeRole::Heading { .. } | NodeRole::Paragraph) => true,
            (Self::Heading | Self::Paragraph, NodeRole::ListItem { .. }) => true,
            (Self::ParagraphWithBulletComment | Self::ListItem, NodeRole::ListItem { .. }) => {
                false
            }
        }
    }
}

/// Indentation for list nesting `level`.
pub fn indent_string(level: usize) -> String {
    " ".repeat(INDENT_WIDTH * level)
}

/// Renders `nodes` as Markdown according to `config`.
pub fn render(nodes: &[OutlineNode], config: &RenderConfig) -> String {
    let mut renderer = Renderer::new(*config);
    for node in nodes {
        renderer.push(node);
    }
    renderer.finish()
}

/// Accumulates Markdown one node at a time.
#[derive(Debug, Default)]
pub struct Renderer {
    config: RenderConfig,
    out: String,
    prev: PrevBlock,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            out: String::new(),
            prev: PrevBlock::None,
        }
    }

    pub fn push(&mut self, node: &OutlineNode) {
        let role = NodeRole::classify(node.depth, &self.config);
        log::trace!("depth {} rendered as {:?}", node.depth, role);

        if self.prev.needs_separator(role) {
            self.out.push('\n');
        }

        self.prev = match role {
            NodeRole::Heading { level } => self.heading(node, level),
            NodeRole::Paragraph => self.paragraph(node),
            NodeRole::ListItem { level } => self.list_item(node, level),
        };
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn heading(&mut self, node: &OutlineNode, level: usize) -> PrevBlock {
        self.out.push_str(&"#".repeat(level));
        self.out.push(' ');
        self.out.push_str(&node.text);
        self.out.push('\n');

        let comments = CommentBlock::new(&node.comments);
        if !comments.is_empty() {
            self.out.push('\n');
            if comments.is_code() {
                comments.write_fence(&mut self.out, "");
            } else {
                comments.write_lines(&mut self.out);
            }
        }
        PrevBlock::Heading
    }

    fn paragraph(&mut self, node: &OutlineNode) -> PrevBlock {
        self.out.push_str(&node.text);
        self.out.push('\n');

        let comments = CommentBlock::new(&node.comments);
        if comments.is_empty() {
            PrevBlock::Paragraph
        } else if comments.is_code() {
            comments.write_fence(&mut self.out, "");
            PrevBlock::Paragraph
        } else {
            self.out.push_str("* ");
            self.out.push_str(&comments.joined());
            self.out.push('\n');
            PrevBlock::ParagraphWithBulletComment
        }
    }

    fn list_item(&mut self, node: &OutlineNode, level: usize) -> PrevBlock {
        let indent = indent_string(level);
        self.out.push_str(&indent);
        self.out.push_str("* ");
        self.out.push_str(&node.text);
        self.out.push('\n');

        let comments = CommentBlock::new(&node.comments);
        if comments.is_code() {
            let code_indent = format!("{indent}{}", " ".repeat(LIST_CODE_EXTRA_INDENT));
            comments.write_fence(&mut self.out, &code_indent);
        } else if !comments.is_empty() {
            self.out.push_str(&indent_string(level + 1));
            self.out.push_str("* ");
            self.out.push_str(&comments.joined());
            self.out.push('\n');
        }
        PrevBlock::ListItem
    }
}
