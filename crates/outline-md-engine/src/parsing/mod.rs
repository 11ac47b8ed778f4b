//! # Outline Parsing
//!
//! Turns the lines of an outline export into a flat list of [`OutlineNode`]s.
//!
//! Every bullet line (`^ *\* `) opens a node. The non-bullet lines right
//! after it, up to the next bullet or end of input, are its comments. Blank
//! lines do not end a comment run.
//!
//! Only the first line is validated; everything after it is taken
//! best-effort.

pub mod classify;
pub mod cursor;

pub use classify::{
    BULLET_MARKER, BulletLine, COMMENT_OFFSET, INDENT_WIDTH, depth_for, is_bullet_line,
    leading_spaces, strip_bullet_prefix, strip_comment_prefix,
};
pub use cursor::LineCursor;

use crate::{error::ConvertError, models::OutlineNode};

/// Parses outline lines into nodes in source order.
///
/// Fails with [`ConvertError::EmptyInput`] when there is no first line or it
/// is empty, and with [`ConvertError::InvalidFormat`] when it does not start
/// with [`BULLET_MARKER`].
pub fn parse_outline<I, S>(lines: I) -> Result<Vec<OutlineNode>, ConvertError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cursor = LineCursor::new(lines.into_iter());

    let first = cursor.next_line().ok_or(ConvertError::EmptyInput)?;
    let first = first.as_ref();
    if first.is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    if !first.starts_with(BULLET_MARKER) {
        return Err(ConvertError::InvalidFormat);
    }

    let comments = collect_comments(&mut cursor, leading_spaces(first) + COMMENT_OFFSET);
    let mut nodes = vec![OutlineNode::new(strip_bullet_prefix(first), 0, comments)];

    while let Some(line) = cursor.next_line() {
        let line = line.as_ref();
        match BulletLine::parse(line) {
            Some(bullet) => {
                let comments = collect_comments(&mut cursor, bullet.comment_prefix_width());
                nodes.push(OutlineNode::new(bullet.text, bullet.depth(), comments));
            }
            None => {
                log::trace!("skipping non-bullet line {}", cursor.line_number());
            }
        }
    }

    log::debug!("parsed {} outline nodes", nodes.len());
    Ok(nodes)
}

/// Consumes the run of non-bullet lines after a bullet.
fn collect_comments<I, S>(cursor: &mut LineCursor<I>, prefix_width: usize) -> Vec<String>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let mut comments = Vec::new();
    while let Some(line) = cursor.next_if(|l| !is_bullet_line(l)) {
        comments.push(strip_comment_prefix(line.as_ref(), prefix_width).to_string());
    }
    comments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(text: &str, depth: usize, comments: &[&str]) -> OutlineNode {
        OutlineNode::new(
            text,
            depth,
            comments.iter().map(|c| c.to_string()).collect(),
        )
    }

    #[test]
    fn parses_nested_outline() {
        let input = "* Heading1\n    * Heading2\n        * Paragraph1\n            * item1\n";
        let nodes = parse_outline(input.lines()).unwrap();
        assert_eq!(
            nodes,
            vec![
                node("Heading1", 0, &[]),
                node("Heading2", 1, &[]),
                node("Paragraph1", 2, &[]),
                node("item1", 3, &[]),
            ]
        );
    }

    #[test]
    fn attaches_comment_lines_to_preceding_bullet() {
        let input = "* Heading1\n  ```some\n  code1\n  ```\n    * Next\n      note";
        let nodes = parse_outline(input.lines()).unwrap();
        assert_eq!(
            nodes,
            vec![
                node("Heading1", 0, &["```some", "code1", "```"]),
                node("Next", 1, &["note"]),
            ]
        );
    }

    #[test]
    fn comment_prefix_is_sliced_not_trimmed() {
        let input = "    * Item\n          indented more\n  x";
        // First line must start with the marker, so prepend a root.
        let input = format!("* Root\n{input}");
        let nodes = parse_outline(input.lines()).unwrap();
        assert_eq!(nodes[1].comments, vec!["    indented more", ""]);
    }

    #[test]
    fn blank_lines_become_empty_comments() {
        let input = ["* A", "  first", "", "  second", "* B"];
        let nodes = parse_outline(input).unwrap();
        assert_eq!(
            nodes,
            vec![node("A", 0, &["first", "", "second"]), node("B", 0, &[])]
        );
    }

    #[test]
    fn first_line_needs_only_the_marker_character() {
        let nodes = parse_outline(["*Loose", "  note"]).unwrap();
        assert_eq!(nodes, vec![node("*Loose", 0, &["note"])]);
    }

    #[test]
    fn first_node_is_always_depth_zero() {
        let nodes = parse_outline(["* Top", "        * Deep"]).unwrap();
        assert_eq!(nodes[0].depth, 0);
        assert_eq!(nodes[1].depth, 2);
    }

    #[test]
    fn lines_that_look_like_bullets_without_space_are_comments() {
        let nodes = parse_outline(["* A", "  *not a bullet"]).unwrap();
        assert_eq!(nodes, vec![node("A", 0, &["*not a bullet"])]);
    }

    #[test]
    fn empty_sequence_is_empty_input() {
        let lines: Vec<String> = vec![];
        assert_eq!(parse_outline(lines), Err(ConvertError::EmptyInput));
    }

    #[test]
    fn empty_first_line_is_empty_input() {
        assert_eq!(
            parse_outline(["", "* Heading"]),
            Err(ConvertError::EmptyInput)
        );
    }

    #[test]
    fn non_bullet_first_line_is_invalid() {
        assert_eq!(
            parse_outline(["Heading1"]),
            Err(ConvertError::InvalidFormat)
        );
        assert_eq!(
            parse_outline(["  * Indented first"]),
            Err(ConvertError::InvalidFormat)
        );
    }

    #[test]
    fn reparsing_is_deterministic() {
        let input = "* A\n    * B\n      c\n        * D\n";
        let first = parse_outline(input.lines()).unwrap();
        let second = parse_outline(input.lines()).unwrap();
        assert_eq!(first, second);
    }
}
