use std::sync::OnceLock;

use regex::Regex;

/// The single marker that starts an outline entry.
pub const BULLET_MARKER: char = '*';

/// Number of leading spaces per depth level.
pub const INDENT_WIDTH: usize = 4;

/// Extra columns between a bullet's indentation and its comment text (`* `).
pub const COMMENT_OFFSET: usize = 2;

fn bullet_regex() -> &'static Regex {
    static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
    BULLET_REGEX.get_or_init(|| Regex::new(r"^( *)\* ").expect("Invalid bullet regex"))
}

/// Counts space characters before the first non-space character.
///
/// Only `' '` counts; tabs are content.
pub fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}

/// Depth level for a line with the given indentation.
pub fn depth_for(line: &str) -> usize {
    leading_spaces(line) / INDENT_WIDTH
}

/// Whether `line` is an outline entry: optional spaces, `*`, then a space.
pub fn is_bullet_line(line: &str) -> bool {
    bullet_regex().is_match(line)
}

/// Removes leading spaces and, if present, one `* ` marker.
///
/// Used for the first line, which only has to start with the marker
/// character and may lack the following space.
pub fn strip_bullet_prefix(line: &str) -> &str {
    let rest = line.trim_start_matches(' ');
    rest.strip_prefix("* ").unwrap_or(rest)
}

/// Drops the first `width` characters of a comment line.
///
/// Slices rather than trims, so extra indentation beyond `width` is kept.
/// Lines shorter than `width` become empty.
pub fn strip_comment_prefix(line: &str, width: usize) -> &str {
    match line.char_indices().nth(width) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}

/// A line already known to match the bullet pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletLine<'a> {
    /// Leading space count.
    pub indent: usize,
    /// Text after the `* ` marker.
    pub text: &'a str,
}

impl<'a> BulletLine<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = bullet_regex().captures(line)?;
        let whole = caps.get(0)?;
        let indent = caps.get(1).map_or(0, |m| m.len());
        Some(Self {
            indent,
            text: &line[whole.end()..],
        })
    }

    pub fn depth(&self) -> usize {
        self.indent / INDENT_WIDTH
    }

    /// Number of characters to slice off each attached comment line.
    pub fn comment_prefix_width(&self) -> usize {
        self.indent + COMMENT_OFFSET
    }
}
