/// Opening and closing fence for code comments.
pub const FENCE: &str = "```";

const BACKTICK: char = '`';

/// A node's comment lines, rendered either as prose or as a fenced code block.
#[derive(Debug, Clone, Copy)]
pub struct CommentBlock<'a> {
    lines: &'a [String],
}

impl<'a> CommentBlock<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// More than one line, the first led by backticks and the last ended by
    /// backticks. A single backtick-wrapped line stays prose.
    pub fn is_code(&self) -> bool {
        match self.lines {
            [first, .., last] => first.starts_with(BACKTICK) && last.ends_with(BACKTICK),
            _ => false,
        }
    }

    /// All lines joined by single spaces.
    pub fn joined(&self) -> String {
        self.lines.join(" ")
    }

    /// Writes each line on its own line.
    pub fn write_lines(&self, out: &mut String) {
        for line in self.lines {
            out.push_str(line);
            out.push('\n');
        }
    }

    /// Writes the block as a fenced code block, every line prefixed by `indent`.
    ///
    /// The backtick delimiters on the first and last lines are removed; those
    /// lines are dropped when nothing else is left on them.
    pub fn write_fence(&self, out: &mut String, indent: &str) {
        let [first, interior @ .., last] = self.lines else {
            return;
        };

        push_line(out, indent, FENCE);
        let opening = first.trim_start_matches(BACKTICK);
        if !opening.is_empty() {
            push_line(out, indent, opening);
        }
        for line in interior {
            push_line(out, indent, line);
        }
        let closing = last.trim_end_matches(BACKTICK);
        if !closing.is_empty() {
            push_line(out, indent, closing);
        }
        push_line(out, indent, FENCE);
    }
}

fn push_line(out: &mut String, indent: &str, line: &str) {
    out.push_str(indent);
    out.push_str(line);
    out.push('\n');
}
