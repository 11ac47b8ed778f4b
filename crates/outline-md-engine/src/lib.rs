//! # outline-md-engine
//!
//! Converts an indentation-based outline export (one `* ` bullet per line,
//! optionally followed by comment lines) into Markdown.
//!
//! ```text
//! raw lines → parse_outline → Vec<OutlineNode> → render → Markdown
//! ```
//!
//! ```
//! use outline_md_engine::{RenderConfig, convert_str};
//!
//! let md = convert_str("* Title\n    * Section\n        * Some text\n", &RenderConfig::default()).unwrap();
//! assert_eq!(md, "# Title\n\n## Section\n\nSome text\n");
//! ```

pub mod error;
pub mod models;
pub mod parsing;
pub mod rendering;

pub use error::{ConvertError, EXIT_FAILURE, EXIT_SUCCESS};
pub use models::{OutlineNode, RenderConfig};
pub use parsing::parse_outline;
pub use rendering::{NodeRole, Renderer, render};

/// Parses and renders a sequence of lines. No output is produced on error.
pub fn convert<I, S>(lines: I, config: &RenderConfig) -> Result<String, ConvertError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let nodes = parse_outline(lines)?;
    Ok(render(&nodes, config))
}

/// Like [`convert`], splitting `input` with [`str::lines`], so a trailing
/// newline adds no empty line.
pub fn convert_str(input: &str, config: &RenderConfig) -> Result<String, ConvertError> {
    convert(input.lines(), config)
}
