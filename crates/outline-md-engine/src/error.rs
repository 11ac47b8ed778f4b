/// Exit status reported for a successful conversion.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status reported for a failed conversion.
pub const EXIT_FAILURE: i32 = 1;

/// The only two ways a conversion can fail. Both are terminal: no partial
/// Markdown is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The input has no lines, or its first line is empty.
    #[error("Empty input")]
    EmptyInput,
    /// The first line does not start with the bullet marker.
    #[error("Invalid input")]
    InvalidFormat,
}

impl ConvertError {
    /// Numeric status suitable for a process exit code.
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}
