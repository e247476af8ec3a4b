//! Source lines as read from input files.

use super::directive::{LineKind, classify};

/// A single line of a source file.
///
/// Holds the raw bytes with the terminator removed, so files that are not
/// valid UTF-8 still pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number within its own file.
    pub number: usize,
    /// Line content without `\n` (or `\r\n`).
    pub bytes: Vec<u8>,
}

impl SourceLine {
    /// Creates a line from raw bytes as returned by `read_until(b'\n')`.
    ///
    /// Strips one trailing `\n` and one `\r` immediately before it.
    #[must_use]
    pub fn from_raw(number: usize, mut bytes: Vec<u8>) -> Self {
        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }
        Self { number, bytes }
    }

    /// Returns the line as UTF-8, if it is valid.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    /// Classifies the line. Non-UTF-8 lines are always text.
    #[must_use]
    pub fn classify(&self) -> LineKind {
        self.as_str().map_or(LineKind::Text, classify)
    }

    /// Number of bytes this line contributes to the output (content plus newline).
    #[must_use]
    pub fn output_len(&self) -> usize {
        self.bytes.len() + 1
    }
}
