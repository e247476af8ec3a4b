//! Error types for incflat operations.
//!
//! This module provides the error hierarchy using `thiserror` for include
//! expansion, file I/O, and CLI commands. Every error is terminal: an
//! expansion that returns `Err` has stopped at the first failure.

use thiserror::Error;

/// Result type alias for incflat operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Include expansion errors.
    #[error("{0}")]
    Expand(#[from] ExpandError),

    /// I/O errors (reading sources, writing output).
    #[error("{0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Errors raised while flattening an include tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// The root file, or a resolved include, cannot be opened for reading.
    #[error("cannot open input file: {path}: {reason}")]
    CannotOpenInput {
        /// Path that failed to open.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// No candidate directory yields an openable file for the target.
    #[error("unknown include file {target} at file {file} at line {line}")]
    UnresolvedInclude {
        /// Target string between the delimiters.
        target: String,
        /// File containing the directive.
        file: String,
        /// 1-based line number of the directive.
        line: usize,
    },

    /// The resolved file is already being expanded further up the stack.
    #[error("cyclic include of {target} at file {file} at line {line} (chain: {})", .chain.join(" -> "))]
    CyclicInclude {
        /// Target string between the delimiters.
        target: String,
        /// File containing the directive.
        file: String,
        /// 1-based line number of the directive.
        line: usize,
        /// Files on the include stack, outermost first, ending with the re-entered file.
        chain: Vec<String>,
    },

    /// The output destination cannot be opened for writing.
    #[error("cannot create output file: {path}: {reason}")]
    CannotCreateOutput {
        /// Output path.
        path: String,
        /// Reason for failure.
        reason: String,
    },
}

impl ExpandError {
    /// Short machine-readable name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::CannotOpenInput { .. } => "cannot_open_input",
            Self::UnresolvedInclude { .. } => "unresolved_include",
            Self::CyclicInclude { .. } => "cyclic_include",
            Self::CannotCreateOutput { .. } => "cannot_create_output",
        }
    }

    /// Returns `(target, file, line)` for errors tied to a directive.
    #[must_use]
    pub fn location(&self) -> Option<(&str, &str, usize)> {
        match self {
            Self::UnresolvedInclude { target, file, line }
            | Self::CyclicInclude {
                target, file, line, ..
            } => Some((target, file, *line)),
            Self::CannotOpenInput { .. } | Self::CannotCreateOutput { .. } => None,
        }
    }
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Failed to read a source file after it was opened.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write to the output sink.
    #[error("failed to write output: {path}: {reason}")]
    WriteFailed {
        /// Output description (path or sink name).
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// The reader on the other end of the output pipe went away.
    #[error("broken pipe: {path}")]
    BrokenPipe {
        /// Output description (path or sink name).
        path: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

impl Error {
    /// Returns true if the output consumer closed the pipe early.
    #[must_use]
    pub const fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(IoError::BrokenPipe { .. }))
    }

    /// Short machine-readable name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Expand(e) => e.kind(),
            Self::Io(_) => "io",
            Self::Command(_) => "command",
        }
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::OutputFormat(err.to_string())
    }
}
