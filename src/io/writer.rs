//! Output sink handling.
//!
//! The expander never owns its sink; it writes through a [`SinkWriter`]
//! that borrows the caller's writer and counts what went through it.

use crate::core::SourceLine;
use crate::error::{ExpandError, IoError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Append-only view over a borrowed output sink.
pub struct SinkWriter<'a, W: Write + ?Sized> {
    sink: &'a mut W,
    label: &'a str,
    lines: usize,
    bytes: u64,
}

impl<'a, W: Write + ?Sized> SinkWriter<'a, W> {
    /// Wraps `sink`; `label` names it in write errors.
    pub const fn new(sink: &'a mut W, label: &'a str) -> Self {
        Self {
            sink,
            label,
            lines: 0,
            bytes: 0,
        }
    }

    /// Writes a line followed by exactly one `\n`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFailed`] if the sink rejects the write.
    pub fn write_line(&mut self, line: &SourceLine) -> Result<()> {
        self.sink
            .write_all(&line.bytes)
            .and_then(|()| self.sink.write_all(b"\n"))
            .map_err(|e| self.write_failed(&e))?;
        self.lines += 1;
        self.bytes += line.output_len() as u64;
        Ok(())
    }

    /// Flushes the sink.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFailed`] if flushing fails.
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush().map_err(|e| self.write_failed(&e))
    }

    /// Lines written so far.
    #[must_use]
    pub const fn lines(&self) -> usize {
        self.lines
    }

    /// Bytes written so far, newlines included.
    #[must_use]
    pub const fn bytes(&self) -> u64 {
        self.bytes
    }

    fn write_failed(&self, err: &std::io::Error) -> crate::Error {
        let path = self.label.to_string();
        if err.kind() == std::io::ErrorKind::BrokenPipe {
            return IoError::BrokenPipe { path }.into();
        }
        IoError::WriteFailed {
            path,
            reason: err.to_string(),
        }
        .into()
    }
}

/// Creates (or truncates) an output file for writing.
///
/// Parent directories are not created.
///
/// # Errors
///
/// Returns [`ExpandError::CannotCreateOutput`] if the file cannot be created.
pub fn create_output<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|e| ExpandError::CannotCreateOutput {
        path: path_ref.to_string_lossy().to_string(),
        reason: e.to_string(),
    })?;
    Ok(BufWriter::new(file))
}

/// Removes a partially written output file.
///
/// A missing file is not an error.
///
/// # Errors
///
/// Returns [`IoError::WriteFailed`] if the file exists but cannot be removed.
pub fn discard_output<P: AsRef<Path>>(path: P) -> Result<()> {
    let path_ref = path.as_ref();
    match std::fs::remove_file(path_ref) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(IoError::WriteFailed {
            path: path_ref.to_string_lossy().to_string(),
            reason: format!("cannot remove partial output: {e}"),
        }
        .into()),
    }
}
