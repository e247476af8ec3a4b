//! Line-oriented source file reading.
//!
//! Each open [`LineReader`] owns exactly one file handle; dropping the
//! reader closes it.

use crate::core::SourceLine;
use crate::error::{ExpandError, IoError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Buffered line reader over a single source file.
///
/// Lines are returned as raw bytes with their 1-based number, so non-UTF-8
/// content passes through untouched.
///
/// # Examples
///
/// ```no_run
/// use incflat::io::LineReader;
///
/// let mut reader = LineReader::open("main.c").unwrap();
/// while let Some(line) = reader.next_line().unwrap() {
///     println!("{}: {}", line.number, String::from_utf8_lossy(&line.bytes));
/// }
/// ```
#[derive(Debug)]
pub struct LineReader {
    /// Buffered file handle.
    reader: BufReader<File>,
    /// Path as given by the caller.
    path: PathBuf,
    /// Path rendered for error messages.
    display: String,
    /// Number of lines returned so far.
    line: usize,
}

impl LineReader {
    /// Opens a file for line reading.
    ///
    /// # Errors
    ///
    /// Returns [`ExpandError::CannotOpenInput`] if the file cannot be opened
    /// or is a directory.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let display = path_ref.to_string_lossy().to_string();

        let file = open_regular(path_ref).map_err(|reason| ExpandError::CannotOpenInput {
            path: display.clone(),
            reason,
        })?;

        Ok(Self {
            reader: BufReader::new(file),
            path: path_ref.to_path_buf(),
            display,
            line: 0,
        })
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file path as displayed in diagnostics.
    #[must_use]
    pub fn display_path(&self) -> &str {
        &self.display
    }

    /// Reads the next line, or `None` at end of file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::ReadFailed`] if the underlying read fails.
    pub fn next_line(&mut self) -> Result<Option<SourceLine>> {
        let mut buf = Vec::new();
        let n = self
            .reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| IoError::ReadFailed {
                path: self.display.clone(),
                reason: e.to_string(),
            })?;
        if n == 0 {
            return Ok(None);
        }
        self.line += 1;
        Ok(Some(SourceLine::from_raw(self.line, buf)))
    }
}

/// Returns true if `path` opens for reading as a regular file.
///
/// The probe handle is closed before returning.
#[must_use]
pub fn is_readable_file(path: &Path) -> bool {
    open_regular(path).is_ok()
}

/// Opens `path` and rejects anything that is not a regular file.
fn open_regular(path: &Path) -> std::result::Result<File, String> {
    let file = File::open(path).map_err(|e| e.to_string())?;
    let metadata = file.metadata().map_err(|e| e.to_string())?;
    if metadata.is_dir() {
        return Err("is a directory".to_string());
    }
    Ok(file)
}
