//! Stack of files currently being expanded.
//!
//! Replaces call-stack recursion: each nested include pushes a frame that
//! owns the open reader for that file, and the frame is dropped (closing
//! the file) when the file is exhausted or the expansion fails.

use crate::io::LineReader;
use std::path::{Path, PathBuf};

/// One file being expanded.
#[derive(Debug)]
pub struct Frame {
    /// Reader positioned after the last line processed.
    pub reader: LineReader,
    /// Canonical path used for cycle detection.
    canonical: PathBuf,
}

/// In-flight include chain, outermost file first.
#[derive(Debug, Default)]
pub struct IncludeStack {
    frames: Vec<Frame>,
}

impl IncludeStack {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Pushes a newly opened file.
    pub fn push(&mut self, reader: LineReader) {
        let canonical = canonical_path(reader.path());
        self.frames.push(Frame { reader, canonical });
    }

    /// Pops the innermost file, closing its handle.
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Innermost frame.
    pub fn top_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    /// Current nesting depth (1 while reading the root file).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if `path` refers to a file already on the stack.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        let canonical = canonical_path(path);
        self.frames.iter().any(|f| f.canonical == canonical)
    }

    /// Display paths of every file on the stack, outermost first.
    #[must_use]
    pub fn chain(&self) -> Vec<String> {
        self.frames
            .iter()
            .map(|f| f.reader.display_path().to_string())
            .collect()
    }
}

/// Canonicalizes `path`, falling back to the path as given.
fn canonical_path(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
