//! I/O utilities for incflat.
//!
//! Line-oriented reading of source files and the append-only output sink.

pub mod reader;
pub mod writer;

pub use reader::{LineReader, is_readable_file};
pub use writer::{SinkWriter, create_output, discard_output};
