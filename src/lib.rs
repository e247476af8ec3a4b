//! # incflat
//!
//! Flattens `#include` directives into a single output stream.
//!
//! Starting from one file, every line of the form `#include "name"` or
//! `#include <name>` is replaced in place by the recursively flattened
//! contents of the file it names. All other lines are copied verbatim.
//!
//! ## Resolution
//!
//! - **Local** (`"name"`): the including file's directory, then each search
//!   directory in order
//! - **Global** (`<name>`): each search directory in order
//!
//! The first failure (unopenable file, unresolved include, include cycle)
//! stops the whole expansion and is reported with the file and line of the
//! offending directive.
//!
//! ```no_run
//! use incflat::{SearchContext, expand_to_file};
//!
//! let search = SearchContext::new(["include1", "include2"]);
//! let stats = expand_to_file("a.cpp", "a.in", &search)?;
//! println!("{} files inlined", stats.files_expanded);
//! # Ok::<(), incflat::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod expand;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{Error, ExpandError, Result};

// Re-export core domain types
pub use core::{IncludeDirective, IncludeKind, LineKind, SearchContext, SourceLine, classify};

// Re-export expansion entry points
pub use expand::{ExpandStats, Expander, Resolver, expand_to_file, expand_to_sink};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
