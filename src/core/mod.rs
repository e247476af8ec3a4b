//! Core domain types for incflat.
//!
//! Include directives, source lines and the search directory list. These
//! are pure data types with no file access of their own.

pub mod directive;
pub mod line;
pub mod search;

pub use directive::{IncludeDirective, IncludeKind, LineKind, classify};
pub use line::SourceLine;
pub use search::SearchContext;
