//! Include directive classification.
//!
//! Recognizes the two single-line include forms:
//!
//! - `#include "name"` (local)
//! - `#include <name>` (global)
//!
//! ASCII whitespace is allowed around the whole line and between `#`,
//! `include` and the opening delimiter. Anything else on the line turns it back into
//! plain text. The grammar is fixed, so this is a small hand-written scanner
//! rather than a pattern-matching engine.

use std::fmt;

/// Include delimiter style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncludeKind {
    /// `#include "name"`: resolved beside the including file first.
    Local,
    /// `#include <name>`: resolved against the search directories only.
    Global,
}

impl IncludeKind {
    /// Opening and closing delimiters for this kind.
    #[must_use]
    pub const fn delimiters(self) -> (char, char) {
        match self {
            Self::Local => ('"', '"'),
            Self::Global => ('<', '>'),
        }
    }
}

impl fmt::Display for IncludeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Global => f.write_str("global"),
        }
    }
}

/// A parsed include directive.
///
/// # Examples
///
/// ```
/// use incflat::core::{IncludeDirective, IncludeKind};
///
/// let directive = IncludeDirective::parse("  #  include <stdio.h>  ").unwrap();
/// assert_eq!(directive.kind, IncludeKind::Global);
/// assert_eq!(directive.target, "stdio.h");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    /// Delimiter style.
    pub kind: IncludeKind,
    /// Text between the delimiters.
    pub target: String,
}

impl IncludeDirective {
    /// Creates a local (`"..."`) directive.
    #[must_use]
    pub fn local(target: impl Into<String>) -> Self {
        Self {
            kind: IncludeKind::Local,
            target: target.into(),
        }
    }

    /// Creates a global (`<...>`) directive.
    #[must_use]
    pub fn global(target: impl Into<String>) -> Self {
        Self {
            kind: IncludeKind::Global,
            target: target.into(),
        }
    }

    /// Parses a line as an include directive.
    ///
    /// Local form is tried first, then global. Returns `None` for lines
    /// matching neither.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let rest = after_keyword(line)?;
        [IncludeKind::Local, IncludeKind::Global]
            .into_iter()
            .find_map(|kind| delimited_target(rest, kind).map(|target| Self::new(kind, target)))
    }

    fn new(kind: IncludeKind, target: &str) -> Self {
        Self {
            kind,
            target: target.to_string(),
        }
    }
}

impl fmt::Display for IncludeDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = self.kind.delimiters();
        write!(f, "#include {open}{}{close}", self.target)
    }
}

/// Classification of a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// An include directive; the line itself is consumed.
    Directive(IncludeDirective),
    /// Anything else; copied to the output unchanged.
    Text,
}

/// Classifies a line as an include directive or plain text.
///
/// Only ASCII whitespace separates the tokens; a no-break space or other
/// Unicode space makes the line plain text.
///
/// # Examples
///
/// ```
/// use incflat::core::{LineKind, classify};
///
/// assert_eq!(classify("int x = 1;"), LineKind::Text);
/// assert!(matches!(classify("#include \"a.h\""), LineKind::Directive(_)));
/// ```
#[must_use]
pub fn classify(line: &str) -> LineKind {
    IncludeDirective::parse(line).map_or(LineKind::Text, LineKind::Directive)
}

/// Consumes `ws # ws include ws` and returns what follows.
fn after_keyword(line: &str) -> Option<&str> {
    let rest = skip_space(line).strip_prefix('#')?;
    let rest = skip_space(rest).strip_prefix("include")?;
    Some(skip_space(rest))
}

fn skip_space(s: &str) -> &str {
    s.trim_start_matches(|c: char| c.is_ascii_whitespace())
}

/// Matches `open target close ws*` against the whole remainder.
fn delimited_target(rest: &str, kind: IncludeKind) -> Option<&str> {
    let (open, close) = kind.delimiters();
    let body = rest.strip_prefix(open)?;
    let end = body.find(close)?;
    let (target, tail) = body.split_at(end);
    tail[close.len_utf8()..]
        .trim_end_matches(|c: char| c.is_ascii_whitespace())
        .is_empty()
        .then_some(target)
}
