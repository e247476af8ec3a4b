//! Include target resolution.
//!
//! Local includes (`"name"`) are looked up beside the including file first
//! and then in each search directory. Global includes (`<name>`) only use
//! the search directories. The first candidate that opens as a regular
//! file wins.

use crate::core::{IncludeDirective, IncludeKind, SearchContext};
use crate::io::is_readable_file;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves include directives against a [`SearchContext`].
///
/// # Examples
///
/// ```no_run
/// use incflat::core::{IncludeDirective, SearchContext};
/// use incflat::expand::Resolver;
/// use std::path::Path;
///
/// let ctx = SearchContext::new(["include"]);
/// let resolver = Resolver::new(&ctx);
/// let found = resolver.resolve(&IncludeDirective::global("stdio.h"), Path::new("main.c"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    search: &'a SearchContext,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over the given search directories.
    #[must_use]
    pub const fn new(search: &'a SearchContext) -> Self {
        Self { search }
    }

    /// Lists candidate paths for `directive`, in probe order.
    ///
    /// `including_file` is the file whose line holds the directive; its
    /// parent directory is the first candidate for local includes.
    #[must_use]
    pub fn candidates(&self, directive: &IncludeDirective, including_file: &Path) -> Vec<PathBuf> {
        let target = directive.target.as_str();
        let mut candidates = Vec::with_capacity(self.search.len() + 1);
        if directive.kind == IncludeKind::Local {
            let parent = including_file.parent().unwrap_or_else(|| Path::new(""));
            candidates.push(parent.join(target));
        }
        candidates.extend(self.search.candidates(target));
        candidates
    }

    /// Resolves `directive` to the first candidate that opens as a file.
    ///
    /// A candidate that exists but is a directory is skipped and probing
    /// moves on to the next one. Returns `None` when every candidate fails.
    #[must_use]
    pub fn resolve(&self, directive: &IncludeDirective, including_file: &Path) -> Option<PathBuf> {
        let candidates = self.candidates(directive, including_file);
        debug!(
            kind = %directive.kind,
            include = %directive.target,
            candidates = candidates.len(),
            "probing include candidates"
        );
        candidates.into_iter().find(|candidate| {
            let found = is_readable_file(candidate);
            debug!(path = %candidate.display(), found, "probe");
            found
        })
    }
}
