//! Search directory list shared by a whole expansion.

use std::path::PathBuf;

/// Ordered list of include directories.
///
/// Built once per top-level expansion and only ever borrowed afterwards, so
/// the order seen by every nested include is the order supplied here.
///
/// # Examples
///
/// ```
/// use incflat::core::SearchContext;
///
/// let ctx = SearchContext::new(["include1", "include2"]);
/// assert_eq!(ctx.len(), 2);
/// assert!(ctx.dirs()[0].ends_with("include1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchContext {
    dirs: Vec<PathBuf>,
}

impl SearchContext {
    /// Creates a search context from directories, keeping their order.
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an empty search context.
    #[must_use]
    pub const fn empty() -> Self {
        Self { dirs: Vec::new() }
    }

    /// Directories in probe order.
    #[must_use]
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Candidate paths for `target`, one per directory, in probe order.
    pub fn candidates<'a>(&'a self, target: &'a str) -> impl Iterator<Item = PathBuf> + 'a {
        self.dirs.iter().map(move |dir| dir.join(target))
    }

    /// Number of directories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    /// Returns true if no directories are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for SearchContext {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let ctx = SearchContext::empty();
        assert!(ctx.is_empty());
        assert_eq!(ctx.candidates("a.h").count(), 0);
        assert_eq!(ctx, SearchContext::default());
    }

    #[test]
    fn test_candidates_in_order() {
        let ctx = SearchContext::new(["inc1", "inc2"]);
        let candidates: Vec<PathBuf> = ctx.candidates("lib/x.h").collect();
        assert_eq!(
            candidates,
            vec![PathBuf::from("inc1/lib/x.h"), PathBuf::from("inc2/lib/x.h")]
        );
    }

    #[test]
    fn test_from_iterator() {
        let ctx: SearchContext = vec![PathBuf::from("a"), PathBuf::from("b")]
            .into_iter()
            .collect();
        assert_eq!(ctx.dirs(), [PathBuf::from("a"), PathBuf::from("b")]);
    }
}
