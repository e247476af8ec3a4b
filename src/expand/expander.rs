//! Depth-first include expansion.

use super::resolver::Resolver;
use super::stack::IncludeStack;
use crate::core::{LineKind, SearchContext};
use crate::error::{ExpandError, Result};
use crate::io::{LineReader, SinkWriter};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Counters describing a successful expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpandStats {
    /// Files opened and read, root included.
    pub files_expanded: usize,
    /// Include directives replaced by file contents.
    pub includes_resolved: usize,
    /// Lines written to the sink.
    pub lines_written: usize,
    /// Bytes written to the sink, newlines included.
    pub bytes_written: u64,
    /// Deepest nesting level reached (1 for a file without includes).
    pub max_depth: usize,
}

/// Flattens an include tree into a sink.
///
/// Text lines are written in depth-first document order, each followed by
/// a single `\n`. Directive lines produce no output of their own; they are
/// replaced in place by the expanded contents of the resolved file.
///
/// # Examples
///
/// ```no_run
/// use incflat::core::SearchContext;
/// use incflat::expand::Expander;
/// use std::path::Path;
///
/// let ctx = SearchContext::new(["include"]);
/// let mut out = Vec::new();
/// let stats = Expander::new(&ctx).expand(&mut out, Path::new("main.c")).unwrap();
/// println!("{} lines", stats.lines_written);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Expander<'a> {
    resolver: Resolver<'a>,
}

impl<'a> Expander<'a> {
    /// Creates an expander over the given search directories.
    #[must_use]
    pub const fn new(search: &'a SearchContext) -> Self {
        Self {
            resolver: Resolver::new(search),
        }
    }

    /// Expands `start_file` into `sink`.
    ///
    /// # Errors
    ///
    /// Stops at the first failure: the root or an included file cannot be
    /// opened, an include cannot be resolved, an include re-enters a file
    /// that is still being expanded, or reading/writing fails. Bytes
    /// already written are left in the sink.
    pub fn expand<W: Write + ?Sized>(&self, sink: &mut W, start_file: &Path) -> Result<ExpandStats> {
        self.expand_labeled(sink, start_file, "<output>")
    }

    /// Like [`Expander::expand`], naming the sink `label` in write errors.
    pub(crate) fn expand_labeled<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        start_file: &Path,
        label: &str,
    ) -> Result<ExpandStats> {
        let mut out = SinkWriter::new(sink, label);
        let mut stack = IncludeStack::new();
        let mut stats = ExpandStats::default();

        stack.push(LineReader::open(start_file)?);
        stats.files_expanded = 1;
        stats.max_depth = 1;

        while let Some(frame) = stack.top_mut() {
            let Some(line) = frame.reader.next_line()? else {
                stack.pop();
                continue;
            };

            let directive = match line.classify() {
                LineKind::Text => {
                    out.write_line(&line)?;
                    continue;
                }
                LineKind::Directive(directive) => directive,
            };

            let including = frame.reader.path().to_path_buf();
            let file = frame.reader.display_path().to_string();

            let Some(resolved) = self.resolver.resolve(&directive, &including) else {
                warn!(include = %directive.target, %file, line = line.number, "unresolved include");
                return Err(ExpandError::UnresolvedInclude {
                    target: directive.target,
                    file,
                    line: line.number,
                }
                .into());
            };

            if stack.contains(&resolved) {
                let mut chain = stack.chain();
                chain.push(resolved.to_string_lossy().to_string());
                warn!(include = %directive.target, %file, line = line.number, "cyclic include");
                return Err(ExpandError::CyclicInclude {
                    target: directive.target,
                    file,
                    line: line.number,
                    chain,
                }
                .into());
            }

            stack.push(LineReader::open(&resolved)?);
            stats.files_expanded += 1;
            stats.includes_resolved += 1;
            stats.max_depth = stats.max_depth.max(stack.depth());
            debug!(
                kind = %directive.kind,
                include = %directive.target,
                path = %resolved.display(),
                depth = stack.depth(),
                "expanding include"
            );
        }

        out.flush()?;
        stats.lines_written = out.lines();
        stats.bytes_written = out.bytes();
        info!(
            root = %start_file.display(),
            files = stats.files_expanded,
            lines = stats.lines_written,
            "expansion complete"
        );
        Ok(stats)
    }
}
