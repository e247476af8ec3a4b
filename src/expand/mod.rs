//! Include expansion for incflat.
//!
//! - **Resolver**: maps a directive to a file using the including file's
//!   directory (local includes only) and the search directories
//! - **Expander**: walks the include tree depth-first, writing text lines
//!   to a single borrowed sink
//! - **Stack**: the chain of files being expanded, used to reject cycles

pub mod expander;
pub mod resolver;
pub mod stack;

pub use expander::{ExpandStats, Expander};
pub use resolver::Resolver;
pub use stack::IncludeStack;

use crate::core::SearchContext;
use crate::error::Result;
use crate::io::create_output;
use std::io::Write;
use std::path::Path;

/// Expands `start_file` into a caller-owned sink.
///
/// The sink is only appended to, and flushed once on success. On error,
/// bytes already written stay in the sink and must not be treated as a
/// valid prefix of the flattened output.
///
/// # Errors
///
/// See [`Expander::expand`].
///
/// # Examples
///
/// ```no_run
/// use incflat::core::SearchContext;
/// use incflat::expand_to_sink;
///
/// let mut out = Vec::new();
/// expand_to_sink(&mut out, "main.c", &SearchContext::new(["include"])).unwrap();
/// ```
pub fn expand_to_sink<W, P>(sink: &mut W, start_file: P, search: &SearchContext) -> Result<ExpandStats>
where
    W: Write + ?Sized,
    P: AsRef<Path>,
{
    Expander::new(search).expand(sink, start_file.as_ref())
}

/// Expands `start_file` into `output_file`, creating or truncating it.
///
/// A partially written file is left in place on failure.
///
/// # Errors
///
/// Returns [`crate::ExpandError::CannotCreateOutput`] if the output cannot be
/// created, otherwise see [`Expander::expand`].
pub fn expand_to_file<P, Q>(start_file: P, output_file: Q, search: &SearchContext) -> Result<ExpandStats>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let output_ref = output_file.as_ref();
    let label = output_ref.to_string_lossy();
    let mut writer = create_output(output_ref)?;
    Expander::new(search).expand_labeled(&mut writer, start_file.as_ref(), &label)
}
