//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::output::{OutputFormat, format_check_report, format_expand_report};
use crate::cli::parser::{Cli, Commands};
use crate::core::SearchContext;
use crate::error::{CommandError, ExpandError, Result};
use crate::expand::{expand_to_file, expand_to_sink};
use crate::io::discard_output;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Executes the CLI command, streaming flattened text to stdout.
///
/// # Returns
///
/// The report to print on success (empty when the flattened text itself
/// went to stdout).
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    execute_with(cli, &mut lock)
}

/// Executes the CLI command with `stdout` as the destination for
/// flattened text.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute_with<W: Write + ?Sized>(cli: &Cli, stdout: &mut W) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Expand {
            input,
            output,
            keep_partial,
            search,
        } => {
            let search = search.search_context();
            match output {
                Some(path) => cmd_expand_file(input, path, &search, *keep_partial, format),
                None => cmd_expand_stdout(input, &search, stdout),
            }
        }
        Commands::Check { input, search } => cmd_check(input, &search.search_context(), format),
    }
}

// ==================== Command Implementations ====================

fn cmd_expand_stdout<W: Write + ?Sized>(
    input: &Path,
    search: &SearchContext,
    stdout: &mut W,
) -> Result<String> {
    let stats = expand_to_sink(stdout, input, search)?;
    debug!(lines = stats.lines_written, "flattened to stdout");
    Ok(String::new())
}

fn cmd_expand_file(
    input: &Path,
    output: &Path,
    search: &SearchContext,
    keep_partial: bool,
    format: OutputFormat,
) -> Result<String> {
    if same_file(input, output) {
        return Err(CommandError::InvalidArgument(format!(
            "output {} would overwrite the input file",
            output.display()
        ))
        .into());
    }

    match expand_to_file(input, output, search) {
        Ok(stats) => format_expand_report(input, output, &stats, format),
        Err(err) => {
            let created = !matches!(
                err,
                crate::Error::Expand(ExpandError::CannotCreateOutput { .. })
            );
            if created
                && !keep_partial
                && let Err(discard_err) = discard_output(output)
            {
                warn!(%discard_err, "partial output left in place");
            }
            Err(err)
        }
    }
}

fn cmd_check(input: &Path, search: &SearchContext, format: OutputFormat) -> Result<String> {
    let stats = expand_to_sink(&mut io::sink(), input, search)?;
    format_check_report(input, &stats, format)
}

/// Returns true if both paths exist and name the same file.
fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
