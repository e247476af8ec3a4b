//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::error::{CommandError, Error, Result};
use crate::expand::ExpandStats;
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    status: &'static str,
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(flatten)]
    stats: &'a ExpandStats,
}

/// Formats the result of a successful `expand` into a file.
pub fn format_expand_report(
    input: &Path,
    output: &Path,
    stats: &ExpandStats,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(out, "Expanded {} -> {}", input.display(), output.display());
            write_stats_text(&mut out, stats);
            Ok(out)
        }
        OutputFormat::Json => format_json(&Report {
            status: "ok",
            input: input.to_string_lossy().to_string(),
            output: Some(output.to_string_lossy().to_string()),
            stats,
        }),
    }
}

/// Formats the result of a successful `check`.
pub fn format_check_report(input: &Path, stats: &ExpandStats, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            let _ = writeln!(out, "OK: {} (all includes resolved)", input.display());
            write_stats_text(&mut out, stats);
            Ok(out)
        }
        OutputFormat::Json => format_json(&Report {
            status: "ok",
            input: input.to_string_lossy().to_string(),
            output: None,
            stats,
        }),
    }
}

fn write_stats_text(out: &mut String, stats: &ExpandStats) {
    let _ = writeln!(out, "  Files:      {}", stats.files_expanded);
    let _ = writeln!(out, "  Includes:   {}", stats.includes_resolved);
    let _ = writeln!(out, "  Lines:      {}", stats.lines_written);
    let _ = writeln!(out, "  Size:       {}", format_size(stats.bytes_written));
    let _ = writeln!(out, "  Max depth:  {}", stats.max_depth);
}

#[derive(Serialize)]
struct ErrorOutput<'a> {
    error: String,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
}

/// Formats an error for display.
///
/// Include failures keep their target, file and line as separate JSON
/// fields.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => {
            let location = match err {
                Error::Expand(e) => e.location(),
                Error::Io(_) | Error::Command(_) => None,
            };
            let payload = ErrorOutput {
                error: err.to_string(),
                kind: err.kind(),
                target: location.map(|(t, _, _)| t),
                file: location.map(|(_, f, _)| f),
                line: location.map(|(_, _, l)| l),
            };
            serde_json::to_string_pretty(&payload)
                .unwrap_or_else(|_| format!("{{\"error\": {:?}}}", err.to_string()))
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).map_err(CommandError::from)?;
    json.push('\n');
    Ok(json)
}

/// Formats a byte size as human-readable.
#[allow(clippy::cast_precision_loss)]
fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}
