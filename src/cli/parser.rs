//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::core::SearchContext;
use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// incflat: flatten `#include` directives into a single source file.
///
/// Quoted includes are looked up beside the including file, then in each
/// include directory. Angled includes only use the include directories.
#[derive(Parser, Debug)]
#[command(name = "incflat")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (debug logging on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Returns true if flattened text is streamed to stdout.
    #[must_use]
    pub const fn streams_to_stdout(&self) -> bool {
        matches!(self.command, Commands::Expand { output: None, .. })
    }
}

/// Include directory options shared by every command.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchArgs {
    /// Include directory, probed in the order given.
    ///
    /// Repeatable, one directory per flag.
    #[arg(short = 'I', long = "include-dir", value_name = "DIR")]
    pub include_dirs: Vec<PathBuf>,

    /// Include directory list (`:`-separated), used when no `-I` is given.
    #[arg(long, value_name = "PATHS", env = "INCFLAT_INCLUDE_PATH")]
    pub include_path: Option<OsString>,
}

impl SearchArgs {
    /// Builds the search context from the configured directories.
    ///
    /// `-I` directories win outright; the path list is only split when
    /// none were given. Empty list entries are skipped.
    #[must_use]
    pub fn search_context(&self) -> SearchContext {
        if !self.include_dirs.is_empty() {
            return SearchContext::new(self.include_dirs.iter().cloned());
        }
        self.include_path
            .as_deref()
            .map_or_else(SearchContext::empty, |list| {
                std::env::split_paths(list)
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .collect()
            })
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Flatten a file and its includes.
    ///
    /// Writes to stdout unless `--output` is given.
    Expand {
        /// Root source file.
        input: PathBuf,

        /// Output file (created or truncated).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep a partially written output file when expansion fails.
        #[arg(long)]
        keep_partial: bool,

        /// Include directories.
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Verify that every include resolves, without writing output.
    Check {
        /// Root source file.
        input: PathBuf,

        /// Include directories.
        #[command(flatten)]
        search: SearchArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_expand() {
        let cli = Cli::try_parse_from([
            "incflat", "expand", "a.cpp", "-o", "a.in", "-I", "inc1", "-I", "inc2",
        ])
        .unwrap();
        match cli.command {
            Commands::Expand {
                input,
                output,
                keep_partial,
                search,
            } => {
                assert_eq!(input, PathBuf::from("a.cpp"));
                assert_eq!(output, Some(PathBuf::from("a.in")));
                assert!(!keep_partial);
                assert_eq!(
                    search.search_context(),
                    SearchContext::new(["inc1", "inc2"])
                );
            }
            Commands::Check { .. } => panic!("expected expand"),
        }
    }

    #[test]
    fn test_include_dir_keeps_colon() {
        let cli =
            Cli::try_parse_from(["incflat", "check", "a.c", "--include-dir", "inc:v2"]).unwrap();
        match cli.command {
            Commands::Check { search, .. } => {
                assert_eq!(search.include_dirs, vec![PathBuf::from("inc:v2")]);
                assert_eq!(search.search_context(), SearchContext::new(["inc:v2"]));
            }
            Commands::Expand { .. } => panic!("expected check"),
        }
    }

    #[test]
    fn test_include_path_is_split() {
        let search = SearchArgs {
            include_dirs: Vec::new(),
            include_path: Some(OsString::from("x::y")),
        };
        assert_eq!(search.search_context(), SearchContext::new(["x", "y"]));
    }

    #[test]
    fn test_include_dir_overrides_include_path() {
        let search = SearchArgs {
            include_dirs: vec![PathBuf::from("a:b")],
            include_path: Some(OsString::from("x:y")),
        };
        assert_eq!(search.search_context(), SearchContext::new(["a:b"]));
    }

    #[test]
    fn test_no_include_dirs() {
        assert_eq!(SearchArgs::default().search_context(), SearchContext::empty());
    }

    #[test]
    fn test_streams_to_stdout() {
        let cli = Cli::try_parse_from(["incflat", "expand", "a.c"]).unwrap();
        assert!(cli.streams_to_stdout());
        let cli = Cli::try_parse_from(["incflat", "expand", "a.c", "-o", "a.out"]).unwrap();
        assert!(!cli.streams_to_stdout());
        let cli = Cli::try_parse_from(["incflat", "check", "a.c"]).unwrap();
        assert!(!cli.streams_to_stdout());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["incflat", "check", "a.c", "--format", "json", "-v"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.format, "json");
    }
}
