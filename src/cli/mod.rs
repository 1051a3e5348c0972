//! CLI module for the Hango vocabulary tool
//!
//! This module provides the `hango-vocab` command-line interface.
//!
//! ## Commands
//!
//! - `reference` - Render the Markdown vocabulary reference
//! - `lookup <spelling>` - Resolve a keyword, delimiter, or operator spelling
//! - `classify <lexeme>...` - Classify literal lexemes
//! - `check` - Validate the vocabulary tables
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::reference::ReferenceConfig;
use crate::version::HANGO_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Inspect the Hango token vocabulary
#[derive(Parser, Debug)]
#[command(name = "hango-vocab")]
#[command(version = HANGO_VERSION)]
#[command(about = "Inspect the Hango token vocabulary", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the Markdown vocabulary reference
    Reference {
        /// Write to a file instead of stdout
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
        /// Omit the English gloss column
        #[arg(long)]
        no_glosses: bool,
        /// Omit the statement alias section
        #[arg(long)]
        no_aliases: bool,
        /// Document title
        #[arg(long, value_name = "TEXT")]
        title: Option<String>,
    },

    /// Resolve a keyword, delimiter, or operator spelling
    Lookup {
        /// Source spelling, for example `函数` or `<-`
        #[arg(value_name = "SPELLING")]
        spelling: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify literal lexemes
    Classify {
        /// Literal lexemes, for example `0x1F` or `'a'`
        #[arg(value_name = "LEXEME", required = true)]
        lexemes: Vec<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the vocabulary tables
    Check,
}

impl Command {
    /// Build the reference config from `reference` flags.
    fn reference_config(title: Option<String>, no_glosses: bool, no_aliases: bool) -> ReferenceConfig {
        let config = ReferenceConfig::new().with_glosses(!no_glosses).with_aliases(!no_aliases);
        match title {
            Some(title) => config.with_title(title),
            None => config,
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Reference {
            out,
            no_glosses,
            no_aliases,
            title,
        } => {
            let config = Command::reference_config(title, no_glosses, no_aliases);
            commands::write_reference(out.as_deref(), &config)
        }
        Command::Lookup { spelling, json } => commands::lookup(&spelling, json),
        Command::Classify { lexemes, json } => commands::classify(&lexemes, json),
        Command::Check => commands::check(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_reference() {
        let cli = Cli::try_parse_from(["hango-vocab", "reference", "--out", "vocab.md", "--no-glosses"]).unwrap();
        if let Command::Reference {
            out,
            no_glosses,
            no_aliases,
            title,
        } = cli.command
        {
            assert_eq!(out, Some(PathBuf::from("vocab.md")));
            assert!(no_glosses);
            assert!(!no_aliases);
            assert_eq!(title, None);
        } else {
            panic!("Expected Reference command");
        }
    }

    #[test]
    fn test_cli_parse_lookup() {
        let cli = Cli::try_parse_from(["hango-vocab", "lookup", "函数", "--json"]).unwrap();
        if let Command::Lookup { spelling, json } = cli.command {
            assert_eq!(spelling, "函数");
            assert!(json);
        } else {
            panic!("Expected Lookup command");
        }
    }

    #[test]
    fn test_cli_parse_classify_requires_lexeme() {
        assert!(Cli::try_parse_from(["hango-vocab", "classify"]).is_err());

        let cli = Cli::try_parse_from(["hango-vocab", "classify", "0x1F", "1.5i"]).unwrap();
        if let Command::Classify { lexemes, json } = cli.command {
            assert_eq!(lexemes, ["0x1F", "1.5i"]);
            assert!(!json);
        } else {
            panic!("Expected Classify command");
        }
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["hango-vocab", "check"]).unwrap();
        assert!(matches!(cli.command, Command::Check));
    }

    #[test]
    fn test_reference_config_from_flags() {
        let config = Command::reference_config(Some("Tokens".to_string()), true, false);
        assert_eq!(config.title, "Tokens");
        assert!(!config.include_glosses);
        assert!(config.include_aliases);

        assert_eq!(Command::reference_config(None, false, false), ReferenceConfig::default());
    }
}
