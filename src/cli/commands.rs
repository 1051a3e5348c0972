//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! The `describe_*` functions build the command output as a `String` so they can be tested without capturing stdout.

use std::fs;
use std::path::{Path, PathBuf};

use hango_core::VocabError;
use hango_core::lang::literals;
use hango_core::lang::operators::{self, Operator};
use hango_core::lang::tokens::{self, TokenCategory, TokenKind};
use hango_core::vocab::Vocabulary;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{info, warn};

use super::{CliError, CliResult, ExitCode};
use crate::reference::{ReferenceConfig, render_reference};

/// Errors raised by `hango-vocab` commands
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown spelling `{0}`: not a keyword, delimiter, or operator")]
    UnknownSpelling(String),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Vocab(#[from] VocabError),
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Vocab(vocab) => CliError::failure(format!("{:?}", miette::Report::new(vocab))),
            other => CliError::failure(format!("Error: {other}")),
        }
    }
}

// ============================================================================
// reference
// ============================================================================

/// Render the reference and write it to `out`, or to stdout when `out` is `None`.
pub fn write_reference(out: Option<&Path>, config: &ReferenceConfig) -> CliResult<ExitCode> {
    let markdown = render_reference(config);
    match out {
        Some(path) => {
            fs::write(path, &markdown).map_err(|source| CommandError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), "wrote vocabulary reference");
        }
        None => print!("{markdown}"),
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// lookup
// ============================================================================

/// Print what a source spelling resolves to.
pub fn lookup(spelling: &str, json: bool) -> CliResult<ExitCode> {
    let report = describe_spelling(spelling, json)?;
    println!("{report}");
    Ok(ExitCode::SUCCESS)
}

/// Describe a spelling as a token kind, an operator, or both (`<-` and `*` are both).
///
/// ## Errors
/// - [`CommandError::UnknownSpelling`] if the spelling resolves to neither.
pub fn describe_spelling(spelling: &str, json: bool) -> Result<String, CommandError> {
    let token = tokens::from_spelling(spelling);
    let operator = operators::from_str(spelling);
    if token.is_none() && operator.is_none() {
        return Err(CommandError::UnknownSpelling(spelling.to_string()));
    }

    if json {
        let value = json!({
            "spelling": spelling,
            "token": token.map(token_json),
            "operator": operator.map(operator_json),
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut lines = Vec::new();
    if let Some(kind) = token {
        lines.push(format!(
            "{spelling}\ttoken {kind:?} ({}): {}",
            category_name(tokens::category(kind)),
            tokens::gloss(kind)
        ));
    }
    if let Some(op) = operator {
        let info = operators::info_for(op);
        let tier = match info.precedence {
            Some(prec) => format!("precedence {} ({})", prec as u8, prec.as_str()),
            None => "no precedence".to_string(),
        };
        let prefix = if info.prefix { ", prefix" } else { "" };
        lines.push(format!("{spelling}\toperator {op:?} ({tier}{prefix}): {}", info.gloss));
    }
    Ok(lines.join("\n"))
}

// ============================================================================
// classify
// ============================================================================

/// Print the literal kind of each lexeme. Exits with failure if any lexeme is not a literal.
pub fn classify(lexemes: &[String], json: bool) -> CliResult<ExitCode> {
    let (report, all_literals) = describe_lexemes(lexemes, json)?;
    println!("{report}");
    if all_literals {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Classify each lexeme; the flag is `false` if any lexeme is not a literal.
pub fn describe_lexemes(lexemes: &[String], json: bool) -> Result<(String, bool), CommandError> {
    let kinds: Vec<_> = lexemes.iter().map(|lexeme| literals::classify(lexeme)).collect();
    let all_literals = kinds.iter().all(Option::is_some);
    for (lexeme, _) in lexemes.iter().zip(&kinds).filter(|(_, kind)| kind.is_none()) {
        warn!(%lexeme, "not a literal");
    }

    let report = if json {
        let entries: Vec<Value> = lexemes
            .iter()
            .zip(&kinds)
            .map(|(lexeme, kind)| json!({ "lexeme": lexeme, "kind": kind.map(literals::as_str) }))
            .collect();
        serde_json::to_string_pretty(&Value::Array(entries))?
    } else {
        lexemes
            .iter()
            .zip(&kinds)
            .map(|(lexeme, kind)| format!("{lexeme}\t{}", kind.map(literals::as_str).unwrap_or("-")))
            .collect::<Vec<_>>()
            .join("\n")
    };
    Ok((report, all_literals))
}

// ============================================================================
// check
// ============================================================================

/// Validate the vocabulary tables and report the first inconsistency.
pub fn check() -> CliResult<ExitCode> {
    Vocabulary::build().map_err(CommandError::from)?;
    println!(
        "vocabulary ok: {} token kinds, {} operators, {} literal kinds",
        tokens::TOKENS.len(),
        operators::OPERATORS.len(),
        literals::LITERALS.len()
    );
    Ok(ExitCode::SUCCESS)
}

// --- helpers -----------------------------------------------------------------

fn category_name(category: TokenCategory) -> &'static str {
    match category {
        TokenCategory::Special => "special",
        TokenCategory::NameOrLiteral => "name or literal",
        TokenCategory::Operator => "operator",
        TokenCategory::Delimiter => "delimiter",
        TokenCategory::Keyword => "keyword",
    }
}

fn token_json(kind: TokenKind) -> Value {
    json!({
        "id": format!("{kind:?}"),
        "label": tokens::as_str(kind),
        "category": category_name(tokens::category(kind)),
        "gloss": tokens::gloss(kind),
    })
}

fn operator_json(op: Operator) -> Value {
    let info = operators::info_for(op);
    json!({
        "id": format!("{op:?}"),
        "label": info.label,
        "precedence": info.precedence.map(|prec| prec as u8),
        "prefix": info.prefix,
        "gloss": info.gloss,
    })
}
