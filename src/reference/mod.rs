//! Render the token vocabulary as a Markdown reference.
//!
//! Every table is derived from the `hango_core::lang` registries, so the output can be regenerated and checked in
//! whenever the vocabulary changes.
//!
//! ## Notes
//! - Cells are wrapped in backticks and `|` is escaped so operator spellings survive GFM tables.
//! - Output always ends with exactly one newline.
//!
//! ## Examples
//! ```
//! use hango::reference::{ReferenceConfig, render_reference};
//!
//! let md = render_reference(&ReferenceConfig::default());
//! assert!(md.starts_with("# Hango token vocabulary"));
//! assert!(md.contains("`函数`"));
//! ```

pub mod config;

pub use config::ReferenceConfig;

use hango_core::lang::literals::{self, LITERALS};
use hango_core::lang::operators::{OPERATORS, Prec};
use hango_core::lang::tokens::{self, TOKENS, TokenCategory, TokenKind, branch, call};

const TOKEN_SECTIONS: [(TokenCategory, &str); 5] = [
    (TokenCategory::Special, "Special"),
    (TokenCategory::NameOrLiteral, "Names and literals"),
    (TokenCategory::Operator, "Operators"),
    (TokenCategory::Delimiter, "Delimiters"),
    (TokenCategory::Keyword, "Keywords"),
];

/// Render the full vocabulary reference.
///
/// ## Parameters
/// - `config`: title and optional columns/sections.
///
/// ## Returns
/// - A Markdown document with token, operator, precedence, literal, and (optionally) alias tables.
#[tracing::instrument(skip_all, fields(title = %config.title, glosses = config.include_glosses))]
pub fn render_reference(config: &ReferenceConfig) -> String {
    let mut out = String::new();
    out.push_str("# ");
    out.push_str(&config.title);
    out.push_str("\n\n");
    out.push_str("> Generated from the `hango_core` registries. Regenerate with `hango-vocab reference`.\n");

    for (category, heading) in TOKEN_SECTIONS {
        render_token_section(&mut out, config, category, heading);
    }
    render_operators_section(&mut out, config);
    render_precedence_section(&mut out);
    render_literals_section(&mut out, config);
    if config.include_aliases {
        render_aliases_section(&mut out);
    }

    trim_trailing_newlines_to_at_most_two(&mut out);
    while out.ends_with("\n\n") {
        out.pop();
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }

    tracing::debug!(bytes = out.len(), "rendered vocabulary reference");
    out
}

fn render_token_section(out: &mut String, config: &ReferenceConfig, category: TokenCategory, heading: &str) {
    start_section(out, &format!("## Tokens: {heading}"));
    table_header(out, config, &["Id", "Label", "Spelling"]);
    for info in TOKENS.iter().filter(|info| info.category == category) {
        let spelling = info.spelling.map(code).unwrap_or_else(|| "-".to_string());
        let mut cells = vec![format!("{:?}", info.id), code(info.label), spelling];
        if config.include_glosses {
            cells.push(info.gloss.to_string());
        }
        table_row(out, &cells);
    }
}

fn render_operators_section(out: &mut String, config: &ReferenceConfig) {
    start_section(out, "## Operators");
    table_header(out, config, &["Id", "Spelling", "Precedence", "Prefix"]);
    for info in OPERATORS.iter() {
        let tier = info.precedence.map(tier_cell).unwrap_or_else(|| "-".to_string());
        let prefix = if info.prefix { "yes" } else { "-" };
        let mut cells = vec![format!("{:?}", info.id), code(info.label), tier, prefix.to_string()];
        if config.include_glosses {
            cells.push(info.gloss.to_string());
        }
        table_row(out, &cells);
    }
}

fn render_precedence_section(out: &mut String) {
    start_section(out, "## Precedence tiers");
    out.push_str("Higher tiers bind tighter. All binary operators are left-associative.\n\n");
    out.push_str("| Tier | Name | Operators |\n");
    out.push_str("|---|---|---|\n");
    for prec in Prec::ALL {
        let members: Vec<String> = OPERATORS
            .iter()
            .filter(|info| info.precedence == Some(prec))
            .map(|info| code(info.label))
            .collect();
        table_row(out, &[(prec as u8).to_string(), prec.as_str().to_string(), members.join(" ")]);
    }
}

fn render_literals_section(out: &mut String, config: &ReferenceConfig) {
    start_section(out, "## Literal kinds");
    table_header(out, config, &["Id", "Label", "Example"]);
    for info in LITERALS.iter() {
        let mut cells = vec![format!("{:?}", info.id), code(literals::as_str(info.id)), code(info.example)];
        if config.include_glosses {
            cells.push(info.gloss.to_string());
        }
        table_row(out, &cells);
    }
}

fn render_aliases_section(out: &mut String) {
    start_section(out, "## Statement aliases");
    out.push_str("| Group | Keywords |\n");
    out.push_str("|---|---|\n");
    table_row(out, &["branch".to_string(), alias_cell(&branch::ALL)]);
    table_row(out, &["call".to_string(), alias_cell(&call::ALL)]);
}

// --- helpers -----------------------------------------------------------------

fn tier_cell(prec: Prec) -> String {
    format!("{} ({})", prec as u8, prec.as_str())
}

fn alias_cell(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(|&kind| code(tokens::as_str(kind)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn code(text: &str) -> String {
    format!("`{}`", text.replace('|', "\\|"))
}

fn table_header(out: &mut String, config: &ReferenceConfig, columns: &[&str]) {
    let mut columns = columns.to_vec();
    if config.include_glosses {
        columns.push("Gloss");
    }
    out.push_str("| ");
    out.push_str(&columns.join(" | "));
    out.push_str(" |\n");
    out.push('|');
    for _ in &columns {
        out.push_str("---|");
    }
    out.push('\n');
}

fn table_row(out: &mut String, cells: &[String]) {
    out.push_str("| ");
    out.push_str(&cells.join(" | "));
    out.push_str(" |\n");
}

fn trim_trailing_newlines_to_at_most_two(out: &mut String) {
    let count = out.chars().rev().take_while(|&ch| ch == '\n').count();
    for _ in 2..count.max(2) {
        out.pop();
    }
}

fn ensure_single_blank_line(out: &mut String) {
    trim_trailing_newlines_to_at_most_two(out);
    if out.is_empty() || out.ends_with("\n\n") {
        return;
    }
    if out.ends_with('\n') {
        out.push('\n');
    } else {
        out.push_str("\n\n");
    }
}

fn start_section(out: &mut String, heading: &str) {
    ensure_single_blank_line(out);
    out.push_str(heading);
    out.push_str("\n\n");
}
