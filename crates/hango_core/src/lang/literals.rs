//! Literal kind vocabulary.
//!
//! [`LitKind`] is the discriminant a `literal` token carries so that the value-parsing collaborator can pick the
//! right routine: radix handling for integers, mantissa/exponent for floats, suffix stripping for imaginaries, and
//! escape processing for runes and strings. Nothing here parses values.
//!
//! ## Notes
//! - With the `i` suffix permitted on both integer and floating-point mantissas, a single `Imag` kind is a known
//!   simplification: it does not record which mantissa form was used.
//!
//! ## Examples
//! ```rust
//! use hango_core::lang::literals::{self, LitKind};
//!
//! assert_eq!(literals::classify("0x1p-2"), Some(LitKind::Float));
//! assert_eq!(literals::classify("'\\n'"), Some(LitKind::Rune));
//! assert_eq!(literals::classify("变量"), None);
//! ```

use std::fmt;

use super::registry::VocabId;

/// Literal value category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LitKind {
    Int = 0,
    Float,
    Imag,
    Rune,
    String,
}

/// Metadata for a literal kind.
#[derive(Debug, Clone, Copy)]
pub struct LiteralInfo {
    pub id: LitKind,
    pub label: &'static str,
    pub gloss: &'static str,
    pub example: &'static str,
}

/// Registry of literal kinds, in discriminant order.
pub const LITERALS: [LiteralInfo; 5] = [
    LiteralInfo {
        id: LitKind::Int,
        label: "integer",
        gloss: "decimal, binary, octal, or hexadecimal integer",
        example: "0x_FF",
    },
    LiteralInfo {
        id: LitKind::Float,
        label: "float",
        gloss: "decimal or hexadecimal floating-point number",
        example: "1.5e3",
    },
    LiteralInfo {
        id: LitKind::Imag,
        label: "imaginary",
        gloss: "integer or floating-point mantissa with an `i` suffix",
        example: "1.5i",
    },
    LiteralInfo {
        id: LitKind::Rune,
        label: "rune",
        gloss: "single quoted character",
        example: "'a'",
    },
    LiteralInfo {
        id: LitKind::String,
        label: "string",
        gloss: "interpreted or raw string",
        example: "\"x\"",
    },
];

/// Descriptive label ("integer", "float", ...).
pub fn as_str(kind: LitKind) -> &'static str {
    LITERALS[kind as usize].label
}

/// Iterate all literal kinds in discriminant order.
pub fn all() -> impl Iterator<Item = LitKind> {
    LITERALS.iter().map(|l| l.id)
}

/// Classify a complete literal lexeme.
///
/// ## Parameters
/// - `lexeme`: The literal text exactly as scanned (quotes and prefixes included).
///
/// ## Returns
/// - `Some(LitKind)` when the lexeme has the shape of a literal.
/// - `None` for anything that cannot start a literal (names, operators, empty input).
///
/// ## Notes
/// - Only the leading character, radix prefix, exponent markers, and `i` suffix are inspected. Malformed digits are
///   the value parser's problem.
pub fn classify(lexeme: &str) -> Option<LitKind> {
    let first = lexeme.chars().next()?;
    match first {
        '\'' => Some(LitKind::Rune),
        '"' | '`' => Some(LitKind::String),
        '0'..='9' => Some(classify_number(lexeme)),
        '.' if lexeme[1..].starts_with(|c: char| c.is_ascii_digit()) => Some(classify_number(lexeme)),
        _ => None,
    }
}

fn classify_number(lexeme: &str) -> LitKind {
    if lexeme.ends_with('i') {
        return LitKind::Imag;
    }

    let radix_prefix = lexeme
        .strip_prefix('0')
        .and_then(|rest| rest.chars().next())
        .map(|c| c.to_ascii_lowercase());

    let is_float = match radix_prefix {
        // hex mantissas may be fractional, with a mandatory binary exponent
        Some('x') => lexeme.contains(['.', 'p', 'P']),
        Some('b') | Some('o') => false,
        _ => lexeme.contains(['.', 'e', 'E']),
    };

    if is_float { LitKind::Float } else { LitKind::Int }
}

impl VocabId for LitKind {
    const TABLE: &'static str = "literal";

    fn label(self) -> &'static str {
        as_str(self)
    }

    fn gloss(self) -> &'static str {
        LITERALS[self as usize].gloss
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}
