//! Token kind vocabulary.
//!
//! This module is the single source of truth for lexical token kinds: a dense `#[repr(u8)]` enumeration
//! ([`TokenKind`]) plus a const metadata table ([`TOKENS`]) indexed by discriminant that records labels, glosses,
//! and categories.
//!
//! ## Notes
//! - Discriminant `0` is reserved as the "no token" sentinel and is never a variant; [`TokenKind::Eof`] is `1`.
//! - There are at most 64 kinds ([`MAX_TOKENS`]) so that every kind indexes one bit of a
//!   [`TokenSet`](crate::lang::token_set::TokenSet). This is checked at compile time.
//! - Keyword labels are the Chinese source spellings; the gloss carries the English meaning.
//! - Lookup via [`keyword`] / [`from_spelling`] is exact and case-sensitive.
//!
//! ## Examples
//! ```rust
//! use hango_core::lang::tokens::{self, TokenKind};
//!
//! assert_eq!(tokens::as_str(TokenKind::Arrow), "<-");
//! assert_eq!(tokens::as_str(TokenKind::Break), "跳出");
//! assert_eq!(tokens::gloss(TokenKind::Break), "break");
//! assert_eq!(tokens::keyword("返回"), Some(TokenKind::Return));
//! ```

use std::fmt;

use static_assertions::const_assert;

use super::registry::VocabId;
use crate::errors::VocabError;
use crate::vocab;

/// Stable identifier for every lexical token kind.
///
/// ## Notes
/// - The label is accessible via [`as_str`] and `Display`.
/// - `Operator` covers every binary/unary operator except `*`, which has its own kind ([`TokenKind::Star`])
///   because it doubles as the pointer/indirection marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    Eof = 1,

    // Names and literals
    Name,
    Literal,

    // Operators and operations
    Operator,
    AssignOp,
    IncOp,
    Assign,
    Define,
    Arrow,
    Star,

    // Delimiters
    Lparen,
    Lbrack,
    Lbrace,
    Rparen,
    Rbrack,
    Rbrace,
    Comma,
    Semi,
    Colon,
    Dot,
    DotDotDot,

    // Keywords
    Break,
    Case,
    Chan,
    Const,
    Continue,
    Default,
    Defer,
    Else,
    Fallthrough,
    For,
    Func,
    Go,
    Goto,
    If,
    Import,
    Interface,
    Map,
    Package,
    Range,
    Return,
    Select,
    Struct,
    Switch,
    Type,
    Var,
}

/// Number of discriminant slots used by [`TokenKind`], including the reserved sentinel `0`.
pub const TOKEN_COUNT: usize = TokenKind::Var as usize + 1;

/// Upper bound on [`TOKEN_COUNT`]: one bit per kind in a `u64`.
pub const MAX_TOKENS: usize = u64::BITS as usize;

const_assert!(TOKEN_COUNT <= MAX_TOKENS);

/// Broad syntactic grouping for token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// End of input.
    Special,
    /// Identifiers and literal values.
    NameOrLiteral,
    /// Operator-bearing tokens (`op`, `op=`, `opop`, `=`, `:=`, `<-`, `*`).
    Operator,
    /// Brackets, separators, and access markers.
    Delimiter,
    /// Reserved words.
    Keyword,
}

/// Metadata for a token kind.
///
/// ## Notes
/// - `label` is what diagnostics print ("expected ';', found 跳出").
/// - `spelling` is the exact source text for kinds with a fixed spelling; `None` for kinds that cover many
///   lexemes (`name`, `literal`, `op`, ...).
#[derive(Debug, Clone, Copy)]
pub struct TokenInfo {
    pub id: TokenKind,
    pub label: &'static str,
    pub spelling: Option<&'static str>,
    pub gloss: &'static str,
    pub category: TokenCategory,
}

/// Registry of all token kinds, in discriminant order.
///
/// The array length is tied to [`TOKEN_COUNT`], so adding a variant without a table entry fails to compile.
pub const TOKENS: [TokenInfo; TOKEN_COUNT - 1] = [
    generic(TokenKind::Eof, "EOF", "end of input", TokenCategory::Special),
    // Names and literals
    generic(TokenKind::Name, "name", "identifier", TokenCategory::NameOrLiteral),
    generic(TokenKind::Literal, "literal", "basic literal", TokenCategory::NameOrLiteral),
    // Operators and operations
    generic(TokenKind::Operator, "op", "operator (excluding `*`)", TokenCategory::Operator),
    generic(TokenKind::AssignOp, "op=", "compound assignment", TokenCategory::Operator),
    generic(TokenKind::IncOp, "opop", "increment or decrement", TokenCategory::Operator),
    spelled(TokenKind::Assign, "=", "assignment", TokenCategory::Operator),
    spelled(TokenKind::Define, ":=", "short variable declaration", TokenCategory::Operator),
    spelled(TokenKind::Arrow, "<-", "channel send/receive arrow", TokenCategory::Operator),
    spelled(TokenKind::Star, "*", "multiplication or indirection", TokenCategory::Operator),
    // Delimiters
    spelled(TokenKind::Lparen, "(", "left parenthesis", TokenCategory::Delimiter),
    spelled(TokenKind::Lbrack, "[", "left bracket", TokenCategory::Delimiter),
    spelled(TokenKind::Lbrace, "{", "left brace", TokenCategory::Delimiter),
    spelled(TokenKind::Rparen, ")", "right parenthesis", TokenCategory::Delimiter),
    spelled(TokenKind::Rbrack, "]", "right bracket", TokenCategory::Delimiter),
    spelled(TokenKind::Rbrace, "}", "right brace", TokenCategory::Delimiter),
    spelled(TokenKind::Comma, ",", "comma", TokenCategory::Delimiter),
    spelled(TokenKind::Semi, ";", "semicolon", TokenCategory::Delimiter),
    spelled(TokenKind::Colon, ":", "colon", TokenCategory::Delimiter),
    spelled(TokenKind::Dot, ".", "selector dot", TokenCategory::Delimiter),
    spelled(TokenKind::DotDotDot, "...", "variadic ellipsis", TokenCategory::Delimiter),
    // Keywords
    keyword_info(TokenKind::Break, "跳出", "break"),
    keyword_info(TokenKind::Case, "为", "case"),
    keyword_info(TokenKind::Chan, "管道", "chan"),
    keyword_info(TokenKind::Const, "常量", "const"),
    keyword_info(TokenKind::Continue, "继续", "continue"),
    keyword_info(TokenKind::Default, "为其他", "default"),
    keyword_info(TokenKind::Defer, "推迟", "defer"),
    keyword_info(TokenKind::Else, "否则", "else"),
    keyword_info(TokenKind::Fallthrough, "贯穿", "fallthrough"),
    keyword_info(TokenKind::For, "循环", "for"),
    keyword_info(TokenKind::Func, "函数", "func"),
    keyword_info(TokenKind::Go, "异步", "go"),
    keyword_info(TokenKind::Goto, "跳转", "goto"),
    keyword_info(TokenKind::If, "如果", "if"),
    keyword_info(TokenKind::Import, "导入", "import"),
    keyword_info(TokenKind::Interface, "接口", "interface"),
    keyword_info(TokenKind::Map, "映射表", "map"),
    keyword_info(TokenKind::Package, "包", "package"),
    keyword_info(TokenKind::Range, "范围", "range"),
    keyword_info(TokenKind::Return, "返回", "return"),
    keyword_info(TokenKind::Select, "选择", "select"),
    keyword_info(TokenKind::Struct, "类", "struct"),
    keyword_info(TokenKind::Switch, "假如", "switch"),
    keyword_info(TokenKind::Type, "类型", "type"),
    keyword_info(TokenKind::Var, "变量", "var"),
];

/// Keyword kinds exposed for branch statements.
///
/// These are the same values as the base [`TokenKind`] variants, not copies; a branch statement node stores one of
/// them as its operand.
pub mod branch {
    use super::TokenKind;
    use crate::lang::token_set::TokenSet;

    pub const BREAK: TokenKind = TokenKind::Break;
    pub const CONTINUE: TokenKind = TokenKind::Continue;
    pub const FALLTHROUGH: TokenKind = TokenKind::Fallthrough;
    pub const GOTO: TokenKind = TokenKind::Goto;

    pub const ALL: [TokenKind; 4] = [BREAK, CONTINUE, FALLTHROUGH, GOTO];
    pub const SET: TokenSet = TokenSet::of(&ALL);
}

/// Keyword kinds exposed for call statements (`异步 f()`, `推迟 f()`).
pub mod call {
    use super::TokenKind;
    use crate::lang::token_set::TokenSet;

    pub const GO: TokenKind = TokenKind::Go;
    pub const DEFER: TokenKind = TokenKind::Defer;

    pub const ALL: [TokenKind; 2] = [GO, DEFER];
    pub const SET: TokenSet = TokenSet::of(&ALL);
}

/// Label used in diagnostics.
///
/// ## Parameters
/// - `kind`: Token kind.
///
/// ## Returns
/// - The non-empty display label for `kind`.
pub fn as_str(kind: TokenKind) -> &'static str {
    info_for(kind).label
}

/// English gloss.
pub fn gloss(kind: TokenKind) -> &'static str {
    info_for(kind).gloss
}

/// Category.
pub fn category(kind: TokenKind) -> TokenCategory {
    info_for(kind).category
}

/// Return `true` for reserved words.
pub fn is_keyword(kind: TokenKind) -> bool {
    category(kind) == TokenCategory::Keyword
}

/// Full metadata.
///
/// ## Parameters
/// - `kind`: Token kind.
///
/// ## Returns
/// - The associated [`TokenInfo`] from [`TOKENS`].
///
/// ## Notes
/// - This is a direct index by discriminant; `TOKENS` has exactly one entry per non-sentinel discriminant.
pub fn info_for(kind: TokenKind) -> &'static TokenInfo {
    &TOKENS[kind.index()]
}

/// Iterate all token kinds in discriminant order.
pub fn all() -> impl Iterator<Item = TokenKind> {
    TOKENS.iter().map(|t| t.id)
}

/// Resolve a raw discriminant to its kind.
///
/// ## Returns
/// - `None` for the sentinel `0` and for values at or beyond [`TOKEN_COUNT`].
pub fn from_u8(raw: u8) -> Option<TokenKind> {
    let index = usize::from(raw).checked_sub(1)?;
    TOKENS.get(index).map(|t| t.id)
}

/// Lookup a keyword by its source spelling.
///
/// ## Parameters
/// - `s`: Candidate identifier text.
///
/// ## Returns
/// - `Some(TokenKind)` if `s` is a reserved word.
/// - `None` otherwise (including for the English glosses, which are not source spellings).
pub fn keyword(s: &str) -> Option<TokenKind> {
    from_spelling(s).filter(|&kind| is_keyword(kind))
}

/// Lookup any fixed-spelling token kind (keywords, delimiters, `=`, `:=`, `<-`, `*`).
pub fn from_spelling(s: &str) -> Option<TokenKind> {
    vocab::vocabulary().token(s)
}

/// Check that a vocabulary of `count` discriminant slots fits in a token set.
///
/// ## Errors
/// - [`VocabError::TooManyTokens`] if `count` exceeds [`MAX_TOKENS`].
pub fn check_token_bound(count: usize) -> Result<(), VocabError> {
    if count > MAX_TOKENS {
        return Err(VocabError::TooManyTokens {
            count,
            max: MAX_TOKENS,
        });
    }
    Ok(())
}

impl VocabId for TokenKind {
    const TABLE: &'static str = "token";

    fn label(self) -> &'static str {
        info_for(self).label
    }

    fn gloss(self) -> &'static str {
        info_for(self).gloss
    }

    fn index(self) -> usize {
        self as usize - 1
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

// --- helpers -----------------------------------------------------------------

const fn generic(id: TokenKind, label: &'static str, gloss: &'static str, category: TokenCategory) -> TokenInfo {
    TokenInfo {
        id,
        label,
        spelling: None,
        gloss,
        category,
    }
}

const fn spelled(id: TokenKind, label: &'static str, gloss: &'static str, category: TokenCategory) -> TokenInfo {
    TokenInfo {
        id,
        label,
        spelling: Some(label),
        gloss,
        category,
    }
}

const fn keyword_info(id: TokenKind, spelling: &'static str, gloss: &'static str) -> TokenInfo {
    spelled(id, spelling, gloss, TokenCategory::Keyword)
}
