//! Provide the canonical token vocabulary for the Hango front end.
//!
//! This crate is the closed catalogue of lexical token kinds, operators (with precedence tiers), and literal kinds
//! that a scanner produces and a parser consumes, plus the [`TokenSet`](lang::token_set::TokenSet) bitmask used for
//! lookahead decisions.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no scanning, no grammar rules.
//! - All tables are `const`. The only lazily built state is the reverse-lookup [`vocab::Vocabulary`], which is
//!   initialised once (race-free) and validated before first use.
//! - Keywords are spelled in Chinese in source text; each keyword also carries an English gloss for docs.
//!
//! ## Examples
//! ```rust
//! use hango_core::lang::operators::{self, Operator, Prec};
//! use hango_core::lang::token_set::{TokenSet, contains};
//! use hango_core::lang::tokens::TokenKind;
//!
//! let closers = TokenSet::of(&[TokenKind::Rparen, TokenKind::Rbrace]);
//! assert!(contains(closers, TokenKind::Rbrace));
//! assert!(!contains(closers, TokenKind::Semi));
//!
//! assert!(operators::precedence(Operator::Mul) > operators::precedence(Operator::Add));
//! assert_eq!(operators::precedence(Operator::OrOr), Prec::OrOr);
//! ```

pub mod errors;
pub mod lang;
pub mod vocab;

pub use errors::VocabError;
pub use lang::literals::LitKind;
pub use lang::operators::{Operator, Prec};
pub use lang::token::Token;
pub use lang::token_set::TokenSet;
pub use lang::tokens::TokenKind;
