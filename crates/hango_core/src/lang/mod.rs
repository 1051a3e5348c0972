//! Hango token vocabulary registries.
//!
//! This module is the "front door" for lexical vocabulary: token kinds, operators, and literal kinds.
//!
//! Callers work with **stable IDs** (`TokenKind`, `Operator`, `LitKind`) and look up labels/metadata via
//! registry tables indexed by discriminant, instead of matching on spellings.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The scanner/parser enforce syntax; registries provide labels and metadata for diagnostics, docs, and tooling.
//!
//! ## Examples
//! ```rust
//! use hango_core::lang::tokens::{self, TokenKind};
//!
//! assert_eq!(tokens::as_str(TokenKind::Define), ":=");
//! assert_eq!(tokens::keyword("如果"), Some(TokenKind::If));
//! ```

pub mod literals;
pub mod operators;
pub mod registry;
pub mod token;
pub mod token_set;
pub mod tokens;
