#![forbid(unsafe_code)]
//! Hango vocabulary tooling
//!
//! The token vocabulary itself lives in `hango_core`. This crate adds the `hango-vocab` command-line tool and the
//! Markdown reference renderer built on top of it.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: A malformed vocabulary table is a build defect; `hango_core::vocab::vocabulary` panics with
//!   an `INVARIANT:` message. Use `hango-vocab check` to see the diagnostic instead.

pub mod cli;
pub mod reference;
pub mod version;

pub use hango_core::{LitKind, Operator, Prec, Token, TokenKind, TokenSet, VocabError};
pub use reference::{ReferenceConfig, render_reference};
