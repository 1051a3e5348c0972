//! Errors raised when the vocabulary is inconsistent or used against its contract.
//!
//! None of these are user-facing parse errors. They indicate a malformed vocabulary table or a caller bug
//! (asking for the precedence of a unary operator, attaching an operator to a delimiter).

use miette::Diagnostic;
use thiserror::Error;

use crate::lang::operators::Operator;
use crate::lang::tokens::TokenKind;

/// Vocabulary consistency and contract errors.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum VocabError {
    #[error("token vocabulary has {count} kinds, but a token set holds at most {max}")]
    #[diagnostic(
        code(hango::vocab::too_many_tokens),
        help("every token kind indexes one bit of a u64; merge or remove kinds")
    )]
    TooManyTokens { count: usize, max: usize },

    #[error("{table} table entry {index} is out of discriminant order")]
    #[diagnostic(code(hango::vocab::misordered_table))]
    MisorderedTable { table: &'static str, index: usize },

    #[error("{table} table entry {index} has an empty label")]
    #[diagnostic(code(hango::vocab::empty_label))]
    EmptyLabel { table: &'static str, index: usize },

    #[error("spelling `{spelling}` is registered more than once in the {table} table")]
    #[diagnostic(code(hango::vocab::duplicate_spelling))]
    DuplicateSpelling {
        table: &'static str,
        spelling: &'static str,
    },

    #[error("operator `{op}` has no precedence tier (it is not a binary operator)")]
    #[diagnostic(
        code(hango::vocab::not_binary),
        help("only `||`, `&&`, comparison, additive, and multiplicative operators have a tier")
    )]
    NotBinary { op: Operator },

    #[error("token `{kind}` cannot carry an operator")]
    #[diagnostic(code(hango::vocab::operator_on_non_operator))]
    OperatorOnNonOperator { kind: TokenKind },
}
