//! The token value a scanner hands to a parser.
//!
//! A [`Token`] is built once per lexeme and never mutated. The constructors enforce the attachment rules between
//! the token kind and its optional payloads:
//! - an [`Operator`] only on operator-bearing kinds ([`token_set::OPERATORS`]),
//! - a [`LitKind`] only on [`TokenKind::Literal`],
//! - a [`Span`] always.

use super::literals::LitKind;
use super::operators::{self, Operator, Prec};
use super::token_set::{self, TokenSet};
use super::tokens::TokenKind;
use crate::errors::VocabError;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A classified lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    op: Option<Operator>,
    prec: Option<Prec>,
    lit: Option<LitKind>,
    text: Option<String>,
    span: Span,
}

impl Token {
    /// A token with no payload (delimiters, keywords, `=`, `<-`, EOF).
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self {
            kind,
            op: None,
            prec: None,
            lit: None,
            text: None,
            span,
        }
    }

    /// An identifier.
    pub fn name(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(TokenKind::Name, span)
        }
    }

    /// A literal with its kind and source text.
    pub fn literal(lit: LitKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            lit: Some(lit),
            text: Some(text.into()),
            ..Self::new(TokenKind::Literal, span)
        }
    }

    /// An operator-bearing token.
    ///
    /// ## Notes
    /// - The precedence tier is recorded only for infix-capable kinds (`op` and `*`); `op=` and `opop` carry the
    ///   operator without a tier, as does `:=` with [`Operator::Def`].
    ///
    /// ## Errors
    /// - [`VocabError::OperatorOnNonOperator`] if `kind` is not in [`token_set::OPERATORS`].
    pub fn with_op(kind: TokenKind, op: Operator, span: Span) -> Result<Self, VocabError> {
        if !token_set::contains(token_set::OPERATORS, kind) {
            return Err(VocabError::OperatorOnNonOperator { kind });
        }
        let prec = match kind {
            TokenKind::Operator | TokenKind::Star => operators::try_precedence(op).ok(),
            _ => None,
        };
        Ok(Self {
            op: Some(op),
            prec,
            ..Self::new(kind, span)
        })
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn op(&self) -> Option<Operator> {
        self.op
    }

    /// Precedence tier when this token is a binary operator.
    pub fn prec(&self) -> Option<Prec> {
        self.prec
    }

    pub fn lit(&self) -> Option<LitKind> {
        self.lit
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Return `true` if this token's kind is `kind`.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Return `true` if this token's kind is in `set`.
    pub fn is_in(&self, set: TokenSet) -> bool {
        set.contains(self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_token_records_tier() {
        let tok = Token::with_op(TokenKind::Operator, Operator::Add, Span::new(2, 3)).unwrap();
        assert_eq!(tok.op(), Some(Operator::Add));
        assert_eq!(tok.prec(), Some(Prec::Add));
        assert_eq!(tok.lit(), None);
        assert_eq!(tok.span(), Span::new(2, 3));
    }

    #[test]
    fn test_star_token_records_mul_tier() {
        let tok = Token::with_op(TokenKind::Star, Operator::Mul, Span::default()).unwrap();
        assert_eq!(tok.prec(), Some(Prec::Mul));
    }

    #[test]
    fn test_prefix_only_operator_has_no_tier() {
        let tok = Token::with_op(TokenKind::Operator, Operator::Not, Span::default()).unwrap();
        assert_eq!(tok.op(), Some(Operator::Not));
        assert_eq!(tok.prec(), None);
    }

    #[test]
    fn test_assign_op_carries_operator_without_tier() {
        let tok = Token::with_op(TokenKind::AssignOp, Operator::Shl, Span::default()).unwrap();
        assert_eq!(tok.op(), Some(Operator::Shl));
        assert_eq!(tok.prec(), None);

        let define = Token::with_op(TokenKind::Define, Operator::Def, Span::default()).unwrap();
        assert_eq!(define.op(), Some(Operator::Def));
    }

    #[test]
    fn test_operator_rejected_on_delimiter() {
        let err = Token::with_op(TokenKind::Comma, Operator::Add, Span::default()).unwrap_err();
        assert_eq!(err, VocabError::OperatorOnNonOperator { kind: TokenKind::Comma });
    }

    #[test]
    fn test_literal_and_name() {
        let lit = Token::literal(LitKind::Imag, "1.5i", Span::new(0, 4));
        assert!(lit.is(TokenKind::Literal));
        assert_eq!(lit.lit(), Some(LitKind::Imag));
        assert_eq!(lit.text(), Some("1.5i"));
        assert_eq!(lit.op(), None);

        let name = Token::name("x", Span::new(5, 6));
        assert!(name.is_in(token_set::NAMES_AND_LITERALS));
        assert_eq!(name.text(), Some("x"));
        assert_eq!(name.lit(), None);
    }

    #[test]
    fn test_span_merge() {
        assert_eq!(Span::new(4, 6).merge(Span::new(1, 2)), Span::new(1, 6));
    }
}
