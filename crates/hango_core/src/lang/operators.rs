//! Operator vocabulary.
//!
//! This module defines the canonical operator set carried by operator-bearing tokens, along with precedence tiers
//! and prefix capability.
//!
//! ## Notes
//! - Binary operators fall into exactly five tiers ([`Prec`]), lowest to highest: `||`, `&&`, comparison, additive,
//!   multiplicative. All binary operators are left-associative.
//! - [`Operator::Def`] (the `:` of `:=`), [`Operator::Not`], [`Operator::Recv`], and [`Operator::Tilde`] have no
//!   tier. Asking for their precedence is a caller bug; see [`precedence`].
//! - Lookup via [`from_str`] is exact and case-sensitive.
//!
//! ## Examples
//! ```rust
//! use hango_core::lang::operators::{self, Operator, Prec};
//!
//! assert_eq!(operators::from_str("&^"), Some(Operator::AndNot));
//! assert_eq!(operators::precedence(Operator::AndNot), Prec::Mul);
//! assert!(operators::try_precedence(Operator::Not).is_err());
//! ```

use std::fmt;

use super::registry::VocabId;
use crate::errors::VocabError;
use crate::vocab;

/// Stable identifier for every operator.
///
/// Discriminant `0` is reserved (no operator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Operator {
    // Def is the `:` in `:=`
    Def = 1,
    Not,
    Recv,
    Tilde,

    // Prec::OrOr
    OrOr,

    // Prec::AndAnd
    AndAnd,

    // Prec::Cmp
    Eql,
    Neq,
    Lss,
    Leq,
    Gtr,
    Geq,

    // Prec::Add
    Add,
    Sub,
    Or,
    Xor,

    // Prec::Mul
    Mul,
    Div,
    Rem,
    And,
    AndNot,
    Shl,
    Shr,
}

/// Number of operators (the reserved `0` is not counted).
pub const OPERATOR_COUNT: usize = Operator::Shr as usize;

/// Binary operator precedence tier. Higher binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Prec {
    OrOr = 1,
    AndAnd,
    Cmp,
    Add,
    Mul,
}

impl Prec {
    /// The loosest tier; a full expression is parsed with this as its minimum.
    pub const LOWEST: Prec = Prec::OrOr;

    /// Every tier, lowest first.
    pub const ALL: [Prec; 5] = [Prec::OrOr, Prec::AndAnd, Prec::Cmp, Prec::Add, Prec::Mul];

    /// The next strictly tighter tier, or `None` for [`Prec::Mul`].
    ///
    /// A precedence-climbing parser uses this as the minimum tier for the right operand of a left-associative
    /// operator.
    pub fn next(self) -> Option<Prec> {
        match self {
            Prec::OrOr => Some(Prec::AndAnd),
            Prec::AndAnd => Some(Prec::Cmp),
            Prec::Cmp => Some(Prec::Add),
            Prec::Add => Some(Prec::Mul),
            Prec::Mul => None,
        }
    }

    /// Short name for docs.
    pub fn as_str(self) -> &'static str {
        match self {
            Prec::OrOr => "logical or",
            Prec::AndAnd => "logical and",
            Prec::Cmp => "comparison",
            Prec::Add => "additive",
            Prec::Mul => "multiplicative",
        }
    }
}

/// Metadata for an operator.
///
/// ## Notes
/// - `precedence` is `Some` exactly for binary operators.
/// - `prefix` marks operators that may also appear in unary position (`-x`, `!ok`, `<-ch`, `*p`, `&v`).
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: Operator,
    pub label: &'static str,
    pub gloss: &'static str,
    pub precedence: Option<Prec>,
    pub prefix: bool,
}

/// Registry of all operators, in discriminant order.
pub const OPERATORS: [OperatorInfo; OPERATOR_COUNT] = [
    marker(Operator::Def, ":", "colon of `:=`"),
    unary(Operator::Not, "!", "logical not"),
    unary(Operator::Recv, "<-", "channel receive"),
    unary(Operator::Tilde, "~", "type approximation"),
    binary(Operator::OrOr, "||", "conditional or", Prec::OrOr),
    binary(Operator::AndAnd, "&&", "conditional and", Prec::AndAnd),
    binary(Operator::Eql, "==", "equal", Prec::Cmp),
    binary(Operator::Neq, "!=", "not equal", Prec::Cmp),
    binary(Operator::Lss, "<", "less", Prec::Cmp),
    binary(Operator::Leq, "<=", "less or equal", Prec::Cmp),
    binary(Operator::Gtr, ">", "greater", Prec::Cmp),
    binary(Operator::Geq, ">=", "greater or equal", Prec::Cmp),
    prefix_binary(Operator::Add, "+", "sum", Prec::Add),
    prefix_binary(Operator::Sub, "-", "difference", Prec::Add),
    binary(Operator::Or, "|", "bitwise or", Prec::Add),
    prefix_binary(Operator::Xor, "^", "bitwise xor", Prec::Add),
    prefix_binary(Operator::Mul, "*", "product", Prec::Mul),
    binary(Operator::Div, "/", "quotient", Prec::Mul),
    binary(Operator::Rem, "%", "remainder", Prec::Mul),
    prefix_binary(Operator::And, "&", "bitwise and", Prec::Mul),
    binary(Operator::AndNot, "&^", "bit clear", Prec::Mul),
    binary(Operator::Shl, "<<", "left shift", Prec::Mul),
    binary(Operator::Shr, ">>", "right shift", Prec::Mul),
];

/// Return the full metadata entry for an operator.
pub fn info_for(op: Operator) -> &'static OperatorInfo {
    &OPERATORS[op.index()]
}

/// Canonical spelling.
pub fn as_str(op: Operator) -> &'static str {
    info_for(op).label
}

/// Precedence tier of a binary operator.
///
/// ## Parameters
/// - `op`: A binary operator.
///
/// ## Returns
/// - The operator's [`Prec`].
///
/// ## Panics
/// - If `op` is not a binary operator ([`Operator::Def`], [`Operator::Not`], [`Operator::Recv`],
///   [`Operator::Tilde`]). This is a caller bug; use [`try_precedence`] when the operator is not known to be binary.
pub fn precedence(op: Operator) -> Prec {
    match try_precedence(op) {
        Ok(prec) => prec,
        Err(err) => panic!("{err}"),
    }
}

/// Precedence tier of an operator, if it is binary.
///
/// ## Errors
/// - [`VocabError::NotBinary`] for operators without a tier.
pub fn try_precedence(op: Operator) -> Result<Prec, VocabError> {
    info_for(op).precedence.ok_or(VocabError::NotBinary { op })
}

/// Return `true` if `op` has a precedence tier.
pub fn is_binary(op: Operator) -> bool {
    info_for(op).precedence.is_some()
}

/// Return `true` if `op` may appear in prefix position.
pub fn is_prefix(op: Operator) -> bool {
    info_for(op).prefix
}

/// Iterate all operators in discriminant order.
pub fn all() -> impl Iterator<Item = Operator> {
    OPERATORS.iter().map(|o| o.id)
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(Operator)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<Operator> {
    vocab::vocabulary().operator(spelling)
}

impl VocabId for Operator {
    const TABLE: &'static str = "operator";

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

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

impl fmt::Display for Prec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: Operator,
    label: &'static str,
    gloss: &'static str,
    precedence: Option<Prec>,
    prefix: bool,
) -> OperatorInfo {
    OperatorInfo {
        id,
        label,
        gloss,
        precedence,
        prefix,
    }
}

const fn marker(id: Operator, label: &'static str, gloss: &'static str) -> OperatorInfo {
    op(id, label, gloss, None, false)
}

const fn unary(id: Operator, label: &'static str, gloss: &'static str) -> OperatorInfo {
    op(id, label, gloss, None, true)
}

const fn binary(id: Operator, label: &'static str, gloss: &'static str, prec: Prec) -> OperatorInfo {
    op(id, label, gloss, Some(prec), false)
}

const fn prefix_binary(id: Operator, label: &'static str, gloss: &'static str, prec: Prec) -> OperatorInfo {
    op(id, label, gloss, Some(prec), true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier_members(prec: Prec) -> Vec<Operator> {
        all().filter(|&op| try_precedence(op) == Ok(prec)).collect()
    }

    #[test]
    fn test_table_is_in_discriminant_order() {
        for (index, info) in OPERATORS.iter().enumerate() {
            assert_eq!(info.id as usize, index + 1, "OPERATORS[{index}] is {:?}", info.id);
        }
    }

    #[test]
    fn test_tiers_are_strictly_ordered() {
        assert!(Prec::Mul > Prec::Add);
        assert!(Prec::Add > Prec::Cmp);
        assert!(Prec::Cmp > Prec::AndAnd);
        assert!(Prec::AndAnd > Prec::OrOr);

        for pair in Prec::ALL.windows(2) {
            for &lo in &tier_members(pair[0]) {
                for &hi in &tier_members(pair[1]) {
                    assert!(precedence(hi) > precedence(lo), "{hi} should bind tighter than {lo}");
                }
            }
        }
    }

    #[test]
    fn test_tier_membership() {
        use Operator::*;
        assert_eq!(tier_members(Prec::OrOr), vec![OrOr]);
        assert_eq!(tier_members(Prec::AndAnd), vec![AndAnd]);
        assert_eq!(tier_members(Prec::Cmp), vec![Eql, Neq, Lss, Leq, Gtr, Geq]);
        assert_eq!(tier_members(Prec::Add), vec![Add, Sub, Or, Xor]);
        assert_eq!(tier_members(Prec::Mul), vec![Mul, Div, Rem, And, AndNot, Shl, Shr]);
    }

    #[test]
    fn test_next_tier() {
        assert_eq!(Prec::LOWEST.next(), Some(Prec::AndAnd));
        assert_eq!(Prec::Add.next(), Some(Prec::Mul));
        assert_eq!(Prec::Mul.next(), None);
    }

    #[test]
    fn test_non_binary_operators_have_no_tier() {
        for op in [Operator::Def, Operator::Not, Operator::Recv, Operator::Tilde] {
            assert!(!is_binary(op));
            assert_eq!(try_precedence(op), Err(VocabError::NotBinary { op }));
        }
    }

    #[test]
    #[should_panic(expected = "no precedence tier")]
    fn test_precedence_of_not_panics() {
        precedence(Operator::Not);
    }

    #[test]
    #[should_panic(expected = "no precedence tier")]
    fn test_precedence_of_recv_panics() {
        precedence(Operator::Recv);
    }

    #[test]
    fn test_prefix_operators() {
        let prefix: Vec<Operator> = all().filter(|&op| is_prefix(op)).collect();
        use Operator::*;
        assert_eq!(prefix, vec![Not, Recv, Tilde, Add, Sub, Xor, Mul, And]);
    }

    #[test]
    fn test_spelling_lookup() {
        for info in OPERATORS.iter() {
            assert_eq!(from_str(info.label), Some(info.id));
        }
        assert_eq!(from_str(":="), None);
        assert_eq!(from_str("**"), None);
    }
}
