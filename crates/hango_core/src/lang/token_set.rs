//! Bitmask sets of token kinds.
//!
//! A [`TokenSet`] is a single `u64` where bit `k` stands for the [`TokenKind`] with discriminant `k`. Membership is
//! one shift and one mask, which is what a parser wants for lookahead checks like "can this token start a
//! statement?". Sets are usually `const` and never change during a parse.
//!
//! ## Examples
//! ```rust
//! use hango_core::lang::token_set::{self, TokenSet};
//! use hango_core::lang::tokens::TokenKind;
//!
//! const STOP: TokenSet = TokenSet::of(&[TokenKind::Semi, TokenKind::Rbrace]);
//!
//! assert!(token_set::contains(STOP, TokenKind::Rbrace));
//! assert!(!STOP.contains(TokenKind::Comma));
//! assert!(token_set::KEYWORDS.contains(TokenKind::Select));
//! ```

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use static_assertions::assert_eq_size;

use super::tokens::{self, TOKENS, TokenCategory, TokenKind};

assert_eq_size!(TokenSet, u64);

/// A set of token kinds backed by a 64-bit mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenSet(u64);

/// Identifiers and literals.
pub const NAMES_AND_LITERALS: TokenSet = category_set(TokenCategory::NameOrLiteral);

/// Tokens that may carry an [`Operator`](crate::lang::operators::Operator): `op`, `op=`, `opop`, `=`, `:=`, `<-`,
/// `*`.
pub const OPERATORS: TokenSet = category_set(TokenCategory::Operator);

/// Brackets, separators, and access markers.
pub const DELIMITERS: TokenSet = category_set(TokenCategory::Delimiter);

/// Reserved words.
pub const KEYWORDS: TokenSet = category_set(TokenCategory::Keyword);

impl TokenSet {
    /// The set with no members.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Build a set from a list of kinds.
    pub const fn of(kinds: &[TokenKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            bits |= bit(kinds[i]);
            i += 1;
        }
        TokenSet(bits)
    }

    /// Return a copy of this set with `kind` added.
    pub const fn with(self, kind: TokenKind) -> Self {
        TokenSet(self.0 | bit(kind))
    }

    /// Return a copy of this set with `kind` removed.
    pub const fn without(self, kind: TokenKind) -> Self {
        TokenSet(self.0 & !bit(kind))
    }

    /// Return the union of two sets.
    pub const fn union(self, other: TokenSet) -> Self {
        TokenSet(self.0 | other.0)
    }

    /// Report whether `kind` is in the set.
    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        self.0 & bit(kind) != 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The raw mask.
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Iterate members in discriminant order.
    pub fn iter(self) -> impl Iterator<Item = TokenKind> {
        tokens::all().filter(move |&kind| self.contains(kind))
    }
}

/// Report whether `kind` is in `set`.
///
/// Equivalent to [`TokenSet::contains`]; kept as a free function for call sites that read like
/// `contains(STMT_START, tok)`.
#[inline]
pub const fn contains(set: TokenSet, kind: TokenKind) -> bool {
    set.contains(kind)
}

impl BitOr for TokenSet {
    type Output = TokenSet;

    fn bitor(self, rhs: TokenSet) -> TokenSet {
        self.union(rhs)
    }
}

impl BitOr<TokenKind> for TokenSet {
    type Output = TokenSet;

    fn bitor(self, rhs: TokenKind) -> TokenSet {
        self.with(rhs)
    }
}

impl BitOrAssign<TokenKind> for TokenSet {
    fn bitor_assign(&mut self, rhs: TokenKind) {
        *self = self.with(rhs);
    }
}

impl FromIterator<TokenKind> for TokenSet {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        iter.into_iter().fold(TokenSet::EMPTY, TokenSet::with)
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(tokens::as_str)).finish()
    }
}

// --- helpers -----------------------------------------------------------------

const fn bit(kind: TokenKind) -> u64 {
    1u64 << (kind as u8)
}

const fn category_set(category: TokenCategory) -> TokenSet {
    let mut bits = 0u64;
    let mut i = 0;
    while i < TOKENS.len() {
        if TOKENS[i].category as u8 == category as u8 {
            bits |= bit(TOKENS[i].id);
        }
        i += 1;
    }
    TokenSet(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::tokens::{TOKEN_COUNT, branch, call};

    #[test]
    fn test_empty_contains_nothing() {
        for kind in tokens::all() {
            assert!(!contains(TokenSet::EMPTY, kind), "{kind:?}");
        }
        assert!(TokenSet::EMPTY.is_empty());
    }

    #[test]
    fn test_full_set_contains_everything() {
        let full: TokenSet = tokens::all().collect();
        for kind in tokens::all() {
            assert!(contains(full, kind), "{kind:?}");
        }
        assert_eq!(full.len(), TOKEN_COUNT - 1);
        // The sentinel bit is never set.
        assert_eq!(full.bits() & 1, 0);
    }

    #[test]
    fn test_with_and_without() {
        let set = TokenSet::EMPTY.with(TokenKind::Comma).with(TokenKind::Semi);
        assert!(set.contains(TokenKind::Comma));
        let set = set.without(TokenKind::Comma);
        assert!(!set.contains(TokenKind::Comma));
        assert!(set.contains(TokenKind::Semi));
        assert_eq!(set.without(TokenKind::Dot), set);
    }

    #[test]
    fn test_operators_compose() {
        let mut set = TokenSet::EMPTY | TokenKind::Lparen;
        set |= TokenKind::Lbrack;
        let set = set | TokenSet::of(&[TokenKind::Lbrace]);
        assert_eq!(set, TokenSet::of(&[TokenKind::Lparen, TokenKind::Lbrack, TokenKind::Lbrace]));
    }

    #[test]
    fn test_category_sets_partition_kinds() {
        let parts = [NAMES_AND_LITERALS, OPERATORS, DELIMITERS, KEYWORDS, TokenSet::of(&[TokenKind::Eof])];
        let total: usize = parts.iter().map(|s| s.len()).sum();
        assert_eq!(total, TOKEN_COUNT - 1);
        for (i, a) in parts.iter().enumerate() {
            for b in &parts[i + 1..] {
                assert_eq!(a.bits() & b.bits(), 0);
            }
        }
        assert_eq!(KEYWORDS.len(), 25);
        assert_eq!(DELIMITERS.len(), 11);
        assert_eq!(OPERATORS.len(), 7);
    }

    #[test]
    fn test_alias_sets_are_keyword_subsets() {
        assert_eq!(branch::SET.union(KEYWORDS), KEYWORDS);
        assert_eq!(call::SET.union(KEYWORDS), KEYWORDS);
        assert_eq!(branch::SET.bits() & call::SET.bits(), 0);
    }

    #[test]
    fn test_debug_lists_labels() {
        let set = TokenSet::of(&[TokenKind::Semi, TokenKind::Define]);
        assert_eq!(format!("{set:?}"), r#"{":=", ";"}"#);
    }
}
