//! Property-based tests for the token vocabulary
//!
//! These tests use proptest to check `TokenSet` against a `BTreeSet` model and to make sure lookups never panic on
//! arbitrary input.

use std::collections::BTreeSet;

use hango_core::lang::literals::{self, LitKind};
use hango_core::lang::operators;
use hango_core::lang::token_set::{self, TokenSet};
use hango_core::lang::tokens::{self, TOKEN_COUNT, TokenKind};
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = TokenKind> {
    (1..TOKEN_COUNT as u8).prop_map(|raw| tokens::from_u8(raw).expect("raw discriminant in range"))
}

proptest! {
    /// Property: a set built from kinds contains exactly those kinds.
    #[test]
    fn set_membership_matches_model(kinds in prop::collection::vec(any_kind(), 0..40)) {
        let set: TokenSet = kinds.iter().copied().collect();
        let model: BTreeSet<TokenKind> = kinds.iter().copied().collect();

        for kind in tokens::all() {
            prop_assert_eq!(token_set::contains(set, kind), model.contains(&kind));
        }
        prop_assert_eq!(set.len(), model.len());
        prop_assert_eq!(set.iter().collect::<Vec<_>>(), model.into_iter().collect::<Vec<_>>());
    }

    /// Property: `without` removes exactly one kind and leaves the rest.
    #[test]
    fn without_removes_only_target(kinds in prop::collection::vec(any_kind(), 0..40), target in any_kind()) {
        let set = TokenSet::of(&kinds);
        let removed = set.without(target);
        prop_assert!(!removed.contains(target));
        for kind in tokens::all().filter(|&k| k != target) {
            prop_assert_eq!(removed.contains(kind), set.contains(kind));
        }
        prop_assert!(removed.with(target).contains(target));
    }

    /// Property: union is membership disjunction.
    #[test]
    fn union_is_disjunction(
        a in prop::collection::vec(any_kind(), 0..20),
        b in prop::collection::vec(any_kind(), 0..20),
    ) {
        let (sa, sb) = (TokenSet::of(&a), TokenSet::of(&b));
        let u = sa | sb;
        for kind in tokens::all() {
            prop_assert_eq!(u.contains(kind), sa.contains(kind) || sb.contains(kind));
        }
    }

    /// Property: labels are non-empty and deterministic.
    #[test]
    fn labels_are_deterministic(kind in any_kind()) {
        let label = tokens::as_str(kind);
        prop_assert!(!label.is_empty());
        prop_assert_eq!(label, tokens::as_str(kind));
        prop_assert_eq!(kind.to_string(), label);
    }

    /// Property: lookups and classification accept any string without panicking.
    #[test]
    fn lookups_total_on_arbitrary_text(s in "\\PC{0,8}") {
        let _ = tokens::from_spelling(&s);
        let _ = tokens::keyword(&s);
        let _ = operators::from_str(&s);
        let _ = literals::classify(&s);
    }

    /// Property: decimal integers classify as Int, and gain Float/Imag with a fraction or suffix.
    #[test]
    fn decimal_numbers_classify_by_shape(int in 1u64..1_000_000, frac in 0u32..1000) {
        let i = int.to_string();
        let f = format!("{int}.{frac}");
        let im = format!("{f}i");
        prop_assert_eq!(literals::classify(&i), Some(LitKind::Int));
        prop_assert_eq!(literals::classify(&f), Some(LitKind::Float));
        prop_assert_eq!(literals::classify(&im), Some(LitKind::Imag));
    }
}
