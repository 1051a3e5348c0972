//! Checks that the generated Markdown reference stays in sync with the registries.

use hango::reference::{ReferenceConfig, render_reference};
use hango_core::lang::literals::LITERALS;
use hango_core::lang::operators::OPERATORS;
use hango_core::lang::tokens::TOKENS;

fn escaped(label: &str) -> String {
    format!("`{}`", label.replace('|', "\\|"))
}

#[test]
fn every_label_appears_in_reference() {
    let md = render_reference(&ReferenceConfig::default());

    for info in TOKENS.iter() {
        assert!(md.contains(&escaped(info.label)), "missing token label {:?}", info.label);
        assert!(md.contains(info.gloss), "missing token gloss {:?}", info.gloss);
    }
    for info in OPERATORS.iter() {
        assert!(md.contains(&escaped(info.label)), "missing operator {:?}", info.label);
    }
    for info in LITERALS.iter() {
        assert!(md.contains(&escaped(info.example)), "missing literal example {:?}", info.example);
    }
}

#[test]
fn tables_have_consistent_column_counts() {
    for config in [ReferenceConfig::default(), ReferenceConfig::new().with_glosses(false)] {
        let md = render_reference(&config);
        let mut expected = None;
        for line in md.lines() {
            if !line.starts_with('|') {
                expected = None;
                continue;
            }
            let columns = line.replace("\\|", "").matches('|').count();
            match expected {
                None => expected = Some(columns),
                Some(n) => assert_eq!(columns, n, "ragged table row: {line}"),
            }
        }
    }
}

#[test]
fn glosses_and_aliases_can_be_omitted() {
    let full = render_reference(&ReferenceConfig::default());
    let bare = render_reference(&ReferenceConfig::new().with_glosses(false).with_aliases(false));

    assert!(full.contains("| Gloss |"));
    assert!(!bare.contains("| Gloss |"));
    assert!(full.contains("## Statement aliases"));
    assert!(!bare.contains("## Statement aliases"));
    assert!(bare.len() < full.len());
}

#[test]
fn precedence_section_lists_tiers_in_order() {
    let md = render_reference(&ReferenceConfig::new().with_title("Vocab"));
    assert!(md.starts_with("# Vocab\n"));

    let start = md.find("## Precedence tiers").unwrap();
    let end = start + md[start..].find("## Literal kinds").unwrap();
    insta::assert_snapshot!(&md[start..end], @r"
    ## Precedence tiers

    Higher tiers bind tighter. All binary operators are left-associative.

    | Tier | Name | Operators |
    |---|---|---|
    | 1 | logical or | `\|\|` |
    | 2 | logical and | `&&` |
    | 3 | comparison | `==` `!=` `<` `<=` `>` `>=` |
    | 4 | additive | `+` `-` `\|` `^` |
    | 5 | multiplicative | `*` `/` `%` `&` `&^` `<<` `>>` |
    ");
}
