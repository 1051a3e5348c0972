//! Shareable metadata for `hango_core::lang` registries.
//!
//! The `hango_core::lang` module is a set of **registry-first** vocabularies: token kinds, operators, and literal
//! kinds. Each registry is a `const` table indexed by discriminant. This submodule provides the small trait that all
//! registry IDs implement, so validation and documentation can treat them uniformly.
//!
//! ## Notes
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules lives in the scanner/parser.
//!
//! ## See also
//! - [`crate::lang::tokens`]
//! - [`crate::lang::operators`]
//! - [`crate::lang::literals`]

use std::fmt;

/// Common surface of every registry-backed ID.
///
/// ## Notes
/// - `index` is the position of the ID's entry in its registry table. Registries are laid out in discriminant
///   order, so this is a constant-time lookup, and `crate::vocab` verifies the layout once at initialisation.
///
/// ## Examples
/// ```rust
/// use hango_core::lang::registry::VocabId;
/// use hango_core::lang::tokens::TokenKind;
///
/// assert_eq!(TokenKind::Define.label(), ":=");
/// assert_eq!(TokenKind::Eof.index(), 0);
/// ```
pub trait VocabId: Copy + Eq + fmt::Debug + 'static {
    /// Registry name, used in diagnostics and generated docs.
    const TABLE: &'static str;

    /// Display label (the source spelling where one exists).
    fn label(self) -> &'static str;

    /// Short English description for docs.
    fn gloss(self) -> &'static str;

    /// Position of this ID's entry in its registry table.
    fn index(self) -> usize;
}
