//! Process-wide vocabulary state.
//!
//! Every table in [`crate::lang`] is `const`. The one piece of derived state is the reverse lookup from source
//! spellings to IDs, which a scanner hits for every identifier. It is built once, on first use, behind a
//! [`OnceLock`], and building it validates the whole vocabulary first.
//!
//! ## Notes
//! - Initialisation is idempotent and race-free: concurrent first callers block until one build finishes.
//! - A malformed vocabulary is a build defect, not a runtime condition, so [`vocabulary`] panics instead of
//!   returning an error. Use [`Vocabulary::build`] to inspect the error.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::errors::VocabError;
use crate::lang::literals;
use crate::lang::operators::{self, OPERATORS, Operator};
use crate::lang::registry::VocabId;
use crate::lang::tokens::{self, TOKEN_COUNT, TOKENS, TokenKind};

static VOCABULARY: OnceLock<Vocabulary> = OnceLock::new();

/// Reverse-lookup indices over the vocabulary tables.
#[derive(Debug)]
pub struct Vocabulary {
    tokens: HashMap<&'static str, TokenKind>,
    operators: HashMap<&'static str, Operator>,
}

impl Vocabulary {
    /// Validate the vocabulary tables and build the lookup indices.
    ///
    /// ## Errors
    /// - [`VocabError::TooManyTokens`] if the token kinds do not fit in a token set.
    /// - [`VocabError::MisorderedTable`] / [`VocabError::EmptyLabel`] for a bad registry entry.
    /// - [`VocabError::DuplicateSpelling`] if two kinds (or two operators) share a spelling.
    pub fn build() -> Result<Self, VocabError> {
        tokens::check_token_bound(TOKEN_COUNT)?;
        check_table(tokens::all())?;
        check_table(operators::all())?;
        check_table(literals::all())?;

        let mut token_index = HashMap::with_capacity(TOKENS.len());
        for info in TOKENS.iter() {
            if let Some(spelling) = info.spelling {
                insert_unique(&mut token_index, TokenKind::TABLE, spelling, info.id)?;
            }
        }

        let mut operator_index = HashMap::with_capacity(OPERATORS.len());
        for info in OPERATORS.iter() {
            insert_unique(&mut operator_index, Operator::TABLE, info.label, info.id)?;
        }

        debug!(
            token_kinds = TOKEN_COUNT - 1,
            token_spellings = token_index.len(),
            operators = operator_index.len(),
            "built token vocabulary"
        );

        Ok(Self {
            tokens: token_index,
            operators: operator_index,
        })
    }

    /// Resolve a fixed token spelling (keyword, delimiter, `=`, `:=`, `<-`, `*`).
    pub fn token(&self, spelling: &str) -> Option<TokenKind> {
        self.tokens.get(spelling).copied()
    }

    /// Resolve an operator spelling.
    pub fn operator(&self, spelling: &str) -> Option<Operator> {
        self.operators.get(spelling).copied()
    }
}

/// Return the process-wide vocabulary, building it on first use.
///
/// ## Panics
/// - If the vocabulary tables are inconsistent (see [`Vocabulary::build`]).
pub fn vocabulary() -> &'static Vocabulary {
    VOCABULARY.get_or_init(|| {
        Vocabulary::build().unwrap_or_else(|err| panic!("INVARIANT: token vocabulary is malformed: {err}"))
    })
}

/// Check that a registry lists its IDs in index order with non-empty labels.
pub fn check_table<Id: VocabId>(ids: impl IntoIterator<Item = Id>) -> Result<(), VocabError> {
    for (index, id) in ids.into_iter().enumerate() {
        if id.index() != index {
            return Err(VocabError::MisorderedTable {
                table: Id::TABLE,
                index,
            });
        }
        if id.label().is_empty() {
            return Err(VocabError::EmptyLabel {
                table: Id::TABLE,
                index,
            });
        }
    }
    Ok(())
}

fn insert_unique<Id>(
    index: &mut HashMap<&'static str, Id>,
    table: &'static str,
    spelling: &'static str,
    id: Id,
) -> Result<(), VocabError> {
    if index.insert(spelling, id).is_some() {
        return Err(VocabError::DuplicateSpelling { table, spelling });
    }
    Ok(())
}
