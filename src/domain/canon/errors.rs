//! Canon Context - Errors

use thiserror::Error;

use super::Book;

#[derive(Debug, Error)]
pub enum CanonError {
    #[error("unknown book: {0}")]
    UnknownBook(String),

    #[error("abbreviation table names an unknown book key: {0}")]
    UnknownKey(String),

    #[error("abbreviation '{alias}' maps to both {first} and {second}")]
    DuplicateAlias {
        alias: String,
        first: Book,
        second: Book,
    },

    #[error("invalid abbreviation table: {0}")]
    InvalidTable(String),
}
