//! Library error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A substring offset past the end of the value.
    #[error("offset {offset} out of range for text of length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },

    /// A selectable item was confirmed without a callback wired up.
    #[error("selected item has no callback configured")]
    MissingCallback,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
