use thiserror::Error;

use crate::extent::Extent;

/// Result alias for the checked cursor operations.
pub type Result<T> = core::result::Result<T, CursorError>;

/// Why a checked cursor operation was refused.
///
/// The silent `read*`/`seek`/`skip` calls never produce these; they only come
/// out of the `try_*` family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("unexpected end of data at offset {offset}: needed {needed}, available {available}")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("position {target} out of range for length {len}")]
    SeekOutOfRange { target: usize, len: Extent },

    #[error("position overflow at offset {offset} (delta {delta})")]
    Overflow { offset: usize, delta: usize },
}
