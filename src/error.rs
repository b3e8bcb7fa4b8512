//! Error types for the rod-cutting solvers.

use thiserror::Error;

/// Errors returned by the solvers.
///
/// The computation is total over valid inputs, so the only failure kind is
/// rejected input. The [`InvalidInput`] reason says what was wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RodCutError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Reason an input was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// The requested rod length is below zero.
    #[error("rod length must be non-negative, got {length}")]
    NegativeLength { length: i64 },

    /// The price table does not cover every piece length up to the rod length.
    #[error("price table has {available} entries but rod length {required} needs at least {required}")]
    PriceTableTooShort { required: usize, available: usize },

    /// A price is negative, or not a finite number.
    #[error("price for piece length {piece} is negative or not finite")]
    InadmissiblePrice { piece: usize },

    /// Some sub-length's revenue does not fit in the price type.
    #[error("revenue for rod length {length} overflows the price type")]
    RevenueOverflow { length: usize },
}

impl RodCutError {
    /// Returns the rejection reason.
    pub fn reason(&self) -> &InvalidInput {
        match self {
            RodCutError::InvalidInput(reason) => reason,
        }
    }
}
