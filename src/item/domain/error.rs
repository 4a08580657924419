//! Error types for item domain construction.

use thiserror::Error;

/// Errors returned while assembling item values from submitted fields.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ItemDomainError {
    /// The item name was not supplied.
    #[error("item name is missing")]
    MissingName,

    /// The price was not supplied.
    #[error("item price is missing")]
    MissingPrice,

    /// The quantity was not supplied.
    #[error("item quantity is missing")]
    MissingQuantity,
}
