//! Errors raised by the explicit `parse` constructors of the scalar types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("invalid account address: {0}")]
    InvalidAddress(String),

    #[error("invalid hash: {reason}")]
    InvalidHash { reason: String },

    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}
