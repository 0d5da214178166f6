//! Scalar value types for the ledger transaction model.
//!
//! Everything a transaction field can hold that is richer than a bare integer
//! lives here: classic account addresses, native/issued amounts, 256-bit
//! hashes and ledger-epoch timestamps.

pub mod address;
pub mod amount;
pub mod error;
pub mod hash;
pub mod time;

pub use address::AccountAddress;
pub use amount::{format_drops, Amount, IssuedAmount};
pub use error::TypesError;
pub use hash::Hash256;
pub use time::RippleTime;
