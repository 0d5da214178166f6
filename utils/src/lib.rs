//! Shared utilities for the xledger workspace.

pub mod logging;

pub use logging::{init_logging, LogFormat};
