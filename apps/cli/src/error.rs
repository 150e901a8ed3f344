//! # Console Error Type
//!
//! Unified error type for menu commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  Command (add / sell / list)                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Result<Flow, ConsoleError>                                             │
//! │         │                                                               │
//! │         ├── Io ───────────────────────► session ends, error returned    │
//! │         │                                                               │
//! │         └── anything else ────────────► user_message() printed,         │
//! │                                          back to the menu               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use stockroom_core::{InventoryError, MoneyError};
use thiserror::Error;

/// Errors raised while running a console session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Menu selection outside 1-4.
    #[error("Invalid menu choice: '{0}'")]
    InvalidMenuChoice(String),

    /// An integer answer that does not parse.
    #[error("{field} must be a whole number, got '{input}'")]
    InvalidNumber { field: &'static str, input: String },

    /// A price answer that does not parse.
    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] MoneyError),

    /// The inventory rejected the request.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// Reading stdin or writing stdout failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl ConsoleError {
    /// Everything except I/O failure leaves the session usable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ConsoleError::Io(_))
    }

    /// Message printed to the operator.
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::InvalidMenuChoice(_) => "Invalid choice entered".to_string(),
            ConsoleError::Inventory(InventoryError::NotFound { .. }) => {
                "This item is not in your Inventory".to_string()
            }
            ConsoleError::Inventory(InventoryError::InsufficientQuantity { .. }) => {
                "Cannot sell more items than you have.".to_string()
            }
            other => other.to_string(),
        }
    }
}
