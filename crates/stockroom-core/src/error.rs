//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── InventoryError   - Sale requests the store cannot satisfy         │
//! │  └── MoneyError       - Decimal text that is not a money amount        │
//! │                                                                         │
//! │  Console errors (in app)                                               │
//! │  └── ConsoleError     - What the operator sees, wraps the above        │
//! │                                                                         │
//! │  Flow: MoneyError / InventoryError → ConsoleError → printed message    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these errors is fatal. The console reports them and returns to
//! the menu.

use thiserror::Error;

// =============================================================================
// Inventory Error
// =============================================================================

/// Sale requests rejected by the [`Inventory`](crate::Inventory).
///
/// A rejected request never changes the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// No entry carries this name.
    ///
    /// ## When This Occurs
    /// - The name was never added
    /// - The entry was sold down to zero and removed
    /// - The query differs in case or whitespace (matching is exact)
    #[error("{name} is not in the inventory")]
    NotFound { name: String },

    /// The request exceeds the quantity on hand.
    ///
    /// ## User Workflow
    /// ```text
    /// Sell "apple" (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientQuantity { name: "apple", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// Console shows: "Cannot sell more items than you have."
    /// ```
    #[error("Cannot sell {requested} of {name}: only {available} available")]
    InsufficientQuantity {
        name: String,
        available: i64,
        requested: i64,
    },

    /// The sale's revenue, remaining quantity or the running total would not
    /// fit in an i64. Only reachable with extreme quantities or prices.
    #[error("Cannot sell {requested} of {name}: amount out of range")]
    Overflow { name: String, requested: i64 },
}

// =============================================================================
// Money Error
// =============================================================================

/// Failures when parsing a decimal amount such as `"2.50"` into
/// [`Money`](crate::Money).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Nothing but whitespace was given.
    #[error("amount is required")]
    Empty,

    /// The text is not a plain decimal number.
    #[error("'{input}' is not a valid amount")]
    InvalidFormat { input: String },

    /// More fractional digits than the currency has minor units.
    #[error("'{input}' has more than 2 decimal places")]
    TooManyDecimals { input: String },

    /// The amount does not fit in the cent range.
    #[error("'{input}' is out of range")]
    OutOfRange { input: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with InventoryError.
pub type InventoryResult<T> = Result<T, InventoryError>;

// =============================================================================
// Unit Tests
// =============================================================================
