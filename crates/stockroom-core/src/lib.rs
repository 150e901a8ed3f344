//! # stockroom-core: Pure Inventory Logic for Stockroom
//!
//! This crate holds the inventory store and the money arithmetic behind it,
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/cli)                           │   │
//! │  │    Menu ──► Add prompts ──► Sell prompts ──► Listing            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ method calls                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ stockroom-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ inventory │  │   money   │  │   types   │  │   error   │  │   │
//! │  │   │ Inventory │  │   Money   │  │StockEntry │  │ Inventory │  │   │
//! │  │   │ sell/list │  │  parsing  │  │SaleReceipt│  │   Error   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • IN-MEMORY ONLY                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`inventory`] - The inventory store (add, find, sell, list)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Stock entries, sale receipts, listings
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{Inventory, Money};
//!
//! let mut inventory = Inventory::new();
//! inventory.add_entry("apple", 10, "2.50".parse::<Money>().unwrap());
//!
//! let receipt = inventory.sell("apple", 4).unwrap();
//! assert_eq!(receipt.revenue, Money::from_cents(1000));
//! assert_eq!(inventory.total_revenue().to_string(), "$10.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{InventoryError, InventoryResult, MoneyError};
pub use inventory::Inventory;
pub use money::Money;
pub use types::{Listing, SaleReceipt, StockEntry};
