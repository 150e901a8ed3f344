//! # Domain Types
//!
//! Value types shared by the inventory store and its callers.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   StockEntry    │   │   SaleReceipt   │   │    Listing      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  name           │   │  Empty          │       │
//! │  │  name           │   │  quantity_sold  │   │  Entries(&[..]) │       │
//! │  │  quantity       │   │  revenue        │   └─────────────────┘       │
//! │  │  unit_price     │   │  remaining      │                              │
//! │  │  added_at       │   │  removed        │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity
//! Every entry has:
//! - `id`: UUID v4, unique, used only to tell entries apart in logs
//! - `name`: what the operator types; NOT unique, lookup takes the first match

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Stock Entry
// =============================================================================

/// One tracked product held by the [`Inventory`](crate::Inventory).
///
/// Fields are read through accessors; only the inventory changes quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    /// Unique identifier (UUID v4).
    id: String,

    /// Name typed by the operator. Case-sensitive, may repeat.
    name: String,

    /// Units on hand.
    quantity: i64,

    /// Price of one unit.
    unit_price: Money,

    /// When the entry was added.
    added_at: DateTime<Utc>,
}

impl StockEntry {
    /// Creates an entry with a fresh id, stamped now.
    pub fn new(name: impl Into<String>, quantity: i64, unit_price: Money) -> Self {
        StockEntry {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            quantity,
            unit_price,
            added_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    /// Exact, case-sensitive name comparison. No trimming.
    #[inline]
    pub fn is_match(&self, name: &str) -> bool {
        self.name == name
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

// =============================================================================
// Sale Receipt
// =============================================================================

/// Outcome of a successful sale.
///
/// Snapshot pattern: the fields are copied out of the entry, so the receipt
/// stays valid after a sell-out drops the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleReceipt {
    /// Id of the entry that was sold from.
    pub entry_id: String,
    /// Name of the entry that was sold from.
    pub name: String,
    /// Units sold.
    pub quantity_sold: i64,
    /// Money received (unit price × quantity sold).
    pub revenue: Money,
    /// Units left after the sale.
    pub remaining: i64,
    /// True when the sale brought quantity to zero and the entry was dropped.
    pub removed: bool,
}

// =============================================================================
// Listing
// =============================================================================

/// Result of [`Inventory::list`](crate::Inventory::list).
///
/// An empty store is its own variant so callers print "empty" instead of
/// iterating nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing<'a> {
    /// The store holds no entries.
    Empty,
    /// Every entry, in insertion order. Never empty.
    Entries(&'a [StockEntry]),
}

impl<'a> Listing<'a> {
    /// Returns true for [`Listing::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }

    /// Entries in insertion order (empty slice for [`Listing::Empty`]).
    pub fn entries(&self) -> &'a [StockEntry] {
        match *self {
            Listing::Empty => &[],
            Listing::Entries(entries) => entries,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_gets_unique_id() {
        let a = StockEntry::new("apple", 10, Money::from_cents(250));
        let b = StockEntry::new("apple", 10, Money::from_cents(250));

        assert_ne!(a.id(), b.id());
        assert!(Uuid::parse_str(a.id()).is_ok());
    }

    #[test]
    fn test_is_match_is_exact() {
        let entry = StockEntry::new("Apple", 1, Money::from_cents(100));

        assert!(entry.is_match("Apple"));
        assert!(!entry.is_match("apple"));
        assert!(!entry.is_match(" Apple"));
        assert!(!entry.is_match("Apple "));
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = StockEntry::new("apple", 10, Money::from_cents(250));
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["name"], "apple");
        assert_eq!(json["quantity"], 10);
        assert_eq!(json["unit_price"], 250);
        assert_eq!(json["id"], entry.id());
    }

    #[test]
    fn test_listing_accessors() {
        assert!(Listing::Empty.is_empty());
        assert!(Listing::Empty.entries().is_empty());

        let entries = vec![StockEntry::new("apple", 1, Money::from_cents(1))];
        let listing = Listing::Entries(&entries);
        assert!(!listing.is_empty());
        assert_eq!(listing.entries().len(), 1);
    }
}
