//! # Inventory Store
//!
//! The in-memory collection that owns every [`StockEntry`] for one run.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Operations                                 │
//! │                                                                         │
//! │  Operator Action          Inventory Method        State Change          │
//! │  ───────────────          ────────────────        ────────────          │
//! │                                                                         │
//! │  Add new item ──────────► add_entry() ──────────► entries.push(entry)  │
//! │                                                                         │
//! │  Sell item ─────────────► sell() ───────────────► entries[i].qty -= n  │
//! │                              │                    total_revenue += r    │
//! │                              └── qty == 0 ──────► entries.remove(i)    │
//! │                                                                         │
//! │  List items ────────────► list() ───────────────► (read only)          │
//! │                                                                         │
//! │  NOTE: There is no delete. Entries leave only by selling out.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Entries keep insertion order
//! - Names are NOT unique; lookup returns the first match
//! - An entry sold down to exactly zero is removed in the same call
//! - A rejected sale changes nothing
//! - Sale arithmetic is checked; a result outside i64 rejects the sale

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::{InventoryError, InventoryResult};
use crate::money::Money;
use crate::types::{Listing, SaleReceipt, StockEntry};

/// The inventory store.
///
/// Single owner of all entries; nothing outside holds a reference across
/// calls. Also keeps the running total of money received from sales.
#[derive(Debug, Clone)]
pub struct Inventory {
    entries: Vec<StockEntry>,
    total_revenue: Money,
    opened_at: DateTime<Utc>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory {
            entries: Vec::new(),
            total_revenue: Money::zero(),
            opened_at: Utc::now(),
        }
    }

    /// Appends a new entry.
    ///
    /// ## Behavior
    /// - No uniqueness check: adding an existing name creates a second entry
    ///   that lookups cannot reach until the first one sells out
    /// - No validation: zero or negative quantity and price are stored as given
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::{Inventory, Money};
    ///
    /// let mut inventory = Inventory::new();
    /// inventory.add_entry("apple", 10, Money::from_cents(250));
    /// inventory.add_entry("apple", 3, Money::from_cents(199));
    ///
    /// assert_eq!(inventory.len(), 2);
    /// assert_eq!(inventory.find_by_name("apple").unwrap().quantity(), 10);
    /// ```
    pub fn add_entry(
        &mut self,
        name: impl Into<String>,
        quantity: i64,
        unit_price: Money,
    ) -> &StockEntry {
        let entry = StockEntry::new(name, quantity, unit_price);
        debug!(
            entry_id = %entry.id(),
            name = %entry.name(),
            quantity,
            unit_price_cents = unit_price.cents(),
            "Entry added"
        );

        let index = self.entries.len();
        self.entries.push(entry);
        &self.entries[index]
    }

    /// Linear scan in insertion order for the first exact name match.
    pub fn find_by_name(&self, name: &str) -> Option<&StockEntry> {
        self.entries.iter().find(|entry| entry.is_match(name))
    }

    fn position_by_name(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.is_match(name))
    }

    /// Sells units from the first entry named `name`.
    ///
    /// ## Steps
    /// 1. Find the entry, or fail with [`InventoryError::NotFound`]
    /// 2. `requested > quantity` fails with
    ///    [`InventoryError::InsufficientQuantity`]; nothing is sold
    /// 3. Revenue, remaining quantity and the new running total are computed
    ///    with checked arithmetic; any overflow fails with
    ///    [`InventoryError::Overflow`] before anything changes
    /// 4. Otherwise decrement, add `unit_price × requested` to the running
    ///    total and return a [`SaleReceipt`]
    /// 5. An entry left at exactly zero is removed
    ///
    /// The request itself is not validated. A negative request passes step 2
    /// and raises the quantity with negative revenue.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::{Inventory, InventoryError, Money};
    ///
    /// let mut inventory = Inventory::new();
    /// inventory.add_entry("apple", 10, Money::from_cents(250));
    ///
    /// let receipt = inventory.sell("apple", 4).unwrap();
    /// assert_eq!(receipt.revenue.cents(), 1000);
    /// assert_eq!(receipt.remaining, 6);
    ///
    /// let receipt = inventory.sell("apple", 6).unwrap();
    /// assert!(receipt.removed);
    ///
    /// assert!(matches!(
    ///     inventory.sell("apple", 1),
    ///     Err(InventoryError::NotFound { .. })
    /// ));
    /// ```
    pub fn sell(&mut self, name: &str, requested: i64) -> InventoryResult<SaleReceipt> {
        let Some(index) = self.position_by_name(name) else {
            debug!(name, "Sale rejected: not in inventory");
            return Err(InventoryError::NotFound {
                name: name.to_string(),
            });
        };

        let entry = &mut self.entries[index];
        let available = entry.quantity();
        if requested > available {
            debug!(
                entry_id = %entry.id(),
                name,
                available,
                requested,
                "Sale rejected: insufficient quantity"
            );
            return Err(InventoryError::InsufficientQuantity {
                name: name.to_string(),
                available,
                requested,
            });
        }

        let running_total = self.total_revenue;
        let checked = entry
            .unit_price()
            .checked_multiply_quantity(requested)
            .and_then(|revenue| {
                let remaining = available.checked_sub(requested)?;
                let total = running_total.checked_add(revenue)?;
                Some((revenue, remaining, total))
            });
        let Some((revenue, remaining, total)) = checked else {
            debug!(
                entry_id = %entry.id(),
                name,
                available,
                requested,
                "Sale rejected: amount out of range"
            );
            return Err(InventoryError::Overflow {
                name: name.to_string(),
                requested,
            });
        };

        entry.set_quantity(remaining);
        self.total_revenue = total;

        let receipt = SaleReceipt {
            entry_id: entry.id().to_string(),
            name: entry.name().to_string(),
            quantity_sold: requested,
            revenue,
            remaining,
            removed: remaining == 0,
        };

        info!(
            entry_id = %receipt.entry_id,
            name,
            quantity_sold = requested,
            remaining,
            revenue_cents = revenue.cents(),
            "Items sold"
        );

        if receipt.removed {
            self.entries.remove(index);
            info!(entry_id = %receipt.entry_id, name, "Entry sold out and removed");
        }

        Ok(receipt)
    }

    /// Current entries, or [`Listing::Empty`].
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::{Inventory, Listing, Money};
    ///
    /// let mut inventory = Inventory::new();
    /// assert_eq!(inventory.list(), Listing::Empty);
    ///
    /// inventory.add_entry("apple", 10, Money::from_cents(250));
    /// inventory.add_entry("pear", 2, Money::from_cents(90));
    ///
    /// let names: Vec<&str> = inventory.list().entries().iter().map(|e| e.name()).collect();
    /// assert_eq!(names, ["apple", "pear"]);
    /// ```
    pub fn list(&self) -> Listing<'_> {
        if self.entries.is_empty() {
            Listing::Empty
        } else {
            Listing::Entries(&self.entries)
        }
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[StockEntry] {
        &self.entries
    }

    /// Number of entries (not units).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Money received from every sale so far.
    pub fn total_revenue(&self) -> Money {
        self.total_revenue
    }

    /// When this inventory was created.
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn apple_inventory() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.add_entry("apple", 10, Money::from_cents(250));
        inventory
    }

    #[test]
    fn test_apple_walkthrough() {
        let mut inventory = apple_inventory();

        let receipt = inventory.sell("apple", 4).unwrap();
        assert_eq!(receipt.revenue.cents(), 1000);
        assert_eq!(receipt.remaining, 6);
        assert!(!receipt.removed);
        assert_eq!(inventory.find_by_name("apple").unwrap().quantity(), 6);

        let receipt = inventory.sell("apple", 6).unwrap();
        assert_eq!(receipt.revenue.cents(), 1500);
        assert_eq!(receipt.remaining, 0);
        assert!(receipt.removed);
        assert!(inventory.find_by_name("apple").is_none());
        assert!(inventory.is_empty());

        assert_eq!(
            inventory.sell("apple", 1),
            Err(InventoryError::NotFound {
                name: "apple".to_string()
            })
        );
        assert_eq!(inventory.total_revenue().cents(), 2500);
    }

    #[test]
    fn test_oversell_is_rejected_without_change() {
        let mut inventory = apple_inventory();
        let before = inventory.find_by_name("apple").unwrap().clone();

        let err = inventory.sell("apple", 11).unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientQuantity {
                name: "apple".to_string(),
                available: 10,
                requested: 11,
            }
        );

        assert_eq!(inventory.find_by_name("apple"), Some(&before));
        assert!(inventory.total_revenue().is_zero());
    }

    #[test]
    fn test_unknown_name_is_not_found_without_change() {
        let mut inventory = apple_inventory();

        assert!(matches!(
            inventory.sell("banana", 1),
            Err(InventoryError::NotFound { .. })
        ));
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.entries()[0].quantity(), 10);
        assert!(inventory.total_revenue().is_zero());
    }

    #[test]
    fn test_lookup_is_case_sensitive_and_untrimmed() {
        let inventory = apple_inventory();

        assert!(inventory.find_by_name("apple").is_some());
        assert!(inventory.find_by_name("Apple").is_none());
        assert!(inventory.find_by_name("apple ").is_none());
    }

    #[test]
    fn test_duplicate_names_are_kept_and_first_wins() {
        let mut inventory = Inventory::new();
        let first_id = inventory
            .add_entry("apple", 2, Money::from_cents(250))
            .id()
            .to_string();
        let second_id = inventory
            .add_entry("apple", 5, Money::from_cents(100))
            .id()
            .to_string();

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.find_by_name("apple").unwrap().id(), first_id);

        // Sells against the first entry's price and quantity
        let receipt = inventory.sell("apple", 2).unwrap();
        assert_eq!(receipt.entry_id, first_id);
        assert_eq!(receipt.revenue.cents(), 500);
        assert!(receipt.removed);

        // Second entry becomes reachable only now
        let next = inventory.find_by_name("apple").unwrap();
        assert_eq!(next.id(), second_id);
        assert_eq!(next.quantity(), 5);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut inventory = Inventory::new();
        assert!(inventory.list().is_empty());

        inventory.add_entry("pear", 1, Money::from_cents(90));
        inventory.add_entry("apple", 2, Money::from_cents(250));
        inventory.add_entry("fig", 3, Money::from_cents(40));

        let names: Vec<&str> = inventory.list().entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["pear", "apple", "fig"]);

        // Selling out the middle entry keeps the others in order
        inventory.sell("apple", 2).unwrap();
        let names: Vec<&str> = inventory.list().entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["pear", "fig"]);
    }

    #[test]
    fn test_listing_becomes_empty_after_selling_everything() {
        let mut inventory = apple_inventory();
        inventory.sell("apple", 10).unwrap();
        assert_eq!(inventory.list(), Listing::Empty);
    }

    #[test]
    fn test_entry_count_tracks_adds_minus_sellouts() {
        let mut inventory = Inventory::new();
        for (i, name) in ["a", "b", "c", "d"].iter().enumerate() {
            inventory.add_entry(*name, (i as i64) + 1, Money::from_cents(100));
        }

        inventory.sell("a", 1).unwrap(); // sold out
        inventory.sell("b", 1).unwrap(); // 1 left
        inventory.sell("d", 4).unwrap(); // sold out
        assert!(inventory.sell("c", 4).is_err());

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.total_revenue().cents(), 600);
    }

    #[test]
    fn test_readd_after_sellout_is_reachable() {
        let mut inventory = apple_inventory();
        inventory.sell("apple", 10).unwrap();
        inventory.add_entry("apple", 1, Money::from_cents(300));

        let receipt = inventory.sell("apple", 1).unwrap();
        assert_eq!(receipt.revenue.cents(), 300);
    }

    #[test]
    fn test_add_performs_no_validation() {
        let mut inventory = Inventory::new();
        inventory.add_entry("free", 0, Money::zero());
        inventory.add_entry("odd", -3, Money::from_cents(-100));

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.find_by_name("odd").unwrap().quantity(), -3);
    }

    #[test]
    fn test_selling_zero_of_a_zero_entry_removes_it() {
        let mut inventory = Inventory::new();
        inventory.add_entry("free", 0, Money::from_cents(100));

        let receipt = inventory.sell("free", 0).unwrap();
        assert!(receipt.revenue.is_zero());
        assert!(receipt.removed);
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_negative_request_raises_quantity() {
        let mut inventory = apple_inventory();

        let receipt = inventory.sell("apple", -2).unwrap();
        assert_eq!(receipt.remaining, 12);
        assert!(receipt.revenue.is_negative());
        assert_eq!(inventory.total_revenue().cents(), -500);
    }

    #[test]
    fn test_max_request_overflow_is_rejected_without_change() {
        let mut inventory = Inventory::new();
        inventory.add_entry("bulk", i64::MAX, Money::from_cents(200));
        let before = inventory.find_by_name("bulk").unwrap().clone();

        assert_eq!(
            inventory.sell("bulk", i64::MAX),
            Err(InventoryError::Overflow {
                name: "bulk".to_string(),
                requested: i64::MAX,
            })
        );
        assert_eq!(inventory.find_by_name("bulk"), Some(&before));
        assert!(inventory.total_revenue().is_zero());
    }

    #[test]
    fn test_min_request_overflow_is_rejected_without_change() {
        let mut inventory = Inventory::new();
        inventory.add_entry("bulk", 10, Money::zero());

        // Revenue is zero, but 10 - i64::MIN does not fit
        assert_eq!(
            inventory.sell("bulk", i64::MIN),
            Err(InventoryError::Overflow {
                name: "bulk".to_string(),
                requested: i64::MIN,
            })
        );
        assert_eq!(inventory.find_by_name("bulk").unwrap().quantity(), 10);
        assert!(inventory.total_revenue().is_zero());

        // Priced entry: revenue itself overflows
        let mut inventory = apple_inventory();
        assert!(matches!(
            inventory.sell("apple", i64::MIN),
            Err(InventoryError::Overflow { .. })
        ));
        assert_eq!(inventory.find_by_name("apple").unwrap().quantity(), 10);
        assert!(inventory.total_revenue().is_zero());
    }

    #[test]
    fn test_running_total_overflow_is_rejected_without_change() {
        let mut inventory = Inventory::new();
        inventory.add_entry("bulk", i64::MAX, Money::from_cents(1));
        inventory.add_entry("pin", 1, Money::from_cents(1));

        let receipt = inventory.sell("bulk", i64::MAX).unwrap();
        assert!(receipt.removed);
        assert_eq!(inventory.total_revenue().cents(), i64::MAX);

        assert!(matches!(
            inventory.sell("pin", 1),
            Err(InventoryError::Overflow { .. })
        ));
        assert_eq!(inventory.find_by_name("pin").unwrap().quantity(), 1);
        assert_eq!(inventory.total_revenue().cents(), i64::MAX);
    }
}
