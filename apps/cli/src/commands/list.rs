//! # List Items
//!
//! ```text
//! Item name: apple
//! Quantity: 6
//! Price: $2.50
//!
//! Item name: pear
//! ...
//! ```

use std::io::{BufRead, Write};

use stockroom_core::{Inventory, Listing};

use crate::config::ConsoleConfig;
use crate::console::Console;
use crate::error::ConsoleError;
use crate::menu::Flow;

/// Prints every entry in insertion order, or "Inventory empty.".
pub fn list_items<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &Inventory,
    config: &ConsoleConfig,
) -> Result<Flow, ConsoleError> {
    match inventory.list() {
        Listing::Empty => console.say("Inventory empty.")?,
        Listing::Entries(entries) => {
            for entry in entries {
                console.say(&format!("Item name: {}", entry.name()))?;
                console.say(&format!("Quantity: {}", entry.quantity()))?;
                console.say(&format!(
                    "Price: {}",
                    config.format_currency(entry.unit_price())
                ))?;
                console.prompt("\n")?;
            }
        }
    }

    if config.show_total {
        console.say(&format!(
            "Total money received: {}",
            config.format_currency(inventory.total_revenue())
        ))?;
    }

    Ok(Flow::Continue)
}
