//! # Sell Item
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Enter item name: apple                                                 │
//! │       │                                                                 │
//! │       ├── not found ──► "This item is not in your Inventory"           │
//! │       │                 (quantity is never asked)                       │
//! │       ▼                                                                 │
//! │  Enter number of items to sell: 4                                       │
//! │       │                                                                 │
//! │       ├── 4 > on hand ──► "Cannot sell more items than you have."      │
//! │       │                                                                 │
//! │       └── OK ──► "Items sold"                                           │
//! │                  "Money received: $10.00"                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use stockroom_core::{Inventory, InventoryError};
use tracing::debug;

use crate::config::ConsoleConfig;
use crate::console::{parse_integer, Console};
use crate::error::ConsoleError;
use crate::menu::Flow;

/// Prompts for a name and quantity and sells from the first matching entry.
pub fn sell_item<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
    config: &ConsoleConfig,
) -> Result<Flow, ConsoleError> {
    let Some(name) = console.ask("\nEnter item name: ")? else {
        return Ok(Flow::Exit);
    };

    // Checked before asking for a quantity
    if inventory.find_by_name(&name).is_none() {
        return Err(InventoryError::NotFound { name }.into());
    }

    let Some(quantity) = console.ask_parsed(
        "\nEnter number of items to sell: ",
        parse_integer("Quantity"),
    )?
    else {
        return Ok(Flow::Exit);
    };

    let receipt = inventory.sell(&name, quantity)?;
    debug!(entry_id = %receipt.entry_id, removed = receipt.removed, "sell_item command");

    console.say("Items sold")?;
    console.say(&format!(
        "Money received: {}",
        config.format_currency(receipt.revenue)
    ))?;

    Ok(Flow::Continue)
}
