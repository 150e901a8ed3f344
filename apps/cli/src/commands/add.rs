//! # Add Item
//!
//! ```text
//! Enter item name: apple      ◄── single token
//! Enter quantity: 10          ◄── whole number
//! Enter price: 2.50           ◄── decimal, at most 2 places
//! ```
//!
//! No uniqueness or range checks: whatever parses is stored.

use std::io::{BufRead, Write};

use stockroom_core::{Inventory, Money};
use tracing::debug;

use crate::console::{parse_integer, Console};
use crate::error::ConsoleError;
use crate::menu::Flow;

/// Prompts for name, quantity and price, then appends a new entry.
pub fn add_item<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    inventory: &mut Inventory,
) -> Result<Flow, ConsoleError> {
    let Some(name) = console.ask("\nEnter item name: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(quantity) = console.ask_parsed("Enter quantity: ", parse_integer("Quantity"))? else {
        return Ok(Flow::Exit);
    };
    let Some(price) = console.ask_parsed("Enter price: ", |input| {
        input.parse::<Money>().map_err(ConsoleError::from)
    })?
    else {
        return Ok(Flow::Exit);
    };

    let entry_id = inventory.add_entry(name, quantity, price).id().to_string();
    debug!(%entry_id, entries = inventory.len(), "add_item command");

    Ok(Flow::Continue)
}
