//! # Menu Commands
//!
//! One handler per menu entry.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs   ◄─── You are here (exports)
//! ├── add.rs   ◄─── 1. Add new item
//! ├── sell.rs  ◄─── 2. Sell item
//! └── list.rs  ◄─── 3. List items
//! ```
//!
//! ## Handler Shape
//! Each handler declares only what it needs:
//! ```rust,ignore
//! // Needs the inventory mutably, no config
//! fn add_item(console, inventory: &mut Inventory) -> Result<Flow, ConsoleError>
//!
//! // Formats money, so also takes config
//! fn sell_item(console, inventory: &mut Inventory, config: &ConsoleConfig)
//!
//! // Read only
//! fn list_items(console, inventory: &Inventory, config: &ConsoleConfig)
//! ```
//!
//! `Ok(Flow::Exit)` from a handler means input ran out mid-dialog.

pub mod add;
pub mod list;
pub mod sell;

pub use add::add_item;
pub use list::list_items;
pub use sell::sell_item;
