//! # Console Session
//!
//! The menu loop. Owns the one [`Inventory`] for the lifetime of the run.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Welcome to the inventory!"                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─► MENU / Enter your choice ──┬── 1 ──► add_item                      │
//! │  │                              ├── 2 ──► sell_item                     │
//! │  │                              ├── 3 ──► list_items                    │
//! │  │                              ├── 4 ──► exit                          │
//! │  │                              └── ? ──► "Invalid choice entered"      │
//! │  │                                        (rest of line discarded)      │
//! │  │                                                                      │
//! │  └──── recoverable error printed, loop continues ◄──────────────────    │
//! │                                                                         │
//! │  End of input behaves like 4. Only an I/O failure ends with an error.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use stockroom_core::Inventory;
use tracing::{debug, info};

use crate::commands;
use crate::config::ConsoleConfig;
use crate::console::Console;
use crate::error::ConsoleError;
use crate::menu::{Flow, MenuChoice, MENU};

/// One interactive run over an input and output stream.
pub struct Session<R, W> {
    console: Console<R, W>,
    inventory: Inventory,
    config: ConsoleConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W, config: ConsoleConfig) -> Self {
        Session {
            console: Console::new(reader, writer),
            inventory: Inventory::new(),
            config,
        }
    }

    /// Runs the menu loop until exit or end of input.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        info!(store_name = %self.config.store_name, "Session started");
        self.console
            .prompt(&format!("Welcome to the {}!", self.config.store_name))?;

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(err) if err.is_recoverable() => {
                    debug!(error = %err, "Command failed");
                    self.console.say(&err.user_message())?;
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            entries = self.inventory.len(),
            total_revenue_cents = self.inventory.total_revenue().cents(),
            opened_at = %self.inventory.opened_at(),
            "Session ended"
        );
        Ok(())
    }

    fn step(&mut self) -> Result<Flow, ConsoleError> {
        let Some(token) = self.console.ask(MENU)? else {
            return Ok(Flow::Exit);
        };

        let choice = match token.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(err) => {
                self.console.discard_line();
                return Err(err);
            }
        };

        match choice {
            MenuChoice::AddItem => commands::add_item(&mut self.console, &mut self.inventory),
            MenuChoice::SellItem => {
                commands::sell_item(&mut self.console, &mut self.inventory, &self.config)
            }
            MenuChoice::ListItems => {
                commands::list_items(&mut self.console, &self.inventory, &self.config)
            }
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    /// Ends the session, returning the final inventory and the output sink.
    pub fn into_parts(self) -> (Inventory, W) {
        (self.inventory, self.console.into_writer())
    }
}
