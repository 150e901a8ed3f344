//! # Main Menu
//!
//! ```text
//! MENU
//! 1. Add new item
//! 2. Sell item
//! 3. List items
//! 4. Exit
//! ```

use std::str::FromStr;

use crate::error::ConsoleError;

/// Menu text shown before every choice prompt.
pub const MENU: &str = "\n\nMENU\n1. Add new item\n2. Sell item\n3. List items\n4. Exit\n\nEnter your choice: ";

/// A recognised menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddItem,
    SellItem,
    ListItems,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ConsoleError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().parse::<i64>() {
            Ok(1) => Ok(MenuChoice::AddItem),
            Ok(2) => Ok(MenuChoice::SellItem),
            Ok(3) => Ok(MenuChoice::ListItems),
            Ok(4) => Ok(MenuChoice::Exit),
            _ => Err(ConsoleError::InvalidMenuChoice(input.to_string())),
        }
    }
}

/// What the session loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}
