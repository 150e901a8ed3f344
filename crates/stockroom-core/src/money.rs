//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A running revenue total drifts a little with every sale.              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "2.50" typed at the prompt → 250 cents                              │
//! │    250 cents × 4 sold         → 1000 cents, exactly                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(250); // $2.50
//!
//! // Or parse what the operator typed
//! let typed: Money = "2.5".parse().unwrap();
//! assert_eq!(typed, price);
//!
//! // Revenue for a sale (None on overflow)
//! assert_eq!(price.checked_multiply_quantity(4).unwrap().cents(), 1000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MoneyError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Prices are not validated on add, so negative values
///   must be representable
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Transparent serde**: Serializes as a bare integer of cents
///
/// ## Where Money is Used
/// ```text
/// StockEntry.unit_price ──► × quantity sold ──► SaleReceipt.revenue
///                                                      │
///                                                      ▼
///                                          Inventory.total_revenue
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).cents_part(), 99);
    /// assert_eq!(Money::from_cents(-550).cents_part(), 50); // Absolute value
    /// ```
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, `None` if the result leaves the i64
    /// cent range.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(250); // $2.50
    /// let revenue = unit_price.checked_multiply_quantity(6).unwrap();
    /// assert_eq!(revenue.cents(), 1500); // $15.00
    ///
    /// assert!(unit_price.checked_multiply_quantity(i64::MAX).is_none());
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Entry: apple $2.50
    /// Sell: 6
    ///      │
    ///      ▼
    /// checked_multiply_quantity(6) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Money received: $15.00
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Formats as `{sign}{symbol}{major}.{minor:02}`.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-1234).format_with_symbol("€"), "-€12.34");
    /// ```
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!(
            "{}{}{}.{:02}",
            if self.is_negative() { "-" } else { "" },
            symbol,
            self.dollars().unsigned_abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text typed by the operator.
///
/// ## Accepted Forms
/// - `10`, `10.5`, `10.50`, `.5`, `10.`
/// - An optional leading `+` or `-`
/// - Surrounding whitespace is ignored
///
/// At most two fractional digits are accepted; the value is never routed
/// through a float.
///
/// ## Example
/// ```rust
/// use stockroom_core::money::Money;
///
/// assert_eq!("2.50".parse::<Money>().unwrap().cents(), 250);
/// assert_eq!("-1.2".parse::<Money>().unwrap().cents(), -120);
/// assert!("1.999".parse::<Money>().is_err());
/// ```
impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MoneyError::Empty);
        }

        let invalid = || MoneyError::InvalidFormat {
            input: trimmed.to_string(),
        };

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (major, minor) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if major.is_empty() && minor.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(major) || !all_digits(minor) {
            return Err(invalid());
        }
        if minor.len() > 2 {
            return Err(MoneyError::TooManyDecimals {
                input: trimmed.to_string(),
            });
        }

        let out_of_range = || MoneyError::OutOfRange {
            input: trimmed.to_string(),
        };

        // Digits only at this point, so a parse failure means overflow
        let major_value: i64 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| out_of_range())?
        };
        // Right-pad so "5" reads as 50 cents
        let minor_value: i64 = format!("{minor:0<2}")
            .parse()
            .map_err(|_| invalid())?;

        let cents = major_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor_value))
            .ok_or_else(out_of_range)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This always uses `$`. The console goes through
/// [`Money::format_with_symbol`] with its configured symbol instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
