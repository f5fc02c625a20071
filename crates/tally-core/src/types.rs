//! # Domain Types
//!
//! Core domain types for the aggregation pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐    │
//! │  │      Item       │   │     Buyer       │   │  Transaction    │    │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │    │
//! │  │  name (unique)  │   │  name (unique)  │   │  item_name ────────┐ │
//! │  │  category       │   │  tier           │◄──── buyer_name      │ │ │
//! │  │  prices[tier]   │◄──────────────────────── quantity          │ │ │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘ │ │
//! │          ▲                                                       │ │
//! │          └───────────────────────────────────────────────────────┘ │
//! │                                                                     │
//! │  Transactions reference items and buyers by NAME, not ownership.    │
//! │  Resolution happens at fold time; a name that resolves to nothing   │
//! │  makes the transaction a skip, never an error.                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All three records are constructed once from input and never mutated.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::REGULAR_TIER;

// =============================================================================
// Price Entry
// =============================================================================

/// A single tier-priced entry on an item's price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Buyer tier this price applies to (e.g. `"regular"`, `"VIP"`).
    pub tier: String,
    /// Unit price for that tier.
    pub price: Money,
}

impl PriceEntry {
    /// Creates a price entry for a tier.
    pub fn new(tier: impl Into<String>, price: i64) -> Self {
        PriceEntry {
            tier: tier.into(),
            price: Money::from_units(price),
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A catalog item with a tier-keyed price list.
///
/// ## Invariants
/// - `name` is unique across the catalog and non-empty
/// - `prices` contains a `"regular"` entry (the fallback price)
///
/// Both are enforced by [`crate::validation::validate_inputs`] before any
/// transaction is folded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name; the key transactions resolve against.
    pub name: String,

    /// Grouping label used for revenue aggregation.
    pub category: String,

    /// Price list keyed by buyer tier.
    pub prices: Vec<PriceEntry>,
}

impl Item {
    /// Creates an item from a name, category, and price list.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        prices: Vec<PriceEntry>,
    ) -> Self {
        Item {
            name: name.into(),
            category: category.into(),
            prices,
        }
    }

    /// Resolves the unit price for a buyer tier.
    ///
    /// ## Resolution Rules
    /// Two-step lookup, in order:
    /// 1. the entry whose tier matches `tier` exactly
    /// 2. else the `"regular"` entry
    ///
    /// Returns `None` only when neither exists — a state validation rules
    /// out for any catalog that passed it.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::types::{Item, PriceEntry};
    ///
    /// let item = Item::new(
    ///     "square hat",
    ///     "hats",
    ///     vec![
    ///         PriceEntry::new("regular", 30_000),
    ///         PriceEntry::new("VIP", 20_000),
    ///     ],
    /// );
    ///
    /// assert_eq!(item.price_for("VIP").unwrap().units(), 20_000);
    /// // No wholesale entry: falls back to regular
    /// assert_eq!(item.price_for("wholesale").unwrap().units(), 30_000);
    /// ```
    pub fn price_for(&self, tier: &str) -> Option<Money> {
        self.prices
            .iter()
            .find(|entry| entry.tier == tier)
            .or_else(|| self.prices.iter().find(|entry| entry.tier == REGULAR_TIER))
            .map(|entry| entry.price)
    }

    /// Checks whether the item carries a `"regular"` price entry.
    pub fn has_regular_price(&self) -> bool {
        self.prices.iter().any(|entry| entry.tier == REGULAR_TIER)
    }
}

// =============================================================================
// Buyer
// =============================================================================

/// A roster entry pairing a buyer name with a pricing tier.
///
/// ## Invariants
/// - `name` is unique across the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buyer {
    /// Buyer name; the key transactions resolve against.
    pub name: String,

    /// Pricing tier used for price resolution (e.g. `"regular"`, `"VIP"`).
    pub tier: String,
}

impl Buyer {
    /// Creates a buyer from a name and tier.
    pub fn new(name: impl Into<String>, tier: impl Into<String>) -> Self {
        Buyer {
            name: name.into(),
            tier: tier.into(),
        }
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// A purchase record referencing an item and a buyer by name.
///
/// The references are weak: they are resolved by exact name lookup at fold
/// time, and a transaction whose item or buyer does not resolve is skipped
/// silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Name of the purchased item.
    pub item_name: String,

    /// Quantity purchased. Non-positive quantities are fold-time skips.
    pub quantity: i64,

    /// Name of the purchasing buyer.
    pub buyer_name: String,
}

impl Transaction {
    /// Creates a transaction record.
    pub fn new(item_name: impl Into<String>, quantity: i64, buyer_name: impl Into<String>) -> Self {
        Transaction {
            item_name: item_name.into(),
            quantity,
            buyer_name: buyer_name.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn square_hat() -> Item {
        Item::new(
            "square hat",
            "hats",
            vec![
                PriceEntry::new("regular", 30_000),
                PriceEntry::new("VIP", 20_000),
                PriceEntry::new("wholesale", 15_000),
            ],
        )
    }

    #[test]
    fn test_price_for_exact_tier() {
        let item = square_hat();
        assert_eq!(item.price_for("VIP"), Some(Money::from_units(20_000)));
        assert_eq!(item.price_for("wholesale"), Some(Money::from_units(15_000)));
        assert_eq!(item.price_for("regular"), Some(Money::from_units(30_000)));
    }

    #[test]
    fn test_price_for_falls_back_to_regular() {
        let item = square_hat();
        // Unknown tier resolves to the regular price
        assert_eq!(item.price_for("staff"), Some(Money::from_units(30_000)));
    }

    #[test]
    fn test_price_for_without_regular_entry() {
        let item = Item::new("mystery", "misc", vec![PriceEntry::new("VIP", 9_000)]);
        assert_eq!(item.price_for("VIP"), Some(Money::from_units(9_000)));
        assert_eq!(item.price_for("wholesale"), None);
    }

    #[test]
    fn test_has_regular_price() {
        assert!(square_hat().has_regular_price());

        let vip_only = Item::new("mystery", "misc", vec![PriceEntry::new("VIP", 9_000)]);
        assert!(!vip_only.has_regular_price());
    }

    #[test]
    fn test_transaction_serde_field_names() {
        let tx = Transaction::new("square hat", 2, "Budi");
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "itemName": "square hat",
                "quantity": 2,
                "buyerName": "Budi",
            })
        );
    }
}
