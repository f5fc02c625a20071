//! # Validation Module
//!
//! Catalog and roster validation for the aggregation pipeline.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Pipeline Gatekeeping                           │
//! │                                                                     │
//! │  validate_inputs(catalog, roster)                                   │
//! │       │                                                             │
//! │       ├── 1. every item has a "regular" price entry                 │
//! │       ├── 2. no two items share a name                              │
//! │       └── 3. no two buyers share a name                             │
//! │                                                                     │
//! │  Checks run in order and stop at the FIRST violation; a failure     │
//! │  means the fold must not run.                                       │
//! │                                                                     │
//! │  Transactions are NOT validated here. Unresolvable references and   │
//! │  non-positive quantities are skipped silently during folding — a    │
//! │  documented gap of the design, not a guarantee.                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::{ValidationError, ValidationResult};
use crate::types::{Buyer, Item};

// =============================================================================
// Pipeline Entry
// =============================================================================

/// Validates the item catalog and buyer roster.
///
/// Pass/fail with no partial results: the first violation found is
/// returned and later checks do not run.
///
/// ## Example
/// ```rust
/// use tally_core::types::{Buyer, Item, PriceEntry};
/// use tally_core::validation::validate_inputs;
///
/// let items = vec![Item::new(
///     "oval hat",
///     "hats",
///     vec![PriceEntry::new("regular", 20_000)],
/// )];
/// let buyers = vec![Buyer::new("Ani", "regular")];
///
/// assert!(validate_inputs(&items, &buyers).is_ok());
/// ```
pub fn validate_inputs(items: &[Item], buyers: &[Buyer]) -> ValidationResult<()> {
    check_regular_prices(items)?;
    check_duplicate_items(items)?;
    check_duplicate_buyers(buyers)?;
    Ok(())
}

// =============================================================================
// Individual Checks
// =============================================================================

/// Checks that every item carries a `"regular"` price entry.
///
/// ## Rules
/// - The regular price is the fold's fallback when a buyer's tier has no
///   dedicated entry; an item without one can produce unpriceable lines.
fn check_regular_prices(items: &[Item]) -> ValidationResult<()> {
    for item in items {
        if !item.has_regular_price() {
            return Err(ValidationError::MissingRegularPrice {
                item: item.name.clone(),
            });
        }
    }
    Ok(())
}

/// Checks that no two items share a name.
///
/// ## Rules
/// - Item names are the keys transactions resolve against; a duplicate
///   would make resolution ambiguous.
fn check_duplicate_items(items: &[Item]) -> ValidationResult<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.name.as_str()) {
            return Err(ValidationError::DuplicateItem {
                item: item.name.clone(),
            });
        }
    }
    Ok(())
}

/// Checks that no two buyers share a name.
fn check_duplicate_buyers(buyers: &[Buyer]) -> ValidationResult<()> {
    let mut seen = HashSet::new();
    for buyer in buyers {
        if !seen.insert(buyer.name.as_str()) {
            return Err(ValidationError::DuplicateBuyer {
                buyer: buyer.name.clone(),
            });
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PriceEntry;

    fn priced_item(name: &str) -> Item {
        Item::new(name, "hats", vec![PriceEntry::new("regular", 20_000)])
    }

    #[test]
    fn test_valid_inputs_pass() {
        let items = vec![priced_item("oval hat"), priced_item("square hat")];
        let buyers = vec![Buyer::new("Ani", "regular"), Buyer::new("Budi", "VIP")];

        assert!(validate_inputs(&items, &buyers).is_ok());
    }

    #[test]
    fn test_empty_inputs_pass() {
        assert!(validate_inputs(&[], &[]).is_ok());
    }

    #[test]
    fn test_missing_regular_price_fails() {
        let items = vec![Item::new(
            "magic shirt",
            "tops",
            vec![PriceEntry::new("VIP", 40_000)],
        )];

        let err = validate_inputs(&items, &[]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingRegularPrice {
                item: "magic shirt".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_item_fails() {
        let items = vec![priced_item("oval hat"), priced_item("oval hat")];

        let err = validate_inputs(&items, &[]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateItem {
                item: "oval hat".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_buyer_fails() {
        let items = vec![priced_item("oval hat")];
        let buyers = vec![Buyer::new("Ani", "regular"), Buyer::new("Ani", "VIP")];

        let err = validate_inputs(&items, &buyers).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateBuyer {
                buyer: "Ani".to_string()
            }
        );
    }

    #[test]
    fn test_check_order_reports_missing_regular_first() {
        // One catalog violating all three rules: the regular-price check
        // runs first, so its failure wins.
        let items = vec![
            Item::new("magic shirt", "tops", vec![PriceEntry::new("VIP", 40_000)]),
            priced_item("oval hat"),
            priced_item("oval hat"),
        ];
        let buyers = vec![Buyer::new("Ani", "regular"), Buyer::new("Ani", "VIP")];

        let err = validate_inputs(&items, &buyers).unwrap_err();
        assert!(matches!(err, ValidationError::MissingRegularPrice { .. }));
    }

    #[test]
    fn test_first_duplicate_is_reported() {
        let items = vec![
            priced_item("oval hat"),
            priced_item("square hat"),
            priced_item("oval hat"),
            priced_item("square hat"),
        ];

        let err = validate_inputs(&items, &[]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateItem {
                item: "oval hat".to_string()
            }
        );
    }
}
