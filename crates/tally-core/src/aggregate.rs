//! # Aggregation Module
//!
//! Folds the transaction log into running aggregates.
//!
//! ## Fold Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Transaction Folding                            │
//! │                                                                     │
//! │  for each transaction (in input order):                             │
//! │       │                                                             │
//! │       ├── quantity <= 0? ──────────────► skip (debug log)           │
//! │       ├── item name unresolved? ───────► skip (debug log)           │
//! │       ├── buyer name unresolved? ──────► skip (debug log)           │
//! │       ├── no price for tier/regular? ──► skip (debug log)           │
//! │       │                                                             │
//! │       └── line_revenue = unit_price × quantity                      │
//! │               │                                                     │
//! │               ├── transaction_count += 1                            │
//! │               ├── sales_count_by_item[item] += quantity             │
//! │               ├── revenue_by_category[category] += line_revenue     │
//! │               └── spending_by_buyer[buyer].spent += line_revenue    │
//! │                                                                     │
//! │  Skips are SILENT at the API level: not counted, not returned.      │
//! │  This is a deliberate simplification of the design, preserved       │
//! │  as-is and pinned by tests.                                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Aggregates are created empty at the start of a run and mutated only
//! here; no state carries across runs.

use std::collections::HashMap;

use tracing::debug;

use crate::money::Money;
use crate::ordered::OrderedMap;
use crate::types::{Buyer, Item, Transaction};

// =============================================================================
// Aggregate State
// =============================================================================

/// Accumulated spending for one buyer.
#[derive(Debug, Clone, PartialEq)]
pub struct BuyerSpending {
    /// Total spent across the buyer's resolved transactions.
    pub spent: Money,
    /// Buyer tier, captured when the buyer's first transaction lands and
    /// never re-derived afterward (tiers are stable for a run).
    pub tier: String,
}

/// The four running aggregates a fold produces.
///
/// Owned exclusively by the pipeline for the duration of a run; derive a
/// [`crate::summary::Summary`] from them once folding completes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    /// Count of transactions that resolved and were folded.
    pub transaction_count: u64,
    /// Accumulated revenue per item category, in first-sale order.
    pub revenue_by_category: OrderedMap<Money>,
    /// Accumulated spending per buyer, in first-purchase order.
    pub spending_by_buyer: OrderedMap<BuyerSpending>,
    /// Accumulated quantity sold per item, in first-sale order.
    pub sales_count_by_item: OrderedMap<i64>,
}

impl Aggregates {
    /// Creates empty aggregates for a fresh run.
    pub fn new() -> Self {
        Aggregates::default()
    }

    /// Sums per-category revenue into the run's total revenue.
    pub fn total_revenue(&self) -> Money {
        self.revenue_by_category.values().copied().sum()
    }
}

// =============================================================================
// Transaction Folding
// =============================================================================

/// Folds a transaction log into fresh [`Aggregates`].
///
/// Transactions are processed in input order. A transaction contributes to
/// every aggregate or to none: the count, the item sales count, the
/// category revenue, and the buyer spending move together.
///
/// ## Skip Policy
/// A transaction is skipped — without error, counter increment, or any
/// caller-visible signal — when:
/// - its quantity is zero or negative
/// - its item or buyer name resolves to nothing
/// - no unit price resolves for the buyer's tier nor the `"regular"`
///   fallback (unreachable for validated catalogs)
///
/// Each skip emits a `tracing` debug event for diagnosis.
pub fn fold_transactions(
    items: &[Item],
    buyers: &[Buyer],
    transactions: &[Transaction],
) -> Aggregates {
    // Name → record lookup tables. Validation guarantees unique names.
    let catalog: HashMap<&str, &Item> = items.iter().map(|i| (i.name.as_str(), i)).collect();
    let roster: HashMap<&str, &Buyer> = buyers.iter().map(|b| (b.name.as_str(), b)).collect();

    let mut aggregates = Aggregates::new();

    for tx in transactions {
        if tx.quantity <= 0 {
            debug!(
                item = %tx.item_name,
                quantity = tx.quantity,
                "skipping transaction with non-positive quantity"
            );
            continue;
        }

        let Some(item) = catalog.get(tx.item_name.as_str()) else {
            debug!(item = %tx.item_name, "skipping transaction with unknown item");
            continue;
        };

        let Some(buyer) = roster.get(tx.buyer_name.as_str()) else {
            debug!(buyer = %tx.buyer_name, "skipping transaction with unknown buyer");
            continue;
        };

        let Some(unit_price) = item.price_for(&buyer.tier) else {
            debug!(
                item = %tx.item_name,
                tier = %buyer.tier,
                "skipping transaction with unresolvable price"
            );
            continue;
        };

        let line_revenue = unit_price.multiply_quantity(tx.quantity);

        aggregates.transaction_count += 1;

        *aggregates
            .sales_count_by_item
            .get_or_insert_with(&tx.item_name, || 0) += tx.quantity;

        *aggregates
            .revenue_by_category
            .get_or_insert_with(&item.category, Money::zero) += line_revenue;

        let spending = aggregates
            .spending_by_buyer
            .get_or_insert_with(&tx.buyer_name, || BuyerSpending {
                spent: Money::zero(),
                tier: buyer.tier.clone(),
            });
        spending.spent += line_revenue;
    }

    aggregates
}

// =============================================================================
// Unit Tests
// =============================================================================
