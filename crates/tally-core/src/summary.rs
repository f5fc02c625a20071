//! # Summary Module
//!
//! Derives the final point-of-sale summary from a completed fold.
//!
//! Derivation is a pure function of the catalog and the aggregates; the
//! aggregates are borrowed immutably and a fresh [`Summary`] is produced
//! per run. Every ranking is deterministic:
//!
//! - best-sellers take the strictly greatest value, first-encountered
//!   entry winning ties (aggregate maps iterate in first-insertion order)
//! - spenders are ranked with a stable sort, so equal spenders keep their
//!   first-purchase order
//!
//! The serialized field names (`totalTransaction`, `salesCount`, `rpc`,
//! `bestSpenders[].type`, …) are the report's wire format and are pinned
//! by tests.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregates;
use crate::money::Money;
use crate::types::Item;
use crate::TOP_SPENDER_LIMIT;

// =============================================================================
// Summary Records
// =============================================================================

/// The item with the greatest accumulated sales quantity.
///
/// `{ name: "", salesCount: 0 }` when no sales were folded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestSellingItem {
    pub name: String,
    pub sales_count: i64,
}

/// The category with the greatest accumulated revenue.
///
/// `{ name: "", revenue: 0 }` when no sales were folded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestSellingCategory {
    pub name: String,
    pub revenue: Money,
}

/// One row of the per-category revenue list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: Money,
}

/// One row of the top-spenders ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopSpender {
    pub name: String,
    /// Buyer tier; serialized as `type` in the report.
    #[serde(rename = "type")]
    pub tier: String,
    pub spent: Money,
}

/// The derived report over one completed aggregation run.
///
/// Read-only once derived; a new run produces a new summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Count of transactions that resolved and were folded.
    pub total_transaction: u64,
    /// Item with the strictly greatest sales quantity.
    pub best_selling_item: BestSellingItem,
    /// Category with the strictly greatest revenue.
    pub best_selling_category: BestSellingCategory,
    /// Revenue per catalog category, in catalog first-seen order.
    /// Categories without sales appear with zero revenue.
    pub rpc: Vec<CategoryRevenue>,
    /// Total revenue across all categories.
    pub revenue: Money,
    /// Up to three buyers, descending by spend.
    pub best_spenders: Vec<TopSpender>,
}

// =============================================================================
// Derivation
// =============================================================================

/// Derives the [`Summary`] for a completed fold.
///
/// The catalog is consulted only for the `rpc` category list, which covers
/// every category the catalog declares (not just those with sales), in
/// first-seen order over the catalog.
pub fn derive_summary(items: &[Item], aggregates: &Aggregates) -> Summary {
    // Best-selling item: strictly greatest quantity, first entry wins ties.
    let mut best_selling_item = BestSellingItem {
        name: String::new(),
        sales_count: 0,
    };
    for (name, &sales_count) in aggregates.sales_count_by_item.iter() {
        if sales_count > best_selling_item.sales_count {
            best_selling_item = BestSellingItem {
                name: name.to_owned(),
                sales_count,
            };
        }
    }

    // Best-selling category: strictly greatest revenue, same tie-break.
    let mut best_selling_category = BestSellingCategory {
        name: String::new(),
        revenue: Money::zero(),
    };
    for (name, &revenue) in aggregates.revenue_by_category.iter() {
        if revenue > best_selling_category.revenue {
            best_selling_category = BestSellingCategory {
                name: name.to_owned(),
                revenue,
            };
        }
    }

    // Category list from the catalog, first-seen order, zero-filled.
    let mut seen = HashSet::new();
    let mut rpc = Vec::new();
    for item in items {
        if seen.insert(item.category.as_str()) {
            let revenue = aggregates
                .revenue_by_category
                .get(&item.category)
                .copied()
                .unwrap_or_else(Money::zero);
            rpc.push(CategoryRevenue {
                category: item.category.clone(),
                revenue,
            });
        }
    }

    // Top spenders: stable descending sort keeps first-purchase order for
    // equal spends, then truncate to the ranking limit.
    let mut best_spenders: Vec<TopSpender> = aggregates
        .spending_by_buyer
        .iter()
        .map(|(name, spending)| TopSpender {
            name: name.to_owned(),
            tier: spending.tier.clone(),
            spent: spending.spent,
        })
        .collect();
    best_spenders.sort_by(|a, b| b.spent.cmp(&a.spent));
    best_spenders.truncate(TOP_SPENDER_LIMIT);

    Summary {
        total_transaction: aggregates.transaction_count,
        best_selling_item,
        best_selling_category,
        rpc,
        revenue: aggregates.total_revenue(),
        best_spenders,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
