//! # tally-core: Pure Aggregation Logic for Tally POS
//!
//! This crate is the **heart** of Tally POS. It contains the whole
//! aggregation pipeline as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Tally POS Architecture                        │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  apps/report (CLI)                            │  │
//! │  │   dataset loading ──► pipeline ──► JSON output                │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │               ★ tally-core (THIS CRATE) ★                     │  │
//! │  │                                                               │  │
//! │  │   ┌──────────┐ ┌──────────┐ ┌───────────┐ ┌─────────────┐     │  │
//! │  │   │  types   │ │  money   │ │ validation│ │  aggregate  │     │  │
//! │  │   │  Item    │ │  Money   │ │   rules   │ │    fold     │     │  │
//! │  │   │  Buyer   │ │          │ │           │ │             │     │  │
//! │  │   │  Txn     │ │          │ │           │ │             │     │  │
//! │  │   └──────────┘ └──────────┘ └───────────┘ └─────────────┘     │  │
//! │  │                                  ┌─────────┐ ┌──────────┐     │  │
//! │  │                                  │ ordered │ │ summary  │     │  │
//! │  │                                  │   map   │ │  derive  │     │  │
//! │  │                                  └─────────┘ └──────────┘     │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS          │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain records (Item, Buyer, Transaction)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error taxonomy
//! - [`validation`] - Catalog/roster validation rules
//! - [`ordered`] - Insertion-ordered map backing the aggregates
//! - [`aggregate`] - Transaction folding into running aggregates
//! - [`summary`] - Summary derivation and output records
//!
//! ## Pipeline
//!
//! `validate → fold → derive`, all-or-nothing and single-threaded. A run
//! starts from fresh aggregates; nothing carries across runs, so repeat
//! runs over identical input produce byte-identical serialized summaries.
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::types::{Buyer, Item, PriceEntry, Transaction};
//!
//! let items = vec![Item::new(
//!     "oval hat",
//!     "hats",
//!     vec![
//!         PriceEntry::new("regular", 20_000),
//!         PriceEntry::new("VIP", 15_000),
//!     ],
//! )];
//! let buyers = vec![Buyer::new("Budi", "VIP")];
//! let transactions = vec![Transaction::new("oval hat", 2, "Budi")];
//!
//! let summary = tally_core::summarize(&items, &buyers, &transactions)?;
//!
//! assert_eq!(summary.total_transaction, 1);
//! assert_eq!(summary.revenue.units(), 30_000); // VIP price × 2
//! # Ok::<(), tally_core::ValidationError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregate;
pub mod error;
pub mod money;
pub mod ordered;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`

pub use aggregate::{fold_transactions, Aggregates, BuyerSpending};
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use ordered::OrderedMap;
pub use summary::{derive_summary, Summary};
pub use types::{Buyer, Item, PriceEntry, Transaction};
pub use validation::validate_inputs;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The tier every item must price: the fallback when a buyer's tier has
/// no dedicated entry.
pub const REGULAR_TIER: &str = "regular";

/// Number of buyers the summary's spender ranking keeps.
pub const TOP_SPENDER_LIMIT: usize = 3;

// =============================================================================
// Pipeline Entry Point
// =============================================================================

/// Runs the full aggregation pipeline: validate → fold → derive.
///
/// Validation failures abort the run before any transaction is folded.
/// Once validation passes the run is total: fold-time anomalies are
/// skipped per the fold's skip policy, and a [`Summary`] is always
/// produced.
///
/// ## Errors
///
/// - [`ValidationError::MissingRegularPrice`] - an item lacks a `"regular"` price
/// - [`ValidationError::DuplicateItem`] - two items share a name
/// - [`ValidationError::DuplicateBuyer`] - two buyers share a name
pub fn summarize(
    items: &[Item],
    buyers: &[Buyer],
    transactions: &[Transaction],
) -> ValidationResult<Summary> {
    validate_inputs(items, buyers)?;
    let aggregates = fold_transactions(items, buyers, transactions);
    Ok(derive_summary(items, &aggregates))
}
