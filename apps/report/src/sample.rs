//! # Sample Dataset
//!
//! The built-in hat-shop dataset used when no `--input` file is given.
//!
//! Three items across two categories, four buyers across three tiers, and
//! five transactions that exercise tier pricing (Budi's VIP square hats),
//! the regular-price fallback (Ani has no dedicated tier entries), and a
//! wholesale bulk purchase (Dipta's hundred square hats).

use tally_core::{Buyer, Item, PriceEntry, Transaction};

use crate::Dataset;

/// Builds the sample dataset.
pub fn dataset() -> Dataset {
    let items = vec![
        Item::new(
            "oval hat",
            "hats",
            vec![
                PriceEntry::new("regular", 20_000),
                PriceEntry::new("VIP", 15_000),
            ],
        ),
        Item::new(
            "square hat",
            "hats",
            vec![
                PriceEntry::new("regular", 30_000),
                PriceEntry::new("VIP", 20_000),
                PriceEntry::new("wholesale", 15_000),
            ],
        ),
        Item::new(
            "magic shirt",
            "tops",
            vec![PriceEntry::new("regular", 50_000)],
        ),
    ];

    let buyers = vec![
        Buyer::new("Ani", "regular"),
        Buyer::new("Budi", "VIP"),
        Buyer::new("Charlie", "regular"),
        Buyer::new("Dipta", "wholesale"),
    ];

    let transactions = vec![
        Transaction::new("magic shirt", 1, "Ani"),
        Transaction::new("square hat", 2, "Budi"),
        Transaction::new("magic shirt", 1, "Ani"),
        Transaction::new("oval hat", 1, "Ani"),
        Transaction::new("square hat", 100, "Dipta"),
    ];

    Dataset {
        items,
        buyers,
        transactions,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
