//! Pipeline public API integration tests.

use tally_core::{
    summarize, Buyer, Item, Money, PriceEntry, Transaction, ValidationError,
};

/// The hat-shop dataset: three items over two categories, four buyers
/// across three tiers, five transactions exercising tier pricing and the
/// regular-price fallback.
fn shop_items() -> Vec<Item> {
    vec![
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
    ]
}

fn shop_buyers() -> Vec<Buyer> {
    vec![
        Buyer::new("Ani", "regular"),
        Buyer::new("Budi", "VIP"),
        Buyer::new("Charlie", "regular"),
        Buyer::new("Dipta", "wholesale"),
    ]
}

fn shop_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new("magic shirt", 1, "Ani"),
        Transaction::new("square hat", 2, "Budi"),
        Transaction::new("magic shirt", 1, "Ani"),
        Transaction::new("oval hat", 1, "Ani"),
        Transaction::new("square hat", 100, "Dipta"),
    ]
}

#[test]
fn hat_shop_summary_figures() {
    let summary = summarize(&shop_items(), &shop_buyers(), &shop_transactions()).unwrap();

    assert_eq!(summary.total_transaction, 5);

    // square hat: 2 for Budi + 100 for Dipta
    assert_eq!(summary.best_selling_item.name, "square hat");
    assert_eq!(summary.best_selling_item.sales_count, 102);

    // hats: 40000 (VIP square hat ×2) + 20000 (regular oval hat)
    //       + 1500000 (wholesale square hat ×100)
    assert_eq!(summary.best_selling_category.name, "hats");
    assert_eq!(
        summary.best_selling_category.revenue,
        Money::from_units(1_560_000)
    );

    // Catalog first-seen order: hats before tops.
    let rpc: Vec<(&str, i64)> = summary
        .rpc
        .iter()
        .map(|r| (r.category.as_str(), r.revenue.units()))
        .collect();
    assert_eq!(rpc, vec![("hats", 1_560_000), ("tops", 100_000)]);

    assert_eq!(summary.revenue, Money::from_units(1_660_000));

    // Charlie bought nothing and must not appear.
    let spenders: Vec<(&str, &str, i64)> = summary
        .best_spenders
        .iter()
        .map(|s| (s.name.as_str(), s.tier.as_str(), s.spent.units()))
        .collect();
    assert_eq!(
        spenders,
        vec![
            ("Dipta", "wholesale", 1_500_000),
            ("Ani", "regular", 120_000),
            ("Budi", "VIP", 40_000),
        ]
    );
}

#[test]
fn total_revenue_equals_sum_of_rpc() {
    let summary = summarize(&shop_items(), &shop_buyers(), &shop_transactions()).unwrap();

    let rpc_sum: Money = summary.rpc.iter().map(|r| r.revenue).sum();
    assert_eq!(summary.revenue, rpc_sum);
}

#[test]
fn best_seller_dominates_every_item() {
    let items = shop_items();
    let aggregates =
        tally_core::fold_transactions(&items, &shop_buyers(), &shop_transactions());
    let summary = tally_core::derive_summary(&items, &aggregates);

    for (_, &count) in aggregates.sales_count_by_item.iter() {
        assert!(summary.best_selling_item.sales_count >= count);
    }
}

#[test]
fn repeat_runs_are_byte_identical() {
    let items = shop_items();
    let buyers = shop_buyers();
    let transactions = shop_transactions();

    let first = summarize(&items, &buyers, &transactions).unwrap();
    let second = summarize(&items, &buyers, &transactions).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn unresolved_transactions_fold_as_skips() {
    let mut transactions = shop_transactions();
    transactions.push(Transaction::new("bowler hat", 7, "Ani")); // unknown item
    transactions.push(Transaction::new("oval hat", 7, "Evan")); // unknown buyer
    transactions.push(Transaction::new("oval hat", 0, "Ani")); // zero quantity

    let summary = summarize(&shop_items(), &shop_buyers(), &transactions).unwrap();

    // The three malformed records change nothing.
    assert_eq!(summary.total_transaction, 5);
    assert_eq!(summary.revenue, Money::from_units(1_660_000));
}

#[test]
fn validation_failure_aborts_the_run() {
    let mut items = shop_items();
    items.push(Item::new(
        "ghost hat",
        "hats",
        vec![PriceEntry::new("VIP", 1_000)],
    ));

    let err = summarize(&items, &shop_buyers(), &shop_transactions()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingRegularPrice {
            item: "ghost hat".to_string()
        }
    );
}

#[test]
fn empty_dataset_summarizes_to_empty_report() {
    let summary = summarize(&[], &[], &[]).unwrap();

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "totalTransaction": 0,
            "bestSellingItem": { "name": "", "salesCount": 0 },
            "bestSellingCategory": { "name": "", "revenue": 0 },
            "rpc": [],
            "revenue": 0,
            "bestSpenders": [],
        })
    );
}
