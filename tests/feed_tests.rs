// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use grosz::feed::{PAGE_SIZE, TransactionFeed};
use grosz::models::{EnrichedTransaction, Transaction, TxKind};
use rust_decimal::Decimal;

fn row(n: usize) -> EnrichedTransaction {
    EnrichedTransaction {
        tx: Transaction {
            id: format!("t{}", n),
            org_id: "org1".into(),
            user_id: "u1".into(),
            kind: TxKind::Expense,
            amount: Decimal::from(1),
            category_id: "c1".into(),
            product_id: "p1".into(),
            note: None,
            quantity: None,
            created_at: Utc::now(),
            is_deleted: false,
            deleted_at: None,
            purchase_date: None,
        },
        category_name: "Food".into(),
        product_name: "Bread".into(),
    }
}

fn dataset(n: usize) -> Vec<EnrichedTransaction> {
    (0..n).map(row).collect()
}

fn source_over(
    data: Vec<EnrichedTransaction>,
) -> impl FnMut(usize, usize) -> anyhow::Result<Vec<EnrichedTransaction>> {
    move |skip, limit| Ok(data.iter().skip(skip).take(limit).cloned().collect())
}

#[test]
fn reset_loads_first_page() {
    let mut feed = TransactionFeed::new();
    feed.reset(source_over(dataset(25))).unwrap();
    assert_eq!(feed.displayed().len(), PAGE_SIZE);
    assert_eq!(feed.skip(), 0);
    assert!(feed.has_more());
}

#[test]
fn three_pages_accumulate_without_duplicates() {
    let mut source = source_over(dataset(31));
    let mut feed = TransactionFeed::new();
    feed.reset(&mut source).unwrap();
    feed.load_more(&mut source).unwrap();
    feed.load_more(&mut source).unwrap();

    assert_eq!(feed.displayed().len(), 3 * PAGE_SIZE);
    assert!(feed.has_more());

    let mut ids: Vec<&str> = feed.displayed().iter().map(|e| e.tx.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3 * PAGE_SIZE);
}

#[test]
fn exact_multiple_ends_cleanly() {
    let mut source = source_over(dataset(3 * PAGE_SIZE));
    let mut feed = TransactionFeed::new();
    feed.reset(&mut source).unwrap();
    feed.load_more(&mut source).unwrap();
    feed.load_more(&mut source).unwrap();

    assert_eq!(feed.displayed().len(), 3 * PAGE_SIZE);
    // The probe row past the third page does not exist, so the end of data
    // is known without a fourth fetch.
    assert!(!feed.has_more());
}

#[test]
fn short_last_page_ends_feed() {
    let mut source = source_over(dataset(13));
    let mut feed = TransactionFeed::new();
    feed.reset(&mut source).unwrap();
    assert!(feed.has_more());
    feed.load_more(&mut source).unwrap();
    assert_eq!(feed.displayed().len(), 13);
    assert!(!feed.has_more());
}

#[test]
fn empty_range_shows_nothing() {
    let mut feed = TransactionFeed::new();
    feed.reset(source_over(dataset(0))).unwrap();
    assert!(feed.displayed().is_empty());
    assert!(!feed.has_more());
}

#[test]
fn reset_clears_accumulated_window() {
    let mut source = source_over(dataset(30));
    let mut feed = TransactionFeed::new();
    feed.reset(&mut source).unwrap();
    feed.load_more(&mut source).unwrap();
    assert_eq!(feed.displayed().len(), 2 * PAGE_SIZE);

    feed.reset(&mut source).unwrap();
    assert_eq!(feed.displayed().len(), PAGE_SIZE);
    assert_eq!(feed.skip(), 0);
}

#[test]
fn shrinking_backend_set_never_duplicates_shown_rows() {
    let mut data = dataset(25);
    let mut feed = TransactionFeed::new();
    feed.reset(source_over(data.clone())).unwrap();

    // A row already shown disappears between pages; the skip offset still
    // advances, so rows may be missed but never repeated.
    data.remove(3);
    feed.load_more(source_over(data.clone())).unwrap();
    feed.load_more(source_over(data)).unwrap();

    let mut ids: Vec<&str> = feed.displayed().iter().map(|e| e.tx.id.as_str()).collect();
    let before = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

#[test]
fn fetch_error_propagates() {
    let mut feed = TransactionFeed::new();
    let result = feed.reset(
        |_: usize, _: usize| -> anyhow::Result<Vec<EnrichedTransaction>> {
            anyhow::bail!("backend unavailable")
        },
    );
    assert!(result.is_err());
    assert!(feed.displayed().is_empty());
}
