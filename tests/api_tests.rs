// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use grosz::api::live_rows;
use grosz::models::{Transaction, TxKind};
use rust_decimal::Decimal;

fn tx(id: &str, is_deleted: bool) -> Transaction {
    Transaction {
        id: id.into(),
        org_id: "org1".into(),
        user_id: "u1".into(),
        kind: TxKind::Expense,
        amount: Decimal::from(10),
        category_id: "c1".into(),
        product_id: "p1".into(),
        note: None,
        quantity: None,
        created_at: Utc::now(),
        is_deleted,
        deleted_at: if is_deleted { Some(Utc::now()) } else { None },
        purchase_date: None,
    }
}

fn ids(rows: &[Transaction]) -> Vec<&str> {
    rows.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn soft_deleted_rows_are_dropped() {
    let raw = vec![tx("a", false), tx("b", true), tx("c", false)];
    let live = live_rows(raw, None);
    assert_eq!(ids(&live), vec!["a", "c"]);
    assert!(live.iter().all(|t| !t.is_deleted));
}

#[test]
fn deletion_filter_runs_before_truncation() {
    // With filtering first, the limit window slides past deleted rows
    // instead of being eaten by them.
    let raw = vec![
        tx("a", false),
        tx("b", true),
        tx("c", false),
        tx("d", true),
        tx("e", false),
        tx("f", false),
    ];
    let live = live_rows(raw, Some(3));
    assert_eq!(ids(&live), vec!["a", "c", "e"]);
}

#[test]
fn page_may_come_back_short_of_limit() {
    // Two of four raw rows are deleted, so the server's page cannot fill
    // the requested limit even though it returned enough raw rows.
    let raw = vec![tx("a", false), tx("b", true), tx("c", true), tx("d", false)];
    let live = live_rows(raw, Some(3));
    assert_eq!(live.len(), 2);
}

#[test]
fn no_limit_passes_all_live_rows_through() {
    let raw = vec![tx("a", false), tx("b", false), tx("c", true)];
    assert_eq!(live_rows(raw, None).len(), 2);
}
