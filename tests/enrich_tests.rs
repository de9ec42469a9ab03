// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use grosz::enrich::{UNKNOWN_NAME, enrich};
use grosz::models::{Category, Product, Transaction, TxKind};
use rust_decimal::Decimal;

fn tx(id: &str, category_id: &str, product_id: &str) -> Transaction {
    Transaction {
        id: id.into(),
        org_id: "org1".into(),
        user_id: "u1".into(),
        kind: TxKind::Expense,
        amount: Decimal::from(5),
        category_id: category_id.into(),
        product_id: product_id.into(),
        note: None,
        quantity: None,
        created_at: Utc::now(),
        is_deleted: false,
        deleted_at: None,
        purchase_date: None,
    }
}

fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.into(),
        name: name.into(),
        org_id: "org1".into(),
        created_at: Utc::now(),
        is_deleted: false,
        deleted_at: None,
        updated_at: None,
    }
}

fn product(id: &str, name: &str) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        org_id: "org1".into(),
        created_at: Utc::now(),
        is_deleted: false,
        deleted_at: None,
        updated_at: None,
        category_id: None,
    }
}

#[test]
fn names_resolved_through_lookup_maps() {
    let txs = vec![tx("t1", "c1", "p1")];
    let out = enrich(txs, &[category("c1", "Food")], &[product("p1", "Bread")]);
    assert_eq!(out[0].category_name, "Food");
    assert_eq!(out[0].product_name, "Bread");
}

#[test]
fn output_preserves_length_and_order() {
    let txs = vec![tx("t1", "c1", "p1"), tx("t2", "c2", "p2"), tx("t3", "c1", "p2")];
    let out = enrich(txs, &[category("c1", "Food")], &[product("p2", "Milk")]);
    assert_eq!(out.len(), 3);
    let ids: Vec<&str> = out.iter().map(|e| e.tx.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t2", "t3"]);
}

#[test]
fn unknown_ids_fall_back_to_sentinel() {
    let txs = vec![tx("t1", "missing-cat", "missing-prod")];
    let out = enrich(txs, &[], &[]);
    assert_eq!(out[0].category_name, UNKNOWN_NAME);
    assert_eq!(out[0].product_name, UNKNOWN_NAME);
}

#[test]
fn empty_input_yields_empty_output() {
    let out = enrich(vec![], &[category("c1", "Food")], &[]);
    assert!(out.is_empty());
}
