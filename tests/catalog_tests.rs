// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use grosz::catalog::{NameMatch, filter_contains, match_exact, resolve_name};
use grosz::models::Product;

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
fn exact_match_ignores_case() {
    let products = vec![product("p1", "coffee"), product("p2", "Tea")];
    let hit = match_exact("Coffee", &products).unwrap();
    assert_eq!(hit.id, "p1");
    assert!(match_exact("TEA", &products).is_some());
    assert!(match_exact("coff", &products).is_none());
}

#[test]
fn filter_uses_substring_containment() {
    let products = vec![
        product("p1", "Oat milk"),
        product("p2", "Milk chocolate"),
        product("p3", "Bread"),
    ];
    let hits = filter_contains("milk", &products);
    let names: Vec<&str> = hits.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Oat milk", "Milk chocolate"]);
}

#[test]
fn empty_query_passes_everything_through() {
    let products = vec![product("p1", "Coffee"), product("p2", "Tea")];
    assert_eq!(filter_contains("", &products).len(), 2);
}

#[test]
fn resolve_finds_existing_entity_with_stored_casing() {
    let products = vec![product("p1", "coffee")];
    let m = resolve_name("  Coffee  ", &products).unwrap();
    match m {
        NameMatch::Existing(p) => assert_eq!(p.name, "coffee"),
        NameMatch::New(_) => panic!("expected existing match"),
    }
    assert_eq!(
        resolve_name("Coffee", &products).unwrap().canonical(),
        "coffee"
    );
}

#[test]
fn resolve_flags_unmatched_input_as_new() {
    let products = vec![product("p1", "coffee")];
    let m = resolve_name(" matcha ", &products).unwrap();
    assert!(m.is_new());
    assert_eq!(m.canonical(), "matcha");
}

#[test]
fn empty_input_is_rejected_before_submission() {
    let products = vec![product("p1", "coffee")];
    assert!(resolve_name("", &products).is_err());
    assert!(resolve_name("   ", &products).is_err());
}
