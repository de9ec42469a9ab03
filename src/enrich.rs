// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use crate::models::{Category, EnrichedTransaction, Product, Transaction};

/// Display fallback for ids missing from the loaded reference lists.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Attaches category and product names to each transaction. Order and length
/// are preserved; an id absent from the reference lists resolves to
/// [`UNKNOWN_NAME`], never an error.
pub fn enrich(
    transactions: Vec<Transaction>,
    categories: &[Category],
    products: &[Product],
) -> Vec<EnrichedTransaction> {
    let category_names: HashMap<&str, &str> = categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();
    let product_names: HashMap<&str, &str> = products
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect();

    transactions
        .into_iter()
        .map(|tx| {
            let category_name = category_names
                .get(tx.category_id.as_str())
                .copied()
                .unwrap_or(UNKNOWN_NAME)
                .to_string();
            let product_name = product_names
                .get(tx.product_id.as_str())
                .copied()
                .unwrap_or(UNKNOWN_NAME)
                .to_string();
            EnrichedTransaction {
                tx,
                category_name,
                product_name,
            }
        })
        .collect()
}
