// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::enrich::UNKNOWN_NAME;
use crate::models::{
    Category, CategoryExpense, Product, ProductExpense, Summary, Transaction, TxKind,
};

/// Period summary from the full, unpaged transaction set of the selected
/// range. Single pass: income and expenses are totalled, expenses are also
/// accumulated per category. Categories with no expenses in the range are
/// omitted, not zero-filled.
pub fn summarize(
    transactions: &[Transaction],
    categories: &[Category],
    wallet_balance: Decimal,
) -> Summary {
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    let mut totals = GroupTotals::new();

    for tx in transactions {
        match tx.kind {
            TxKind::Income => total_income += tx.amount,
            TxKind::Expense => {
                total_expenses += tx.amount;
                totals.add(&tx.category_id, tx.amount);
            }
        }
    }

    let names: HashMap<&str, &str> = categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    let mut expense_by_category: Vec<CategoryExpense> = totals
        .into_entries()
        .map(|(id, total)| CategoryExpense {
            category_name: lookup(&names, &id),
            percentage: percentage_of(total, total_expenses),
            category_id: id,
            total,
        })
        .collect();
    // Stable sort keeps first-encounter order for equal totals.
    expense_by_category.sort_by(|a, b| b.total.cmp(&a.total));

    Summary {
        total_income,
        total_expenses,
        net_balance: total_income - total_expenses,
        wallet_balance,
        expense_by_category,
    }
}

/// Same single-pass breakdown keyed by product id, expenses only.
pub fn expense_by_product(
    transactions: &[Transaction],
    products: &[Product],
) -> Vec<ProductExpense> {
    let mut total_expenses = Decimal::ZERO;
    let mut totals = GroupTotals::new();

    for tx in transactions {
        if tx.kind == TxKind::Expense {
            total_expenses += tx.amount;
            totals.add(&tx.product_id, tx.amount);
        }
    }

    let names: HashMap<&str, &str> = products
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect();

    let mut breakdown: Vec<ProductExpense> = totals
        .into_entries()
        .map(|(id, total)| ProductExpense {
            product_name: lookup(&names, &id),
            percentage: percentage_of(total, total_expenses),
            product_id: id,
            total,
        })
        .collect();
    breakdown.sort_by(|a, b| b.total.cmp(&a.total));
    breakdown
}

/// Per-group accumulator that remembers first-encounter order, so the later
/// stable sort breaks ties the way the transactions arrived.
struct GroupTotals {
    order: Vec<String>,
    totals: HashMap<String, Decimal>,
}

impl GroupTotals {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            totals: HashMap::new(),
        }
    }

    fn add(&mut self, key: &str, amount: Decimal) {
        match self.totals.get_mut(key) {
            Some(total) => *total += amount,
            None => {
                self.order.push(key.to_string());
                self.totals.insert(key.to_string(), amount);
            }
        }
    }

    fn into_entries(self) -> impl Iterator<Item = (String, Decimal)> {
        let Self { order, mut totals } = self;
        order.into_iter().map(move |id| {
            let total = totals.remove(&id).unwrap_or(Decimal::ZERO);
            (id, total)
        })
    }
}

/// Share of the whole in percent; zero when the whole is zero so an empty
/// period never divides by zero.
fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole > Decimal::ZERO {
        part * Decimal::ONE_HUNDRED / whole
    } else {
        Decimal::ZERO
    }
}

fn lookup(names: &HashMap<&str, &str>, id: &str) -> String {
    names.get(id).copied().unwrap_or(UNKNOWN_NAME).to_string()
}
