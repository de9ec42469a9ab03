// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::api::ApiClient;
use crate::dashboard::Dashboard;
use crate::models::{EnrichedTransaction, TxKind};
use crate::utils::{fmt_percentage, fmt_pln, maybe_print_json, pretty_table, range_from_args};

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let (start, end) = range_from_args(m)?;
    let pages = *m.get_one::<usize>("pages").unwrap_or(&1);
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");

    let mut dash = Dashboard::load(client, start, end)?;
    for _ in 1..pages {
        if !dash.feed.has_more() {
            break;
        }
        dash.load_more(client)?;
    }

    let payload = serde_json::json!({
        "summary": dash.summary,
        "expense_by_product": dash.expense_by_product,
        "transactions": dash.feed.displayed(),
        "has_more": dash.feed.has_more(),
    });
    if maybe_print_json(json_flag, jsonl_flag, &payload)? {
        return Ok(());
    }

    let (period_start, period_end) = dash.range();
    println!(
        "Period: {} – {}",
        period_start.date_naive(),
        period_end.date_naive()
    );
    println!();
    println!("Total income:    {}", fmt_pln(&dash.summary.total_income));
    println!("Total expenses:  {}", fmt_pln(&dash.summary.total_expenses));
    println!("Net balance:     {}", fmt_pln(&dash.summary.net_balance));
    println!("Wallet balance:  {}", fmt_pln(&dash.summary.wallet_balance));
    println!();

    if dash.summary.expense_by_category.is_empty() {
        println!("No expenses in this period.");
    } else {
        let rows = dash
            .summary
            .expense_by_category
            .iter()
            .map(|e| {
                vec![
                    e.category_name.clone(),
                    fmt_pln(&e.total),
                    fmt_percentage(&e.percentage),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Total", "Share"], rows));

        let rows = dash
            .expense_by_product
            .iter()
            .map(|e| {
                vec![
                    e.product_name.clone(),
                    fmt_pln(&e.total),
                    fmt_percentage(&e.percentage),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Product", "Total", "Share"], rows));
    }

    print_feed(dash.feed.displayed(), dash.feed.has_more());
    Ok(())
}

pub fn print_feed(displayed: &[EnrichedTransaction], has_more: bool) {
    if displayed.is_empty() {
        println!("No transactions found in this period.");
        return;
    }
    let rows = displayed
        .iter()
        .map(|e| {
            let sign = match e.tx.kind {
                TxKind::Income => "+",
                TxKind::Expense => "-",
            };
            vec![
                format!("{}{}", sign, fmt_pln(&e.tx.amount)),
                e.product_name.clone(),
                e.tx.effective_date().date_naive().to_string(),
                e.category_name.clone(),
                e.tx.note.clone().unwrap_or_else(|| "-".into()),
                e.tx.kind.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Amount", "Product", "Date", "Category", "Note", "Type"],
            rows,
        )
    );
    println!(
        "Showing {} transaction(s){}",
        displayed.len(),
        if has_more {
            "; more available, rerun with a higher --pages"
        } else {
            ""
        }
    );
}
