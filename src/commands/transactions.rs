// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use tracing::warn;

use crate::api::ApiClient;
use crate::catalog::{Catalog, Named, filter_contains, resolve_name};
use crate::enrich::enrich;
use crate::feed::TransactionFeed;
use crate::models::{EnrichedTransaction, NewTransaction, TxKind};
use crate::utils::{day_start, fmt_pln, maybe_print_json, parse_date, parse_decimal, range_from_args};

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(client, sub)?,
        Some(("list", sub)) => list(client, sub)?,
        Some(("show", sub)) => show(client, sub)?,
        Some(("delete", sub)) => delete(client, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let kind: TxKind = sub.get_one::<String>("type").unwrap().parse()?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let quantity = *sub.get_one::<u32>("quantity").unwrap_or(&1);
    let product_input = sub.get_one::<String>("product").unwrap();
    let category_input = sub.get_one::<String>("category").unwrap();
    let note = sub.get_one::<String>("note").map(|s| s.to_string());
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };

    // Name resolution is validated before any create request goes out; a
    // failed catalog load only degrades matching, it does not block entry.
    let catalog = match Catalog::load(client) {
        Ok(c) => c,
        Err(err) => {
            warn!(%err, "could not load products/categories; treating all names as new");
            Catalog::default()
        }
    };
    let product = resolve_name(product_input, &catalog.products)?;
    let category = resolve_name(category_input, &catalog.categories)?;
    if product.is_new() {
        println!("Product '{}' is new and will be created.", product.canonical());
        suggest("products", &filter_contains(product.canonical(), &catalog.products));
    }
    if category.is_new() {
        println!("Category '{}' is new and will be created.", category.canonical());
        suggest(
            "categories",
            &filter_contains(category.canonical(), &catalog.categories),
        );
    }

    let total = amount * Decimal::from(quantity);
    let ack = client.create_transaction(&NewTransaction {
        amount: total,
        kind,
        category_name: category.canonical().to_string(),
        product_name: product.canonical().to_string(),
        purchase_date: Some(day_start(date)),
        note,
    })?;
    println!(
        "Recorded {} {} of {} on {} ({})",
        kind,
        product.canonical(),
        fmt_pln(&total),
        date,
        ack.message
    );
    Ok(())
}

fn suggest<T: Named>(label: &str, hits: &[&T]) {
    if hits.is_empty() {
        return;
    }
    let names: Vec<&str> = hits.iter().take(5).map(|e| e.name()).collect();
    println!("Similar existing {}: {}", label, names.join(", "));
}

fn list(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let (start, end) = range_from_args(sub)?;
    let pages = *sub.get_one::<usize>("pages").unwrap_or(&1);
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let catalog = Catalog::load(client)?;
    let mut source = |skip: usize, limit: usize| -> Result<Vec<EnrichedTransaction>> {
        let page = client.transactions_in_range(start, end, skip, Some(limit))?;
        Ok(enrich(page, &catalog.categories, &catalog.products))
    };

    let mut feed = TransactionFeed::new();
    feed.reset(&mut source)?;
    for _ in 1..pages {
        if !feed.has_more() {
            break;
        }
        feed.load_more(&mut source)?;
    }

    if maybe_print_json(json_flag, jsonl_flag, &feed.displayed())? {
        return Ok(());
    }
    super::dashboard::print_feed(feed.displayed(), feed.has_more());
    Ok(())
}

fn show(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let tx = client.transaction(id)?;
    let catalog = Catalog::load(client)?;
    let enriched = enrich(vec![tx], &catalog.categories, &catalog.products);
    super::dashboard::print_feed(&enriched, false);
    Ok(())
}

fn delete(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let ack = client.delete_transaction(id)?;
    println!("{}", ack.message);
    Ok(())
}
