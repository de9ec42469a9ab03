// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::api::ApiClient;
use crate::utils::{maybe_print_json, pretty_table};

use super::categories::print_ack;

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(client, sub)?,
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let category_id = sub.get_one::<String>("category-id").map(|s| s.as_str());
            print_ack(&client.create_product(name, category_id)?);
        }
        Some(("rename", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let name = sub.get_one::<String>("name").unwrap();
            print_ack(&client.update_product(id, name)?);
        }
        Some(("delete", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            print_ack(&client.delete_product(id)?);
        }
        _ => {}
    }
    Ok(())
}

fn list(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let products = client.products()?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &products)? {
        return Ok(());
    }
    if products.is_empty() {
        println!("No products yet.");
        return Ok(());
    }
    let rows = products
        .iter()
        .map(|p| {
            vec![
                p.id.clone(),
                p.name.clone(),
                p.category_id.clone().unwrap_or_else(|| "-".into()),
                p.created_at.date_naive().to_string(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Id", "Name", "Category", "Created"], rows));
    Ok(())
}
