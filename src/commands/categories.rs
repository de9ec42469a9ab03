// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::api::ApiClient;
use crate::models::Ack;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(client, sub)?,
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            print_ack(&client.create_category(name)?);
        }
        Some(("rename", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let name = sub.get_one::<String>("name").unwrap();
            print_ack(&client.update_category(id, name)?);
        }
        Some(("delete", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            print_ack(&client.delete_category(id)?);
        }
        _ => {}
    }
    Ok(())
}

fn list(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let categories = client.categories()?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &categories)? {
        return Ok(());
    }
    if categories.is_empty() {
        println!("No categories yet.");
        return Ok(());
    }
    let rows = categories
        .iter()
        .map(|c| {
            vec![
                c.id.clone(),
                c.name.clone(),
                c.created_at.date_naive().to_string(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Id", "Name", "Created"], rows));
    Ok(())
}

pub(super) fn print_ack(ack: &Ack) {
    match ack.affected_transactions {
        Some(n) => println!("{} ({} transaction(s) affected)", ack.message, n),
        None => println!("{}", ack.message),
    }
}
