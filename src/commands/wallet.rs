// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::api::ApiClient;
use crate::utils::{fmt_pln, maybe_print_json};

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let wallet = client.wallet()?;
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &wallet)? {
        return Ok(());
    }
    println!("Wallet balance: {}", fmt_pln(&wallet.amount));
    println!("Last updated:   {}", wallet.updated_at.date_naive());
    Ok(())
}
