// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::api::ApiClient;

pub fn login(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let username = m.get_one::<String>("username").unwrap();
    let password = match m.get_one::<String>("password") {
        Some(p) => p.clone(),
        None => rpassword::prompt_password("Password: ")?,
    };
    client.login(username, &password)?;
    println!("Logged in as {}", username);
    Ok(())
}

pub fn logout(client: &ApiClient) {
    client.logout();
    println!("Logged out.");
}
