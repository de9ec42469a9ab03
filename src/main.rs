// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use grosz::{api, api::ApiClient, cli, commands, session::Session};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("GROSZ_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let base_url = matches
        .get_one::<String>("api-url")
        .cloned()
        .or_else(|| std::env::var("GROSZ_API_URL").ok())
        .unwrap_or_else(|| api::DEFAULT_API_URL.to_string());
    let session = Session::load(Session::default_path()?);
    let client = ApiClient::new(base_url, session)?;

    match matches.subcommand() {
        Some(("login", sub)) => commands::auth::login(&client, sub)?,
        Some(("logout", _)) => commands::auth::logout(&client),
        Some(("dashboard", sub)) => commands::dashboard::handle(&client, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&client, sub)?,
        Some(("category", sub)) => commands::categories::handle(&client, sub)?,
        Some(("product", sub)) => commands::products::handle(&client, sub)?,
        Some(("wallet", sub)) => commands::wallet::handle(&client, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
