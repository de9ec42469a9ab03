// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn range_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("from")
            .long("from")
            .value_name("YYYY-MM-DD")
            .help("Start of the date range (default: 30 days ago)"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .value_name("YYYY-MM-DD")
            .help("End of the date range (default: today)"),
    )
    .arg(
        Arg::new("pages")
            .long("pages")
            .value_parser(value_parser!(usize))
            .default_value("1")
            .help("Number of feed pages to load (10 transactions each)"),
    )
}

pub fn build_cli() -> Command {
    Command::new("grosz")
        .about("Terminal client for the grosz finance tracker API")
        .version(clap::crate_version!())
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .global(true)
                .value_name("URL")
                .help("Backend base URL (default: $GROSZ_API_URL or http://localhost:8000/api/v1)"),
        )
        .subcommand(
            Command::new("login")
                .about("Log in and store the access token")
                .arg(
                    Arg::new("username")
                        .long("username")
                        .short('u')
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .help("Password (prompted when omitted)"),
                ),
        )
        .subcommand(Command::new("logout").about("Forget the stored access token"))
        .subcommand(json_flags(range_args(
            Command::new("dashboard")
                .about("Totals, breakdowns and recent transactions for a date range"),
        )))
        .subcommand(
            Command::new("tx")
                .about("Work with transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .short('t')
                                .default_value("expense")
                                .help("'expense' or 'income'"),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .short('a')
                                .required(true)
                                .help("Unit amount in PLN"),
                        )
                        .arg(
                            Arg::new("quantity")
                                .long("quantity")
                                .short('q')
                                .value_parser(value_parser!(u32).range(1..))
                                .default_value("1")
                                .help("Units bought; the amount is scaled by this"),
                        )
                        .arg(
                            Arg::new("product")
                                .long("product")
                                .short('p')
                                .required(true)
                                .help("Product (or income source) name, existing or new"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .short('c')
                                .required(true)
                                .help("Category (or company) name, existing or new"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Purchase date (default: today)"),
                        )
                        .arg(Arg::new("note").long("note").short('n')),
                )
                .subcommand(json_flags(range_args(
                    Command::new("list").about("List transactions in a date range"),
                )))
                .subcommand(
                    Command::new("show")
                        .about("Show one transaction")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Soft-delete a transaction")
                        .arg(Arg::new("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(json_flags(Command::new("list")))
                .subcommand(Command::new("add").arg(Arg::new("name").required(true)))
                .subcommand(
                    Command::new("rename")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("name").required(true)),
                )
                .subcommand(Command::new("delete").arg(Arg::new("id").required(true))),
        )
        .subcommand(
            Command::new("product")
                .about("Manage products")
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").required(true))
                        .arg(
                            Arg::new("category-id")
                                .long("category-id")
                                .help("Category to attach the product to"),
                        ),
                )
                .subcommand(
                    Command::new("rename")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("name").required(true)),
                )
                .subcommand(Command::new("delete").arg(Arg::new("id").required(true))),
        )
        .subcommand(json_flags(
            Command::new("wallet").about("Show the wallet balance"),
        ))
}
