// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// First instant of the day, for an inclusive range start.
pub fn day_start(d: NaiveDate) -> DateTime<Utc> {
    d.and_time(NaiveTime::MIN).and_utc()
}

/// Last whole second of the day, for an inclusive range end.
pub fn day_end(d: NaiveDate) -> DateTime<Utc> {
    day_start(d) + Duration::seconds(86_399)
}

/// Date range from --from/--to arguments; defaults to the last 30 days.
pub fn range_from_args(m: &clap::ArgMatches) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let today = Utc::now().date_naive();
    let from = match m.get_one::<String>("from") {
        Some(s) => parse_date(s)?,
        None => today - Duration::days(30),
    };
    let to = match m.get_one::<String>("to") {
        Some(s) => parse_date(s)?,
        None => today,
    };
    if from > to {
        return Err(anyhow::anyhow!("--from {} is after --to {}", from, to));
    }
    Ok((day_start(from), day_end(to)))
}

/// Display formatting is fixed to PLN regardless of the wire format.
pub fn fmt_pln(d: &Decimal) -> String {
    format!("{} zł", d.round_dp(2).to_string().replace('.', ","))
}

pub fn fmt_percentage(d: &Decimal) -> String {
    format!("{}%", d.round_dp(1))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
