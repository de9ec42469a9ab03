// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::api::ApiClient;
use crate::enrich::enrich;
use crate::feed::TransactionFeed;
use crate::models::{Category, EnrichedTransaction, Product, ProductExpense, Summary};
use crate::summary::{expense_by_product, summarize};

/// One dashboard fetch cycle, recomputed from scratch for every date range.
/// The summary and product breakdown come from the full unpaged set; the
/// feed pages through the same filtered stream independently.
pub struct Dashboard {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    pub summary: Summary,
    pub expense_by_product: Vec<ProductExpense>,
    pub feed: TransactionFeed,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Dashboard {
    /// Runs one cycle: the four reads fan out together and the cycle fails
    /// as a whole if any of them fails, so a partial dashboard is never
    /// built. No retries; a failed cycle is terminal.
    pub fn load(client: &ApiClient, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        let (all, categories, products, wallet) = std::thread::scope(|s| {
            let t = s.spawn(|| client.transactions_in_range(start, end, 0, None));
            let c = s.spawn(|| client.categories());
            let p = s.spawn(|| client.products());
            let w = s.spawn(|| client.wallet());
            (
                t.join().expect("transaction fetch panicked"),
                c.join().expect("category fetch panicked"),
                p.join().expect("product fetch panicked"),
                w.join().expect("wallet fetch panicked"),
            )
        });
        let (all, categories, products, wallet) = (all?, categories?, products?, wallet?);
        debug!(
            transactions = all.len(),
            categories = categories.len(),
            products = products.len(),
            "dashboard cycle data joined"
        );

        let summary = summarize(&all, &categories, wallet.amount);
        let expense_by_product = expense_by_product(&all, &products);

        let mut feed = TransactionFeed::new();
        feed.reset(|skip: usize, limit: usize| -> Result<Vec<EnrichedTransaction>> {
            let page = client.transactions_in_range(start, end, skip, Some(limit))?;
            Ok(enrich(page, &categories, &products))
        })?;

        Ok(Self {
            start,
            end,
            summary,
            expense_by_product,
            feed,
            categories,
            products,
        })
    }

    /// Appends the next feed page for the cycle's range.
    pub fn load_more(&mut self, client: &ApiClient) -> Result<()> {
        let Self {
            start,
            end,
            feed,
            categories,
            products,
            ..
        } = self;
        let (start, end) = (*start, *end);
        feed.load_more(|skip: usize, limit: usize| -> Result<Vec<EnrichedTransaction>> {
            let page = client.transactions_in_range(start, end, skip, Some(limit))?;
            Ok(enrich(page, categories, products))
        })
    }

    pub fn range(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.start, self.end)
    }
}
