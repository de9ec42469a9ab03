// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::api::ApiClient;
use crate::models::{Category, Product};

/// Anything matchable by its human label.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Product {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

/// The reference lists a submission resolves against. Reloaded per use, not
/// cached across sessions.
#[derive(Debug, Default)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Loads both lists together; either failing fails the load. Soft-deleted
    /// rows are already dropped by the client.
    pub fn load(client: &ApiClient) -> Result<Self> {
        let (products, categories) = std::thread::scope(|s| {
            let p = s.spawn(|| client.products());
            let c = s.spawn(|| client.categories());
            (
                p.join().expect("product fetch panicked"),
                c.join().expect("category fetch panicked"),
            )
        });
        Ok(Self {
            products: products?,
            categories: categories?,
        })
    }
}

/// Case-insensitive full-string match against the loaded reference list.
pub fn match_exact<'a, T: Named>(input: &str, entities: &'a [T]) -> Option<&'a T> {
    let needle = input.to_lowercase();
    entities.iter().find(|e| e.name().to_lowercase() == needle)
}

/// Case-insensitive substring containment; an empty query passes everything
/// through unfiltered.
pub fn filter_contains<'a, T: Named>(query: &str, entities: &'a [T]) -> Vec<&'a T> {
    if query.is_empty() {
        return entities.iter().collect();
    }
    let needle = query.to_lowercase();
    entities
        .iter()
        .filter(|e| e.name().to_lowercase().contains(&needle))
        .collect()
}

/// Outcome of resolving free-text input at submission time. The creation
/// boundary decides what to do with a `New` name; resolution itself never
/// creates anything.
#[derive(Debug, PartialEq)]
pub enum NameMatch<'a, T> {
    Existing(&'a T),
    New(String),
}

impl<T: Named> NameMatch<'_, T> {
    /// The name to submit: the stored casing for an existing entity, the
    /// trimmed input for a new one.
    pub fn canonical(&self) -> &str {
        match self {
            NameMatch::Existing(e) => e.name(),
            NameMatch::New(name) => name,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, NameMatch::New(_))
    }
}

/// Resolves free-text input to an existing entity or flags it as new.
/// Input that is empty after trimming is rejected before any network call.
pub fn resolve_name<'a, T: Named>(input: &str, entities: &'a [T]) -> Result<NameMatch<'a, T>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(anyhow::anyhow!("Name must not be empty"));
    }
    Ok(match match_exact(trimmed, entities) {
        Some(e) => NameMatch::Existing(e),
        None => NameMatch::New(trimmed.to_string()),
    })
}
