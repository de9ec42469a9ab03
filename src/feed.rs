// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing::debug;

use crate::models::EnrichedTransaction;

pub const PAGE_SIZE: usize = 10;

/// Page source seam: given (skip, limit) over the soft-delete-filtered
/// transaction stream, returns up to `limit` enriched rows.
pub trait PageSource {
    fn page(&mut self, skip: usize, limit: usize) -> Result<Vec<EnrichedTransaction>>;
}

impl<F> PageSource for F
where
    F: FnMut(usize, usize) -> Result<Vec<EnrichedTransaction>>,
{
    fn page(&mut self, skip: usize, limit: usize) -> Result<Vec<EnrichedTransaction>> {
        self(skip, limit)
    }
}

/// Incrementally growing window over the filtered transaction stream.
/// `displayed` only grows between resets and is never de-duplicated; the
/// skip offset advances monotonically, so a shrinking backend set can cause
/// gaps but never repeats rows already shown.
#[derive(Debug, Default)]
pub struct TransactionFeed {
    displayed: Vec<EnrichedTransaction>,
    skip: usize,
    has_more: bool,
}

impl TransactionFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn displayed(&self) -> &[EnrichedTransaction] {
        &self.displayed
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    /// Clears the window and loads the first page. Any change to the active
    /// date range must go through here.
    pub fn reset<S: PageSource>(&mut self, mut source: S) -> Result<()> {
        self.displayed.clear();
        self.skip = 0;
        self.has_more = false;
        self.fill(&mut source)
    }

    /// Advances the window by one page and appends the rows.
    pub fn load_more<S: PageSource>(&mut self, mut source: S) -> Result<()> {
        self.skip += PAGE_SIZE;
        self.fill(&mut source)
    }

    fn fill(&mut self, source: &mut dyn PageSource) -> Result<()> {
        // Probe one row past the page so end-of-data is explicit; a short
        // page alone is not a reliable exhaustion signal once soft-deleted
        // rows have been filtered out.
        let mut page = source.page(self.skip, PAGE_SIZE + 1)?;
        self.has_more = page.len() > PAGE_SIZE;
        page.truncate(PAGE_SIZE);
        debug!(
            skip = self.skip,
            fetched = page.len(),
            has_more = self.has_more,
            "feed page loaded"
        );
        self.displayed.extend(page);
        Ok(())
    }
}
