//! Lazy traversal of `next`-linked consumption pages.
//!
//! A `ConsumptionPages` walks the chain one request at a time. It is finite
//! and single-use: once the chain ends or a fetch fails there is nothing left
//! to fetch.

use crate::error::FetchError;
use crate::model::{ConsumptionPage, PageSource};

pub struct ConsumptionPages<'a> {
    source: &'a dyn PageSource,
    next_url: Option<String>,
    pages_fetched: usize,
    max_pages: usize,
}

impl<'a> ConsumptionPages<'a> {
    pub fn new(source: &'a dyn PageSource, first_url: impl Into<String>, max_pages: usize) -> Self {
        Self {
            source,
            next_url: Some(first_url.into()),
            pages_fetched: 0,
            max_pages,
        }
    }

    pub fn has_next(&self) -> bool {
        self.next_url.is_some()
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Fetches the next page, or returns `None` once the sequence is exhausted.
    ///
    /// After an error the sequence is exhausted.
    pub async fn fetch_next(&mut self) -> Option<Result<ConsumptionPage, FetchError>> {
        let url = self.next_url.take()?;

        if self.pages_fetched >= self.max_pages {
            return Some(Err(FetchError::TooManyPages(self.pages_fetched)));
        }

        let result = self.source.fetch_page(&url).await;
        if let Ok(page) = &result {
            self.pages_fetched += 1;
            self.next_url = page.next_url().map(str::to_owned);
        }
        Some(result)
    }
}
