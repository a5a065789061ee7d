use crate::model::{AggregationResult, Completion, ConsumptionPage, PageSource};
use chrono::{DateTime, FixedOffset};
use std::sync::Arc;

use super::pagination::ConsumptionPages;

/// Sums consumption over the full history of one meter.
///
/// Pagination stops at the first failed page. The failure is logged and
/// recorded in the result's `completion`; it is never returned as an error.
pub struct ConsumptionAggregator {
    source: Arc<dyn PageSource>,
    start_url: String,
    max_pages: usize,
}

#[derive(Default)]
struct RunningTotals {
    latest: Option<DateTime<FixedOffset>>,
    total: f64,
    intervals: usize,
}

impl RunningTotals {
    fn absorb(&mut self, page: &ConsumptionPage) {
        self.total += page
            .results
            .iter()
            .map(|interval| interval.consumption)
            .sum::<f64>();
        self.intervals += page.results.len();
        for interval in &page.results {
            if self.latest.map_or(true, |latest| interval.interval_end > latest) {
                self.latest = Some(interval.interval_end);
            }
        }
    }

    fn finish(self, pages_fetched: usize, completion: Completion) -> AggregationResult {
        match self.latest {
            Some(latest) => AggregationResult {
                latest,
                total_consumption: self.total,
                interval_count: self.intervals,
                pages_fetched,
                completion,
            },
            None => AggregationResult {
                pages_fetched,
                ..AggregationResult::empty(completion)
            },
        }
    }
}

impl ConsumptionAggregator {
    pub fn new(source: Arc<dyn PageSource>, start_url: impl Into<String>, max_pages: usize) -> Self {
        Self {
            source,
            start_url: start_url.into(),
            max_pages,
        }
    }

    pub async fn run(&self) -> AggregationResult {
        let mut pages = ConsumptionPages::new(
            self.source.as_ref(),
            self.start_url.as_str(),
            self.max_pages,
        );
        let mut totals = RunningTotals::default();
        let mut completion = Completion::Done;

        while pages.has_next() {
            let Some(result) = pages.fetch_next().await else {
                break;
            };
            match result {
                Ok(page) => {
                    tracing::debug!(
                        page = pages.pages_fetched(),
                        intervals = page.results.len(),
                        available = ?page.count,
                        "Aggregating consumption page"
                    );
                    totals.absorb(&page);
                }
                Err(e) => {
                    tracing::error!("Failed to retrieve consumption data: {}", e);
                    completion = Completion::Failed {
                        reason: e.to_string(),
                    };
                }
            }
        }

        let result = totals.finish(pages.pages_fetched(), completion);
        tracing::info!(
            latest = %result.latest,
            total_consumption = result.total_consumption,
            intervals = result.interval_count,
            pages = result.pages_fetched,
            completion = %result.completion,
            "Aggregated consumption"
        );
        result
    }
}
