use crate::error::{FetchError, SubmissionError};
use async_trait::async_trait;

use super::types::{AccountCredentials, ConsumptionPage, MeterReading, SubmissionAck};

/// Trait for sources of consumption listing pages.
///
/// The aggregator only knows page URLs; how a URL is requested and
/// authenticated is up to the implementor.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches and decodes the page at `url`.
    async fn fetch_page(&self, url: &str) -> Result<ConsumptionPage, FetchError>;
}

/// Trait for services that accept manual meter readings.
#[async_trait]
pub trait ReadingSink: Send + Sync {
    /// Submits exactly one reading on behalf of the given account.
    ///
    /// # Returns
    /// - `Ok(SubmissionAck)` with the service's response body
    /// - `Err` if authentication or the write fails
    async fn submit_reading(
        &self,
        credentials: &AccountCredentials,
        reading: &MeterReading,
    ) -> Result<SubmissionAck, SubmissionError>;
}
