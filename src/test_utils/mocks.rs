//! Mock implementations of the page source and reading sink traits.

use crate::error::{FetchError, SubmissionError};
use crate::model::{
    AccountCredentials, ConsumptionPage, MeterReading, PageSource, ReadingSink, SubmissionAck,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

enum MockResponse {
    Page(ConsumptionPage),
    Status(u16),
}

/// A page source serving canned pages keyed by URL.
///
/// URLs without a canned response answer with status 404.
pub struct MockPageSource {
    responses: HashMap<String, MockResponse>,
    requested: Mutex<Vec<String>>,
}

impl MockPageSource {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Serves `page` at `url`.
    pub fn with_page(mut self, url: &str, page: ConsumptionPage) -> Self {
        self.responses.insert(url.to_string(), MockResponse::Page(page));
        self
    }

    /// Answers `url` with a non-success status.
    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses
            .insert(url.to_string(), MockResponse::Status(status));
        self
    }

    /// URLs fetched so far, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for MockPageSource {
    async fn fetch_page(&self, url: &str) -> Result<ConsumptionPage, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        match self.responses.get(url) {
            Some(MockResponse::Page(page)) => Ok(page.clone()),
            Some(MockResponse::Status(status)) => Err(FetchError::Status {
                status: *status,
                body: format!("mock status {}", status),
            }),
            None => Err(FetchError::Status {
                status: 404,
                body: "Not found.".to_string(),
            }),
        }
    }
}

/// A reading sink that records every submission.
pub struct RecordingReadingSink {
    should_fail: bool,
    submissions: Mutex<Vec<(String, MeterReading)>>,
}

impl RecordingReadingSink {
    /// Creates a sink that accepts every reading.
    pub fn new_success() -> Self {
        Self {
            should_fail: false,
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Creates a sink that rejects every reading with an authentication error.
    pub fn new_failure() -> Self {
        Self {
            should_fail: true,
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// `(username, reading)` pairs received so far, in order.
    pub fn submissions(&self) -> Vec<(String, MeterReading)> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReadingSink for RecordingReadingSink {
    async fn submit_reading(
        &self,
        credentials: &AccountCredentials,
        reading: &MeterReading,
    ) -> Result<SubmissionAck, SubmissionError> {
        self.submissions
            .lock()
            .unwrap()
            .push((credentials.username.clone(), *reading));
        if self.should_fail {
            return Err(SubmissionError::AuthFailed {
                status: 401,
                body: "invalid_grant".to_string(),
            });
        }
        Ok(SubmissionAck {
            response: serde_json::to_value(reading).unwrap(),
        })
    }
}
