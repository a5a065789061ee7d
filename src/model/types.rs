use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use secrecy::SecretString;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Seconds between the Unix epoch and 0001-01-01T00:00:00Z.
const NO_DATA_TIMESTAMP: i64 = -62_135_596_800;

/// Timestamp reported as the latest interval end when no interval was seen.
pub fn no_data_sentinel() -> DateTime<FixedOffset> {
    DateTime::<Utc>::from_timestamp(NO_DATA_TIMESTAMP, 0)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
        .fixed_offset()
}

/// One consumption data point from the Octopus Energy listing.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ConsumptionInterval {
    pub interval_end: DateTime<FixedOffset>,
    pub consumption: f64,
}

/// One page of the consumption listing.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ConsumptionPage {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<ConsumptionInterval>,
}

impl ConsumptionPage {
    /// URL of the following page. An empty link counts as absent.
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// How pagination ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// The last page had no `next` link.
    Done,
    /// A page could not be fetched; the result covers the pages before it.
    Failed { reason: String },
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Completion::Done => write!(f, "done"),
            Completion::Failed { reason } => write!(f, "failed ({})", reason),
        }
    }
}

/// Latest interval end and total consumption over every fetched interval.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult {
    pub latest: DateTime<FixedOffset>,
    pub total_consumption: f64,
    pub interval_count: usize,
    pub pages_fetched: usize,
    pub completion: Completion,
}

impl AggregationResult {
    /// Result of a run that saw no interval at all.
    pub fn empty(completion: Completion) -> Self {
        Self {
            latest: no_data_sentinel(),
            total_consumption: 0.0,
            interval_count: 0,
            pages_fetched: 0,
            completion,
        }
    }

    /// Date portion of the latest interval end, in the offset the API reported.
    pub fn latest_date(&self) -> NaiveDate {
        self.latest.date_naive()
    }

    pub fn has_data(&self) -> bool {
        self.interval_count > 0
    }

    pub fn is_complete(&self) -> bool {
        self.completion == Completion::Done
    }

    /// Reading to submit for this result.
    pub fn to_reading(&self) -> MeterReading {
        MeterReading::new(self.latest_date(), self.total_consumption)
    }
}

/// A manual meter reading as accepted by tado° Energy IQ.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterReading {
    pub date: NaiveDate,
    pub reading: i64,
}

impl MeterReading {
    /// Builds a reading, truncating the total toward zero (15.9 becomes 15).
    pub fn new(date: NaiveDate, total_consumption: f64) -> Self {
        Self {
            date,
            reading: total_consumption.trunc() as i64,
        }
    }

    /// The date as sent on the wire.
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for MeterReading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} on {}", self.reading, self.date_string())
    }
}

/// Username and password of the tado° account receiving the reading.
pub struct AccountCredentials {
    pub username: String,
    pub password: SecretString,
}

impl AccountCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

impl fmt::Debug for AccountCredentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AccountCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Response body returned by tado° for an accepted reading.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionAck {
    pub response: serde_json::Value,
}
