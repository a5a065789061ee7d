use crate::error::SubmissionError;
use crate::model::{AccountCredentials, AggregationResult, ReadingSink, SubmissionAck};
use std::sync::Arc;

/// Submits an aggregation result to one tado° account as a manual reading.
///
/// The submitter keeps no state between calls: every call is one write.
pub struct ReadingSubmitter {
    sink: Arc<dyn ReadingSink>,
    credentials: AccountCredentials,
}

impl ReadingSubmitter {
    pub fn new(sink: Arc<dyn ReadingSink>, credentials: AccountCredentials) -> Self {
        Self { sink, credentials }
    }

    pub async fn submit(&self, result: &AggregationResult) -> Result<SubmissionAck, SubmissionError> {
        let reading = result.to_reading();
        tracing::info!(
            date = %reading.date_string(),
            reading = reading.reading,
            "Submitting meter reading"
        );
        let ack = self.sink.submit_reading(&self.credentials, &reading).await?;
        tracing::info!(response = %ack.response, "Meter reading accepted");
        Ok(ack)
    }
}
