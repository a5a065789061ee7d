//! One sync run: aggregate the meter's history, then submit the reading.

use crate::error::{Result, SyncError};
use crate::model::{AggregationResult, Completion, MeterReading, SubmissionAck};
use crate::octopus::ConsumptionAggregator;
use crate::tado::ReadingSubmitter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncOptions {
    /// Skip the write and only log the reading
    pub dry_run: bool,
    /// Abort instead of submitting an incomplete or empty aggregation
    pub strict: bool,
}

/// What a run did with the aggregated reading.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    Submitted(SubmissionAck),
    DryRun(MeterReading),
    /// The source returned no interval, so there was nothing to submit.
    NoData,
}

/// Checks an aggregation against the run options before anything is written.
fn check(result: &AggregationResult, options: SyncOptions) -> Result<(), SyncError> {
    if !options.strict {
        return Ok(());
    }
    if let Completion::Failed { reason } = &result.completion {
        return Err(SyncError::IncompleteAggregation(reason.clone()));
    }
    if !result.has_data() {
        return Err(SyncError::NoData);
    }
    Ok(())
}

pub async fn run(
    aggregator: &ConsumptionAggregator,
    submitter: &ReadingSubmitter,
    options: SyncOptions,
) -> Result<SyncOutcome> {
    let result = aggregator.run().await;
    tracing::info!("Latest date is {}", result.latest_date());
    tracing::info!("Total consumption is {}", result.total_consumption);

    check(&result, options)?;

    if !result.has_data() {
        tracing::warn!("No consumption data available, nothing to submit");
        return Ok(SyncOutcome::NoData);
    }

    if options.dry_run {
        let reading = result.to_reading();
        tracing::info!("Dry run, would submit reading {}", reading);
        return Ok(SyncOutcome::DryRun(reading));
    }

    if !result.is_complete() {
        tracing::warn!(
            completion = %result.completion,
            "Consumption history is incomplete, submitting partial total"
        );
    }

    let ack = submitter.submit(&result).await?;
    Ok(SyncOutcome::Submitted(ack))
}
