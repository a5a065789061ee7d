//! Model definitions for consumption pages, aggregation results and readings.
//!
//! This module provides the data passed between the Octopus Energy side and
//! the tado° side, plus the traits both sides are injected through.

pub mod traits;
pub mod types;

pub use traits::{PageSource, ReadingSink};
pub use types::{
    AccountCredentials, AggregationResult, Completion, ConsumptionPage, MeterReading,
    SubmissionAck,
};
