mod aggregator;
mod client;
mod pagination;

pub use aggregator::ConsumptionAggregator;
pub use client::Client;
