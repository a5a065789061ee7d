//! Octopus Energy to tado° Energy IQ gas reading sync
//!
//! This application reads the full gas consumption history of one meter from
//! the Octopus Energy API and submits the running total to tado° as a manual
//! meter reading dated on the latest consumption interval.
//!
//! # Flow
//!
//! 1. Follow the paginated consumption listing, summing every interval
//! 2. Truncate the total to a whole reading
//! 3. Submit one reading to the tado° account
//!
//! A failed consumption page ends pagination early; whatever was summed up to
//! that point is still submitted unless `--strict` is given. A failed
//! submission exits non-zero.

mod cli;
mod config;
mod error;
mod model;
mod octopus;
mod retry;
mod sync;
mod tado;

#[cfg(test)]
mod test_utils;

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let app_config = config::load_app_config().context("Failed to load AppConfig")?;
    tracing_subscriber::fmt()
        .with_max_level(app_config.log_level())
        .init();

    let configs = config::load_client_configs().context("Failed to load client configuration")?;

    let octopus_client = Arc::new(
        octopus::Client::new(configs.octopus, &configs.http, args.octopus_api_key())
            .context("Failed to build Octopus Energy client")?,
    );
    let start_url = octopus_client.consumption_url(&args.mprn, &args.gas_serial_number);
    let max_pages = octopus_client.max_pages();
    let aggregator = octopus::ConsumptionAggregator::new(octopus_client, start_url, max_pages);

    let tado_client = Arc::new(
        tado::Client::new(configs.tado, &configs.http).context("Failed to build tado client")?,
    );
    let submitter = tado::ReadingSubmitter::new(tado_client, args.tado_credentials());

    match sync::run(&aggregator, &submitter, args.sync_options()).await {
        Ok(outcome) => {
            tracing::info!(?outcome, "Sync finished");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Sync failed: {:?}", e);
            Err(e.into())
        }
    }
}
