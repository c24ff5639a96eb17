//! Control D exporter - Prometheus metrics for Control D accounts and organizations

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

mod cache;
mod cli;
mod client;
mod collector;
mod config;
mod error;
mod logging;
mod metrics;
mod server;

use cli::Cli;
use client::ControlDClient;
use config::Config;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(&cli).context("Failed to load configuration")?;

    logging::init(config.log_level.to_filter());
    log::debug!(
        "Resolved configuration: listen={}:{} path={} mode={} api_url={} timeout={:?}",
        config.listen_address,
        config.listen_port,
        config.telemetry_path,
        config.mode,
        config.api_url,
        config.timeout
    );

    let client = ControlDClient::new(config.api_key.clone(), config.timeout)
        .context("Failed to build Control D client")?
        .with_base_url(config.api_url.clone())
        .with_analytics_url(config.analytics_url.clone());

    server::serve(&config, Arc::new(client))
        .await
        .context("Exporter server failed")?;

    Ok(())
}
