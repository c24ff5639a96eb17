//! Command-line interface definition
//!
//! Every setting is optional at this layer so the config file can fill in
//! whatever the command line and environment leave unset.

use clap::Parser;

/// Prometheus exporter for Control D
#[derive(Parser, Debug, Default)]
#[command(name = "controld-exporter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Address to listen on for telemetry
    #[arg(
        long = "web.listen-address",
        env = "CTRLD_EXPORTER_LISTEN_ADDRESS",
        value_name = "ADDRESS"
    )]
    pub listen_address: Option<String>,

    /// Port to listen on for telemetry
    #[arg(
        long = "web.listen-port",
        env = "CTRLD_EXPORTER_LISTEN_PORT",
        value_name = "PORT"
    )]
    pub listen_port: Option<u16>,

    /// Path under which to expose metrics
    #[arg(
        short = 'p',
        long = "web.telemetry-path",
        env = "CTRLD_EXPORTER_TELEMETRY_PATH",
        value_name = "PATH"
    )]
    pub telemetry_path: Option<String>,

    /// Control D API key
    #[arg(
        short = 'k',
        long = "controld.api-key",
        env = "CTRLD_API_KEY",
        hide_env_values = true,
        value_name = "KEY"
    )]
    pub api_key: Option<String>,

    /// Scrape the main organization and its sub-organizations
    #[arg(long = "controld.business-mode", env = "CTRLD_BUSINESS_MODE")]
    pub business_mode: bool,

    /// Control D API base URL
    #[arg(long = "controld.api-url", env = "CTRLD_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Fixed analytics API URL instead of the organization's regional host
    #[arg(
        long = "controld.analytics-url",
        env = "CTRLD_ANALYTICS_URL",
        value_name = "URL"
    )]
    pub analytics_url: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(long = "controld.timeout", env = "CTRLD_TIMEOUT", value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Log level (debug, info, warn, error)
    #[arg(long = "log.level", env = "CTRLD_EXPORTER_LOG_LEVEL", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// YAML config file
    #[arg(long, env = "CTRLD_EXPORTER_CONFIG", value_name = "FILE")]
    pub config: Option<String>,
}
