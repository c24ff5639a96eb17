//! Configuration management for the exporter
//!
//! Settings resolve as: CLI flag > environment variable > config file > default.
//! clap already folds the environment into the CLI layer, so this module only
//! has to merge the parsed [`Cli`] over an optional YAML file.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::cli::Cli;
use crate::client::controld::API_BASE_URL;
use crate::collector::Mode;
use crate::error::{ConfigError, Result};

pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_LISTEN_PORT: u16 = 10034;
pub const DEFAULT_TELEMETRY_PATH: &str = "/metrics";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Optional YAML config file.
///
/// ```yaml
/// web:
///   listen_address: 127.0.0.1
///   listen_port: 10034
///   telemetry_path: /metrics
/// controld:
///   api_key: ...
///   business_mode: true
/// log:
///   level: info
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub web: WebSection,
    pub controld: ControlDSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WebSection {
    pub listen_address: Option<String>,
    pub listen_port: Option<u16>,
    pub telemetry_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControlDSection {
    pub api_key: Option<String>,
    pub business_mode: Option<bool>,
    pub api_url: Option<String>,
    pub analytics_url: Option<String>,
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    pub level: Option<String>,
}

impl FileConfig {
    /// Load a config file from `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: FileConfig = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }
}

/// Log verbosity accepted by `--log.level`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(ConfigError::Invalid(format!(
                "unknown log level '{}' (expected debug, info, warn or error)",
                other
            ))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(s)
    }
}

/// Fully resolved exporter settings
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_address: String,
    pub listen_port: u16,
    pub telemetry_path: String,
    pub api_key: String,
    pub mode: Mode,
    pub api_url: String,
    pub analytics_url: Option<String>,
    pub timeout: Duration,
    pub log_level: LogLevel,
}

impl Config {
    /// Resolve settings from the parsed CLI and the config file it names, if any.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = match cli.config.as_deref() {
            Some(path) => FileConfig::load_from(Path::new(path))?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    /// Layer `cli` over `file` over defaults, then validate.
    pub fn merge(cli: &Cli, file: FileConfig) -> Result<Self> {
        let FileConfig {
            web,
            controld,
            log: log_section,
        } = file;

        let api_key = cli
            .api_key
            .clone()
            .or(controld.api_key)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let telemetry_path = cli
            .telemetry_path
            .clone()
            .or(web.telemetry_path)
            .unwrap_or_else(|| DEFAULT_TELEMETRY_PATH.to_string());
        validate_telemetry_path(&telemetry_path)?;

        let log_level = match cli.log_level.as_deref().or(log_section.level.as_deref()) {
            Some(level) => level.parse::<LogLevel>()?,
            None => LogLevel::Info,
        };

        let timeout_secs = cli
            .timeout
            .or(controld.timeout)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(
                ConfigError::Invalid("timeout must be at least one second".to_string()).into(),
            );
        }

        // A bare flag cannot express "false", so either source can enable it.
        let business_mode = cli.business_mode || controld.business_mode.unwrap_or(false);

        Ok(Self {
            listen_address: cli
                .listen_address
                .clone()
                .or(web.listen_address)
                .unwrap_or_else(|| DEFAULT_LISTEN_ADDRESS.to_string()),
            listen_port: cli
                .listen_port
                .or(web.listen_port)
                .unwrap_or(DEFAULT_LISTEN_PORT),
            telemetry_path,
            api_key,
            mode: Mode::from_business_flag(business_mode),
            api_url: cli
                .api_url
                .clone()
                .or(controld.api_url)
                .unwrap_or_else(|| API_BASE_URL.to_string()),
            analytics_url: cli.analytics_url.clone().or(controld.analytics_url),
            timeout: Duration::from_secs(timeout_secs),
            log_level,
        })
    }
}

fn validate_telemetry_path(path: &str) -> Result<()> {
    if !path.starts_with('/') {
        return Err(ConfigError::Invalid(format!(
            "telemetry path '{}' must start with '/'",
            path
        ))
        .into());
    }
    if path == "/" {
        return Err(ConfigError::Invalid(
            "telemetry path must not be '/', which serves the help page".to_string(),
        )
        .into());
    }
    // The router reads these as captures or wildcards.
    let has_route_syntax = path.contains(['{', '}'])
        || path
            .split('/')
            .any(|segment| segment.starts_with(':') || segment.starts_with('*'));
    if has_route_syntax {
        return Err(ConfigError::Invalid(format!(
            "telemetry path '{}' must not contain '{{', '}}' or segments starting with ':' or '*'",
            path
        ))
        .into());
    }
    Ok(())
}
