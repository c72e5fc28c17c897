//! # Configuration
//!
//! Process-wide immutable configuration, resolved once at startup.
//!
//! Values are layered from an optional `config/default.toml` file and
//! `SHIP_QUOTE__*` environment variables (a `.env` file is honored via
//! dotenvy in the binary). Nothing is re-read per call.
//!
//! # Environment
//!
//! - `SHIP_QUOTE__LOGISTICS__TOKEN` - provider API token (required)
//! - `SHIP_QUOTE__LOGISTICS__SHOP_ID` - provider shop account (required)
//! - `SHIP_QUOTE__LOGISTICS__BASE_URL` - provider gateway base URL
//! - `SHIP_QUOTE__RATES__ENDPOINT` - rate table endpoint
//! - `SHIP_QUOTE__SERVER__PORT` - listen port

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Logistics provider credentials and endpoint.
    pub logistics: LogisticsConfig,
    /// Rate source settings.
    #[serde(default)]
    pub rates: RateSourceConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Logistics provider credentials and endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticsConfig {
    /// Gateway base URL.
    #[serde(default = "default_logistics_base_url")]
    pub base_url: String,
    /// Static API token.
    pub token: String,
    /// Shop account the service and fee lookups are scoped to.
    pub shop_id: i64,
    /// Bounded per-call timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

/// Rate source settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RateSourceConfig {
    /// Full URL of the rate table, reference currency included.
    #[serde(default = "default_rate_endpoint")]
    pub endpoint: String,
    /// The one currency entry consumed from the table.
    #[serde(default = "default_target_currency")]
    pub target_currency: String,
    /// Bounded per-call timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9999
}

fn default_logistics_base_url() -> String {
    "https://online-gateway.ghn.vn/shiip/public-api".to_string()
}

fn default_rate_endpoint() -> String {
    "https://open.er-api.com/v6/latest/USD".to_string()
}

fn default_target_currency() -> String {
    "VND".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for RateSourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_rate_endpoint(),
            target_currency: default_target_currency(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from file and environment.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if sources cannot be read or required fields
    /// (provider token, shop id) are missing.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                Environment::with_prefix("SHIP_QUOTE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
