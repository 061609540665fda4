//! Centralized configuration (environment variables + defaults).

use std::net::SocketAddr;

use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_LEDGER_API_URL: &str = "http://localhost:8081";
pub const DEFAULT_PRODUCER_ID: &str = "PROD-001";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_PUBLIC_URL: &str = "http://localhost:3000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {value}")]
    InvalidUrl { var: &'static str, value: String },

    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_url(var: &'static str, value: String) -> Result<String, ConfigError> {
    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            Ok(value.trim_end_matches('/').to_string())
        }
        _ => Err(ConfigError::InvalidUrl { var, value }),
    }
}

/// Base URL of the ledger backend (`LEDGER_API_URL`).
pub fn ledger_api_url() -> Result<String, ConfigError> {
    parse_url("LEDGER_API_URL", var_or("LEDGER_API_URL", DEFAULT_LEDGER_API_URL))
}

/// Producer identity stamped on new drafts (`PRODUCER_ID`).
pub fn producer_id() -> String {
    var_or("PRODUCER_ID", DEFAULT_PRODUCER_ID)
}

/// Address the portal listens on (`PORTAL_BIND_ADDR`).
pub fn bind_addr() -> Result<SocketAddr, ConfigError> {
    let value = var_or("PORTAL_BIND_ADDR", DEFAULT_BIND_ADDR);
    value.parse().map_err(|_| ConfigError::InvalidAddr {
        var: "PORTAL_BIND_ADDR",
        value,
    })
}

/// Origin encoded into verification QR codes (`PORTAL_PUBLIC_URL`).
pub fn public_url() -> Result<String, ConfigError> {
    parse_url("PORTAL_PUBLIC_URL", var_or("PORTAL_PUBLIC_URL", DEFAULT_PUBLIC_URL))
}

/// Every setting the binaries need, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub ledger_api_url: String,
    pub producer_id: String,
    pub bind_addr: SocketAddr,
    pub public_url: String,
}

impl Settings {
    /// Reads the environment (after loading `.env`, if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Ok(Self {
            ledger_api_url: ledger_api_url()?,
            producer_id: producer_id(),
            bind_addr: bind_addr()?,
            public_url: public_url()?,
        })
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        ledger_api_url: Option<String>,
        producer_id: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = ledger_api_url {
            self.ledger_api_url = parse_url("--api-url", url)?;
        }
        if let Some(id) = producer_id {
            if id.trim().is_empty() {
                return Err(ConfigError::Empty { var: "--producer-id" });
            }
            self.producer_id = id;
        }
        Ok(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ledger_api_url: DEFAULT_LEDGER_API_URL.to_string(),
            producer_id: DEFAULT_PRODUCER_ID.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            public_url: DEFAULT_PUBLIC_URL.to_string(),
        }
    }
}
