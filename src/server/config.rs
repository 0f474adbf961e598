use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Startup configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Prefix for issued invoice numbers.
    pub invoice_prefix: String,
    /// First sequence number issued after startup. Numbers are not
    /// persisted, so a restarted server continues from here.
    pub first_number: u64,
    /// Zero-padding width of the sequence number.
    pub number_width: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            invoice_prefix: crate::core::INVOICE_PREFIX.to_string(),
            first_number: 1,
            number_width: 4,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, reading `.env` first
    /// if present.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `GST_INVOICE_HOST` | `127.0.0.1` |
    /// | `GST_INVOICE_PORT` | `8080` |
    /// | `GST_INVOICE_PREFIX` | `INV-` |
    /// | `GST_INVOICE_FIRST_NUMBER` | `1` |
    /// | `GST_INVOICE_NUMBER_WIDTH` | `4` |
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("GST_INVOICE_HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "GST_INVOICE_PORT", defaults.port)?,
            invoice_prefix: lookup("GST_INVOICE_PREFIX").unwrap_or(defaults.invoice_prefix),
            first_number: parse_or(&lookup, "GST_INVOICE_FIRST_NUMBER", defaults.first_number)?,
            number_width: parse_or(&lookup, "GST_INVOICE_NUMBER_WIDTH", defaults.number_width)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        None => Ok(default),
    }
}
