//! Receipt API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use receipt_core::ParsePolicy;
use std::env;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default request body limit (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Receipt API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind address (default: 0.0.0.0)
    pub bind_addr: String,

    /// HTTP server port
    pub port: u16,

    /// Reject receipts whose amounts, date or time fail to parse
    pub strict_validation: bool,

    /// Log filter used when RUST_LOG is unset
    pub log_level: String,

    /// Max request body size in bytes
    pub max_body_bytes: usize,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ApiConfig {
            bind_addr: lookup("RECEIPT_API_BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string()),

            port: lookup("RECEIPT_API_PORT")
                .unwrap_or_else(|| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RECEIPT_API_PORT".to_string()))?,

            strict_validation: lookup("RECEIPT_API_STRICT_VALIDATION")
                .unwrap_or_else(|| "false".to_string())
                .parse()
                .map_err(|_| {
                    ConfigError::InvalidValue("RECEIPT_API_STRICT_VALIDATION".to_string())
                })?,

            log_level: lookup("RECEIPT_API_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),

            max_body_bytes: lookup("RECEIPT_API_MAX_BODY_BYTES")
                .unwrap_or_else(|| DEFAULT_MAX_BODY_BYTES.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RECEIPT_API_MAX_BODY_BYTES".to_string()))?,
        };

        if config.bind_addr.trim().is_empty() {
            return Err(ConfigError::MissingRequired(
                "RECEIPT_API_BIND_ADDR".to_string(),
            ));
        }

        if config.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue(
                "RECEIPT_API_MAX_BODY_BYTES".to_string(),
            ));
        }

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Parse policy handed to the receipt service.
    pub fn parse_policy(&self) -> ParsePolicy {
        if self.strict_validation {
            ParsePolicy::Strict
        } else {
            ParsePolicy::Lenient
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            strict_validation: false,
            log_level: "info".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
