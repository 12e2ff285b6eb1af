//! Page configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults that suit local development.

use std::env;

use thiserror::Error;

/// Cart page configuration.
///
/// Read-only after startup. Store-level display strings live here;
/// per-view pricing data (items, adjustments) comes from the seed.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Bind address (default: 127.0.0.1).
    pub bind_addr: String,

    /// HTTP port.
    pub port: u16,

    /// Store name rendered in the header logo.
    pub store_name: String,

    /// Label under the "Shipping & Handling" row, when the shipping
    /// estimator has picked a method.
    pub shipping_method: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            bind_addr: "127.0.0.1".to_string(),
            port: 8780,
            store_name: "Oakline Cabinet Co.".to_string(),
            shipping_method: Some("Ground Shipping - Standard Delivery".to_string()),
        }
    }
}

impl PageConfig {
    /// Loads configuration from environment variables.
    ///
    /// ## Environment Variables
    /// - `CART_PAGE_BIND`: bind address
    /// - `CART_PAGE_PORT`: HTTP port
    /// - `CART_PAGE_STORE_NAME`: header store name
    /// - `CART_PAGE_SHIPPING_METHOD`: shipping row label (empty unsets)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = PageConfig::default();

        if let Ok(bind_addr) = env::var("CART_PAGE_BIND") {
            config.bind_addr = bind_addr;
        }

        if let Ok(port) = env::var("CART_PAGE_PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CART_PAGE_PORT".to_string()))?;
        }

        if let Ok(store_name) = env::var("CART_PAGE_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(method) = env::var("CART_PAGE_SHIPPING_METHOD") {
            config.shipping_method = if method.is_empty() {
                None
            } else {
                Some(method)
            };
        }

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was present but unparseable.
    #[error("invalid value for {0}")]
    InvalidValue(String),
}
