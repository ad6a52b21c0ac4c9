//! Configuration for qrcon
//!
//! Centralized configuration with sensible defaults.
//!
//! Connection values normally come from external tooling (a config file or
//! CLI flags); this module only holds them. Host resolution and socket
//! setup happen in [`RconClient::connect`](crate::network::RconClient::connect).

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::{RconError, Result};

/// Default receive timeout. Bounds the wait for each NEXT response
/// datagram, not the total call duration.
pub const DEFAULT_TIMEOUT_MS: u64 = 200;

/// Default local bind address (any interface, ephemeral port)
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:0";

/// Connection settings for one rcon client
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Remote server address (host:port)
    pub remote_addr: String,

    /// Local bind address (host:port)
    pub bind_addr: String,

    /// Shared admin password, sent in clear on every request
    pub password: String,

    /// Receive timeout (milliseconds)
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            remote_addr: "127.0.0.1:29070".to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            password: String::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load a config from a YAML file
    ///
    /// Omitted keys fall back to their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading config from {}", path.display());

        let file = File::open(path).map_err(|e| {
            RconError::Config(format!("failed to open {}: {}", path.display(), e))
        })?;

        serde_yaml::from_reader(file).map_err(|e| {
            RconError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }
}

/// Builder for ClientConfig
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the remote server address (host:port)
    pub fn remote_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.remote_addr = addr.into();
        self
    }

    /// Set the local bind address (host:port)
    pub fn bind_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.bind_addr = addr.into();
        self
    }

    /// Set the admin password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = password.into();
        self
    }

    /// Set the receive timeout (in milliseconds)
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.config.timeout_ms = ms;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
