//! Connection settings for the AXL service

use crate::error::{ClientError, Result};

/// Environment variable holding the AXL account name
pub const ENV_USERNAME: &str = "AXL_USERNAME";
/// Environment variable holding the AXL account password
pub const ENV_PASSWORD: &str = "AXL_PASSWORD";
/// Environment variable holding the publisher host name or address
pub const ENV_ADDRESS: &str = "CUCM_ADDRESS";

/// Settings for one CUCM publisher connection.
///
/// The AXL service listens on the publisher's HTTPS port and publishers
/// commonly run with self-signed certificates, so verification is off
/// unless [`AxlConfig::with_verify_tls`] turns it on.
#[derive(Debug, Clone)]
pub struct AxlConfig {
    /// Publisher host name or address
    pub host: String,
    /// Application account with AXL API access
    pub username: String,
    /// Application account password
    pub password: String,
    /// HTTPS port of the AXL service
    pub port: u16,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Verify the publisher's TLS certificate
    pub verify_tls: bool,
    /// AXL schema version sent with every request
    pub version: String,
    /// Full endpoint override; when set, `host` and `port` are ignored
    pub base_url: Option<String>,
}

impl AxlConfig {
    /// Create a configuration with the default port, timeout and schema version.
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            password: password.into(),
            port: 8443,
            timeout_secs: 10,
            verify_tls: false,
            version: "14.0".to_string(),
            base_url: None,
        }
    }

    /// Read the connection settings from `CUCM_ADDRESS`, `AXL_USERNAME`
    /// and `AXL_PASSWORD`.
    pub fn from_env() -> Result<Self> {
        let host = require_env(ENV_ADDRESS)?;
        let username = require_env(ENV_USERNAME)?;
        let password = require_env(ENV_PASSWORD)?;
        Ok(Self::new(host, username, password))
    }

    /// Set the HTTPS port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Enable or disable TLS certificate verification.
    pub fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }

    /// Set the AXL schema version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Point the client at an explicit endpoint URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// The URL requests are posted to.
    pub fn endpoint(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => format!("https://{}:{}/axl/", self.host, self.port),
        }
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ClientError::config(format!("{name} is not set")))
}
