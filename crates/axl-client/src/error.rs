//! Error types for the AXL client library

use axl_core::{AxlError, AxlFault};
use thiserror::Error;

/// Result type for AXL client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the AXL service
#[derive(Debug, Error)]
pub enum ClientError {
    /// Protocol error, including SOAP faults returned by the service
    #[error(transparent)]
    Axl(#[from] AxlError),

    /// HTTP transport error
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Credentials were rejected by the service
    #[error("Authentication failed for user '{username}'")]
    Authentication { username: String },

    /// Unexpected HTTP status with no parseable fault in the body
    #[error("{operation} failed with HTTP status {status}")]
    Status { operation: String, status: u16 },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ClientError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True when the service answered with a SOAP fault
    pub fn is_fault(&self) -> bool {
        self.fault().is_some()
    }

    /// The SOAP fault carried by this error, when there is one
    pub fn fault(&self) -> Option<&AxlFault> {
        match self {
            Self::Axl(err) => err.fault(),
            _ => None,
        }
    }
}
