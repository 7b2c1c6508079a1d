//! Error types for the provisioning workflows

use axl_client::ClientError;
use thiserror::Error;

/// Result type for provisioning operations
pub type Result<T> = std::result::Result<T, ProvisionError>;

/// Errors that terminate a provisioning workflow
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// AXL call failed in a step with no fallback
    #[error(transparent)]
    Client(#[from] ClientError),

    /// End user lookup failed
    #[error("No End User found for {user_id}")]
    UserNotFound { user_id: String },

    /// Operator declined to continue or gave an unusable confirmation
    #[error("Aborted: {reason}")]
    Aborted { reason: String },

    /// No allocatable extension under the search prefix
    #[error("No extension available under prefix {prefix}")]
    NoExtensionAvailable { prefix: String },

    /// Neither extension mobility profile name matched
    #[error("No EM Profile Found for {user_id}")]
    MissingProfile { user_id: String },

    /// Operator input the workflow cannot use
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Roster file could not be read
    #[error("Roster error: {0}")]
    Roster(#[from] csv::Error),

    /// Site profile could not be loaded
    #[error("Site profile error: {message}")]
    Site { message: String },
}

impl ProvisionError {
    /// Create an abort error
    pub fn aborted(reason: impl Into<String>) -> Self {
        Self::Aborted {
            reason: reason.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a missing user error
    pub fn user_not_found(user_id: impl Into<String>) -> Self {
        Self::UserNotFound {
            user_id: user_id.into(),
        }
    }

    /// Create a site profile error
    pub fn site(message: impl Into<String>) -> Self {
        Self::Site {
            message: message.into(),
        }
    }
}
