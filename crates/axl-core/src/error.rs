//! Error types for the AXL protocol layer

use thiserror::Error;

/// Result type for AXL protocol operations
pub type Result<T> = std::result::Result<T, AxlError>;

/// Fault detail returned by CUCM inside a SOAP fault body.
///
/// CUCM reports application errors (item not found, constraint violations)
/// as SOAP faults carrying an `axlError` detail block with its own error
/// code and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxlFault {
    /// SOAP fault code, e.g. `soapenv:Client`
    pub fault_code: String,
    /// Human-readable fault text
    pub fault_string: String,
    /// AXL error code from the fault detail, when present
    pub axl_code: Option<i64>,
    /// AXL error message from the fault detail, when present
    pub axl_message: Option<String>,
}

impl std::fmt::Display for AxlFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.axl_code {
            Some(code) => write!(f, "{} (axl error {})", self.fault_string, code),
            None => write!(f, "{}", self.fault_string),
        }
    }
}

/// Errors raised while building requests or interpreting responses
#[derive(Debug, Error)]
pub enum AxlError {
    /// XML could not be written or read
    #[error("XML error: {0}")]
    Xml(String),

    /// The server answered with a SOAP fault
    #[error("AXL fault: {0}")]
    Fault(AxlFault),

    /// A response arrived without an element the operation requires
    #[error("missing element <{element}> in {operation} response")]
    MissingElement { operation: String, element: String },

    /// A response element held a value that could not be interpreted
    #[error("invalid value for <{element}>: {value}")]
    InvalidValue { element: String, value: String },
}

impl AxlError {
    /// Wrap a low-level XML codec error
    pub fn xml(err: impl ToString) -> Self {
        Self::Xml(err.to_string())
    }

    /// Create a missing-element error
    pub fn missing(operation: impl Into<String>, element: impl Into<String>) -> Self {
        Self::MissingElement {
            operation: operation.into(),
            element: element.into(),
        }
    }

    /// Create an invalid-value error
    pub fn invalid(element: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            element: element.into(),
            value: value.into(),
        }
    }

    /// The fault payload, when this error carries one
    pub fn fault(&self) -> Option<&AxlFault> {
        match self {
            Self::Fault(fault) => Some(fault),
            _ => None,
        }
    }
}
