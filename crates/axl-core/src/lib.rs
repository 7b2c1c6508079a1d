//! # AXL Core
//!
//! Protocol layer for the Cisco Unified Communications Manager AXL API.
//! This crate builds SOAP request envelopes for the provisioning
//! operations and parses their responses into plain Rust types, with no
//! opinion about transport.
//!
//! ## Modules
//!
//! - `envelope`: SOAP envelope writer and `SOAPAction` header values
//! - `error`: error and fault types shared by every parser
//! - `model`: plain data types mirroring the AXL request and response shapes
//! - `request`: one builder per supported AXL operation
//! - `response`: one parser per supported AXL operation
//! - `xml`: small namespace-agnostic XML tree used by the parsers

pub mod envelope;
pub mod error;
pub mod model;
pub mod request;
pub mod response;
pub mod xml;

pub use envelope::{soap_action, AxlRequest};
pub use error::{AxlError, AxlFault, Result};
pub use model::{
    CallInfoDisplay, DeviceProfile, DevicePool, EndUser, LineAppearance, LineEntry, LineSummary,
    NameRef, NewLine, NewPhone, Phone, PhoneUpdate, PrimaryExtension, UserUpdate,
};

/// Version of this library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
