//! # AXL Client
//!
//! Async HTTPS client for the Cisco Unified Communications Manager AXL
//! service. Requests are built and parsed by `axl-core`; this crate adds
//! the transport: basic authentication, the `SOAPAction` header, fault
//! routing and the TLS posture CUCM publishers need.
//!
//! ## Example
//!
//! ```no_run
//! use axl_client::{AxlApi, AxlClient, AxlConfig};
//!
//! # async fn run() -> axl_client::Result<()> {
//! let client = AxlClient::new(AxlConfig::from_env()?)?;
//! let user = client.get_user("E000123").await?;
//! println!("{}", user.display_name());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use api::AxlApi;
pub use client::AxlClient;
pub use config::{AxlConfig, ENV_ADDRESS, ENV_PASSWORD, ENV_USERNAME};
pub use error::{ClientError, Result};

/// Version of this library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
