//! # Provision Engine
//!
//! The provisioning driver for CUCM agent devices. This crate holds the
//! workflow logic: extension allocation, localization-template copy,
//! payload assembly, the application-user association SQL, and the four
//! runbook workflows, all against the [`axl_client::AxlApi`] seam so they
//! run the same against a publisher or a test double.
//!
//! ## Modules
//!
//! - `appuser`: conditional association insert for application users
//! - `error`: workflow error type
//! - `extension`: next-free directory number allocation
//! - `operator`: prompt seam with terminal and scripted implementations
//! - `payload`: line and phone payload assembly
//! - `site`: per-cluster constants, overridable from TOML
//! - `template`: localization-template copy and the dual-line rules
//! - `workflows`: `new_agent`, `migrate`, `ldap_check`, `relocalize`

pub mod appuser;
pub mod error;
pub mod extension;
pub mod operator;
pub mod payload;
pub mod site;
pub mod template;
pub mod workflows;

pub use error::{ProvisionError, Result};
pub use operator::{Confirmation, Operator, Script, Terminal};
pub use site::{Localization, SiteProfile};
pub use workflows::{
    LdapCheckReport, MigrateOutcome, NewAgentOutcome, RelocalizeOutcome, RosterEntry, SyncStatus,
};

/// Version of this library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
