//! Site profile: the cluster-specific constants the workflows run against
//!
//! Defaults match the cluster the original runbooks were written for. Any
//! field can be overridden from a TOML file passed on the command line.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ProvisionError, Result};

/// Localization settings applied to a device: device pool, location, media
/// resource group list and calling search space.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Localization {
    pub device_pool: String,
    pub location: String,
    pub media_resource_list: String,
    pub calling_search_space: String,
}

impl Default for Localization {
    fn default() -> Self {
        Self {
            device_pool: "Default".to_string(),
            location: "Hub_None".to_string(),
            media_resource_list: "MC_MRGL".to_string(),
            calling_search_space: "06_Device".to_string(),
        }
    }
}

/// Fixed constants one site provisions agents with.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SiteProfile {
    /// SQL-style prefix used to list candidate directory numbers
    pub dn_search_prefix: String,
    /// Numeric prefix a listed pattern must carry to count as an agent DN
    pub dn_filter_prefix: String,
    /// Prefix separating internal DNs from DIDs
    pub internal_dn_prefix: String,
    /// Route partition every agent DN lands in
    pub route_partition: String,
    pub voicemail_profile: String,
    /// Access-control group granted on updateUser
    pub access_control_group: String,
    /// Call-recording profile set on every agent line
    pub recording_profile: String,
    /// Application users every new CSF is associated with
    pub app_users: Vec<String>,
    /// Extension-mobility profile suffixes tried in order during migration
    pub profile_suffixes: Vec<String>,
    /// Offset between an agent's primary and secondary DN
    pub secondary_dn_offset: u64,
    /// Expected directory-sync source name. When unset, any non-empty
    /// `ldapDirectoryName` counts as synced.
    pub ldap_directory: Option<String>,
    /// Settings used when no template device is copied
    pub localization: Localization,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            dn_search_prefix: "1216053".to_string(),
            dn_filter_prefix: "1216".to_string(),
            internal_dn_prefix: "121".to_string(),
            route_partition: "PCCE_DN_PT".to_string(),
            voicemail_profile: "NoVoiceMail".to_string(),
            access_control_group: "PCCE Standard User".to_string(),
            recording_profile: "ZoomCallRec".to_string(),
            app_users: vec!["pguser".to_string(), "zoomjtapi".to_string()],
            profile_suffixes: vec!["_EM_8841".to_string(), "_EM_8851".to_string()],
            secondary_dn_offset: 1000,
            ldap_directory: None,
            localization: Localization::default(),
        }
    }
}

impl SiteProfile {
    /// Load a profile from a TOML file. Fields the file leaves out keep
    /// their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|err| ProvisionError::site(format!("{}: {err}", path.display())))?;
        toml::from_str(&text)
            .map_err(|err| ProvisionError::site(format!("{}: {err}", path.display())))
    }
}
