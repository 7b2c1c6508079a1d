//! Wire-level data model for the AXL operations the toolkit speaks
//!
//! Read-side types mirror what CUCM returns; write-side types carry exactly
//! the fields the provisioning workflows send. `None` fields are omitted
//! from the request, which AXL treats as "leave unchanged" on updates and
//! "use the server default" on adds.

/// Element carrying a text value and an optional `uuid` attribute.
///
/// AXL name references (`devicePoolName`, `ldapDirectoryName`, ...) arrive
/// as `<devicePoolName uuid="{...}">Default</devicePoolName>`. An empty
/// text value means the reference is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameRef {
    /// Referenced object name, when set
    pub name: Option<String>,
    /// CUCM object uuid, braced uppercase hex
    pub uuid: Option<String>,
}

impl NameRef {
    /// Reference by name only.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            uuid: None,
        }
    }

    /// The referenced name, `None` when the reference is unset or empty.
    pub fn as_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Whether the reference points at anything.
    pub fn is_set(&self) -> bool {
        self.as_name().is_some()
    }
}

/// End user as returned by `getUser`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndUser {
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Raw directory number string; may carry formatting characters
    pub telephone_number: Option<String>,
    /// Directory-sync source; unset for locally managed users
    pub ldap_directory: NameRef,
    pub uuid: Option<String>,
}

impl EndUser {
    /// "First Last", falling back to the user id when both names are blank.
    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            self.user_id.clone()
        } else {
            name
        }
    }
}

/// Phone device as returned by `getPhone`, or a `listPhone` row.
///
/// `listPhone` rows only populate the fields named in the request's
/// returnedTags; everything else stays default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Phone {
    pub name: String,
    pub description: Option<String>,
    pub device_pool: NameRef,
    pub location: NameRef,
    pub media_resource_list: NameRef,
    pub calling_search_space: NameRef,
    pub lines: Vec<LineSummary>,
    pub uuid: Option<String>,
}

/// Line appearance summary on a fetched phone or device profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSummary {
    /// Button position, 1-based
    pub index: u32,
    /// Directory number pattern
    pub pattern: String,
    pub route_partition: NameRef,
    /// External caller-ID mask
    pub e164_mask: Option<String>,
    pub busy_trigger: Option<u32>,
    pub uuid: Option<String>,
}

/// Extension-mobility device profile as returned by `getDeviceProfile`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceProfile {
    pub name: String,
    pub description: Option<String>,
    pub lines: Vec<LineSummary>,
    pub uuid: Option<String>,
}

/// Device pool row from `listDevicePool`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DevicePool {
    pub name: String,
    pub uuid: Option<String>,
}

/// Directory number row from `listLine`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEntry {
    pub pattern: String,
    pub uuid: Option<String>,
}

/// New directory number for `addLine`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewLine {
    pub pattern: String,
    pub description: Option<String>,
    /// Line usage class, `Device` for ordinary phone lines
    pub usage: Option<String>,
    pub route_partition: Option<String>,
    pub voicemail_profile: Option<String>,
}

/// Per-line caller information display flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallInfoDisplay {
    pub caller_name: bool,
    pub caller_number: bool,
    pub redirected_number: bool,
    pub dialed_number: bool,
}

impl Default for CallInfoDisplay {
    fn default() -> Self {
        Self {
            caller_name: true,
            caller_number: false,
            redirected_number: false,
            dialed_number: true,
        }
    }
}

/// Line appearance carried inside `addPhone`.
///
/// Field order here mirrors the schema sequence AXL expects on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineAppearance {
    pub index: u32,
    pub label: Option<String>,
    pub display: Option<String>,
    /// Directory number pattern this appearance points at
    pub pattern: String,
    pub route_partition: Option<String>,
    /// Uuid of the directory number, as returned by `addLine`
    pub dirn_uuid: Option<String>,
    pub ring_setting: Option<String>,
    pub consecutive_ring_setting: Option<String>,
    pub ring_setting_idle_pickup_alert: Option<String>,
    pub ring_setting_active_pickup_alert: Option<String>,
    pub display_ascii: Option<String>,
    pub e164_mask: Option<String>,
    pub mwl_policy: Option<String>,
    pub max_num_calls: Option<u32>,
    pub busy_trigger: Option<u32>,
    pub call_info_display: Option<CallInfoDisplay>,
    pub recording_profile: Option<String>,
    pub recording_flag: Option<String>,
    pub audible_mwi: Option<String>,
    pub partition_usage: Option<String>,
    /// End users associated with this appearance
    pub associated_users: Vec<String>,
    pub missed_call_logging: Option<bool>,
    pub recording_media_source: Option<String>,
}

/// Phone device for `addPhone`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPhone {
    pub name: String,
    pub description: Option<String>,
    /// Device type, doubles as the `model` element on the wire
    pub product: String,
    pub class: String,
    pub protocol: String,
    pub protocol_side: Option<String>,
    pub calling_search_space: Option<String>,
    pub device_pool: String,
    pub location: Option<String>,
    pub media_resource_list: Option<String>,
    pub sip_profile: Option<String>,
    pub lines: Vec<LineAppearance>,
    pub user_locale: Option<String>,
    pub network_locale: Option<String>,
    pub built_in_bridge: Option<String>,
    pub owner_user_name: Option<String>,
}

/// Primary extension reference on an end user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimaryExtension {
    pub pattern: String,
    pub route_partition: String,
}

/// Field set for `updateUser`. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserUpdate {
    pub user_id: String,
    pub associated_devices: Option<Vec<String>>,
    pub primary_extension: Option<PrimaryExtension>,
    /// Access-control group names
    pub associated_groups: Option<Vec<String>>,
    pub home_cluster: Option<bool>,
    pub im_and_presence_enable: Option<bool>,
}

/// Field set for `updatePhone`. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneUpdate {
    pub name: String,
    pub device_pool: Option<String>,
    pub location: Option<String>,
    pub media_resource_list: Option<String>,
    pub calling_search_space: Option<String>,
}
