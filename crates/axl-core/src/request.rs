//! Request builders for the AXL operations
//!
//! Each builder returns a complete [`AxlRequest`]. Element order inside the
//! operation bodies follows the AXL schema sequence; CUCM rejects bodies
//! with elements out of order.

use crate::envelope::{AxlRequest, EnvelopeWriter};
use crate::error::Result;
use crate::model::{
    LineAppearance, NewLine, NewPhone, PhoneUpdate, UserUpdate,
};

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// `getUser` by user id.
pub fn get_user(version: &str, user_id: &str) -> Result<AxlRequest> {
    let mut w = EnvelopeWriter::new("getUser", version)?;
    w.field("userid", user_id)?;
    w.finish()
}

/// `getPhone` by device name.
pub fn get_phone(version: &str, name: &str) -> Result<AxlRequest> {
    let mut w = EnvelopeWriter::new("getPhone", version)?;
    w.field("name", name)?;
    w.finish()
}

/// `getDeviceProfile` by profile name.
pub fn get_device_profile(version: &str, name: &str) -> Result<AxlRequest> {
    let mut w = EnvelopeWriter::new("getDeviceProfile", version)?;
    w.field("name", name)?;
    w.finish()
}

/// `listDevicePool` by SQL-style name pattern, names only.
pub fn list_device_pool(version: &str, name_pattern: &str) -> Result<AxlRequest> {
    let mut w = EnvelopeWriter::new("listDevicePool", version)?;
    w.open("searchCriteria")?
        .field("name", name_pattern)?
        .close("searchCriteria")?;
    w.open("returnedTags")?.empty("name")?.close("returnedTags")?;
    w.finish()
}

/// `listLine` by SQL-style pattern, patterns only.
pub fn list_line(version: &str, pattern: &str) -> Result<AxlRequest> {
    let mut w = EnvelopeWriter::new("listLine", version)?;
    w.open("searchCriteria")?
        .field("pattern", pattern)?
        .close("searchCriteria")?;
    w.open("returnedTags")?.empty("pattern")?.close("returnedTags")?;
    w.finish()
}

/// `listPhone` by name pattern, returning the localization tags the
/// template copy needs.
pub fn list_phone(version: &str, name_pattern: &str) -> Result<AxlRequest> {
    let mut w = EnvelopeWriter::new("listPhone", version)?;
    w.open("searchCriteria")?
        .field("name", name_pattern)?
        .close("searchCriteria")?;
    w.open("returnedTags")?
        .empty("devicePoolName")?
        .empty("locationName")?
        .empty("mediaResourceListName")?
        .empty("callingSearchSpaceName")?
        .close("returnedTags")?;
    w.finish()
}

/// `addLine` for a new directory number.
pub fn add_line(version: &str, line: &NewLine) -> Result<AxlRequest> {
    let mut w = EnvelopeWriter::new("addLine", version)?;
    w.open("line")?;
    w.field("pattern", &line.pattern)?;
    w.field_opt("description", line.description.as_deref())?;
    w.field_opt("usage", line.usage.as_deref())?;
    w.field_opt("routePartitionName", line.route_partition.as_deref())?;
    w.field_opt("voiceMailProfileName", line.voicemail_profile.as_deref())?;
    w.close("line")?;
    w.finish()
}

/// `addPhone` for a new device with its line appearances.
pub fn add_phone(version: &str, phone: &NewPhone) -> Result<AxlRequest> {
    let mut w = EnvelopeWriter::new("addPhone", version)?;
    w.open("phone")?;
    w.field("name", &phone.name)?;
    w.field_opt("description", phone.description.as_deref())?;
    w.field("product", &phone.product)?;
    w.field("model", &phone.product)?;
    w.field("class", &phone.class)?;
    w.field("protocol", &phone.protocol)?;
    w.field_opt("protocolSide", phone.protocol_side.as_deref())?;
    w.field_opt("callingSearchSpaceName", phone.calling_search_space.as_deref())?;
    w.field("devicePoolName", &phone.device_pool)?;
    w.field_opt("locationName", phone.location.as_deref())?;
    w.field_opt("mediaResourceListName", phone.media_resource_list.as_deref())?;
    w.field_opt("sipProfileName", phone.sip_profile.as_deref())?;
    write_lines(&mut w, &phone.lines)?;
    w.field_opt("userLocale", phone.user_locale.as_deref())?;
    w.field_opt("networkLocale", phone.network_locale.as_deref())?;
    w.field_opt("builtInBridgeStatus", phone.built_in_bridge.as_deref())?;
    w.field_opt("ownerUserName", phone.owner_user_name.as_deref())?;
    w.close("phone")?;
    w.finish()
}

fn write_lines(w: &mut EnvelopeWriter, lines: &[LineAppearance]) -> Result<()> {
    if lines.is_empty() {
        return Ok(());
    }
    w.open("lines")?;
    for line in lines {
        write_line_appearance(w, line)?;
    }
    w.close("lines")?;
    Ok(())
}

fn write_line_appearance(w: &mut EnvelopeWriter, line: &LineAppearance) -> Result<()> {
    w.open("line")?;
    w.field("index", &line.index.to_string())?;
    w.field_opt("label", line.label.as_deref())?;
    w.field_opt("display", line.display.as_deref())?;

    match line.dirn_uuid.as_deref() {
        Some(uuid) => w.open_with("dirn", &[("uuid", uuid)])?,
        None => w.open("dirn")?,
    };
    w.field("pattern", &line.pattern)?;
    w.field_opt("routePartitionName", line.route_partition.as_deref())?;
    w.close("dirn")?;

    w.field_opt("ringSetting", line.ring_setting.as_deref())?;
    w.field_opt("consecutiveRingSetting", line.consecutive_ring_setting.as_deref())?;
    w.field_opt("ringSettingIdlePickupAlert", line.ring_setting_idle_pickup_alert.as_deref())?;
    w.field_opt("ringSettingActivePickupAlert", line.ring_setting_active_pickup_alert.as_deref())?;
    w.field_opt("displayAscii", line.display_ascii.as_deref())?;
    w.field_opt("e164Mask", line.e164_mask.as_deref())?;
    w.field_opt("mwlPolicy", line.mwl_policy.as_deref())?;
    if let Some(max_num_calls) = line.max_num_calls {
        w.field("maxNumCalls", &max_num_calls.to_string())?;
    }
    if let Some(busy_trigger) = line.busy_trigger {
        w.field("busyTrigger", &busy_trigger.to_string())?;
    }
    if let Some(display) = &line.call_info_display {
        w.open("callInfoDisplay")?;
        w.field("callerName", bool_str(display.caller_name))?;
        w.field("callerNumber", bool_str(display.caller_number))?;
        w.field("redirectedNumber", bool_str(display.redirected_number))?;
        w.field("dialedNumber", bool_str(display.dialed_number))?;
        w.close("callInfoDisplay")?;
    }
    w.field_opt("recordingProfileName", line.recording_profile.as_deref())?;
    w.field_opt("recordingFlag", line.recording_flag.as_deref())?;
    w.field_opt("audibleMwi", line.audible_mwi.as_deref())?;
    w.field_opt("partitionUsage", line.partition_usage.as_deref())?;
    if !line.associated_users.is_empty() {
        w.open("associatedEndusers")?;
        for user_id in &line.associated_users {
            w.open("enduser")?.field("userId", user_id)?.close("enduser")?;
        }
        w.close("associatedEndusers")?;
    }
    if let Some(missed) = line.missed_call_logging {
        w.field("missedCallLogging", bool_str(missed))?;
    }
    w.field_opt("recordingMediaSource", line.recording_media_source.as_deref())?;
    w.close("line")?;
    Ok(())
}

/// `updateUser` with the fields the update carries.
pub fn update_user(version: &str, update: &UserUpdate) -> Result<AxlRequest> {
    let mut w = EnvelopeWriter::new("updateUser", version)?;
    w.field("userid", &update.user_id)?;
    if let Some(devices) = &update.associated_devices {
        w.open("associatedDevices")?;
        for device in devices {
            w.field("device", device)?;
        }
        w.close("associatedDevices")?;
    }
    if let Some(extension) = &update.primary_extension {
        w.open("primaryExtension")?;
        w.field("pattern", &extension.pattern)?;
        w.field("routePartitionName", &extension.route_partition)?;
        w.close("primaryExtension")?;
    }
    if let Some(groups) = &update.associated_groups {
        w.open("associatedGroups")?;
        for group in groups {
            w.open("userGroup")?.field("name", group)?.close("userGroup")?;
        }
        w.close("associatedGroups")?;
    }
    if let Some(home_cluster) = update.home_cluster {
        w.field("homeCluster", bool_str(home_cluster))?;
    }
    if let Some(enable) = update.im_and_presence_enable {
        w.field("imAndPresenceEnable", bool_str(enable))?;
    }
    w.finish()
}

/// `updatePhone` with the localization fields the update carries.
pub fn update_phone(version: &str, update: &PhoneUpdate) -> Result<AxlRequest> {
    let mut w = EnvelopeWriter::new("updatePhone", version)?;
    w.field("name", &update.name)?;
    w.field_opt("callingSearchSpaceName", update.calling_search_space.as_deref())?;
    w.field_opt("devicePoolName", update.device_pool.as_deref())?;
    w.field_opt("locationName", update.location.as_deref())?;
    w.field_opt("mediaResourceListName", update.media_resource_list.as_deref())?;
    w.finish()
}

/// `executeSQLUpdate` carrying a raw SQL statement.
pub fn execute_sql_update(version: &str, sql: &str) -> Result<AxlRequest> {
    let mut w = EnvelopeWriter::new("executeSQLUpdate", version)?;
    w.field("sql", sql)?;
    w.finish()
}

/// `removePhone` by device name.
pub fn remove_phone(version: &str, name: &str) -> Result<AxlRequest> {
    let mut w = EnvelopeWriter::new("removePhone", version)?;
    w.field("name", name)?;
    w.finish()
}

/// `removeDeviceProfile` by profile name.
pub fn remove_device_profile(version: &str, name: &str) -> Result<AxlRequest> {
    let mut w = EnvelopeWriter::new("removeDeviceProfile", version)?;
    w.field("name", name)?;
    w.finish()
}
