//! Line and phone payload assembly
//!
//! Builders for the `addLine`/`addPhone` bodies. Constants here are the
//! CSF device type and the per-line settings every agent gets; anything
//! site-specific comes in through [`SiteProfile`](crate::site::SiteProfile).

use axl_core::model::{CallInfoDisplay, LineAppearance, LineSummary, NewLine, NewPhone};

use crate::site::{Localization, SiteProfile};

/// Device type of a Jabber soft phone.
pub const CSF_PRODUCT: &str = "Cisco Unified Client Services Framework";
/// SIP profile every CSF is created with.
pub const SIP_PROFILE: &str = "Standard SIP Profile";

const USER_LOCALE: &str = "English United States";
const NETWORK_LOCALE: &str = "United States";

/// First character upper, the rest lower. User ids and device names are
/// stored capitalized while operators habitually type lowercase e-numbers.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// CSF device name for an employee number.
pub fn csf_name(enumber: &str) -> String {
    format!("CSF{}", capitalize(enumber))
}

/// New directory number with the site's partition and voicemail profile.
pub fn agent_dn(pattern: u64, description: &str, site: &SiteProfile) -> NewLine {
    NewLine {
        pattern: pattern.to_string(),
        description: Some(description.to_string()),
        usage: Some("Device".to_string()),
        route_partition: Some(site.route_partition.clone()),
        voicemail_profile: Some(site.voicemail_profile.clone()),
    }
}

/// Line appearance for a freshly minted agent DN: recording on, busy
/// trigger 1, two calls max, the owning user associated.
pub fn agent_line(
    index: u32,
    pattern: u64,
    dirn_uuid: &str,
    description: &str,
    caller_id: Option<&str>,
    user_id: &str,
    site: &SiteProfile,
) -> LineAppearance {
    LineAppearance {
        index,
        label: Some(description.to_string()),
        display: Some(description.to_string()),
        pattern: pattern.to_string(),
        route_partition: Some(site.route_partition.clone()),
        dirn_uuid: Some(dirn_uuid.to_string()),
        ring_setting: Some("Use System Default".to_string()),
        consecutive_ring_setting: Some("Use System Default".to_string()),
        ring_setting_idle_pickup_alert: Some("Use System Default".to_string()),
        ring_setting_active_pickup_alert: Some("Use System Default".to_string()),
        display_ascii: Some(description.to_string()),
        e164_mask: caller_id.filter(|mask| !mask.is_empty()).map(str::to_string),
        mwl_policy: Some("Use System Policy".to_string()),
        max_num_calls: Some(2),
        busy_trigger: Some(1),
        call_info_display: Some(CallInfoDisplay::default()),
        recording_profile: Some(site.recording_profile.clone()),
        recording_flag: Some("Automatic Call Recording Enabled".to_string()),
        audible_mwi: Some("Default".to_string()),
        partition_usage: Some("General".to_string()),
        associated_users: vec![user_id.to_string()],
        missed_call_logging: Some(true),
        recording_media_source: Some("Phone Preferred".to_string()),
    }
}

/// Line appearance copied verbatim off a device profile during migration.
pub fn copied_line(summary: &LineSummary) -> LineAppearance {
    LineAppearance {
        index: summary.index,
        pattern: summary.pattern.clone(),
        route_partition: summary.route_partition.as_name().map(str::to_string),
        dirn_uuid: summary.uuid.clone(),
        e164_mask: summary.e164_mask.clone(),
        busy_trigger: summary.busy_trigger,
        ..LineAppearance::default()
    }
}

/// New-agent CSF carrying the resolved localization and fresh lines.
pub fn agent_csf(
    name: &str,
    description: &str,
    owner: &str,
    localization: &Localization,
    lines: Vec<LineAppearance>,
) -> NewPhone {
    NewPhone {
        name: name.to_string(),
        description: Some(description.to_string()),
        product: CSF_PRODUCT.to_string(),
        class: "Phone".to_string(),
        protocol: "SIP".to_string(),
        protocol_side: Some("User".to_string()),
        calling_search_space: Some(localization.calling_search_space.clone()),
        device_pool: localization.device_pool.clone(),
        location: Some(localization.location.clone()),
        media_resource_list: Some(localization.media_resource_list.clone()),
        sip_profile: Some(SIP_PROFILE.to_string()),
        lines,
        user_locale: Some(USER_LOCALE.to_string()),
        network_locale: Some(NETWORK_LOCALE.to_string()),
        built_in_bridge: Some("On".to_string()),
        owner_user_name: Some(owner.to_string()),
    }
}

/// Migration CSF carrying lines copied off the device profile. Localization
/// stays at the site's pool and location; media resources and locales are
/// left to the server defaults, as the migration runbook always did.
pub fn migrated_csf(
    name: &str,
    description: &str,
    owner: &str,
    localization: &Localization,
    lines: Vec<LineAppearance>,
) -> NewPhone {
    NewPhone {
        name: name.to_string(),
        description: Some(description.to_string()),
        product: CSF_PRODUCT.to_string(),
        class: "Phone".to_string(),
        protocol: "SIP".to_string(),
        protocol_side: Some("User".to_string()),
        device_pool: localization.device_pool.clone(),
        location: Some(localization.location.clone()),
        sip_profile: Some(SIP_PROFILE.to_string()),
        lines,
        built_in_bridge: Some("On".to_string()),
        owner_user_name: Some(owner.to_string()),
        ..NewPhone::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axl_core::model::NameRef;

    #[test]
    fn capitalize_matches_stored_user_ids() {
        assert_eq!(capitalize("e000123"), "E000123");
        assert_eq!(capitalize("E000123"), "E000123");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn csf_name_prefixes_the_capitalized_enumber() {
        assert_eq!(csf_name("e000123"), "CSFE000123");
    }

    #[test]
    fn agent_line_sets_the_recording_contract() {
        let site = SiteProfile::default();
        let line = agent_line(1, 1216053006, "{DN1}", "Jane Doe 1216053006", None, "e000123", &site);
        assert_eq!(line.recording_profile.as_deref(), Some("ZoomCallRec"));
        assert_eq!(
            line.recording_flag.as_deref(),
            Some("Automatic Call Recording Enabled")
        );
        assert_eq!(line.recording_media_source.as_deref(), Some("Phone Preferred"));
        assert_eq!(line.busy_trigger, Some(1));
        assert_eq!(line.max_num_calls, Some(2));
        assert_eq!(line.associated_users, vec!["e000123".to_string()]);
        assert_eq!(line.e164_mask, None);
    }

    #[test]
    fn copied_line_keeps_only_the_profile_fields() {
        let summary = LineSummary {
            index: 1,
            pattern: "1216053001".to_string(),
            route_partition: NameRef::named("PCCE_DN_PT"),
            e164_mask: Some("7135551234".to_string()),
            busy_trigger: Some(1),
            uuid: Some("{L1}".to_string()),
        };
        let line = copied_line(&summary);
        assert_eq!(line.pattern, "1216053001");
        assert_eq!(line.route_partition.as_deref(), Some("PCCE_DN_PT"));
        assert_eq!(line.e164_mask.as_deref(), Some("7135551234"));
        assert_eq!(line.dirn_uuid.as_deref(), Some("{L1}"));
        assert!(line.recording_profile.is_none());
        assert!(line.associated_users.is_empty());
    }

    #[test]
    fn agent_csf_carries_the_resolved_localization() {
        let localization = Localization {
            device_pool: "ICU_DP".to_string(),
            ..Localization::default()
        };
        let phone = agent_csf("CSFE000123", "Jane Doe 1216053006", "E000123", &localization, vec![]);
        assert_eq!(phone.product, CSF_PRODUCT);
        assert_eq!(phone.device_pool, "ICU_DP");
        assert_eq!(phone.media_resource_list.as_deref(), Some("MC_MRGL"));
        assert_eq!(phone.owner_user_name.as_deref(), Some("E000123"));
        assert_eq!(phone.built_in_bridge.as_deref(), Some("On"));
    }

    #[test]
    fn migrated_csf_leaves_media_resources_to_the_server() {
        let phone = migrated_csf(
            "CSFE000123",
            "Jane Doe EM",
            "E000123",
            &Localization::default(),
            vec![],
        );
        assert_eq!(phone.device_pool, "Default");
        assert_eq!(phone.location.as_deref(), Some("Hub_None"));
        assert!(phone.media_resource_list.is_none());
        assert!(phone.calling_search_space.is_none());
        assert!(phone.user_locale.is_none());
    }
}
