//! CIPC-to-Jabber migration: copy the EM profile onto a new CSF
//!
//! Sequence: getDeviceProfile with the suffix fallback, addPhone carrying
//! the profile's lines, updateUser, the application-user inserts, then
//! cleanup of the old CIPC and the profile. Cleanup faults never fail a
//! run that already provisioned the new device.

use axl_client::AxlApi;
use axl_core::model::UserUpdate;
use tracing::{debug, info, warn};

use crate::error::{ProvisionError, Result};
use crate::operator::Operator;
use crate::payload::{capitalize, copied_line, csf_name, migrated_csf};
use crate::site::SiteProfile;
use crate::workflows::associate_app_users;

/// What a completed run migrated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateOutcome {
    pub user_id: String,
    pub device_name: String,
    pub profile_name: String,
    pub old_device_removed: bool,
    pub profile_removed: bool,
}

pub async fn run(
    api: &dyn AxlApi,
    operator: &dyn Operator,
    site: &SiteProfile,
) -> Result<MigrateOutcome> {
    let enumber = operator.ask("Enter E# :").trim().to_string();
    let owner = capitalize(&enumber);

    let mut found = None;
    for suffix in &site.profile_suffixes {
        let name = format!("{owner}{suffix}");
        match api.get_device_profile(&name).await {
            Ok(profile) => {
                found = Some((name, profile));
                break;
            }
            Err(err) => debug!(%err, profile = %name, "device profile lookup failed"),
        }
    }
    let Some((profile_name, profile)) = found else {
        operator.say("No EM Profile Found");
        return Err(ProvisionError::MissingProfile { user_id: owner });
    };

    let description = profile.description.clone().unwrap_or_default();
    let lines = profile.lines.iter().map(copied_line).collect();
    let device_name = csf_name(&enumber);

    operator.say(&format!("Creating {device_name}"));
    api.add_phone(&migrated_csf(
        &device_name,
        &description,
        &owner,
        &site.localization,
        lines,
    ))
    .await?;
    info!(device = %device_name, profile = %profile_name, "CSF created from EM profile");

    operator.say("Updating EndUser");
    let update = UserUpdate {
        user_id: owner.clone(),
        associated_devices: Some(vec![device_name.clone()]),
        im_and_presence_enable: Some(false),
        ..UserUpdate::default()
    };
    api.update_user(&update).await?;

    associate_app_users(api, operator, site, &device_name).await?;

    // Cleanup. The old CIPC is usually named by the e-number; when it is
    // not, the operator gets one shot at the PC/device id.
    operator.say(&format!(
        "Deleting {profile_name} and associated users CIPC {enumber}"
    ));
    let mut old_device_removed = match api.remove_phone(&enumber).await {
        Ok(_) => true,
        Err(err) => {
            debug!(%err, device = %enumber, "removePhone by e-number failed");
            false
        }
    };
    if !old_device_removed {
        let device_id = capitalize(
            operator
                .ask(&format!(
                    "Couldn't find the phone with the name of {enumber}, try the PC/Device id:"
                ))
                .trim(),
        );
        match api.remove_phone(&device_id).await {
            Ok(_) => old_device_removed = true,
            Err(err) => {
                operator.say(&format!("removePhone: {err}"));
                warn!(%err, device = %device_id, "old device not removed");
            }
        }
    }

    let profile_removed = match api.remove_device_profile(&profile_name).await {
        Ok(_) => true,
        Err(err) => {
            operator.say(&format!("removeDeviceProfile: {err}"));
            warn!(%err, profile = %profile_name, "device profile not removed");
            false
        }
    };

    Ok(MigrateOutcome {
        user_id: owner,
        device_name,
        profile_name,
        old_device_removed,
        profile_removed,
    })
}
