//! New-agent provisioning: mint a DN, build a CSF, wire up the user
//!
//! Sequence: getUser, the directory-sync gate, device-pool resolution,
//! extension allocation off listLine, addLine (one or two), the template
//! copy, addPhone, updateUser, and the two application-user inserts.

use axl_client::AxlApi;
use axl_core::model::{PrimaryExtension, UserUpdate};
use tracing::{debug, info};

use crate::error::{ProvisionError, Result};
use crate::extension::next_extension;
use crate::operator::{Confirmation, Operator};
use crate::payload::{agent_csf, agent_dn, agent_line, capitalize, csf_name};
use crate::site::SiteProfile;
use crate::template::LineMode;
use crate::workflows::{associate_app_users, resolve_device_pool, resolve_template};

/// What a completed run provisioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAgentOutcome {
    pub user_id: String,
    pub device_name: String,
    pub primary_dn: u64,
    pub secondary_dn: Option<u64>,
    pub device_pool: String,
    /// False when the operator confirmed a user without directory sync
    pub ldap_enabled: bool,
}

pub async fn run(
    api: &dyn AxlApi,
    operator: &dyn Operator,
    site: &SiteProfile,
) -> Result<NewAgentOutcome> {
    let enumber = operator.ask("Enter E# :").trim().to_string();

    let user = match api.get_user(&enumber).await {
        Ok(user) => user,
        Err(err) => {
            operator.say(&format!("No End User found for {enumber}"));
            debug!(%err, "getUser failed");
            return Err(ProvisionError::user_not_found(enumber));
        }
    };

    // Directory-sync gate: a user missing from the HR feed is provisioned
    // only on explicit confirmation, with a manually entered caller ID.
    let mut local_end_user = false;
    let mut caller_id: Option<String> = None;
    if user.ldap_directory.is_set() {
        operator.say(&format!(
            "{} {enumber} is in Workday and is LDAP enabled.",
            user.display_name()
        ));
        let telephone = user.telephone_number.clone().unwrap_or_default();
        caller_id = Some(if telephone.contains('-') {
            operator.ask("The caller ID has invalid characters in it, please enter it manually: ")
        } else {
            telephone
        });
    } else {
        operator.say(&format!("{} {enumber} needs to update Workday.", user.display_name()));
        match operator.confirm("Are you sure you want to continue? y/n:") {
            Confirmation::Yes => local_end_user = true,
            _ => {
                return Err(ProvisionError::aborted(format!(
                    "{enumber} has no directory sync and the operator did not confirm"
                )))
            }
        }
    }

    let wanted_pool = operator
        .ask(&format!("Enter Cost Center or Device Pool to use for {enumber}:"))
        .trim()
        .to_string();
    let selected_pool = if wanted_pool.is_empty() {
        operator.say("No DP given, resorting to CIPC settings.");
        None
    } else {
        resolve_device_pool(api, operator, &wanted_pool).await?
    };

    let candidates = api.list_line(&format!("{}%", site.dn_search_prefix)).await?;
    let primary_dn = next_extension(&candidates, &site.dn_filter_prefix).ok_or_else(|| {
        ProvisionError::NoExtensionAvailable {
            prefix: site.dn_search_prefix.clone(),
        }
    })?;
    operator.say(&primary_dn.to_string());

    let description = format!("{} {primary_dn}", user.display_name());
    let primary_uuid = api.add_line(&agent_dn(primary_dn, &description, site)).await?;
    info!(pattern = primary_dn, "primary line created");

    if local_end_user {
        // Local users have no HR caller ID on record.
        loop {
            let entered = operator.ask("Enter the External Mask/Caller ID for the Agent: ");
            if entered.trim().len() >= 10 {
                caller_id = Some(entered.trim().to_string());
                break;
            }
            operator.say("Make sure Caller ID is at least 10 digits.");
        }
    }

    let template = resolve_template(api, operator, site, false).await?;
    let mut localization = template.localization.clone();
    if let Some(pool) = selected_pool {
        // An operator-selected pool beats the template's pool.
        localization.device_pool = pool;
    }

    let mut lines = vec![agent_line(
        1,
        primary_dn,
        &primary_uuid,
        &description,
        caller_id.as_deref(),
        &enumber,
        site,
    )];
    let mut secondary_dn = None;
    match template.line_mode(&site.internal_dn_prefix) {
        LineMode::Single => {}
        LineMode::DidRequired => {
            operator.say("This phone will need a DID assigned to it for it's second line.");
        }
        LineMode::Dual => {
            let dn = primary_dn + site.secondary_dn_offset;
            operator.say(&dn.to_string());
            let uuid = api.add_line(&agent_dn(dn, &description, site)).await?;
            lines.push(agent_line(
                2,
                dn,
                &uuid,
                &description,
                caller_id.as_deref(),
                &enumber,
                site,
            ));
            secondary_dn = Some(dn);
        }
    }

    let owner = capitalize(&enumber);
    let device_name = csf_name(&enumber);
    operator.say(&format!("Creating {device_name}"));
    api.add_phone(&agent_csf(&device_name, &description, &owner, &localization, lines))
        .await?;
    operator.say("Phone Created");

    operator.say("Updating EndUser");
    let update = UserUpdate {
        user_id: owner.clone(),
        associated_devices: Some(vec![device_name.clone()]),
        primary_extension: Some(PrimaryExtension {
            pattern: primary_dn.to_string(),
            route_partition: site.route_partition.clone(),
        }),
        associated_groups: Some(vec![site.access_control_group.clone()]),
        home_cluster: Some(true),
        im_and_presence_enable: Some(false),
    };
    match api.update_user(&update).await {
        Ok(_) => operator.say("End User updated"),
        // The device exists and works at this point; a bad user update is
        // fixed by hand, not by unwinding the run.
        Err(err) => operator.say(&format!("Check end user config, something weird happened: {err}")),
    }

    associate_app_users(api, operator, site, &device_name).await?;

    Ok(NewAgentOutcome {
        user_id: owner,
        device_name,
        primary_dn,
        secondary_dn,
        device_pool: localization.device_pool,
        ldap_enabled: !local_end_user,
    })
}
