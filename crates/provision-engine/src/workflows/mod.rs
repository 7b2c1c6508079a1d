//! The provisioning workflows
//!
//! Each workflow is one runbook: a fixed sequence of AXL calls driven by
//! operator prompts. Every remote call is guarded where the runbook
//! guarded it; fallbacks re-prompt, everything else propagates to the
//! caller, which exits non-zero.

pub mod ldap_check;
pub mod migrate;
pub mod new_agent;
pub mod relocalize;

pub use ldap_check::{LdapCheckReport, RosterEntry, SyncStatus};
pub use migrate::MigrateOutcome;
pub use new_agent::NewAgentOutcome;
pub use relocalize::RelocalizeOutcome;

use axl_client::AxlApi;
use tracing::{debug, warn};

use crate::appuser::{association_insert, AssociationOutcome};
use crate::error::{ProvisionError, Result};
use crate::operator::Operator;
use crate::site::SiteProfile;
use crate::template::TemplateSettings;

/// Resolve an operator-entered cost center or device pool name against the
/// cluster's pool list.
///
/// An exact match wins outright. Otherwise every pool containing the input
/// is listed with its position and the operator picks one by number. No
/// match at all falls through to the template settings (`None`).
pub(crate) async fn resolve_device_pool(
    api: &dyn AxlApi,
    operator: &dyn Operator,
    wanted: &str,
) -> Result<Option<String>> {
    let pools = match api.list_device_pool("%").await {
        Ok(pools) => pools,
        Err(err) => {
            operator.say(&format!("Something weird happened, I couldn't look for {wanted}"));
            warn!(%err, "listDevicePool failed");
            return Ok(None);
        }
    };

    if let Some(pool) = pools.iter().find(|pool| pool.name == wanted) {
        operator.say(&format!("Found Device Pool match {}", pool.name));
        return Ok(Some(pool.name.clone()));
    }

    let mut found = false;
    for (index, pool) in pools.iter().enumerate() {
        if pool.name.contains(wanted) {
            operator.say(&format!("{index}: Found DPs for Call Center {}", pool.name));
            found = true;
        }
    }
    if !found {
        operator.say("There was no Call Center or DP found. Will try to copy Device Settings.");
        return Ok(None);
    }

    let selection = operator.ask("Select the number of the Device Pool you most desire: ");
    let index: usize = selection
        .trim()
        .parse()
        .map_err(|_| ProvisionError::invalid_input(format!("'{selection}' is not a listed number")))?;
    let pool = pools
        .get(index)
        .ok_or_else(|| ProvisionError::invalid_input(format!("{index} is not a listed number")))?;
    Ok(Some(pool.name.clone()))
}

/// Prompt for an example CSF and resolve its template settings.
///
/// Empty input means the site defaults. A failed getPhone gets one
/// corrected device id and falls back to listPhone; that listing carries no
/// line appearances, so the fallback path is always single-line.
pub(crate) async fn resolve_template(
    api: &dyn AxlApi,
    operator: &dyn Operator,
    site: &SiteProfile,
    single_only: bool,
) -> Result<TemplateSettings> {
    let example = operator
        .ask("If you'd like to copy localization settings from another Agent's CSF, please enter it here, otherwise hit enter: ")
        .trim()
        .to_uppercase();
    if example.is_empty() {
        return Ok(TemplateSettings::defaults(&site.localization));
    }

    match api.get_phone(&example).await {
        Ok(phone) if single_only => {
            Ok(TemplateSettings::from_phone_single(&phone, &site.localization))
        }
        Ok(phone) => Ok(TemplateSettings::from_phone(&phone, &site.localization)),
        Err(err) => {
            debug!(%err, device = %example, "getPhone failed, falling back to listPhone");
            let corrected = operator
                .ask(&format!("Couldn't find the phone with the name of {example}, try again:"))
                .trim()
                .to_uppercase();
            if corrected.is_empty() {
                return Ok(TemplateSettings::defaults(&site.localization));
            }
            let phones = api.list_phone(&corrected).await?;
            match phones.first() {
                Some(phone) => Ok(TemplateSettings::from_phone_single(phone, &site.localization)),
                None => {
                    operator.say(&format!("No device named {corrected}, using default settings."));
                    Ok(TemplateSettings::defaults(&site.localization))
                }
            }
        }
    }
}

/// Associate a device with every site application user through the
/// conditional SQL insert. Per-user faults are reported and skipped; the
/// device is already provisioned by the time this runs.
pub(crate) async fn associate_app_users(
    api: &dyn AxlApi,
    operator: &dyn Operator,
    site: &SiteProfile,
    device_name: &str,
) -> Result<()> {
    for app_user in &site.app_users {
        operator.say(&format!("Updating {app_user}"));
        match api.execute_sql_update(&association_insert(app_user, device_name)).await {
            Ok(rows) => match AssociationOutcome::from_rows(rows) {
                AssociationOutcome::Inserted => {
                    operator.say(&format!("{app_user} updated successfully!"));
                }
                AssociationOutcome::AlreadyAssociated => {
                    operator.say(&format!("{app_user} already associated with {device_name}."));
                }
            },
            Err(err) => {
                operator.say(&format!("executeSQLUpdate: {err}"));
                warn!(%err, app_user, "app user association failed");
            }
        }
    }
    Ok(())
}
