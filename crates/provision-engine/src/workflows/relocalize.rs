//! Relocalize an existing device: apply a pool and localization copy
//!
//! Reuses the new-agent pool resolution and template copy, then writes the
//! result onto the target device with updatePhone. The template copy here
//! is localization only; line appearances are never touched.

use axl_client::AxlApi;
use axl_core::model::PhoneUpdate;
use tracing::info;

use crate::error::Result;
use crate::operator::Operator;
use crate::site::{Localization, SiteProfile};
use crate::workflows::{resolve_device_pool, resolve_template};

/// What a completed run applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocalizeOutcome {
    pub device_name: String,
    pub localization: Localization,
}

pub async fn run(
    api: &dyn AxlApi,
    operator: &dyn Operator,
    site: &SiteProfile,
    device: &str,
) -> Result<RelocalizeOutcome> {
    let device_name = device.trim().to_uppercase();

    let wanted_pool = operator
        .ask(&format!("Enter Cost Center or Device Pool to use for {device_name}:"))
        .trim()
        .to_string();
    let selected_pool = if wanted_pool.is_empty() {
        operator.say("No DP given, will copy template settings.");
        None
    } else {
        resolve_device_pool(api, operator, &wanted_pool).await?
    };

    let template = resolve_template(api, operator, site, true).await?;
    let mut localization = template.localization;
    if let Some(pool) = selected_pool {
        localization.device_pool = pool;
    }

    let update = PhoneUpdate {
        name: device_name.clone(),
        device_pool: Some(localization.device_pool.clone()),
        location: Some(localization.location.clone()),
        media_resource_list: Some(localization.media_resource_list.clone()),
        calling_search_space: Some(localization.calling_search_space.clone()),
    };
    api.update_phone(&update).await?;
    info!(device = %device_name, pool = %localization.device_pool, "device relocalized");
    operator.say(&format!("{device_name} relocalized."));

    Ok(RelocalizeOutcome {
        device_name,
        localization,
    })
}
