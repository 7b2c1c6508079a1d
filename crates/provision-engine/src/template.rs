//! Localization-template copy rules
//!
//! A new CSF can copy its localization (device pool, location, media
//! resource list, calling search space) from another agent's device. The
//! copied device also decides whether the new one gets a second line.

use axl_core::model::Phone;

use crate::site::Localization;

/// How many line appearances the new device gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    Single,
    /// The template carried a second internal line; mint a secondary DN
    Dual,
    /// The template's second line is a DID the allocator cannot mint;
    /// fall back to a single line and leave the DID to a human
    DidRequired,
}

/// Settings resolved from an example device, or the site defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSettings {
    pub localization: Localization,
    /// Pattern of the template's second line appearance, when it has one
    pub second_line_pattern: Option<String>,
}

impl TemplateSettings {
    /// No template: the site's fixed localization, single line.
    pub fn defaults(defaults: &Localization) -> Self {
        Self {
            localization: defaults.clone(),
            second_line_pattern: None,
        }
    }

    /// Copy localization from a fetched device. References the device
    /// leaves unset fall back to the site defaults field by field.
    pub fn from_phone(phone: &Phone, defaults: &Localization) -> Self {
        let second_line_pattern = phone
            .lines
            .iter()
            .find(|line| line.index == 2)
            .map(|line| line.pattern.clone());
        Self {
            localization: Localization {
                device_pool: copied(phone.device_pool.as_name(), &defaults.device_pool),
                location: copied(phone.location.as_name(), &defaults.location),
                media_resource_list: copied(
                    phone.media_resource_list.as_name(),
                    &defaults.media_resource_list,
                ),
                calling_search_space: copied(
                    phone.calling_search_space.as_name(),
                    &defaults.calling_search_space,
                ),
            },
            second_line_pattern,
        }
    }

    /// Copy localization only. listPhone rows carry no line appearances,
    /// so the listing fallback never produces a dual-line device.
    pub fn from_phone_single(phone: &Phone, defaults: &Localization) -> Self {
        Self {
            second_line_pattern: None,
            ..Self::from_phone(phone, defaults)
        }
    }

    /// Line count decision for the new device.
    pub fn line_mode(&self, internal_dn_prefix: &str) -> LineMode {
        match &self.second_line_pattern {
            None => LineMode::Single,
            Some(pattern) if pattern.starts_with(internal_dn_prefix) => LineMode::Dual,
            Some(_) => LineMode::DidRequired,
        }
    }
}

fn copied(value: Option<&str>, fallback: &str) -> String {
    value.unwrap_or(fallback).to_string()
}
