//! Batch directory-sync audit over a CSV roster
//!
//! Reads employee numbers from the first CSV column, fetches each end user
//! and reports whether the directory-sync field is present. Lookup faults
//! are per-row findings, not errors; the run always reaches the end of the
//! roster.

use std::path::Path;

use axl_client::AxlApi;
use tracing::debug;

use crate::error::Result;
use crate::operator::Operator;
use crate::payload::capitalize;
use crate::site::SiteProfile;

/// Directory-sync status of one roster row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    /// Directory-sync field present (and matching the site's expected
    /// directory, when one is configured)
    Synced,
    /// User exists but has no usable directory-sync source
    NeedsWorkday,
    /// getUser faulted for this id
    NotFound,
}

/// One audited roster row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub user_id: String,
    /// Display name; empty when the user was not found
    pub name: String,
    pub status: SyncStatus,
}

/// Full audit result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LdapCheckReport {
    pub entries: Vec<RosterEntry>,
}

impl LdapCheckReport {
    pub fn count(&self, status: SyncStatus) -> usize {
        self.entries.iter().filter(|entry| entry.status == status).count()
    }
}

pub async fn run(
    api: &dyn AxlApi,
    operator: &dyn Operator,
    site: &SiteProfile,
    roster: &Path,
) -> Result<LdapCheckReport> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(roster)?;

    let mut report = LdapCheckReport::default();
    for record in reader.records() {
        let record = record?;
        let Some(raw) = record.get(0) else { continue };
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        let enumber = capitalize(raw);

        match api.get_user(&enumber).await {
            Ok(user) => {
                let synced = match &site.ldap_directory {
                    Some(expected) => user.ldap_directory.as_name() == Some(expected.as_str()),
                    None => user.ldap_directory.is_set(),
                };
                let status = if synced {
                    operator.say(&format!(
                        "{} {enumber} is in Workday and is LDAP enabled.",
                        user.display_name()
                    ));
                    SyncStatus::Synced
                } else {
                    operator.say(&format!("{} {enumber} needs to update Workday.", user.display_name()));
                    SyncStatus::NeedsWorkday
                };
                report.entries.push(RosterEntry {
                    user_id: enumber,
                    name: user.display_name(),
                    status,
                });
            }
            Err(err) => {
                operator.say(&format!("No End User found for {enumber}"));
                debug!(%err, user = %enumber, "getUser failed");
                report.entries.push(RosterEntry {
                    user_id: enumber,
                    name: String::new(),
                    status: SyncStatus::NotFound,
                });
            }
        }
    }
    Ok(report)
}
