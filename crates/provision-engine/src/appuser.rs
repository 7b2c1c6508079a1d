//! Application-user device association via direct SQL
//!
//! The structured updateAppUser RPC replaces the whole associated-device
//! list, which would drop every other device the application user monitors.
//! The association is therefore appended with a conditional insert through
//! executeSQLUpdate: a `not in` subquery makes re-running it for an
//! existing pairing a zero-row no-op instead of a duplicate.

/// Result of one association insert, read off the updated row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationOutcome {
    /// One row inserted: the device is newly associated
    Inserted,
    /// Zero rows: the pairing already existed
    AlreadyAssociated,
}

impl AssociationOutcome {
    pub fn from_rows(rows_updated: u32) -> Self {
        if rows_updated == 1 {
            Self::Inserted
        } else {
            Self::AlreadyAssociated
        }
    }
}

/// Conditional insert appending `device_name` to `app_user`'s device list.
pub fn association_insert(app_user: &str, device_name: &str) -> String {
    format!(
        "insert into applicationuserdevicemap (fkapplicationuser, fkdevice, tkuserassociation) \
         select au.pkid, d.pkid, 1 from applicationuser au cross join device d \
         where au.name = '{app_user}' and d.name in ('{device_name}') and \
         d.pkid not in (select fkdevice from applicationuserdevicemap \
         where fkapplicationuser = au.pkid)"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_targets_the_map_table_with_the_not_in_guard() {
        let sql = association_insert("pguser", "CSFE000123");
        assert!(sql.starts_with("insert into applicationuserdevicemap"));
        assert!(sql.contains("au.name = 'pguser'"));
        assert!(sql.contains("d.name in ('CSFE000123')"));
        assert!(sql.contains("d.pkid not in (select fkdevice from applicationuserdevicemap"));
    }

    #[test]
    fn outcome_reads_the_row_count() {
        assert_eq!(AssociationOutcome::from_rows(1), AssociationOutcome::Inserted);
        assert_eq!(
            AssociationOutcome::from_rows(0),
            AssociationOutcome::AlreadyAssociated
        );
    }
}
