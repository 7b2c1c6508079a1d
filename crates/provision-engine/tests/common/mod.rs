//! Scripted AXL double shared by the workflow tests

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use axl_client::{AxlApi, ClientError, Result};
use axl_core::model::{
    DeviceProfile, DevicePool, EndUser, LineEntry, NameRef, NewLine, NewPhone, Phone, PhoneUpdate,
    UserUpdate,
};
use axl_core::{AxlError, AxlFault};

/// The fault CUCM raises for a missing item.
pub fn not_found(what: &str) -> ClientError {
    ClientError::Axl(AxlError::Fault(AxlFault {
        fault_code: "soapenv:Client".to_string(),
        fault_string: format!("Item not valid: The specified {what} was not found"),
        axl_code: Some(5007),
        axl_message: None,
    }))
}

/// In-memory AXL publisher. Reads serve the seeded records, writes are
/// recorded for assertions, and every call lands in `calls` in order.
#[derive(Default)]
pub struct MockAxl {
    pub users: HashMap<String, EndUser>,
    pub phones: HashMap<String, Phone>,
    pub profiles: HashMap<String, DeviceProfile>,
    pub pools: Vec<String>,
    pub line_patterns: Vec<String>,
    /// Device names removePhone will find
    pub removable: Mutex<HashSet<String>>,
    /// (app user, device) pairs already in applicationuserdevicemap
    pub associations: Mutex<HashSet<(String, String)>>,
    pub calls: Mutex<Vec<String>>,
    pub added_lines: Mutex<Vec<NewLine>>,
    pub added_phones: Mutex<Vec<NewPhone>>,
    pub user_updates: Mutex<Vec<UserUpdate>>,
    pub phone_updates: Mutex<Vec<PhoneUpdate>>,
    pub removed_profiles: Mutex<Vec<String>>,
}

impl MockAxl {
    pub fn with_user(mut self, user_id: &str, ldap: Option<&str>, telephone: &str) -> Self {
        self.users.insert(
            user_id.to_string(),
            EndUser {
                user_id: user_id.to_string(),
                first_name: Some("Jane".to_string()),
                last_name: Some("Doe".to_string()),
                telephone_number: Some(telephone.to_string()),
                ldap_directory: match ldap {
                    Some(name) => NameRef::named(name),
                    None => NameRef::default(),
                },
                uuid: Some("{USER}".to_string()),
            },
        );
        self
    }

    pub fn with_agent_lines(mut self) -> Self {
        self.line_patterns = ["1216053002", "1216053005", "1216053001"]
            .map(str::to_string)
            .to_vec();
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn associated(&self, app_user: &str, device: &str) -> bool {
        self.associations
            .lock()
            .unwrap()
            .contains(&(app_user.to_string(), device.to_string()))
    }

    fn log(&self, operation: &str) {
        self.calls.lock().unwrap().push(operation.to_string());
    }
}

fn quoted_after<'a>(sql: &'a str, marker: &str) -> Option<&'a str> {
    let rest = &sql[sql.find(marker)? + marker.len()..];
    rest.split('\'').next()
}

#[async_trait]
impl AxlApi for MockAxl {
    async fn get_user(&self, user_id: &str) -> Result<EndUser> {
        self.log("getUser");
        self.users
            .get(user_id)
            .cloned()
            .ok_or_else(|| not_found(user_id))
    }

    async fn get_phone(&self, name: &str) -> Result<Phone> {
        self.log("getPhone");
        self.phones.get(name).cloned().ok_or_else(|| not_found(name))
    }

    async fn get_device_profile(&self, name: &str) -> Result<DeviceProfile> {
        self.log("getDeviceProfile");
        self.profiles
            .get(name)
            .cloned()
            .ok_or_else(|| not_found(name))
    }

    async fn list_device_pool(&self, _name_pattern: &str) -> Result<Vec<DevicePool>> {
        self.log("listDevicePool");
        Ok(self
            .pools
            .iter()
            .map(|name| DevicePool {
                name: name.clone(),
                uuid: None,
            })
            .collect())
    }

    async fn list_line(&self, _pattern: &str) -> Result<Vec<LineEntry>> {
        self.log("listLine");
        Ok(self
            .line_patterns
            .iter()
            .map(|pattern| LineEntry {
                pattern: pattern.clone(),
                uuid: None,
            })
            .collect())
    }

    async fn list_phone(&self, name_pattern: &str) -> Result<Vec<Phone>> {
        self.log("listPhone");
        Ok(self
            .phones
            .iter()
            .filter(|(name, _)| name.as_str() == name_pattern)
            .map(|(_, phone)| phone.clone())
            .collect())
    }

    async fn add_line(&self, line: &NewLine) -> Result<String> {
        self.log("addLine");
        let uuid = format!("{{DN-{}}}", line.pattern);
        self.added_lines.lock().unwrap().push(line.clone());
        Ok(uuid)
    }

    async fn add_phone(&self, phone: &NewPhone) -> Result<String> {
        self.log("addPhone");
        self.added_phones.lock().unwrap().push(phone.clone());
        self.removable.lock().unwrap().insert(phone.name.clone());
        Ok("{PHONE}".to_string())
    }

    async fn update_user(&self, update: &UserUpdate) -> Result<String> {
        self.log("updateUser");
        self.user_updates.lock().unwrap().push(update.clone());
        Ok("{USER}".to_string())
    }

    async fn update_phone(&self, update: &PhoneUpdate) -> Result<String> {
        self.log("updatePhone");
        self.phone_updates.lock().unwrap().push(update.clone());
        Ok("{PHONE}".to_string())
    }

    async fn execute_sql_update(&self, sql: &str) -> Result<u32> {
        self.log("executeSQLUpdate");
        let app_user = quoted_after(sql, "au.name = '").expect("app user in sql");
        let device = quoted_after(sql, "d.name in ('").expect("device in sql");
        let pair = (app_user.to_string(), device.to_string());
        // The not-in guard: an existing pairing updates zero rows.
        let mut map = self.associations.lock().unwrap();
        if map.contains(&pair) {
            Ok(0)
        } else {
            map.insert(pair);
            Ok(1)
        }
    }

    async fn remove_phone(&self, name: &str) -> Result<String> {
        self.log("removePhone");
        if self.removable.lock().unwrap().remove(name) {
            Ok("{PHONE}".to_string())
        } else {
            Err(not_found(name))
        }
    }

    async fn remove_device_profile(&self, name: &str) -> Result<String> {
        self.log("removeDeviceProfile");
        if self.profiles.contains_key(name) {
            self.removed_profiles.lock().unwrap().push(name.to_string());
            Ok("{PROFILE}".to_string())
        } else {
            Err(not_found(name))
        }
    }
}
