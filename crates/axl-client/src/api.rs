//! Typed surface of the AXL operations used by provisioning

use async_trait::async_trait;
use axl_core::model::{
    DeviceProfile, DevicePool, EndUser, LineEntry, NewLine, NewPhone, Phone, PhoneUpdate,
    UserUpdate,
};

use crate::error::Result;

/// The AXL operations the provisioning workflows drive.
///
/// [`AxlClient`](crate::AxlClient) implements this over HTTPS. Workflow
/// tests substitute scripted implementations, so nothing above the
/// client ever constructs SOAP directly.
#[async_trait]
pub trait AxlApi: Send + Sync {
    /// `getUser`: fetch an end user by user id.
    async fn get_user(&self, user_id: &str) -> Result<EndUser>;

    /// `getPhone`: fetch a device with its line appearances.
    async fn get_phone(&self, name: &str) -> Result<Phone>;

    /// `getDeviceProfile`: fetch an extension mobility profile.
    async fn get_device_profile(&self, name: &str) -> Result<DeviceProfile>;

    /// `listDevicePool`: device pool names matching a SQL-style pattern.
    async fn list_device_pool(&self, name_pattern: &str) -> Result<Vec<DevicePool>>;

    /// `listLine`: directory number patterns matching a SQL-style pattern.
    async fn list_line(&self, pattern: &str) -> Result<Vec<LineEntry>>;

    /// `listPhone`: devices matching a name pattern, localization tags only.
    async fn list_phone(&self, name_pattern: &str) -> Result<Vec<Phone>>;

    /// `addLine`: create a directory number, returning its uuid.
    async fn add_line(&self, line: &NewLine) -> Result<String>;

    /// `addPhone`: create a device, returning its uuid.
    async fn add_phone(&self, phone: &NewPhone) -> Result<String>;

    /// `updateUser`: apply the populated fields, returning the user uuid.
    async fn update_user(&self, update: &UserUpdate) -> Result<String>;

    /// `updatePhone`: apply the populated fields, returning the device uuid.
    async fn update_phone(&self, update: &PhoneUpdate) -> Result<String>;

    /// `executeSQLUpdate`: run a raw statement, returning the row count.
    async fn execute_sql_update(&self, sql: &str) -> Result<u32>;

    /// `removePhone`: delete a device by name.
    async fn remove_phone(&self, name: &str) -> Result<String>;

    /// `removeDeviceProfile`: delete an extension mobility profile by name.
    async fn remove_device_profile(&self, name: &str) -> Result<String>;
}
