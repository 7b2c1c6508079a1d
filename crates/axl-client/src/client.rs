//! HTTPS transport for the AXL service

use std::time::Duration;

use async_trait::async_trait;
use axl_core::envelope::{soap_action, AxlRequest};
use axl_core::model::{
    DeviceProfile, DevicePool, EndUser, LineEntry, NewLine, NewPhone, Phone, PhoneUpdate,
    UserUpdate,
};
use axl_core::{request, response, AxlError};
use reqwest::StatusCode;
use tracing::debug;

use crate::api::AxlApi;
use crate::config::AxlConfig;
use crate::error::{ClientError, Result};

/// AXL client speaking SOAP over HTTPS with basic authentication.
///
/// One client holds one connection pool and one set of credentials; it
/// is cheap to clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct AxlClient {
    http: reqwest::Client,
    config: AxlConfig,
}

impl AxlClient {
    /// Build a client from the given configuration.
    pub fn new(config: AxlConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(!config.verify_tls)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// Build a client from `CUCM_ADDRESS`, `AXL_USERNAME` and `AXL_PASSWORD`.
    pub fn from_env() -> Result<Self> {
        Self::new(AxlConfig::from_env()?)
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &AxlConfig {
        &self.config
    }

    async fn call(&self, request: AxlRequest) -> Result<String> {
        let operation = request.operation;
        debug!(operation, body = %request.body, "sending AXL request");

        let response = self
            .http
            .post(self.config.endpoint())
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", soap_action(&self.config.version, operation))
            .body(request.body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(operation, status = status.as_u16(), body = %body, "received AXL response");

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Authentication {
                username: self.config.username.clone(),
            });
        }
        if !status.is_success() {
            // Faults come back as HTTP 500 with the fault in the body.
            if let Some(fault) = response::fault(&body) {
                return Err(AxlError::Fault(fault).into());
            }
            return Err(ClientError::Status {
                operation: operation.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl AxlApi for AxlClient {
    async fn get_user(&self, user_id: &str) -> Result<EndUser> {
        let body = self
            .call(request::get_user(&self.config.version, user_id)?)
            .await?;
        Ok(response::get_user(&body)?)
    }

    async fn get_phone(&self, name: &str) -> Result<Phone> {
        let body = self
            .call(request::get_phone(&self.config.version, name)?)
            .await?;
        Ok(response::get_phone(&body)?)
    }

    async fn get_device_profile(&self, name: &str) -> Result<DeviceProfile> {
        let body = self
            .call(request::get_device_profile(&self.config.version, name)?)
            .await?;
        Ok(response::get_device_profile(&body)?)
    }

    async fn list_device_pool(&self, name_pattern: &str) -> Result<Vec<DevicePool>> {
        let body = self
            .call(request::list_device_pool(&self.config.version, name_pattern)?)
            .await?;
        Ok(response::list_device_pool(&body)?)
    }

    async fn list_line(&self, pattern: &str) -> Result<Vec<LineEntry>> {
        let body = self
            .call(request::list_line(&self.config.version, pattern)?)
            .await?;
        Ok(response::list_line(&body)?)
    }

    async fn list_phone(&self, name_pattern: &str) -> Result<Vec<Phone>> {
        let body = self
            .call(request::list_phone(&self.config.version, name_pattern)?)
            .await?;
        Ok(response::list_phone(&body)?)
    }

    async fn add_line(&self, line: &NewLine) -> Result<String> {
        let body = self
            .call(request::add_line(&self.config.version, line)?)
            .await?;
        Ok(response::returned_uuid(&body, "addLine")?)
    }

    async fn add_phone(&self, phone: &NewPhone) -> Result<String> {
        let body = self
            .call(request::add_phone(&self.config.version, phone)?)
            .await?;
        Ok(response::returned_uuid(&body, "addPhone")?)
    }

    async fn update_user(&self, update: &UserUpdate) -> Result<String> {
        let body = self
            .call(request::update_user(&self.config.version, update)?)
            .await?;
        Ok(response::returned_uuid(&body, "updateUser")?)
    }

    async fn update_phone(&self, update: &PhoneUpdate) -> Result<String> {
        let body = self
            .call(request::update_phone(&self.config.version, update)?)
            .await?;
        Ok(response::returned_uuid(&body, "updatePhone")?)
    }

    async fn execute_sql_update(&self, sql: &str) -> Result<u32> {
        let body = self
            .call(request::execute_sql_update(&self.config.version, sql)?)
            .await?;
        Ok(response::rows_updated(&body)?)
    }

    async fn remove_phone(&self, name: &str) -> Result<String> {
        let body = self
            .call(request::remove_phone(&self.config.version, name)?)
            .await?;
        Ok(response::returned_uuid(&body, "removePhone")?)
    }

    async fn remove_device_profile(&self, name: &str) -> Result<String> {
        let body = self
            .call(request::remove_device_profile(&self.config.version, name)?)
            .await?;
        Ok(response::returned_uuid(&body, "removeDeviceProfile")?)
    }
}
