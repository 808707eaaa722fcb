//! Native client implementation - wraps the domain service for in-process calls

use crate::contract::{Setting, SettingsError, SettingsUpdateApi, UpdateOutcome, UpdateRequest};
use crate::domain::UpdateService;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without transport
/// overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<UpdateService>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<UpdateService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SettingsUpdateApi for NativeClient {
    async fn update(&self, request: UpdateRequest) -> Result<UpdateOutcome, SettingsError> {
        self.service.call(request).await
    }

    async fn get_setting(&self, name: &str) -> Result<Option<Setting>, SettingsError> {
        self.service.get_setting(name).await
    }

    async fn value(&self, name: &str) -> Result<serde_json::Value, SettingsError> {
        self.service.value(name).await
    }
}
