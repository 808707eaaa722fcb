//! Native client trait for in-process communication
//!
//! This trait defines the API that other modules use to interact with the
//! settings update service. NO HTTP - direct function calls for performance.

use super::{
    error::SettingsError,
    model::{Setting, UpdateOutcome, UpdateRequest},
};
use async_trait::async_trait;

/// Settings update API for in-process communication
#[async_trait]
pub trait SettingsUpdateApi: Send + Sync {
    /// Validate and apply a batch of setting updates
    ///
    /// Returns the outcome of the call; validation failure is reported
    /// through the outcome, `Err` is reserved for infrastructure faults.
    async fn update(&self, request: UpdateRequest) -> Result<UpdateOutcome, SettingsError>;

    /// Get a stored setting, if one has been written
    async fn get_setting(&self, name: &str) -> Result<Option<Setting>, SettingsError>;

    /// Get the effective value of a setting (stored value or definition default)
    async fn value(&self, name: &str) -> Result<serde_json::Value, SettingsError>;
}
