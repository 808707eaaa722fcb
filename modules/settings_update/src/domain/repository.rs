//! Store trait for persisted setting values
//!
//! This trait defines the interface for value persistence.
//! Implementations are in infra/memory.rs

use crate::contract::Setting;
use anyhow::Result;
use async_trait::async_trait;

/// Assignment surface for persisted setting values
///
/// The store is treated as externally synchronized: the service issues
/// independent writes per setting with no batch transaction.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Write a value for a setting name
    async fn set(&self, name: &str, value: serde_json::Value) -> Result<()>;

    /// Read the stored value for a setting name
    async fn get(&self, name: &str) -> Result<Option<Setting>>;
}
