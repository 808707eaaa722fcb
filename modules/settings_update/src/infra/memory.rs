//! In-memory settings store

use crate::contract::Setting;
use crate::domain::repository::SettingsStore;
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Settings store backed by an in-process map
///
/// Writes record the update timestamp; reads return a clone of the stored
/// setting.
#[derive(Default)]
pub struct InMemorySettingsStore {
    data: RwLock<HashMap<String, Setting>>,
}

impl InMemorySettingsStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored settings
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn set(&self, name: &str, value: serde_json::Value) -> Result<()> {
        let setting = Setting {
            name: name.to_string(),
            value,
            updated_at: chrono::Utc::now(),
        };
        self.data.write().insert(name.to_string(), setting);
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<Setting>> {
        Ok(self.data.read().get(name).cloned())
    }
}
