//! Definition registry - setting name to definition lookup

use crate::contract::Definition;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-process registry of setting definitions
///
/// Shared between the service and the default update contract via `Arc`.
/// Definitions themselves are immutable; registration replaces any previous
/// entry for the same name.
#[derive(Default)]
pub struct DefinitionRegistry {
    definitions: RwLock<HashMap<String, Definition>>,
}

impl DefinitionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, replacing any existing one for the same name
    pub fn register(&self, definition: Definition) {
        self.definitions
            .write()
            .insert(definition.name.clone(), definition);
    }

    /// Look up the definition for a setting name
    pub fn get(&self, name: &str) -> Option<Definition> {
        self.definitions.read().get(name).cloned()
    }

    /// Check whether a setting name is registered
    pub fn exists(&self, name: &str) -> bool {
        self.definitions.read().contains_key(name)
    }

    /// All registered setting names
    pub fn names(&self) -> Vec<String> {
        self.definitions.read().keys().cloned().collect()
    }

    /// Number of registered definitions
    pub fn len(&self) -> usize {
        self.definitions.read().len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.definitions.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_and_get() {
        let registry = DefinitionRegistry::new();
        registry.register(Definition::new("host_name", json!("localhost")));

        assert!(registry.exists("host_name"));
        let definition = registry.get("host_name").expect("definition registered");
        assert_eq!(definition.default, json!("localhost"));
    }

    #[test]
    fn test_get_unknown_name() {
        let registry = DefinitionRegistry::new();
        assert!(registry.get("missing").is_none());
        assert!(!registry.exists("missing"));
    }

    #[test]
    fn test_register_replaces_existing() {
        let registry = DefinitionRegistry::new();
        registry.register(Definition::new("host_name", json!("localhost")));
        registry.register(Definition::new("host_name", json!("example.org")));

        assert_eq!(registry.len(), 1);
        let definition = registry.get("host_name").expect("definition registered");
        assert_eq!(definition.default, json!("example.org"));
    }
}
