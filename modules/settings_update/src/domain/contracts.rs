//! Validation contracts for update requests
//!
//! A contract inspects a full `UpdateRequest` and reports success or an
//! ordered error collection. The service consults the primary contract
//! first and, only when it succeeds, an optionally configured params
//! contract.

use super::registry::DefinitionRegistry;
use super::validation;
use crate::config::Config;
use crate::contract::{UpdateRequest, ValidationErrors, ValidationResult};
use std::sync::Arc;

/// Validation contract over a full update request
pub trait Contract: Send + Sync {
    /// Validate the request, collecting field-level errors
    fn validate(&self, request: &UpdateRequest) -> ValidationResult;
}

/// Construction-time contract configuration for the update service
///
/// Strategy selection: both slots are optional. The primary contract
/// defaults to `DefinitionContract`; the params contract is only consulted
/// when supplied.
#[derive(Clone, Default)]
pub struct ContractOptions {
    /// Override for the primary update contract
    pub contract: Option<Arc<dyn Contract>>,
    /// Optional contract validating the request as a whole
    pub params_contract: Option<Arc<dyn Contract>>,
}

impl ContractOptions {
    /// Options with a params contract configured
    pub fn with_params_contract(contract: Arc<dyn Contract>) -> Self {
        Self {
            contract: None,
            params_contract: Some(contract),
        }
    }
}

/// Default primary contract
///
/// Rejects a pair when the name fails format validation (if strict name
/// validation is enabled), when no definition is registered for it, when
/// the definition is read-only, or when the serialized value exceeds the
/// configured maximum size. Errors are keyed by setting name.
pub struct DefinitionContract {
    registry: Arc<DefinitionRegistry>,
    config: Config,
}

impl DefinitionContract {
    /// Contract with default configuration
    pub fn new(registry: Arc<DefinitionRegistry>) -> Self {
        Self::with_config(registry, Config::default())
    }

    /// Contract with explicit configuration
    pub fn with_config(registry: Arc<DefinitionRegistry>, config: Config) -> Self {
        Self { registry, config }
    }
}

impl Contract for DefinitionContract {
    fn validate(&self, request: &UpdateRequest) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        for (name, value) in request.iter() {
            if self.config.strict_name_validation {
                if let Err(error) = validation::validate_setting_name(name) {
                    errors.add(error.field, error.message);
                    continue;
                }
            }

            match self.registry.get(name) {
                None => errors.add(name, "is not a known setting"),
                Some(definition) if !definition.writable => {
                    errors.add(name, "is not writable");
                }
                Some(_) => {
                    if let Err(error) =
                        validation::validate_value_size(name, value, self.config.max_value_size)
                    {
                        errors.add(error.field, error.message);
                    }
                }
            }
        }

        if errors.is_empty() {
            ValidationResult::success()
        } else {
            ValidationResult::failure(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Definition;
    use serde_json::json;

    fn registry_with(definitions: Vec<Definition>) -> Arc<DefinitionRegistry> {
        let registry = Arc::new(DefinitionRegistry::new());
        for definition in definitions {
            registry.register(definition);
        }
        registry
    }

    #[test]
    fn test_accepts_writable_known_setting() {
        let registry = registry_with(vec![Definition::new("host_name", json!("localhost"))]);
        let contract = DefinitionContract::new(registry);

        let request = UpdateRequest::new().with("host_name", json!("example.org"));
        assert!(contract.validate(&request).is_success());
    }

    #[test]
    fn test_rejects_unknown_setting() {
        let registry = registry_with(vec![]);
        let contract = DefinitionContract::new(registry);

        let request = UpdateRequest::new().with("host_name", json!("example.org"));
        let result = contract.validate(&request);

        assert!(!result.is_success());
        assert_eq!(
            result.errors().full_messages(),
            vec!["host_name: is not a known setting"]
        );
    }

    #[test]
    fn test_rejects_read_only_setting() {
        let registry =
            registry_with(vec![Definition::new("host_name", json!("localhost")).read_only()]);
        let contract = DefinitionContract::new(registry);

        let request = UpdateRequest::new().with("host_name", json!("example.org"));
        let result = contract.validate(&request);

        assert!(!result.is_success());
        assert_eq!(
            result.errors().full_messages(),
            vec!["host_name: is not writable"]
        );
    }

    #[test]
    fn test_rejects_malformed_name() {
        let registry = registry_with(vec![]);
        let contract = DefinitionContract::new(registry);

        let request = UpdateRequest::new().with("bad name", json!("value"));
        let result = contract.validate(&request);

        assert!(!result.is_success());
        assert_eq!(result.errors().iter().next().map(|e| e.field.as_str()), Some("bad name"));
    }

    #[test]
    fn test_name_validation_can_be_disabled() {
        let registry = registry_with(vec![Definition::new("bad name", json!(""))]);
        let config = Config {
            strict_name_validation: false,
            ..Config::default()
        };
        let contract = DefinitionContract::with_config(registry, config);

        let request = UpdateRequest::new().with("bad name", json!("value"));
        assert!(contract.validate(&request).is_success());
    }

    #[test]
    fn test_rejects_oversized_value() {
        let registry = registry_with(vec![Definition::new("welcome_text", json!(""))]);
        let config = Config {
            max_value_size: 8,
            ..Config::default()
        };
        let contract = DefinitionContract::with_config(registry, config);

        let request = UpdateRequest::new().with("welcome_text", json!("x".repeat(64)));
        assert!(!contract.validate(&request).is_success());
    }

    #[test]
    fn test_collects_errors_for_every_invalid_pair() {
        let registry = registry_with(vec![Definition::new("host_name", json!("localhost"))]);
        let contract = DefinitionContract::new(registry);

        let request = UpdateRequest::new()
            .with("host_name", json!("example.org"))
            .with("missing_one", json!("a"))
            .with("missing_two", json!("b"));
        let result = contract.validate(&request);

        assert!(!result.is_success());
        assert_eq!(result.errors().len(), 2);
    }
}
