//! Domain service - settings update orchestration

use super::contracts::{Contract, ContractOptions, DefinitionContract};
use super::registry::DefinitionRegistry;
use super::repository::SettingsStore;
use crate::contract::{Setting, SettingsError, UpdateOutcome, UpdateRequest, UserContext};
use std::sync::Arc;
use tracing::debug;

/// Service validating and applying setting updates
///
/// One `call` validates the request with the primary contract and, when
/// configured, the params contract. Only a fully successful validation pass
/// commits: each value is written to the store and the definition's change
/// handler fires once per written name. Any contract failure leaves the
/// store untouched and no handler runs.
pub struct UpdateService {
    user: UserContext,
    registry: Arc<DefinitionRegistry>,
    store: Arc<dyn SettingsStore>,
    contract: Arc<dyn Contract>,
    params_contract: Option<Arc<dyn Contract>>,
}

impl UpdateService {
    /// Create a new service instance
    ///
    /// `options.contract` overrides the primary contract; when absent the
    /// default `DefinitionContract` over `registry` is used.
    pub fn new(
        user: UserContext,
        registry: Arc<DefinitionRegistry>,
        store: Arc<dyn SettingsStore>,
        options: ContractOptions,
    ) -> Self {
        let contract = options
            .contract
            .unwrap_or_else(|| Arc::new(DefinitionContract::new(registry.clone())));
        Self {
            user,
            registry,
            store,
            contract,
            params_contract: options.params_contract,
        }
    }

    /// Validate and apply a batch of setting updates
    ///
    /// Validation failure is reported through the returned outcome. `Err`
    /// covers infrastructure faults only: a store failure maps to
    /// `SettingsError::Internal`, a name that reached the commit path
    /// without a registered definition to `SettingsError::UnknownSetting`.
    pub async fn call(&self, request: UpdateRequest) -> Result<UpdateOutcome, SettingsError> {
        let result = self.contract.validate(&request);
        if !result.is_success() {
            debug!(errors = ?result.errors().full_messages(), "update rejected by contract");
            return Ok(UpdateOutcome::failure(result.into_errors()));
        }

        // Params contract is consulted only after the primary contract
        // succeeds (short-circuit).
        if let Some(params_contract) = &self.params_contract {
            let result = params_contract.validate(&request);
            if !result.is_success() {
                debug!(
                    errors = ?result.errors().full_messages(),
                    "update rejected by params contract"
                );
                return Ok(UpdateOutcome::failure(result.into_errors()));
            }
        }

        for (name, value) in request.iter() {
            // Resolve the definition before mutating the store so a
            // registry hole never produces a write without a handler check.
            let definition =
                self.registry
                    .get(name)
                    .ok_or_else(|| SettingsError::UnknownSetting {
                        name: name.clone(),
                    })?;

            self.store
                .set(name, value.clone())
                .await
                .map_err(|_| SettingsError::Internal)?;

            if let Some(handler) = &definition.on_change {
                handler();
            }

            debug!(setting = %name, user = ?self.user.user_id, "setting updated");
        }

        Ok(UpdateOutcome::success())
    }

    /// Get a stored setting, if one has been written
    pub async fn get_setting(&self, name: &str) -> Result<Option<Setting>, SettingsError> {
        self.store
            .get(name)
            .await
            .map_err(|_| SettingsError::Internal)
    }

    /// Get the effective value of a setting
    ///
    /// Returns the stored value when present, otherwise the definition
    /// default. A name without a definition and without a stored value is
    /// `UnknownSetting`.
    pub async fn value(&self, name: &str) -> Result<serde_json::Value, SettingsError> {
        if let Some(setting) = self.get_setting(name).await? {
            return Ok(setting.value);
        }

        self.registry
            .get(name)
            .map(|definition| definition.default)
            .ok_or_else(|| SettingsError::UnknownSetting {
                name: name.to_string(),
            })
    }
}
