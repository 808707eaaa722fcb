//! Settings Update Module
//!
//! Contract-validated settings updates: a definition registry describes the
//! known settings, a primary contract (plus an optional caller-supplied
//! params contract) validates each request, and only a fully successful
//! validation pass writes values and fires per-setting change handlers.

// Public exports
pub mod contract;
pub use contract::{
    client::SettingsUpdateApi, error::SettingsError, Definition, Setting, UpdateOutcome,
    UpdateRequest, UserContext, ValidationError, ValidationErrors, ValidationResult,
};

pub mod domain;
pub use domain::{Contract, ContractOptions, DefinitionContract, DefinitionRegistry, UpdateService};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod infra;
