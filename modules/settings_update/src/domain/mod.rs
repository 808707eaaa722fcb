//! Domain layer - business logic and services

pub mod contracts;
pub mod registry;
pub mod repository;
pub mod service;
pub mod validation;

pub use contracts::{Contract, ContractOptions, DefinitionContract};
pub use registry::DefinitionRegistry;
pub use repository::SettingsStore;
pub use service::UpdateService;
