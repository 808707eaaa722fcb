//! Contract layer - public API for in-process consumers
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::SettingsUpdateApi;
pub use error::SettingsError;
pub use model::{
    ChangeHandler, Definition, Setting, UpdateOutcome, UpdateRequest, UserContext,
    ValidationError, ValidationErrors, ValidationResult,
};
