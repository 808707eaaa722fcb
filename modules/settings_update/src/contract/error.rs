//! Contract error types for the settings update service
//!
//! These errors are transport-agnostic. Validation failure is NOT an error:
//! it is absorbed into the `UpdateOutcome`. The variants here cover
//! infrastructure faults only.

/// Settings update domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Setting name has no registered definition
    UnknownSetting {
        /// Setting name
        name: String,
    },
    /// Internal error (store failure)
    Internal,
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSetting { name } => {
                write!(f, "unknown setting: {}", name)
            }
            Self::Internal => {
                write!(f, "internal error")
            }
        }
    }
}

impl std::error::Error for SettingsError {}
