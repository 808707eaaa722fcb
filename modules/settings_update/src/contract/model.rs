//! Contract models for the settings update workflow
//!
//! These models are transport-agnostic and used for in-process communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// A persisted setting value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    /// Setting name (unique key in registry and store)
    pub name: String,
    /// Setting value as JSON
    pub value: serde_json::Value,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Side-effecting hook invoked after a setting is successfully updated
pub type ChangeHandler = Arc<dyn Fn() + Send + Sync>;

/// Registry entry describing a setting
///
/// Definitions are immutable metadata: the default value, whether callers
/// may overwrite the stored value, and an optional zero-argument change
/// handler fired after a successful write.
#[derive(Clone)]
pub struct Definition {
    /// Setting name
    pub name: String,
    /// Value used when nothing has been stored yet
    pub default: serde_json::Value,
    /// Whether the value can be updated through the service
    pub writable: bool,
    /// Hook invoked after each successful update of this setting
    pub on_change: Option<ChangeHandler>,
}

impl Definition {
    /// Create a writable definition with the given default value
    pub fn new(name: impl Into<String>, default: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            default,
            writable: true,
            on_change: None,
        }
    }

    /// Mark the definition as read-only
    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    /// Attach a change handler
    pub fn on_change(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(handler));
        self
    }
}

impl fmt::Debug for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Definition")
            .field("name", &self.name)
            .field("default", &self.default)
            .field("writable", &self.writable)
            .field("on_change", &self.on_change.as_ref().map(|_| "<handler>"))
            .finish()
    }
}

/// Batch of setting updates submitted as one call
///
/// Entries keep insertion order; on success the service commits them in
/// exactly this order.
#[derive(Debug, Clone, Default)]
pub struct UpdateRequest {
    params: IndexMap<String, serde_json::Value>,
}

impl UpdateRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a setting to the request (builder style)
    pub fn with(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    /// Add a setting to the request
    pub fn insert(&mut self, name: impl Into<String>, value: serde_json::Value) {
        self.params.insert(name.into(), value);
    }

    /// Get the requested value for a setting name
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.params.get(name)
    }

    /// Iterate over (name, value) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.params.iter()
    }

    /// Setting names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.params.keys()
    }

    /// Number of settings in the request
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the request carries no settings
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl FromIterator<(String, serde_json::Value)> for UpdateRequest {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

/// Field-level validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Setting name the error applies to ("base" for request-level errors)
    pub field: String,
    /// Human-readable message
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered collection of validation errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error for a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationError::new(field, message));
    }

    /// Append all errors from another collection
    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Render every error as "field: message"
    pub fn full_messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

/// Result of one contract validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: ValidationErrors,
}

impl ValidationResult {
    /// Successful validation with no errors
    pub fn success() -> Self {
        Self::default()
    }

    /// Failed validation carrying the collected errors
    pub fn failure(errors: ValidationErrors) -> Self {
        Self { errors }
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }
}

/// Outcome of one update call
///
/// Validation failure is communicated here, never through the error channel:
/// the success flag plus the errors of whichever contract rejected the
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    success: bool,
    errors: ValidationErrors,
}

impl UpdateOutcome {
    /// Successful outcome with no errors
    pub fn success() -> Self {
        Self {
            success: true,
            errors: ValidationErrors::new(),
        }
    }

    /// Failed outcome carrying validation errors
    pub fn failure(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            errors,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }
}

/// Acting identity for update calls
///
/// Passed through for audit logging only; validation never consults it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserContext {
    /// Optional user identifier for audit logging
    pub user_id: Option<Uuid>,
}

impl UserContext {
    /// Context for system-initiated updates (no acting user)
    pub fn system() -> Self {
        Self::default()
    }

    /// Context for a known acting user
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }
}
