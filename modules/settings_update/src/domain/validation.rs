//! Field-level validation helpers for update requests

use crate::contract::ValidationError;

/// Validate a setting name
///
/// Accepts names that start with an alphanumeric character and contain only
/// alphanumerics, '_' and '.'.
pub fn validate_setting_name(name: &str) -> Result<(), ValidationError> {
    let first_char = match name.chars().next() {
        Some(c) => c,
        None => return Err(ValidationError::new("base", "setting name cannot be empty")),
    };
    if !first_char.is_alphanumeric() {
        return Err(ValidationError::new(
            name,
            "must start with an alphanumeric character",
        ));
    }

    let is_valid = name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '.');
    if !is_valid {
        return Err(ValidationError::new(
            name,
            "contains invalid characters, only alphanumerics, '_' and '.' are allowed",
        ));
    }

    Ok(())
}

/// Validate the serialized size of a setting value
pub fn validate_value_size(
    name: &str,
    value: &serde_json::Value,
    max_size: usize,
) -> Result<(), ValidationError> {
    let size = serde_json::to_vec(value).map(|b| b.len()).unwrap_or(0);
    if size > max_size {
        return Err(ValidationError::new(
            name,
            format!("exceeds maximum value size of {} bytes", max_size),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_setting_name_valid() {
        assert!(validate_setting_name("host_name").is_ok());
        assert!(validate_setting_name("app.title").is_ok());
        assert!(validate_setting_name("smtp_port_2").is_ok());
        assert!(validate_setting_name("Brand").is_ok());
        assert!(validate_setting_name("a").is_ok());
    }

    #[test]
    fn test_validate_setting_name_invalid() {
        assert!(validate_setting_name("").is_err());
        assert!(validate_setting_name("_leading").is_err());
        assert!(validate_setting_name(".leading").is_err());
        assert!(validate_setting_name("has space").is_err());
        assert!(validate_setting_name("has-dash").is_err());
        assert!(validate_setting_name("has@at").is_err());
    }

    #[test]
    fn test_validate_setting_name_empty_uses_base_field() {
        let err = validate_setting_name("").unwrap_err();
        assert_eq!(err.field, "base");
    }

    #[test]
    fn test_validate_value_size_within_limit() {
        assert!(validate_value_size("host_name", &json!("short"), 1024).is_ok());
    }

    #[test]
    fn test_validate_value_size_exceeds_limit() {
        let value = json!("x".repeat(64));
        let err = validate_value_size("host_name", &value, 16).unwrap_err();
        assert_eq!(err.field, "host_name");
        assert!(err.message.contains("maximum value size"));
    }
}
