//! Configuration for the settings update module

use serde::Deserialize;

/// Settings update configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Enable strict setting name validation
    #[serde(default = "default_true")]
    pub strict_name_validation: bool,

    /// Maximum serialized setting value size in bytes
    #[serde(default = "default_max_value_size")]
    pub max_value_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_name_validation: true,
            max_value_size: default_max_value_size(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_value_size() -> usize {
    1024 * 1024 // 1MB
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.strict_name_validation);
        assert_eq!(config.max_value_size, 1024 * 1024);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(config.strict_name_validation);
        assert_eq!(config.max_value_size, 1024 * 1024);
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result = serde_json::from_str::<Config>(r#"{"unknown_flag": true}"#);
        assert!(result.is_err());
    }
}
