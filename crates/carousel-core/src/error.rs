//! Error types for carousel configuration.

use thiserror::Error;

/// Errors raised while loading or validating a [`CarouselConfig`](crate::CarouselConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field holds a value the carousel cannot run with.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: &'static str,
        /// Error message
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::invalid("image_width", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'image_width': must be positive"
        );
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
