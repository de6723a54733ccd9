//! Errors raised while binding a carousel to the host page.

use carousel_core::ConfigError;
use thiserror::Error;

/// Failure to mount a carousel onto the page.
#[derive(Debug, Error)]
pub enum MountError {
    /// No global `window` (not running in a browser).
    #[error("No window")]
    NoWindow,

    /// The window has no document.
    #[error("No document")]
    NoDocument,

    /// No element carries the configured id.
    #[error("Element '{0}' not found")]
    MissingElement(String),

    /// The element exists but cannot carry an inline style.
    #[error("Element '{0}' is not an HTML element")]
    NotHtmlElement(String),

    /// The carousel configuration is invalid.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The selector configuration is not valid JSON.
    #[error("Invalid selectors: {0}")]
    Selectors(#[from] serde_json::Error),

    /// A DOM call threw.
    #[error("JavaScript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<MountError> for wasm_bindgen::JsValue {
    fn from(err: MountError) -> Self {
        Self::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            MountError::MissingElement("gallery".to_string()).to_string(),
            "Element 'gallery' not found"
        );
        assert_eq!(MountError::NoWindow.to_string(), "No window");
    }

    #[test]
    fn test_from_config_error() {
        let config_err = carousel_core::CarouselConfig::from_json(r#"{"image_width": 0}"#)
            .expect_err("zero width is rejected");
        let err = MountError::from(config_err);
        assert!(err.to_string().starts_with("Invalid configuration:"));
    }
}
