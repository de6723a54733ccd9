//! Carousel configuration constants.
//!
//! All values are fixed for the widget's lifetime. The defaults describe a
//! five-image, 600px-wide strip that dwells for two seconds per image and
//! slides in 400ms using 10ms ticks.
//!
//! # Examples
//!
//! ```
//! use carousel_core::CarouselConfig;
//!
//! let config = CarouselConfig::new().image_width(800).image_count(3);
//! assert_eq!(config.rest_offset(2), -1600);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Longest delay a host timer accepts (a signed 32-bit millisecond count).
pub const MAX_DELAY_MS: u32 = i32::MAX as u32;

/// Fixed constants driving a carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Width of one image slot in pixels
    pub image_width: u32,
    /// Number of real images (excluding the two duplicate slots)
    pub image_count: u32,
    /// How long an image stays before auto-play advances (ms)
    pub stay_time_ms: u32,
    /// Duration of one animated transition (ms)
    pub transition_ms: u32,
    /// Interval between two animation steps (ms)
    pub tick_interval_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            image_width: 600,
            image_count: 5,
            stay_time_ms: 2000,
            transition_ms: 400,
            tick_interval_ms: 10,
        }
    }
}

impl CarouselConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image width.
    #[must_use]
    pub const fn image_width(mut self, width: u32) -> Self {
        self.image_width = width;
        self
    }

    /// Set the number of real images.
    #[must_use]
    pub const fn image_count(mut self, count: u32) -> Self {
        self.image_count = count;
        self
    }

    /// Set the auto-play dwell time.
    #[must_use]
    pub const fn stay_time_ms(mut self, ms: u32) -> Self {
        self.stay_time_ms = ms;
        self
    }

    /// Set the transition duration.
    #[must_use]
    pub const fn transition_ms(mut self, ms: u32) -> Self {
        self.transition_ms = ms;
        self
    }

    /// Set the step interval.
    #[must_use]
    pub const fn tick_interval_ms(mut self, ms: u32) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Parse and validate a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the constants describe a runnable carousel.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_width == 0 {
            return Err(ConfigError::invalid("image_width", "must be positive"));
        }
        if self.image_count == 0 {
            return Err(ConfigError::invalid("image_count", "must be positive"));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::invalid("tick_interval_ms", "must be positive"));
        }
        if self.stay_time_ms == 0 {
            return Err(ConfigError::invalid("stay_time_ms", "must be positive"));
        }
        for (field, value) in [
            ("stay_time_ms", self.stay_time_ms),
            ("tick_interval_ms", self.tick_interval_ms),
        ] {
            if value > MAX_DELAY_MS {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be at most {MAX_DELAY_MS}ms, got {value}ms"),
                ));
            }
        }
        if self.transition_ms < self.tick_interval_ms {
            return Err(ConfigError::invalid(
                "transition_ms",
                format!(
                    "must be at least one tick ({}ms), got {}ms",
                    self.tick_interval_ms, self.transition_ms
                ),
            ));
        }
        if i64::from(self.image_width) * (i64::from(self.image_count) + 1) > i64::from(i32::MAX) {
            return Err(ConfigError::invalid(
                "image_width",
                "strip does not fit in a pixel offset",
            ));
        }
        Ok(())
    }

    /// Pixels moved per animation step.
    #[must_use]
    pub fn speed(&self) -> f64 {
        let steps = f64::from(self.transition_ms) / f64::from(self.tick_interval_ms);
        f64::from(self.image_width) / steps
    }

    /// Number of steps needed to cover one image width.
    #[must_use]
    pub const fn steps_per_transition(&self) -> u32 {
        self.transition_ms.div_ceil(self.tick_interval_ms)
    }

    /// Signed image width as a pixel offset.
    #[must_use]
    pub const fn width_px(&self) -> i32 {
        self.image_width as i32
    }

    /// Offset at which the real image `index` (1-based) is fully visible.
    #[must_use]
    pub const fn rest_offset(&self, index: usize) -> i32 {
        -(self.width_px() * index as i32)
    }

    /// Number of real images as a `usize`.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.image_count as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_constants() {
        let config = CarouselConfig::default();
        assert_eq!(config.image_width, 600);
        assert_eq!(config.image_count, 5);
        assert_eq!(config.stay_time_ms, 2000);
        assert_eq!(config.transition_ms, 400);
        assert_eq!(config.tick_interval_ms, 10);
    }

    #[test]
    fn test_default_speed() {
        let config = CarouselConfig::default();
        assert_eq!(config.speed(), 15.0);
        assert_eq!(config.steps_per_transition(), 40);
    }

    #[test]
    fn test_fractional_speed() {
        let config = CarouselConfig::new().image_width(500);
        assert_eq!(config.speed(), 12.5);
    }

    #[test]
    fn test_steps_round_up() {
        let config = CarouselConfig::new().transition_ms(405);
        assert_eq!(config.steps_per_transition(), 41);
    }

    #[test]
    fn test_rest_offset() {
        let config = CarouselConfig::default();
        assert_eq!(config.rest_offset(1), -600);
        assert_eq!(config.rest_offset(5), -3000);
        assert_eq!(config.rest_offset(0), 0);
    }

    #[test]
    fn test_builder() {
        let config = CarouselConfig::new()
            .image_width(320)
            .image_count(8)
            .stay_time_ms(3000)
            .transition_ms(300)
            .tick_interval_ms(15);
        assert_eq!(config.image_width, 320);
        assert_eq!(config.image_count, 8);
        assert_eq!(config.stay_time_ms, 3000);
        assert_eq!(config.transition_ms, 300);
        assert_eq!(config.tick_interval_ms, 15);
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let config = CarouselConfig::new().image_width(0);
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "image_width",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_zero_count() {
        assert!(CarouselConfig::new().image_count(0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_tick() {
        let config = CarouselConfig::new().tick_interval_ms(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_stay() {
        assert!(CarouselConfig::new().stay_time_ms(0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_transition_shorter_than_tick() {
        let err = CarouselConfig::new()
            .transition_ms(5)
            .tick_interval_ms(10)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("transition_ms"));
    }

    #[test]
    fn test_validate_rejects_overflowing_strip() {
        let config = CarouselConfig::new()
            .image_width(u32::MAX / 2)
            .image_count(4);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_delays_beyond_timer_range() {
        let err = CarouselConfig::new()
            .stay_time_ms(MAX_DELAY_MS + 1)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("stay_time_ms"));

        let err = CarouselConfig::new()
            .tick_interval_ms(u32::MAX)
            .transition_ms(u32::MAX)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("tick_interval_ms"));

        let config = CarouselConfig::new().stay_time_ms(MAX_DELAY_MS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = CarouselConfig::from_yaml("image_width: 800\nimage_count: 3\n").unwrap();
        assert_eq!(config.image_width, 800);
        assert_eq!(config.image_count, 3);
        assert_eq!(config.stay_time_ms, 2000);
    }

    #[test]
    fn test_from_yaml_invalid_value() {
        let err = CarouselConfig::from_yaml("tick_interval_ms: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_from_yaml_malformed() {
        let err = CarouselConfig::from_yaml("image_width: [").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_from_json() {
        let config = CarouselConfig::from_json(r#"{"stay_time_ms": 5000}"#).unwrap();
        assert_eq!(config.stay_time_ms, 5000);
        assert_eq!(config.image_width, 600);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = CarouselConfig::from_json("{").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    proptest! {
        #[test]
        fn prop_speed_never_exceeds_width(
            width in 1u32..5000,
            tick in 1u32..100,
            extra in 0u32..2000
        ) {
            let config = CarouselConfig::new()
                .image_width(width)
                .tick_interval_ms(tick)
                .transition_ms(tick + extra);
            prop_assert!(config.validate().is_ok());
            prop_assert!(config.speed() <= f64::from(width));
            prop_assert!(config.speed() > 0.0);
        }
    }
}
