//! Page Configuration
//!
//! Optional JSON embedded in the host page as
//! `<script id="demo-config" type="application/json">`.

use leptos::prelude::*;
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::color::TempScale;

/// Id of the script element holding the JSON configuration
pub const CONFIG_ELEMENT_ID: &str = "demo-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field}: min {min} is greater than max {max}")]
    InvertedRange { field: &'static str, min: i32, max: i32 },
    #[error("temp_scale: cold {cold} must be below hot {hot}")]
    DegenerateScale { cold: i32, hot: i32 },
}

/// Inclusive integer range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

impl IntRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Number of values in the range
    pub fn span(&self) -> i64 {
        self.max as i64 - self.min as i64 + 1
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedRange { field, min: self.min, max: self.max });
        }
        Ok(())
    }
}

/// Ranges drawn from by the Randomize button
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RandomizeRanges {
    pub temp: IntRange,
    /// Used for both x and y
    pub position: IntRange,
}

impl Default for RandomizeRanges {
    fn default() -> Self {
        Self {
            temp: IntRange::new(0, 100),
            position: IntRange::new(300, 599),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub container_width_px: u32,
    pub stage_min_height_px: u32,
    pub temp_scale: TempScale,
    pub randomize: RandomizeRanges,
    pub drag_threshold_px: f64,
    pub settle_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            container_width_px: 400,
            stage_min_height_px: 760,
            temp_scale: TempScale::default(),
            randomize: RandomizeRanges::default(),
            drag_threshold_px: leptos_dragdrop::DRAG_THRESHOLD_PX,
            settle_ms: 100,
            log_level: LevelFilter::Info,
        }
    }
}

impl DemoConfig {
    /// Parse and validate. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.randomize.temp.check("randomize.temp")?;
        self.randomize.position.check("randomize.position")?;
        if self.temp_scale.cold >= self.temp_scale.hot {
            return Err(ConfigError::DegenerateScale {
                cold: self.temp_scale.cold,
                hot: self.temp_scale.hot,
            });
        }
        Ok(())
    }

    /// Read the embedded configuration, if the page has one
    pub fn from_document() -> Option<Result<Self, ConfigError>> {
        let raw = web_sys::window()?
            .document()?
            .get_element_by_id(CONFIG_ELEMENT_ID)?
            .text_content()?;
        Some(Self::from_json(&raw))
    }

    pub fn dnd_options(&self) -> leptos_dragdrop::DndOptions {
        leptos_dragdrop::DndOptions {
            threshold_px: self.drag_threshold_px,
            settle_ms: self.settle_ms,
        }
    }
}

/// Get the page config from context
pub fn use_config() -> DemoConfig {
    expect_context::<DemoConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.container_width_px, 400);
        assert_eq!(config.temp_scale, TempScale { cold: 20, hot: 80 });
        assert_eq!(config.randomize.temp, IntRange::new(0, 100));
        assert_eq!(config.randomize.position, IntRange::new(300, 599));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DemoConfig::from_json(
            r#"{ "container_width_px": 1200, "randomize": { "position": { "min": 0, "max": 800 } }, "log_level": "debug" }"#,
        )
        .expect("parse");

        assert_eq!(config.container_width_px, 1200);
        assert_eq!(config.randomize.position, IntRange::new(0, 800));
        assert_eq!(config.randomize.temp, IntRange::new(0, 100));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.settle_ms, 100);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(DemoConfig::from_json("{}").expect("parse"), DemoConfig::default());
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = DemoConfig::from_json(r#"{ "randomize": { "temp": { "min": 50, "max": 10 } } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvertedRange { field: "randomize.temp", min: 50, max: 10 }
        ));
    }

    #[test]
    fn test_rejects_degenerate_scale() {
        let err = DemoConfig::from_json(r#"{ "temp_scale": { "cold": 60, "hot": 60 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::DegenerateScale { cold: 60, hot: 60 }));
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = DemoConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid config json"));
    }

    #[test]
    fn test_range_span() {
        let range = IntRange::new(300, 599);
        assert_eq!(range.span(), 300);
        assert_eq!(IntRange::new(5, 5).span(), 1);
        assert_eq!(IntRange::new(i32::MIN, i32::MAX).span(), 1 << 32);
    }
}
