//! Console configuration.
//!
//! [`ConsoleProperties`] is the single configuration struct handed to the
//! application. It can be built in code, deserialized by an embedder, or
//! overlaid from environment variables:
//!
//! - `CONSOLE_GAME_WIDTH`: screen columns (default: 160)
//! - `CONSOLE_GAME_HEIGHT`: screen rows (default: 50)
//! - `CONSOLE_GAME_FRAME_MS`: target frame interval, `0` disables pacing (default: 16)

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    ScreenDimensions, DEFAULT_FONT_HEIGHT, DEFAULT_FONT_WIDTH, DEFAULT_FRAME_MS,
    DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH,
};

/// Invalid configuration, detected before any surface is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("screen {axis} must not be negative (got {value})")]
    NegativeDimension { axis: &'static str, value: i32 },

    #[error("screen {axis} exceeds {} (got {value})", crate::MAX_DIMENSION)]
    DimensionTooLarge { axis: &'static str, value: i32 },

    #[error("font {axis} must be positive (got {value})")]
    InvalidFont { axis: &'static str, value: i16 },

    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Properties for console configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleProperties {
    pub screen: ScreenDimensions,
    /// Font cell size hint; backends that cannot change the font ignore it.
    pub font_width: i16,
    pub font_height: i16,
    /// Target frame interval in milliseconds; `0` runs frames back to back.
    pub target_frame_ms: u32,
}

impl Default for ConsoleProperties {
    fn default() -> Self {
        Self {
            screen: ScreenDimensions::default(),
            font_width: DEFAULT_FONT_WIDTH,
            font_height: DEFAULT_FONT_HEIGHT,
            target_frame_ms: DEFAULT_FRAME_MS,
        }
    }
}

impl ConsoleProperties {
    /// Default properties with a different screen size.
    pub fn with_screen(width: i32, height: i32) -> Result<Self, ConfigError> {
        Ok(Self {
            screen: ScreenDimensions::new(width, height)?,
            ..Self::default()
        })
    }

    /// Overlay `CONSOLE_GAME_*` environment variables on the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut props = Self::default();

        let width = parse_var(&lookup, "CONSOLE_GAME_WIDTH")?
            .unwrap_or(DEFAULT_SCREEN_WIDTH as i32);
        let height = parse_var(&lookup, "CONSOLE_GAME_HEIGHT")?
            .unwrap_or(DEFAULT_SCREEN_HEIGHT as i32);
        props.screen = ScreenDimensions::new(width, height)?;

        if let Some(ms) = parse_var(&lookup, "CONSOLE_GAME_FRAME_MS")? {
            props.target_frame_ms = ms;
        }

        props.validate()?;
        Ok(props)
    }

    /// Check fields that serde or direct construction may have left invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.font_width <= 0 {
            return Err(ConfigError::InvalidFont {
                axis: "width",
                value: self.font_width,
            });
        }
        if self.font_height <= 0 {
            return Err(ConfigError::InvalidFont {
                axis: "height",
                value: self.font_height,
            });
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnv { var, value: raw })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let owned: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| {
            owned
                .iter()
                .find(|(k, _)| k == var)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn defaults_when_env_is_empty() {
        let props = ConsoleProperties::from_lookup(|_| None).unwrap();
        assert_eq!(props, ConsoleProperties::default());
    }

    #[test]
    fn env_overrides_screen_and_frame_interval() {
        let props = ConsoleProperties::from_lookup(lookup_from(&[
            ("CONSOLE_GAME_WIDTH", "80"),
            ("CONSOLE_GAME_HEIGHT", " 24 "),
            ("CONSOLE_GAME_FRAME_MS", "0"),
        ]))
        .unwrap();
        assert_eq!(props.screen.width(), 80);
        assert_eq!(props.screen.height(), 24);
        assert_eq!(props.target_frame_ms, 0);
    }

    #[test]
    fn negative_env_width_is_a_config_error() {
        let err =
            ConsoleProperties::from_lookup(lookup_from(&[("CONSOLE_GAME_WIDTH", "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::NegativeDimension { axis: "width", value: -1 }));
    }

    #[test]
    fn garbage_env_value_is_reported() {
        let err =
            ConsoleProperties::from_lookup(lookup_from(&[("CONSOLE_GAME_FRAME_MS", "fast")]))
                .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnv {
                var: "CONSOLE_GAME_FRAME_MS",
                value: "fast".to_string()
            }
        );
    }

    #[test]
    fn json_properties_fill_missing_fields_with_defaults() {
        let props: ConsoleProperties =
            serde_json::from_str(r#"{"screen":{"width":40,"height":20}}"#).unwrap();
        assert_eq!(props.screen.area(), 800);
        assert_eq!(props.font_width, DEFAULT_FONT_WIDTH);
        assert_eq!(props.target_frame_ms, DEFAULT_FRAME_MS);
        assert!(props.validate().is_ok());
    }

    #[test]
    fn zero_font_fails_validation() {
        let props = ConsoleProperties {
            font_height: 0,
            ..ConsoleProperties::default()
        };
        assert!(matches!(
            props.validate(),
            Err(ConfigError::InvalidFont { axis: "height", .. })
        ));
    }
}
