//! Window manager configuration

use serde::{Deserialize, Serialize};
use crate::error::{DesktopError, DesktopResult};
use crate::math::FrameStyle;

/// Default delay between the exit animation starting and the window hiding
pub const CLOSE_DELAY_MS: f64 = 200.0;

/// Default upper bound (exclusive) of the random open offset in pixels
pub const OPEN_JITTER_PX: f32 = 50.0;

/// Largest accepted `z_base`; leaves half the `u64` range for raises
pub const MAX_Z_BASE: u64 = u64::MAX / 2;

/// Tunables for a [`WindowManager`](crate::WindowManager)
///
/// Every field has a default so partial JSON objects are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Starting value of the stacking counter; the first raise yields `z_base + 1`
    pub z_base: u64,
    /// Open offsets are drawn from `[0, open_jitter)`
    pub open_jitter: f32,
    /// Exit animation length before visibility flips to closed
    pub close_delay_ms: f64,
    /// Delay before the entered state is applied (0 = next tick)
    pub enter_delay_ms: f64,
    /// Chrome metrics for geometric hit testing
    pub frame: FrameStyle,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            z_base: 0,
            open_jitter: OPEN_JITTER_PX,
            close_delay_ms: CLOSE_DELAY_MS,
            enter_delay_ms: 0.0,
            frame: FrameStyle::default(),
        }
    }
}

impl DesktopConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject negative or non-finite values and an oversized `z_base`
    pub fn validate(&self) -> DesktopResult<()> {
        if self.z_base > MAX_Z_BASE {
            return Err(DesktopError::InvalidConfig(format!(
                "z_base must be <= {}, got {}",
                MAX_Z_BASE, self.z_base
            )));
        }
        if !self.open_jitter.is_finite() || self.open_jitter < 0.0 {
            return Err(DesktopError::InvalidConfig(format!(
                "open_jitter must be finite and >= 0, got {}",
                self.open_jitter
            )));
        }
        if !self.close_delay_ms.is_finite() || self.close_delay_ms < 0.0 {
            return Err(DesktopError::InvalidConfig(format!(
                "close_delay_ms must be finite and >= 0, got {}",
                self.close_delay_ms
            )));
        }
        if !self.enter_delay_ms.is_finite() || self.enter_delay_ms < 0.0 {
            return Err(DesktopError::InvalidConfig(format!(
                "enter_delay_ms must be finite and >= 0, got {}",
                self.enter_delay_ms
            )));
        }
        if !self.frame.is_valid() {
            return Err(DesktopError::InvalidConfig(
                "frame metrics must be finite and >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DesktopConfig::default();
        assert_eq!(config.z_base, 0);
        assert!((config.open_jitter - 50.0).abs() < 0.001);
        assert!((config.close_delay_ms - 200.0).abs() < 0.001);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = DesktopConfig::from_json(r#"{ "z_base": 100 }"#).unwrap();
        assert_eq!(config.z_base, 100);
        assert!((config.close_delay_ms - CLOSE_DELAY_MS).abs() < 0.001);
        assert_eq!(config.frame, FrameStyle::default());
    }

    #[test]
    fn test_nested_frame_json() {
        let config =
            DesktopConfig::from_json(r#"{ "frame": { "title_bar_height": 40.0 } }"#).unwrap();
        assert!((config.frame.title_bar_height - 40.0).abs() < 0.001);
        assert!((config.frame.button_size - FrameStyle::default().button_size).abs() < 0.001);
    }

    #[test]
    fn test_negative_delay_rejected() {
        let err = DesktopConfig::from_json(r#"{ "close_delay_ms": -5.0 }"#).unwrap_err();
        assert!(matches!(err, DesktopError::InvalidConfig(_)));
    }

    #[test]
    fn test_oversized_z_base_rejected() {
        let err = DesktopConfig::from_json(r#"{ "z_base": 18446744073709551615 }"#).unwrap_err();
        assert!(matches!(err, DesktopError::InvalidConfig(_)));

        let config = DesktopConfig::from_json(&format!(r#"{{ "z_base": {} }}"#, MAX_Z_BASE)).unwrap();
        assert_eq!(config.z_base, MAX_Z_BASE);
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = DesktopConfig::from_json("{ z_base: ").unwrap_err();
        assert!(matches!(err, DesktopError::SerializationError(_)));
    }
}
