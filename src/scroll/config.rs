use std::time::Duration;

use thiserror::Error;

const DEFAULT_ANCHOR_FRACTION: f64 = 0.3;
const DEFAULT_BUFFER_MAX_PX: f64 = 120.0;
const DEFAULT_BUFFER_VIEWPORT_RATIO: f64 = 0.08;
const DEFAULT_SETTLE_DELAYS_MS: [u64; 2] = [200, 800];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("anchor fraction {0} must be in (0, 0.5]")]
    AnchorOutOfRange(f64),
    #[error("hysteresis buffer {0} must be a finite, non-negative number")]
    InvalidBuffer(f64),
}

/// Tuning for the scroll engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollConfig {
    anchor_fraction: f64,
    buffer_max_px: f64,
    buffer_viewport_ratio: f64,
    settle_delays: Vec<Duration>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            anchor_fraction: DEFAULT_ANCHOR_FRACTION,
            buffer_max_px: DEFAULT_BUFFER_MAX_PX,
            buffer_viewport_ratio: DEFAULT_BUFFER_VIEWPORT_RATIO,
            settle_delays: DEFAULT_SETTLE_DELAYS_MS
                .iter()
                .map(|ms| Duration::from_millis(*ms))
                .collect(),
        }
    }
}

impl ScrollConfig {
    pub fn with_anchor_fraction(mut self, fraction: f64) -> Result<Self, ConfigError> {
        if !(fraction > 0.0 && fraction <= 0.5) {
            return Err(ConfigError::AnchorOutOfRange(fraction));
        }
        self.anchor_fraction = fraction;
        Ok(self)
    }

    pub fn with_buffer(mut self, max_px: f64, viewport_ratio: f64) -> Result<Self, ConfigError> {
        for v in [max_px, viewport_ratio] {
            if !v.is_finite() || v < 0.0 {
                return Err(ConfigError::InvalidBuffer(v));
            }
        }
        self.buffer_max_px = max_px;
        self.buffer_viewport_ratio = viewport_ratio;
        Ok(self)
    }

    pub fn with_settle_delays(mut self, delays: Vec<Duration>) -> Self {
        self.settle_delays = delays;
        self
    }

    pub fn anchor_fraction(&self) -> f64 {
        self.anchor_fraction
    }

    pub fn settle_delays(&self) -> &[Duration] {
        &self.settle_delays
    }

    /// Document y coordinate that decides which section is in view.
    pub fn anchor_y(&self, scroll_y: f64, viewport_height: f64) -> f64 {
        scroll_y + viewport_height * self.anchor_fraction
    }

    /// Width of the dead zone around the previous section's edges.
    pub fn buffer(&self, viewport_height: f64) -> f64 {
        self.buffer_max_px
            .min(viewport_height * self.buffer_viewport_ratio)
            .max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScrollConfig::default();
        assert_eq!(config.anchor_fraction(), 0.3);
        assert_eq!(
            config.settle_delays(),
            &[Duration::from_millis(200), Duration::from_millis(800)]
        );
        assert_eq!(config.anchor_y(1400.0, 1000.0), 1700.0);
    }

    #[test]
    fn test_buffer_is_capped() {
        let config = ScrollConfig::default();
        // 8% of 1000 is below the cap
        assert_eq!(config.buffer(1000.0), 80.0);
        // 8% of 2000 exceeds it
        assert_eq!(config.buffer(2000.0), 120.0);
        assert_eq!(config.buffer(0.0), 0.0);
    }

    #[test]
    fn test_anchor_fraction_validation() {
        assert!(ScrollConfig::default().with_anchor_fraction(0.5).is_ok());
        assert!(ScrollConfig::default().with_anchor_fraction(0.28).is_ok());
        assert_eq!(
            ScrollConfig::default().with_anchor_fraction(0.0),
            Err(ConfigError::AnchorOutOfRange(0.0))
        );
        assert!(ScrollConfig::default().with_anchor_fraction(0.6).is_err());
        assert!(ScrollConfig::default().with_anchor_fraction(f64::NAN).is_err());
    }

    #[test]
    fn test_buffer_validation() {
        assert!(ScrollConfig::default().with_buffer(60.0, 0.05).is_ok());
        assert!(ScrollConfig::default().with_buffer(-1.0, 0.05).is_err());
        assert!(ScrollConfig::default()
            .with_buffer(60.0, f64::INFINITY)
            .is_err());
    }
}
