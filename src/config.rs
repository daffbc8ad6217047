use std::time::Duration;

use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("autoplay interval must be greater than zero")]
    ZeroInterval,
    #[error("swipe threshold must be a finite, non-negative distance (got {0})")]
    InvalidSwipeThreshold(f32),
}

/// Timing and gesture parameters of a carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub autoplay_interval: Duration,
    pub reset_delay: Duration,
    pub initial_delay: Duration,
    pub swipe_threshold: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval: AUTOPLAY_INTERVAL,
            reset_delay: RESET_DELAY,
            initial_delay: INITIAL_DELAY,
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}

impl CarouselConfig {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.autoplay_interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(ConfigError::InvalidSwipeThreshold(self.swipe_threshold));
        }
        Ok(self)
    }
}
