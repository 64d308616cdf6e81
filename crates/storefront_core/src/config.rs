//! Page tunables with defaults and validation.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default slider autoplay period in milliseconds.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u32 = 3500;
/// Default number of products rendered per page.
pub const DEFAULT_PAGE_SIZE: usize = 3;
/// Default visible ratio required before a reveal element is shown.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.12;
/// Default delay before a freshly rendered product card becomes visible.
pub const DEFAULT_CARD_REVEAL_DELAY_MS: u32 = 60;

#[derive(Debug, Error, Clone, PartialEq)]
/// Invalid tunables in a [`StorefrontConfig`].
pub enum ConfigError {
    /// The payload could not be parsed.
    #[error("storefront config is not valid JSON: {0}")]
    Parse(String),
    /// Autoplay would fire continuously.
    #[error("autoplay_interval_ms must be greater than zero")]
    ZeroAutoplayInterval,
    /// "Load more" would never advance.
    #[error("page_size must be greater than zero")]
    ZeroPageSize,
    /// Threshold outside the intersection ratio range.
    #[error("reveal_threshold must be within 0.0..=1.0, got {0}")]
    ThresholdOutOfRange(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Tunables shared by the page components.
pub struct StorefrontConfig {
    /// Slider autoplay period.
    pub autoplay_interval_ms: u32,
    /// Products rendered per page and per "load more" click.
    pub page_size: usize,
    /// Visible ratio that triggers a reveal.
    pub reveal_threshold: f64,
    /// Delay before a newly rendered card gets its visible class.
    pub card_reveal_delay_ms: u32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            page_size: DEFAULT_PAGE_SIZE,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            card_reveal_delay_ms: DEFAULT_CARD_REVEAL_DELAY_MS,
        }
    }
}

impl StorefrontConfig {
    /// Parses a JSON object of overrides and validates the merged result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys, and the matching
    /// validation variant when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every tunable against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, in field declaration order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.autoplay_interval_ms == 0 {
            return Err(ConfigError::ZeroAutoplayInterval);
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.reveal_threshold));
        }
        Ok(())
    }

    /// Slider autoplay period as a [`Duration`].
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.autoplay_interval_ms))
    }

    /// Card reveal delay as a [`Duration`].
    pub fn card_reveal_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.card_reveal_delay_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_page_behavior() {
        let config = StorefrontConfig::default();
        assert_eq!(config.autoplay_interval(), Duration::from_millis(3500));
        assert_eq!(config.page_size, 3);
        assert_eq!(config.reveal_threshold, 0.12);
        assert_eq!(config.card_reveal_delay(), Duration::from_millis(60));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = StorefrontConfig::from_json(r#"{ "page_size": 6 }"#).expect("parse");
        assert_eq!(
            config,
            StorefrontConfig {
                page_size: 6,
                ..StorefrontConfig::default()
            }
        );
    }

    #[test]
    fn unknown_keys_and_bad_json_are_parse_errors() {
        assert!(matches!(
            StorefrontConfig::from_json(r#"{ "autoplay": 10 }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            StorefrontConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert_eq!(
            StorefrontConfig::from_json(r#"{ "autoplay_interval_ms": 0 }"#),
            Err(ConfigError::ZeroAutoplayInterval)
        );
        assert_eq!(
            StorefrontConfig::from_json(r#"{ "page_size": 0 }"#),
            Err(ConfigError::ZeroPageSize)
        );
        assert_eq!(
            StorefrontConfig::from_json(r#"{ "reveal_threshold": 1.5 }"#),
            Err(ConfigError::ThresholdOutOfRange(1.5))
        );
    }
}
