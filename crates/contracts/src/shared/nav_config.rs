//! Configuration for the top navigation bar.
//!
//! Every field has a default, so hosts only pass what they change.

use crate::enums::SyncMode;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STORAGE_KEY: &str = "topNav_viewMode";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavConfig {
    pub mode: SyncMode,
    /// Preference key holding `"table"` or `"grid"`.
    pub storage_key: String,
    /// Delay before back-button visibility is recomputed after navigation.
    pub settle_delay_ms: u32,
    /// Debounce window for legacy button re-syncs.
    pub mirror_debounce_ms: u32,
    /// Mount our own bar and drawer when the page has none.
    pub render_markup: bool,
    /// Also react to the legacy `app-content-*` document events.
    pub listen_document_events: bool,
    /// Scroll distance (px) before the hamburger collapses.
    pub scroll_threshold: f64,
    /// Widest viewport (px) that counts as mobile.
    pub mobile_max_width: f64,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    pub initial_title: Option<String>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            mode: SyncMode::Independent,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            settle_delay_ms: 100,
            mirror_debounce_ms: 50,
            render_markup: true,
            listen_document_events: true,
            scroll_threshold: 50.0,
            mobile_max_width: 480.0,
            log_level: "debug".to_string(),
            initial_title: None,
        }
    }
}

impl NavConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = NavConfig::from_json(r#"{"mode":"mirror","settleDelayMs":250}"#).unwrap();
        assert_eq!(config.mode, SyncMode::Mirror);
        assert_eq!(config.settle_delay_ms, 250);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.mirror_debounce_ms, 50);
        assert!(config.render_markup);
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        assert!(NavConfig::from_json(r#"{"mode":"legacy"}"#).is_err());
        assert_eq!(NavConfig::from_json("{}").unwrap(), NavConfig::default());
    }
}
