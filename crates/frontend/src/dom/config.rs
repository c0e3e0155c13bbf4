//! Where the bar's configuration comes from.
//!
//! 1. the object passed to `initTopNav(config)`,
//! 2. otherwise `<script type="application/json" id="top-nav-config">`,
//! 3. otherwise defaults.

use super::document;
use contracts::NavConfig;
use wasm_bindgen::JsValue;

const CONFIG_SCRIPT_ID: &str = "top-nav-config";

pub fn resolve(value: JsValue) -> NavConfig {
    if !value.is_undefined() && !value.is_null() {
        return match serde_wasm_bindgen::from_value::<NavConfig>(value) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("top nav: invalid config object ({}), using defaults", err);
                NavConfig::default()
            }
        };
    }

    let embedded = document()
        .and_then(|doc| doc.get_element_by_id(CONFIG_SCRIPT_ID))
        .and_then(|script| script.text_content());
    match embedded {
        Some(raw) => NavConfig::from_json(&raw).unwrap_or_else(|err| {
            log::warn!("top nav: invalid #{} ({}), using defaults", CONFIG_SCRIPT_ID, err);
            NavConfig::default()
        }),
        None => NavConfig::default(),
    }
}
