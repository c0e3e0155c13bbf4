//! View-mode preference persistence.

use super::error::NavResult;
use contracts::ViewMode;

/// A string key-value slot (browser `localStorage` in production).
pub trait PreferenceStore {
    fn read(&self, key: &str) -> NavResult<Option<String>>;

    fn write(&self, key: &str, value: &str) -> NavResult<()>;
}

/// Load the view mode; unreadable or unknown values give [`ViewMode::Table`].
pub fn load_view_mode(store: &dyn PreferenceStore, key: &str) -> ViewMode {
    match store.read(key) {
        Ok(value) => {
            let mode = ViewMode::from_stored(value.as_deref());
            if let Some(raw) = value.filter(|raw| ViewMode::from_code(raw).is_none()) {
                log::warn!("top nav: ignoring stored view mode {:?}", raw);
            }
            mode
        }
        Err(err) => {
            log::warn!("top nav: {}, using default view mode", err);
            ViewMode::default()
        }
    }
}

/// Save the view mode, logging and ignoring failures.
pub fn save_view_mode(store: &dyn PreferenceStore, key: &str, mode: ViewMode) {
    if let Err(err) = store.write(key, mode.code()) {
        log::warn!("top nav: {}, view mode kept in memory only", err);
    }
}
