use super::js_message;
use crate::nav::storage::PreferenceStore;
use crate::nav::{NavError, NavResult};
use web_sys::{window, Storage};

/// `window.localStorage`. Disabled storage (private mode, sandboxed iframes)
/// surfaces as [`NavError::StorageUnavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPreferenceStore;

fn local_storage() -> NavResult<Storage> {
    window()
        .ok_or_else(|| NavError::StorageUnavailable("no window".to_string()))?
        .local_storage()
        .map_err(|err| NavError::StorageUnavailable(js_message(&err)))?
        .ok_or_else(|| NavError::StorageUnavailable("localStorage disabled".to_string()))
}

impl PreferenceStore for LocalPreferenceStore {
    fn read(&self, key: &str) -> NavResult<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|err| NavError::StorageUnavailable(js_message(&err)))
    }

    fn write(&self, key: &str, value: &str) -> NavResult<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| NavError::StorageUnavailable(js_message(&err)))
    }
}
