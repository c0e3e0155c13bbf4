use serde::{Deserialize, Serialize};

/// Legacy document event fired when a section finished rendering.
pub const CONTENT_READY_EVENT: &str = "app-content-ready";

/// Legacy document event fired whenever the listing content changes.
pub const CONTENT_CHANGED_EVENT: &str = "app-content-changed";

/// Payload of the content-ready notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentReadyDetail {
    pub content_type: String,
}
