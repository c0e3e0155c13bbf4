use serde::{Deserialize, Serialize};

/// How the top bar buttons behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    /// The top bar owns drawer, back navigation and view mode itself.
    #[default]
    Independent,
    /// The top bar proxies clicks to the legacy buttons and copies their state.
    Mirror,
}
