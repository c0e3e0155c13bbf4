//! Plain data shared between the top navigation bar and its host page.

pub mod enums;
pub mod shared;

pub use enums::{SyncMode, ViewMode};
pub use shared::events::ContentReadyDetail;
pub use shared::nav_config::NavConfig;
