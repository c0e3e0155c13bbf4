pub mod sync_mode;
pub mod view_mode;

pub use sync_mode::SyncMode;
pub use view_mode::ViewMode;
