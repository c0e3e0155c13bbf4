use super::error::NavResult;
use contracts::ViewMode;

/// The page script that renders the product listing.
///
/// Every call may fail with [`NavError::CollaboratorUnavailable`]; callers
/// fall back or skip.
///
/// [`NavError::CollaboratorUnavailable`]: super::error::NavError::CollaboratorUnavailable
pub trait ContentRenderer {
    fn set_view_mode(&self, mode: ViewMode) -> NavResult<()>;

    /// Redraw whatever is currently displayed in the content container.
    fn refresh_current_view(&self) -> NavResult<()>;

    /// Leave a sub-category and render its parent section.
    fn render_parent_category(&self) -> NavResult<()>;

    /// Load a whole menu section.
    fn load_content(&self, content_type: &str) -> NavResult<()>;
}
