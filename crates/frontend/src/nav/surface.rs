//! The page as seen by the controller.
//!
//! The browser implementation lives in `crate::dom`; tests use an in-memory
//! fake. Every element is looked up on each call, so buttons that are
//! re-created by other scripts are picked up without bookkeeping.

use super::error::NavResult;

/// Top bar elements, addressed by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NavElement {
    TopNav,
    Hamburger,
    BackButton,
    ViewToggle,
    Title,
    Drawer,
    Overlay,
}

impl NavElement {
    pub fn id(&self) -> &'static str {
        match self {
            NavElement::TopNav => "top-nav",
            NavElement::Hamburger => "top-hamburger-btn",
            NavElement::BackButton => "top-back-btn",
            NavElement::ViewToggle => "top-view-toggle-btn",
            NavElement::Title => "nav-title",
            NavElement::Drawer => "drawer-menu",
            NavElement::Overlay => "drawer-overlay",
        }
    }

    pub fn all() -> [NavElement; 7] {
        [
            NavElement::TopNav,
            NavElement::Hamburger,
            NavElement::BackButton,
            NavElement::ViewToggle,
            NavElement::Title,
            NavElement::Drawer,
            NavElement::Overlay,
        ]
    }
}

/// Buttons of the older in-page navigation that mirror mode follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LegacyButton {
    Hamburger,
    Back,
    ViewToggle,
}

impl LegacyButton {
    /// CSS selector; the first match wins.
    pub fn selector(&self) -> &'static str {
        match self {
            LegacyButton::Hamburger => "#hamburger-btn",
            LegacyButton::Back => ".back-button-container .back-button, .back-button, #back-btn",
            LegacyButton::ViewToggle => ".view-toggle-btn, #view-toggle-btn",
        }
    }
}

pub trait NavSurface {
    fn contains(&self, element: NavElement) -> bool;

    fn has_class(&self, element: NavElement, class: &str) -> NavResult<bool>;

    fn set_class(&self, element: NavElement, class: &str, enabled: bool) -> NavResult<()>;

    /// `display: flex` when visible, `display: none` otherwise.
    fn set_visible(&self, element: NavElement, visible: bool) -> NavResult<()>;

    fn set_text(&self, element: NavElement, text: &str) -> NavResult<()>;

    fn set_attribute(&self, element: NavElement, name: &str, value: &str) -> NavResult<()>;

    fn set_body_class(&self, class: &str, enabled: bool) -> NavResult<()>;

    /// The visible top-level screen is the main content screen.
    fn main_screen_active(&self) -> bool;

    /// Number of children in `#content-container`, 0 when it is missing.
    fn content_child_count(&self) -> usize;

    /// Go back in browser history. Returns `false` when there is nowhere to go.
    fn history_back(&self) -> bool;

    fn click_legacy(&self, button: LegacyButton) -> NavResult<()>;

    /// Whether the legacy button is rendered and not `display: none`.
    fn legacy_visible(&self, button: LegacyButton) -> NavResult<bool>;

    fn legacy_text(&self, button: LegacyButton) -> NavResult<String>;
}
