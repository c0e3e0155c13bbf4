use contracts::ViewMode;

/// Drawer state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerState {
    Closed,
    Open,
}

/// Runtime state of the bar. Only `view_mode` outlives the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavBarState {
    pub view_mode: ViewMode,
    pub menu_open: bool,
    pub back_button_visible: bool,
    /// Set while browsing a sub-category of the narrowable section.
    pub subcategory: Option<String>,
    /// The bar carries the `show` class.
    pub nav_visible: bool,
}

impl NavBarState {
    pub fn drawer(&self) -> DrawerState {
        if self.menu_open {
            DrawerState::Open
        } else {
            DrawerState::Closed
        }
    }

    pub fn is_narrowed(&self) -> bool {
        self.subcategory.is_some()
    }
}
