//! Reading state back from the legacy buttons.

use super::surface::{LegacyButton, NavSurface};
use contracts::ViewMode;

/// What the legacy button set currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LegacySnapshot {
    pub back_visible: bool,
    pub toggle_text: Option<String>,
}

impl LegacySnapshot {
    /// Missing legacy buttons read as hidden / blank.
    pub fn capture(surface: &dyn NavSurface) -> Self {
        Self {
            back_visible: surface.legacy_visible(LegacyButton::Back).unwrap_or(false),
            toggle_text: surface.legacy_text(LegacyButton::ViewToggle).ok(),
        }
    }

    /// The legacy toggle shows the icon of the layout on screen, while the
    /// top bar shows the icon of the layout it switches to. A legacy button
    /// showing the table-mode icon therefore means grid is active.
    ///
    /// `None` when the button is missing or shows neither icon.
    pub fn view_mode(&self) -> Option<ViewMode> {
        self.toggle_text
            .as_deref()
            .and_then(ViewMode::from_toggle_icon)
            .map(|shown| shown.toggled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(text: Option<&str>) -> LegacySnapshot {
        LegacySnapshot {
            back_visible: false,
            toggle_text: text.map(str::to_string),
        }
    }

    #[test]
    fn test_complementary_mode() {
        assert_eq!(snapshot(Some("🔲")).view_mode(), Some(ViewMode::Grid));
        assert_eq!(snapshot(Some("📋")).view_mode(), Some(ViewMode::Table));
        assert_eq!(snapshot(Some("vista")).view_mode(), None);
        assert_eq!(snapshot(None).view_mode(), None);
    }
}
