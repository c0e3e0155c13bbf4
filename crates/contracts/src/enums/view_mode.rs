use serde::{Deserialize, Serialize};

/// Layout used by the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

impl ViewMode {
    /// Value stored in the preference slot and passed to the renderer.
    pub fn code(&self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Grid => "grid",
        }
    }

    /// Icon shown on the toggle button while this mode is active.
    ///
    /// The icon announces the layout the button switches *to*.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            ViewMode::Table => "🔲",
            ViewMode::Grid => "📋",
        }
    }

    /// Accessible label matching [`ViewMode::toggle_icon`].
    pub fn toggle_label(&self) -> &'static str {
        match self {
            ViewMode::Table => "Cambiar a vista de cuadrícula",
            ViewMode::Grid => "Cambiar a vista de tabla",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Grid,
            ViewMode::Grid => ViewMode::Table,
        }
    }

    pub fn all() -> [ViewMode; 2] {
        [ViewMode::Table, ViewMode::Grid]
    }

    /// Strict parse: only the exact stored codes are accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "table" => Some(ViewMode::Table),
            "grid" => Some(ViewMode::Grid),
            _ => None,
        }
    }

    /// Parse a persisted value, falling back to [`ViewMode::Table`].
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(Self::from_code).unwrap_or_default()
    }

    /// Which mode a button whose text is `text` is rendered for.
    pub fn from_toggle_icon(text: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|mode| text.contains(mode.toggle_icon()))
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
