//! Menu catalog - the single source of truth for section titles.
//!
//! Known content types map to a display title. Fallback: the raw key.

use std::borrow::Cow;

/// Content type whose listing can be narrowed into sub-categories.
pub const NARROWABLE_CONTENT: &str = "licores";

/// (key, title) for every section of the menu, in drawer order.
pub const MENU_SECTIONS: [(&str, &str); 10] = [
    ("cocteleria", "Coctelería"),
    ("refrescos", "Refrescos"),
    ("licores", "Licores"),
    ("cervezas", "Cervezas"),
    ("pizzas", "Pizzas"),
    ("alitas", "Alitas"),
    ("sopas", "Sopas"),
    ("ensaladas", "Ensaladas"),
    ("carnes", "Carnes"),
    ("cafe", "Café"),
];

/// Returns the display title for a content type.
pub fn title_for(content_type: &str) -> Cow<'_, str> {
    MENU_SECTIONS
        .iter()
        .find(|(key, _)| *key == content_type)
        .map(|(_, title)| Cow::Borrowed(*title))
        .unwrap_or(Cow::Borrowed(content_type))
}

/// Whether entering `content_type` keeps a narrowed (sub-category) state.
pub fn supports_narrowing(content_type: &str) -> bool {
    content_type == NARROWABLE_CONTENT
}

/// Title for a sub-category: first character upper-cased.
pub fn subcategory_title(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
