//! JavaScript entry point.
//!
//! The host page bootstrap calls `initTopNav(config)` once and keeps the
//! returned handle; there is no global instance.

use crate::dom::{self, DomSurface, JsContentRenderer, LocalPreferenceStore, TimeoutScheduler};
use crate::layout::TopNavShell;
use crate::nav::surface::NavElement;
use crate::nav::{NavBar, NavDeps};
use contracts::shared::menu_catalog;
use contracts::{NavConfig, ViewMode};
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Parse the configured log level; unknown names keep `debug`.
pub fn level_filter(name: &str) -> log::LevelFilter {
    name.parse().unwrap_or(log::LevelFilter::Debug)
}

fn mount_markup(config: &NavConfig) {
    let already_there = dom::document()
        .and_then(|doc| doc.get_element_by_id(NavElement::TopNav.id()))
        .is_some();
    if already_there || !config.render_markup {
        return;
    }
    let title = config
        .initial_title
        .clone()
        .unwrap_or_else(|| menu_catalog::title_for(menu_catalog::MENU_SECTIONS[0].0).into_owned());
    leptos::mount::mount_to_body(move || view! { <TopNavShell title=title /> });
    log::debug!("top nav: markup mounted");
}

/// Build, initialize and wire the navigation bar.
#[wasm_bindgen(js_name = initTopNav)]
pub fn init_top_nav(config: JsValue) -> TopNavHandle {
    let config = dom::config::resolve(config);
    log::set_max_level(level_filter(&config.log_level));
    mount_markup(&config);

    let nav = NavBar::new(
        config,
        NavDeps {
            surface: Rc::new(DomSurface),
            store: Rc::new(LocalPreferenceStore),
            renderer: Rc::new(JsContentRenderer),
            scheduler: Rc::new(TimeoutScheduler),
        },
    );
    if nav.initialize() {
        dom::events::bind(&nav);
    }
    TopNavHandle { nav }
}

/// The page-owned handle to the navigation bar.
#[wasm_bindgen]
pub struct TopNavHandle {
    nav: NavBar,
}

#[wasm_bindgen]
impl TopNavHandle {
    /// `false` when the page has no `#top-nav`; every other call is then a no-op.
    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.nav.is_active()
    }

    #[wasm_bindgen(js_name = toggleDrawer)]
    pub fn toggle_drawer(&self) {
        self.nav.toggle_drawer();
    }

    #[wasm_bindgen(js_name = openDrawer)]
    pub fn open_drawer(&self) {
        self.nav.open_drawer();
    }

    #[wasm_bindgen(js_name = closeDrawer)]
    pub fn close_drawer(&self) {
        self.nav.close_drawer();
    }

    #[wasm_bindgen(js_name = isDrawerOpen)]
    pub fn is_drawer_open(&self) -> bool {
        self.nav.is_drawer_open()
    }

    #[wasm_bindgen(js_name = toggleViewMode)]
    pub fn toggle_view_mode(&self) {
        self.nav.toggle_view_mode();
    }

    /// `"table"` or `"grid"`.
    #[wasm_bindgen(js_name = viewMode)]
    pub fn view_mode(&self) -> String {
        self.nav.view_mode().code().to_string()
    }

    /// Returns `false` and changes nothing for unknown modes.
    #[wasm_bindgen(js_name = setViewMode)]
    pub fn set_view_mode(&self, mode: &str) -> bool {
        match ViewMode::from_code(mode) {
            Some(mode) => {
                self.nav.set_view_mode(mode);
                true
            }
            None => {
                log::warn!("top nav: unknown view mode {:?}", mode);
                false
            }
        }
    }

    #[wasm_bindgen(js_name = handleBackNavigation)]
    pub fn handle_back_navigation(&self) {
        self.nav.handle_back_navigation();
    }

    #[wasm_bindgen(js_name = updateBackButtonVisibility)]
    pub fn update_back_button_visibility(&self) {
        self.nav.update_back_button_visibility();
    }

    /// `detail` is `{ contentType: string }`.
    #[wasm_bindgen(js_name = notifyContentReady)]
    pub fn notify_content_ready(&self, detail: JsValue) {
        match dom::events::decode_content_ready(detail) {
            Ok(detail) => self.nav.on_content_ready(&detail.content_type),
            Err(err) => log::warn!("top nav: {}", err),
        }
    }

    #[wasm_bindgen(js_name = notifyContentChanged)]
    pub fn notify_content_changed(&self) {
        self.nav.on_content_changed();
    }

    /// Call after (re)creating the legacy buttons.
    #[wasm_bindgen(js_name = notifyButtonsChanged)]
    pub fn notify_buttons_changed(&self) {
        self.nav.notify_buttons_changed();
    }

    #[wasm_bindgen(js_name = enterSubcategory)]
    pub fn enter_subcategory(&self, name: &str) {
        self.nav.enter_subcategory(name);
    }

    #[wasm_bindgen(js_name = setTitle)]
    pub fn set_title(&self, title: &str) {
        self.nav.set_title(title);
    }

    pub fn show(&self) {
        self.nav.show();
    }

    pub fn hide(&self) {
        self.nav.hide();
    }

    pub fn refresh(&self) {
        self.nav.refresh();
    }

    #[wasm_bindgen(js_name = forceSync)]
    pub fn force_sync(&self) {
        self.nav.force_sync();
    }
}
