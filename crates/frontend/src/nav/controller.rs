//! Navigation bar controller.
//!
//! One instance per page, built by the bootstrap code and shared by cloning
//! (the handle is an `Rc`). All methods are no-ops until [`NavBar::initialize`]
//! succeeded, and stay no-ops forever when the page has no top bar.

use super::error::NavResult;
use super::mirror::LegacySnapshot;
use super::renderer::ContentRenderer;
use super::scheduler::Scheduler;
use super::scroll::{ScrollSample, ScrollTracker};
use super::state::NavBarState;
use super::storage::{self, PreferenceStore};
use super::surface::{LegacyButton, NavElement, NavSurface};
use contracts::shared::menu_catalog::{self, NARROWABLE_CONTENT};
use contracts::{NavConfig, SyncMode, ViewMode};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Everything the controller talks to.
pub struct NavDeps {
    pub surface: Rc<dyn NavSurface>,
    pub store: Rc<dyn PreferenceStore>,
    pub renderer: Rc<dyn ContentRenderer>,
    pub scheduler: Rc<dyn Scheduler>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pending,
    Active,
    /// The root element was missing at initialization.
    Inert,
}

struct Inner {
    config: NavConfig,
    deps: NavDeps,
    phase: Cell<Phase>,
    state: RefCell<NavBarState>,
    scroll: RefCell<ScrollTracker>,
    resync_generation: Cell<u64>,
}

#[derive(Clone)]
pub struct NavBar {
    inner: Rc<Inner>,
}

impl NavBar {
    pub fn new(config: NavConfig, deps: NavDeps) -> Self {
        Self {
            inner: Rc::new(Inner {
                config,
                deps,
                phase: Cell::new(Phase::Pending),
                state: RefCell::new(NavBarState::default()),
                scroll: RefCell::new(ScrollTracker::default()),
                resync_generation: Cell::new(0),
            }),
        }
    }

    /// Attach to the page. Returns `false` when the bar is not on the page.
    pub fn initialize(&self) -> bool {
        match self.inner.phase.get() {
            Phase::Active => return true,
            Phase::Inert => return false,
            Phase::Pending => {}
        }

        let surface = self.surface();
        for element in NavElement::all() {
            if !surface.contains(element) {
                log::debug!("top nav: #{} not found", element.id());
            }
        }
        if !surface.contains(NavElement::TopNav) {
            log::warn!(
                "top nav: #{} not found, navigation bar disabled",
                NavElement::TopNav.id()
            );
            self.inner.phase.set(Phase::Inert);
            return false;
        }

        let view_mode = storage::load_view_mode(self.inner.deps.store.as_ref(), &self.inner.config.storage_key);
        let was_open = surface.has_class(NavElement::Drawer, "open").unwrap_or(false);
        {
            let mut state = self.inner.state.borrow_mut();
            state.view_mode = view_mode;
            state.menu_open = false;
        }
        self.inner.phase.set(Phase::Active);

        self.render_drawer();
        self.render_view_mode();
        if let Some(title) = &self.inner.config.initial_title {
            self.set_title(title);
        }
        match self.inner.config.mode {
            SyncMode::Independent => self.update_back_button_visibility(),
            SyncMode::Mirror => self.sync_from_legacy(),
        }

        log::info!(
            "top nav: initialized ({:?} mode, view {}, drawer was open: {})",
            self.inner.config.mode,
            view_mode,
            was_open
        );
        true
    }

    pub fn is_active(&self) -> bool {
        self.inner.phase.get() == Phase::Active
    }

    pub fn config(&self) -> &NavConfig {
        &self.inner.config
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> NavBarState {
        self.inner.state.borrow().clone()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.inner.state.borrow().view_mode
    }

    pub fn is_drawer_open(&self) -> bool {
        self.inner.state.borrow().menu_open
    }

    // ── Drawer ──────────────────────────────────────────────────────────

    pub fn toggle_drawer(&self) {
        if !self.is_active() {
            return;
        }
        let visual = self.surface().has_class(NavElement::Drawer, "open");
        let open = {
            let mut state = self.inner.state.borrow_mut();
            if let Ok(visually_open) = visual {
                if visually_open != state.menu_open {
                    log::debug!(
                        "top nav: drawer desync (state {}, visual {}), following the page",
                        state.menu_open,
                        visually_open
                    );
                    state.menu_open = visually_open;
                }
            }
            state.menu_open = !state.menu_open;
            state.menu_open
        };
        self.render_drawer();
        log::debug!("top nav: drawer toggled, open = {}", open);
    }

    pub fn open_drawer(&self) {
        self.set_drawer(true);
    }

    pub fn close_drawer(&self) {
        self.set_drawer(false);
    }

    fn set_drawer(&self, open: bool) {
        if !self.is_active() {
            return;
        }
        self.inner.state.borrow_mut().menu_open = open;
        self.render_drawer();
        log::debug!("top nav: drawer open = {}", open);
    }

    fn render_drawer(&self) {
        let open = self.inner.state.borrow().menu_open;
        let surface = self.surface();
        self.apply(surface.set_class(NavElement::Drawer, "open", open));
        self.apply(surface.set_class(NavElement::Overlay, "active", open));
    }

    // ── View mode ───────────────────────────────────────────────────────

    pub fn toggle_view_mode(&self) {
        if !self.is_active() {
            return;
        }
        let mode = self.view_mode().toggled();
        self.commit_view_mode(mode);

        let renderer = &self.inner.deps.renderer;
        if let Err(err) = renderer.set_view_mode(mode) {
            log::debug!("top nav: {}, layout not switched", err);
        }
        if let Err(err) = renderer.refresh_current_view() {
            log::debug!("top nav: {}, view not refreshed", err);
        }
        log::info!("top nav: view mode changed to {}", mode);
    }

    /// Adopt a mode chosen elsewhere. The renderer is not notified, it is
    /// usually the caller.
    pub fn set_view_mode(&self, mode: ViewMode) {
        if !self.is_active() {
            return;
        }
        self.commit_view_mode(mode);
        log::debug!("top nav: view mode set to {}", mode);
    }

    fn commit_view_mode(&self, mode: ViewMode) {
        self.inner.state.borrow_mut().view_mode = mode;
        storage::save_view_mode(self.inner.deps.store.as_ref(), &self.inner.config.storage_key, mode);
        self.render_view_mode();
    }

    fn render_view_mode(&self) {
        let mode = self.view_mode();
        let surface = self.surface();
        self.apply(surface.set_body_class("grid-enhanced", mode == ViewMode::Grid));
        self.apply(surface.set_text(NavElement::ViewToggle, mode.toggle_icon()));
        self.apply(surface.set_attribute(NavElement::ViewToggle, "aria-label", mode.toggle_label()));
        self.apply(surface.set_class(NavElement::ViewToggle, "active", mode == ViewMode::Grid));
        // the toggle stays visible in every browsing state
        self.apply(surface.set_visible(NavElement::ViewToggle, true));
    }

    // ── Back navigation ─────────────────────────────────────────────────

    pub fn handle_back_navigation(&self) {
        if !self.is_active() {
            return;
        }
        let narrowed = self.inner.state.borrow().is_narrowed();
        let handled = narrowed
            && match self.inner.deps.renderer.render_parent_category() {
                Ok(()) => {
                    self.inner.state.borrow_mut().subcategory = None;
                    self.set_title(&menu_catalog::title_for(NARROWABLE_CONTENT));
                    log::debug!("top nav: back to parent category");
                    true
                }
                Err(err) => {
                    log::debug!("top nav: {}, falling back to history", err);
                    false
                }
            };
        if !handled {
            if self.surface().history_back() {
                log::debug!("top nav: browser back navigation");
            } else {
                log::debug!("top nav: no history to go back to");
            }
        }
        self.schedule_visibility_check();
    }

    fn schedule_visibility_check(&self) {
        let weak = Rc::downgrade(&self.inner);
        self.inner.deps.scheduler.defer(
            self.inner.config.settle_delay_ms,
            Box::new(move || {
                if let Some(nav) = NavBar::upgrade(&weak) {
                    nav.update_back_button_visibility();
                }
            }),
        );
    }

    pub fn update_back_button_visibility(&self) {
        if !self.is_active() {
            return;
        }
        let surface = self.surface();
        let visible = match self.inner.config.mode {
            SyncMode::Independent => surface.main_screen_active() && surface.content_child_count() > 0,
            SyncMode::Mirror => LegacySnapshot::capture(surface).back_visible,
        };
        self.inner.state.borrow_mut().back_button_visible = visible;
        self.apply(surface.set_visible(NavElement::BackButton, visible));
        log::debug!("top nav: back button visible = {}", visible);
    }

    /// Enter the narrowed state of the sub-category `name`.
    pub fn enter_subcategory(&self, name: &str) {
        if !self.is_active() {
            return;
        }
        self.inner.state.borrow_mut().subcategory = Some(name.to_string());
        self.set_title(&menu_catalog::subcategory_title(name));
        self.update_back_button_visibility();
    }

    // ── Notifications ───────────────────────────────────────────────────

    pub fn on_content_ready(&self, content_type: &str) {
        if !self.is_active() {
            return;
        }
        self.set_title(&menu_catalog::title_for(content_type));
        if !menu_catalog::supports_narrowing(content_type) {
            self.inner.state.borrow_mut().subcategory = None;
        }
        self.show();
        self.update_back_button_visibility();
    }

    pub fn on_content_changed(&self) {
        if !self.is_active() {
            return;
        }
        self.update_back_button_visibility();
        if self.is_drawer_open() {
            self.close_drawer();
            log::debug!("top nav: drawer closed after content change");
        }
    }

    /// The legacy buttons were re-created or changed. Re-syncs after the
    /// debounce window; a burst results in a single re-sync.
    pub fn notify_buttons_changed(&self) {
        if !self.is_active() {
            return;
        }
        let generation = self.inner.resync_generation.get().wrapping_add(1);
        self.inner.resync_generation.set(generation);
        let weak = Rc::downgrade(&self.inner);
        self.inner.deps.scheduler.defer(
            self.inner.config.mirror_debounce_ms,
            Box::new(move || {
                if let Some(nav) = NavBar::upgrade(&weak) {
                    if nav.inner.resync_generation.get() == generation {
                        nav.force_sync();
                    }
                }
            }),
        );
    }

    pub fn on_scroll(&self, sample: ScrollSample) {
        if !self.is_active() {
            return;
        }
        let config = &self.inner.config;
        let collapsed = self
            .inner
            .scroll
            .borrow_mut()
            .observe(sample, config.scroll_threshold, config.mobile_max_width);
        if let Some(collapsed) = collapsed {
            if self.surface().contains(NavElement::Hamburger) {
                self.apply(self.surface().set_class(NavElement::Hamburger, "scrolled", collapsed));
            }
        }
    }

    // ── Clicks on the top bar ───────────────────────────────────────────

    pub fn on_hamburger_click(&self) {
        if !self.proxy_to_legacy(LegacyButton::Hamburger) {
            self.toggle_drawer();
        }
    }

    pub fn on_back_click(&self) {
        if self.proxy_to_legacy(LegacyButton::Back) {
            self.notify_buttons_changed();
        } else {
            self.handle_back_navigation();
        }
    }

    pub fn on_view_toggle_click(&self) {
        if self.proxy_to_legacy(LegacyButton::ViewToggle) {
            self.notify_buttons_changed();
        } else {
            self.toggle_view_mode();
        }
    }

    pub fn on_overlay_click(&self) {
        self.close_drawer();
    }

    /// A drawer entry was picked.
    pub fn select_category(&self, content_type: &str) {
        if !self.is_active() {
            return;
        }
        if let Err(err) = self.inner.deps.renderer.load_content(content_type) {
            log::warn!("top nav: {}, cannot open {}", err, content_type);
        }
        self.close_drawer();
    }

    /// In mirror mode, forward the click to the legacy button. Falls back to
    /// our own handling when the legacy button is gone.
    fn proxy_to_legacy(&self, button: LegacyButton) -> bool {
        if !self.is_active() || self.inner.config.mode != SyncMode::Mirror {
            return false;
        }
        match self.surface().click_legacy(button) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("top nav: {}, handling {:?} locally", err, button);
                false
            }
        }
    }

    // ── Bar ─────────────────────────────────────────────────────────────

    pub fn show(&self) {
        self.set_nav_visible(true);
    }

    pub fn hide(&self) {
        self.set_nav_visible(false);
    }

    fn set_nav_visible(&self, visible: bool) {
        if !self.is_active() {
            return;
        }
        let surface = self.surface();
        self.apply(surface.set_class(NavElement::TopNav, "show", visible));
        self.apply(surface.set_body_class("top-nav-visible", visible));
        self.inner.state.borrow_mut().nav_visible = visible;
    }

    pub fn set_title(&self, title: &str) {
        if !self.is_active() {
            return;
        }
        self.apply(self.surface().set_text(NavElement::Title, title));
        log::debug!("top nav: title = {}", title);
    }

    /// Reload the stored preference and redraw everything. The drawer closes.
    pub fn refresh(&self) {
        if !self.is_active() {
            return;
        }
        let view_mode = storage::load_view_mode(self.inner.deps.store.as_ref(), &self.inner.config.storage_key);
        {
            let mut state = self.inner.state.borrow_mut();
            state.view_mode = view_mode;
            state.menu_open = false;
        }
        self.render_drawer();
        self.update_back_button_visibility();
        self.render_view_mode();
        log::debug!("top nav: refreshed");
    }

    pub fn force_sync(&self) {
        match self.inner.config.mode {
            SyncMode::Independent => self.refresh(),
            SyncMode::Mirror => self.sync_from_legacy(),
        }
    }

    fn sync_from_legacy(&self) {
        if !self.is_active() {
            return;
        }
        let snapshot = LegacySnapshot::capture(self.surface());
        {
            let mut state = self.inner.state.borrow_mut();
            state.back_button_visible = snapshot.back_visible;
            if let Some(mode) = snapshot.view_mode() {
                state.view_mode = mode;
            }
        }
        self.apply(self.surface().set_visible(NavElement::BackButton, snapshot.back_visible));
        self.render_view_mode();
        log::debug!("top nav: synced from legacy buttons: {:?}", snapshot);
    }

    // ── Helpers ─────────────────────────────────────────────────────────

    fn surface(&self) -> &dyn NavSurface {
        self.inner.deps.surface.as_ref()
    }

    fn upgrade(weak: &Weak<Inner>) -> Option<NavBar> {
        weak.upgrade().map(|inner| NavBar { inner })
    }

    fn apply(&self, result: NavResult<()>) {
        if let Err(err) = result {
            log::warn!("top nav: {}", err);
        }
    }
}
