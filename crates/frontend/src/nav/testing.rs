//! In-memory doubles for the controller's dependencies.

use super::controller::{NavBar, NavDeps};
use super::error::{NavError, NavResult};
use super::renderer::ContentRenderer;
use super::scheduler::Scheduler;
use super::storage::PreferenceStore;
use super::surface::{LegacyButton, NavElement, NavSurface};
use contracts::{NavConfig, ViewMode};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct FakeNode {
    pub classes: BTreeSet<String>,
    pub visible: Option<bool>,
    pub text: String,
    pub attributes: HashMap<String, String>,
}

#[derive(Debug, Clone, Default)]
pub struct FakeLegacy {
    pub visible: bool,
    pub text: String,
    pub clicks: usize,
}

#[derive(Default)]
pub struct FakeSurface {
    pub nodes: RefCell<HashMap<NavElement, FakeNode>>,
    pub body_classes: RefCell<BTreeSet<String>>,
    pub body_missing: Cell<bool>,
    pub main_screen: Cell<bool>,
    pub content_children: Cell<usize>,
    pub history_len: Cell<usize>,
    pub history_backs: Cell<usize>,
    pub legacy: RefCell<HashMap<LegacyButton, FakeLegacy>>,
}

impl FakeSurface {
    /// A page with every top bar element and an active, empty main screen.
    pub fn complete() -> Self {
        let surface = Self::default();
        for element in NavElement::all() {
            surface.nodes.borrow_mut().insert(element, FakeNode::default());
        }
        surface.main_screen.set(true);
        surface.history_len.set(1);
        surface
    }

    pub fn without(self, element: NavElement) -> Self {
        self.nodes.borrow_mut().remove(&element);
        self
    }

    pub fn node(&self, element: NavElement) -> FakeNode {
        self.nodes.borrow().get(&element).cloned().unwrap_or_default()
    }

    pub fn has(&self, element: NavElement, class: &str) -> bool {
        self.node(element).classes.contains(class)
    }

    pub fn body_has(&self, class: &str) -> bool {
        self.body_classes.borrow().contains(class)
    }

    pub fn add_legacy(&self, button: LegacyButton, visible: bool, text: &str) {
        self.legacy.borrow_mut().insert(
            button,
            FakeLegacy {
                visible,
                text: text.to_string(),
                clicks: 0,
            },
        );
    }

    pub fn legacy_clicks(&self, button: LegacyButton) -> usize {
        self.legacy.borrow().get(&button).map(|b| b.clicks).unwrap_or(0)
    }

    fn with_node<T>(&self, element: NavElement, f: impl FnOnce(&mut FakeNode) -> T) -> NavResult<T> {
        self.nodes
            .borrow_mut()
            .get_mut(&element)
            .map(f)
            .ok_or(NavError::MissingElement(element.id()))
    }

    fn with_legacy<T>(&self, button: LegacyButton, f: impl FnOnce(&mut FakeLegacy) -> T) -> NavResult<T> {
        self.legacy
            .borrow_mut()
            .get_mut(&button)
            .map(f)
            .ok_or(NavError::MissingElement(button.selector()))
    }
}

impl NavSurface for FakeSurface {
    fn contains(&self, element: NavElement) -> bool {
        self.nodes.borrow().contains_key(&element)
    }

    fn has_class(&self, element: NavElement, class: &str) -> NavResult<bool> {
        self.with_node(element, |node| node.classes.contains(class))
    }

    fn set_class(&self, element: NavElement, class: &str, enabled: bool) -> NavResult<()> {
        self.with_node(element, |node| {
            if enabled {
                node.classes.insert(class.to_string());
            } else {
                node.classes.remove(class);
            }
        })
    }

    fn set_visible(&self, element: NavElement, visible: bool) -> NavResult<()> {
        self.with_node(element, |node| node.visible = Some(visible))
    }

    fn set_text(&self, element: NavElement, text: &str) -> NavResult<()> {
        self.with_node(element, |node| node.text = text.to_string())
    }

    fn set_attribute(&self, element: NavElement, name: &str, value: &str) -> NavResult<()> {
        self.with_node(element, |node| {
            node.attributes.insert(name.to_string(), value.to_string());
        })
    }

    fn set_body_class(&self, class: &str, enabled: bool) -> NavResult<()> {
        if self.body_missing.get() {
            return Err(NavError::MissingElement("body"));
        }
        let mut classes = self.body_classes.borrow_mut();
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
        Ok(())
    }

    fn main_screen_active(&self) -> bool {
        self.main_screen.get()
    }

    fn content_child_count(&self) -> usize {
        self.content_children.get()
    }

    fn history_back(&self) -> bool {
        if self.history_len.get() > 1 {
            self.history_len.set(self.history_len.get() - 1);
            self.history_backs.set(self.history_backs.get() + 1);
            true
        } else {
            false
        }
    }

    fn click_legacy(&self, button: LegacyButton) -> NavResult<()> {
        self.with_legacy(button, |legacy| legacy.clicks += 1)
    }

    fn legacy_visible(&self, button: LegacyButton) -> NavResult<bool> {
        self.with_legacy(button, |legacy| legacy.visible)
    }

    fn legacy_text(&self, button: LegacyButton) -> NavResult<String> {
        self.with_legacy(button, |legacy| legacy.text.clone())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    pub values: RefCell<HashMap<String, String>>,
    pub broken: Cell<bool>,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> NavResult<Option<String>> {
        if self.broken.get() {
            return Err(NavError::StorageUnavailable("SecurityError".to_string()));
        }
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> NavResult<()> {
        if self.broken.get() {
            return Err(NavError::StorageUnavailable("QuotaExceededError".to_string()));
        }
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Records every call; answers `CollaboratorUnavailable` when switched off.
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: RefCell<Vec<String>>,
    pub missing: Cell<bool>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, api: &'static str, call: String) -> NavResult<()> {
        if self.missing.get() {
            return Err(NavError::CollaboratorUnavailable(api));
        }
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl ContentRenderer for RecordingRenderer {
    fn set_view_mode(&self, mode: ViewMode) -> NavResult<()> {
        self.record("ProductRenderer.setViewMode", format!("set_view_mode:{}", mode))
    }

    fn refresh_current_view(&self) -> NavResult<()> {
        self.record("ProductRenderer.refreshCurrentView", "refresh".to_string())
    }

    fn render_parent_category(&self) -> NavResult<()> {
        self.record("ProductRenderer.renderParentCategory", "parent".to_string())
    }

    fn load_content(&self, content_type: &str) -> NavResult<()> {
        self.record("AppInit.loadContent", format!("load:{}", content_type))
    }
}

/// Holds deferred tasks until the test runs them.
#[derive(Default)]
pub struct ManualScheduler {
    tasks: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.tasks.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    /// Run everything, including tasks scheduled by the tasks themselves.
    pub fn run_all(&self) {
        loop {
            let batch: Vec<_> = self.tasks.borrow_mut().drain(..).collect();
            if batch.is_empty() {
                break;
            }
            for (_, task) in batch {
                task();
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.tasks.borrow_mut().push((delay_ms, task));
    }
}

/// A controller wired to fakes, with the fakes kept at hand.
pub struct Harness {
    pub surface: Rc<FakeSurface>,
    pub store: Rc<MemoryStore>,
    pub renderer: Rc<RecordingRenderer>,
    pub scheduler: Rc<ManualScheduler>,
    pub nav: NavBar,
}

impl Harness {
    pub fn new(config: NavConfig) -> Self {
        Self::with(config, FakeSurface::complete(), MemoryStore::default())
    }

    pub fn with(config: NavConfig, surface: FakeSurface, store: MemoryStore) -> Self {
        let surface = Rc::new(surface);
        let store = Rc::new(store);
        let renderer = Rc::new(RecordingRenderer::default());
        let scheduler = Rc::new(ManualScheduler::default());
        let nav = NavBar::new(
            config,
            NavDeps {
                surface: surface.clone(),
                store: store.clone(),
                renderer: renderer.clone(),
                scheduler: scheduler.clone(),
            },
        );
        Self {
            surface,
            store,
            renderer,
            scheduler,
            nav,
        }
    }

    /// Build and initialize with default config.
    pub fn started() -> Self {
        let harness = Self::new(NavConfig::default());
        assert!(harness.nav.initialize());
        harness
    }
}
