//! web-sys implementations of the controller's dependencies.
//!
//! Nothing here caches DOM nodes: `window()` and the elements are looked up
//! on every call.

pub mod config;
pub mod events;
pub mod renderer;
pub mod scheduler;
pub mod storage;
pub mod surface;

use crate::nav::NavError;
use wasm_bindgen::JsValue;
use web_sys::{window, Document, Element};

pub use renderer::JsContentRenderer;
pub use scheduler::TimeoutScheduler;
pub use storage::LocalPreferenceStore;
pub use surface::DomSurface;

pub(crate) fn document() -> Option<Document> {
    window()?.document()
}

/// The element the renderer draws into: the outer wrapper when the page
/// has one.
pub(crate) fn content_container(document: &Document) -> Option<Element> {
    [".content-wrapper", "#content-container"]
        .into_iter()
        .find_map(|selector| document.query_selector(selector).ok().flatten())
}

/// The element holding the product listing itself. Its children decide the
/// back button; the wrapper around it always has at least one.
pub(crate) fn listing_container(document: &Document) -> Option<Element> {
    document.get_element_by_id("content-container")
}

pub(crate) fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

pub(crate) fn js_err(err: JsValue) -> NavError {
    NavError::Dom(js_message(&err))
}
