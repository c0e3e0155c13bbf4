//! Calls into the page's rendering scripts (`window.ProductRenderer`,
//! `window.AppInit`). Either may be missing; that is reported as
//! [`NavError::CollaboratorUnavailable`].

use super::{content_container, document, js_err};
use crate::nav::renderer::ContentRenderer;
use crate::nav::{NavError, NavResult};
use contracts::ViewMode;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

const PRODUCT_RENDERER: &str = "ProductRenderer";
const APP_INIT: &str = "AppInit";

#[derive(Debug, Clone, Copy, Default)]
pub struct JsContentRenderer;

/// `window[object][method]`, if both exist and the latter is callable.
fn lookup(object: &str, method: &str) -> Option<(JsValue, Function)> {
    let window = window()?;
    let target = Reflect::get(&window, &JsValue::from_str(object)).ok()?;
    if target.is_undefined() || target.is_null() {
        return None;
    }
    let function = Reflect::get(&target, &JsValue::from_str(method))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    Some((target, function))
}

fn call(object: &str, method: &str, api: &'static str, args: &[JsValue]) -> NavResult<()> {
    let (target, function) = lookup(object, method).ok_or(NavError::CollaboratorUnavailable(api))?;
    let args: Array = args.iter().collect();
    function.apply(&target, &args).map(|_| ()).map_err(js_err)
}

fn container() -> NavResult<JsValue> {
    document()
        .and_then(|doc| content_container(&doc))
        .map(JsValue::from)
        .ok_or(NavError::MissingElement("content-container"))
}

fn unavailable(result: &NavResult<()>) -> bool {
    matches!(result, Err(NavError::CollaboratorUnavailable(_)))
}

impl ContentRenderer for JsContentRenderer {
    fn set_view_mode(&self, mode: ViewMode) -> NavResult<()> {
        let result = call(
            PRODUCT_RENDERER,
            "setViewMode",
            "ProductRenderer.setViewMode",
            &[JsValue::from_str(mode.code())],
        );
        if unavailable(&result) {
            return call(PRODUCT_RENDERER, "toggleViewMode", "ProductRenderer.toggleViewMode", &[]);
        }
        result
    }

    fn refresh_current_view(&self) -> NavResult<()> {
        if lookup(PRODUCT_RENDERER, "refreshCurrentView").is_none() {
            return Err(NavError::CollaboratorUnavailable("ProductRenderer.refreshCurrentView"));
        }
        call(
            PRODUCT_RENDERER,
            "refreshCurrentView",
            "ProductRenderer.refreshCurrentView",
            &[container()?],
        )
    }

    fn render_parent_category(&self) -> NavResult<()> {
        let container = container()?;
        let result = call(
            PRODUCT_RENDERER,
            "renderParentCategory",
            "ProductRenderer.renderParentCategory",
            std::slice::from_ref(&container),
        );
        if unavailable(&result) {
            return call(PRODUCT_RENDERER, "renderLicores", "ProductRenderer.renderLicores", &[container]);
        }
        result
    }

    fn load_content(&self, content_type: &str) -> NavResult<()> {
        call(APP_INIT, "loadContent", "AppInit.loadContent", &[JsValue::from_str(content_type)])
    }
}
