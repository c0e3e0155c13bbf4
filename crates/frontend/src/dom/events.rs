//! Wires DOM events to the controller.
//!
//! Listeners are registered once per page and live as long as it does.

use super::{document, js_err};
use crate::nav::scroll::ScrollSample;
use crate::nav::surface::NavElement;
use crate::nav::{NavBar, NavError, NavResult};
use contracts::shared::events::{CONTENT_CHANGED_EVENT, CONTENT_READY_EVENT};
use contracts::ContentReadyDetail;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, AddEventListenerOptions, CustomEvent, Element, Event, EventTarget};

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> NavResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

/// Click handler on a top bar element; a missing element is skipped.
fn on_click<F>(element: NavElement, mut handler: F)
where
    F: FnMut() + 'static,
{
    let Some(target) = document().and_then(|doc| doc.get_element_by_id(element.id())) else {
        log::warn!("top nav: #{} not found, click not bound", element.id());
        return;
    };
    let bound = listen(&target, "click", move |event: Event| {
        event.prevent_default();
        handler();
    });
    if let Err(err) = bound {
        log::warn!("top nav: {}", err);
    }
}

/// Decode the `{contentType}` payload of a content-ready notification.
pub fn decode_content_ready(detail: JsValue) -> NavResult<ContentReadyDetail> {
    serde_wasm_bindgen::from_value(detail).map_err(|err| NavError::InvalidPayload(err.to_string()))
}

/// Attach every listener the bar needs.
pub fn bind(nav: &NavBar) {
    if !nav.is_active() {
        return;
    }

    let n = nav.clone();
    on_click(NavElement::Hamburger, move || n.on_hamburger_click());
    let n = nav.clone();
    on_click(NavElement::BackButton, move || n.on_back_click());
    let n = nav.clone();
    on_click(NavElement::ViewToggle, move || n.on_view_toggle_click());
    let n = nav.clone();
    on_click(NavElement::Overlay, move || n.on_overlay_click());
    bind_drawer_entries(nav);

    if nav.config().listen_document_events {
        bind_document_events(nav);
    }
    bind_scroll(nav);
}

/// Drawer entries carry `data-content-type`; one delegated listener serves all.
fn bind_drawer_entries(nav: &NavBar) {
    let Some(drawer) = document().and_then(|doc| doc.get_element_by_id(NavElement::Drawer.id())) else {
        return;
    };
    let nav = nav.clone();
    let bound = listen(&drawer, "click", move |event: Event| {
        let content_type = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("[data-content-type]").ok().flatten())
            .and_then(|entry| entry.get_attribute("data-content-type"));
        if let Some(content_type) = content_type {
            nav.select_category(&content_type);
        }
    });
    if let Err(err) = bound {
        log::warn!("top nav: {}", err);
    }
}

fn bind_document_events(nav: &NavBar) {
    let Some(doc) = document() else {
        return;
    };

    let ready = nav.clone();
    let result = listen(&doc, CONTENT_READY_EVENT, move |event: Event| {
        let detail = event
            .dyn_ref::<CustomEvent>()
            .map(|custom| custom.detail())
            .unwrap_or(JsValue::UNDEFINED);
        match decode_content_ready(detail) {
            Ok(detail) => ready.on_content_ready(&detail.content_type),
            Err(err) => {
                // older pages fire the event without a payload
                log::debug!("top nav: {} on {}", err, CONTENT_READY_EVENT);
                ready.show();
                ready.update_back_button_visibility();
            }
        }
    });
    if let Err(err) = result {
        log::warn!("top nav: {}", err);
    }

    let changed = nav.clone();
    let result = listen(&doc, CONTENT_CHANGED_EVENT, move |_| changed.on_content_changed());
    if let Err(err) = result {
        log::warn!("top nav: {}", err);
    }
}

fn bind_scroll(nav: &NavBar) {
    let Some(win) = window() else {
        return;
    };
    let nav = nav.clone();
    let closure = Closure::wrap(Box::new(move |_event: Event| {
        let Some(win) = window() else {
            return;
        };
        let dimension = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        nav.on_scroll(ScrollSample {
            offset: win.page_y_offset().unwrap_or(0.0),
            viewport_width: dimension(win.inner_width()),
            viewport_height: dimension(win.inner_height()),
        });
    }) as Box<dyn FnMut(_)>);

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let bound = win.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &options,
    );
    match bound {
        Ok(()) => closure.forget(),
        Err(err) => log::warn!("top nav: {}", js_err(err)),
    }
}
