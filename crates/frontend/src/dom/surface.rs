use super::{document, js_err, listing_container};
use crate::nav::surface::{LegacyButton, NavElement, NavSurface};
use crate::nav::{NavError, NavResult};
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement};

/// The live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomSurface;

impl DomSurface {
    fn element(&self, element: NavElement) -> NavResult<Element> {
        document()
            .and_then(|doc| doc.get_element_by_id(element.id()))
            .ok_or(NavError::MissingElement(element.id()))
    }

    fn html_element(&self, element: NavElement) -> NavResult<HtmlElement> {
        self.element(element)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| NavError::MissingElement(element.id()))
    }

    fn legacy(&self, button: LegacyButton) -> NavResult<HtmlElement> {
        document()
            .and_then(|doc| doc.query_selector(button.selector()).ok().flatten())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(NavError::MissingElement(button.selector()))
    }
}

impl NavSurface for DomSurface {
    fn contains(&self, element: NavElement) -> bool {
        self.element(element).is_ok()
    }

    fn has_class(&self, element: NavElement, class: &str) -> NavResult<bool> {
        Ok(self.element(element)?.class_list().contains(class))
    }

    fn set_class(&self, element: NavElement, class: &str, enabled: bool) -> NavResult<()> {
        self.element(element)?
            .class_list()
            .toggle_with_force(class, enabled)
            .map(|_| ())
            .map_err(js_err)
    }

    fn set_visible(&self, element: NavElement, visible: bool) -> NavResult<()> {
        let display = if visible { "flex" } else { "none" };
        self.html_element(element)?
            .style()
            .set_property("display", display)
            .map_err(js_err)
    }

    fn set_text(&self, element: NavElement, text: &str) -> NavResult<()> {
        self.element(element)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_attribute(&self, element: NavElement, name: &str, value: &str) -> NavResult<()> {
        self.element(element)?.set_attribute(name, value).map_err(js_err)
    }

    fn set_body_class(&self, class: &str, enabled: bool) -> NavResult<()> {
        document()
            .and_then(|doc| doc.body())
            .ok_or(NavError::MissingElement("body"))?
            .class_list()
            .toggle_with_force(class, enabled)
            .map(|_| ())
            .map_err(js_err)
    }

    fn main_screen_active(&self) -> bool {
        document()
            .and_then(|doc| doc.query_selector(".screen:not(.screen-hidden)").ok().flatten())
            .map(|screen| screen.class_list().contains("main-content-screen"))
            .unwrap_or(false)
    }

    fn content_child_count(&self) -> usize {
        document()
            .and_then(|doc| listing_container(&doc))
            .map(|container| container.child_element_count() as usize)
            .unwrap_or(0)
    }

    fn history_back(&self) -> bool {
        let Some(history) = window().and_then(|w| w.history().ok()) else {
            return false;
        };
        if history.length().unwrap_or(0) > 1 {
            history.back().is_ok()
        } else {
            false
        }
    }

    fn click_legacy(&self, button: LegacyButton) -> NavResult<()> {
        self.legacy(button)?.click();
        Ok(())
    }

    fn legacy_visible(&self, button: LegacyButton) -> NavResult<bool> {
        let el = self.legacy(button)?;
        if el.offset_parent().is_none() {
            return Ok(false);
        }
        let display = window()
            .and_then(|w| w.get_computed_style(&el).ok().flatten())
            .and_then(|style| style.get_property_value("display").ok())
            .unwrap_or_default();
        Ok(display != "none")
    }

    fn legacy_text(&self, button: LegacyButton) -> NavResult<String> {
        Ok(self.legacy(button)?.text_content().unwrap_or_default())
    }
}
