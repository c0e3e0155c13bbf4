//! Markup for the top bar and the drawer.
//!
//! Only mounted when the host page does not ship its own. Elements carry the
//! ids the controller looks up; behaviour is attached afterwards by
//! `crate::dom::events::bind`, so nothing here is reactive.

use crate::nav::surface::NavElement;
use contracts::shared::menu_catalog::MENU_SECTIONS;
use contracts::ViewMode;
use leptos::prelude::*;

/// Fixed top bar: hamburger, back, title and view toggle.
#[component]
pub fn TopNav(#[prop(into)] title: String) -> impl IntoView {
    let mode = ViewMode::default();

    view! {
        <nav id={NavElement::TopNav.id()} class="top-nav">
            <button
                id={NavElement::Hamburger.id()}
                class="top-nav__btn top-nav__hamburger"
                aria-label="Abrir menú"
            >
                "☰"
            </button>

            <button
                id={NavElement::BackButton.id()}
                class="top-nav__btn top-nav__back"
                aria-label="Volver"
                style="display: none"
            >
                "←"
            </button>

            <h1 id={NavElement::Title.id()} class="top-nav__title">{title}</h1>

            <button
                id={NavElement::ViewToggle.id()}
                class="top-nav__btn top-nav__view-toggle"
                aria-label={mode.toggle_label()}
            >
                {mode.toggle_icon()}
            </button>
        </nav>
    }
}

/// Slide-out menu with one entry per menu section, plus its overlay.
#[component]
pub fn Drawer() -> impl IntoView {
    view! {
        <div id={NavElement::Overlay.id()} class="drawer-overlay"></div>
        <aside id={NavElement::Drawer.id()} class="drawer-menu" aria-label="Menú">
            <ul class="drawer-menu__list">
                {MENU_SECTIONS
                    .iter()
                    .map(|(key, title)| {
                        view! {
                            <li class="drawer-menu__item" data-content-type={*key}>
                                {*title}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}

#[component]
pub fn TopNavShell(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <TopNav title=title />
        <Drawer />
    }
}
