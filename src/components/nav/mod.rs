//! Fixed navigation bar.
//!
//! Compacts itself once the page scrolls, and collapses into a toggle
//! menu on small screens.

use folio_core::nav::{MenuState, is_scrolled};
use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::{on_click_outside, use_window_scroll};

use crate::components::icons as ic;
use crate::components::router::RouteContext;
use crate::config::{APP_NAME, NAV_ELEMENT_ID};
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/nav/nav.module.css");

#[component]
pub fn Navbar() -> impl IntoView {
    let route = use_context::<RouteContext>()
        .expect("RouteContext must be provided by AppRouter")
        .0;

    let nav_ref = NodeRef::<html::Nav>::new();
    let menu = RwSignal::new(MenuState::default());
    let (_, scroll_y) = use_window_scroll();

    // Clicking anywhere outside the bar closes the mobile menu
    let _ = on_click_outside(nav_ref, move |_| menu.update(|m| m.close()));

    let bar_class = move || {
        if is_scrolled(scroll_y.get()) {
            format!("{} {}", css::navbar, css::scrolled)
        } else {
            css::navbar.to_string()
        }
    };

    let menu_class = move || {
        if menu.with(|m| m.is_open()) {
            format!("{} {}", css::menu, css::menuOpen)
        } else {
            css::menu.to_string()
        }
    };

    let links = AppRoute::ALL
        .into_iter()
        .map(|page| {
            let link_class = move || {
                if route.get() == page {
                    format!("{} {}", css::link, css::linkActive)
                } else {
                    css::link.to_string()
                }
            };
            view! {
                <li>
                    <a
                        href=page.to_hash()
                        class=link_class
                        on:click=move |_| menu.update(|m| m.close())
                    >
                        {page.label()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav node_ref=nav_ref id=NAV_ELEMENT_ID class=bar_class>
            <div class=css::inner>
                <a href=AppRoute::Home.to_hash() class=css::brand>{APP_NAME}</a>

                <button
                    class=css::toggle
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu.with(|m| m.aria_expanded())
                    on:click=move |_| menu.update(|m| m.toggle())
                >
                    {move || if menu.with(|m| m.is_open()) {
                        view! { <Icon icon=ic::CLOSE /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MENU /> }.into_any()
                    }}
                </button>

                <ul class=menu_class>{links}</ul>
            </div>
        </nav>
    }
}
