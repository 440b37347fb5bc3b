//! Application router component.
//!
//! Handles URL-based routing with hash history so the site works from any
//! static host. Uses native hashchange events instead of leptos_router.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the page is derived from `#/page`
//! - **Navbar never re-renders on navigation**: only the page body swaps
//! - **In-page anchors** (`#about`) do not change the page
//! - **hashchange events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::blog::BlogPage;
use crate::components::contact::ContactPage;
use crate::components::home::HomePage;
use crate::components::nav::Navbar;
use crate::components::projects::ProjectsPage;
use crate::components::resume::ResumePage;
use crate::models::AppRoute;

/// Current page, readable from any component without prop drilling.
#[derive(Clone, Copy)]
pub struct RouteContext(pub ReadSignal<AppRoute>);

/// Main application router.
///
/// - `#/` → Home
/// - `#/projects`, `#/resume`, `#/blog`, `#/contact` → their pages
#[component]
pub fn AppRouter() -> impl IntoView {
    let (route, set_route) = signal(AppRoute::current().unwrap_or_default());
    provide_context(RouteContext(route));

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            if let Some(next) = AppRoute::current() {
                set_route.set(next);
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_route;

    view! {
        <Navbar />
        <main>
            {move || match route.get() {
                AppRoute::Home => view! { <HomePage /> }.into_any(),
                AppRoute::Projects => view! { <ProjectsPage /> }.into_any(),
                AppRoute::Resume => view! { <ResumePage /> }.into_any(),
                AppRoute::Blog => view! { <BlogPage /> }.into_any(),
                AppRoute::Contact => view! { <ContactPage /> }.into_any(),
            }}
        </main>
    }
}
