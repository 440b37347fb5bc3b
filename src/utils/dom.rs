//! DOM and Web API utility functions.
//!
//! Element lookups return `Option`; a missing element means the caller
//! does nothing.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use folio_core::nav::scroll_target;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Look up an element by id.
pub fn element_by_id(id: &str) -> Option<Element> {
    window()?.document()?.get_element_by_id(id)
}

/// Rendered height of the element with `id`, if present.
pub fn element_height(id: &str) -> Option<f64> {
    let element = element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
    Some(f64::from(element.offset_height()))
}

/// Current vertical scroll position of the page.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Viewport height in CSS pixels.
pub fn viewport_height() -> Option<f64> {
    window()?.inner_height().ok()?.as_f64()
}

/// Smoothly scroll so the element with `id` sits just below the navbar
/// (`nav_id`).
///
/// Returns `false` if the target does not exist.
pub fn scroll_to_anchor(id: &str, nav_id: &str) -> bool {
    let Some(window) = window() else {
        return false;
    };
    let Some(target) = element_by_id(id) else {
        return false;
    };

    let nav_height = element_height(nav_id).unwrap_or(0.0);
    let top = scroll_target(target.get_bounding_client_rect().top(), scroll_y(), nav_height);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Open the browser print dialog.
pub fn print() {
    if let Some(window) = window() {
        let _ = window.print();
    }
}

/// Show a blocking alert.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}
