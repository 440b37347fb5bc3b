//! Fade-and-rise entrance for content blocks as they scroll into view.

use folio_core::reveal::{THRESHOLD, transition};
use leptos::html;
use leptos::prelude::*;

use super::hooks::use_seen;

/// Wraps `children` in a block that starts hidden and slides into place the
/// first time it is scrolled into view. `index` staggers the transition.
#[component]
pub fn Reveal(
    #[prop(default = 0)] index: usize,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let seen = use_seen(node, THRESHOLD);
    let transition = transition(index);

    let style = move || {
        let (opacity, offset) = if seen.get() { (1, 0) } else { (0, 30) };
        format!(
            "opacity: {opacity}; transform: translateY({offset}px); transition: {transition};"
        )
    };

    view! {
        <div node_ref=node id=id class=class style=style>
            {children()}
        </div>
    }
}
