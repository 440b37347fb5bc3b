//! Interactive timeline whose progress line follows the scroll position.

use folio_core::content::TimelineItem;
use folio_core::resume::{TimelineRect, timeline_progress};
use leptos::html;
use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::css;
use crate::components::reveal::Reveal;
use crate::utils::dom;

#[component]
pub fn Timeline(items: Vec<TimelineItem>) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let progress = RwSignal::new(0.0_f64);
    let (_, scroll_y) = use_window_scroll();

    Effect::new(move |_| {
        scroll_y.track();
        let Some(el) = node.get() else {
            return;
        };
        let Some(viewport_height) = dom::viewport_height() else {
            return;
        };
        let bounds = el.get_bounding_client_rect();
        let rect = TimelineRect {
            top: bounds.top(),
            height: bounds.height(),
        };
        if let Some(p) = timeline_progress(rect, viewport_height) {
            progress.set(p);
        }
    });

    if items.is_empty() {
        return ().into_any();
    }

    view! {
        <div node_ref=node class=format!("{} interactive-timeline", css::timeline)>
            <div
                class=css::timelineProgress
                style:height=move || format!("{}%", progress.get())
            ></div>
            {items
                .into_iter()
                .enumerate()
                .map(|(i, item)| view! {
                    <Reveal index=i class=css::timelineItem>
                        <span class=css::year>{item.year}</span>
                        <h3>{item.title}</h3>
                        <p>{item.body}</p>
                    </Reveal>
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
