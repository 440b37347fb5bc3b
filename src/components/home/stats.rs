//! Statistic counters that count up once scrolled into view.

use folio_core::content::Stat;
use folio_core::counter::{CounterAnimation, CounterFrame};
use folio_core::reveal::START_THRESHOLD;
use leptos::html;
use leptos::prelude::*;

use super::css;
use crate::app::AppContext;
use crate::components::hooks::use_seen;

#[component]
pub fn Stats() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let stats = ctx.content.with_value(|c| c.stats.clone());

    view! {
        <div class=css::statsGrid>
            {stats.into_iter().map(|stat| view! { <StatCounter stat=stat /> }).collect_view()}
        </div>
    }
}

#[component]
fn StatCounter(stat: Stat) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let seen = use_seen(node, START_THRESHOLD);
    let shown = RwSignal::new(0u64);
    let target = stat.target;

    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        if !seen.get() {
            return false;
        }
        animate(CounterAnimation::new(target), shown);
        true
    });

    view! {
        <div node_ref=node class=css::stat>
            <span class=css::statNumber>{move || shown.get()}{stat.suffix}</span>
            <span class=css::statLabel>{stat.label}</span>
        </div>
    }
}

/// Renders one frame and requests the next until the counter is done.
fn animate(mut counter: CounterAnimation, shown: RwSignal<u64>) {
    match counter.next_frame() {
        CounterFrame::Running(value) => {
            if shown.try_set(value).is_some() {
                // View is gone
                return;
            }
            request_animation_frame(move || animate(counter, shown));
        }
        CounterFrame::Done(value) => {
            let _ = shown.try_set(value);
        }
    }
}
