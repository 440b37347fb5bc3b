//! Row of category filter buttons. Exactly one is active.

use folio_core::filter::Filter;
use leptos::prelude::*;

/// Filter buttons for `categories`, plus a leading "All".
#[component]
pub fn FilterBar(
    categories: Vec<String>,
    #[prop(into)] active: Signal<Filter>,
    on_select: Callback<Filter>,
) -> impl IntoView {
    let buttons = std::iter::once(Filter::All)
        .chain(categories.into_iter().map(Filter::Category))
        .map(|filter| {
            let label = match &filter {
                Filter::All => "All".to_string(),
                Filter::Category(c) => c.clone(),
            };
            let value = filter.value().to_string();
            let is_active = {
                let filter = filter.clone();
                move || active.with(|a| *a == filter)
            };
            view! {
                <button
                    class="filter-btn"
                    class:active=is_active
                    data-filter=value
                    on:click=move |_| on_select.run(filter.clone())
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! { <div class="filter-bar">{buttons}</div> }
}
