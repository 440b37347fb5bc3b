//! Toast banner for [`AppContext`] notifications.

use folio_core::notification::NotificationKind;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/notification/notification.module.css");

fn kind_icon(kind: NotificationKind) -> icondata::Icon {
    match kind {
        NotificationKind::Info => ic::INFO,
        NotificationKind::Success => ic::SUCCESS,
        NotificationKind::Error => ic::ERROR,
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    move || {
        ctx.notifications.with(|center| {
            center.current().cloned().map(|n| {
                let id = n.id;
                let animation = if n.leaving {
                    "slideOutRight 0.3s ease forwards"
                } else {
                    "slideInRight 0.3s ease"
                };
                view! {
                    <div
                        class=format!("{} notification", css::toast)
                        role="status"
                        aria-live="polite"
                        style:background=n.kind.background()
                        style:animation=animation
                    >
                        <Icon icon=kind_icon(n.kind) />
                        <span class=css::message>{n.message}</span>
                        <button
                            class=css::close
                            aria-label="Dismiss notification"
                            on:click=move |_| ctx.dismiss(id)
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                }
            })
        })
    }
}
