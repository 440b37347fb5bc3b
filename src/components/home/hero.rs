//! Hero banner with the typing effect.

use folio_core::TypingAnimator;
use folio_core::nav::anchor_target;
use leptos::logging::warn;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::NAV_ELEMENT_ID;
use crate::models::AppRoute;
use crate::utils::dom::scroll_to_anchor;
use crate::utils::{BrowserScheduler, SignalSink};

use super::css;

/// Greeting, name, and a line that types and deletes the configured phrases.
///
/// The animation belongs to this view: leaving the page disposes the
/// animator, which clears its pending timeout.
#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (owner, hero) = ctx.content.with_value(|c| (c.owner.clone(), c.hero.clone()));

    let typed = RwSignal::new(String::new());
    let animated = match TypingAnimator::with_phrases(
        hero.phrases,
        hero.speeds,
        SignalSink(typed),
        BrowserScheduler,
    ) {
        Ok(animator) => {
            animator.start();
            let animator = StoredValue::new_local(animator);
            on_cleanup(move || {
                animator.try_with_value(|a| a.stop());
            });
            true
        }
        Err(e) => {
            warn!("hero typing disabled: {e}");
            false
        }
    };

    let on_anchor = move |ev: leptos::ev::MouseEvent| {
        let href = event_target_attr(&ev, "href");
        if let Some(id) = href.as_deref().and_then(anchor_target) {
            ev.prevent_default();
            scroll_to_anchor(id, NAV_ELEMENT_ID);
        }
    };

    view! {
        <section class=css::hero>
            <p class=css::greeting>{hero.greeting}</p>
            <h1 class=css::name>{owner.name}</h1>
            <p class=css::typingLine>
                {if animated {
                    view! {
                        <span id="typing-text">{move || typed.get()}</span>
                        <span class=css::caret>"|"</span>
                    }
                    .into_any()
                } else {
                    view! { <span>{owner.tagline.clone()}</span> }.into_any()
                }}
            </p>
            <div class=css::heroActions>
                <a href="#about" class="btn btn-primary" on:click=on_anchor>"About me"</a>
                <a href=AppRoute::Contact.to_hash() class="btn btn-outline">"Get in touch"</a>
            </div>
        </section>
    }
}

/// Attribute of the element the handler is attached to.
fn event_target_attr(ev: &leptos::ev::MouseEvent, name: &str) -> Option<String> {
    use wasm_bindgen::JsCast;
    ev.current_target()?
        .dyn_into::<web_sys::Element>()
        .ok()?
        .get_attribute(name)
}
