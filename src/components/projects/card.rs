//! A single project card.

use folio_core::content::Project;
use folio_core::layout::ProjectLayout;
use folio_core::tilt::Tilt;
use leptos::prelude::*;
use leptos_use::use_media_query;
use wasm_bindgen::JsCast;

use super::css;
use crate::config::HOVER_CAPABLE_QUERY;

/// Where a card is in its filter transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardPhase {
    /// Shown and settled.
    Visible,
    /// Laid out but still transparent, waiting for its stagger slot.
    Entering,
    /// Fading out after being filtered away.
    Leaving,
    /// Removed from layout.
    Hidden,
}

impl CardPhase {
    /// Inline style for the phase.
    pub fn style(self) -> &'static str {
        match self {
            Self::Visible => "opacity: 1; transform: translateY(0) scale(1);",
            Self::Entering => "opacity: 0; transform: translateY(30px) scale(0.95);",
            Self::Leaving => "opacity: 0; transform: translateY(-10px) scale(0.95);",
            Self::Hidden => "display: none;",
        }
    }
}

#[component]
pub fn ProjectCard(
    project: Project,
    phase: RwSignal<CardPhase>,
    #[prop(into)] layout: Signal<ProjectLayout>,
) -> impl IntoView {
    let hover_capable = use_media_query(HOVER_CAPABLE_QUERY);
    let tilt = RwSignal::new(Tilt::REST);
    let featured = project.featured;

    let on_move = move |ev: leptos::ev::MouseEvent| {
        if !hover_capable.get_untracked() {
            return;
        }
        let Some(card) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = card.get_bounding_client_rect();
        let x = f64::from(ev.client_x()) - rect.left();
        let y = f64::from(ev.client_y()) - rect.top();
        tilt.set(Tilt::from_pointer(x, y, rect.width(), rect.height()));
    };
    let on_leave = move |_: leptos::ev::MouseEvent| tilt.set(Tilt::REST);

    let card_style = move || {
        format!(
            "grid-column: {}; {}",
            layout.get().grid_column(featured),
            phase.get().style()
        )
    };
    let card_class = if featured {
        format!("{} {}", css::card, css::featured)
    } else {
        css::card.to_string()
    };
    let categories = project.categories.join(" ");

    view! {
        <article
            class=card_class
            data-categories=categories
            style=card_style
            on:mousemove=on_move
            on:mouseleave=on_leave
        >
            <div class=css::visual>
                <span class=css::icon style:transform=move || tilt.get().transform()>
                    {project.icon}
                </span>
            </div>
            <div class=css::body>
                <h3>{project.title}</h3>
                <p>{project.summary}</p>
                <ul class=css::tags>
                    {project.tags.into_iter().map(|tag| view! { <li>{tag}</li> }).collect_view()}
                </ul>
                {project.url.map(|url| view! {
                    <a href=url class=css::link target="_blank" rel="noopener noreferrer">
                        "View project"
                    </a>
                })}
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_hidden_leaves_layout() {
        assert!(CardPhase::Hidden.style().contains("display: none"));
        for phase in [CardPhase::Visible, CardPhase::Entering, CardPhase::Leaving] {
            assert!(!phase.style().contains("display"));
        }
    }
}
