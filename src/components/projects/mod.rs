//! Projects page: category filter, grid/list toggle, and hover tilt.

mod card;

use folio_core::filter::{self, CARD_EXIT_MS, CARD_STAGGER_MS, Filter, Visibility};
use folio_core::layout::ProjectLayout;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::filter_bar::FilterBar;
use crate::components::hooks::Generation;
use crate::components::icons as ic;
use crate::utils::after;

use card::ProjectCard;
pub use card::CardPhase;

stylance::import_crate_style!(css, "src/components/projects/projects.module.css");

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let projects = ctx.content.with_value(|c| c.projects.clone());
    let categories = filter::categories(projects.iter().map(|p| p.categories.as_slice()));

    let active = RwSignal::new(Filter::All);
    let layout = RwSignal::new(ProjectLayout::default());
    let generation = Generation::new();
    let phases: Vec<RwSignal<CardPhase>> = projects
        .iter()
        .map(|_| RwSignal::new(CardPhase::Visible))
        .collect();

    let apply_filter = {
        let phases = phases.clone();
        let tags: Vec<Vec<String>> = projects.iter().map(|p| p.categories.clone()).collect();
        move |next: Filter| {
            let plan = filter::plan(&next, &tags, CARD_STAGGER_MS);
            active.set(next);
            let generation_id = generation.next();

            for (phase, visibility) in phases.iter().copied().zip(plan) {
                match visibility {
                    Visibility::Enter { delay_ms } => {
                        phase.set(CardPhase::Entering);
                        after(delay_ms, move || {
                            if generation.is_current(generation_id) {
                                let _ = phase.try_set(CardPhase::Visible);
                            }
                        });
                    }
                    Visibility::Leave => {
                        phase.set(CardPhase::Leaving);
                        after(CARD_EXIT_MS, move || {
                            if generation.is_current(generation_id) {
                                let _ = phase.try_set(CardPhase::Hidden);
                            }
                        });
                    }
                }
            }
        }
    };
    let on_select = Callback::new(apply_filter);

    let grid_style = move || {
        format!(
            "grid-template-columns: {};",
            layout.get().grid_template_columns()
        )
    };

    let view_button = move |target: ProjectLayout| {
        move || {
            if layout.get() == target {
                format!("{} {}", css::viewButton, css::viewButtonActive)
            } else {
                css::viewButton.to_string()
            }
        }
    };

    view! {
        <section class="section page">
            <h1 class="page-title">"Projects"</h1>
            <div class=css::toolbar>
                <FilterBar categories=categories active=active on_select=on_select />
                <div class=css::viewToggle>
                    <button
                        class=view_button(ProjectLayout::Grid)
                        data-view="grid"
                        title="Grid view"
                        on:click=move |_| layout.set(ProjectLayout::Grid)
                    >
                        <Icon icon=ic::GRID />
                    </button>
                    <button
                        class=view_button(ProjectLayout::List)
                        data-view="list"
                        title="List view"
                        on:click=move |_| layout.set(ProjectLayout::List)
                    >
                        <Icon icon=ic::LIST />
                    </button>
                </div>
            </div>

            <div id="projects-grid" class=css::grid style=grid_style>
                {projects
                    .into_iter()
                    .zip(phases)
                    .map(|(project, phase)| view! {
                        <ProjectCard project=project phase=phase layout=layout />
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
