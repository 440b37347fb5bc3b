//! Resume page: tabbed sections, scroll-linked timeline, print/download.

mod section;
mod timeline;

use folio_core::resume::{LANGUAGE_DOTS_DELAY_MS, SKILLS_TAB};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::hooks::Generation;
use crate::components::icons as ic;
use crate::config::DOWNLOAD_UNAVAILABLE;
use crate::utils::{after, dom};

use section::ResumeSection;
use timeline::Timeline;

stylance::import_crate_style!(css, "src/components/resume/resume.module.css");

#[component]
pub fn ResumePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let resume = ctx.content.with_value(|c| c.resume.clone());

    let first_tab = resume.tabs.first().map(|t| t.id.clone()).unwrap_or_default();
    let active = RwSignal::new(first_tab);
    // Bumped on every tab click so the active section replays its entrance
    let activation = Generation::new();
    // Bumped shortly after the skills tab opens
    let dots = Generation::new();

    let select_tab = move |id: String| {
        let is_skills = id == SKILLS_TAB;
        active.set(id);
        activation.next();
        if is_skills {
            after(LANGUAGE_DOTS_DELAY_MS, move || {
                dots.next();
            });
        }
    };

    let tab_buttons = resume
        .tabs
        .iter()
        .map(|tab| {
            let id = tab.id.clone();
            let is_active = {
                let id = id.clone();
                move || active.with(|a| *a == id)
            };
            view! {
                <button
                    class="tab-btn"
                    class:active=is_active
                    data-tab=id.clone()
                    on:click=move |_| select_tab(id.clone())
                >
                    {tab.label.clone()}
                </button>
            }
        })
        .collect_view();

    let languages = resume.languages;
    let sections = resume
        .tabs
        .into_iter()
        .map(|tab| {
            let languages = if tab.id == SKILLS_TAB {
                languages.clone()
            } else {
                Vec::new()
            };
            view! {
                <ResumeSection
                    tab=tab
                    active=active
                    activation=activation
                    languages=languages
                    dots=dots
                />
            }
        })
        .collect_view();

    view! {
        <section class="section page">
            <div class=css::header>
                <h1 class="page-title">"Resume"</h1>
                <div class=css::actions>
                    <button id="print-resume" class="btn btn-outline" on:click=move |_| dom::print()>
                        <Icon icon=ic::PRINT />
                        " Print"
                    </button>
                    <button
                        id="download-resume"
                        class="btn btn-primary"
                        on:click=move |_| dom::alert(DOWNLOAD_UNAVAILABLE)
                    >
                        <Icon icon=ic::DOWNLOAD />
                        " Download PDF"
                    </button>
                </div>
            </div>

            <Timeline items=resume.timeline />

            <div class=css::tabs>{tab_buttons}</div>
            {sections}
        </section>
    }
}
