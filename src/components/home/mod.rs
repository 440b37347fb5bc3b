//! Landing page.

mod hero;
mod skills;
mod stats;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::reveal::Reveal;
use crate::models::AppRoute;

pub use hero::Hero;
use skills::Skills;
use stats::Stats;

stylance::import_crate_style!(css, "src/components/home/home.module.css");

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (about, featured) = ctx.content.with_value(|c| {
        (
            c.about.clone(),
            c.featured_projects().cloned().collect::<Vec<_>>(),
        )
    });

    view! {
        <Hero />
        <Stats />

        <Reveal id="about" class="section">
            <h2 class="section-title">"About"</h2>
            <div class=css::aboutGrid>
                {about.into_iter().enumerate().map(|(i, card)| view! {
                    <Reveal index=i class=css::aboutCard>
                        <h3>{card.title}</h3>
                        <p>{card.body}</p>
                    </Reveal>
                }).collect_view()}
            </div>
        </Reveal>

        <Skills />

        <Reveal class="section">
            <h2 class="section-title">"Featured Work"</h2>
            <div class=css::featuredGrid>
                {featured.into_iter().enumerate().map(|(i, project)| view! {
                    <Reveal index=i class=css::featuredCard>
                        <span class=css::featuredIcon>{project.icon}</span>
                        <h3>{project.title}</h3>
                        <p>{project.summary}</p>
                    </Reveal>
                }).collect_view()}
            </div>
            <a href=AppRoute::Projects.to_hash() class="btn btn-outline">"All projects"</a>
        </Reveal>
    }
}
