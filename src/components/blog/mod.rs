//! Blog index with category filtering.

use folio_core::content::Post;
use folio_core::filter::{self, Filter, POST_ENTER_MS};
use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::filter_bar::FilterBar;
use crate::components::hooks::Generation;
use crate::components::projects::CardPhase;
use crate::utils::after;

stylance::import_crate_style!(css, "src/components/blog/blog.module.css");

#[component]
pub fn BlogPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let posts = ctx.content.with_value(|c| c.posts.clone());
    let categories = filter::categories(posts.iter().map(Post::categories));

    let active = RwSignal::new(Filter::All);
    let generation = Generation::new();
    let phases: Vec<RwSignal<CardPhase>> = posts
        .iter()
        .map(|_| RwSignal::new(CardPhase::Visible))
        .collect();

    let on_select = Callback::new({
        let phases = phases.clone();
        let tags: Vec<Vec<String>> = posts.iter().map(|p| p.categories().to_vec()).collect();
        move |next: Filter| {
            // Posts all enter together; no per-item stagger
            let plan = filter::plan(&next, &tags, 0);
            active.set(next);
            let generation_id = generation.next();

            for (phase, visibility) in phases.iter().copied().zip(plan) {
                if visibility.is_shown() {
                    phase.set(CardPhase::Entering);
                    after(POST_ENTER_MS, move || {
                        if generation.is_current(generation_id) {
                            let _ = phase.try_set(CardPhase::Visible);
                        }
                    });
                } else {
                    phase.set(CardPhase::Hidden);
                }
            }
        }
    });

    view! {
        <section class="section page">
            <h1 class="page-title">"Blog"</h1>
            <FilterBar categories=categories active=active on_select=on_select />
            <div class=css::posts>
                {posts
                    .into_iter()
                    .zip(phases)
                    .map(|(post, phase)| {
                        let category = post.category.clone();
                        view! {
                        <article
                            class=css::post
                            data-category=category
                            style=move || phase.get().style()
                        >
                            <span class=css::meta>{post.date}" · "{post.category}</span>
                            <h2>{post.title}</h2>
                            <p>{post.excerpt}</p>
                        </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
