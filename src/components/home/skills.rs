//! Skill groups with progress bars that fill once visible.

use folio_core::content::{Skill, SkillGroup};
use folio_core::reveal::{SKILL_FILL_DELAY_MS, START_THRESHOLD, skill_width};
use leptos::html;
use leptos::prelude::*;

use super::css;
use crate::app::AppContext;
use crate::components::hooks::use_seen;
use crate::components::reveal::Reveal;
use crate::utils::after;

#[component]
pub fn Skills() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let groups = ctx.content.with_value(|c| c.skills.clone());

    view! {
        <Reveal id="skills" class="section">
            <h2 class="section-title">"Skills"</h2>
            <div class=css::skillsGrid>
                {groups.into_iter().enumerate().map(|(i, group)| view! {
                    <SkillCategory group=group index=i />
                }).collect_view()}
            </div>
        </Reveal>
    }
}

#[component]
fn SkillCategory(group: SkillGroup, index: usize) -> impl IntoView {
    view! {
        <Reveal index=index class=css::skillGroup>
            <h3>{group.name}</h3>
            {group.items.into_iter().map(|skill| view! { <SkillBar skill=skill /> }).collect_view()}
        </Reveal>
    }
}

#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let seen = use_seen(node, START_THRESHOLD);
    let width = RwSignal::new(String::from("0%"));
    let level = skill.level;

    Effect::new(move |filled: Option<bool>| {
        if filled == Some(true) {
            return true;
        }
        if !seen.get() {
            return false;
        }
        after(SKILL_FILL_DELAY_MS, move || {
            let _ = width.try_set(skill_width(level));
        });
        true
    });

    view! {
        <div node_ref=node class=css::skillItem>
            <div class=css::skillHeader>
                <span>{skill.name}</span>
                <span>{format!("{}%", level.min(100))}</span>
            </div>
            <div class=css::skillTrack>
                <div class=css::skillProgress style:width=move || width.get()></div>
            </div>
        </div>
    }
}
