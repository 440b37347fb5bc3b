//! One resume tab's content. Every activation replays the card stagger and
//! restarts the skill bar fills.

use folio_core::content::{Language, ResumeEntry, ResumeTab, Skill};
use folio_core::resume::{bar_animation, card_delay_ms, language_dot_delay_ms, section_matches};
use leptos::prelude::*;

use super::css;
use crate::components::hooks::Generation;
use crate::utils::after;

const CARD_SHOWN: &str = "opacity: 1; transform: translateY(0); \
                          transition: opacity 0.4s ease, transform 0.4s ease;";
const CARD_HIDDEN: &str = "opacity: 0; transform: translateY(20px);";

#[component]
pub fn ResumeSection(
    tab: ResumeTab,
    active: RwSignal<String>,
    activation: Generation,
    languages: Vec<Language>,
    dots: Generation,
) -> impl IntoView {
    let section_id = format!("{}-section", tab.id);
    let is_active = {
        let section_id = section_id.clone();
        Memo::new(move |_| active.with(|tab| section_matches(&section_id, tab)))
    };

    let cards: Vec<RwSignal<bool>> = tab.entries.iter().map(|_| RwSignal::new(true)).collect();
    let bars: Vec<RwSignal<String>> = tab.bars.iter().map(|_| RwSignal::new(String::new())).collect();
    let replay = Generation::new();

    {
        let cards = cards.clone();
        let bars = bars.clone();
        Effect::new(move |_| {
            activation.track();
            if !is_active.get_untracked() {
                return;
            }

            let generation = replay.next();
            for (i, shown) in cards.iter().copied().enumerate() {
                shown.set(false);
                after(card_delay_ms(i), move || {
                    if replay.is_current(generation) {
                        let _ = shown.try_set(true);
                    }
                });
            }
            // Clearing the animation and setting it again on the next frame
            // makes the browser restart it.
            for (i, animation) in bars.iter().copied().enumerate() {
                animation.set("none".to_string());
                request_animation_frame(move || {
                    let _ = animation.try_set(bar_animation(i));
                });
            }
        });
    }

    let entries = tab
        .entries
        .into_iter()
        .zip(cards)
        .map(|(entry, shown)| view! { <EntryCard entry=entry shown=shown /> })
        .collect_view();

    let bar_views = tab
        .bars
        .into_iter()
        .zip(bars)
        .map(|(skill, animation)| view! { <ResumeBar skill=skill animation=animation /> })
        .collect_view();

    let language_views = (!languages.is_empty()).then(|| {
        view! {
            <div class=css::languages>
                <h3>"Languages"</h3>
                {languages
                    .into_iter()
                    .enumerate()
                    .map(|(row, language)| view! { <LanguageRow language=language row=row dots=dots /> })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div
            id=section_id
            class="resume-section"
            class:active=move || is_active.get()
            style:display=move || if is_active.get() { "block" } else { "none" }
        >
            <div class=css::entries>{entries}</div>
            <div class=css::bars>{bar_views}</div>
            {language_views}
        </div>
    }
}

#[component]
fn EntryCard(entry: ResumeEntry, shown: RwSignal<bool>) -> impl IntoView {
    view! {
        <div
            class=format!("{} experience-card", css::card)
            style=move || if shown.get() { CARD_SHOWN } else { CARD_HIDDEN }
        >
            <div class=css::cardHeader>
                <h3>{entry.title}</h3>
                <span class=css::period>{entry.period}</span>
            </div>
            {(!entry.organization.is_empty())
                .then(|| view! { <p class=css::organization>{entry.organization}</p> })}
            <ul class=css::details>
                {entry.details.into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ResumeBar(skill: Skill, animation: RwSignal<String>) -> impl IntoView {
    let level = skill.level.min(100);
    view! {
        <div class=css::barItem>
            <div class=css::barHeader>
                <span>{skill.name}</span>
                <span>{format!("{level}%")}</span>
            </div>
            <div class=css::barTrack>
                <div
                    class=format!("{} skill-bar-fill", css::barFill)
                    style:width=format!("{level}%")
                    style:animation=move || animation.get()
                ></div>
            </div>
        </div>
    }
}

#[component]
fn LanguageRow(language: Language, row: usize, dots: Generation) -> impl IntoView {
    let filled = language.filled();
    let visible: Vec<RwSignal<bool>> = (0..filled).map(|_| RwSignal::new(true)).collect();

    {
        let visible = visible.clone();
        Effect::new(move |_| {
            let generation = dots.track();
            if generation == 0 {
                return;
            }
            for (dot, shown) in visible.iter().copied().enumerate() {
                shown.set(false);
                after(language_dot_delay_ms(row, dot), move || {
                    if dots.is_current(generation) {
                        let _ = shown.try_set(true);
                    }
                });
            }
        });
    }

    let dot_views = (0..usize::from(Language::MAX_LEVEL))
        .map(|dot| {
            let shown = visible.get(dot).copied();
            let class = if shown.is_some() {
                format!("{} {}", css::dot, css::dotFilled)
            } else {
                css::dot.to_string()
            };
            let style = move || match shown {
                Some(s) if s.get() => "opacity: 1; transform: scale(1); transition: all 0.3s ease;",
                Some(_) => "opacity: 0; transform: scale(0);",
                None => "",
            };
            view! {
                <span class=class style=style></span>
            }
        })
        .collect_view();

    view! {
        <div class=css::languageRow>
            <span>{language.name}</span>
            <div class=format!("{} language-dots", css::dots)>{dot_views}</div>
        </div>
    }
}
