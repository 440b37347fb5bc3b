//! Custom hooks shared by page components.

use leptos::html;
use leptos::prelude::*;
use leptos_use::{
    UseIntersectionObserverOptions, UseIntersectionObserverReturn,
    use_intersection_observer_with_options,
};

/// Latches to `true` the first time `target` is at least `threshold`
/// visible, then stops observing.
pub fn use_seen(target: NodeRef<html::Div>, threshold: f64) -> Signal<bool> {
    let (seen, set_seen) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_seen.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    Effect::new(move || {
        if seen.get() {
            stop();
        }
    });

    seen.into()
}

/// Bumps every time the caller asks for a replay. Timers spawned for an
/// older generation compare against [`Generation::current`] and bail.
#[derive(Clone, Copy)]
pub struct Generation(RwSignal<u64>);

impl Generation {
    pub fn new() -> Self {
        Self(RwSignal::new(0))
    }

    /// Starts a new generation and returns its number.
    pub fn next(&self) -> u64 {
        self.0.try_update(|g| {
            *g += 1;
            *g
        })
        .unwrap_or_default()
    }

    /// Generation number without subscribing.
    pub fn current(&self) -> Option<u64> {
        self.0.try_get_untracked()
    }

    /// Whether `generation` is still the latest one.
    pub fn is_current(&self, generation: u64) -> bool {
        self.current() == Some(generation)
    }

    /// Subscribes to generation changes.
    pub fn track(&self) -> u64 {
        self.0.get()
    }
}

impl Default for Generation {
    fn default() -> Self {
        Self::new()
    }
}
