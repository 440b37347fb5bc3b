//! Browser adapters for the timer-driven core types.

use folio_core::{Scheduler, TextSink};
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// [`Scheduler`] backed by `setTimeout`. Dropping the handle clears the timeout.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// [`TextSink`] writing into a reactive string.
///
/// Writes after the signal's owner is disposed are dropped silently.
#[derive(Clone, Copy)]
pub struct SignalSink(pub RwSignal<String>);

impl TextSink for SignalSink {
    fn set_text(&self, text: &str) {
        let _ = self.0.try_set(text.to_string());
    }
}

/// Runs `f` once after `ms`.
///
/// Not cancellable: callbacks must tolerate running after the view that
/// scheduled them is gone (use `try_*` signal access or a generation check).
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    spawn_local(async move {
        TimeoutFuture::new(ms).await;
        f();
    });
}
