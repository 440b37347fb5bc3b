//! Utility modules for browser and timer operations.
//!
//! Provides:
//! - [`dom`] - optional element lookups, anchor scrolling, print/alert
//! - [`timer`] - [`BrowserScheduler`], [`SignalSink`] and one-shot [`after`]
//! - [`send_message`] - simulated contact message delivery

pub mod dom;
mod outbox;
pub mod timer;

pub use outbox::send_message;
pub use timer::{BrowserScheduler, SignalSink, after};
