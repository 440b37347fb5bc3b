//! Host-independent logic for the portfolio site.
//!
//! Nothing in this crate touches the DOM. The web crate feeds browser
//! events in and renders what comes out:
//!
//! - [`typing`] - hero typing animation ([`TypingState`], [`TypingAnimator`])
//! - [`contact`] - contact form validation
//! - [`notification`] - single-slot toast banner
//! - [`filter`], [`layout`], [`tilt`] - project and blog listings
//! - [`resume`] - tabs, section timings, timeline progress
//! - [`counter`], [`reveal`] - scroll-triggered animations
//! - [`nav`] - navbar and mobile menu
//! - [`content`] - site content loaded from TOML

#[cfg(any(test, feature = "mock"))]
pub mod clock;
pub mod contact;
pub mod content;
pub mod counter;
pub mod error;
pub mod filter;
pub mod layout;
pub mod nav;
pub mod notification;
pub mod resume;
pub mod reveal;
pub mod tilt;
pub mod typing;

pub use content::SiteContent;
pub use error::{ContentError, SendError, TypingError, ValidationError};
pub use typing::{Phase, Scheduler, Step, TextSink, TypingAnimator, TypingSpeeds, TypingState};
