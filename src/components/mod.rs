//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing (main entry point)
//! - [`nav`] - Fixed navbar with mobile menu
//! - [`home`] - Hero with typing effect, stats, about, skills
//! - [`projects`] - Filterable project grid with hover tilt
//! - [`blog`] - Filterable post list
//! - [`resume`] - Tabbed resume with timeline
//! - [`contact`] - Validated contact form
//! - [`notification`] - Toast banner
//! - [`hooks`] / [`reveal`] - Scroll-triggered visibility helpers
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod blog;
pub mod contact;
pub mod filter_bar;
pub mod home;
pub mod hooks;
pub mod icons;
pub mod nav;
pub mod notification;
pub mod projects;
pub mod resume;
pub mod reveal;
pub mod router;

pub use router::AppRouter;
