//! Root application module.
//!
//! Contains the main App component, AppContext definition and
//! application-level setup logic following Leptos conventions.

use folio_core::SiteContent;
use folio_core::notification::{
    AUTO_DISMISS_MS, EXIT_ANIMATION_MS, NotificationCenter, NotificationKind,
};
use leptos::prelude::*;

use crate::components::AppRouter;
use crate::components::notification::Toast;
use crate::config::site_content;
use crate::utils::timer::after;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and available from any child
/// via `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are arena handles, which are
/// cheap to copy.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Parsed site content. Read-only after startup.
    pub content: StoredValue<SiteContent>,

    /// The single toast banner.
    pub notifications: RwSignal<NotificationCenter>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            content: StoredValue::new(site_content()),
            notifications: RwSignal::new(NotificationCenter::new()),
        }
    }

    /// Shows a banner, replacing the current one, and schedules its
    /// auto-dismissal.
    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        let message = message.into();
        let Some(id) = self.notifications.try_update(|c| c.show(kind, message)) else {
            return;
        };

        let ctx = *self;
        after(AUTO_DISMISS_MS, move || ctx.dismiss(id));
    }

    /// Starts the exit animation of banner `id` and removes it afterwards.
    ///
    /// Ignored when `id` was already replaced or is already leaving.
    pub fn dismiss(&self, id: u64) {
        let started = self
            .notifications
            .try_update(|c| c.begin_dismiss(id))
            .unwrap_or(false);
        if !started {
            return;
        }

        let notifications = self.notifications;
        after(EXIT_ANIMATION_MS, move || {
            notifications.try_update(|c| c.remove(id));
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Creates and provides the global [`AppContext`], then renders the router
/// and the toast layer. Malformed site content never reaches the view: it is
/// replaced by empty content in [`site_content`].
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <AppRouter />
        <Toast />
    }
}
