//! Toast-style notification banner.
//!
//! Only one banner is visible at a time. Each one gets a fresh id so that
//! timers belonging to a replaced banner can be ignored.

/// Time a banner stays up before dismissing itself.
pub const AUTO_DISMISS_MS: u32 = 5000;

/// Length of the slide-out animation before removal.
pub const EXIT_ANIMATION_MS: u32 = 300;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// CSS custom property used as the banner background.
    pub fn background(self) -> &'static str {
        match self {
            Self::Info => "var(--color-primary)",
            Self::Success => "var(--color-success)",
            Self::Error => "var(--color-error)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    /// Set once dismissal starts; the banner plays its exit animation.
    pub leaving: bool,
}

/// Single-slot notification holder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationCenter {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a banner, replacing any existing one. Returns its id.
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notification {
            id,
            kind,
            message: message.into(),
            leaving: false,
        });
        id
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Starts the exit animation for `id`.
    ///
    /// Returns `false` if `id` is no longer shown or is already leaving.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.current.as_mut() {
            Some(n) if n.id == id && !n.leaving => {
                n.leaving = true;
                true
            }
            _ => false,
        }
    }

    /// Removes the banner `id` once its exit animation is over.
    pub fn remove(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_previous() {
        let mut center = NotificationCenter::new();
        let first = center.show(NotificationKind::Info, "one");
        let second = center.show(NotificationKind::Error, "two");

        assert_ne!(first, second);
        let current = center.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.message, "two");
        assert_eq!(current.kind, NotificationKind::Error);
    }

    #[test]
    fn test_dismiss_lifecycle() {
        let mut center = NotificationCenter::new();
        let id = center.show(NotificationKind::Success, "sent");

        assert!(center.begin_dismiss(id));
        assert!(center.current().unwrap().leaving);
        assert!(!center.begin_dismiss(id));

        center.remove(id);
        assert!(center.current().is_none());
    }

    #[test]
    fn test_stale_timers_are_ignored() {
        let mut center = NotificationCenter::new();
        let old = center.show(NotificationKind::Info, "old");
        let new = center.show(NotificationKind::Info, "new");

        assert!(!center.begin_dismiss(old));
        center.remove(old);
        assert_eq!(center.current().map(|n| n.id), Some(new));
    }

    #[test]
    fn test_backgrounds_differ() {
        assert_ne!(
            NotificationKind::Success.background(),
            NotificationKind::Error.background()
        );
    }
}
