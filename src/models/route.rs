//! Hash-based routing for static hosting.
//!
//! URL format: `#/<page>` (e.g. `#/projects`). Plain fragments such as
//! `#about` are in-page anchors and leave the route untouched.

/// Application pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppRoute {
    /// Landing page: `#/` or empty hash
    #[default]
    Home,
    Projects,
    Resume,
    Blog,
    Contact,
}

impl AppRoute {
    /// Pages listed in the navbar, in order.
    pub const ALL: [AppRoute; 5] = [
        AppRoute::Home,
        AppRoute::Projects,
        AppRoute::Resume,
        AppRoute::Blog,
        AppRoute::Contact,
    ];

    /// Parse a URL hash into a route.
    ///
    /// Returns `None` for in-page anchors (`#about`), which should not
    /// change the page. Unknown paths fall back to [`AppRoute::Home`].
    pub fn from_hash(hash: &str) -> Option<Self> {
        let hash = hash.trim_start_matches('#');
        if !hash.is_empty() && !hash.starts_with('/') {
            return None;
        }

        let route = match hash.trim_matches('/') {
            "projects" => Self::Projects,
            "resume" => Self::Resume,
            "blog" => Self::Blog,
            "contact" => Self::Contact,
            _ => Self::Home,
        };
        Some(route)
    }

    /// Convert route to URL hash.
    pub fn to_hash(self) -> &'static str {
        match self {
            Self::Home => "#/",
            Self::Projects => "#/projects",
            Self::Resume => "#/resume",
            Self::Blog => "#/blog",
            Self::Contact => "#/contact",
        }
    }

    /// Navbar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::Resume => "Resume",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
        }
    }

    /// Route for the current browser URL, if the hash is a route.
    pub fn current() -> Option<Self> {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_hash(""), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_hash("#"), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_hash("#/"), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_hash("#/projects"), Some(AppRoute::Projects));
        assert_eq!(AppRoute::from_hash("#/resume/"), Some(AppRoute::Resume));
        assert_eq!(AppRoute::from_hash("#/nowhere"), Some(AppRoute::Home));
    }

    #[test]
    fn test_anchor_is_not_a_route() {
        assert_eq!(AppRoute::from_hash("#about"), None);
    }

    #[test]
    fn test_route_round_trip() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::from_hash(route.to_hash()), Some(route));
        }
    }
}
