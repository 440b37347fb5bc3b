//! Application configuration.
//!
//! Centralizes configuration constants used throughout the application.
//! Site content is loaded at compile time using `include_str!`.

use folio_core::SiteContent;
use leptos::logging::error;

// =============================================================================
// Content (loaded at compile time)
// =============================================================================

/// Site content document: phrases, projects, resume, contact subjects.
pub const SITE_CONTENT: &str = include_str!("../assets/site.toml");

/// Parses [`SITE_CONTENT`].
///
/// A malformed document is logged and replaced by empty content, so the
/// shell still renders (the hero then shows only the tagline).
pub fn site_content() -> SiteContent {
    parse_site_content(SITE_CONTENT)
}

fn parse_site_content(source: &str) -> SiteContent {
    match SiteContent::from_toml(source) {
        Ok(content) => content,
        Err(e) => {
            error!("{e}");
            SiteContent::default()
        }
    }
}

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand shown in the navbar.
pub const APP_NAME: &str = "pranav.dev";

/// Element id of the fixed navbar, used for anchor scroll offsets.
pub const NAV_ELEMENT_ID: &str = "site-nav";

/// Media query for devices where hover effects make sense.
pub const HOVER_CAPABLE_QUERY: &str = "(hover: hover) and (pointer: fine)";

// =============================================================================
// Contact Configuration
// =============================================================================

/// Contact form hand-off settings.
pub mod outbox {
    /// Simulated network latency for a message hand-off.
    pub const SEND_LATENCY_MS: u32 = 1500;
}

// =============================================================================
// Resume Configuration
// =============================================================================

/// Message shown by the resume download button.
pub const DOWNLOAD_UNAVAILABLE: &str =
    "PDF download coming soon! For now, please use the Print button and save as PDF.";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let content = SiteContent::from_toml(SITE_CONTENT).unwrap();
        assert!(!content.hero.phrases.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.contact.subjects.is_empty());
    }

    #[test]
    fn test_malformed_content_falls_back_to_empty() {
        let content = parse_site_content("[hero\nphrases = 3");
        assert_eq!(content, SiteContent::default());
        assert!(folio_core::TypingState::new(content.hero.phrases, content.hero.speeds).is_err());
    }

    #[test]
    fn test_embedded_phrases_can_animate() {
        let content = site_content();
        assert!(
            folio_core::TypingState::new(content.hero.phrases, content.hero.speeds).is_ok()
        );
    }
}
