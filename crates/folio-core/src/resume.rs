//! Resume page: tab switching, section entrance timings and timeline progress.

/// Delay between consecutive cards entering an activated section.
pub const CARD_STAGGER_MS: u32 = 50;

/// Delay between consecutive skill bars starting to fill.
pub const BAR_STAGGER_MS: u32 = 100;

/// Wait after the skills tab is opened before language dots animate.
pub const LANGUAGE_DOTS_DELAY_MS: u32 = 300;

/// Tab id that triggers the language dot animation.
pub const SKILLS_TAB: &str = "skills";

/// Whether the section with `section_id` belongs to `tab`.
///
/// Sections are matched either by the bare tab id or by `<tab>-section`.
pub fn section_matches(section_id: &str, tab: &str) -> bool {
    section_id == tab
        || section_id
            .strip_suffix("-section")
            .is_some_and(|base| base == tab)
}

/// Entrance delay for the `index`-th card of a section.
pub fn card_delay_ms(index: usize) -> u32 {
    index as u32 * CARD_STAGGER_MS
}

/// CSS `animation` value for the `index`-th skill bar.
pub fn bar_animation(index: usize) -> String {
    format!(
        "fillBar 1s ease-out {}ms forwards",
        index as u32 * BAR_STAGGER_MS
    )
}

/// Appearance delay for dot `dot` of language row `row`.
pub fn language_dot_delay_ms(row: usize, dot: usize) -> u32 {
    (row * 100 + dot * 50) as u32
}

/// Timeline position on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineRect {
    /// Distance from the viewport top to the timeline top (may be negative).
    pub top: f64,
    pub height: f64,
}

/// Percentage of the timeline scrolled through, or `None` while it is
/// entirely outside the viewport (callers keep the previous value).
pub fn timeline_progress(rect: TimelineRect, viewport_height: f64) -> Option<f64> {
    let visible = rect.top < viewport_height && rect.top + rect.height > 0.0;
    if !visible {
        return None;
    }

    let scrolled_into = (viewport_height - rect.top).max(0.0);
    let total_scrollable = viewport_height + rect.height;
    if total_scrollable <= 0.0 {
        return None;
    }
    Some((scrolled_into / total_scrollable * 100.0).min(100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_matching() {
        assert!(section_matches("experience", "experience"));
        assert!(section_matches("experience-section", "experience"));
        assert!(!section_matches("education-section", "experience"));
        assert!(!section_matches("experience-section-old", "experience"));
    }

    #[test]
    fn test_stagger_values() {
        assert_eq!(card_delay_ms(0), 0);
        assert_eq!(card_delay_ms(3), 150);
        assert_eq!(bar_animation(0), "fillBar 1s ease-out 0ms forwards");
        assert_eq!(bar_animation(2), "fillBar 1s ease-out 200ms forwards");
        assert_eq!(language_dot_delay_ms(2, 3), 350);
    }

    #[test]
    fn test_timeline_offscreen() {
        let below = TimelineRect { top: 900.0, height: 400.0 };
        assert_eq!(timeline_progress(below, 800.0), None);

        let above = TimelineRect { top: -500.0, height: 400.0 };
        assert_eq!(timeline_progress(above, 800.0), None);
    }

    #[test]
    fn test_timeline_partial() {
        let rect = TimelineRect { top: 400.0, height: 800.0 };
        // 400 scrolled of 1600 total
        assert_eq!(timeline_progress(rect, 800.0), Some(25.0));
    }

    #[test]
    fn test_timeline_never_exceeds_full() {
        for top in [-399.0, -100.0, 0.0, 250.0, 799.0] {
            let rect = TimelineRect { top, height: 400.0 };
            let p = timeline_progress(rect, 800.0).unwrap();
            assert!((0.0..=100.0).contains(&p), "top={top} progress={p}");
        }
    }
}
