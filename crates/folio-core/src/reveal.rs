//! Scroll-triggered reveal timings.

/// Per-element delay increment for the reveal transition.
pub const STAGGER_MS: u32 = 50;

/// Fraction of an element that must be visible to reveal it.
pub const THRESHOLD: f64 = 0.1;

/// Fraction of a counter or skill bar that must be visible to start it.
pub const START_THRESHOLD: f64 = 0.5;

/// Wait before a revealed skill bar starts filling.
pub const SKILL_FILL_DELAY_MS: u32 = 200;

/// CSS `transition` for the `index`-th revealed element.
pub fn transition(index: usize) -> String {
    let delay = index as u32 * STAGGER_MS;
    format!("opacity 0.6s ease {delay}ms, transform 0.6s ease {delay}ms")
}

/// Clamps a skill level to a CSS width percentage.
pub fn skill_width(level: u8) -> String {
    format!("{}%", level.min(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_stagger() {
        assert_eq!(
            transition(3),
            "opacity 0.6s ease 150ms, transform 0.6s ease 150ms"
        );
    }

    #[test]
    fn test_skill_width_is_clamped() {
        assert_eq!(skill_width(85), "85%");
        assert_eq!(skill_width(140), "100%");
    }
}
