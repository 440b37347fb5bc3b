//! Category filter buttons for project cards and blog posts.

use std::fmt;

/// Delay between consecutive project cards entering.
pub const CARD_STAGGER_MS: u32 = 100;

/// Time a filtered-out card spends fading before leaving the layout.
pub const CARD_EXIT_MS: u32 = 300;

/// Entrance delay for blog posts that match.
pub const POST_ENTER_MS: u32 = 50;

/// Active filter button value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Parses a `data-filter` value; `"all"` (or blank) means no filtering.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "" | "all" => Self::All,
            category => Self::Category(category.to_string()),
        }
    }

    /// Whether an item tagged with `categories` passes.
    pub fn matches<S: AsRef<str>>(&self, categories: &[S]) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => categories.iter().any(|c| c.as_ref() == wanted),
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(c) => c,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Where a card is headed after a filter change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Fade in after `delay_ms`.
    Enter { delay_ms: u32 },
    /// Fade out, then drop out of the layout after `CARD_EXIT_MS`.
    Leave,
}

impl Visibility {
    pub fn is_shown(self) -> bool {
        matches!(self, Self::Enter { .. })
    }
}

/// Computes per-item visibility with staggered entrance delays.
///
/// Only matching items advance the stagger counter, so the first visible
/// card always enters without delay.
pub fn plan<I, C>(filter: &Filter, items: I, stagger_ms: u32) -> Vec<Visibility>
where
    I: IntoIterator<Item = C>,
    C: AsRef<[String]>,
{
    let mut visible_index = 0u32;
    items
        .into_iter()
        .map(|categories| {
            if filter.matches(categories.as_ref()) {
                let delay_ms = visible_index * stagger_ms;
                visible_index += 1;
                Visibility::Enter { delay_ms }
            } else {
                Visibility::Leave
            }
        })
        .collect()
}

/// Distinct categories in first-seen order, for building the button row.
pub fn categories<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut seen: Vec<String> = Vec::new();
    for category in items.into_iter().flatten() {
        if !seen.contains(category) {
            seen.push(category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse() {
        assert_eq!(Filter::parse("all"), Filter::All);
        assert_eq!(Filter::parse(""), Filter::All);
        assert_eq!(
            Filter::parse("robotics"),
            Filter::Category("robotics".to_string())
        );
    }

    #[test]
    fn test_matches_whole_tokens() {
        let filter = Filter::parse("sim");
        assert!(!filter.matches(&tags(&["simulation"])));
        assert!(filter.matches(&tags(&["physics", "sim"])));
        assert!(Filter::All.matches::<String>(&[]));
    }

    #[test]
    fn test_plan_staggers_visible_cards_only() {
        let items = vec![
            tags(&["physics"]),
            tags(&["robotics"]),
            tags(&["physics", "space"]),
            tags(&["space"]),
        ];
        let result = plan(&Filter::parse("physics"), &items, CARD_STAGGER_MS);
        assert_eq!(
            result,
            vec![
                Visibility::Enter { delay_ms: 0 },
                Visibility::Leave,
                Visibility::Enter { delay_ms: 100 },
                Visibility::Leave,
            ]
        );
    }

    #[test]
    fn test_plan_all_shows_everything() {
        let items = vec![tags(&["a"]), tags(&["b"])];
        let result = plan(&Filter::All, &items, 50);
        assert!(result.iter().all(|v| v.is_shown()));
    }

    #[test]
    fn test_categories_dedup_in_order() {
        let items = vec![tags(&["b", "a"]), tags(&["a", "c"])];
        let result = categories(items.iter().map(|v| v.as_slice()));
        assert_eq!(result, tags(&["b", "a", "c"]));
    }
}
