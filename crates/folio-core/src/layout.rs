//! Grid/list toggle for the project listing.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectLayout {
    #[default]
    Grid,
    List,
}

impl ProjectLayout {
    /// Parses a `data-view` value. Anything but `"list"` is the grid.
    pub fn parse(value: &str) -> Self {
        if value == "list" { Self::List } else { Self::Grid }
    }

    pub fn grid_template_columns(self) -> &'static str {
        match self {
            Self::Grid => "repeat(2, 1fr)",
            Self::List => "1fr",
        }
    }

    /// Column span for a card; featured cards stretch across the grid.
    pub fn column_span(self, featured: bool) -> u8 {
        match self {
            Self::Grid if featured => 2,
            _ => 1,
        }
    }

    /// `grid-column` value for a card.
    pub fn grid_column(self, featured: bool) -> String {
        format!("span {}", self.column_span(featured))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(ProjectLayout::parse("list"), ProjectLayout::List);
        assert_eq!(ProjectLayout::parse("grid"), ProjectLayout::Grid);
        assert_eq!(ProjectLayout::parse("cards"), ProjectLayout::Grid);
    }

    #[test]
    fn test_featured_span() {
        assert_eq!(ProjectLayout::Grid.grid_column(true), "span 2");
        assert_eq!(ProjectLayout::Grid.grid_column(false), "span 1");
        assert_eq!(ProjectLayout::List.grid_column(true), "span 1");
        assert_eq!(ProjectLayout::List.grid_template_columns(), "1fr");
    }
}
