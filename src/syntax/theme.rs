//! Category styles for terminal output

use std::collections::HashMap;

use super::style::Style;
use super::tokens::Category;

/// Maps each category to the style it is drawn with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    styles: HashMap<Category, Style>,
}

impl Theme {
    /// Style for a category, falling back to its default
    pub fn style(&self, category: Category) -> Style {
        self.styles
            .get(&category)
            .copied()
            .unwrap_or_else(|| category.default_style())
    }

    /// Override the style of one category
    pub fn set(&mut self, category: Category, style: Style) {
        self.styles.insert(category, style);
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            styles: Category::ALL
                .into_iter()
                .map(|c| (c, c.default_style()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::style::Color;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        for category in Category::ALL {
            assert_eq!(theme.style(category), category.default_style());
        }
    }

    #[test]
    fn test_override() {
        let mut theme = Theme::default();
        theme.set(Category::Keyword, Style::fg(Color::Red));
        assert_eq!(theme.style(Category::Keyword), Style::fg(Color::Red));
        assert_eq!(theme.style(Category::Number), Category::Number.default_style());
    }
}
