//! Token categories for highlighted code
//!
//! Every span the highlighter emits carries exactly one category. The
//! category decides both the CSS class in HTML output and the default
//! terminal style.

use super::style::{Color, Style};

/// Display classification assigned to a highlighted token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `// line` and `/* block */` comments
    Comment,
    /// Double-quoted, single-quoted and backtick literals
    String,
    /// Control flow, declaration and modifier keywords
    Keyword,
    /// Primitive types, built-in objects and reserved literals
    Type,
    /// Bare digit runs
    Number,
    /// Identifiers directly followed by `(`
    FunctionName,
    /// Identifiers starting with an uppercase letter
    ClassName,
    /// `@identifier` decorators and annotations
    Annotation,
}

impl Category {
    /// All categories, in pipeline order
    pub const ALL: [Category; 8] = [
        Category::Comment,
        Category::String,
        Category::Keyword,
        Category::Type,
        Category::Number,
        Category::FunctionName,
        Category::ClassName,
        Category::Annotation,
    ];

    /// Class attribute value used in emitted markup
    pub fn css_class(&self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::String => "string",
            Category::Keyword => "keyword",
            Category::Type => "type",
            Category::Number => "number",
            Category::FunctionName => "function-name",
            Category::ClassName => "class-name",
            Category::Annotation => "annotation",
        }
    }

    /// Look a category up by its class name (also the config key)
    pub fn from_css_class(class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.css_class() == class)
    }

    /// Get the default style for this category
    pub fn default_style(&self) -> Style {
        match self {
            Category::Comment => Style::fg(Color::BrightBlack).with_italic(),
            Category::String => Style::fg(Color::Green),
            Category::Keyword => Style::fg(Color::Magenta).with_bold(),
            Category::Type => Style::fg(Color::Yellow),
            Category::Number => Style::fg(Color::Cyan),
            Category::FunctionName => Style::fg(Color::Blue),
            Category::ClassName => Style::fg(Color::BrightYellow),
            Category::Annotation => Style::fg(Color::BrightBlue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_not_empty() {
        for category in Category::ALL {
            assert!(!category.default_style().is_default(), "{:?}", category);
        }
    }

    #[test]
    fn test_css_class_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_css_class(category.css_class()), Some(category));
        }
    }

    #[test]
    fn test_from_css_class_invalid() {
        assert_eq!(Category::from_css_class("Keyword"), None);
        assert_eq!(Category::from_css_class(""), None);
        assert_eq!(Category::from_css_class("function_name"), None);
    }
}
