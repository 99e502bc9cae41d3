//! Syntax highlighting
//!
//! This module turns plain source text into markup:
//! - escaping of markup-significant characters
//! - ordered regex passes that tag comments, strings, keywords and so on
//! - re-parsing of the markup for renderers and checks

mod escape;
mod highlighter;
mod language;
mod markup;
mod rules;
mod style;
mod theme;
mod tokens;
mod vocab;

pub use escape::{escape, unescape};
pub use highlighter::{highlight, HighlightedMarkup, Highlighter};
pub use language::{badge_text, detect_language};
pub use markup::{plain_text, segments, strip_tags, MarkupError, Segment};
pub use style::{Color, Style};
pub use theme::Theme;
pub use tokens::Category;
