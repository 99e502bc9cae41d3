//! patternbook - design patterns with highlighted code samples
//!
//! The core is [`syntax::highlight`], which turns source text into safe,
//! category-tagged markup. The catalog, renderers and config wrap it into
//! a small browsing tool.

pub mod catalog;
pub mod config;
pub mod error;
pub mod render;
pub mod syntax;

pub use error::{Error, Result};
pub use syntax::{highlight, HighlightedMarkup, Highlighter};
