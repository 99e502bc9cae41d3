//! The design-pattern catalog
//!
//! A fixed, read-only table of twelve patterns. Nothing mutates it, so it
//! lives in a plain `static` and needs no synchronization.

mod patterns;

use std::fmt;

pub use patterns::PATTERNS;

/// Gang-of-Four grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternCategory {
    Creational,
    Structural,
    Behavioral,
}

impl PatternCategory {
    pub const ALL: [PatternCategory; 3] = [
        PatternCategory::Creational,
        PatternCategory::Structural,
        PatternCategory::Behavioral,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PatternCategory::Creational => "Creational",
            PatternCategory::Structural => "Structural",
            PatternCategory::Behavioral => "Behavioral",
        }
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    /// URL-safe identifier, e.g. `abstract-factory`
    pub id: &'static str,
    pub name: &'static str,
    pub category: PatternCategory,
    /// One line for list views
    pub summary: &'static str,
    pub description: &'static str,
    /// When and why to reach for it
    pub rationale: &'static str,
    /// Language label of the code sample
    pub language: &'static str,
    pub code: &'static str,
}

/// Every pattern, in catalog order
pub fn all() -> &'static [Pattern] {
    PATTERNS
}

/// Look a pattern up by id
pub fn find(id: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.id == id)
}

/// Patterns of one category, in catalog order
pub fn by_category(category: PatternCategory) -> impl Iterator<Item = &'static Pattern> {
    PATTERNS.iter().filter(move |p| p.category == category)
}

/// Ids of every pattern, used to enumerate detail pages
pub fn ids() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|p| p.id)
}
