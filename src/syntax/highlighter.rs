//! The highlighting pipeline
//!
//! Passes run in a fixed order: escape, comments, strings, keywords,
//! built-in types, numbers, call sites, capitalized names, annotations.
//! Every pass after comments carries the non-overlap guard, so text
//! tagged by an earlier pass is never tagged again.

use std::fmt;
use std::sync::OnceLock;

use super::escape::escape;
use super::rules::PassRule;
use super::tokens::Category;
use super::vocab::{word_pattern, KEYWORDS, TYPES};

const COMMENT: &str = r"&#x2F;&#x2F;[^\n]*|(?s:&#x2F;\*.*?(?:\*&#x2F;|\z))";

// Quoted literals stop at a tag boundary, so they never swallow a span.
const STRING: &str = concat!(
    r"&quot;(?:\\&quot;|\\[^<\n]|[^<\n])*?&quot;",
    r"|&#x27;(?:\\&#x27;|\\[^<\n]|[^<\n])*?&#x27;",
    r"|`(?:\\[^<]|[^<`\\])*`",
);

const NUMBER: &str = r"\b\d+\b";
// Identifiers right after `@` are left for the annotation pass.
const CALL_SITE: &str = r"(?:^|[^@\w])([A-Za-z_]\w*)\(";
const CLASS_NAME: &str = r"(?:^|[^@\w])([A-Z]\w*)\b";
const ANNOTATION: &str = r"@[A-Za-z_]\w*";

/// Highlighted output plus the language label for the badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedMarkup {
    markup: String,
    language: Option<String>,
}

impl HighlightedMarkup {
    /// The markup string, ready to embed without further escaping
    pub fn as_str(&self) -> &str {
        &self.markup
    }

    pub fn into_string(self) -> String {
        self.markup
    }

    /// Language label supplied by the caller, if any
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

impl fmt::Display for HighlightedMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup)
    }
}

/// Ordered regex pipeline turning source text into tagged markup
pub struct Highlighter {
    passes: Vec<PassRule>,
}

impl Highlighter {
    /// Build the pipeline
    pub fn new() -> Self {
        let keywords = word_pattern(KEYWORDS);
        let types = word_pattern(TYPES);

        let rules = [
            PassRule::new("comment", COMMENT, Category::Comment),
            PassRule::guarded("string", STRING, Category::String),
            PassRule::guarded("keyword", &keywords, Category::Keyword),
            PassRule::guarded("type", &types, Category::Type),
            PassRule::guarded("number", NUMBER, Category::Number),
            PassRule::guarded("call_site", CALL_SITE, Category::FunctionName),
            PassRule::guarded("class_name", CLASS_NAME, Category::ClassName),
            PassRule::guarded("annotation", ANNOTATION, Category::Annotation),
        ];

        Self {
            passes: rules.into_iter().flatten().collect(),
        }
    }

    /// Names of the tagging passes in the order they run
    pub fn pass_names(&self) -> impl Iterator<Item = &str> {
        self.passes.iter().map(|p| p.name.as_str())
    }

    /// Highlight source text
    ///
    /// The language label is carried through for display only; the same
    /// tokenizer runs for every language.
    #[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
    pub fn highlight(&self, source: &str, language: Option<&str>) -> HighlightedMarkup {
        let mut markup = escape(source);
        for pass in &self.passes {
            markup = pass.apply(&markup);
        }
        tracing::debug!(input = source.len(), output = markup.len(), "highlighted");

        HighlightedMarkup {
            markup,
            language: language.map(str::to_string),
        }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Highlight with the shared default pipeline
pub fn highlight(source: &str, language: Option<&str>) -> HighlightedMarkup {
    static DEFAULT: OnceLock<Highlighter> = OnceLock::new();
    DEFAULT.get_or_init(Highlighter::new).highlight(source, language)
}
