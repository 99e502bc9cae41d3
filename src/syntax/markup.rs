//! Re-parsing highlighted markup
//!
//! The renderers and the tests both need to see highlighter output as a
//! flat list of runs rather than a string with tags in it.

use thiserror::Error;

use super::escape::unescape;
use super::rules::CLOSE_TAG;
use super::tokens::Category;

const OPEN_PREFIX: &str = "<span class=\"";
const OPEN_SUFFIX: &str = "\">";

/// Structural problems found while re-parsing markup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("unknown category class `{class}` at byte {offset}")]
    UnknownCategory { class: String, offset: usize },

    #[error("span opened inside another span at byte {offset}")]
    NestedSpan { offset: usize },

    #[error("closing tag without an open span at byte {offset}")]
    UnbalancedClose { offset: usize },

    #[error("unrecognized or unterminated tag at byte {offset}")]
    BadTag { offset: usize },

    #[error("span opened at byte {offset} is never closed")]
    UnclosedSpan { offset: usize },
}

/// A run of text with at most one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Category of the enclosing span, `None` for untagged text
    pub category: Option<Category>,
    /// Text as it appears in the markup (still escaped)
    pub raw: String,
    /// Decoded text
    pub text: String,
}

impl Segment {
    fn new(category: Option<Category>, raw: &str) -> Self {
        Self {
            category,
            raw: raw.to_string(),
            text: unescape(raw),
        }
    }
}

/// Split markup into flat segments
///
/// Empty runs are dropped. Spans must not nest.
pub fn segments(markup: &str) -> Result<Vec<Segment>, MarkupError> {
    let mut segments = Vec::new();
    let mut current: Option<(Category, usize)> = None;
    let mut run_start = 0;
    let mut pos = 0;

    while let Some(offset) = markup[pos..].find('<') {
        let tag_start = pos + offset;
        let rest = &markup[tag_start..];
        let run = &markup[run_start..tag_start];

        if rest.starts_with(CLOSE_TAG) {
            let Some((category, _)) = current.take() else {
                return Err(MarkupError::UnbalancedClose { offset: tag_start });
            };
            push_run(&mut segments, Some(category), run);
            pos = tag_start + CLOSE_TAG.len();
        } else if let Some(after_prefix) = rest.strip_prefix(OPEN_PREFIX) {
            if current.is_some() {
                return Err(MarkupError::NestedSpan { offset: tag_start });
            }
            let Some(class_len) = after_prefix.find(OPEN_SUFFIX) else {
                return Err(MarkupError::BadTag { offset: tag_start });
            };
            let class = &after_prefix[..class_len];
            let category = Category::from_css_class(class).ok_or_else(|| {
                MarkupError::UnknownCategory {
                    class: class.to_string(),
                    offset: tag_start,
                }
            })?;
            push_run(&mut segments, None, run);
            current = Some((category, tag_start));
            pos = tag_start + OPEN_PREFIX.len() + class_len + OPEN_SUFFIX.len();
        } else {
            return Err(MarkupError::BadTag { offset: tag_start });
        }
        run_start = pos;
    }

    if let Some((_, offset)) = current {
        return Err(MarkupError::UnclosedSpan { offset });
    }
    push_run(&mut segments, None, &markup[run_start..]);
    Ok(segments)
}

fn push_run(segments: &mut Vec<Segment>, category: Option<Category>, raw: &str) {
    if !raw.is_empty() {
        segments.push(Segment::new(category, raw));
    }
}

/// Remove every tag, leaving escaped text
///
/// Lenient: anything between `<` and the next `>` is dropped.
pub fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match (in_tag, ch) {
            (false, '<') => in_tag = true,
            (true, '>') => in_tag = false,
            (false, _) => out.push(ch),
            (true, _) => {}
        }
    }
    out
}

/// Reconstruct the original source from highlighter output
pub fn plain_text(markup: &str) -> Result<String, MarkupError> {
    Ok(segments(markup)?.into_iter().map(|s| s.text).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_segments_flat() {
        let markup = r#"<span class="keyword">let</span> x = <span class="number">1</span>;"#;
        let segs = segments(markup).unwrap();
        let summary: Vec<_> = segs.iter().map(|s| (s.category, s.text.as_str())).collect();
        assert_eq!(
            summary,
            [
                (Some(Category::Keyword), "let"),
                (None, " x = "),
                (Some(Category::Number), "1"),
                (None, ";"),
            ]
        );
    }

    #[test]
    fn test_segments_decode() {
        let segs = segments(r#"<span class="string">&quot;a&lt;b&quot;</span>"#).unwrap();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].raw, "&quot;a&lt;b&quot;");
        assert_eq!(segs[0].text, "\"a<b\"");
    }

    #[test]
    fn test_segments_empty() {
        assert_eq!(segments("").unwrap(), vec![]);
    }

    #[test]
    fn test_nested_span_rejected() {
        let markup = r#"<span class="string">a<span class="keyword">b</span></span>"#;
        assert_eq!(segments(markup), Err(MarkupError::NestedSpan { offset: 22 }));
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(
            segments("a</span>"),
            Err(MarkupError::UnbalancedClose { offset: 1 })
        );
        assert_eq!(
            segments(r#"<span class="comment">x"#),
            Err(MarkupError::UnclosedSpan { offset: 0 })
        );
        assert_eq!(segments("a < b"), Err(MarkupError::BadTag { offset: 2 }));
        assert_eq!(
            segments(r#"<span class="bold">x</span>"#),
            Err(MarkupError::UnknownCategory {
                class: "bold".to_string(),
                offset: 0
            })
        );
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(
            strip_tags(r#"<span class="keyword">if</span> a &lt; b"#),
            "if a &lt; b"
        );
    }

    #[test]
    fn test_plain_text() {
        let markup = r#"<span class="comment">&#x2F;&#x2F; hi</span>"#;
        assert_eq!(plain_text(markup).unwrap(), "// hi");
    }
}
