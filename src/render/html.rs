//! HTML code block
//!
//! The markup is embedded verbatim: the highlighter has already escaped
//! the source text.

use crate::syntax::{badge_text, escape, HighlightedMarkup};

/// Wrap highlighted markup in a code block with a language badge
pub fn code_block(markup: &HighlightedMarkup) -> String {
    let mut html = String::with_capacity(markup.as_str().len() + 128);
    html.push_str("<div class=\"code-block\">");
    if let Some(language) = markup.language() {
        html.push_str("<div class=\"code-header\"><span class=\"language-badge\">");
        html.push_str(&escape(&badge_text(language)));
        html.push_str("</span></div>");
    }
    html.push_str("<pre><code>");
    html.push_str(markup.as_str());
    html.push_str("</code></pre></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::highlight;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_code_block_with_badge() {
        let markup = highlight("let a", Some("typescript"));
        assert_eq!(
            code_block(&markup),
            concat!(
                r#"<div class="code-block"><div class="code-header">"#,
                r#"<span class="language-badge">TypeScript</span></div>"#,
                r#"<pre><code><span class="keyword">let</span> a</code></pre></div>"#
            )
        );
    }

    #[test]
    fn test_code_block_without_badge() {
        let markup = highlight("", None);
        assert_eq!(
            code_block(&markup),
            r#"<div class="code-block"><pre><code></code></pre></div>"#
        );
    }

    #[test]
    fn test_badge_is_escaped() {
        let markup = highlight("x", Some("<script>"));
        let html = code_block(&markup);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
