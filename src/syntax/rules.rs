//! Pass rules for the highlighting pipeline
//!
//! A pass is a regex substitution over the whole (already escaped and
//! partially tagged) text. Each match is wrapped in a category span.

use regex::{Captures, Regex};

use super::tokens::Category;

/// Closing tag emitted after every tagged token
pub const CLOSE_TAG: &str = "</span>";

/// Opening tag for a category
pub fn open_tag(category: Category) -> String {
    format!("<span class=\"{}\">", category.css_class())
}

/// Answers "is this position inside an emitted span?" for one pass
///
/// A position is inside a span when the first `<` at or after it starts a
/// closing tag. Source text never contains a raw `<` once escaped, and
/// spans never nest, so the next tag boundary tells us which side of a
/// span we are on. This also covers positions inside an opening tag's
/// attribute.
///
/// Tag positions are discovered by a single forward scan shared by all
/// queries, so every byte of the text is scanned at most once per pass.
pub struct SpanIndex<'a> {
    text: &'a str,
    /// Offsets of every `<` before `scanned`, ascending
    tags: Vec<usize>,
    scanned: usize,
}

impl<'a> SpanIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            tags: Vec::new(),
            scanned: 0,
        }
    }

    /// Whether `pos` sits inside an emitted span
    pub fn inside_span(&mut self, pos: usize) -> bool {
        let known = self.tags.partition_point(|&p| p < pos);
        let next = match self.tags.get(known) {
            Some(&p) => Some(p),
            None => self.scan_to(pos),
        };
        next.is_some_and(|p| self.text[p..].starts_with(CLOSE_TAG))
    }

    /// Bytes examined so far
    pub fn scanned(&self) -> usize {
        self.scanned
    }

    /// Extend the scan until a `<` at or after `pos` is found
    fn scan_to(&mut self, pos: usize) -> Option<usize> {
        while self.scanned < self.text.len() {
            match self.text[self.scanned..].find('<') {
                Some(offset) => {
                    let tag = self.scanned + offset;
                    self.tags.push(tag);
                    self.scanned = tag + 1;
                    if tag >= pos {
                        return Some(tag);
                    }
                }
                None => self.scanned = self.text.len(),
            }
        }
        None
    }
}

/// A single ordered pass
///
/// If the pattern has a first capture group, only that group is tagged and
/// the surrounding context of the match stays untagged (used to leave the
/// `(` of a call site untagged).
pub struct PassRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Category assigned to matches
    pub category: Category,
    /// Reject matches that fall inside an already emitted span
    pub guarded: bool,
}

impl PassRule {
    /// Create an unguarded pass
    pub fn new(name: &str, pattern: &str, category: Category) -> Option<Self> {
        match Regex::new(pattern) {
            Ok(regex) => Some(Self {
                name: name.to_string(),
                pattern: regex,
                category,
                guarded: false,
            }),
            Err(err) => {
                tracing::error!(rule = name, %err, "invalid highlight pattern");
                None
            }
        }
    }

    /// Create a pass with the non-overlap guard
    pub fn guarded(name: &str, pattern: &str, category: Category) -> Option<Self> {
        let mut rule = Self::new(name, pattern, category)?;
        rule.guarded = true;
        Some(rule)
    }

    /// Apply this pass to the whole text
    pub fn apply(&self, text: &str) -> String {
        let open = open_tag(self.category);
        let mut out = String::with_capacity(text.len() + text.len() / 4);
        let mut copied = 0;
        let mut pos = 0;
        let mut tagged = 0usize;
        let mut spans = SpanIndex::new(text);

        while pos <= text.len() {
            let Some(caps) = self.pattern.captures_at(text, pos) else {
                break;
            };
            let (start, end) = whole_match(&caps);

            if start == end || (self.guarded && spans.inside_span(end)) {
                // Lookahead-style rejection: retry one character further on
                pos = next_char(text, start);
                continue;
            }

            let target = caps.get(1).map_or((start, end), |m| (m.start(), m.end()));
            out.push_str(&text[copied..target.0]);
            out.push_str(&open);
            out.push_str(&text[target.0..target.1]);
            out.push_str(CLOSE_TAG);
            // Resume at the group end so trailing context can lead the next match
            copied = target.1;
            pos = target.1;
            tagged += 1;
        }

        out.push_str(&text[copied..]);
        tracing::trace!(rule = %self.name, tagged, "pass applied");
        out
    }
}

fn whole_match(caps: &Captures<'_>) -> (usize, usize) {
    caps.get(0).map_or((0, 0), |m| (m.start(), m.end()))
}

/// Byte offset of the character after the one at `pos`
fn next_char(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| pos + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_tags_every_match() {
        let rule = PassRule::new("number", r"\b\d+\b", Category::Number).unwrap();
        assert_eq!(
            rule.apply("a 1 b 22"),
            r#"a <span class="number">1</span> b <span class="number">22</span>"#
        );
        assert_eq!(rule.apply("no numbers"), "no numbers");
        assert_eq!(rule.apply(""), "");
    }

    #[test]
    fn test_capture_group_limits_tag() {
        let rule = PassRule::new("call", r"\b([A-Za-z_]\w*)\(", Category::FunctionName).unwrap();
        assert_eq!(
            rule.apply("run(x)"),
            r#"<span class="function-name">run</span>(x)"#
        );
    }

    #[test]
    fn test_context_shared_between_matches() {
        let pattern = r"(?:^|[^@\w])([A-Za-z_]\w*)\(";
        let rule = PassRule::new("call", pattern, Category::FunctionName).unwrap();
        assert_eq!(
            rule.apply("f(g(x))"),
            r#"<span class="function-name">f</span>(<span class="function-name">g</span>(x))"#
        );
    }

    #[test]
    fn test_inside_span() {
        let text = r#"a <span class="string">b</span> c"#;
        let mut spans = SpanIndex::new(text);
        assert!(inside_span_slow(text, text.find("class").unwrap()));
        assert!(spans.inside_span(text.find("class").unwrap()));
        assert!(spans.inside_span(text.find('b').unwrap()));
        assert!(!spans.inside_span(0));
        assert!(!spans.inside_span(text.len() - 1));
        assert!(!spans.inside_span(text.len()));
    }

    /// Reference answer: rescan from `pos` every time
    fn inside_span_slow(text: &str, pos: usize) -> bool {
        match text[pos..].find('<') {
            Some(offset) => text[pos + offset..].starts_with(CLOSE_TAG),
            None => false,
        }
    }

    #[test]
    fn test_span_index_matches_rescan_in_any_order() {
        let text = r#"x <span class="comment">ab</span> y <span class="number">1</span>z"#;
        let mut spans = SpanIndex::new(text);
        let mut positions: Vec<usize> = (0..=text.len()).collect();
        // Forward, then backward, then forward again
        positions.extend((0..=text.len()).rev());
        positions.extend(0..=text.len());
        for pos in positions {
            assert_eq!(spans.inside_span(pos), inside_span_slow(text, pos), "at {}", pos);
        }
    }

    #[test]
    fn test_span_index_scans_each_byte_once() {
        // Long untagged stretch with a match at every other byte
        let text = format!("{}<span class=\"comment\">9</span>", "1 ".repeat(20_000));
        let mut spans = SpanIndex::new(&text);
        for pos in (0..text.len()).step_by(2) {
            spans.inside_span(pos);
        }
        assert!(spans.scanned() <= text.len());
    }

    #[test]
    fn test_guarded_pass_on_long_input() {
        let rule = PassRule::guarded("number", r"\b\d+\b", Category::Number).unwrap();
        let text = "1 ".repeat(50_000);
        let out = rule.apply(&text);
        assert_eq!(out.matches(CLOSE_TAG).count(), 50_000);
    }

    #[test]
    fn test_guard_skips_tagged_text() {
        let rule = PassRule::guarded("keyword", r"\b(return)\b", Category::Keyword).unwrap();
        let text = r#"return <span class="string">return</span> return"#;
        assert_eq!(
            rule.apply(text),
            concat!(
                r#"<span class="keyword">return</span> "#,
                r#"<span class="string">return</span> "#,
                r#"<span class="keyword">return</span>"#
            )
        );
    }

    #[test]
    fn test_guard_resumes_after_rejected_start() {
        // "12" is rejected, the retry at "2" is rejected too, "3" is free
        let rule = PassRule::guarded("digits", r"\d+", Category::Keyword).unwrap();
        assert_eq!(
            rule.apply(r#"<span class="number">12</span> 3"#),
            r#"<span class="number">12</span> <span class="keyword">3</span>"#
        );
    }

    #[test]
    fn test_unguarded_pass_ignores_spans() {
        let rule = PassRule::new("number", r"\b\d+\b", Category::Number).unwrap();
        assert_eq!(
            rule.apply(r#"<span class="comment">7</span>"#),
            r#"<span class="comment"><span class="number">7</span></span>"#
        );
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PassRule::new("broken", r"(unclosed", Category::Comment).is_none());
    }
}
