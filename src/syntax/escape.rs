//! Markup escaping
//!
//! The escape pass runs before any tagging, so every `<` left in the
//! output belongs to an emitted tag.

/// Characters replaced by the escape pass and their entities
pub const ENTITIES: [(char, &str); 6] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#x27;"),
    ('/', "&#x2F;"),
];

fn entity_for(ch: char) -> Option<&'static str> {
    ENTITIES.iter().find(|(c, _)| *c == ch).map(|(_, e)| *e)
}

/// Replace `& < > " ' /` with their entities
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match entity_for(ch) {
            Some(entity) => out.push_str(entity),
            None => out.push(ch),
        }
    }
    out
}

/// Decode the entities produced by [`escape`]
///
/// Any other `&` sequence is left untouched.
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        match ENTITIES.iter().find(|(_, e)| rest.starts_with(e)) {
            Some((ch, entity)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_six() {
        assert_eq!(
            escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;&#x2F;a&gt;"
        );
    }

    #[test]
    fn test_escape_leaves_other_text() {
        assert_eq!(escape("let x = 5; // ok"), "let x = 5; &#x2F;&#x2F; ok");
        assert_eq!(escape("héllo ✓"), "héllo ✓");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_unescape_inverts_escape() {
        let text = "if (a < b && c > d) { s = \"x/y\"; t = 'z'; }";
        assert_eq!(unescape(&escape(text)), text);
    }

    #[test]
    fn test_unescape_unknown_entity() {
        assert_eq!(unescape("&nbsp; & &amp"), "&nbsp; & &amp");
        assert_eq!(unescape("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_entities_have_no_bare_digit_runs() {
        // The number pass must never find a word-bounded digit run inside an entity
        let digits = regex::Regex::new(r"\b\d+\b").unwrap();
        for (_, entity) in ENTITIES {
            assert!(!digits.is_match(entity), "{}", entity);
        }
    }
}
