//! Word lists for the keyword and built-in type passes
//!
//! One generic vocabulary covers every sample language in the catalog
//! (TypeScript, JavaScript, Java and friends).

/// Control flow, declaration and modifier keywords
pub const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "break", "case", "catch", "class", "const", "continue",
    "default", "delete", "do", "else", "enum", "export", "extends", "final", "finally", "for",
    "from", "function", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "of", "package", "private", "protected", "public", "readonly", "return", "static",
    "super", "switch", "this", "throw", "throws", "try", "type", "typeof", "var", "void",
    "while", "yield",
];

/// Primitive type names, built-in objects and reserved literals
pub const TYPES: &[&str] = &[
    "string", "number", "boolean", "any", "unknown", "never", "object", "symbol", "bigint",
    "int", "long", "double", "float", "char", "byte", "short", "Array", "Map", "Set",
    "Promise", "Object", "String", "Number", "Boolean", "Error", "Date", "Record", "true",
    "false", "null", "undefined",
];

/// Build a whole-word alternation such as `\b(?:if|else)\b`
pub fn word_pattern(words: &[&str]) -> String {
    let alternatives: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    format!(r"\b(?:{})\b", alternatives.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabularies_disjoint() {
        for word in KEYWORDS {
            assert!(!TYPES.contains(word), "{} listed twice", word);
        }
    }

    #[test]
    fn test_word_pattern() {
        assert_eq!(word_pattern(&["if", "else"]), r"\b(?:if|else)\b");
        let re = regex::Regex::new(&word_pattern(KEYWORDS)).unwrap();
        assert!(re.is_match("return x"));
        assert!(!re.is_match("returned"));
        assert!(!re.is_match("iffy"));
    }
}
