//! Language labels for the code badge
//!
//! The label never changes tokenization. It only names the language in
//! the header of a rendered code block.

use std::path::Path;

/// Known labels and the file extensions that map to them
const LANGUAGES: &[(&str, &[&str])] = &[
    ("typescript", &["ts", "tsx", "mts", "cts"]),
    ("javascript", &["js", "jsx", "mjs", "cjs"]),
    ("java", &["java"]),
    ("kotlin", &["kt", "kts"]),
    ("csharp", &["cs"]),
    ("cpp", &["cpp", "cc", "cxx", "hpp", "h"]),
    ("c", &["c"]),
    ("go", &["go"]),
    ("rust", &["rs"]),
    ("python", &["py", "pyw"]),
    ("swift", &["swift"]),
    ("dart", &["dart"]),
];

/// Detect a language label from a filename
pub fn detect_language(filename: &Path) -> Option<&'static str> {
    let ext = filename.extension()?.to_str()?.to_lowercase();
    LANGUAGES
        .iter()
        .find(|(_, exts)| exts.contains(&ext.as_str()))
        .map(|(name, _)| *name)
}

/// Text shown in the badge, e.g. `TypeScript` for `typescript`
pub fn badge_text(label: &str) -> String {
    match label.to_lowercase().as_str() {
        "typescript" | "ts" => "TypeScript".to_string(),
        "javascript" | "js" => "JavaScript".to_string(),
        "csharp" | "cs" => "C#".to_string(),
        "cpp" => "C++".to_string(),
        _ => {
            let mut chars = label.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}
