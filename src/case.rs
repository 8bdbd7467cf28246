//! Case conversion for path tokens: `morning-dua` (URL form) -> `Morning Dua` (stored display name).

/// Upper-case the first character of a word, leaving the rest untouched.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Convert a hyphenated path token to the display name it is stored under.
/// e.g. "morning-dua" -> "Morning Dua", "a-b-c" -> "A B C".
/// Words are joined with one space each; empty words (from "a--b") are kept as empty.
pub fn token_to_display_name(token: &str) -> String {
    token
        .split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}
