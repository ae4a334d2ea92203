//! Caption normalization.
//!
//! Post captions are noisy: emoji, hashtags, several paragraphs. Reports and
//! spreadsheet cells want one short plain-text line, so every caption that
//! enters the tool is reduced to its first sentence of printable ASCII.

use std::sync::OnceLock;

use regex::Regex;

/// Shortest leading run (at least two characters) ending in a terminator.
fn first_sentence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(.+?[.!?])").expect("valid first sentence regex"))
}

/// Any run of characters a cleaned caption may not contain.
fn disallowed_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9 ,.!?]+").expect("valid disallowed-chars regex"))
}

/// Whitespace as the original tooling understood it (ASCII whitespace plus
/// the information separators `\x1c`..`\x1f`).
fn is_caption_space(c: char) -> bool {
    matches!(c, '\t'..='\r' | '\x1c'..='\x1f' | ' ')
}

/// Normalizes a raw caption.
///
/// Applies the following transformations in order:
/// 1. `\n` and `\r` → space
/// 2. Non-ASCII characters dropped (not transliterated)
/// 3. Truncation to the first sentence ending in `.`, `!` or `?`
/// 4. Runs of characters outside `[A-Za-z0-9 ,.!?]` → single space
/// 5. Whitespace collapsed and trimmed
///
/// Never fails; the result may be empty.
pub fn normalize(raw: &str) -> String {
    let single_line = raw.replace(['\n', '\r'], " ");
    let ascii: String = single_line.chars().filter(char::is_ascii).collect();
    let sentence = first_sentence(&ascii);
    let allowed = disallowed_re().replace_all(sentence, " ");

    allowed
        .split(is_caption_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes an optional caption; a missing caption is the empty string.
pub fn normalize_opt(raw: Option<&str>) -> String {
    normalize(raw.unwrap_or_default())
}

/// Returns the first sentence of `text`, or all of it when there is none.
fn first_sentence(text: &str) -> &str {
    let text = text.trim_matches(is_caption_space);
    match first_sentence_re().find(text) {
        Some(m) => m.as_str(),
        None => text,
    }
}

/// Whether `text` is already in normalized form.
pub fn is_normalized(text: &str) -> bool {
    normalize(text) == text
}
