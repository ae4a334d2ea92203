//! Shortcode extraction from post URLs.

/// Path segments that precede a shortcode.
const POST_KINDS: &[&str] = &["p", "reel", "reels", "tv"];

/// Extracts the post shortcode from a link.
///
/// Prefers the segment after `/p/`, `/reel/`, `/reels/` or `/tv/`; otherwise
/// falls back to the last path segment. Query strings and fragments are
/// ignored. Returns `None` when the link has no usable path.
pub fn shortcode(link: &str) -> Option<String> {
    let link = link.trim();
    let without_query = link.split(['?', '#']).next().unwrap_or_default();
    let path = match without_query.find("://") {
        Some(pos) => {
            let rest = &without_query[pos + 3..];
            rest.find('/').map(|i| &rest[i..]).unwrap_or("")
        }
        None => without_query,
    };

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if let Some(idx) = segments.iter().position(|s| POST_KINDS.contains(s)) {
        return segments.get(idx + 1).map(|s| s.to_string());
    }
    segments.last().map(|s| s.to_string())
}
