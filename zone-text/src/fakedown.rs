//! Fakedown: chat shorthand for animated styles.
//!
//! `##shake##`, `~~wave~~` and `==rainbow==` are rewritten to
//! `{+shk}shake{-shk}`, `{+wvy}wave{-wvy}` and `{+rbw}rainbow{-rbw}`.

/// Marker → style tag, applied in this order.
pub const FAKEDOWN_TAGS: [(&str, &str); 3] = [("##", "shk"), ("~~", "wvy"), ("==", "rbw")];

/// Rewrite every `marker body marker` to `{+tag}body{-tag}`. The body
/// must be non-empty and contain none of the marker's characters.
/// Matches are found left to right and never overlap.
pub fn fakedown_to_tag(text: &str, marker: &str, tag: &str) -> String {
    if marker.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        if let Some(body) = rest.strip_prefix(marker) {
            let len = body.find(|c: char| marker.contains(c)).unwrap_or(body.len());
            if len > 0 && body[len..].starts_with(marker) {
                out.push_str("{+");
                out.push_str(tag);
                out.push('}');
                out.push_str(&body[..len]);
                out.push_str("{-");
                out.push_str(tag);
                out.push('}');
                rest = &body[len + marker.len()..];
                continue;
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}

/// Apply every fakedown marker to `text`.
pub fn parse_fakedown(text: &str) -> String {
    FAKEDOWN_TAGS
        .iter()
        .fold(text.to_string(), |text, (marker, tag)| fakedown_to_tag(&text, marker, tag))
}
