//! Text cleanup for raw feed fields.

use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Strip tag-like markup and collapse whitespace.
///
/// Every `<...>` run is replaced by a single space, then any whitespace run
/// becomes one space and the ends are trimmed. Unbalanced brackets that do not
/// form a tag (`a < b`, `<>`) are left as literal text.
pub fn clean(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let without_tags = TAG.replace_all(text, " ");
    WHITESPACE.replace_all(&without_tags, " ").trim().to_string()
}

/// `clean` for a field that may be absent; absence reads as empty.
pub fn clean_field(field: Option<&str>) -> String {
    field.map(clean).unwrap_or_default()
}

/// Keep at most `max_chars` characters from the front of `text`.
///
/// Counts chars rather than bytes so multi-byte text is never split mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
