//! HTML escaping and line break conversion.

/// Escapes HTML special characters.
///
/// Ampersands are replaced first so entity references produced by the
/// later replacements are not escaped twice. Newlines are left in place.
///
/// # Arguments
///
/// * `text`: Raw user text
///
/// # Returns
///
/// Text safe to embed in HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Replaces every newline with a `<br>` tag.
///
/// Consecutive newlines produce consecutive tags; nothing is collapsed.
pub fn convert_line_breaks(text: &str) -> String {
    text.replace('\n', "<br>")
}
