//! Bare URL auto-linking.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `http://` or `https://` followed by characters that cannot end a URL in
/// running text: whitespace and `<>"{}|\^` plus backtick and brackets.
static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s<>"{}|\\^`\[\]]+"#).expect("URL pattern is valid")
});

/// Wraps every bare URL in an anchor opening a new tab.
///
/// Runs after emphasis substitution, so a URL stops at the first tag the
/// earlier passes inserted. The matched text is used verbatim for both the
/// `href` value and the link text; it is expected to be escaped already.
///
/// # Arguments
///
/// * `text`: Escaped HTML text
///
/// # Returns
///
/// Text with `<a href="URL" target="_blank">URL</a>` around each URL
pub fn link_urls(text: &str) -> String {
    URL.replace_all(text, |caps: &Captures<'_>| {
        let url = &caps[0];
        format!(r#"<a href="{url}" target="_blank">{url}</a>"#)
    })
    .into_owned()
}
