//! Ad text rendering entry points.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use super::{Substitution, apply_emphasis, convert_line_breaks, escape_html, link_urls};

/// Renders ad text to pre-escaped HTML.
///
/// Runs the fixed pipeline: HTML escaping, newline to `<br>`, emphasis
/// substitution (`**`, `*`, `__`, `_`, `~`), then URL auto-linking. The
/// only markup in the result is `<br>`, `<strong>`, `<em>`, `<del>` and
/// `<a href="..." target="_blank">`; everything taken from the input is
/// escaped. Callers must embed the result without escaping it again.
///
/// # Arguments
///
/// * `text`: Ad text using the Facebook-compatible delimiter set
///
/// # Returns
///
/// HTML fragment, empty for empty input
pub fn render_to_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let html = escape_html(text);
    let html = convert_line_breaks(&html);
    let html = apply_emphasis(&html, Substitution::Tagged);
    link_urls(&html)
}

/// Removes emphasis delimiters, leaving plain text.
///
/// Applies the same passes as [`render_to_html`] but keeps only the
/// content between delimiters. No escaping, line break conversion or
/// linking is done, so the result is suitable for previews and exports.
pub fn strip_formatting(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    apply_emphasis(text, Substitution::Bare)
}

/// Reads the ad text file at given path.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid UTF8
pub fn read_ad_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read ad text file: {}", path.display()))?;
    debug!(path = %path.display(), bytes = content.len(), "read ad text file");
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_input() {
        assert_eq!(render_to_html(""), "");
        assert_eq!(strip_formatting(""), "");
    }

    #[test]
    fn test_render_each_emphasis() {
        assert_eq!(render_to_html("**bold**"), "<strong>bold</strong>");
        assert_eq!(render_to_html("*bold*"), "<strong>bold</strong>");
        assert_eq!(render_to_html("__italic__"), "<em>italic</em>");
        assert_eq!(render_to_html("_italic_"), "<em>italic</em>");
        assert_eq!(render_to_html("~gone~"), "<del>gone</del>");
    }

    #[test]
    fn test_render_line_breaks() {
        assert_eq!(render_to_html("line1\nline2"), "line1<br>line2");
        assert_eq!(render_to_html("a\n\nb"), "a<br><br>b");
    }

    #[test]
    fn test_render_url() {
        // Arrange
        let text = "Visit https://example.com now";

        // Act
        let html = render_to_html(text);

        // Assert
        assert_eq!(
            html,
            r#"Visit <a href="https://example.com" target="_blank">https://example.com</a> now"#
        );
    }

    #[test]
    fn test_render_neutralizes_html() {
        assert_eq!(render_to_html("<script>"), "&lt;script&gt;");
        assert_eq!(
            render_to_html("<b>*x*</b>"),
            "&lt;b&gt;<strong>x</strong>&lt;/b&gt;"
        );
        assert_eq!(
            render_to_html(r#"Tom & Jerry's "show""#),
            "Tom &amp; Jerry&#39;s &quot;show&quot;"
        );
    }

    #[test]
    fn test_render_emphasis_spans_line_break() {
        // Newlines are already tags when emphasis runs
        assert_eq!(render_to_html("*a\nb*"), "<strong>a<br>b</strong>");
        assert_eq!(render_to_html("a **b\nc** d"), "a <strong>b<br>c</strong> d");
    }

    #[test]
    fn test_render_url_with_escaped_query() {
        assert_eq!(
            render_to_html("https://example.com/path?q=1&r=2"),
            r#"<a href="https://example.com/path?q=1&amp;r=2" target="_blank">https://example.com/path?q=1&amp;r=2</a>"#
        );
    }

    #[test]
    fn test_render_url_cut_by_emphasis() {
        assert_eq!(
            render_to_html("https://x.com/a_b_c"),
            r#"<a href="https://x.com/a" target="_blank">https://x.com/a</a><em>b</em>c"#
        );
        assert_eq!(
            render_to_html("https://ex.com/~user~/x"),
            r#"<a href="https://ex.com/" target="_blank">https://ex.com/</a><del>user</del>/x"#
        );
    }

    #[test]
    fn test_render_unmatched_asterisk_in_arithmetic() {
        assert_eq!(
            render_to_html("price: 5*2 = 10 *net*"),
            "price: 5<strong>2 = 10 </strong>net*"
        );
    }

    #[test]
    fn test_strip_formatting() {
        assert_eq!(strip_formatting("**bold** and _ital_"), "bold and ital");
        assert_eq!(strip_formatting("<b>*x*</b>"), "<b>x</b>");
        assert_eq!(strip_formatting("a\n\nb"), "a\n\nb");
        assert_eq!(
            strip_formatting("https://example.com/path?q=1&r=2"),
            "https://example.com/path?q=1&r=2"
        );
    }

    #[test]
    fn test_strip_formatting_is_idempotent() {
        let inputs = [
            "**bold** and _ital_",
            "*a* __b__ ~c~",
            "plain text",
            "~~",
            "**unclosed",
        ];

        for input in inputs {
            let once = strip_formatting(input);
            assert_eq!(strip_formatting(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_read_ad_text_then_render() -> Result<()> {
        // Arrange
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("ad.txt");
        std::fs::write(&path, "**Sale** today\nhttps://shop.example")?;

        // Act
        let html = render_to_html(&read_ad_text(&path)?);

        // Assert
        assert_eq!(
            html,
            r#"<strong>Sale</strong> today<br><a href="https://shop.example" target="_blank">https://shop.example</a>"#
        );
        Ok(())
    }

    #[test]
    fn test_read_ad_text_missing() {
        // Act
        let result = read_ad_text("/nonexistent/ad.txt");

        // Assert
        assert!(result.is_err());
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("/nonexistent/ad.txt"), "{}", message);
    }
}
