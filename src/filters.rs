//! Template filters for ad text.
//!
//! Maud escapes every spliced string by default. Rendered ad text is
//! already escaped, so it is spliced through [`Markdown`], which writes the
//! HTML verbatim; [`PlainText`] strips the delimiters and keeps maud's
//! escaping. Text fields that may be absent go through [`markdown`] and
//! [`plaintext`], which treat `None` as empty text.

use maud::{Markup, PreEscaped, Render, html};

use crate::markdown::{render_to_html, strip_formatting};

/// Ad text rendered as HTML when spliced into a maud template.
#[derive(Debug, Clone, Copy)]
pub struct Markdown<'a>(pub &'a str);

impl Render for Markdown<'_> {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str(&render_to_html(self.0));
    }
}

/// Ad text with formatting removed, escaped when spliced.
#[derive(Debug, Clone, Copy)]
pub struct PlainText<'a>(pub &'a str);

impl Render for PlainText<'_> {
    fn render(&self) -> Markup {
        html! { (strip_formatting(self.0)) }
    }
}

/// Renders optional ad text as trusted markup.
pub fn markdown(text: Option<&str>) -> Markup {
    PreEscaped(text.map(render_to_html).unwrap_or_default())
}

/// Strips formatting from optional ad text.
pub fn plaintext(text: Option<&str>) -> String {
    text.map(strip_formatting).unwrap_or_default()
}
