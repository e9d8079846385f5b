//! Ad preview card

use maud::{Markup, html};

use super::layout::page_wrapper;
use crate::filters::{Markdown, PlainText};

/// Renders an ad card with formatted text and its plain text form.
///
/// The formatted section shows the text as it appears once posted; the
/// plain section shows what remains when formatting is unavailable, such
/// as in notification previews.
///
/// # Arguments
///
/// * `title`: Ad name shown as the card heading
/// * `text`: Ad text using the Facebook-compatible delimiter set
pub fn ad_preview(title: &str, text: &str) -> Markup {
    html! {
        article class="ad-card" {
            h1 class="ad-title" { (title) }
            div class="ad-text" { (Markdown(text)) }
            section class="ad-plain" {
                span class="ad-plain-label" { "Plain text" }
                pre { (PlainText(text)) }
            }
        }
    }
}

/// Renders a complete preview document for one ad.
pub fn preview_document(title: &str, text: &str) -> String {
    page_wrapper(title, ad_preview(title, text)).into_string()
}
