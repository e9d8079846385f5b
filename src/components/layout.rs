//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::assets::PREVIEW_CSS;

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, charset and viewport configuration, the inlined
/// preview stylesheet and a footer, while the caller provides page
/// specific body content.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - adtext" }
                style { (PreEscaped(PREVIEW_CSS)) }
            }
            body {
                div class="container" {
                    (body)
                }
                footer {
                    p { "Rendered by adtext" }
                }
            }
        }
    }
}
