//! Facebook-compatible ad text rendering.

mod assets;
pub mod components;
mod config;
pub mod filters;
pub mod markdown;

pub use assets::{PREVIEW_CSS, write_css_assets};
pub use components::preview::{ad_preview, preview_document};
pub use config::{Config, OutputMode};
pub use filters::{Markdown, PlainText};
pub use markdown::{read_ad_text, render_to_html, strip_formatting};
