//! Facebook-compatible markdown rendering.
//!
//! Ad text is written with the small delimiter set Facebook's post editor
//! understands (`*`/`**` bold, `_`/`__` italic, `~` strikethrough). This
//! module turns that text into pre-escaped HTML for display, or strips the
//! delimiters for plain text previews and exports.
//!
//! Rendering is a fixed pipeline of independent passes:
//! escape, line breaks, emphasis, then URL auto-linking.

mod emphasis;
mod escape;
mod links;
mod renderer;

pub use emphasis::{Substitution, apply_emphasis};
pub use escape::{convert_line_breaks, escape_html};
pub use links::link_urls;
pub use renderer::{read_ad_text, render_to_html, strip_formatting};
