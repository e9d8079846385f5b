//! Reusable HTML components for ad previews
//!
//! Maud component functions that place rendered ad text into a complete
//! page. The layout owns the document skeleton; the preview module owns
//! the ad card itself.

pub mod layout;
pub mod preview;
