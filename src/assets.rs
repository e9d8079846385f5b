//! Bundled CSS assets

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Stylesheet for standalone ad previews.
pub const PREVIEW_CSS: &str = include_str!("../assets/preview.css");

/// Writes bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!(
            "Failed to create assets directory: {}",
            assets_dir.display()
        )
    })?;
    write_asset(assets_dir, "preview.css", PREVIEW_CSS)
}

fn write_asset(dir: &Path, name: &str, css: &str) -> Result<()> {
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
