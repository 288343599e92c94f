//! CLI command implementations

pub mod all;
pub mod grayscale;
pub mod illinify;
pub mod spotlight;
pub mod watermark;

use anyhow::{Context, Result};
use hslfx_core::HslaImage;
use std::path::Path;
use tracing::info;

/// Load image from path
pub fn load_image(path: &Path) -> Result<HslaImage> {
    let image = hslfx_io::read(path)
        .with_context(|| format!("Failed to load: {}", path.display()))?;
    info!(path = %path.display(), width = image.width(), height = image.height(), "Loaded");
    Ok(image)
}

/// Save image to path
pub fn save_image(path: &Path, image: &HslaImage) -> Result<()> {
    hslfx_io::write(path, image)
        .with_context(|| format!("Failed to save: {}", path.display()))?;
    info!(path = %path.display(), "Saved");
    Ok(())
}
