// File: crates/chart-core/src/raster.rs
// Summary: CPU raster surface creation, PNG encoding and file output shared by both chart paths.

use std::path::Path;

use skia_safe as skia;

use crate::error::{RenderError, RenderResult};

pub fn new_surface(width: i32, height: i32) -> RenderResult<skia::Surface> {
    skia::surfaces::raster_n32_premul((width, height)).ok_or(RenderError::Surface { width, height })
}

pub fn encode_png(surface: &mut skia::Surface) -> RenderResult<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image.encode_to_data(skia::EncodedImageFormat::PNG).ok_or(RenderError::Encode)?;
    Ok(data.as_bytes().to_vec())
}

/// Write `bytes` to `path`, creating missing parent directories.
pub fn write_png(path: &Path, bytes: &[u8]) -> RenderResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
