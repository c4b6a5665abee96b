use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{FiligreeError, FiligreeResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use crate::render::FrameRGBA;

/// Write `frame` as a straight-alpha PNG, creating missing parent directories.
#[tracing::instrument(skip(frame), fields(width = frame.width, height = frame.height))]
pub fn write_png(frame: &FrameRGBA, path: &Path) -> FiligreeResult<()> {
    let expected = frame.width as usize * frame.height as usize * 4;
    if frame.data.len() != expected {
        return Err(FiligreeError::render(format!(
            "frame has {} bytes, expected {expected}",
            frame.data.len()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let mut data = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut data);
    }
    image::save_buffer_with_format(
        path,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;

    tracing::debug!(path = %path.display(), "wrote png");
    Ok(())
}
