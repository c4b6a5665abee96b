use std::sync::Arc;

use anyhow::Context;

use crate::assets::store::PreparedImage;
use crate::foundation::error::{FiligreeError, FiligreeResult};
use crate::foundation::math::premultiply_rgba8_in_place;

/// Largest raster edge produced when rasterizing SVG motif sources.
pub const MAX_SVG_RASTER_DIM: u32 = 4096;

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> FiligreeResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Parse SVG bytes into a `usvg` tree.
pub fn parse_svg(bytes: &[u8]) -> FiligreeResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize an SVG so its longer edge is `target_dim` pixels (clamped to
/// [`MAX_SVG_RASTER_DIM`]).
pub fn rasterize_svg(tree: &usvg::Tree, target_dim: u32) -> FiligreeResult<PreparedImage> {
    let size = tree.size();
    let (sw, sh) = (size.width(), size.height());
    if !(sw.is_finite() && sh.is_finite()) || sw <= 0.0 || sh <= 0.0 {
        return Err(FiligreeError::asset("svg has invalid width/height"));
    }

    let target = target_dim.clamp(1, MAX_SVG_RASTER_DIM) as f32;
    let k = target / sw.max(sh);
    let width = ((sw * k).round() as u32).max(1);
    let height = ((sh * k).round() as u32).max(1);

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| FiligreeError::asset("failed to allocate svg pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(
        width as f32 / sw,
        height as f32 / sh,
    );
    resvg::render(tree, xform, &mut pixmap.as_mut());

    // tiny-skia pixmaps are already premultiplied RGBA8.
    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(pixmap.data().to_vec()),
    })
}

/// Decode a motif source by sniffing for SVG markup, falling back to raster formats.
pub fn decode_motif_source(bytes: &[u8], svg_target_dim: u32) -> FiligreeResult<PreparedImage> {
    if looks_like_svg(bytes) {
        let tree = parse_svg(bytes)?;
        return rasterize_svg(&tree, svg_target_dim);
    }
    decode_image(bytes)
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(512)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
