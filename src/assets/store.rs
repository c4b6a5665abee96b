use std::path::Path;
use std::sync::Arc;

use crate::assets::decode::decode_motif_source;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{FiligreeError, FiligreeResult};
use crate::foundation::math::mul_div255_u8;

/// Edge length used when a motif source is an SVG and has to be rasterized up front.
pub const SVG_MOTIF_RASTER_DIM: u32 = 512;

/// Decoded raster, premultiplied RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8, row-major, tightly packed.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl PreparedImage {
    /// Multiply every channel by `tint` (alpha is kept), like tinting a sprite with an ink color.
    pub fn tinted(&self, tint: Rgb8) -> PreparedImage {
        let mut out = self.rgba8_premul.as_ref().clone();
        for px in out.chunks_exact_mut(4) {
            px[0] = mul_div255_u8(u16::from(px[0]), u16::from(tint.r));
            px[1] = mul_div255_u8(u16::from(px[1]), u16::from(tint.g));
            px[2] = mul_div255_u8(u16::from(px[2]), u16::from(tint.b));
        }
        PreparedImage {
            width: self.width,
            height: self.height,
            rgba8_premul: Arc::new(out),
        }
    }
}

/// Asset slot of an image-based motif.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RasterSlot {
    /// Image behind the "Vintage Scroll" style.
    VintageScroll,
    /// Image behind the "Shape 13" style.
    Shape13,
}

/// Raster sources for the image-based motifs. A missing slot is "not ready", not an error.
#[derive(Clone, Debug, Default)]
pub struct MotifAssets {
    vintage_scroll: Option<PreparedImage>,
    shape13: Option<PreparedImage>,
}

impl MotifAssets {
    /// No assets loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load whichever sources are given. PNG/JPEG/... and SVG files are accepted.
    #[tracing::instrument]
    pub fn load_from_paths(
        vintage_scroll: Option<&Path>,
        shape13: Option<&Path>,
    ) -> FiligreeResult<Self> {
        let mut assets = Self::default();
        if let Some(p) = vintage_scroll {
            assets.insert(RasterSlot::VintageScroll, load_file(p)?);
        }
        if let Some(p) = shape13 {
            assets.insert(RasterSlot::Shape13, load_file(p)?);
        }
        Ok(assets)
    }

    /// Fill (or replace) a slot.
    pub fn insert(&mut self, slot: RasterSlot, image: PreparedImage) {
        *self.slot_mut(slot) = Some(image);
    }

    /// Image in a slot, if loaded.
    pub fn get(&self, slot: RasterSlot) -> Option<&PreparedImage> {
        match slot {
            RasterSlot::VintageScroll => self.vintage_scroll.as_ref(),
            RasterSlot::Shape13 => self.shape13.as_ref(),
        }
    }

    /// Pixel size of a loaded slot.
    pub fn dimensions(&self, slot: RasterSlot) -> Option<(u32, u32)> {
        self.get(slot).map(|img| (img.width, img.height))
    }

    fn slot_mut(&mut self, slot: RasterSlot) -> &mut Option<PreparedImage> {
        match slot {
            RasterSlot::VintageScroll => &mut self.vintage_scroll,
            RasterSlot::Shape13 => &mut self.shape13,
        }
    }
}

fn load_file(path: &Path) -> FiligreeResult<PreparedImage> {
    let bytes = std::fs::read(path).map_err(|e| {
        FiligreeError::asset(format!("failed to read motif asset '{}': {e}", path.display()))
    })?;
    let img = decode_motif_source(&bytes, SVG_MOTIF_RASTER_DIM).map_err(|e| {
        FiligreeError::asset(format!("failed to decode motif asset '{}': {e}", path.display()))
    })?;
    tracing::debug!(path = %path.display(), img.width, img.height, "loaded motif asset");
    Ok(img)
}
