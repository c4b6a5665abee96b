pub(crate) mod cpu;
pub(crate) mod export;

use crate::assets::store::MotifAssets;
use crate::layout::border::BorderLayout;
use crate::layout::geometry::CanvasGeometry;
use crate::style::palette::ColorScheme;
use crate::style::params::MotifStyle;

/// A rendered frame, RGBA8, row-major.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
    /// Whether color channels are premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA bytes of the pixel at `(x, y)`, if inside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Everything one redraw needs. Layout coordinates are in supersampled buffer pixels.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    /// Output canvas size.
    pub geometry: CanvasGeometry,
    /// Background and ink colors.
    pub scheme: ColorScheme,
    /// Motif placements.
    pub layout: &'a BorderLayout,
    /// Motif drawn at every placement.
    pub style: MotifStyle,
    /// Raster sources for the image-based styles.
    pub assets: &'a MotifAssets,
}
