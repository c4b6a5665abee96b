use crate::foundation::error::{FiligreeError, FiligreeResult};
use crate::style::params::AspectRatio;

/// Share of the viewport the canvas may occupy along each axis.
pub const VIEWPORT_FILL: f64 = 0.8;
/// Vertical stretch applied after fitting the ratio.
pub const HEIGHT_STRETCH: f64 = 1.2;

/// Space available to the canvas (a window, or an explicit export size).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Build a viewport.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Integer canvas size derived from a viewport and an aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CanvasGeometry {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl CanvasGeometry {
    /// Fit `ratio` (swapped when `flip`) into 80% of the viewport, then stretch the height by 20%.
    pub fn fit(viewport: Viewport, ratio: AspectRatio, flip: bool) -> FiligreeResult<Self> {
        let (mut rw, mut rh) = ratio.terms();
        if flip {
            std::mem::swap(&mut rw, &mut rh);
        }
        let (rw, rh) = (f64::from(rw), f64::from(rh));

        let max_w = viewport.width * VIEWPORT_FILL;
        let max_h = viewport.height * VIEWPORT_FILL;
        if !(max_w.is_finite() && max_h.is_finite()) || max_w <= 0.0 || max_h <= 0.0 {
            return Err(FiligreeError::validation(format!(
                "viewport {}x{} has no usable area",
                viewport.width, viewport.height
            )));
        }

        let (width, height) = if max_w / rw < max_h / rh {
            (max_w.floor(), (max_w * (rh / rw)).floor())
        } else {
            ((max_h * (rw / rh)).floor(), max_h.floor())
        };
        let height = (height * HEIGHT_STRETCH).floor();

        if width < 1.0 || height < 1.0 {
            return Err(FiligreeError::validation(format!(
                "viewport {}x{} is too small for a canvas",
                viewport.width, viewport.height
            )));
        }

        Ok(Self {
            width: width as u32,
            height: height as u32,
        })
    }

    /// Perimeter in canvas pixels.
    pub fn perimeter(self) -> f64 {
        2.0 * (f64::from(self.width) + f64::from(self.height))
    }
}
