//! Motif renderers.
//!
//! Every [`MotifStyle`] maps to a pure function of the motif size (and, for the raster styles,
//! the loaded asset dimensions) that returns paint primitives centered on the local origin with
//! the motif's "up" pointing towards −y. The layout engine supplies position and rotation.

pub(crate) mod shapes;

use crate::assets::store::{MotifAssets, RasterSlot};
use crate::foundation::core::{BezPath, Rect};
use crate::style::palette::Ink;
use crate::style::params::MotifStyle;

/// One paint operation of a motif, in motif-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum MotifPrim {
    /// Fill a closed path (nonzero winding) with an ink role.
    Fill {
        /// Outline.
        path: BezPath,
        /// Paint role.
        ink: Ink,
    },
    /// Composite a raster asset, tinted with the foreground ink, into `rect`.
    Raster {
        /// Which asset.
        slot: RasterSlot,
        /// Destination box.
        rect: Rect,
    },
}

/// Paint primitives for one motif, in painter's order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Motif {
    /// Primitives, back to front.
    pub prims: Vec<MotifPrim>,
}

impl Motif {
    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.prims.is_empty()
    }

    /// Union of the primitive bounds, if any.
    pub fn bounds(&self) -> Option<Rect> {
        use kurbo::Shape;

        self.prims
            .iter()
            .map(|p| match p {
                MotifPrim::Fill { path, .. } => path.bounding_box(),
                MotifPrim::Raster { rect, .. } => *rect,
            })
            .reduce(|a, b| a.union(b))
    }

    fn fill(&mut self, path: BezPath, ink: Ink) {
        self.prims.push(MotifPrim::Fill { path, ink });
    }
}

impl MotifStyle {
    /// Build the primitives for one motif of `size` pixels.
    ///
    /// Raster styles return an empty motif while their asset is not loaded.
    pub fn build(self, size: f64, assets: &MotifAssets) -> Motif {
        match self {
            MotifStyle::FleurDeLis => shapes::fleur_de_lis(size),
            MotifStyle::Circles => shapes::concentric(size),
            MotifStyle::Flowers => shapes::flower(size),
            MotifStyle::Spirals => shapes::spiral(size),
            MotifStyle::Ornate => shapes::ornate(size),
            MotifStyle::Leaves => shapes::leaf(size),
            MotifStyle::Diamonds => shapes::diamond(size),
            MotifStyle::Scrolls => shapes::scroll(size),
            MotifStyle::RepeatingShape => shapes::rosette(size),
            MotifStyle::VintageBorder => shapes::vintage_star(size),
            MotifStyle::VintageScroll => raster(RasterSlot::VintageScroll, size, assets),
            MotifStyle::Shape13 => raster(RasterSlot::Shape13, size, assets),
        }
    }
}

fn raster(slot: RasterSlot, size: f64, assets: &MotifAssets) -> Motif {
    let Some((w, h)) = assets.dimensions(slot) else {
        tracing::debug!(?slot, "raster motif asset not loaded; skipping");
        return Motif::default();
    };
    Motif {
        prims: vec![MotifPrim::Raster {
            slot,
            rect: letterbox(w, h, size),
        }],
    }
}

/// Fit an image of `w × h` into a `size × size` box centered on the origin, keeping its aspect.
pub fn letterbox(w: u32, h: u32, size: f64) -> Rect {
    let aspect = f64::from(w.max(1)) / f64::from(h.max(1));
    let (mut dw, mut dh) = (size, size / aspect);
    if dh > size {
        dh = size;
        dw = size * aspect;
    }
    Rect::new(-dw / 2.0, -dh / 2.0, dw / 2.0, dh / 2.0)
}

#[cfg(test)]
#[path = "../../tests/unit/motif/mod.rs"]
mod tests;
