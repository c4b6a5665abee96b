//! Filigree generates decorative borders: rings of ornamental motifs laid around the edge of a
//! canvas, with optional scroll and oscillation animation.
//!
//! The usual flow:
//!
//! - Describe a border with [`BorderStyleParams`] (or draw one with [`randomize`])
//! - Create a [`BorderSession`] for a [`Viewport`]
//! - [`BorderSession::tick`] to animate, [`BorderSession::render_if_dirty`] to redraw, and
//!   [`BorderSession::export_png`] to save a frame
//!
//! A small symmetric pixel editor for sketching motifs lives in [`GridState`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

pub(crate) mod animation;
pub(crate) mod layout;
pub(crate) mod motif;
/// CPU rasterization and PNG export.
pub mod render;
/// Redraw state for a live border.
pub mod session;
pub(crate) mod style;
pub(crate) mod symmetry;

pub use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgb8};
pub use crate::foundation::error::{FiligreeError, FiligreeResult};
pub use crate::foundation::math::Rng64;

pub use crate::animation::oscillate::{Oscillation, PERIOD_MS, SPACING_SWEEP};
pub use crate::animation::scroll::{OFFSET_PER_TICK, ScrollState, TIME_PER_TICK};
pub use crate::animation::ticker::{DEFAULT_INTERVAL_MS, Ticker};
pub use crate::assets::decode::{decode_image, decode_motif_source, parse_svg, rasterize_svg};
pub use crate::assets::store::{MotifAssets, PreparedImage, RasterSlot};
pub use crate::layout::border::{
    BorderLayout, DEFAULT_SCALE, Edge, LayerSummary, LayoutInputs, Placement, layout_border,
};
pub use crate::layout::geometry::{CanvasGeometry, Viewport};
pub use crate::motif::{Motif, MotifPrim, letterbox};
pub use crate::render::cpu::CpuRenderer;
pub use crate::render::export::write_png;
pub use crate::render::{FrameRGBA, Scene};
pub use crate::session::{BorderSession, Redraw};
pub use crate::style::palette::{BACKGROUND_SWATCHES, ColorScheme, FOREGROUND_SWATCHES, Ink};
pub use crate::style::params::{
    AnimationFlags, AspectRatio, BORDER_LAYERS_RANGE, BORDER_WIDTH_RANGE, BorderStyleParams,
    ELEMENT_SIZE_RANGE, ELEMENT_SPACING_MAX, MotifStyle,
};
pub use crate::style::randomize::randomize;
pub use crate::symmetry::grid::{DEFAULT_GRID_SIZE, GRID_SIZE_RANGE, GridState, Symmetry, Tool};
