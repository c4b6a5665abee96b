use std::f64::consts::{FRAC_PI_2, PI};

use crate::animation::scroll::ScrollState;
use crate::layout::geometry::CanvasGeometry;
use crate::style::params::BorderStyleParams;

/// Default supersampling factor; layout runs in the coordinates of the offscreen buffer.
pub const DEFAULT_SCALE: f64 = 2.0;

/// Amplitude (radians) of the rotation shimmer applied while scrolling.
pub const SHIMMER_AMPLITUDE: f64 = 0.1;

/// Side of the canvas a motif sits on, in traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Edge {
    /// Left to right along the top.
    Top,
    /// Top to bottom along the right side.
    Right,
    /// Right to left along the bottom.
    Bottom,
    /// Bottom to top along the left side.
    Left,
}

impl Edge {
    /// Edges in the order the layout walks them.
    pub const ORDER: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Rotation that turns the motif's "up" outward.
    pub fn base_rotation(self) -> f64 {
        match self {
            Edge::Top => 0.0,
            Edge::Right => FRAC_PI_2,
            Edge::Bottom => PI,
            Edge::Left => 3.0 * FRAC_PI_2,
        }
    }

    fn index(self) -> usize {
        match self {
            Edge::Top => 0,
            Edge::Right => 1,
            Edge::Bottom => 2,
            Edge::Left => 3,
        }
    }
}

/// One motif instance, in (supersampled) buffer pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Placement {
    /// Ring index, 0 = outermost.
    pub layer: u32,
    /// Edge the motif belongs to.
    pub edge: Edge,
    /// Motif origin x.
    pub x: i32,
    /// Motif origin y.
    pub y: i32,
    /// Total rotation in radians (edge rotation plus shimmer).
    pub rotation: f64,
    /// Motif size.
    pub size: u32,
}

/// Bookkeeping for one ring, exposed so callers can see budget truncation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LayerSummary {
    /// Ring index.
    pub layer: u32,
    /// Inset of the ring from the buffer edge.
    pub border_pos: f64,
    /// Distance between consecutive motif origins.
    pub step: f64,
    /// Motif budget shared by all four edges of this ring.
    pub budget: u32,
    /// Motifs each edge wanted, indexed top/right/bottom/left.
    pub wanted_per_edge: [u32; 4],
    /// Motifs each edge actually received.
    pub placed_per_edge: [u32; 4],
}

impl LayerSummary {
    /// Whether the shared budget cut any edge short.
    pub fn truncated(&self) -> bool {
        self.wanted_per_edge != self.placed_per_edge
    }
}

/// Numeric inputs of one layout pass, possibly carrying animated values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutInputs {
    /// Inset of the outermost ring, canvas pixels.
    pub border_width: f64,
    /// Motif size, canvas pixels.
    pub element_size: f64,
    /// Gap between motifs, canvas pixels.
    pub element_spacing: f64,
    /// Ring count.
    pub border_layers: u32,
    /// Buffer pixels per canvas pixel.
    pub scale: f64,
    /// Scroll offset and shimmer clock, when scrolling is active.
    pub scroll: Option<ScrollState>,
}

impl LayoutInputs {
    /// Inputs for `params`, with the scroll state attached only when scrolling is enabled.
    pub fn from_params(params: &BorderStyleParams, scale: f64, scroll: ScrollState) -> Self {
        Self {
            border_width: params.border_width,
            element_size: params.element_size,
            element_spacing: params.element_spacing,
            border_layers: params.border_layers,
            scale,
            scroll: params.animation.scroll.then_some(scroll),
        }
    }
}

/// Every placement of one redraw, in traversal order, plus per-ring summaries.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct BorderLayout {
    /// Placements in layer order, then top/right/bottom/left, then along the edge.
    pub placements: Vec<Placement>,
    /// One entry per ring.
    pub layers: Vec<LayerSummary>,
}

impl BorderLayout {
    /// Placements belonging to `layer` and `edge`.
    pub fn on_edge(&self, layer: u32, edge: Edge) -> impl Iterator<Item = &Placement> + '_ {
        self.placements
            .iter()
            .filter(move |p| p.layer == layer && p.edge == edge)
    }
}

/// Lay motifs out around the canvas perimeter.
///
/// Each ring is inset by `border_width + layer * (size + spacing)`. Every edge wants
/// `ceil(usable / step)` motifs, but all four edges of a ring draw from one budget of
/// `ceil(perimeter / step)` consumed in top, right, bottom, left order, so later edges may come up
/// short on elongated canvases. Coordinates are floored to whole buffer pixels.
///
/// Callers are expected to pass validated sizes; a non-positive step yields an empty layout.
#[tracing::instrument(skip(inputs), fields(layers = inputs.border_layers))]
pub fn layout_border(geometry: CanvasGeometry, inputs: &LayoutInputs) -> BorderLayout {
    let scale = inputs.scale;
    let step = (inputs.element_size + inputs.element_spacing) * scale;
    if !step.is_finite() || step <= 0.0 || !scale.is_finite() || scale <= 0.0 {
        tracing::warn!(step, scale, "non-positive motif step; nothing to lay out");
        return BorderLayout::default();
    }

    let w = f64::from(geometry.width) * scale;
    let h = f64::from(geometry.height) * scale;
    let budget = ceil_count(geometry.perimeter() * scale / step);
    let size = (inputs.element_size * scale).floor().max(0.0) as u32;
    let offset = inputs
        .scroll
        .map(|s| s.scroll_offset.rem_euclid(step))
        .unwrap_or(0.0);
    let shimmer = inputs
        .scroll
        .map(|s| (s.animation_time * 0.5).sin() * SHIMMER_AMPLITUDE)
        .unwrap_or(0.0);

    let mut out = BorderLayout::default();
    for layer in 0..inputs.border_layers {
        let layer_offset = f64::from(layer) * (inputs.element_size + inputs.element_spacing);
        let border_pos = (inputs.border_width + layer_offset) * scale;

        let across = ceil_count((w - 2.0 * border_pos) / step);
        let down = ceil_count((h - 2.0 * border_pos) / step);
        let wanted = [across, down, across, down];

        let mut placed = [0u32; 4];
        let mut remaining = budget;
        for edge in Edge::ORDER {
            let n = wanted[edge.index()].min(remaining);
            for i in 0..n {
                let along = f64::from(i) * step;
                let (x, y) = match edge {
                    Edge::Top => (border_pos + along - offset, border_pos),
                    Edge::Right => (w - border_pos, border_pos + along - offset),
                    Edge::Bottom => (w - border_pos - along + offset, h - border_pos),
                    Edge::Left => (border_pos, h - border_pos - along + offset),
                };
                out.placements.push(Placement {
                    layer,
                    edge,
                    x: x.floor() as i32,
                    y: y.floor() as i32,
                    rotation: edge.base_rotation() + shimmer,
                    size,
                });
            }
            placed[edge.index()] = n;
            remaining -= n;
        }

        let summary = LayerSummary {
            layer,
            border_pos,
            step,
            budget,
            wanted_per_edge: wanted,
            placed_per_edge: placed,
        };
        if summary.truncated() {
            tracing::debug!(layer, budget, ?wanted, ?placed, "ring truncated by shared budget");
        }
        out.layers.push(summary);
    }
    out
}

fn ceil_count(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.ceil().min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/border.rs"]
mod tests;
