//! Redraw bookkeeping for one live border: parameters, canvas geometry, animation clocks and the
//! last rendered frame.

use std::path::Path;

use crate::animation::oscillate::Oscillation;
use crate::animation::scroll::ScrollState;
use crate::animation::ticker::Ticker;
use crate::assets::store::MotifAssets;
use crate::foundation::error::{FiligreeError, FiligreeResult};
use crate::layout::border::{BorderLayout, LayoutInputs, layout_border};
use crate::layout::geometry::{CanvasGeometry, Viewport};
use crate::render::cpu::CpuRenderer;
use crate::render::export::write_png;
use crate::render::{FrameRGBA, Scene};
use crate::style::params::BorderStyleParams;

/// Whether a change requires a new frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redraw {
    /// Something visible changed.
    Needed,
    /// Nothing changed.
    Skip,
}

impl Redraw {
    /// `true` for [`Redraw::Needed`].
    pub fn is_needed(self) -> bool {
        self == Redraw::Needed
    }

    fn from_changed(changed: bool) -> Self {
        if changed { Redraw::Needed } else { Redraw::Skip }
    }
}

/// A border being edited or animated.
pub struct BorderSession {
    params: BorderStyleParams,
    viewport: Viewport,
    geometry: CanvasGeometry,
    assets: MotifAssets,
    scroll: ScrollState,
    ticker: Ticker,
    oscillation: Option<Oscillation>,
    renderer: CpuRenderer,
    frame: Option<FrameRGBA>,
    dirty: bool,
}

impl BorderSession {
    /// Validate `params`, size the canvas for `viewport` and start dirty.
    pub fn new(
        params: BorderStyleParams,
        viewport: Viewport,
        assets: MotifAssets,
    ) -> FiligreeResult<Self> {
        params.validate()?;
        let geometry =
            CanvasGeometry::fit(viewport, params.aspect_ratio, params.flip_orientation)?;
        Ok(Self {
            params,
            viewport,
            geometry,
            assets,
            scroll: ScrollState::default(),
            ticker: Ticker::default(),
            oscillation: None,
            renderer: CpuRenderer::default(),
            frame: None,
            dirty: true,
        })
    }

    /// Swap in a renderer with a different supersampling factor.
    pub fn with_renderer(mut self, renderer: CpuRenderer) -> Self {
        self.renderer = renderer;
        self.dirty = true;
        self
    }

    /// Current parameters.
    pub fn params(&self) -> &BorderStyleParams {
        &self.params
    }

    /// Current canvas size.
    pub fn geometry(&self) -> CanvasGeometry {
        self.geometry
    }

    /// Current scroll animation state.
    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    /// Whether the last frame is stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Last rendered frame, if any.
    pub fn frame(&self) -> Option<&FrameRGBA> {
        self.frame.as_ref()
    }

    /// Apply `f` to a copy of the parameters and keep the result if it validates.
    ///
    /// On a validation error the session is left untouched.
    pub fn update_params(
        &mut self,
        f: impl FnOnce(&mut BorderStyleParams),
    ) -> FiligreeResult<Redraw> {
        let mut next = self.params.clone();
        f(&mut next);
        if next == self.params {
            return Ok(Redraw::Skip);
        }
        next.validate()?;

        if next.aspect_ratio != self.params.aspect_ratio
            || next.flip_orientation != self.params.flip_orientation
        {
            self.geometry =
                CanvasGeometry::fit(self.viewport, next.aspect_ratio, next.flip_orientation)?;
        }
        if !next.animation.oscillates() {
            self.oscillation = None;
        }
        self.params = next;
        self.dirty = true;
        Ok(Redraw::Needed)
    }

    /// Replace the motif assets, e.g. once an image finished loading.
    pub fn set_assets(&mut self, assets: MotifAssets) {
        self.assets = assets;
        self.renderer.clear_cache();
        self.dirty = true;
    }

    /// Refit the canvas to a new viewport.
    pub fn resize(&mut self, viewport: Viewport) -> FiligreeResult<Redraw> {
        let geometry = CanvasGeometry::fit(
            viewport,
            self.params.aspect_ratio,
            self.params.flip_orientation,
        )?;
        self.viewport = viewport;
        if geometry == self.geometry {
            return Ok(Redraw::Skip);
        }
        self.geometry = geometry;
        self.dirty = true;
        Ok(Redraw::Needed)
    }

    /// Advance the animations for a frame at `now_ms`.
    ///
    /// Scrolling steps at most once per ticker interval; oscillations are sampled every call.
    pub fn tick(&mut self, now_ms: u64) -> Redraw {
        let flags = self.params.animation;
        let mut changed = false;

        if flags.scroll && self.ticker.poll(now_ms) {
            self.scroll.advance();
            changed = true;
        }

        if flags.oscillates() {
            let osc = *self
                .oscillation
                .get_or_insert_with(|| Oscillation::starting_at(now_ms));
            let before = (
                self.params.element_size,
                self.params.element_spacing,
                self.params.border_layers,
            );
            osc.apply(&mut self.params, now_ms);
            let after = (
                self.params.element_size,
                self.params.element_spacing,
                self.params.border_layers,
            );
            changed |= before != after;
        } else {
            self.oscillation = None;
        }

        self.dirty |= changed;
        Redraw::from_changed(changed)
    }

    /// Placements for the current state, in supersampled buffer pixels.
    pub fn layout(&self) -> BorderLayout {
        let inputs = LayoutInputs::from_params(
            &self.params,
            f64::from(self.renderer.supersample()),
            self.scroll,
        );
        layout_border(self.geometry, &inputs)
    }

    /// Render unconditionally and clear the dirty flag.
    pub fn render(&mut self) -> FiligreeResult<&FrameRGBA> {
        let layout = self.layout();
        let scene = Scene {
            geometry: self.geometry,
            scheme: self.params.effective_colors(),
            layout: &layout,
            style: self.params.style,
            assets: &self.assets,
        };
        let frame = self.renderer.render(&scene)?;
        self.dirty = false;
        let frame: &FrameRGBA = self.frame.insert(frame);
        Ok(frame)
    }

    /// Render only when something changed since the last frame.
    pub fn render_if_dirty(&mut self) -> FiligreeResult<Option<&FrameRGBA>> {
        if !self.dirty {
            return Ok(None);
        }
        self.render().map(Some)
    }

    /// Write the current frame as PNG, rendering first if it is stale.
    pub fn export_png(&mut self, path: &Path) -> FiligreeResult<()> {
        if self.dirty || self.frame.is_none() {
            self.render()?;
        }
        match &self.frame {
            Some(frame) => write_png(frame, path),
            None => Err(FiligreeError::render("no frame to export")),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
