use std::collections::HashMap;
use std::sync::Arc;

use crate::assets::store::{PreparedImage, RasterSlot};
use crate::foundation::core::{Affine, BezPath, Rgb8};
use crate::foundation::error::{FiligreeError, FiligreeResult};
use crate::layout::border::DEFAULT_SCALE;
use crate::motif::{Motif, MotifPrim};
use crate::render::{FrameRGBA, Scene};

/// Rasterizes scenes with `vello_cpu` into a supersampled buffer, then box-filters down to the
/// canvas size.
pub struct CpuRenderer {
    supersample: u32,
    tint_cache: HashMap<(RasterSlot, Rgb8), vello_cpu::Image>,
}

impl Default for CpuRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE as u32)
    }
}

impl CpuRenderer {
    /// Renderer drawing at `supersample` buffer pixels per canvas pixel (clamped to at least 1).
    pub fn new(supersample: u32) -> Self {
        Self {
            supersample: supersample.max(1),
            tint_cache: HashMap::new(),
        }
    }

    /// Buffer pixels per canvas pixel. Layouts fed to [`CpuRenderer::render`] must use this scale.
    pub fn supersample(&self) -> u32 {
        self.supersample
    }

    /// Drop cached tinted rasters, e.g. after motif assets were replaced.
    pub fn clear_cache(&mut self) {
        self.tint_cache.clear();
    }

    /// Draw the background, then every placement's motif, and return the canvas-sized frame.
    #[tracing::instrument(skip(self, scene), fields(
        width = scene.geometry.width,
        height = scene.geometry.height,
        placements = scene.layout.placements.len(),
    ))]
    pub fn render(&mut self, scene: &Scene<'_>) -> FiligreeResult<FrameRGBA> {
        let k = self.supersample;
        let buf_w = buffer_dim(scene.geometry.width, k, "width")?;
        let buf_h = buffer_dim(scene.geometry.height, k, "height")?;

        let mut ctx = vello_cpu::RenderContext::new(buf_w, buf_h);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color_to_cpu(scene.scheme.background));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(buf_w),
            f64::from(buf_h),
        ));

        let mut motifs: HashMap<u32, Motif> = HashMap::new();
        for placement in &scene.layout.placements {
            let motif = motifs
                .entry(placement.size)
                .or_insert_with(|| scene.style.build(f64::from(placement.size), scene.assets));
            if motif.is_empty() {
                continue;
            }
            let local = Affine::translate((f64::from(placement.x), f64::from(placement.y)))
                * Affine::rotate(placement.rotation);
            for prim in &motif.prims {
                self.draw_prim(&mut ctx, scene, local, prim)?;
            }
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(buf_w, buf_h);
        ctx.render_to_pixmap(&mut pixmap);

        let data = downsample_box(
            pixmap.data_as_u8_slice(),
            u32::from(buf_w),
            u32::from(buf_h),
            k,
        );
        Ok(FrameRGBA {
            width: scene.geometry.width,
            height: scene.geometry.height,
            data,
            premultiplied: true,
        })
    }

    fn draw_prim(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        scene: &Scene<'_>,
        local: Affine,
        prim: &MotifPrim,
    ) -> FiligreeResult<()> {
        match prim {
            MotifPrim::Fill { path, ink } => {
                ctx.set_transform(affine_to_cpu(local));
                ctx.set_paint(color_to_cpu(scene.scheme.ink(*ink)));
                ctx.fill_path(&bezpath_to_cpu(path));
            }
            MotifPrim::Raster { slot, rect } => {
                let Some(image) = scene.assets.get(*slot) else {
                    tracing::debug!(?slot, "raster asset vanished between build and draw");
                    return Ok(());
                };
                let (w, h) = (f64::from(image.width), f64::from(image.height));
                let paint = self.tinted_paint(*slot, image, scene.scheme.foreground)?;
                let xform = local
                    * Affine::translate((rect.x0, rect.y0))
                    * Affine::scale_non_uniform(rect.width() / w, rect.height() / h);
                ctx.set_transform(affine_to_cpu(xform));
                ctx.set_paint(paint);
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
            }
        }
        Ok(())
    }

    fn tinted_paint(
        &mut self,
        slot: RasterSlot,
        image: &PreparedImage,
        tint: Rgb8,
    ) -> FiligreeResult<vello_cpu::Image> {
        if let Some(paint) = self.tint_cache.get(&(slot, tint)) {
            return Ok(paint.clone());
        }

        let tinted = image.tinted(tint);
        let pixmap =
            pixmap_from_premul_bytes(tinted.rgba8_premul.as_slice(), tinted.width, tinted.height)?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };
        self.tint_cache.insert((slot, tint), paint.clone());
        Ok(paint)
    }
}

fn buffer_dim(canvas: u32, k: u32, what: &str) -> FiligreeResult<u16> {
    canvas
        .checked_mul(k)
        .filter(|&d| d > 0)
        .and_then(|d| u16::try_from(d).ok())
        .ok_or_else(|| {
            FiligreeError::render(format!(
                "supersampled {what} {canvas}x{k} is empty or exceeds u16"
            ))
        })
}

fn color_to_cpu(c: Rgb8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: crate::foundation::core::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> FiligreeResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| FiligreeError::render("motif image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| FiligreeError::render("motif image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(FiligreeError::render("motif image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let pixels = rgba8_premul
        .chunks_exact(4)
        .map(|px| {
            may_have_opacities |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect();

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

/// Average each `k × k` block of a `src_w × src_h` RGBA8 buffer into one pixel.
///
/// `src_w` and `src_h` must be multiples of `k`.
pub(crate) fn downsample_box(src: &[u8], src_w: u32, src_h: u32, k: u32) -> Vec<u8> {
    if k <= 1 {
        return src.to_vec();
    }
    let (dst_w, dst_h) = ((src_w / k) as usize, (src_h / k) as usize);
    let (k, src_w) = (k as usize, src_w as usize);
    let n = (k * k) as u32;

    let mut out = vec![0u8; dst_w * dst_h * 4];
    for dy in 0..dst_h {
        for dx in 0..dst_w {
            let mut acc = [0u32; 4];
            for sy in dy * k..(dy + 1) * k {
                let row = sy * src_w * 4;
                for sx in dx * k..(dx + 1) * k {
                    let i = row + sx * 4;
                    for (a, &c) in acc.iter_mut().zip(&src[i..i + 4]) {
                        *a += u32::from(c);
                    }
                }
            }
            let o = (dy * dst_w + dx) * 4;
            for (dst, a) in out[o..o + 4].iter_mut().zip(acc) {
                *dst = ((a + n / 2) / n) as u8;
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
