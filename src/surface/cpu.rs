use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

use kurbo::Shape;

use crate::assets::bitmap::{Bitmap, unpremultiply_rgba8_in_place};
use crate::foundation::core::{BezPath, CardKind, Rect, Rgba8};
use crate::foundation::error::{CardError, CardResult};
use crate::paint::{Paint, pixel_box, rasterize_premul};
use crate::surface::{Surface, SurfaceFactory, TextAlign, TextMeasure, TextStyle};
use crate::text::engine::TextLayoutEngine;
use crate::text::fonts::{FontBook, FontSpec};

const STROKE_TOLERANCE: f64 = 0.1;

/// Raster surface backed by a `vello_cpu` render context.
///
/// Gradients are rasterized into images covering the filled area. Text goes
/// through Parley with the faces of the [`FontBook`] the surface was created
/// with; drawing or measuring text with an empty book fails with
/// [`CardError::Font`].
pub struct CpuSurface {
    width: u32,
    height: u32,
    ctx: vello_cpu::RenderContext,
    text: TextLayoutEngine,
    fonts: HashMap<(u64, u32), vello_cpu::peniko::FontData>,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    pub fn new(width: u32, height: u32, fonts: &FontBook) -> CardResult<Self> {
        let (w, h) = dims_u16(width, height)?;
        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(w, h),
            text: TextLayoutEngine::new(fonts),
            fonts: HashMap::new(),
        })
    }

    fn ensure_fonts(&self) -> CardResult<()> {
        if self.text.has_fonts() {
            Ok(())
        } else {
            Err(CardError::font("no typeface registered"))
        }
    }

    fn reset_state(&mut self) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_blend_mode(vello_cpu::peniko::BlendMode::default());
    }

    /// Set the current paint for a fill covering `area`.
    ///
    /// Returns `false` when the area is entirely off-surface.
    fn set_fill_paint(&mut self, paint: &Paint, area: Rect) -> CardResult<bool> {
        self.reset_state();
        match paint {
            Paint::Solid(c) => {
                self.ctx.set_paint(color_to_cpu(*c));
                Ok(true)
            }
            Paint::Linear(_) | Paint::Radial(_) => {
                let Some((x0, y0, w, h)) = pixel_box(area, self.width, self.height) else {
                    return Ok(false);
                };
                let bytes = rasterize_premul(paint, x0, y0, w, h);
                let img = rgba_premul_to_image(&bytes, w, h)?;
                self.ctx.set_paint(img);
                self.ctx
                    .set_paint_transform(vello_cpu::kurbo::Affine::translate((
                        f64::from(x0),
                        f64::from(y0),
                    )));
                Ok(true)
            }
        }
    }
}

impl TextMeasure for CpuSurface {
    fn measure_text(&mut self, text: &str, font: &FontSpec) -> CardResult<f64> {
        self.ensure_fonts()?;
        self.text.measure(text, font)
    }
}

impl Surface for CpuSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> CardResult<()> {
        let rect = rect.abs();
        if self.set_fill_paint(paint, rect)? {
            self.ctx
                .fill_rect(&vello_cpu::kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y1));
        }
        Ok(())
    }

    fn fill_path(&mut self, path: &BezPath, paint: &Paint) -> CardResult<()> {
        if self.set_fill_paint(paint, path.bounding_box())? {
            self.ctx.fill_path(&bezpath_to_cpu(path));
        }
        Ok(())
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba8) -> CardResult<()> {
        if !width.is_finite() || width <= 0.0 {
            return Err(CardError::validation("stroke width must be finite and > 0"));
        }
        let outline = kurbo::stroke(
            path.iter(),
            &kurbo::Stroke::new(width),
            &kurbo::StrokeOpts::default(),
            STROKE_TOLERANCE,
        );
        self.fill_path(&outline, &Paint::Solid(color))
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> CardResult<()> {
        self.ensure_fonts()?;
        if text.is_empty() {
            return Ok(());
        }
        let layout = self
            .text
            .layout_line(text, &style.font, style.color.into())?;
        let w = f64::from(layout.full_width());
        let left = match style.align {
            TextAlign::Left => x,
            TextAlign::Center => x - w / 2.0,
            TextAlign::Right => x - w,
        };

        self.reset_state();
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::translate((left, y)));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let run_font = run.run().font();
                let font = self
                    .fonts
                    .entry((run_font.data.id(), run_font.index))
                    .or_insert_with(|| {
                        vello_cpu::peniko::FontData::new(
                            vello_cpu::peniko::Blob::from(run_font.data.data().to_vec()),
                            run_font.index,
                        )
                    })
                    .clone();
                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                // Layout space puts the line top at 0 and the baseline at `g.y`.
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }

    fn draw_image(&mut self, bitmap: &Bitmap, dst: Rect) -> CardResult<()> {
        let dst = dst.abs();
        if dst.width() <= 0.0 || dst.height() <= 0.0 {
            return Ok(());
        }
        let img = rgba_premul_to_image(&bitmap.rgba8_premul, bitmap.width, bitmap.height)?;
        let sx = dst.width() / f64::from(bitmap.width);
        let sy = dst.height() / f64::from(bitmap.height);

        self.reset_state();
        self.ctx.set_transform(
            vello_cpu::kurbo::Affine::translate((dst.x0, dst.y0))
                * vello_cpu::kurbo::Affine::scale_non_uniform(sx, sy),
        );
        self.ctx.set_paint(img);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(bitmap.width),
            f64::from(bitmap.height),
        ));
        Ok(())
    }

    fn finish(mut self) -> CardResult<Vec<u8>> {
        let (w, h) = dims_u16(self.width, self.height)?;
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        let mut rgba = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut rgba);
        encode_png(rgba, self.width, self.height)
    }
}

/// Creates [`CpuSurface`]s sharing one [`FontBook`].
#[derive(Clone, Debug, Default)]
pub struct CpuSurfaceFactory {
    fonts: Arc<FontBook>,
}

impl CpuSurfaceFactory {
    pub fn new(fonts: FontBook) -> Self {
        Self {
            fonts: Arc::new(fonts),
        }
    }

    pub fn fonts(&self) -> &FontBook {
        &self.fonts
    }
}

impl SurfaceFactory for CpuSurfaceFactory {
    type Surface = CpuSurface;

    fn create(&self, kind: CardKind, width: u32, height: u32) -> CardResult<CpuSurface> {
        tracing::trace!(%kind, width, height, "allocating cpu surface");
        CpuSurface::new(width, height, &self.fonts)
    }
}

/// Encode straight-alpha RGBA8 pixels as PNG.
pub fn encode_png(rgba: Vec<u8>, width: u32, height: u32) -> CardResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| CardError::encode("pixel buffer does not match dimensions"))?;
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .map_err(|e| CardError::encode(format!("png encode failed: {e}")))?;
    Ok(out)
}

fn dims_u16(width: u32, height: u32) -> CardResult<(u16, u16)> {
    if width == 0 || height == 0 {
        return Err(CardError::validation("surface dimensions must be > 0"));
    }
    let w: u16 = width
        .try_into()
        .map_err(|_| CardError::validation("surface width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CardError::validation("surface height exceeds u16"))?;
    Ok((w, h))
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(bytes: &[u8], width: u32, height: u32) -> CardResult<vello_cpu::Pixmap> {
    let (w, h) = dims_u16(width, height)?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(CardError::render("pixmap byte len mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| {
            vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]])
        })
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}

fn rgba_premul_to_image(bytes: &[u8], width: u32, height: u32) -> CardResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(bytes, width, height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/surface/cpu.rs"]
mod tests;
