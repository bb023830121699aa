use crate::assets::bitmap::Bitmap;
use crate::foundation::core::{BezPath, CardKind, Rect, Rgba8};
use crate::foundation::error::{CardError, CardResult};
use crate::paint::Paint;
use crate::surface::{Surface, SurfaceFactory, TextAlign, TextMeasure, TextStyle};
use crate::text::fonts::FontSpec;

/// Advance of one character in em units, for every glyph.
pub const DEFAULT_ADVANCE_EM: f64 = 0.5;

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    FillRect {
        rect: [f64; 4],
        paint: Paint,
    },
    FillPath {
        bounds: [f64; 4],
        paint: Paint,
    },
    StrokePath {
        bounds: [f64; 4],
        width: f64,
        color: Rgba8,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        width: f64,
        style: TextStyle,
    },
    Image {
        dst: [f64; 4],
        width: u32,
        height: u32,
    },
}

fn rect_arr(r: Rect) -> [f64; 4] {
    [r.x0, r.y0, r.x1, r.y1]
}

/// Surface that records draw calls instead of rasterizing.
///
/// Text is measured with a fixed per-character advance, so layouts are
/// reproducible without any typeface. `finish` serializes the operations as JSON.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    advance_em: f64,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_advance(width, height, DEFAULT_ADVANCE_EM)
    }

    pub fn with_advance(width: u32, height: u32, advance_em: f64) -> Self {
        Self {
            width,
            height,
            advance_em,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Every text draw in order as `(text, x, y)`.
    pub fn texts(&self) -> Vec<(&str, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, x, y, .. } => Some((text.as_str(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    fn advance(&self, text: &str, font: &FontSpec) -> f64 {
        text.chars().count() as f64 * f64::from(font.size_px) * self.advance_em
    }
}

impl TextMeasure for RecordingSurface {
    fn measure_text(&mut self, text: &str, font: &FontSpec) -> CardResult<f64> {
        Ok(self.advance(text, font))
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> CardResult<()> {
        self.ops.push(DrawOp::FillRect {
            rect: rect_arr(rect),
            paint: paint.clone(),
        });
        Ok(())
    }

    fn fill_path(&mut self, path: &BezPath, paint: &Paint) -> CardResult<()> {
        use kurbo::Shape;
        self.ops.push(DrawOp::FillPath {
            bounds: rect_arr(path.bounding_box()),
            paint: paint.clone(),
        });
        Ok(())
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba8) -> CardResult<()> {
        use kurbo::Shape;
        self.ops.push(DrawOp::StrokePath {
            bounds: rect_arr(path.bounding_box()),
            width,
            color,
        });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> CardResult<()> {
        let width = self.advance(text, &style.font);
        let left = match style.align {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        };
        self.ops.push(DrawOp::Text {
            text: text.to_owned(),
            x: left,
            y,
            width,
            style: style.clone(),
        });
        Ok(())
    }

    fn draw_image(&mut self, bitmap: &Bitmap, dst: Rect) -> CardResult<()> {
        self.ops.push(DrawOp::Image {
            dst: rect_arr(dst),
            width: bitmap.width,
            height: bitmap.height,
        });
        Ok(())
    }

    fn finish(self) -> CardResult<Vec<u8>> {
        serde_json::to_vec_pretty(&self.ops)
            .map_err(|e| CardError::encode(format!("failed to serialize draw ops: {e}")))
    }
}

/// Creates [`RecordingSurface`]s with a shared advance ratio.
#[derive(Clone, Copy, Debug)]
pub struct RecordingSurfaceFactory {
    pub advance_em: f64,
}

impl Default for RecordingSurfaceFactory {
    fn default() -> Self {
        Self {
            advance_em: DEFAULT_ADVANCE_EM,
        }
    }
}

impl SurfaceFactory for RecordingSurfaceFactory {
    type Surface = RecordingSurface;

    fn create(&self, _kind: CardKind, width: u32, height: u32) -> CardResult<RecordingSurface> {
        Ok(RecordingSurface::with_advance(width, height, self.advance_em))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/record.rs"]
mod tests;
