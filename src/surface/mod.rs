//! Drawing surfaces the card renderers compose onto.
//!
//! Renderers are written against [`Surface`]; [`cpu::CpuSurface`] rasterizes
//! with `vello_cpu` and encodes PNG, [`record::RecordingSurface`] keeps the
//! draw operations for layout inspection.

pub mod cpu;
pub mod record;

use crate::foundation::core::{BezPath, CardKind, Rect, Rgba8};
use crate::foundation::error::CardResult;
use crate::assets::bitmap::Bitmap;
use crate::paint::Paint;
use crate::text::fonts::FontSpec;

/// Horizontal anchoring of a text draw relative to its `x`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Font, color and anchoring of a text draw.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextStyle {
    pub font: FontSpec,
    pub color: Rgba8,
    /// Which edge of the text `x` refers to.
    pub align: TextAlign,
}

impl TextStyle {
    /// Left-aligned text in `color`.
    pub fn new(font: FontSpec, color: impl Into<Rgba8>) -> Self {
        Self {
            font,
            color: color.into(),
            align: TextAlign::Left,
        }
    }

    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// Single-line text measurement in pixels.
pub trait TextMeasure {
    /// Advance width of `text` set in `font`.
    fn measure_text(&mut self, text: &str, font: &FontSpec) -> CardResult<f64>;
}

/// A fixed-size drawing target owned by exactly one renderer.
///
/// Coordinates are pixels with the origin at the top-left corner. Text is
/// positioned by the top of its line box.
pub trait Surface: TextMeasure {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width()), f64::from(self.height()))
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) -> CardResult<()>;

    fn fill_path(&mut self, path: &BezPath, paint: &Paint) -> CardResult<()>;

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba8) -> CardResult<()>;

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> CardResult<()>;

    /// Draw `bitmap` stretched into `dst`; parts outside the surface are clipped.
    fn draw_image(&mut self, bitmap: &Bitmap, dst: Rect) -> CardResult<()>;

    /// Encode the finished surface. PNG for raster surfaces.
    fn finish(self) -> CardResult<Vec<u8>>
    where
        Self: Sized;
}

/// Allocates one surface per render call.
pub trait SurfaceFactory: Send + Sync {
    type Surface: Surface;

    fn create(&self, kind: CardKind, width: u32, height: u32) -> CardResult<Self::Surface>;
}
