//! Path builders and recurring decorations shared by the card renderers.

use kurbo::Shape;

use crate::foundation::core::{BezPath, Point, Rect, Rgb};
use crate::foundation::error::CardResult;
use crate::paint::{ColorStop, Paint};
use crate::palette::CardPalette;
use crate::surface::{Surface, TextAlign, TextStyle};
use crate::text::fonts::FontSpec;

/// Default wordmark size in pixels.
pub const WATERMARK_SIZE_PX: f32 = 36.0;

/// Rounded rectangle path. `radius` is clamped to `0..=min(w, h) / 2`.
pub fn rounded_rect(rect: Rect, radius: f64) -> BezPath {
    let rect = rect.abs();
    let max_r = rect.width().min(rect.height()) / 2.0;
    let r = if radius.is_finite() {
        radius.clamp(0.0, max_r.max(0.0))
    } else {
        0.0
    };
    rect.to_rounded_rect(r).to_path(0.1)
}

/// Fully rounded ends (`radius = h / 2`).
pub fn pill(rect: Rect) -> BezPath {
    rounded_rect(rect, rect.height().abs() / 2.0)
}

/// Which corner an L-shaped bracket hugs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    BottomRight,
}

/// L-shaped bracket with its outer corner at `corner_pt`, arms of length `arm`.
pub fn corner_bracket(corner: Corner, corner_pt: Point, arm: f64, thickness: f64) -> BezPath {
    let (sx, sy) = match corner {
        Corner::TopLeft => (1.0, 1.0),
        Corner::BottomRight => (-1.0, -1.0),
    };
    let Point { x, y } = corner_pt;
    let mut p = BezPath::new();
    p.move_to((x, y));
    p.line_to((x + sx * arm, y));
    p.line_to((x + sx * arm, y + sy * thickness));
    p.line_to((x + sx * thickness, y + sy * thickness));
    p.line_to((x + sx * thickness, y + sy * arm));
    p.line_to((x, y + sy * arm));
    p.close_path();
    p
}

/// Horizontal primary-to-secondary gradient spanning the full card width.
pub fn accent_gradient(palette: &CardPalette, width: f64) -> Paint {
    Paint::linear(
        Point::new(0.0, 0.0),
        Point::new(width, 0.0),
        vec![
            ColorStop::new(0.0, palette.primary),
            ColorStop::new(1.0, palette.secondary),
        ],
    )
}

/// Full-width accent bar of the given height starting at `y`.
pub fn draw_accent_bar<S: Surface + ?Sized>(
    surface: &mut S,
    palette: &CardPalette,
    y: f64,
    height: f64,
) -> CardResult<()> {
    let w = f64::from(surface.width());
    surface.fill_rect(Rect::new(0.0, y, w, y + height), &accent_gradient(palette, w))
}

/// Placement and typography for [`draw_watermark`].
#[derive(Clone, Debug)]
pub struct WatermarkOpts<'a> {
    pub family: &'a str,
    /// Leading segment in the palette primary, trailing segment in white.
    pub parts: (&'a str, &'a str),
    pub size_px: f32,
    pub align: TextAlign,
}

impl<'a> WatermarkOpts<'a> {
    /// Left-aligned wordmark at the default 36 px.
    pub fn new(family: &'a str, parts: (&'a str, &'a str)) -> Self {
        Self {
            family,
            parts,
            size_px: WATERMARK_SIZE_PX,
            align: TextAlign::Left,
        }
    }

    pub fn size(mut self, size_px: f32) -> Self {
        self.size_px = size_px;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

/// Two-part wordmark: first segment in the palette primary, second in white.
///
/// `anchor` is the top of the text line; its x is interpreted per `opts.align`.
/// Returns the drawn width.
pub fn draw_watermark<S: Surface + ?Sized>(
    surface: &mut S,
    anchor: Point,
    palette: &CardPalette,
    opts: &WatermarkOpts<'_>,
) -> CardResult<f64> {
    let font = FontSpec::bold(opts.family, opts.size_px);
    let (head, tail) = opts.parts;
    let head_w = surface.measure_text(head, &font)?;
    let tail_w = surface.measure_text(tail, &font)?;
    let total = head_w + tail_w;
    let x0 = match opts.align {
        TextAlign::Left => anchor.x,
        TextAlign::Center => anchor.x - total / 2.0,
        TextAlign::Right => anchor.x - total,
    };

    surface.fill_text(
        head,
        x0,
        anchor.y,
        &TextStyle::new(font.clone(), palette.primary),
    )?;
    surface.fill_text(
        tail,
        x0 + head_w,
        anchor.y,
        &TextStyle::new(font, Rgb::WHITE),
    )?;
    Ok(total)
}

#[cfg(test)]
#[path = "../tests/unit/shapes.rs"]
mod tests;
