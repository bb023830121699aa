//! The three card compositions.
//!
//! Renderers are synchronous: everything that may suspend (cover fetch, font
//! readiness) is resolved by [`crate::generate`] before a surface is allocated.
//! Each renderer paints background, decoration, text and watermark in that order.

pub mod cta;
pub mod hero;
pub mod summary;

use crate::assets::bitmap::Bitmap;
use crate::config::CardConfig;
use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::CardResult;
use crate::paint::{ColorStop, Paint};
use crate::palette::CardPalette;
use crate::post::ShareablePost;
use crate::shapes::{WatermarkOpts, draw_watermark};
use crate::surface::{Surface, TextAlign};

/// Outer padding shared by every card.
pub const PAD: f64 = 80.0;
/// Height of the accent gradient bars.
pub const ACCENT_BAR_H: f64 = 8.0;

/// Inputs every renderer reads.
#[derive(Clone, Copy, Debug)]
pub struct CardContext<'a> {
    pub post: &'a ShareablePost,
    pub palette: CardPalette,
    pub config: &'a CardConfig,
}

impl<'a> CardContext<'a> {
    pub fn new(post: &'a ShareablePost, palette: CardPalette, config: &'a CardConfig) -> Self {
        Self {
            post,
            palette,
            config,
        }
    }

    pub(crate) fn family(&self) -> &'a str {
        &self.config.font_family
    }

    pub(crate) fn wordmark(&self) -> (&'a str, &'a str) {
        (&self.config.wordmark.0, &self.config.wordmark.1)
    }
}

/// Destination rect that scales `w x h` to cover `bounds`, centered.
///
/// The result may extend past `bounds`; the surface clips it.
pub fn cover_rect(w: u32, h: u32, bounds: Rect) -> Rect {
    let (w, h) = (f64::from(w.max(1)), f64::from(h.max(1)));
    let scale = (bounds.width() / w).max(bounds.height() / h);
    let (dw, dh) = (w * scale, h * scale);
    let c = bounds.center();
    Rect::new(c.x - dw / 2.0, c.y - dh / 2.0, c.x + dw / 2.0, c.y + dh / 2.0)
}

pub(crate) fn fill_cover<S: Surface + ?Sized>(surface: &mut S, bitmap: &Bitmap) -> CardResult<()> {
    let dst = cover_rect(bitmap.width, bitmap.height, surface.bounds());
    surface.draw_image(bitmap, dst)
}

/// Two-stop linear gradient along `start -> end`.
pub(crate) fn two_stop(
    start: Point,
    end: Point,
    from: impl Into<Rgba8>,
    to: impl Into<Rgba8>,
) -> Paint {
    Paint::linear(
        start,
        end,
        vec![ColorStop::new(0.0, from), ColorStop::new(1.0, to)],
    )
}

/// Wordmark anchored at the bottom-right padding corner.
pub(crate) fn draw_corner_watermark<S: Surface + ?Sized>(
    surface: &mut S,
    cx: &CardContext<'_>,
) -> CardResult<f64> {
    let opts = WatermarkOpts::new(cx.family(), cx.wordmark()).align(TextAlign::Right);
    let anchor = Point::new(
        f64::from(surface.width()) - PAD,
        f64::from(surface.height()) - PAD - f64::from(opts.size_px),
    );
    draw_watermark(surface, anchor, &cx.palette, &opts)
}

#[cfg(test)]
#[path = "../../tests/unit/cards/mod.rs"]
mod tests;
