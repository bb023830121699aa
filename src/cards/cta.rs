use crate::assets::bitmap::Bitmap;
use crate::cards::{ACCENT_BAR_H, CardContext, PAD, two_stop};
use crate::foundation::core::{Point, Rect, Rgb, Rgba8};
use crate::foundation::error::CardResult;
use crate::paint::{ColorStop, Paint};
use crate::qr::QrStyle;
use crate::shapes::{WatermarkOpts, draw_accent_bar, draw_watermark, rounded_rect};
use crate::surface::{Surface, TextAlign, TextStyle};
use crate::text::fonts::{FontSpec, Weight};
use crate::text::wrap::{break_unspaced, draw_lines, draw_wrapped};

pub const WORDMARK_SIZE_PX: f32 = 96.0;
/// Edge of the drawn QR code; the encoded bitmap is scaled into it.
pub const QR_DRAW_PX: f64 = 400.0;
const QR_BOX_PAD: f64 = 40.0;
const QR_BOX_TOP: f64 = 360.0;
const QR_BOX_RADIUS: f64 = 32.0;
const FALLBACK_URL_PX: f32 = 36.0;
const FALLBACK_LINE_HEIGHT: f64 = 48.0;
const FALLBACK_MAX_LINES: usize = 6;

/// "Scan to read" caption under the QR box.
pub const SCAN_CAPTION: &str = "SCAN TO READ";

/// QR appearance used on the CTA card.
pub fn qr_style(cx: &CardContext<'_>) -> QrStyle {
    QrStyle {
        size_px: cx.config.qr_size_px,
        foreground: cx.palette.primary.opaque(),
        background: Rgba8::transparent(),
        margin_modules: 2,
    }
}

/// Square box framing the QR code.
pub fn qr_box(width: f64) -> Rect {
    let side = QR_DRAW_PX + 2.0 * QR_BOX_PAD;
    let x0 = (width - side) / 2.0;
    Rect::new(x0, QR_BOX_TOP, x0 + side, QR_BOX_TOP + side)
}

/// Compose the CTA card. Without a `qr` bitmap the raw `url` is drawn in the box.
pub fn render_cta<S: Surface + ?Sized>(
    surface: &mut S,
    cx: &CardContext<'_>,
    url: &str,
    qr: Option<&Bitmap>,
) -> CardResult<()> {
    let bounds = surface.bounds();
    let palette = cx.palette;
    let family = cx.family();
    let center_x = bounds.center().x;
    let qr_frame = qr_box(bounds.width());

    surface.fill_rect(
        bounds,
        &two_stop(
            Point::new(0.0, bounds.y0),
            Point::new(0.0, bounds.y1),
            palette.background.lighten(6.0),
            palette.background,
        ),
    )?;
    surface.fill_rect(
        bounds,
        &Paint::radial(
            qr_frame.center(),
            bounds.width() * 0.5,
            vec![
                ColorStop::new(0.0, palette.primary.alpha(0.25)),
                ColorStop::new(1.0, palette.primary.alpha(0.0)),
            ],
        ),
    )?;
    draw_accent_bar(surface, &palette, 0.0, ACCENT_BAR_H)?;
    draw_accent_bar(surface, &palette, bounds.y1 - ACCENT_BAR_H, ACCENT_BAR_H)?;

    draw_watermark(
        surface,
        Point::new(center_x, 100.0),
        &palette,
        &WatermarkOpts::new(family, cx.wordmark())
            .size(WORDMARK_SIZE_PX)
            .align(TextAlign::Center),
    )?;

    let max_w = bounds.width() - 2.0 * PAD;
    let headline_end = draw_wrapped(
        surface,
        &cx.config.cta_headline,
        center_x,
        236.0,
        max_w,
        52.0,
        Some(1),
        &TextStyle::new(FontSpec::bold(family, 44.0), Rgb::WHITE).aligned(TextAlign::Center),
    )?;
    surface.fill_text(
        &cx.config.domain,
        center_x,
        headline_end + 12.0,
        &TextStyle::new(FontSpec::new(family, 30.0, Weight::Semibold), palette.primary)
            .aligned(TextAlign::Center),
    )?;

    let frame = rounded_rect(qr_frame, QR_BOX_RADIUS);
    surface.fill_path(&frame, &Paint::Solid(palette.primary.alpha(0.08)))?;
    surface.stroke_path(&frame, 3.0, palette.primary.alpha(0.6))?;

    match qr {
        Some(bitmap) => {
            let c = qr_frame.center();
            let half = QR_DRAW_PX / 2.0;
            surface.draw_image(bitmap, Rect::new(c.x - half, c.y - half, c.x + half, c.y + half))?;
        }
        None => {
            let style = TextStyle::new(FontSpec::bold(family, FALLBACK_URL_PX), palette.primary)
                .aligned(TextAlign::Center);
            let lines = break_unspaced(
                surface,
                url,
                &style.font,
                QR_DRAW_PX,
                Some(FALLBACK_MAX_LINES),
            )?;
            draw_lines(
                surface,
                &lines,
                center_x,
                qr_frame.y0 + QR_BOX_PAD,
                FALLBACK_LINE_HEIGHT,
                &style,
            )?;
        }
    }

    let below = qr_frame.y1 + 32.0;
    surface.fill_text(
        SCAN_CAPTION,
        center_x,
        below,
        &TextStyle::new(FontSpec::new(family, 26.0, Weight::Semibold), palette.primary.alpha(0.9))
            .aligned(TextAlign::Center),
    )?;
    surface.fill_text(
        &cx.config.social_handle,
        center_x,
        below + 48.0,
        &TextStyle::new(FontSpec::regular(family, 28.0), Rgb::WHITE.alpha(0.8))
            .aligned(TextAlign::Center),
    )?;
    surface.fill_text(
        &cx.config.cta_closing,
        center_x,
        below + 96.0,
        &TextStyle::new(FontSpec::bold(family, 32.0), Rgb::WHITE).aligned(TextAlign::Center),
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/cards/cta.rs"]
mod tests;
