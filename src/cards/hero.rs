use crate::assets::bitmap::Bitmap;
use crate::cards::{ACCENT_BAR_H, CardContext, PAD, draw_corner_watermark, fill_cover, two_stop};
use crate::foundation::core::{Point, Rect, Rgb};
use crate::foundation::error::CardResult;
use crate::paint::{ColorStop, Paint};
use crate::shapes::{draw_accent_bar, pill};
use crate::surface::{Surface, TextStyle};
use crate::text::fonts::{FontSpec, Weight};
use crate::text::wrap::{draw_lines, truncate_with_ellipsis, wrap_text};

/// Lightening applied to the palette background for the gradient end stop.
pub const GRADIENT_LIGHTEN_PERCENT: f64 = 12.0;
pub const TITLE_SIZE_PX: f32 = 72.0;
pub const TITLE_LINE_HEIGHT: f64 = 84.0;
pub const TITLE_MAX_LINES: usize = 4;

const BADGE_TEXT_PX: f32 = 24.0;
const BADGE_PAD_X: f64 = 24.0;
const BADGE_H: f64 = 48.0;
const META_SIZE_PX: f32 = 28.0;
const META_Y: f64 = 880.0;
const DIVIDER_W: f64 = 80.0;
const DIVIDER_H: f64 = 6.0;
const BLOCK_GAP: f64 = 28.0;

/// Outcome of the cover image lookup.
#[derive(Clone, Debug)]
pub enum Cover {
    /// The post has no cover image.
    Absent,
    Loaded(Bitmap),
    /// A cover was requested but could not be loaded.
    Failed,
}

/// Compose the hero card: cover or gradient, darkening overlay, category badge,
/// bottom-anchored title, divider, byline and watermark.
pub fn render_hero<S: Surface + ?Sized>(
    surface: &mut S,
    cx: &CardContext<'_>,
    cover: &Cover,
) -> CardResult<()> {
    let bounds = surface.bounds();
    let palette = cx.palette;

    match cover {
        Cover::Loaded(bitmap) => fill_cover(surface, bitmap)?,
        Cover::Absent => {
            surface.fill_rect(
                bounds,
                &two_stop(
                    bounds.origin(),
                    Point::new(bounds.x1, bounds.y1),
                    palette.background,
                    palette.background.lighten(GRADIENT_LIGHTEN_PERCENT),
                ),
            )?;
            draw_stripe(surface, cx)?;
        }
        Cover::Failed => surface.fill_rect(bounds, &Paint::Solid(palette.background.opaque()))?,
    }

    surface.fill_rect(
        bounds,
        &Paint::linear(
            Point::new(0.0, bounds.y0),
            Point::new(0.0, bounds.y1),
            vec![
                ColorStop::new(0.0, Rgb::BLACK.alpha(0.1)),
                ColorStop::new(0.4, Rgb::BLACK.alpha(0.3)),
                ColorStop::new(0.7, Rgb::BLACK.alpha(0.7)),
                ColorStop::new(1.0, Rgb::BLACK.alpha(0.9)),
            ],
        ),
    )?;
    draw_accent_bar(surface, &palette, 0.0, ACCENT_BAR_H)?;
    draw_category_badge(surface, cx)?;

    let family = cx.family();
    let max_w = bounds.width() - 2.0 * PAD;
    let title_style = TextStyle::new(FontSpec::new(family, TITLE_SIZE_PX, Weight::Black), Rgb::WHITE);
    let lines = wrap_text(
        surface,
        &cx.post.title,
        &title_style.font,
        max_w,
        Some(TITLE_MAX_LINES),
    )?;

    let divider_y = META_Y - BLOCK_GAP - DIVIDER_H;
    let title_y = divider_y - BLOCK_GAP - lines.len() as f64 * TITLE_LINE_HEIGHT;
    draw_lines(surface, &lines, PAD, title_y, TITLE_LINE_HEIGHT, &title_style)?;

    surface.fill_rect(
        Rect::new(PAD, divider_y, PAD + DIVIDER_W, divider_y + DIVIDER_H),
        &Paint::Solid(palette.primary.opaque()),
    )?;

    let date = cx.post.date_label();
    let meta = match cx.post.author() {
        Some(author) => format!("By {author} \u{2022} {date}"),
        None => date,
    };
    surface.fill_text(
        &meta,
        PAD,
        META_Y,
        &TextStyle::new(
            FontSpec::new(family, META_SIZE_PX, Weight::Semibold),
            Rgb::WHITE.alpha(0.8),
        ),
    )?;

    draw_corner_watermark(surface, cx)?;
    Ok(())
}

/// Translucent diagonal band across the top right of the gradient background.
fn draw_stripe<S: Surface + ?Sized>(surface: &mut S, cx: &CardContext<'_>) -> CardResult<()> {
    let w = f64::from(surface.width());
    let mut band = crate::foundation::core::BezPath::new();
    band.move_to((w * 0.45, 0.0));
    band.line_to((w * 0.75, 0.0));
    band.line_to((w, w * 0.25));
    band.line_to((w, w * 0.55));
    band.close_path();
    surface.fill_path(
        &band,
        &two_stop(
            Point::new(w * 0.45, 0.0),
            Point::new(w, w * 0.55),
            cx.palette.primary.alpha(0.18),
            cx.palette.secondary.alpha(0.08),
        ),
    )
}

fn draw_category_badge<S: Surface + ?Sized>(surface: &mut S, cx: &CardContext<'_>) -> CardResult<()> {
    let mut label = cx.post.category_label();
    if label.is_empty() {
        return Ok(());
    }
    let style = TextStyle::new(FontSpec::bold(cx.family(), BADGE_TEXT_PX), cx.palette.primary);
    let max_text_w = f64::from(surface.width()) - 2.0 * PAD - 2.0 * BADGE_PAD_X;
    let mut text_w = surface.measure_text(&label, &style.font)?;
    if text_w > max_text_w {
        label = truncate_with_ellipsis(surface, &label, &style.font, max_text_w)?;
        text_w = surface.measure_text(&label, &style.font)?;
    }
    let top = PAD;
    let rect = Rect::new(PAD, top, PAD + text_w + 2.0 * BADGE_PAD_X, top + BADGE_H);
    let shape = pill(rect);
    surface.fill_path(&shape, &Paint::Solid(cx.palette.primary.alpha(0.2)))?;
    surface.stroke_path(&shape, 2.0, cx.palette.primary.opaque())?;
    surface.fill_text(
        &label,
        PAD + BADGE_PAD_X,
        top + (BADGE_H - f64::from(BADGE_TEXT_PX)) / 2.0,
        &style,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/cards/hero.rs"]
mod tests;
