use crate::cards::{ACCENT_BAR_H, CardContext, PAD, draw_corner_watermark, two_stop};
use crate::foundation::core::{Point, Rect, Rgb};
use crate::foundation::error::CardResult;
use crate::paint::Paint;
use crate::shapes::{Corner, corner_bracket, draw_accent_bar, pill};
use crate::surface::{Surface, TextStyle};
use crate::text::fonts::{FontSpec, Weight};
use crate::text::wrap::draw_wrapped;

/// Maximum number of tag chips on the card.
pub const MAX_TAGS: usize = 4;
pub const TITLE_MAX_LINES: usize = 2;
pub const EXCERPT_MAX_LINES: usize = 10;

const BRACKET_INSET: f64 = 40.0;
const BRACKET_ARM: f64 = 120.0;
const BRACKET_THICKNESS: f64 = 6.0;
const QUOTE_SIZE_PX: f32 = 240.0;
const TITLE_Y: f64 = 220.0;
const TITLE_SIZE_PX: f32 = 56.0;
const TITLE_LINE_HEIGHT: f64 = 68.0;
const EXCERPT_SIZE_PX: f32 = 32.0;
const EXCERPT_LINE_HEIGHT: f64 = 44.0;
const DIVIDER_W: f64 = 80.0;
const DIVIDER_H: f64 = 6.0;
const GAP: f64 = 28.0;

/// Top of the tag chip row.
pub const CHIP_Y: f64 = 880.0;
pub const CHIP_H: f64 = 52.0;
const CHIP_TEXT_PX: f32 = 26.0;
const CHIP_PAD_X: f64 = 22.0;
const CHIP_GAP: f64 = 16.0;

/// Compose the summary card: gradient, corner brackets, quote mark, title,
/// excerpt, tag chips and watermark.
pub fn render_summary<S: Surface + ?Sized>(surface: &mut S, cx: &CardContext<'_>) -> CardResult<()> {
    let bounds = surface.bounds();
    let palette = cx.palette;
    let family = cx.family();

    surface.fill_rect(
        bounds,
        &two_stop(
            bounds.origin(),
            Point::new(bounds.x1, bounds.y1),
            palette.background,
            palette.background.lighten(8.0),
        ),
    )?;
    draw_accent_bar(surface, &palette, 0.0, ACCENT_BAR_H)?;

    let bracket = Paint::Solid(palette.primary.alpha(0.3));
    surface.fill_path(
        &corner_bracket(
            Corner::TopLeft,
            Point::new(BRACKET_INSET, BRACKET_INSET),
            BRACKET_ARM,
            BRACKET_THICKNESS,
        ),
        &bracket,
    )?;
    surface.fill_path(
        &corner_bracket(
            Corner::BottomRight,
            Point::new(bounds.x1 - BRACKET_INSET, bounds.y1 - BRACKET_INSET),
            BRACKET_ARM,
            BRACKET_THICKNESS,
        ),
        &bracket,
    )?;

    surface.fill_text(
        "\u{201C}",
        PAD - 10.0,
        PAD,
        &TextStyle::new(FontSpec::new(family, QUOTE_SIZE_PX, Weight::Black), palette.primary.alpha(0.15)),
    )?;

    let max_w = bounds.width() - 2.0 * PAD;
    let title_end = draw_wrapped(
        surface,
        &cx.post.title,
        PAD,
        TITLE_Y,
        max_w,
        TITLE_LINE_HEIGHT,
        Some(TITLE_MAX_LINES),
        &TextStyle::new(FontSpec::bold(family, TITLE_SIZE_PX), palette.primary),
    )?;

    let divider_y = title_end + GAP;
    surface.fill_rect(
        Rect::new(PAD, divider_y, PAD + DIVIDER_W, divider_y + DIVIDER_H),
        &Paint::Solid(palette.secondary.opaque()),
    )?;

    draw_wrapped(
        surface,
        &cx.post.summary_text(),
        PAD,
        divider_y + DIVIDER_H + GAP,
        max_w,
        EXCERPT_LINE_HEIGHT,
        Some(EXCERPT_MAX_LINES),
        &TextStyle::new(FontSpec::regular(family, EXCERPT_SIZE_PX), Rgb::WHITE.alpha(0.85)),
    )?;

    draw_tag_chips(surface, cx)?;
    draw_corner_watermark(surface, cx)?;
    Ok(())
}

/// Lay `#tag` chips left to right. The first chip that would cross the right
/// padding ends the row; returns the number drawn.
pub fn draw_tag_chips<S: Surface + ?Sized>(surface: &mut S, cx: &CardContext<'_>) -> CardResult<usize> {
    let limit = f64::from(surface.width()) - PAD;
    let style = TextStyle::new(
        FontSpec::new(cx.family(), CHIP_TEXT_PX, Weight::Semibold),
        cx.palette.primary,
    );

    let mut x = PAD;
    let mut drawn = 0;
    for tag in cx.post.clean_tags().take(MAX_TAGS) {
        let label = format!("#{tag}");
        let w = surface.measure_text(&label, &style.font)? + 2.0 * CHIP_PAD_X;
        if x + w > limit {
            break;
        }
        let chip = pill(Rect::new(x, CHIP_Y, x + w, CHIP_Y + CHIP_H));
        surface.fill_path(&chip, &Paint::Solid(cx.palette.primary.alpha(0.15)))?;
        surface.stroke_path(&chip, 2.0, cx.palette.primary.alpha(0.6))?;
        surface.fill_text(
            &label,
            x + CHIP_PAD_X,
            CHIP_Y + (CHIP_H - f64::from(CHIP_TEXT_PX)) / 2.0,
            &style,
        )?;
        x += w + CHIP_GAP;
        drawn += 1;
    }
    Ok(drawn)
}

#[cfg(test)]
#[path = "../../tests/unit/cards/summary.rs"]
mod tests;
