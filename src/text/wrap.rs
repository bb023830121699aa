//! Greedy word wrap with ellipsis truncation.

use crate::foundation::error::CardResult;
use crate::surface::{Surface, TextMeasure, TextStyle};
use crate::text::fonts::FontSpec;

/// Ellipsis appended to a truncated final line.
pub const ELLIPSIS: &str = "\u{2026}";

/// Characters a URL line may end after.
const URL_BREAKS: &[char] = &['/', '-', '?', '&', '=', '.', '_', '#'];

/// Break `text` into lines no wider than `max_width`.
///
/// Words accumulate while the candidate line measures within `max_width`; an
/// overflowing word starts the next line. A word wider than `max_width` gets a
/// line of its own and is never split. When `max_lines` would be exceeded the
/// last permitted line is shortened from the end until it fits together with
/// [`ELLIPSIS`], and wrapping stops there.
pub fn wrap_text<M: TextMeasure + ?Sized>(
    measure: &mut M,
    text: &str,
    font: &FontSpec,
    max_width: f64,
    max_lines: Option<usize>,
) -> CardResult<Vec<String>> {
    let mut lines = Vec::<String>::new();
    if max_lines == Some(0) {
        return Ok(lines);
    }

    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_owned()
        } else {
            format!("{line} {word}")
        };

        if line.is_empty() || measure.measure_text(&candidate, font)? <= max_width {
            line = candidate;
            continue;
        }

        if max_lines.is_some_and(|cap| lines.len() + 1 >= cap) {
            lines.push(truncate_with_ellipsis(measure, &line, font, max_width)?);
            return Ok(lines);
        }

        lines.push(std::mem::replace(&mut line, word.to_owned()));
    }

    if !line.is_empty() {
        lines.push(line);
    }
    Ok(lines)
}

/// Break text without usable spaces, such as a URL, into lines no wider than
/// `max_width`.
///
/// Each line takes the longest prefix that fits (at least one character), then
/// backs up to just after the last URL separator when that keeps
/// more than half of the line. `max_lines` truncates like [`wrap_text`].
pub fn break_unspaced<M: TextMeasure + ?Sized>(
    measure: &mut M,
    text: &str,
    font: &FontSpec,
    max_width: f64,
    max_lines: Option<usize>,
) -> CardResult<Vec<String>> {
    let mut lines = Vec::<String>::new();
    if max_lines == Some(0) {
        return Ok(lines);
    }

    let chars = text.trim().chars().collect::<Vec<_>>();
    let mut start = 0;
    while start < chars.len() {
        let mut end = start + 1;
        while end < chars.len() {
            let candidate = chars[start..=end].iter().collect::<String>();
            if measure.measure_text(&candidate, font)? > max_width {
                break;
            }
            end += 1;
        }
        if end < chars.len() {
            let half = start + (end - start) / 2;
            if let Some(cut) = (half + 1..=end)
                .rev()
                .find(|&i| URL_BREAKS.contains(&chars[i - 1]))
            {
                end = cut;
            }
        }

        let line = chars[start..end].iter().collect::<String>();
        if end < chars.len() && max_lines.is_some_and(|cap| lines.len() + 1 >= cap) {
            lines.push(truncate_with_ellipsis(measure, &line, font, max_width)?);
            return Ok(lines);
        }
        lines.push(line);
        start = end;
    }
    Ok(lines)
}

/// Drop characters from the end of `line` until `line + "…"` fits `max_width`.
pub fn truncate_with_ellipsis<M: TextMeasure + ?Sized>(
    measure: &mut M,
    line: &str,
    font: &FontSpec,
    max_width: f64,
) -> CardResult<String> {
    let mut kept = line.trim_end().to_owned();
    loop {
        let candidate = format!("{kept}{ELLIPSIS}");
        if kept.is_empty() || measure.measure_text(&candidate, font)? <= max_width {
            return Ok(candidate);
        }
        kept.pop();
        let trimmed = kept.trim_end().len();
        kept.truncate(trimmed);
    }
}

/// Wrap and draw `text` starting with the top of the first line at `y`.
///
/// Returns the y coordinate just below the last drawn line, so callers can
/// stack the next element. Empty text draws nothing and returns `y`.
#[allow(clippy::too_many_arguments)]
pub fn draw_wrapped<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    x: f64,
    y: f64,
    max_width: f64,
    line_height: f64,
    max_lines: Option<usize>,
    style: &TextStyle,
) -> CardResult<f64> {
    let lines = wrap_text(surface, text, &style.font, max_width, max_lines)?;
    draw_lines(surface, &lines, x, y, line_height, style)
}

/// Draw pre-wrapped lines; returns the y coordinate below the last one.
pub fn draw_lines<S: Surface + ?Sized>(
    surface: &mut S,
    lines: &[String],
    x: f64,
    y: f64,
    line_height: f64,
    style: &TextStyle,
) -> CardResult<f64> {
    let mut cursor = y;
    for line in lines {
        surface.fill_text(line, x, cursor, style)?;
        cursor += line_height;
    }
    Ok(cursor)
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
