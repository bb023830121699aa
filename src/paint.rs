//! Solid and gradient paints, with CPU rasterization of gradients.

use crate::foundation::core::{Point, Rect, Rgba8};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ColorStop {
    /// Offset along the gradient in `0.0..=1.0`.
    pub offset: f64,
    pub color: Rgba8,
}

impl ColorStop {
    pub fn new(offset: f64, color: impl Into<Rgba8>) -> Self {
        Self {
            offset,
            color: color.into(),
        }
    }
}

/// Gradient along the segment `start -> end`, in surface coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<ColorStop>,
}

/// Circular gradient from `center` out to `radius`, in surface coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RadialGradient {
    pub center: Point,
    pub radius: f64,
    pub stops: Vec<ColorStop>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Paint {
    Solid(Rgba8),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl From<Rgba8> for Paint {
    fn from(c: Rgba8) -> Self {
        Paint::Solid(c)
    }
}

impl Paint {
    pub fn linear(start: Point, end: Point, stops: Vec<ColorStop>) -> Self {
        Paint::Linear(LinearGradient { start, end, stops })
    }

    pub fn radial(center: Point, radius: f64, stops: Vec<ColorStop>) -> Self {
        Paint::Radial(RadialGradient {
            center,
            radius,
            stops,
        })
    }

    /// Straight-alpha color at surface point `p`.
    pub fn sample(&self, p: Point) -> Rgba8 {
        match self {
            Paint::Solid(c) => *c,
            Paint::Linear(g) => {
                let d = g.end - g.start;
                let len2 = d.hypot2();
                let t = if len2 <= f64::EPSILON {
                    0.0
                } else {
                    (p - g.start).dot(d) / len2
                };
                sample_stops(&g.stops, t)
            }
            Paint::Radial(g) => {
                let t = if g.radius <= f64::EPSILON {
                    1.0
                } else {
                    (p - g.center).hypot() / g.radius
                };
                sample_stops(&g.stops, t)
            }
        }
    }
}

/// Color at offset `t` (clamped) across sorted stops; pads with the end colors.
pub fn sample_stops(stops: &[ColorStop], t: f64) -> Rgba8 {
    let Some(first) = stops.first() else {
        return Rgba8::transparent();
    };
    let t = t.clamp(0.0, 1.0);
    if t <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= f64::EPSILON {
                return b.color;
            }
            return a.color.lerp(b.color, (t - a.offset) / span);
        }
    }
    stops[stops.len() - 1].color
}

/// Integer pixel box covering `rect`, clipped to `width x height`.
///
/// Returns `(x0, y0, w, h)`; `None` when nothing is visible.
pub fn pixel_box(rect: Rect, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
    let x0 = rect.x0.min(rect.x1).floor().max(0.0);
    let y0 = rect.y0.min(rect.y1).floor().max(0.0);
    let x1 = rect.x0.max(rect.x1).ceil().min(f64::from(width));
    let y1 = rect.y0.max(rect.y1).ceil().min(f64::from(height));
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some((x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32))
}

/// Rasterize `paint` over a `w x h` block whose top-left sits at surface `(x0, y0)`.
///
/// Output is row-major premultiplied RGBA8, sampled at pixel centers.
pub fn rasterize_premul(paint: &Paint, x0: u32, y0: u32, w: u32, h: u32) -> Vec<u8> {
    let mut bytes = vec![0u8; (w as usize).saturating_mul(h as usize).saturating_mul(4)];
    for y in 0..h {
        for x in 0..w {
            let p = Point::new(
                f64::from(x0 + x) + 0.5,
                f64::from(y0 + y) + 0.5,
            );
            let idx = ((y as usize) * (w as usize) + (x as usize)) * 4;
            bytes[idx..idx + 4].copy_from_slice(&paint.sample(p).to_premul());
        }
    }
    bytes
}

#[cfg(test)]
#[path = "../tests/unit/paint.rs"]
mod tests;
