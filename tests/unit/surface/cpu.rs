use super::*;
use crate::foundation::core::{Point, Rgb};
use crate::paint::ColorStop;

fn decode(png: &[u8]) -> image::RgbaImage {
    image::load_from_memory(png).unwrap().to_rgba8()
}

#[test]
fn solid_fill_encodes_png_with_surface_size() {
    let mut s = CpuSurface::new(32, 16, &FontBook::new()).unwrap();
    s.fill_rect(
        Rect::new(0.0, 0.0, 32.0, 16.0),
        &Paint::Solid(Rgb::new(10, 10, 15).opaque()),
    )
    .unwrap();
    s.fill_rect(
        Rect::new(0.0, 0.0, 8.0, 8.0),
        &Paint::Solid(Rgb::new(0, 255, 136).opaque()),
    )
    .unwrap();

    let img = decode(&s.finish().unwrap());
    assert_eq!(img.dimensions(), (32, 16));
    assert_eq!(img.get_pixel(2, 2).0, [0, 255, 136, 255]);
    assert_eq!(img.get_pixel(20, 12).0, [10, 10, 15, 255]);
}

#[test]
fn linear_gradient_runs_left_to_right() {
    let mut s = CpuSurface::new(100, 4, &FontBook::new()).unwrap();
    let paint = Paint::linear(
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        vec![
            ColorStop::new(0.0, Rgb::new(255, 0, 0)),
            ColorStop::new(1.0, Rgb::new(0, 0, 255)),
        ],
    );
    s.fill_rect(Rect::new(0.0, 0.0, 100.0, 4.0), &paint).unwrap();

    let img = decode(&s.finish().unwrap());
    let left = img.get_pixel(1, 2).0;
    let right = img.get_pixel(98, 2).0;
    assert!(left[0] > 200 && left[2] < 50);
    assert!(right[2] > 200 && right[0] < 50);
}

#[test]
fn draw_image_scales_into_destination() {
    let mut s = CpuSurface::new(20, 20, &FontBook::new()).unwrap();
    let bmp = Bitmap::solid(2, 2, Rgb::new(255, 255, 255).opaque()).unwrap();
    s.draw_image(&bmp, Rect::new(10.0, 10.0, 20.0, 20.0)).unwrap();

    let img = decode(&s.finish().unwrap());
    assert_eq!(img.get_pixel(15, 15).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(5, 5).0[3], 0);
}

#[test]
fn text_without_typeface_is_a_font_error() {
    let mut s = CpuSurface::new(20, 20, &FontBook::new()).unwrap();
    let style = TextStyle::new(FontSpec::bold("Inter", 12.0), Rgb::WHITE);
    let err = s.fill_text("gg", 0.0, 0.0, &style).unwrap_err();
    assert!(matches!(err, CardError::Font(_)));
    assert!(s.measure_text("gg", &style.font).is_err());
}

#[test]
fn rejects_zero_and_oversized_dimensions() {
    assert!(CpuSurface::new(0, 10, &FontBook::new()).is_err());
    assert!(CpuSurface::new(70_000, 10, &FontBook::new()).is_err());
}

#[test]
fn stroke_rejects_bad_width() {
    let mut s = CpuSurface::new(20, 20, &FontBook::new()).unwrap();
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    p.line_to((10.0, 10.0));
    assert!(s.stroke_path(&p, 0.0, Rgb::WHITE.opaque()).is_err());
    s.stroke_path(&p, 2.0, Rgb::WHITE.opaque()).unwrap();
}

fn surface_with_test_font(width: u32, height: u32) -> CpuSurface {
    let bytes = std::fs::read("tests/data/fonts/DejaVuSans-Bold.ttf").unwrap();
    let mut book = FontBook::new();
    book.register(bytes).unwrap();
    let factory = CpuSurfaceFactory::new(book);
    factory.create(CardKind::Hero, width, height).unwrap()
}

/// Inclusive pixel bounds of every pixel with non-zero alpha.
fn ink_bounds(img: &image::RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut out: Option<(u32, u32, u32, u32)> = None;
    for (x, y, p) in img.enumerate_pixels() {
        if p.0[3] == 0 {
            continue;
        }
        out = Some(match out {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    out
}

#[test]
fn glyphs_advance_along_the_line() {
    let mut s = surface_with_test_font(400, 80);
    let style = TextStyle::new(FontSpec::bold("DejaVu Sans", 40.0), Rgb::WHITE);
    let measured = s.measure_text("HHHHHH", &style.font).unwrap();
    s.fill_text("HHHHHH", 10.0, 10.0, &style).unwrap();

    let img = decode(&s.finish().unwrap());
    let (x0, y0, x1, y1) = ink_bounds(&img).unwrap();
    let ink_w = f64::from(x1 - x0 + 1);
    assert!(ink_w > measured * 0.85, "ink {ink_w}px, advance {measured}px");
    assert!(ink_w <= measured + 2.0, "ink {ink_w}px, advance {measured}px");
    assert!(x0 >= 10 && f64::from(x1) <= 10.0 + measured + 1.0);
    // Text hangs below its line-box top.
    assert!(y0 >= 10, "ink starts at y={y0}");
    assert!(y1 <= 10 + 50, "ink ends at y={y1}");
}

#[test]
fn centered_text_straddles_the_anchor() {
    let mut s = surface_with_test_font(400, 80);
    let style = TextStyle::new(FontSpec::bold("DejaVu Sans", 32.0), Rgb::WHITE)
        .aligned(TextAlign::Center);
    s.fill_text("lobby", 200.0, 10.0, &style).unwrap();

    let img = decode(&s.finish().unwrap());
    let (x0, _, x1, _) = ink_bounds(&img).unwrap();
    let mid = f64::from(x0 + x1) / 2.0;
    assert!((mid - 200.0).abs() < 6.0, "ink centered at {mid}");
}
