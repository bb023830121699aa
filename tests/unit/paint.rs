use super::*;
use crate::foundation::core::Rgb;

fn bw() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, Rgb::BLACK),
        ColorStop::new(1.0, Rgb::WHITE),
    ]
}

#[test]
fn linear_gradient_interpolates_along_axis() {
    let p = Paint::linear(Point::new(0.0, 0.0), Point::new(100.0, 0.0), bw());
    assert_eq!(p.sample(Point::new(0.0, 50.0)), Rgba8::new(0, 0, 0, 255));
    assert_eq!(p.sample(Point::new(100.0, 7.0)), Rgba8::new(255, 255, 255, 255));
    assert_eq!(p.sample(Point::new(50.0, 99.0)), Rgba8::new(128, 128, 128, 255));
    // Padded beyond the ends.
    assert_eq!(p.sample(Point::new(-40.0, 0.0)), Rgba8::new(0, 0, 0, 255));
    assert_eq!(p.sample(Point::new(400.0, 0.0)), Rgba8::new(255, 255, 255, 255));
}

#[test]
fn radial_gradient_uses_distance_from_center() {
    let p = Paint::radial(
        Point::new(10.0, 10.0),
        10.0,
        vec![
            ColorStop::new(0.0, Rgb::WHITE.alpha(1.0)),
            ColorStop::new(1.0, Rgb::WHITE.alpha(0.0)),
        ],
    );
    assert_eq!(p.sample(Point::new(10.0, 10.0)).a, 255);
    assert_eq!(p.sample(Point::new(20.0, 10.0)).a, 0);
    assert_eq!(p.sample(Point::new(15.0, 10.0)).a, 128);
}

#[test]
fn multi_stop_sampling_picks_the_right_segment() {
    let stops = vec![
        ColorStop::new(0.0, Rgba8::new(0, 0, 0, 0)),
        ColorStop::new(0.5, Rgba8::new(0, 0, 0, 100)),
        ColorStop::new(1.0, Rgba8::new(0, 0, 0, 200)),
    ];
    assert_eq!(sample_stops(&stops, 0.25).a, 50);
    assert_eq!(sample_stops(&stops, 0.75).a, 150);
    assert_eq!(sample_stops(&[], 0.5), Rgba8::transparent());
}

#[test]
fn pixel_box_clips_to_surface() {
    assert_eq!(
        pixel_box(Rect::new(-10.0, 5.5, 20.2, 30.0), 16, 16),
        Some((0, 5, 16, 11))
    );
    assert_eq!(pixel_box(Rect::new(20.0, 20.0, 30.0, 30.0), 16, 16), None);
}

#[test]
fn rasterize_solid_is_uniform_premul() {
    let c = Rgb::new(200, 100, 0).alpha(0.5);
    let bytes = rasterize_premul(&Paint::Solid(c), 3, 4, 2, 2);
    assert_eq!(bytes.len(), 16);
    for px in bytes.chunks_exact(4) {
        assert_eq!(px, c.to_premul());
    }
}
