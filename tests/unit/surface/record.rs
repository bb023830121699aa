use super::*;
use crate::foundation::core::Rgb;

#[test]
fn measures_with_fixed_advance() {
    let mut s = RecordingSurface::new(100, 100);
    let font = FontSpec::regular("Inter", 10.0);
    assert_eq!(s.measure_text("abcd", &font).unwrap(), 20.0);
    assert_eq!(s.measure_text("", &font).unwrap(), 0.0);
    // Characters, not bytes.
    assert_eq!(s.measure_text("\u{2026}", &font).unwrap(), 5.0);
}

#[test]
fn text_alignment_shifts_left_edge() {
    let mut s = RecordingSurface::new(100, 100);
    let style = TextStyle::new(FontSpec::regular("Inter", 10.0), Rgb::WHITE);
    s.fill_text("abcd", 50.0, 0.0, &style.clone().aligned(TextAlign::Center))
        .unwrap();
    s.fill_text("abcd", 50.0, 0.0, &style.aligned(TextAlign::Right))
        .unwrap();
    let texts = s.texts();
    assert_eq!(texts[0].1, 40.0);
    assert_eq!(texts[1].1, 30.0);
}

#[test]
fn finish_serializes_ops() {
    let mut s = RecordingSurface::new(10, 10);
    s.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), &Paint::Solid(Rgb::BLACK.opaque()))
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&s.finish().unwrap()).unwrap();
    assert_eq!(json[0]["op"], "fill_rect");
    assert_eq!(json[0]["paint"]["type"], "solid");
}
