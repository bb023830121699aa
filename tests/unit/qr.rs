use super::*;
use crate::foundation::core::Rgb;

fn style() -> QrStyle {
    QrStyle {
        size_px: 400,
        foreground: Rgb::new(0, 255, 136).opaque(),
        background: Rgba8::transparent(),
        margin_modules: 2,
    }
}

#[test]
fn encodes_url_into_requested_size() {
    let bmp = QrCodeEncoder
        .encode("https://gglobby.in/blog/patch-4-2", &style())
        .unwrap();
    assert_eq!((bmp.width, bmp.height), (400, 400));

    let dark = bmp
        .rgba8_premul
        .chunks_exact(4)
        .filter(|px| px[3] == 255)
        .count();
    let clear = bmp
        .rgba8_premul
        .chunks_exact(4)
        .filter(|px| px[3] == 0)
        .count();
    assert!(dark > 0);
    assert!(clear > 0);
    assert_eq!(dark + clear, 400 * 400);
    // Corner pixel sits in the quiet zone.
    assert_eq!(bmp.pixel(0, 0).unwrap(), [0, 0, 0, 0]);
}

#[test]
fn encoding_is_deterministic() {
    let a = QrCodeEncoder.encode("https://gglobby.in/x", &style()).unwrap();
    let b = QrCodeEncoder.encode("https://gglobby.in/x", &style()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_payload_and_tiny_size_fail() {
    assert!(QrCodeEncoder.encode("", &style()).is_err());
    let tiny = QrStyle {
        size_px: 10,
        ..style()
    };
    assert!(QrCodeEncoder.encode("https://gglobby.in/x", &tiny).is_err());
}

#[test]
fn render_modules_places_dark_modules() {
    let colors = vec![Color::Dark, Color::Light, Color::Light, Color::Dark];
    let s = QrStyle {
        size_px: 8,
        margin_modules: 1,
        ..style()
    };
    // 2 modules + 2 margin = 4 -> 2px per module, offset 2.
    let bmp = render_modules(&colors, 2, &s).unwrap();
    assert_eq!(bmp.pixel(2, 2).unwrap()[3], 255);
    assert_eq!(bmp.pixel(4, 2).unwrap()[3], 0);
    assert_eq!(bmp.pixel(5, 5).unwrap()[3], 255);
    assert_eq!(bmp.pixel(0, 0).unwrap()[3], 0);
    assert!(render_modules(&colors, 3, &s).is_err());
}

#[test]
fn render_modules_centers_when_size_does_not_divide() {
    let colors = vec![Color::Dark, Color::Light, Color::Light, Color::Dark];
    let s = QrStyle {
        size_px: 11,
        margin_modules: 1,
        ..style()
    };
    // 4 modules across at 2px leaves 3px, split 1 before and 2 after.
    let bmp = render_modules(&colors, 2, &s).unwrap();
    assert_eq!((bmp.width, bmp.height), (11, 11));
    assert_eq!(bmp.pixel(2, 2).unwrap()[3], 0);
    assert_eq!(bmp.pixel(3, 3).unwrap(), [0, 255, 136, 255]);
    assert_eq!(bmp.pixel(6, 6).unwrap()[3], 255);
    assert_eq!(bmp.pixel(10, 10).unwrap()[3], 0);
}
