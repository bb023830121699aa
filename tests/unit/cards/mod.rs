use time::macros::datetime;

use super::*;
use crate::palette;

pub(crate) fn sample_post() -> ShareablePost {
    ShareablePost {
        title: "Patch 4.2 reshapes the ranked meta for every role".to_owned(),
        slug: None,
        excerpt: Some("Tanks got faster, healers got louder, and the ladder will never be the same.".to_owned()),
        meta_description: None,
        content: String::new(),
        featured_image_url: None,
        category: "patch_notes".to_owned(),
        tags: vec!["fps".to_owned(), "ranked".to_owned(), "meta".to_owned()],
        color_palette: Some("crimson_fury".to_owned()),
        published_at: None,
        created_at: datetime!(2026-01-05 12:00 UTC),
        author_name: Some("Kay".to_owned()),
    }
}

#[test]
fn cover_rect_fills_and_centers() {
    let bounds = Rect::new(0.0, 0.0, 1080.0, 1080.0);

    let wide = cover_rect(270, 135, bounds);
    assert_eq!(wide, Rect::new(-540.0, 0.0, 1620.0, 1080.0));

    let tall = cover_rect(135, 540, bounds);
    assert_eq!(tall, Rect::new(0.0, -1620.0, 1080.0, 2700.0));

    let square = cover_rect(540, 540, bounds);
    assert_eq!(square, bounds);
}

#[test]
fn context_exposes_configured_brand() {
    let post = sample_post();
    let config = CardConfig::default();
    let cx = CardContext::new(&post, palette::resolve(None), &config);
    assert_eq!(cx.family(), "Inter");
    assert_eq!(cx.wordmark(), ("gg", "Lobby"));
}

#[test]
fn corner_watermark_is_right_aligned_to_padding() {
    use crate::surface::record::RecordingSurface;

    let post = sample_post();
    let config = CardConfig::default();
    let cx = CardContext::new(&post, palette::resolve(None), &config);
    let mut s = RecordingSurface::new(1080, 1080);
    // 36px bold, 0.5em: "gg" 36px + "Lobby" 90px.
    let w = draw_corner_watermark(&mut s, &cx).unwrap();
    assert_eq!(w, 126.0);
    let texts = s.texts();
    assert_eq!(texts[0], ("gg", 1000.0 - 126.0, 964.0));
    assert_eq!(texts[1], ("Lobby", 1000.0 - 90.0, 964.0));
}
