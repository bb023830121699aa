use super::*;
use time::macros::datetime;

fn post() -> ShareablePost {
    ShareablePost {
        title: "Patch 4.2: Everything You Need to Know".to_owned(),
        slug: None,
        excerpt: None,
        meta_description: None,
        content: "<p>The <strong>new</strong> season&nbsp;is here &amp; it rocks.</p>".to_owned(),
        featured_image_url: None,
        category: "patch_notes".to_owned(),
        tags: vec!["fps".to_owned(), "  ".to_owned(), "meta".to_owned()],
        color_palette: None,
        published_at: None,
        created_at: datetime!(2026-01-05 12:00 UTC),
        author_name: Some("  Kay  ".to_owned()),
    }
}

#[test]
fn file_slug_prefers_explicit_slug() {
    let mut p = post();
    assert_eq!(p.file_slug(), "patch-4-2-everything-you-need-to-know");
    p.slug = Some("season-4".to_owned());
    assert_eq!(p.file_slug(), "season-4");
    p.slug = Some("   ".to_owned());
    p.title = "!!!".to_owned();
    assert_eq!(p.file_slug(), "post");
}

#[test]
fn summary_text_fallback_order() {
    let mut p = post();
    assert_eq!(p.summary_text(), "The new season is here & it rocks.");

    p.meta_description = Some("meta text".to_owned());
    assert_eq!(p.summary_text(), "meta text");

    p.excerpt = Some(" excerpt text ".to_owned());
    assert_eq!(p.summary_text(), "excerpt text");
}

#[test]
fn summary_text_caps_content_length() {
    let mut p = post();
    p.content = "x".repeat(1000);
    assert_eq!(p.summary_text().chars().count(), CONTENT_EXCERPT_CHARS);
}

#[test]
fn date_label_prefers_published_at() {
    let mut p = post();
    assert_eq!(p.date_label(), "Jan 5, 2026");
    p.published_at = Some(datetime!(2026-03-17 08:30 UTC));
    assert_eq!(p.date_label(), "Mar 17, 2026");
}

#[test]
fn labels_and_tags() {
    let p = post();
    assert_eq!(p.category_label(), "PATCH NOTES");
    assert_eq!(p.author(), Some("Kay"));
    assert_eq!(p.clean_tags().collect::<Vec<_>>(), vec!["fps", "meta"]);
}

#[test]
fn parses_from_json() {
    let json = br#"{
        "title": "Hello",
        "category": "news",
        "created_at": "2026-02-01T10:00:00Z",
        "tags": ["a"]
    }"#;
    let p = ShareablePost::from_json(json).unwrap();
    assert_eq!(p.title, "Hello");
    assert!(p.published_at.is_none());
    assert!(ShareablePost::from_json(b"{}").is_err());
}

#[test]
fn strip_html_handles_nested_markup() {
    assert_eq!(
        strip_html("<div><h1>Title</h1><p>Body<br/>text</p></div>"),
        "Title Body text"
    );
    assert_eq!(strip_html(""), "");
}
