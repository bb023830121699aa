use super::*;
use crate::foundation::core::Rgb;
use crate::surface::record::RecordingSurface;

// 10px at 0.5em per character: every character is 5px wide.
fn font() -> FontSpec {
    FontSpec::regular("Inter", 10.0)
}

#[test]
fn wraps_at_word_boundaries() {
    let mut s = RecordingSurface::new(1080, 1080);
    let lines = wrap_text(&mut s, "AAAA BBBB CCCC", &font(), 45.0, None).unwrap();
    assert_eq!(lines, vec!["AAAA BBBB", "CCCC"]);
}

#[test]
fn collapses_whitespace_runs() {
    let mut s = RecordingSurface::new(1080, 1080);
    let lines = wrap_text(&mut s, "  a \n\t b  ", &font(), 500.0, None).unwrap();
    assert_eq!(lines, vec!["a b"]);
}

#[test]
fn truncates_last_permitted_line_with_ellipsis() {
    let mut s = RecordingSurface::new(1080, 1080);
    let lines = wrap_text(
        &mut s,
        "one two three four five six",
        &font(),
        45.0,
        Some(2),
    )
    .unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "one two");
    assert!(lines[1].ends_with(ELLIPSIS));
    for line in &lines {
        assert!(s.measure_text(line, &font()).unwrap() <= 45.0);
    }
}

#[test]
fn truncation_drops_characters_until_fit() {
    let mut s = RecordingSurface::new(1080, 1080);
    // 9 chars of room: "abcdefgh" plus the ellipsis.
    let out = truncate_with_ellipsis(&mut s, "abcdefghijkl", &font(), 45.0).unwrap();
    assert_eq!(out, "abcdefgh\u{2026}");
    let out = truncate_with_ellipsis(&mut s, "abc def", &font(), 25.0).unwrap();
    assert_eq!(out, "abc\u{2026}");
}

#[test]
fn long_word_gets_its_own_line() {
    let mut s = RecordingSurface::new(1080, 1080);
    let lines = wrap_text(&mut s, "hi supercalifragilistic ok", &font(), 45.0, None).unwrap();
    assert_eq!(lines, vec!["hi", "supercalifragilistic", "ok"]);
}

#[test]
fn zero_max_lines_yields_nothing() {
    let mut s = RecordingSurface::new(1080, 1080);
    assert!(wrap_text(&mut s, "words", &font(), 45.0, Some(0)).unwrap().is_empty());
}

#[test]
fn draw_wrapped_stacks_lines_and_returns_next_y() {
    let mut s = RecordingSurface::new(1080, 1080);
    let style = TextStyle::new(font(), Rgb::WHITE);
    let next = draw_wrapped(&mut s, "AAAA BBBB CCCC", 80.0, 100.0, 45.0, 12.0, None, &style)
        .unwrap();
    assert_eq!(next, 124.0);
    assert_eq!(
        s.texts(),
        vec![("AAAA BBBB", 80.0, 100.0), ("CCCC", 80.0, 112.0)]
    );
}

#[test]
fn empty_text_draws_nothing() {
    let mut s = RecordingSurface::new(1080, 1080);
    let style = TextStyle::new(font(), Rgb::WHITE);
    let next = draw_wrapped(&mut s, "   ", 80.0, 100.0, 45.0, 12.0, Some(3), &style).unwrap();
    assert_eq!(next, 100.0);
    assert!(s.ops().is_empty());
}

#[test]
fn unspaced_text_breaks_after_url_separators() {
    let mut s = RecordingSurface::new(1080, 1080);
    // 5px per char: 60px holds 12 chars.
    let lines = break_unspaced(&mut s, "gglobby.in/blog/patch-4-2", &font(), 60.0, None).unwrap();
    assert_eq!(lines, vec!["gglobby.in/", "blog/patch-", "4-2"]);
}

#[test]
fn unspaced_text_without_separators_breaks_mid_token() {
    let mut s = RecordingSurface::new(1080, 1080);
    let lines = break_unspaced(&mut s, "abcdefghij", &font(), 20.0, Some(2)).unwrap();
    assert_eq!(lines, vec!["abcd", "efg\u{2026}"]);
    for line in &lines {
        assert!(s.measure_text(line, &font()).unwrap() <= 20.0);
    }
}
