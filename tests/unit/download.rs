use std::time::Instant;

use super::*;
use crate::foundation::core::CardKind;

fn card(kind: CardKind, bytes: &[u8]) -> RenderedCard {
    RenderedCard {
        kind,
        bytes: bytes.to_vec(),
        file_name: kind.file_name("season-4"),
    }
}

fn leftover_parts(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".part"))
        .count()
}

#[test]
fn save_card_writes_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_card(&card(CardKind::Hero, b"png"), dir.path()).unwrap();
    assert_eq!(path, dir.path().join("season-4-hero.png"));
    assert_eq!(std::fs::read(&path).unwrap(), b"png");
    assert_eq!(leftover_parts(dir.path()), 0);
}

#[test]
fn save_card_overwrites_and_creates_dir() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("out/cards");
    save_card(&card(CardKind::Cta, b"old"), &nested).unwrap();
    let path = save_card(&card(CardKind::Cta, b"new"), &nested).unwrap();
    assert_eq!(std::fs::read(path).unwrap(), b"new");
}

#[test]
fn save_card_rejects_path_like_names() {
    let dir = tempfile::tempdir().unwrap();
    let mut c = card(CardKind::Summary, b"x");
    c.file_name = "../escape.png".to_owned();
    assert!(matches!(save_card(&c, dir.path()), Err(CardError::Validation(_))));
    c.file_name = String::new();
    assert!(save_card(&c, dir.path()).is_err());
}

#[test]
fn failed_persist_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    // A directory occupying the destination name makes the final rename fail.
    std::fs::create_dir(dir.path().join("season-4-hero.png")).unwrap();
    std::fs::write(dir.path().join("season-4-hero.png/keep"), b"x").unwrap();
    assert!(save_card(&card(CardKind::Hero, b"png"), dir.path()).is_err());
    assert_eq!(leftover_parts(dir.path()), 0);
}

#[tokio::test]
async fn save_all_writes_in_order_with_stagger() {
    let dir = tempfile::tempdir().unwrap();
    let set = CardSet {
        hero: card(CardKind::Hero, b"h"),
        summary: card(CardKind::Summary, b"s"),
        cta: card(CardKind::Cta, b"c"),
    };
    let started = Instant::now();
    let paths = save_all(&set, dir.path(), Duration::from_millis(20)).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(40));
    let names = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec!["season-4-hero.png", "season-4-summary.png", "season-4-cta.png"]
    );
}
