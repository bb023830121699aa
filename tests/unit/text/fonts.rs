use std::time::Duration;

use super::*;

#[test]
fn garbage_bytes_do_not_register() {
    let mut book = FontBook::new();
    assert!(book.register(b"definitely not a font".to_vec()).is_err());
    assert!(book.is_empty());
    assert_eq!(book.resolve_family("Inter"), None);
}

#[test]
fn missing_font_file_is_a_font_error() {
    let mut book = FontBook::new();
    let err = book.register_file("does/not/exist.ttf").unwrap_err();
    assert!(err.to_string().contains("font error:"));
}

#[test]
fn register_dir_ignores_non_font_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("README.txt"), b"hello").unwrap();
    let mut book = FontBook::new();
    assert_eq!(book.register_dir(dir.path()).unwrap(), 0);
}

#[test]
fn register_dir_picks_up_test_fonts() {
    let mut book = FontBook::new();
    assert_eq!(book.register_dir("tests/data/fonts").unwrap(), 1);
    assert!(!book.is_empty());
}

#[test]
fn test_font_registers_its_family() {
    let bytes = std::fs::read("tests/data/fonts/DejaVuSans-Bold.ttf").unwrap();
    let mut book = FontBook::new();
    let names = book.register(bytes).unwrap();
    assert!(names.iter().any(|n| n == "DejaVu Sans"), "{names:?}");
    let first = names[0].clone();
    assert_eq!(book.resolve_family("no-such-family"), Some(first.as_str()));
}

#[test]
fn weights_are_ordered() {
    assert!(Weight::Regular.value() < Weight::Semibold.value());
    assert!(Weight::Bold.value() < Weight::Black.value());
}

#[tokio::test]
async fn ready_gate_returns_immediately() {
    let gate = FontGate::ready();
    assert!(gate.is_ready());
    tokio::time::timeout(Duration::from_millis(100), gate.wait())
        .await
        .unwrap();
}

#[tokio::test]
async fn closed_gate_blocks_until_marked() {
    let gate = FontGate::new();
    assert!(!gate.is_ready());
    assert!(
        tokio::time::timeout(Duration::from_millis(20), gate.wait())
            .await
            .is_err()
    );

    let opener = gate.clone();
    let handle = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        opener.mark_ready();
    });
    tokio::time::timeout(Duration::from_secs(1), gate.wait())
        .await
        .unwrap();
    handle.await.unwrap();
}
