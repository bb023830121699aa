use std::io::Write;

use super::*;

#[test]
fn defaults_validate() {
    let cfg = CardConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.fetch_timeout(), Duration::from_secs(10));
    assert_eq!(cfg.wordmark.0, "gg");
}

#[test]
fn rejects_out_of_range_values() {
    let cfg = CardConfig {
        proxy_quality: 0,
        ..Default::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = CardConfig {
        qr_size_px: 2000,
        ..Default::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = CardConfig {
        fetch_timeout_ms: 0,
        ..Default::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn partial_json_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"domain": "example.gg", "qr_size_px": 320}"#)
        .unwrap();

    let cfg = CardConfig::from_path(file.path()).unwrap();
    assert_eq!(cfg.domain, "example.gg");
    assert_eq!(cfg.qr_size_px, 320);
    assert_eq!(cfg.proxy_path, "/_next/image");
}

#[test]
fn invalid_json_is_a_validation_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{not json").unwrap();
    let err = CardConfig::from_path(file.path()).unwrap_err();
    assert!(err.to_string().contains("invalid config"));
}
