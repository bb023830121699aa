use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CardError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(CardError::qr("x").to_string().contains("qr error:"));
    assert!(CardError::font("x").to_string().contains("font error:"));
    assert!(CardError::render("x").to_string().contains("render error:"));
    assert!(CardError::encode("x").to_string().contains("encode error:"));
}

#[test]
fn image_load_names_the_url() {
    let err = CardError::image_load("https://cdn.example/cover.jpg", "status 404");
    let msg = err.to_string();
    assert!(msg.contains("image load error:"));
    assert!(msg.contains("https://cdn.example/cover.jpg"));
    assert!(msg.contains("status 404"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CardError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
