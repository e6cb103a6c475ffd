use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FaviconError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(FaviconError::render("x").to_string().contains("render error:"));
    assert!(FaviconError::encode("x").to_string().contains("encode error:"));
    assert!(FaviconError::host("x").to_string().contains("host error:"));
    assert!(
        FaviconError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FaviconError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
