use super::*;

#[test]
fn empty_object_is_the_default_config() {
    let cfg = FaviconConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, FaviconConfig::default());
    assert_eq!(cfg.size, 64);
    assert_eq!(cfg.update_interval_ms, 90.0);
    assert_eq!(cfg.link_id, "dynamic-favicon");
    assert_eq!(cfg.link_rel, "icon");
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = FaviconConfig::from_json_str(r#"{"size": 32, "update_interval_ms": 250}"#).unwrap();
    assert_eq!(cfg.size, 32);
    assert_eq!(cfg.update_interval_ms, 250.0);
    assert_eq!(cfg.link_id, DEFAULT_LINK_ID);
    assert_eq!(cfg.canvas().unwrap().width, 32);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = FaviconConfig::from_json_str(r#"{"sise": 32}"#).unwrap_err();
    assert!(matches!(err, FaviconError::Serde(_)));
}

#[test]
fn invalid_values_fail_validation() {
    for json in [
        r#"{"size": 0}"#,
        r#"{"size": 100000}"#,
        r#"{"update_interval_ms": -1}"#,
        r#"{"link_id": "  "}"#,
        r#"{"link_rel": ""}"#,
    ] {
        let err = FaviconConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, FaviconError::Validation(_)), "{json}: {err}");
    }
}

#[test]
fn missing_file_is_reported_with_its_path() {
    let err = FaviconConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
