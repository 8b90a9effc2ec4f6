/// Integration tests for filesystem resource bundle loading
///
/// Bundles placed in the directory named by VAANI_RESOURCE_DIR extend and
/// override the embedded ones. The env var is process-global, so these
/// tests serialize on a mutex.

use std::fs;
use std::sync::Mutex;

use vaani_server::resources;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Minimal structurally-valid bundle with distinctive words
fn test_bundle_json() -> String {
    let ones: Vec<String> = (0..=9).map(|d| format!("\"{}\": \"d{}\"", d, d)).collect();
    let tens: Vec<String> = (10..=19)
        .chain((20..=90).step_by(10))
        .map(|t| format!("\"{}\": \"t{}\"", t, t))
        .collect();
    let months: Vec<String> = (1..=12).map(|m| format!("\"{}\": \"m{}\"", m, m)).collect();

    format!(
        r#"{{
            "numbers": {{
                "ones": {{{}}},
                "tens": {{{}}},
                "scales": {{"hundred": "H", "thousand": "T", "lakh": "L", "crore": "C"}}
            }},
            "currency": {{
                "main_unit": {{"singular": "rupee", "plural": "rupees"}},
                "sub_unit": {{"singular": "paisa", "plural": "paise"}}
            }},
            "dates": {{"months": {{{}}}}}
        }}"#,
        ones.join(", "),
        tens.join(", "),
        months.join(", ")
    )
}

#[test]
fn test_extra_language_loaded_from_resource_dir() {
    let _guard = ENV_LOCK.lock().unwrap();
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("xx-TEST.json"), test_bundle_json()).unwrap();

    std::env::set_var("VAANI_RESOURCE_DIR", dir.path());

    let bundle = resources::load("xx-TEST").unwrap();
    assert_eq!(bundle.numbers.ones.get("5").unwrap(), "d5");
    assert_eq!(bundle.currency.main_unit.plural, "rupees");

    let languages = resources::available_languages();
    assert!(languages.contains(&"xx-TEST".to_string()));
    assert!(languages.contains(&"hi-IN".to_string()));

    std::env::remove_var("VAANI_RESOURCE_DIR");
}

#[test]
fn test_filesystem_bundle_overrides_builtin() {
    let _guard = ENV_LOCK.lock().unwrap();
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("hi-IN.json"), test_bundle_json()).unwrap();

    std::env::set_var("VAANI_RESOURCE_DIR", dir.path());

    let bundle = resources::load("hi-IN").unwrap();
    assert_eq!(bundle.numbers.scales.crore, "C");

    std::env::remove_var("VAANI_RESOURCE_DIR");

    // Without the override the embedded tables are back
    let builtin = resources::load("hi-IN").unwrap();
    assert_eq!(builtin.numbers.scales.crore, "करोड़");
}

#[test]
fn test_malformed_filesystem_bundle_is_rejected() {
    let _guard = ENV_LOCK.lock().unwrap();
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("yy-BAD.json"), "{\"numbers\": {}}").unwrap();

    std::env::set_var("VAANI_RESOURCE_DIR", dir.path());

    let err = resources::load("yy-BAD").unwrap_err();
    assert!(matches!(
        err,
        vaani_server::error::NormalizationError::MalformedResourceBundle { .. }
    ));

    std::env::remove_var("VAANI_RESOURCE_DIR");
}

#[test]
fn test_missing_resource_dir_falls_back_to_builtin() {
    let _guard = ENV_LOCK.lock().unwrap();
    std::env::set_var("VAANI_RESOURCE_DIR", "/nonexistent/path");

    let bundle = resources::load("hi-IN").unwrap();
    assert_eq!(bundle.currency.main_unit.singular, "रुपया");

    std::env::remove_var("VAANI_RESOURCE_DIR");
}
