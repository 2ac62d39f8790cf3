//! Unit tests for preview locator building.

use livepane::preview::locator::{LocatorError, try_build};
use livepane::preview::{build_locator, preview_params};
use livepane::{PreviewLocator, PreviewSettings};
use serde_json::json;

fn full_settings() -> PreviewSettings {
    PreviewSettings::new()
        .with("site", "Acme & Sons")
        .with("primary_color", "#0ea5e9")
        .with("secondary_color", "slate")
        .with("header_style", json!({ "layout": "centered", "menu_width": 240 }))
        .with("footer_color", "zinc")
        .with("image", "https://cdn.example.com/logo.png")
        .with("font_family", "Inter")
}

#[test]
fn test_site_and_color_scenario() {
    let settings = PreviewSettings::new()
        .with("site", "Acme")
        .with("primary_color", "sky");
    let locator = build_locator("https://example.com", &settings, None);

    insta::assert_snapshot!(
        locator.as_str().unwrap_or_default(),
        @"https://example.com/?preview=true&preview_primary_color=sky&preview_site_title=Acme"
    );
}

#[test]
fn test_full_settings_parameters() {
    let params = preview_params(&full_settings()).unwrap();
    let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();

    assert_eq!(
        keys,
        vec![
            "preview",
            "preview_primary_color",
            "preview_secondary_color",
            "preview_header_style",
            "preview_footer_color",
            "preview_site_title",
            "preview_logo_url",
            "preview_menu_width",
            "preview_font_family",
        ]
    );
    let menu = params.iter().find(|(k, _)| *k == "preview_menu_width").unwrap();
    assert_eq!(menu.1, "240");
}

#[test]
fn test_values_are_percent_encoded() {
    let locator = build_locator("https://example.com", &full_settings(), None);
    let url = locator.as_str().unwrap();

    assert!(url.contains("preview_site_title=Acme+%26+Sons"));
    assert!(url.contains("preview_primary_color=%230ea5e9"));
    assert!(!url.contains('#'));
}

#[test]
fn test_build_is_deterministic() {
    let settings = full_settings();
    let first = build_locator("https://example.com/shop?lang=en", &settings, None);
    for _ in 0..10 {
        assert_eq!(build_locator("https://example.com/shop?lang=en", &settings, None), first);
    }
    assert!(first.as_str().unwrap().starts_with("https://example.com/shop?lang=en&preview=true"));
}

#[test]
fn test_existing_preview_params_are_replaced() {
    let settings = PreviewSettings::new().with("primary_color", "sky");
    let locator = build_locator(
        "https://example.com/?preview=false&preview_primary_color=red&page=2",
        &settings,
        None,
    );

    assert_eq!(
        locator.as_str(),
        Some("https://example.com/?page=2&preview=true&preview_primary_color=sky")
    );
}

#[test]
fn test_override_wins_verbatim() {
    let target = "https://preview.example.net/draft/42?token=abc";
    let locator = build_locator("https://example.com", &full_settings(), Some(target));
    assert_eq!(locator, PreviewLocator::Url(target.to_string()));
}

#[test]
fn test_blank_override_falls_back_to_base() {
    let settings = PreviewSettings::new();
    let locator = build_locator("https://example.com", &settings, Some("  "));
    assert_eq!(locator.as_str(), Some("https://example.com/?preview=true"));
}

#[test]
fn test_invalid_override_is_empty() {
    let locator = build_locator("https://example.com", &PreviewSettings::new(), Some("/relative/path"));
    assert!(locator.is_empty());
}

#[test]
fn test_unusable_inputs_report_why() {
    let settings = PreviewSettings::new();

    assert!(matches!(try_build("", &settings, None), Err(LocatorError::Blank)));
    assert!(matches!(try_build("example", &settings, None), Err(LocatorError::Parse(_))));
    assert!(matches!(
        try_build("data:text/plain,hello", &settings, None),
        Err(LocatorError::NoHost(_))
    ));
}

#[test]
fn test_empty_and_null_fields_are_omitted() {
    let settings = PreviewSettings::new()
        .with("site", "")
        .with("primary_color", serde_json::Value::Null)
        .with("header_style", json!({}))
        .with("unknown_field", "ignored");

    let params = preview_params(&settings).unwrap();
    assert_eq!(params, vec![("preview", "true".to_string())]);
}
