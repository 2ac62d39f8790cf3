//! Preview locator builder.
//!
//! Turns a base URL and the settings bag into the URL the preview surface
//! loads. The consuming site reads `preview=true` plus one `preview_*`
//! parameter per field it knows how to override.

use crate::constants::PREVIEW_MARKER;
use crate::types::{PreviewLocator, PreviewSettings};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Why a locator could not be built. Only used for diagnostics; callers of
/// [`build`] get [`PreviewLocator::Empty`] instead.
#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("no base URL")]
    Blank,

    #[error("invalid URL: {0}")]
    Parse(#[from] url::ParseError),

    #[error("URL has no host: {0}")]
    NoHost(String),

    #[error("could not serialize {field}: {source}")]
    Encode {
        field: &'static str,
        source: serde_json::Error,
    },
}

/// How a settings field is turned into a parameter value.
#[derive(Clone, Copy)]
enum FieldKind {
    /// Strings and numbers
    Scalar,
    /// Strings, or objects serialized as JSON
    Style,
}

/// Settings field -> preview parameter, in emission order.
const FIELD_PARAMS: &[(&str, &str, FieldKind)] = &[
    ("primary_color", "preview_primary_color", FieldKind::Scalar),
    ("secondary_color", "preview_secondary_color", FieldKind::Scalar),
    ("header_style", "preview_header_style", FieldKind::Style),
    ("footer_color", "preview_footer_color", FieldKind::Scalar),
    ("footer_style", "preview_footer_style", FieldKind::Style),
    ("site", "preview_site_title", FieldKind::Scalar),
    ("image", "preview_logo_url", FieldKind::Scalar),
];

const MENU_WIDTH_PARAM: &str = "preview_menu_width";
const FONT_FAMILY: (&str, &str) = ("font_family", "preview_font_family");

fn scalar_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn style_value(field: &'static str, value: &Value) -> Result<Option<String>, LocatorError> {
    match value {
        Value::Object(map) if !map.is_empty() => serde_json::to_string(map)
            .map(Some)
            .map_err(|source| LocatorError::Encode { field, source }),
        other => Ok(scalar_value(other)),
    }
}

/// Menu width lives inside the header style object nowadays; older settings
/// carry it as a flat field. The nested value wins when both exist.
fn menu_width(settings: &PreviewSettings) -> Option<String> {
    settings
        .get("header_style")
        .and_then(|style| style.get("menu_width"))
        .and_then(scalar_value)
        .or_else(|| settings.get("menu_width").and_then(scalar_value))
}

/// Collect the preview parameters for `settings`, unpopulated fields omitted.
pub fn preview_params(settings: &PreviewSettings) -> Result<Vec<(&'static str, String)>, LocatorError> {
    let mut params = vec![(PREVIEW_MARKER.0, PREVIEW_MARKER.1.to_string())];

    for &(field, param, kind) in FIELD_PARAMS {
        let Some(value) = settings.get(field) else {
            continue;
        };
        let encoded = match kind {
            FieldKind::Scalar => scalar_value(value),
            FieldKind::Style => style_value(field, value)?,
        };
        if let Some(encoded) = encoded {
            params.push((param, encoded));
        }
    }

    if let Some(width) = menu_width(settings) {
        params.push((MENU_WIDTH_PARAM, width));
    }
    if let Some(font) = settings.get(FONT_FAMILY.0).and_then(scalar_value) {
        params.push((FONT_FAMILY.1, font));
    }

    Ok(params)
}

fn parse_absolute(raw: &str) -> Result<Url, LocatorError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LocatorError::Blank);
    }
    let url = Url::parse(raw)?;
    if !url.has_host() {
        return Err(LocatorError::NoHost(raw.to_string()));
    }
    Ok(url)
}

/// Build the locator, reporting why it failed.
///
/// A non-blank `override_url` wins over `base_url` and is returned as given,
/// without preview parameters.
pub fn try_build(
    base_url: &str,
    settings: &PreviewSettings,
    override_url: Option<&str>,
) -> Result<String, LocatorError> {
    if let Some(target) = override_url.map(str::trim).filter(|s| !s.is_empty()) {
        parse_absolute(target)?;
        return Ok(target.to_string());
    }

    let mut url = parse_absolute(base_url)?;
    let params = preview_params(settings)?;

    // Set semantics: a parameter we emit replaces one already on the base.
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !params.iter().any(|&(param, _)| param == &**key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .extend_pairs(params);

    Ok(url.into())
}

/// Build the preview locator. Never fails: anything unusable (blank base, a
/// half-typed URL, unserializable settings) yields [`PreviewLocator::Empty`].
pub fn build(base_url: &str, settings: &PreviewSettings, override_url: Option<&str>) -> PreviewLocator {
    match try_build(base_url, settings, override_url) {
        Ok(url) => PreviewLocator::Url(url),
        Err(e) => {
            debug!(base_url, ?override_url, error = %e, "No preview locator");
            PreviewLocator::Empty
        }
    }
}
