//! Core types shared by the layout, drag and preview state machines.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Layout Types
// ============================================================================

/// Which preview the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewMode {
    /// Full-width preview, narrow editor pane
    #[default]
    Desktop,
    /// Phone-sized preview, wide editor pane
    Mobile,
}

impl PreviewMode {
    pub fn label(&self) -> &'static str {
        match self {
            PreviewMode::Desktop => "Desktop",
            PreviewMode::Mobile => "Mobile",
        }
    }
}

/// Binary viewport classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Desktop,
    Mobile,
}

impl ViewportClass {
    pub fn is_mobile(&self) -> bool {
        matches!(self, ViewportClass::Mobile)
    }
}

/// Which screen hosts the editor. The two screens differ only in their
/// default split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorProfile {
    Create,
    Edit,
}

/// Flattened view of the layout, for rendering and for callers that persist or
/// report it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    pub pane_width_percent: f32,
    pub is_collapsed: bool,
    pub is_mobile: bool,
    pub is_dragging: bool,
    pub preview_mode: PreviewMode,
    /// Whether the mobile content overlay is shown (always false on desktop)
    pub overlay_open: bool,
}

/// Notifications for the caller. They never feed back into the editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorEvent {
    WidthChanged(f32),
    CollapsedToggled(bool),
    PreviewModeChanged(PreviewMode),
}

// ============================================================================
// Preview Types
// ============================================================================

/// Opaque key/value bag describing the site being edited.
///
/// Owned by the caller; the editor only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreviewSettings(Map<String, Value>);

impl PreviewSettings {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert, mostly for tests and demos.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for PreviewSettings {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Result of building a preview locator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewLocator {
    /// Fully-qualified absolute URL
    Url(String),
    /// No usable URL; the surface shows a placeholder
    #[default]
    Empty,
}

impl PreviewLocator {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PreviewLocator::Url(url) => Some(url),
            PreviewLocator::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PreviewLocator::Empty)
    }
}
