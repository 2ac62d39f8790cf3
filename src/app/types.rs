//! Inputs the caller hands the editor.

use crate::types::PreviewSettings;

/// What the preview is built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewInputs {
    /// Site the preview points at; may be blank or half-typed
    pub base_url: String,
    pub settings: PreviewSettings,
    /// Explicit page to show instead of the parameterized base
    pub override_url: Option<String>,
}

impl PreviewInputs {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_settings(mut self, settings: PreviewSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_override(mut self, override_url: impl Into<String>) -> Self {
        self.override_url = Some(override_url.into());
        self
    }
}
