//! Editor configuration.
//!
//! Stored as JSON under the platform config directory. Every field has a
//! default, so a partial file (or none at all) is fine.

use crate::constants::{
    BREAKPOINT_PX, CONFIG_DIR_NAME, CONFIG_FILE_NAME, CREATE_DEFAULT_PERCENT,
    DESKTOP_PREVIEW_PANE_PERCENT, EDIT_DEFAULT_PERCENT, MAX_DRAG_PERCENT, MIN_DRAG_PERCENT,
    MOBILE_PREVIEW_PANE_PERCENT, PREVIEW_DEBOUNCE, PREVIEW_LOAD_TIMEOUT,
};
use crate::error::{EditorError, EditorResult};
use crate::input::DragBounds;
use crate::layout::PreviewModeWidths;
use crate::preview::SyncTiming;
use crate::types::EditorProfile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Viewport width at or above which the layout is desktop
    pub breakpoint_px: f32,
    pub min_drag_percent: f32,
    pub max_drag_percent: f32,
    pub create_default_percent: f32,
    pub edit_default_percent: f32,
    pub desktop_preview_pane_percent: f32,
    pub mobile_preview_pane_percent: f32,
    pub preview_debounce_ms: u64,
    pub preview_load_timeout_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: BREAKPOINT_PX,
            min_drag_percent: MIN_DRAG_PERCENT,
            max_drag_percent: MAX_DRAG_PERCENT,
            create_default_percent: CREATE_DEFAULT_PERCENT,
            edit_default_percent: EDIT_DEFAULT_PERCENT,
            desktop_preview_pane_percent: DESKTOP_PREVIEW_PANE_PERCENT,
            mobile_preview_pane_percent: MOBILE_PREVIEW_PANE_PERCENT,
            preview_debounce_ms: PREVIEW_DEBOUNCE.as_millis() as u64,
            preview_load_timeout_ms: PREVIEW_LOAD_TIMEOUT.as_millis() as u64,
        }
    }
}

impl EditorConfig {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        match default_config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No config directory, using default editor config");
                Self::default()
            }
        }
    }

    /// Load from `path`. A missing file is silently the default; an unreadable
    /// or malformed one is logged and also the default.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Invalid editor config, using defaults");
                Self::default()
            }
        }
    }

    /// Strict read, for callers that want the error.
    pub fn read(path: &Path) -> EditorResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save to the default location.
    pub fn save(&self) -> EditorResult<()> {
        let path = default_config_path().ok_or(EditorError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> EditorResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Default editor pane width for the hosting screen.
    pub fn default_width(&self, profile: EditorProfile) -> f32 {
        let width = match profile {
            EditorProfile::Create => self.create_default_percent,
            EditorProfile::Edit => self.edit_default_percent,
        };
        self.drag_bounds().clamp(width)
    }

    pub fn drag_bounds(&self) -> DragBounds {
        DragBounds::new(self.min_drag_percent, self.max_drag_percent)
    }

    pub fn mode_widths(&self) -> PreviewModeWidths {
        PreviewModeWidths {
            desktop_percent: self.desktop_preview_pane_percent.clamp(0.0, 100.0),
            mobile_percent: self.mobile_preview_pane_percent.clamp(0.0, 100.0),
        }
    }

    pub fn sync_timing(&self) -> SyncTiming {
        SyncTiming {
            debounce: Duration::from_millis(self.preview_debounce_ms),
            load_timeout: Duration::from_millis(self.preview_load_timeout_ms),
        }
    }

    /// Breakpoint, with unusable values replaced by the default.
    pub fn breakpoint(&self) -> f32 {
        if self.breakpoint_px.is_finite() && self.breakpoint_px > 0.0 {
            self.breakpoint_px
        } else {
            BREAKPOINT_PX
        }
    }
}

/// `<config dir>/livepane/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
