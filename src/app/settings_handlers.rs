//! Caller-facing setters and intents, plus editor config hot-reload.

use super::SplitPaneEditor;
use crate::config::EditorConfig;
use crate::config_watcher::{ConfigEvent, ConfigWatcher};
use crate::types::{LayoutState, PreviewMode, PreviewSettings};
use gpui::*;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info, warn};

impl SplitPaneEditor {
    // ------------------------------------------------------------------
    // Preview inputs
    // ------------------------------------------------------------------

    /// Base URL edits are debounced; the preview follows once typing stops.
    pub fn set_base_url(&mut self, url: impl Into<String>, cx: &mut Context<Self>) {
        self.preview.sync.set_base_url(url, Instant::now());
        cx.notify();
    }

    pub fn set_settings(&mut self, settings: PreviewSettings, cx: &mut Context<Self>) {
        if self.preview.sync.set_settings(settings, Instant::now()) {
            cx.notify();
        }
    }

    pub fn set_override_url(&mut self, override_url: Option<String>, cx: &mut Context<Self>) {
        if self.preview.sync.set_override_url(override_url, Instant::now()) {
            cx.notify();
        }
    }

    /// Reload the preview when `key` differs from the last key given.
    pub fn set_refresh_key(&mut self, key: u64, cx: &mut Context<Self>) {
        self.preview.refresh_key = key;
        if self.preview.sync.set_refresh_key(key, Instant::now()) {
            cx.notify();
        }
    }

    /// Bump the refresh key by one.
    pub fn refresh_preview(&mut self, cx: &mut Context<Self>) {
        let key = self.preview.refresh_key.wrapping_add(1);
        self.set_refresh_key(key, cx);
    }

    pub fn set_content(&mut self, content: AnyView, cx: &mut Context<Self>) {
        self.content = content;
        cx.notify();
    }

    // ------------------------------------------------------------------
    // Layout intents
    // ------------------------------------------------------------------

    pub fn toggle_collapse(&mut self, cx: &mut Context<Self>) {
        self.finish_drag(cx);
        let events = self.pane.machine.toggle_collapse();
        self.emit_events(events, cx);
        self.update_surface_visibility(cx);
    }

    pub fn set_preview_mode(&mut self, mode: PreviewMode, cx: &mut Context<Self>) {
        let events = self.pane.machine.set_preview_mode(mode);
        self.emit_events(events, cx);
    }

    /// Back to the profile's default width (divider double-click).
    pub fn reset_width(&mut self, cx: &mut Context<Self>) {
        let snapshot = self.pane.machine.snapshot();
        let Some(width) = self
            .divider
            .controller
            .reset_to_default(self.divider.default_width, &snapshot)
        else {
            return;
        };
        let events = self.pane.machine.reset(width);
        self.emit_events(events, cx);
        self.update_surface_visibility(cx);
    }

    pub fn layout_state(&self) -> LayoutState {
        self.pane.machine.snapshot()
    }

    pub fn preview_locator(&self) -> Option<&str> {
        self.preview.sync.locator().as_str()
    }

    // ------------------------------------------------------------------
    // Config
    // ------------------------------------------------------------------

    /// Apply a new config. The current split is kept; bounds, timings and
    /// defaults change, and a moved breakpoint re-classifies the viewport.
    pub fn set_config(&mut self, config: EditorConfig, cx: &mut Context<Self>) {
        self.divider.controller.set_bounds(config.drag_bounds());
        self.divider.default_width = config.default_width(self.profile);
        self.pane.machine.set_mode_widths(config.mode_widths());
        self.preview.sync.set_timing(config.sync_timing());
        let flipped = self.pane.viewport.set_threshold(config.breakpoint());
        self.config = config;
        if let Some(class) = flipped {
            self.apply_breakpoint(class, cx);
        }
        cx.notify();
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Reload the config whenever the file at `path` changes.
    pub fn watch_config(&mut self, path: PathBuf) {
        match ConfigWatcher::new(path) {
            Ok(watcher) => self.system.config_watcher = Some(watcher),
            Err(e) => warn!(error = %e, "Config hot-reload disabled"),
        }
    }

    /// Returns whether a new config was applied.
    pub(crate) fn check_config_reload(&mut self, cx: &mut Context<Self>) -> bool {
        let Some(watcher) = self.system.config_watcher.as_mut() else {
            return false;
        };
        let Some(event) = watcher.poll() else {
            return false;
        };
        match event {
            ConfigEvent::Modified | ConfigEvent::Created => {
                let config = EditorConfig::load_from(watcher.path());
                info!("Editor config changed, reloading");
                self.set_config(config, cx);
                true
            }
            ConfigEvent::Deleted => {
                warn!("Editor config deleted, keeping current values");
                false
            }
            ConfigEvent::Error(e) => {
                error!("Config watch error: {}", e);
                false
            }
        }
    }
}
