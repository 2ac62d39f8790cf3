//! Pane layout state machine.
//!
//! ## States
//!
//! ```text
//! Expanded(width) <-> Collapsed          (toggle_collapse on desktop)
//! Expanded | Collapsed -> MobileOverlay  (viewport crosses to mobile)
//! MobileOverlay -> Expanded | Collapsed  (viewport crosses to desktop,
//!                                         restoring the last desktop choice)
//! MobileOverlay(open) <-> MobileOverlay(!open)  (toggle_collapse on mobile)
//! ```
//!
//! Every intent returns the caller-facing events it caused, computed by
//! diffing the layout snapshot before and after.

use crate::constants::{DESKTOP_PREVIEW_PANE_PERCENT, MOBILE_PREVIEW_PANE_PERCENT};
use crate::types::{EditorEvent, LayoutState, PreviewMode, ViewportClass};
use tracing::debug;

/// Where the editor pane currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaneLayout {
    /// Side by side with the preview, at `width` percent
    Expanded { width: f32 },
    /// Hidden on desktop, preview takes the full width
    Collapsed,
    /// Mobile: content is a full-width overlay above the preview
    MobileOverlay { open: bool },
}

/// Widths applied by the preview-mode shortcut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewModeWidths {
    pub desktop_percent: f32,
    pub mobile_percent: f32,
}

impl Default for PreviewModeWidths {
    fn default() -> Self {
        Self {
            desktop_percent: DESKTOP_PREVIEW_PANE_PERCENT,
            mobile_percent: MOBILE_PREVIEW_PANE_PERCENT,
        }
    }
}

impl PreviewModeWidths {
    pub fn for_mode(&self, mode: PreviewMode) -> f32 {
        match mode {
            PreviewMode::Desktop => self.desktop_percent,
            PreviewMode::Mobile => self.mobile_percent,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayoutStateMachine {
    layout: PaneLayout,
    /// Width restored when the pane expands again
    last_width: f32,
    /// Desktop choice remembered while on mobile
    desktop_collapsed: bool,
    preview_mode: PreviewMode,
    dragging: bool,
    mode_widths: PreviewModeWidths,
}

fn sanitize_width(width: f32) -> Option<f32> {
    width.is_finite().then(|| width.clamp(0.0, 100.0))
}

impl LayoutStateMachine {
    pub fn new(default_width: f32, class: ViewportClass, mode_widths: PreviewModeWidths) -> Self {
        let width = sanitize_width(default_width).unwrap_or(DESKTOP_PREVIEW_PANE_PERCENT);
        let layout = match class {
            ViewportClass::Desktop => PaneLayout::Expanded { width },
            ViewportClass::Mobile => PaneLayout::MobileOverlay { open: true },
        };
        Self {
            layout,
            last_width: width,
            desktop_collapsed: false,
            preview_mode: PreviewMode::default(),
            dragging: false,
            mode_widths,
        }
    }

    pub fn layout(&self) -> PaneLayout {
        self.layout
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self.layout, PaneLayout::MobileOverlay { .. })
    }

    pub fn preview_mode(&self) -> PreviewMode {
        self.preview_mode
    }

    pub fn snapshot(&self) -> LayoutState {
        let (pane_width_percent, is_collapsed, is_mobile, overlay_open) = match self.layout {
            PaneLayout::Expanded { width } => (width, false, false, false),
            PaneLayout::Collapsed => (self.last_width, true, false, false),
            PaneLayout::MobileOverlay { open } => (self.last_width, true, true, open),
        };
        LayoutState {
            pane_width_percent,
            is_collapsed,
            is_mobile,
            is_dragging: self.dragging,
            preview_mode: self.preview_mode,
            overlay_open,
        }
    }

    fn transition(&mut self, f: impl FnOnce(&mut Self)) -> Vec<EditorEvent> {
        let before = self.snapshot();
        f(self);
        let after = self.snapshot();

        let mut events = Vec::new();
        if after.pane_width_percent != before.pane_width_percent {
            events.push(EditorEvent::WidthChanged(after.pane_width_percent));
        }
        if after.is_collapsed != before.is_collapsed {
            events.push(EditorEvent::CollapsedToggled(after.is_collapsed));
        }
        if after.preview_mode != before.preview_mode {
            events.push(EditorEvent::PreviewModeChanged(after.preview_mode));
        }
        if before != after {
            debug!(?before, ?after, "Layout transition");
        }
        events
    }

    /// Apply a viewport classification.
    pub fn on_breakpoint(&mut self, class: ViewportClass) -> Vec<EditorEvent> {
        self.transition(|this| match (class, this.layout) {
            (ViewportClass::Mobile, PaneLayout::MobileOverlay { .. }) => {}
            (ViewportClass::Mobile, desktop) => {
                this.desktop_collapsed = matches!(desktop, PaneLayout::Collapsed);
                if let PaneLayout::Expanded { width } = desktop {
                    this.last_width = width;
                }
                this.dragging = false;
                this.layout = PaneLayout::MobileOverlay { open: true };
            }
            (ViewportClass::Desktop, PaneLayout::MobileOverlay { .. }) => {
                this.layout = if this.desktop_collapsed {
                    PaneLayout::Collapsed
                } else {
                    PaneLayout::Expanded {
                        width: this.last_width,
                    }
                };
            }
            (ViewportClass::Desktop, _) => {}
        })
    }

    /// Collapse/expand on desktop, open/close the overlay on mobile.
    pub fn toggle_collapse(&mut self) -> Vec<EditorEvent> {
        self.transition(|this| {
            this.layout = match this.layout {
                PaneLayout::Expanded { width } => {
                    this.last_width = width;
                    this.dragging = false;
                    PaneLayout::Collapsed
                }
                PaneLayout::Collapsed => PaneLayout::Expanded {
                    width: this.last_width,
                },
                PaneLayout::MobileOverlay { open } => PaneLayout::MobileOverlay { open: !open },
            };
        })
    }

    /// Switch preview mode and move the pane to the mode's width.
    ///
    /// When the pane is not expanded the width is remembered for the next
    /// expansion instead.
    pub fn set_preview_mode(&mut self, mode: PreviewMode) -> Vec<EditorEvent> {
        let target = self.mode_widths.for_mode(mode);
        self.transition(|this| {
            this.preview_mode = mode;
            if let Some(width) = sanitize_width(target) {
                this.last_width = width;
                if let PaneLayout::Expanded { width: w } = &mut this.layout {
                    *w = width;
                }
            }
        })
    }

    /// Apply a width committed by the drag controller. Ignored unless expanded.
    pub fn resize(&mut self, width: f32) -> Vec<EditorEvent> {
        self.transition(|this| {
            let Some(width) = sanitize_width(width) else {
                return;
            };
            if let PaneLayout::Expanded { width: w } = &mut this.layout {
                *w = width;
                this.last_width = width;
            }
        })
    }

    /// Expand to `default_width`, clearing collapsed. Ignored on mobile.
    pub fn reset(&mut self, default_width: f32) -> Vec<EditorEvent> {
        self.transition(|this| {
            if this.is_mobile() {
                return;
            }
            let Some(width) = sanitize_width(default_width) else {
                return;
            };
            this.last_width = width;
            this.layout = PaneLayout::Expanded { width };
        })
    }

    /// Track the drag flag. Only an expanded pane can be dragging.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging && matches!(self.layout, PaneLayout::Expanded { .. });
    }

    pub fn set_mode_widths(&mut self, mode_widths: PreviewModeWidths) {
        self.mode_widths = mode_widths;
    }
}
