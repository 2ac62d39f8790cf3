//! Viewport breakpoint monitor.
//!
//! Classifies the host viewport as desktop or mobile and reports a change only
//! when the classification crosses the breakpoint. The monitor itself is pure;
//! the editor feeds it from a single window-bounds subscription that lives as
//! long as the editor does.

use crate::constants::BREAKPOINT_PX;
use crate::types::ViewportClass;
use tracing::debug;

/// Tracks the desktop/mobile classification of the viewport.
#[derive(Debug, Clone)]
pub struct ViewportBreakpointMonitor {
    threshold: f32,
    current: Option<ViewportClass>,
    last_width: Option<f32>,
}

impl Default for ViewportBreakpointMonitor {
    fn default() -> Self {
        Self::new(BREAKPOINT_PX)
    }
}

impl ViewportBreakpointMonitor {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            current: None,
            last_width: None,
        }
    }

    /// Classify a width. Unknown or nonsensical widths count as desktop so a
    /// missing viewport query never locks the editor into the mobile layout.
    pub fn classify(&self, width: Option<f32>) -> ViewportClass {
        match width {
            Some(w) if w.is_finite() && w >= 0.0 && w < self.threshold => ViewportClass::Mobile,
            _ => ViewportClass::Desktop,
        }
    }

    /// Evaluate the initial classification. Always returns a class.
    pub fn activate(&mut self, width: Option<f32>) -> ViewportClass {
        let class = self.classify(width);
        debug!(?class, ?width, "Viewport monitor activated");
        self.current = Some(class);
        self.last_width = width;
        class
    }

    /// Feed a new viewport width. Returns the new class only when it flipped.
    ///
    /// Ignored until `activate` has run, and after `deactivate`.
    pub fn observe(&mut self, width: Option<f32>) -> Option<ViewportClass> {
        let current = self.current?;
        self.last_width = width;
        let class = self.classify(width);
        if class == current {
            return None;
        }
        debug!(from = ?current, to = ?class, "Viewport crossed breakpoint");
        self.current = Some(class);
        Some(class)
    }

    /// Stop reporting. The editor drops its window subscription alongside.
    pub fn deactivate(&mut self) {
        self.current = None;
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<ViewportClass> {
        self.current
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Change the breakpoint and re-classify the last seen width. Returns the
    /// new class when the current viewport ends up on the other side.
    pub fn set_threshold(&mut self, threshold: f32) -> Option<ViewportClass> {
        if threshold == self.threshold {
            return None;
        }
        debug!(from = self.threshold, to = threshold, "Breakpoint changed");
        self.threshold = threshold;
        self.observe(self.last_width)
    }

    pub fn last_width(&self) -> Option<f32> {
        self.last_width
    }
}
