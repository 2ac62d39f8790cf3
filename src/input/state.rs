//! Drag state - the divider's pointer lifecycle as an explicit state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging     (pointer down on divider, pane expanded, desktop)
//! Dragging -> Idle     (pointer up, teardown, or explicit end)
//! ```

use crate::constants::{MAX_DRAG_PERCENT, MIN_DRAG_PERCENT};

/// An open drag on the divider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer x (window coordinates) when the drag started
    pub start_pointer_x: f32,
    /// Pane width when the drag started
    pub start_width_percent: f32,
}

impl DragSession {
    pub fn new(start_pointer_x: f32, start_width_percent: f32) -> Self {
        Self {
            start_pointer_x,
            start_width_percent,
        }
    }

    /// Width for a pointer position, clamped to the drag bounds.
    ///
    /// Returns `None` when the container has no usable width.
    pub fn width_at(&self, pointer_x: f32, container_width: f32, bounds: DragBounds) -> Option<f32> {
        if !container_width.is_finite() || container_width <= 0.0 || !pointer_x.is_finite() {
            return None;
        }
        let delta_percent = (pointer_x - self.start_pointer_x) / container_width * 100.0;
        Some(bounds.clamp(self.start_width_percent + delta_percent))
    }
}

/// Width range enforced while dragging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragBounds {
    pub min_percent: f32,
    pub max_percent: f32,
}

impl Default for DragBounds {
    fn default() -> Self {
        Self {
            min_percent: MIN_DRAG_PERCENT,
            max_percent: MAX_DRAG_PERCENT,
        }
    }
}

impl DragBounds {
    /// Build bounds, falling back to the defaults when `min > max`.
    pub fn new(min_percent: f32, max_percent: f32) -> Self {
        if min_percent.is_finite() && max_percent.is_finite() && min_percent <= max_percent {
            Self {
                min_percent: min_percent.clamp(0.0, 100.0),
                max_percent: max_percent.clamp(0.0, 100.0),
            }
        } else {
            Self::default()
        }
    }

    pub fn clamp(&self, width: f32) -> f32 {
        width.clamp(self.min_percent, self.max_percent)
    }
}

/// Divider pointer state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    /// No drag in progress
    #[default]
    Idle,
    /// Divider is being dragged
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    pub fn start(&mut self, session: DragSession) {
        *self = Self::Dragging(session);
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
