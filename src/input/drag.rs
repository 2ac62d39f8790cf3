//! Divider drag controller - pointer lifecycle, width clamping, frame coalescing.
//!
//! ## Performance Notes
//!
//! Pointer moves arrive far more often than frames are painted. Each move only
//! records the latest clamped width; a single frame callback is outstanding at
//! a time and commits whatever width is pending when it fires. Moves between
//! two frames are therefore collapsed into one layout update.
//!
//! ## Listener Ownership
//!
//! The pointer-move/pointer-up listeners and the document affordances are
//! acquired in `begin_drag` and released in `end_drag`, nowhere else.
//! `end_drag` is idempotent and must run on teardown even mid-drag; dropping
//! the controller releases the affordances as a last resort.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::state::{DragBounds, DragSession, DragState};
use crate::affordance::{AffordanceOwner, DocumentAffordances};
use crate::profile_scope;
use crate::types::LayoutState;
use tracing::{debug, trace};

/// Identifies one requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

impl FrameToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// What the controller needs from the window it lives in.
pub trait DragHost {
    /// Width of the split container in the same units as pointer x.
    fn container_width(&self) -> f32;

    /// Start delivering pointer-move/pointer-up for the whole window.
    fn install_pointer_listeners(&mut self);

    /// Stop delivering pointer-move/pointer-up.
    fn remove_pointer_listeners(&mut self);

    /// Call back `on_animation_frame(token)` before the next paint.
    fn request_frame(&mut self, token: FrameToken);

    /// The frame for `token` must not commit anything anymore.
    fn cancel_frame(&mut self, token: FrameToken);
}

/// Counters for one drag session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragStats {
    pub moves: u64,
    pub frames_committed: u64,
    pub frames_cancelled: u64,
}

/// Owns the divider drag.
#[derive(Debug)]
pub struct DragResizeController {
    state: DragState,
    bounds: DragBounds,
    owner: AffordanceOwner,
    listeners_installed: bool,
    pending_width: Option<f32>,
    pending_frame: Option<FrameToken>,
    next_token: u64,
    stats: DragStats,
}

impl Default for DragResizeController {
    fn default() -> Self {
        Self::new(DragBounds::default())
    }
}

impl DragResizeController {
    pub fn new(bounds: DragBounds) -> Self {
        Self {
            state: DragState::Idle,
            bounds,
            owner: AffordanceOwner::next(),
            listeners_installed: false,
            pending_width: None,
            pending_frame: None,
            next_token: 0,
            stats: DragStats::default(),
        }
    }

    /// Open a drag session. Returns whether a session was opened.
    ///
    /// Ignored when the pane is collapsed, on mobile, or already dragging.
    pub fn begin_drag(
        &mut self,
        pointer_x: f32,
        current_width_percent: f32,
        layout: &LayoutState,
        host: &mut impl DragHost,
    ) -> bool {
        if self.state.is_dragging() {
            trace!("begin_drag ignored: drag already active");
            return false;
        }
        if layout.is_collapsed || layout.is_mobile {
            trace!(
                collapsed = layout.is_collapsed,
                mobile = layout.is_mobile,
                "begin_drag ignored: pane not resizable"
            );
            return false;
        }
        if !pointer_x.is_finite() {
            return false;
        }
        if DocumentAffordances::acquire(self.owner).is_err() {
            return false;
        }

        self.state
            .start(DragSession::new(pointer_x, current_width_percent));
        self.stats = DragStats::default();
        if !self.listeners_installed {
            host.install_pointer_listeners();
            self.listeners_installed = true;
        }
        debug!(pointer_x, current_width_percent, "Divider drag started");
        true
    }

    /// Record a pointer move and make sure one frame is pending to apply it.
    pub fn on_pointer_move(&mut self, pointer_x: f32, host: &mut impl DragHost) {
        profile_scope!("divider_pointer_move");

        let Some(session) = self.state.session().copied() else {
            return;
        };
        let Some(width) = session.width_at(pointer_x, host.container_width(), self.bounds) else {
            trace!(pointer_x, "Pointer move ignored: no usable container width");
            return;
        };

        self.stats.moves += 1;
        self.pending_width = Some(width);
        if self.pending_frame.is_none() {
            let token = FrameToken(self.next_token);
            self.next_token += 1;
            self.pending_frame = Some(token);
            host.request_frame(token);
        }
    }

    /// Commit the pending width for `token`. Stale or cancelled tokens and
    /// frames with nothing pending return `None`.
    pub fn on_animation_frame(&mut self, token: FrameToken) -> Option<f32> {
        if self.pending_frame != Some(token) {
            trace!(token = token.0, "Stale frame ignored");
            return None;
        }
        self.pending_frame = None;
        let width = self.pending_width.take()?;
        self.stats.frames_committed += 1;
        Some(width)
    }

    /// Close the session and release everything `begin_drag` acquired.
    ///
    /// Safe to call any number of times, with or without an active session.
    pub fn end_drag(&mut self, host: &mut impl DragHost) {
        if let Some(token) = self.pending_frame.take() {
            host.cancel_frame(token);
            self.stats.frames_cancelled += 1;
        }
        self.pending_width = None;

        if self.listeners_installed {
            host.remove_pointer_listeners();
            self.listeners_installed = false;
        }
        DocumentAffordances::release(self.owner);

        if self.state.is_dragging() {
            self.state.reset();
            debug!(
                moves = self.stats.moves,
                frames_committed = self.stats.frames_committed,
                frames_cancelled = self.stats.frames_cancelled,
                "Divider drag ended"
            );
        }
    }

    /// Double-click on the divider. Returns the width to apply, or `None` on
    /// mobile where the pane width is not used.
    pub fn reset_to_default(&self, default_percent: f32, layout: &LayoutState) -> Option<f32> {
        if layout.is_mobile {
            return None;
        }
        Some(default_percent.clamp(0.0, 100.0))
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.state.session()
    }

    pub fn listeners_installed(&self) -> bool {
        self.listeners_installed
    }

    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.pending_frame
    }

    pub fn owner(&self) -> AffordanceOwner {
        self.owner
    }

    pub fn bounds(&self) -> DragBounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: DragBounds) {
        self.bounds = bounds;
    }

    pub fn stats(&self) -> DragStats {
        self.stats
    }
}

impl Drop for DragResizeController {
    fn drop(&mut self) {
        DocumentAffordances::release(self.owner);
    }
}
