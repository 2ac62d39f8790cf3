//! Pointer input for the split-pane divider.
//!
//! ## Architecture
//!
//! The divider uses an explicit state machine (`DragState`) owned by the
//! `DragResizeController`. The controller never touches the window directly:
//! everything it needs (listener install/removal, frame scheduling, container
//! width) goes through the `DragHost` trait, which the editor implements over
//! gpui and the tests implement over counters.
//!
//! ## Modules
//!
//! - `state` - Drag state machine, drag session and bounds
//! - `drag` - Drag controller, host trait and frame coalescing

mod drag;
mod state;

pub use drag::{DragHost, DragResizeController, DragStats, FrameToken};
pub use state::{DragBounds, DragSession, DragState};
