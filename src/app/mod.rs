//! Application module - the split-pane editor view.
//!
//! This module is organized into several submodules:
//! - `types` - Caller inputs
//! - `state` - The SplitPaneEditor struct definition and sub-structs
//! - `lifecycle` - Construction, timer task, viewport subscription, teardown
//! - `pointer` - Divider drag and double-click handling
//! - `preview_webviews` - Preview surface creation, navigation and visibility
//! - `settings_handlers` - Caller setters, layout intents, config reload

mod lifecycle;
mod pointer;
mod preview_webviews;
mod settings_handlers;
mod state;
mod types;

pub use state::SplitPaneEditor;
pub use types::PreviewInputs;

// Re-export sub-structs for use in other modules
pub use state::{DividerState, PaneState, PreviewState, SystemState, WindowDragHost};
