//! livepane - split-pane editor with a synchronized live preview.
//!
//! A draggable two-pane layout (content on the left, a webview preview on the
//! right) with resize bounds, collapse and mobile-overlay states, and a
//! preview whose URL is derived from a settings bag through debounced,
//! validated recomputation.
//!
//! The interaction logic lives in framework-free state machines
//! (`viewport`, `input`, `layout`, `preview`) that are unit tested without a
//! window. `app` and `render` wire them into a gpui view.

pub mod affordance;
pub mod app;
pub mod config;
pub mod config_watcher;
pub mod constants;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;
pub mod perf;
pub mod preview;
pub mod render;
pub mod types;
pub mod viewport;
pub mod webviews;

pub use app::{PreviewInputs, SplitPaneEditor};
pub use error::{EditorError, EditorResult};
pub use types::{EditorEvent, EditorProfile, LayoutState, PreviewLocator, PreviewMode, PreviewSettings};
