//! WebView-based preview surface.
//!
//! ## Modules
//!
//! - `preview_surface` - Sandboxed child webview hosting the preview locator

mod preview_surface;

pub use preview_surface::{LoadTracker, PreviewSurface, SandboxPolicy};
