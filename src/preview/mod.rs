//! Live preview pipeline.
//!
//! ## Modules
//!
//! - `locator` - Settings + base URL -> preview URL (pure)
//! - `sync` - Debounced recomputation and surface load state

pub mod locator;
mod sync;

pub use locator::{LocatorError, build as build_locator, preview_params};
pub use sync::{PreviewSynchronizer, SurfaceState, SyncTiming};
