//! Editor-wide constants.
//!
//! Centralizes layout bounds, timing values and preview parameter names so the
//! state machines and the view agree on them.

use std::time::Duration;

// ============================================================================
// Viewport
// ============================================================================

/// Viewport width (logical pixels) at or above which the layout is desktop
pub const BREAKPOINT_PX: f32 = 768.0;

// ============================================================================
// Pane Layout
// ============================================================================

/// Minimum editor pane width while dragging (percent of container)
pub const MIN_DRAG_PERCENT: f32 = 20.0;

/// Maximum editor pane width while dragging (percent of container)
pub const MAX_DRAG_PERCENT: f32 = 75.0;

/// Default editor pane width for the "Create" screen
pub const CREATE_DEFAULT_PERCENT: f32 = 40.0;

/// Default editor pane width for the "Edit" screen
pub const EDIT_DEFAULT_PERCENT: f32 = 30.0;

/// Editor pane width applied when switching to desktop preview (maximize preview)
pub const DESKTOP_PREVIEW_PANE_PERCENT: f32 = 25.0;

/// Editor pane width applied when switching to mobile preview (maximize settings)
pub const MOBILE_PREVIEW_PANE_PERCENT: f32 = 80.0;

/// Width of the divider drag handle in pixels
pub const DIVIDER_WIDTH: f32 = 8.0;

/// Height of the preview header bar in pixels
pub const PREVIEW_HEADER_HEIGHT: f32 = 44.0;

/// Width of the phone frame used by the mobile preview mode
pub const MOBILE_FRAME_WIDTH: f32 = 320.0;

// ============================================================================
// Preview Timing
// ============================================================================

/// Quiet period before a base URL change is applied to the preview
pub const PREVIEW_DEBOUNCE: Duration = Duration::from_millis(500);

/// How long the surface may stay loading before it is marked unavailable
pub const PREVIEW_LOAD_TIMEOUT: Duration = Duration::from_secs(15);

/// Interval of the editor's timer task (debounce commits, load reports,
/// timeouts, config reloads)
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

// ============================================================================
// Preview Parameters
// ============================================================================

/// Marker parameter telling the consuming page to apply preview overrides
pub const PREVIEW_MARKER: (&str, &str) = ("preview", "true");

/// Placeholder text when there is no usable locator
pub const PLACEHOLDER_TEXT: &str = "No website URL available for preview.";

/// Text shown once the surface is considered stuck
pub const UNAVAILABLE_TEXT: &str = "Preview unavailable";

// ============================================================================
// Config
// ============================================================================

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "livepane";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.json";
