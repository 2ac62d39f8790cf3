//! Performance instrumentation for the divider drag and the preview pipeline.
//!
//! ## Features
//!
//! - **Frame pacing**: interval between committed drag frames, with a summary
//!   logged when a drag ran below target
//! - **Scoped timers**: RAII-style timing for code blocks
//! - **Conditional compilation**: zero-cost when profiling is disabled
//!
//! ## Usage
//!
//! Enable profiling with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! livepane = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! use crate::profile_scope;
//!
//! fn on_pointer_move() {
//!     profile_scope!("drag_pointer_move");
//!     // ... work ...
//! }
//! ```

use std::collections::VecDeque;
use std::time::Instant;
use tracing::{debug, warn};

// ============================================================================
// Constants
// ============================================================================

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Number of frame intervals kept for the rolling average
const SAMPLE_COUNT: usize = 60;

/// Threshold multiplier for a slow frame (2.0 = twice the target)
const WARN_THRESHOLD: f64 = 2.0;

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

// ============================================================================
// Drag Frame Pacing
// ============================================================================

/// Tracks how regularly drag frames are committed.
///
/// Intervals are measured between consecutive `record_commit` calls, so the
/// first commit of a drag only sets the baseline.
#[derive(Debug, Default)]
pub struct FrameMonitor {
    intervals: VecDeque<f64>,
    last_commit: Option<Instant>,
    slow_frames: u64,
    total_frames: u64,
}

impl FrameMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a committed frame at `now`. Returns the interval since the
    /// previous commit in milliseconds.
    pub fn record_commit(&mut self, now: Instant) -> Option<f64> {
        let previous = self.last_commit.replace(now)?;
        let ms = now.saturating_duration_since(previous).as_secs_f64() * 1000.0;

        if self.intervals.len() >= SAMPLE_COUNT {
            self.intervals.pop_front();
        }
        self.intervals.push_back(ms);
        self.total_frames += 1;
        if ms > TARGET_FRAME_MS * WARN_THRESHOLD {
            self.slow_frames += 1;
        }
        Some(ms)
    }

    pub fn average_interval(&self) -> f64 {
        if self.intervals.is_empty() {
            return 0.0;
        }
        self.intervals.iter().sum::<f64>() / self.intervals.len() as f64
    }

    pub fn max_interval(&self) -> f64 {
        self.intervals.iter().copied().fold(0.0, f64::max)
    }

    pub fn slow_frame_percentage(&self) -> f64 {
        if self.total_frames == 0 {
            return 0.0;
        }
        (self.slow_frames as f64 / self.total_frames as f64) * 100.0
    }

    pub fn estimated_fps(&self) -> f64 {
        let avg = self.average_interval();
        if avg <= 0.0 {
            return 0.0;
        }
        1000.0 / avg
    }

    /// Log a summary when the drag ran below target, then start over.
    pub fn finish(&mut self) {
        let avg = self.average_interval();
        if avg > TARGET_FRAME_MS * WARN_THRESHOLD {
            warn!(
                avg_frame_ms = format!("{:.2}", avg),
                max_frame_ms = format!("{:.2}", self.max_interval()),
                slow_percentage = format!("{:.1}%", self.slow_frame_percentage()),
                estimated_fps = format!("{:.1}", self.estimated_fps()),
                "Divider drag below target frame rate"
            );
        } else if self.total_frames > 0 {
            debug!(
                frames = self.total_frames,
                estimated_fps = format!("{:.1}", self.estimated_fps()),
                "Divider drag frame pacing"
            );
        }
        self.reset();
    }

    pub fn reset(&mut self) {
        self.intervals.clear();
        self.last_commit = None;
        self.slow_frames = 0;
        self.total_frames = 0;
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that logs duration on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    /// Create a new scoped timer with a warning threshold.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Create a timer for profiling (lower threshold, 1ms).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}

// ============================================================================
// Timing Utilities
// ============================================================================

/// Measure execution time of a closure and return both the result and elapsed time.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}

/// Measure execution time and log if it exceeds the threshold.
///
/// ```ignore
/// let locator = measure_and_log("preview_recompute", 2.0, || sync.poll(now));
/// ```
#[inline]
pub fn measure_and_log<T, F: FnOnce() -> T>(name: &str, threshold_ms: f64, f: F) -> T {
    let (result, elapsed_ms) = measure(f);
    if elapsed_ms > threshold_ms {
        warn!(
            operation = name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", threshold_ms),
            "Slow operation"
        );
    }
    result
}
