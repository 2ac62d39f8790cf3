//! Preview synchronizer - debounced locator recomputation and load state.
//!
//! The synchronizer is driven by the editor with explicit `Instant`s so the
//! timing rules can be tested without a clock:
//!
//! - base URL changes wait for a quiet period (default 500 ms); a newer base
//!   restarts the window, so at most one recomputation is pending
//! - settings and override changes recompute immediately against the last
//!   committed base
//! - a new locator bumps the generation and puts the surface into `Loading`
//!   until the surface reports a load for that generation
//! - a changed refresh key reloads the same locator under a new generation
//! - a surface still loading after the load timeout becomes `Unavailable`

use super::locator;
use crate::constants::{PREVIEW_DEBOUNCE, PREVIEW_LOAD_TIMEOUT};
use crate::types::{PreviewLocator, PreviewSettings};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// What the preview surface should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    /// No usable locator
    Placeholder,
    /// Source set, waiting for the surface to report a load
    Loading,
    /// Surface reported a load for the current generation
    Ready,
    /// Load did not complete within the timeout
    Unavailable,
}

/// Timing knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyncTiming {
    pub debounce: Duration,
    pub load_timeout: Duration,
}

impl Default for SyncTiming {
    fn default() -> Self {
        Self {
            debounce: PREVIEW_DEBOUNCE,
            load_timeout: PREVIEW_LOAD_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone)]
struct PendingBase {
    url: String,
    since: Instant,
}

#[derive(Debug, Clone)]
pub struct PreviewSynchronizer {
    committed_base: String,
    pending: Option<PendingBase>,
    settings: PreviewSettings,
    override_url: Option<String>,
    refresh_key: u64,
    locator: PreviewLocator,
    surface: SurfaceState,
    generation: u64,
    loading_since: Option<Instant>,
    timing: SyncTiming,
    recompute_count: u64,
}

impl PreviewSynchronizer {
    /// Create a synchronizer. The initial base URL is applied immediately.
    pub fn new(
        base_url: impl Into<String>,
        settings: PreviewSettings,
        override_url: Option<String>,
        timing: SyncTiming,
        now: Instant,
    ) -> Self {
        let mut sync = Self {
            committed_base: base_url.into(),
            pending: None,
            settings,
            override_url,
            refresh_key: 0,
            locator: PreviewLocator::Empty,
            surface: SurfaceState::Placeholder,
            generation: 0,
            loading_since: None,
            timing,
            recompute_count: 0,
        };
        sync.recompute(now);
        sync
    }

    /// Queue a base URL change behind the debounce window.
    pub fn set_base_url(&mut self, url: impl Into<String>, now: Instant) {
        let url = url.into();
        let latest = self
            .pending
            .as_ref()
            .map(|p| p.url.as_str())
            .unwrap_or(&self.committed_base);
        if latest == url {
            return;
        }
        debug!(%url, "Base URL change queued");
        self.pending = Some(PendingBase { url, since: now });
    }

    /// Apply a settings change right away.
    pub fn set_settings(&mut self, settings: PreviewSettings, now: Instant) -> bool {
        if settings == self.settings {
            return false;
        }
        self.settings = settings;
        self.recompute(now)
    }

    /// Apply an override change right away.
    pub fn set_override_url(&mut self, override_url: Option<String>, now: Instant) -> bool {
        if override_url == self.override_url {
            return false;
        }
        self.override_url = override_url;
        self.recompute(now)
    }

    /// Force a reload of the current locator when `key` differs from the last
    /// key seen. Returns whether a reload was started.
    pub fn set_refresh_key(&mut self, key: u64, now: Instant) -> bool {
        if key == self.refresh_key {
            return false;
        }
        self.refresh_key = key;
        if self.locator.is_empty() {
            return false;
        }
        debug!(key, "Forced preview reload");
        self.start_loading(now);
        true
    }

    /// Commit the pending base URL once its window has elapsed. Returns
    /// whether a commit happened.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| now.saturating_duration_since(p.since) >= self.timing.debounce);
        if !due {
            return false;
        }
        if let Some(pending) = self.pending.take() {
            self.committed_base = pending.url;
            self.recompute(now);
        }
        true
    }

    /// The surface finished loading `generation`. Loads for older generations
    /// are ignored. Returns whether the state changed.
    pub fn on_surface_loaded(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.locator.is_empty() {
            debug!(generation, current = self.generation, "Stale surface load ignored");
            return false;
        }
        match self.surface {
            SurfaceState::Loading | SurfaceState::Unavailable => {
                self.surface = SurfaceState::Ready;
                self.loading_since = None;
                true
            }
            SurfaceState::Ready | SurfaceState::Placeholder => false,
        }
    }

    /// Mark a stuck load as unavailable. Returns whether the state changed.
    pub fn check_load_timeout(&mut self, now: Instant) -> bool {
        let Some(since) = self.loading_since else {
            return false;
        };
        if self.surface != SurfaceState::Loading
            || now.saturating_duration_since(since) < self.timing.load_timeout
        {
            return false;
        }
        warn!(
            locator = ?self.locator.as_str(),
            generation = self.generation,
            timeout_ms = self.timing.load_timeout.as_millis() as u64,
            "Preview load timed out"
        );
        self.surface = SurfaceState::Unavailable;
        self.loading_since = None;
        true
    }

    /// Mark the surface unavailable right away (e.g. it could not be created).
    pub fn mark_unavailable(&mut self) {
        if !self.locator.is_empty() {
            self.surface = SurfaceState::Unavailable;
            self.loading_since = None;
        }
    }

    /// The next instant at which `poll` or `check_load_timeout` has work.
    pub fn next_deadline(&self) -> Option<Instant> {
        let debounce = self.pending.as_ref().map(|p| p.since + self.timing.debounce);
        let timeout = match self.surface {
            SurfaceState::Loading => self.loading_since.map(|s| s + self.timing.load_timeout),
            _ => None,
        };
        match (debounce, timeout) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// How long the host may sleep before calling `poll` again, capped at
    /// `max`. Zero when a deadline has already passed.
    pub fn poll_delay(&self, now: Instant, max: Duration) -> Duration {
        self.next_deadline()
            .map_or(max, |deadline| deadline.saturating_duration_since(now).min(max))
    }

    /// Drop the pending window and stop timing the current load.
    pub fn teardown(&mut self) {
        if self.pending.take().is_some() {
            debug!("Pending base URL change cancelled");
        }
        self.loading_since = None;
    }

    fn start_loading(&mut self, now: Instant) {
        self.generation += 1;
        self.surface = SurfaceState::Loading;
        self.loading_since = Some(now);
    }

    fn recompute(&mut self, now: Instant) -> bool {
        self.recompute_count += 1;
        let next = locator::build(&self.committed_base, &self.settings, self.override_url.as_deref());
        if next == self.locator {
            return false;
        }
        debug!(from = ?self.locator.as_str(), to = ?next.as_str(), "Preview locator changed");
        self.locator = next;
        if self.locator.is_empty() {
            self.surface = SurfaceState::Placeholder;
            self.loading_since = None;
        } else {
            self.start_loading(now);
        }
        true
    }

    pub fn locator(&self) -> &PreviewLocator {
        &self.locator
    }

    pub fn surface(&self) -> SurfaceState {
        self.surface
    }

    pub fn is_loading(&self) -> bool {
        self.surface == SurfaceState::Loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn committed_base(&self) -> &str {
        &self.committed_base
    }

    pub fn has_pending_base(&self) -> bool {
        self.pending.is_some()
    }

    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    pub fn settings(&self) -> &PreviewSettings {
        &self.settings
    }

    pub fn set_timing(&mut self, timing: SyncTiming) {
        self.timing = timing;
    }
}
