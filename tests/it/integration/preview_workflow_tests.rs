//! Preview workflows: locator derivation, debounce, reloads and load reports.

use livepane::config::EditorConfig;
use livepane::preview::{PreviewSynchronizer, SurfaceState, SyncTiming};
use livepane::webviews::LoadTracker;
use livepane::{PreviewLocator, PreviewSettings};
use std::time::{Duration, Instant};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn acme(color: &str) -> PreviewSettings {
    PreviewSettings::new()
        .with("site", "Acme")
        .with("primary_color", color)
}

/// A surface that loads whatever it was last told to, when asked to.
#[derive(Default)]
struct FakeSurface {
    shown: Option<(String, u64)>,
    navigations: usize,
}

impl FakeSurface {
    /// What the editor does on each tick: point the surface at the current
    /// locator whenever the generation moved.
    fn sync(&mut self, sync: &PreviewSynchronizer) {
        let Some(url) = sync.locator().as_str() else {
            self.shown = None;
            return;
        };
        if self.shown.as_ref().map(|(_, generation)| *generation) != Some(sync.generation()) {
            self.shown = Some((url.to_string(), sync.generation()));
            self.navigations += 1;
        }
    }

    fn finish_load(&self, sync: &mut PreviewSynchronizer) -> bool {
        match &self.shown {
            Some((_, generation)) => sync.on_surface_loaded(*generation),
            None => false,
        }
    }
}

#[test]
fn test_initial_locator_loads_and_becomes_ready() {
    let t0 = Instant::now();
    let mut sync = PreviewSynchronizer::new("https://example.com", acme("sky"), None, SyncTiming::default(), t0);
    let mut surface = FakeSurface::default();

    assert_eq!(sync.surface(), SurfaceState::Loading);
    surface.sync(&sync);
    let (url, _) = surface.shown.clone().unwrap();
    assert!(url.contains("preview=true"));
    assert!(url.contains("preview_site_title=Acme"));
    assert!(url.contains("preview_primary_color=sky"));

    assert!(surface.finish_load(&mut sync));
    assert_eq!(sync.surface(), SurfaceState::Ready);
    assert!(!sync.is_loading());
}

#[test]
fn test_refresh_reloads_same_url() {
    let t0 = Instant::now();
    let mut sync = PreviewSynchronizer::new("https://example.com", acme("sky"), None, SyncTiming::default(), t0);
    let mut surface = FakeSurface::default();
    surface.sync(&sync);
    surface.finish_load(&mut sync);
    let first_url = surface.shown.clone().unwrap().0;

    assert!(sync.set_refresh_key(1, t0 + ms(100)));
    assert!(sync.is_loading());
    surface.sync(&sync);

    assert_eq!(surface.navigations, 2);
    assert_eq!(surface.shown.clone().unwrap().0, first_url);
    assert!(surface.finish_load(&mut sync));
    assert_eq!(sync.surface(), SurfaceState::Ready);
}

#[test]
fn test_typing_burst_then_settings_change() {
    let t0 = Instant::now();
    let mut sync = PreviewSynchronizer::new("https://example.com", acme("sky"), None, SyncTiming::default(), t0);
    let mut surface = FakeSurface::default();
    surface.sync(&sync);
    surface.finish_load(&mut sync);

    // Editing the base URL field
    sync.set_base_url("https://new", t0 + ms(10));
    sync.set_base_url("https://new.example", t0 + ms(60));
    sync.poll(t0 + ms(100));
    surface.sync(&sync);
    assert_eq!(surface.navigations, 1);

    // A settings change meanwhile applies against the committed base
    assert!(sync.set_settings(acme("rose"), t0 + ms(150)));
    surface.sync(&sync);
    assert_eq!(surface.navigations, 2);
    assert!(surface.shown.clone().unwrap().0.starts_with("https://example.com/"));

    // The base commits once the window closes
    assert!(sync.poll(t0 + ms(560)));
    surface.sync(&sync);
    assert_eq!(surface.navigations, 3);
    let url = surface.shown.clone().unwrap().0;
    assert!(url.starts_with("https://new.example/"));
    assert!(url.contains("preview_primary_color=rose"));
}

#[test]
fn test_override_then_clear() {
    let t0 = Instant::now();
    let mut sync = PreviewSynchronizer::new("https://example.com", acme("sky"), None, SyncTiming::default(), t0);

    let target = "https://drafts.example.com/page/9".to_string();
    assert!(sync.set_override_url(Some(target.clone()), t0));
    assert_eq!(sync.locator(), &PreviewLocator::Url(target));

    assert!(sync.set_override_url(None, t0 + ms(5)));
    assert!(sync.locator().as_str().unwrap().starts_with("https://example.com/?preview=true"));
}

#[test]
fn test_clearing_base_shows_placeholder() {
    let t0 = Instant::now();
    let mut sync = PreviewSynchronizer::new("https://example.com", acme("sky"), None, SyncTiming::default(), t0);
    let mut surface = FakeSurface::default();
    surface.sync(&sync);

    sync.set_base_url("", t0 + ms(10));
    sync.poll(t0 + ms(510));
    surface.sync(&sync);

    assert_eq!(sync.surface(), SurfaceState::Placeholder);
    assert!(surface.shown.is_none());
    assert!(!sync.is_loading());
}

#[test]
fn test_stale_load_does_not_mark_ready() {
    let t0 = Instant::now();
    let mut sync = PreviewSynchronizer::new("https://example.com", acme("sky"), None, SyncTiming::default(), t0);
    let old_generation = sync.generation();

    sync.set_settings(acme("amber"), t0 + ms(20));
    assert!(!sync.on_surface_loaded(old_generation));
    assert!(sync.is_loading());

    assert!(sync.on_surface_loaded(sync.generation()));
    assert_eq!(sync.surface(), SurfaceState::Ready);
}

#[test]
fn test_config_timing_drives_timeout() {
    let config = EditorConfig {
        preview_load_timeout_ms: 2_000,
        ..Default::default()
    };
    let t0 = Instant::now();
    let mut sync = PreviewSynchronizer::new("https://example.com", acme("sky"), None, config.sync_timing(), t0);

    assert_eq!(sync.next_deadline(), Some(t0 + ms(2_000)));
    assert!(sync.check_load_timeout(t0 + ms(2_000)));
    assert_eq!(sync.surface(), SurfaceState::Unavailable);

    // Late report still recovers the surface
    assert!(sync.on_surface_loaded(sync.generation()));
    assert_eq!(sync.surface(), SurfaceState::Ready);
}

#[test]
fn test_old_page_finishing_after_settings_change_keeps_loading() {
    let t0 = Instant::now();
    let mut sync = PreviewSynchronizer::new("https://example.com", acme("sky"), None, SyncTiming::default(), t0);
    let first = sync.locator().as_str().unwrap().to_string();
    let mut tracker = LoadTracker::new(sync.generation(), &first);
    tracker.on_started(&first);

    // Edit lands while the first page is still loading
    assert!(sync.set_settings(acme("rose"), t0 + ms(30)));
    let second = sync.locator().as_str().unwrap().to_string();
    tracker.request(sync.generation(), &second);

    if let Some(generation) = tracker.on_finished() {
        sync.on_surface_loaded(generation);
    }
    assert!(sync.is_loading());

    tracker.on_started(&second);
    let generation = tracker.on_finished().unwrap();
    assert!(sync.on_surface_loaded(generation));
    assert_eq!(sync.surface(), SurfaceState::Ready);
}

#[test]
fn test_refresh_during_load_waits_for_reloaded_page() {
    let t0 = Instant::now();
    let mut sync = PreviewSynchronizer::new("https://example.com", acme("sky"), None, SyncTiming::default(), t0);
    let url = sync.locator().as_str().unwrap().to_string();
    let mut tracker = LoadTracker::new(sync.generation(), &url);
    tracker.on_started(&url);

    assert!(sync.set_refresh_key(1, t0 + ms(50)));
    tracker.request(sync.generation(), &url);

    assert_eq!(tracker.on_finished(), None);
    assert!(sync.is_loading());

    tracker.on_started(&url);
    assert!(sync.on_surface_loaded(tracker.on_finished().unwrap()));
    assert!(!sync.is_loading());
}
