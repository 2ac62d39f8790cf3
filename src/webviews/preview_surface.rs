//! Sandboxed webview hosting the live preview.
//!
//! The surface loads whatever locator the synchronizer hands it and reports
//! finished page loads back as the generation whose navigation started them,
//! so the synchronizer can drop reports that belong to an older source.
//!
//! ## Sandbox
//!
//! - navigation is limited to the origin of the current locator
//! - devtools are off
//! - the session is incognito (no cookies or storage shared with other runs)

use crate::error::EditorResult;
use gpui::*;
use gpui_component::webview::WebView;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::{trace, warn};
use url::{Origin, Url};

/// Which navigations the preview may perform.
#[derive(Debug, Clone)]
pub struct SandboxPolicy {
    origin: Option<Origin>,
}

impl SandboxPolicy {
    pub fn for_locator(locator: &str) -> Self {
        Self {
            origin: Url::parse(locator).ok().map(|url| url.origin()),
        }
    }

    /// Same-origin navigation only. `about:blank` is always allowed so the
    /// surface can be cleared.
    pub fn allows_navigation(&self, target: &str) -> bool {
        if target == "about:blank" {
            return true;
        }
        let Some(origin) = &self.origin else {
            return false;
        };
        match Url::parse(target) {
            Ok(url) => url.origin() == *origin,
            Err(_) => false,
        }
    }
}

fn same_page(a: &str, b: &str) -> bool {
    match (Url::parse(a), Url::parse(b)) {
        (Ok(mut a), Ok(mut b)) => {
            a.set_fragment(None);
            b.set_fragment(None);
            a == b
        }
        _ => a == b,
    }
}

/// Ties page-load events to the navigation that caused them.
///
/// A load is tagged with the requested generation when it starts, and only a
/// finish for the load started under the current request is reported. A
/// previous page finishing after a newer `request` is therefore dropped, as
/// is a page the user navigated to from inside the preview.
#[derive(Debug, Clone, Default)]
pub struct LoadTracker {
    requested: Option<(u64, String)>,
    in_flight: Option<u64>,
}

impl LoadTracker {
    pub fn new(generation: u64, locator: &str) -> Self {
        let mut tracker = Self::default();
        tracker.request(generation, locator);
        tracker
    }

    /// The surface was told to load `locator` as `generation`.
    pub fn request(&mut self, generation: u64, locator: &str) {
        self.requested = Some((generation, locator.to_string()));
    }

    pub fn on_started(&mut self, url: &str) {
        self.in_flight = match &self.requested {
            Some((generation, locator)) if same_page(url, locator) => Some(*generation),
            _ => None,
        };
    }

    /// Generation to report for a finished load, if it belongs to the
    /// current request.
    pub fn on_finished(&mut self) -> Option<u64> {
        let started = self.in_flight.take()?;
        let (requested, _) = self.requested.as_ref()?;
        if started == *requested {
            Some(started)
        } else {
            trace!(started, requested = *requested, "Load finished for an older request");
            None
        }
    }
}

pub struct PreviewSurface {
    pub webview_entity: Entity<WebView>,
    policy: Arc<Mutex<SandboxPolicy>>,
    tracker: Arc<Mutex<LoadTracker>>,
    loads: Receiver<u64>,
    current: String,
}

impl PreviewSurface {
    pub fn new(locator: &str, generation: u64, window: &mut Window, cx: &mut App) -> EditorResult<Self> {
        let policy = Arc::new(Mutex::new(SandboxPolicy::for_locator(locator)));
        let tracker = Arc::new(Mutex::new(LoadTracker::new(generation, locator)));
        let (tx, rx) = mpsc::channel();

        let webview = build_child(locator, policy.clone(), tracker.clone(), tx, window)?;
        let webview_entity = cx.new(|cx| WebView::new(webview, window, cx));

        Ok(Self {
            webview_entity,
            policy,
            tracker,
            loads: rx,
            current: locator.to_string(),
        })
    }

    /// Load `locator` as `generation`. Reloads when the locator is unchanged.
    pub fn navigate(&mut self, locator: &str, generation: u64, cx: &mut App) {
        *self.policy.lock() = SandboxPolicy::for_locator(locator);
        self.tracker.lock().request(generation, locator);
        self.current = locator.to_string();

        let result = self.webview_entity.update(cx, |wv, _| wv.raw().load_url(locator));
        if let Err(e) = result {
            warn!(locator, generation, error = ?e, "Preview navigation failed");
        }
    }

    /// Latest generation reported as loaded since the last call.
    pub fn take_loaded(&self) -> Option<u64> {
        self.loads.try_iter().last()
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn show(&self, cx: &mut App) {
        self.webview_entity.update(cx, |wv, _| wv.show());
    }

    /// Hide the webview (should be called before dropping to prevent orphaned UI)
    pub fn hide(&self, cx: &mut App) {
        self.webview_entity.update(cx, |wv, _| wv.hide());
    }
}

#[cfg(any(
    target_os = "macos",
    target_os = "windows",
    target_os = "ios",
    target_os = "android"
))]
fn build_child(
    locator: &str,
    policy: Arc<Mutex<SandboxPolicy>>,
    tracker: Arc<Mutex<LoadTracker>>,
    loads: Sender<u64>,
    window: &mut Window,
) -> EditorResult<wry::WebView> {
    use tracing::debug;
    use wry::{PageLoadEvent, WebViewBuilder};

    let webview = WebViewBuilder::new()
        .with_url(locator)
        .with_devtools(false)
        .with_incognito(true)
        .with_navigation_handler(move |target: String| {
            let allowed = policy.lock().allows_navigation(&target);
            if !allowed {
                debug!(%target, "Preview navigation blocked");
            }
            allowed
        })
        .with_on_page_load_handler(move |event, url| {
            let mut tracker = tracker.lock();
            match event {
                PageLoadEvent::Started => tracker.on_started(&url),
                PageLoadEvent::Finished => {
                    if let Some(generation) = tracker.on_finished() {
                        debug!(%url, generation, "Preview page loaded");
                        let _ = loads.send(generation);
                    }
                }
            }
        })
        .build_as_child(window)?;
    Ok(webview)
}

#[cfg(not(any(
    target_os = "macos",
    target_os = "windows",
    target_os = "ios",
    target_os = "android"
)))]
fn build_child(
    _locator: &str,
    _policy: Arc<Mutex<SandboxPolicy>>,
    _tracker: Arc<Mutex<LoadTracker>>,
    _loads: Sender<u64>,
    _window: &mut Window,
) -> EditorResult<wry::WebView> {
    Err(crate::error::EditorError::WebViewUnsupported)
}
