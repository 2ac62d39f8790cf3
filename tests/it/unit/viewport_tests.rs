//! Unit tests for the viewport breakpoint monitor.

use livepane::types::ViewportClass;
use livepane::viewport::ViewportBreakpointMonitor;

#[test]
fn test_breakpoint_edges() {
    let monitor = ViewportBreakpointMonitor::default();
    assert_eq!(monitor.classify(Some(767.0)), ViewportClass::Mobile);
    assert_eq!(monitor.classify(Some(768.0)), ViewportClass::Desktop);
    assert_eq!(monitor.classify(Some(0.0)), ViewportClass::Mobile);
}

#[test]
fn test_missing_width_is_desktop() {
    let mut monitor = ViewportBreakpointMonitor::default();
    assert_eq!(monitor.activate(None), ViewportClass::Desktop);
    assert_eq!(monitor.classify(Some(-1.0)), ViewportClass::Desktop);
    assert_eq!(monitor.classify(Some(f32::INFINITY)), ViewportClass::Desktop);
}

#[test]
fn test_resize_sweep_reports_each_crossing_once() {
    let mut monitor = ViewportBreakpointMonitor::default();
    monitor.activate(Some(1280.0));

    let mut changes = Vec::new();
    let widths = (0..=40).map(|i| 1280.0 - i as f32 * 25.0).chain((0..=40).map(|i| 280.0 + i as f32 * 25.0));
    for width in widths {
        if let Some(class) = monitor.observe(Some(width)) {
            changes.push(class);
        }
    }

    assert_eq!(changes, vec![ViewportClass::Mobile, ViewportClass::Desktop]);
}

#[test]
fn test_custom_threshold() {
    let mut monitor = ViewportBreakpointMonitor::new(1024.0);
    assert_eq!(monitor.activate(Some(900.0)), ViewportClass::Mobile);

    assert_eq!(monitor.set_threshold(800.0), Some(ViewportClass::Desktop));
    assert_eq!(monitor.observe(Some(900.0)), None);
    assert_eq!(monitor.threshold(), 800.0);
}

#[test]
fn test_threshold_change_uses_latest_observed_width() {
    let mut monitor = ViewportBreakpointMonitor::default();
    monitor.activate(Some(1400.0));
    monitor.observe(Some(1000.0));

    assert_eq!(monitor.set_threshold(1200.0), Some(ViewportClass::Mobile));
    assert_eq!(monitor.last_width(), Some(1000.0));
}

#[test]
fn test_threshold_change_before_activation_is_silent() {
    let mut monitor = ViewportBreakpointMonitor::default();
    assert_eq!(monitor.set_threshold(2000.0), None);
    assert_eq!(monitor.activate(Some(1000.0)), ViewportClass::Mobile);
}
