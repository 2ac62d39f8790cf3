//! Drag, collapse and breakpoint workflows through the headless harness.

use crate::helpers::Harness;
use livepane::affordance::DocumentAffordances;
use livepane::types::{EditorEvent, PreviewMode};

#[test]
fn test_drag_past_upper_bound_clamps() {
    let mut h = Harness::desktop(40.0, 1000.0);

    assert!(h.pointer_down(400.0));
    assert!(h.state().is_dragging);
    h.drag_to(900.0);
    h.pointer_up();

    assert_eq!(h.width(), 75.0);
    assert!(!h.state().is_dragging);
    assert_eq!(h.host.listeners, 0);
    assert_eq!(h.events, vec![EditorEvent::WidthChanged(75.0)]);
}

#[test]
fn test_moves_between_frames_coalesce() {
    let mut h = Harness::desktop(40.0, 1000.0);
    h.pointer_down(400.0);

    for x in [410.0, 430.0, 450.0, 470.0, 500.0] {
        h.pointer_move(x);
    }
    assert_eq!(h.host.requested.len(), 1);
    h.frame();
    h.pointer_up();

    assert_eq!(h.width(), 50.0);
    assert_eq!(h.events, vec![EditorEvent::WidthChanged(50.0)]);
    assert_eq!(h.drag.stats().moves, 5);
    assert_eq!(h.drag.stats().frames_committed, 1);
}

#[test]
fn test_pointer_up_discards_unpainted_move() {
    let mut h = Harness::desktop(40.0, 1000.0);
    h.pointer_down(400.0);
    h.drag_to(450.0);
    h.pointer_move(600.0);
    h.pointer_up();

    // The frame for the last move fires after the drag ended
    h.frame();
    assert_eq!(h.width(), 45.0);
    assert_eq!(h.host.cancelled.len(), 1);
}

#[test]
fn test_collapse_and_expand_restores_width() {
    let mut h = Harness::desktop(30.0, 1200.0);

    h.toggle_collapse();
    assert!(h.state().is_collapsed);
    assert_eq!(h.state().pane_width_percent, 30.0);

    h.toggle_collapse();
    assert!(!h.state().is_collapsed);
    assert_eq!(h.width(), 30.0);
    assert_eq!(
        h.events,
        vec![EditorEvent::CollapsedToggled(true), EditorEvent::CollapsedToggled(false)]
    );
}

#[test]
fn test_collapsed_pane_cannot_be_dragged() {
    let mut h = Harness::desktop(30.0, 1200.0);
    h.toggle_collapse();

    assert!(!h.pointer_down(300.0));
    assert_eq!(h.host.listeners, 0);
    assert!(!DocumentAffordances::is_active());
}

#[test]
fn test_breakpoint_round_trip_keeps_width() {
    let mut h = Harness::desktop(45.0, 1200.0);

    h.resize_viewport(600.0);
    let mobile = h.state();
    assert!(mobile.is_mobile);
    assert!(mobile.overlay_open);

    h.resize_viewport(1000.0);
    let desktop = h.state();
    assert!(!desktop.is_mobile);
    assert!(!desktop.is_collapsed);
    assert_eq!(desktop.pane_width_percent, 45.0);
}

#[test]
fn test_breakpoint_round_trip_keeps_collapsed() {
    let mut h = Harness::desktop(45.0, 1200.0);
    h.toggle_collapse();

    h.resize_viewport(500.0);
    h.resize_viewport(1100.0);

    assert!(h.state().is_collapsed);
    h.toggle_collapse();
    assert_eq!(h.width(), 45.0);
}

#[test]
fn test_mobile_refuses_drag() {
    let mut h = Harness::desktop(40.0, 1200.0);
    h.resize_viewport(500.0);

    assert!(!h.pointer_down(200.0));
    assert!(!h.state().is_dragging);
    assert_eq!(h.host.listeners, 0);
}

#[test]
fn test_switch_to_mobile_mid_drag_ends_drag() {
    let mut h = Harness::desktop(40.0, 1200.0);
    h.pointer_down(480.0);
    h.drag_to(600.0);
    h.pointer_move(700.0);

    h.resize_viewport(600.0);

    let state = h.state();
    assert!(state.is_mobile);
    assert!(!state.is_dragging);
    assert!(!h.drag.is_dragging());
    assert_eq!(h.host.listeners, 0);
    assert!(!DocumentAffordances::is_active());

    // Late frame and pointer-up are harmless
    h.frame();
    h.pointer_up();
    assert_eq!(h.host.listeners, 0);
}

#[test]
fn test_mobile_toggle_opens_and_closes_overlay() {
    let mut h = Harness::desktop(40.0, 1200.0);
    h.resize_viewport(400.0);
    assert!(h.state().overlay_open);

    h.toggle_collapse();
    assert!(!h.state().overlay_open);
    h.toggle_collapse();
    assert!(h.state().overlay_open);
}

#[test]
fn test_double_click_resets_to_default() {
    let mut h = Harness::desktop(40.0, 1000.0);
    h.pointer_down(400.0);
    h.drag_to(600.0);
    h.pointer_up();
    assert_eq!(h.width(), 60.0);

    h.double_click(40.0);
    assert_eq!(h.width(), 40.0);

    // Also expands a collapsed pane
    h.toggle_collapse();
    h.double_click(40.0);
    assert!(!h.state().is_collapsed);
    assert_eq!(h.width(), 40.0);
}

#[test]
fn test_preview_mode_shortcut_widths() {
    let mut h = Harness::desktop(40.0, 1200.0);

    let events = h.layout.set_preview_mode(PreviewMode::Mobile);
    assert_eq!(
        events,
        vec![
            EditorEvent::WidthChanged(80.0),
            EditorEvent::PreviewModeChanged(PreviewMode::Mobile)
        ]
    );

    h.layout.set_preview_mode(PreviewMode::Desktop);
    assert_eq!(h.width(), 25.0);

    // A drag after the shortcut is still clamped by the drag bounds
    h.pointer_down(300.0);
    h.drag_to(0.0);
    h.pointer_up();
    assert_eq!(h.width(), 20.0);
}

#[test]
fn test_raising_breakpoint_moves_wide_window_to_mobile() {
    let mut h = Harness::desktop(45.0, 1000.0);
    h.pointer_down(450.0);
    h.drag_to(500.0);

    h.set_breakpoint(1200.0);

    let state = h.state();
    assert!(state.is_mobile);
    assert!(state.overlay_open);
    assert!(!state.is_dragging);
    assert_eq!(h.host.listeners, 0);
    assert_eq!(h.events.last(), Some(&EditorEvent::CollapsedToggled(true)));

    // Lowering it again restores the desktop split
    h.set_breakpoint(768.0);
    let state = h.state();
    assert!(!state.is_mobile);
    assert!(!state.is_collapsed);
    assert_eq!(state.pane_width_percent, 50.0);
}

#[test]
fn test_breakpoint_change_on_same_side_keeps_layout() {
    let mut h = Harness::desktop(40.0, 1000.0);
    h.set_breakpoint(900.0);

    assert!(!h.state().is_mobile);
    assert!(h.events.is_empty());
}
