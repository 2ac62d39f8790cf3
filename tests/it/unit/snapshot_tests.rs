//! Snapshot tests for the layout state reported to callers.

use livepane::layout::{LayoutStateMachine, PreviewModeWidths};
use livepane::types::{PreviewMode, ViewportClass};

#[test]
fn test_desktop_edit_layout() {
    let machine = LayoutStateMachine::new(30.0, ViewportClass::Desktop, PreviewModeWidths::default());

    insta::assert_json_snapshot!(machine.snapshot(), @r#"
    {
      "pane_width_percent": 30.0,
      "is_collapsed": false,
      "is_mobile": false,
      "is_dragging": false,
      "preview_mode": "desktop",
      "overlay_open": false
    }
    "#);
}

#[test]
fn test_mobile_overlay_layout() {
    let mut machine = LayoutStateMachine::new(40.0, ViewportClass::Desktop, PreviewModeWidths::default());
    machine.set_preview_mode(PreviewMode::Mobile);
    machine.on_breakpoint(ViewportClass::Mobile);

    insta::assert_json_snapshot!(machine.snapshot(), @r#"
    {
      "pane_width_percent": 80.0,
      "is_collapsed": true,
      "is_mobile": true,
      "is_dragging": false,
      "preview_mode": "mobile",
      "overlay_open": true
    }
    "#);
}
