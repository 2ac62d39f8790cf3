//! Unit tests for the document affordance lock as seen by drag controllers.

use crate::helpers::{FakeHost, layout_state};
use livepane::affordance::DocumentAffordances;
use livepane::input::DragResizeController;

#[test]
fn test_second_controller_cannot_start_while_first_drags() {
    let mut host_a = FakeHost::new(1000.0);
    let mut host_b = FakeHost::new(1000.0);
    let mut a = DragResizeController::default();
    let mut b = DragResizeController::default();

    assert!(a.begin_drag(400.0, 40.0, &layout_state(40.0), &mut host_a));
    assert_eq!(DocumentAffordances::holder(), Some(a.owner()));

    assert!(!b.begin_drag(400.0, 40.0, &layout_state(40.0), &mut host_b));
    assert_eq!(host_b.listeners, 0);
    assert!(!b.is_dragging());

    // Ending the other controller must not steal the lock
    b.end_drag(&mut host_b);
    assert_eq!(DocumentAffordances::holder(), Some(a.owner()));

    a.end_drag(&mut host_a);
    assert!(b.begin_drag(400.0, 40.0, &layout_state(40.0), &mut host_b));
    b.end_drag(&mut host_b);
    assert!(!DocumentAffordances::is_active());
}

#[test]
fn test_dropping_mid_drag_releases_lock() {
    let mut host = FakeHost::new(1000.0);
    {
        let mut drag = DragResizeController::default();
        assert!(drag.begin_drag(400.0, 40.0, &layout_state(40.0), &mut host));
        assert!(DocumentAffordances::is_active());
    }
    assert!(!DocumentAffordances::is_active());
}
