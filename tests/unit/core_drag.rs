use super::*;

const WINDOW: WindowId = WindowId(7);

#[test]
fn short_travel_stays_pressed() {
    let mut phase = DragPhase::press((0.0, 0.0), WINDOW, false);
    assert!(!phase.pointer_moved((5.0, 5.0), 10.0));
    assert!(matches!(phase, DragPhase::Pressed { .. }));
}

#[test]
fn manhattan_distance_past_threshold_starts_drag() {
    let mut phase = DragPhase::press((0.0, 0.0), WINDOW, false);
    assert!(phase.pointer_moved((6.0, 5.0), 10.0));
    assert!(phase.is_dragging());
    assert!(!phase.pointer_moved((40.0, 5.0), 10.0));
    assert_eq!(
        phase,
        DragPhase::Dragging {
            start: (0.0, 0.0),
            current: (40.0, 5.0),
            window: WINDOW,
            ignore_reorder: false,
        }
    );
}

#[test]
fn idle_ignores_pointer() {
    let mut phase = DragPhase::default();
    assert!(!phase.pointer_moved((100.0, 0.0), 1.0));
    assert!(phase.is_idle());
    assert_eq!(phase.window(), None);
}

#[test]
fn detach_requires_dragging() {
    let mut phase = DragPhase::press((0.0, 0.0), WINDOW, true);
    assert_eq!(phase.begin_detach(), None);

    phase.pointer_moved((0.0, 50.0), 4.0);
    assert_eq!(phase.begin_detach(), Some(WINDOW));
    assert!(phase.is_detaching());
    assert_eq!(phase.begin_detach(), None);
    assert_eq!(phase.window(), Some(WINDOW));
}

#[test]
fn release_returns_last_phase_and_resets() {
    let mut phase = DragPhase::press((1.0, 2.0), WINDOW, false);
    let ended = phase.release();
    assert!(matches!(ended, DragPhase::Pressed { window, .. } if window == WINDOW));
    assert!(phase.is_idle());
}
