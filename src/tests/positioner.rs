use super::{Cursor, DragState, Placement, Point, Positioner};

#[test]
fn test_starts_right_anchored_and_idle() {
    let positioner = Positioner::new(10.0, 10.0);
    assert_eq!(
        positioner.placement(),
        Placement::RightAnchored {
            top: 10.0,
            right: 10.0
        }
    );
    assert_eq!(positioner.state(), DragState::Idle);
    assert_eq!(positioner.cursor(), Cursor::Grab);
    assert!(!positioner.is_listening());
}

#[test]
fn test_drag_tracks_pointer_delta() {
    let mut positioner = Positioner::new(10.0, 10.0);

    let down = positioner.pointer_down(Point::new(110.0, 105.0), Point::new(100.0, 100.0));
    assert!(down.prevent_default);
    assert!(positioner.is_listening());
    assert_eq!(positioner.cursor(), Cursor::Grabbing);

    let placement = positioner.pointer_move(Point::new(130.0, 75.0)).unwrap();
    assert_eq!(
        placement,
        Placement::Absolute {
            top: 70.0,
            left: 120.0
        }
    );
    assert!(positioner.moved());

    positioner.pointer_up();
    assert!(!positioner.is_listening());
    assert_eq!(positioner.cursor(), Cursor::Grab);
}

#[test]
fn test_moves_while_idle_are_ignored() {
    let mut positioner = Positioner::new(10.0, 10.0);
    assert_eq!(positioner.pointer_move(Point::new(50.0, 50.0)), None);
    assert!(matches!(
        positioner.placement(),
        Placement::RightAnchored { .. }
    ));

    positioner.pointer_down(Point::new(0.0, 0.0), Point::new(5.0, 5.0));
    positioner.pointer_move(Point::new(1.0, 1.0));
    positioner.pointer_up();
    assert_eq!(positioner.pointer_move(Point::new(40.0, 40.0)), None);
    assert_eq!(
        positioner.placement(),
        Placement::Absolute {
            top: 6.0,
            left: 6.0
        }
    );
}

#[test]
fn test_press_without_movement_keeps_anchor() {
    let mut positioner = Positioner::new(10.0, 10.0);
    positioner.pointer_down(Point::new(3.0, 3.0), Point::new(0.0, 0.0));
    positioner.pointer_up();
    assert!(!positioner.moved());
    assert!(matches!(
        positioner.placement(),
        Placement::RightAnchored { .. }
    ));
}

#[test]
fn test_origin_of_right_anchored_panel() {
    let placement = Placement::RightAnchored {
        top: 10.0,
        right: 10.0,
    };
    assert_eq!(placement.origin(800.0, 280.0), Point::new(510.0, 10.0));
    let placement = Placement::Absolute {
        top: 4.0,
        left: 2.0,
    };
    assert_eq!(placement.origin(800.0, 280.0), Point::new(2.0, 4.0));
}
