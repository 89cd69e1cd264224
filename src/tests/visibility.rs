use super::{Extent, IntersectionObserver, SubscriptionId};

fn observer() -> IntersectionObserver {
    let mut observer = IntersectionObserver::new(SubscriptionId(7), 0.5);
    observer.observe(0, Extent::new(0.0, 1.0));
    observer.observe(1, Extent::new(10.0, 2.0));
    observer.observe(2, Extent::new(30.0, 1.0));
    observer
}

#[test]
fn test_first_update_reports_every_target() {
    let mut observer = observer();
    let events = observer.update(Extent::new(0.0, 5.0));

    assert_eq!(events.len(), 3);
    assert!(events[0].is_visible);
    assert!((events[0].ratio - 1.0).abs() < f64::EPSILON);
    assert!(!events[1].is_visible);
    assert!(events.iter().all(|e| e.subscription == SubscriptionId(7)));
}

#[test]
fn test_only_threshold_crossings_are_reported() {
    let mut observer = observer();
    observer.update(Extent::new(0.0, 5.0));

    assert!(
        observer.update(Extent::new(0.0, 6.0)).is_empty(),
        "no target crossed the threshold"
    );

    // Half of target 1 (10..12) is inside 0..11.
    let events = observer.update(Extent::new(0.0, 11.0));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].target, 1);
    assert!(events[0].is_visible);
    assert!((events[0].ratio - 0.5).abs() < f64::EPSILON);

    // Target 0 scrolls out, target 1 is fully in.
    let events = observer.update(Extent::new(5.0, 10.0));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].target, 0);
    assert!(!events[0].is_visible);
}

#[test]
fn test_dropping_below_threshold_while_visible() {
    let mut observer = IntersectionObserver::new(SubscriptionId(1), 0.5);
    observer.observe(0, Extent::new(10.0, 4.0));
    observer.update(Extent::new(10.0, 10.0));

    let events = observer.update(Extent::new(13.0, 10.0));
    assert_eq!(events.len(), 1);
    assert!(events[0].is_visible, "still intersecting");
    assert!(events[0].ratio < 0.5);
}

#[test]
fn test_disconnect_is_idempotent() {
    let mut observer = observer();
    observer.disconnect();
    observer.disconnect();
    assert!(!observer.is_connected());
    assert!(observer.is_empty());
    assert!(observer.update(Extent::new(0.0, 100.0)).is_empty());
    observer.observe(4, Extent::new(0.0, 1.0));
    assert!(observer.is_empty());
}

#[test]
fn test_extent_helpers() {
    let outer = Extent::new(0.0, 10.0);
    assert!(outer.contains(&Extent::new(2.0, 3.0)));
    assert!(!outer.contains(&Extent::new(9.0, 2.0)));
    assert!((outer.overlap(&Extent::new(9.0, 2.0)) - 1.0).abs() < f64::EPSILON);
    assert!((outer.overlap(&Extent::new(20.0, 2.0))).abs() < f64::EPSILON);
}
