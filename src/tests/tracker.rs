use super::{scroll_into_view, ListLayout, Tracker};
use crate::visibility::{SubscriptionId, VisibilityEvent};

const LIVE: SubscriptionId = SubscriptionId(3);

fn tracker() -> Tracker {
    Tracker::new(LIVE, 0.5, [(1, 0), (2, 1), (4, 2)])
}

fn visible(target: usize, ratio: f64) -> VisibilityEvent {
    VisibilityEvent {
        subscription: LIVE,
        target,
        is_visible: ratio > 0.0,
        ratio,
    }
}

#[test]
fn test_activation_deactivates_previous() {
    let mut tracker = tracker();
    let layout = ListLayout::new(1.0, 3, 10.0);

    let first = tracker.handle(&[visible(2, 1.0)], &layout);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].activated, 1);
    assert_eq!(first[0].deactivated, None);

    let second = tracker.handle(&[visible(4, 0.75)], &layout);
    assert_eq!(second[0].activated, 2);
    assert_eq!(second[0].deactivated, Some(1));
    assert_eq!(tracker.active_entry(), Some(2));
    assert_eq!(tracker.entry_for(4), Some(2));
}

#[test]
fn test_reactivating_same_entry_deactivates_nothing() {
    let mut tracker = tracker();
    let layout = ListLayout::new(1.0, 3, 10.0);
    tracker.handle(&[visible(1, 1.0)], &layout);
    let again = tracker.handle(&[visible(1, 1.0)], &layout);
    assert_eq!(again[0].deactivated, None);
    assert_eq!(tracker.active_entry(), Some(0));
}

#[test]
fn test_below_threshold_and_hidden_events_are_ignored() {
    let mut tracker = tracker();
    let layout = ListLayout::new(1.0, 3, 10.0);
    assert!(tracker.handle(&[visible(1, 0.4)], &layout).is_empty());
    assert!(tracker.handle(&[visible(1, 0.0)], &layout).is_empty());
    assert_eq!(tracker.active_entry(), None);
}

#[test]
fn test_unknown_targets_do_not_abort_the_batch() {
    let mut tracker = tracker();
    let layout = ListLayout::new(1.0, 3, 10.0);
    let activations = tracker.handle(&[visible(99, 1.0), visible(2, 1.0)], &layout);
    assert_eq!(activations.len(), 1);
    assert_eq!(tracker.active_entry(), Some(1));
}

#[test]
fn test_foreign_subscription_is_ignored() {
    let mut tracker = tracker();
    let layout = ListLayout::new(1.0, 3, 10.0);
    let stale = VisibilityEvent {
        subscription: SubscriptionId(2),
        ..visible(1, 1.0)
    };
    assert!(tracker.handle(&[stale], &layout).is_empty());
    assert_eq!(tracker.active_entry(), None);
}

#[test]
fn test_at_most_one_active_across_a_batch() {
    let mut tracker = tracker();
    let layout = ListLayout::new(1.0, 3, 10.0);
    let activations = tracker.handle(
        &[visible(1, 1.0), visible(2, 1.0), visible(4, 1.0)],
        &layout,
    );
    assert_eq!(activations.len(), 3);
    assert_eq!(activations[2].deactivated, Some(1));
    assert_eq!(tracker.active_entry(), Some(2));
}

#[test]
fn test_release_is_idempotent_and_final() {
    let mut tracker = tracker();
    let layout = ListLayout::new(1.0, 3, 10.0);
    tracker.handle(&[visible(1, 1.0)], &layout);

    tracker.release();
    tracker.release();

    assert!(tracker.is_released());
    assert_eq!(tracker.active_entry(), None);
    assert_eq!(tracker.entry_for(1), None);
    assert!(tracker.handle(&[visible(2, 1.0)], &layout).is_empty());
}

#[test]
fn test_scroll_into_view_centres_hidden_entries() {
    let layout = ListLayout::new(1.0, 20, 5.0);

    assert_eq!(scroll_into_view(2, &layout), None, "already visible");

    let request = scroll_into_view(10, &layout).unwrap();
    assert!((request.offset - 8.0).abs() < f64::EPSILON);

    let request = scroll_into_view(19, &layout).unwrap();
    assert!((request.offset - 15.0).abs() < f64::EPSILON, "clamped to end");

    assert_eq!(scroll_into_view(20, &layout), None, "no such entry");
}

#[test]
fn test_activation_requests_scroll_when_entry_hidden() {
    let mut tracker = Tracker::new(LIVE, 0.5, (0..20).map(|i| (i, i)));
    let mut layout = ListLayout::new(1.0, 20, 5.0);

    let activations = tracker.handle(&[visible(12, 1.0)], &layout);
    let request = activations[0].scroll.unwrap();
    layout.apply(&request);
    assert!((layout.scroll - 10.0).abs() < f64::EPSILON);
}
