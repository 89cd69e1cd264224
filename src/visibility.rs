//! Visibility notifications for observed headings.
//!
//! The observer behaves like an intersection observer with a single threshold: each target's
//! visible ratio against the observation region is recomputed on every region update, and an
//! event is emitted only when a target crosses the threshold (plus once when it is first seen).
//! Events carry the subscription that produced them, so a consumer can drop notifications from
//! an observer that has since been replaced.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
/// A vertical span in some coordinate space.
pub struct Extent {
    /// Start of the span.
    pub top: f64,
    /// Length of the span.
    pub height: f64,
}

impl Extent {
    #[must_use]
    /// Creates a span.
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[must_use]
    /// End of the span.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    /// Whether `other` lies entirely within this span.
    pub fn contains(&self, other: &Extent) -> bool {
        other.top >= self.top && other.bottom() <= self.bottom()
    }

    #[must_use]
    /// Length of the overlap with `other`.
    pub fn overlap(&self, other: &Extent) -> f64 {
        (self.bottom().min(other.bottom()) - self.top.max(other.top)).max(0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
/// Identifies one observation session.
pub struct SubscriptionId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
/// A visibility change for one observed target.
pub struct VisibilityEvent {
    /// Observation session that produced the event.
    pub subscription: SubscriptionId,
    /// Observed target, as registered with [`IntersectionObserver::observe`].
    pub target: usize,
    /// Whether any part of the target intersects the region.
    pub is_visible: bool,
    /// Fraction of the target inside the region, in `0.0..=1.0`.
    pub ratio: f64,
}

struct Observed {
    target: usize,
    extent: Extent,
    above: Option<bool>,
}

/// Threshold-crossing visibility observer over registered vertical extents.
pub struct IntersectionObserver {
    subscription: SubscriptionId,
    threshold: f64,
    observed: Vec<Observed>,
    connected: bool,
}

impl IntersectionObserver {
    #[must_use]
    /// Creates a connected observer with no targets.
    pub fn new(subscription: SubscriptionId, threshold: f64) -> Self {
        Self {
            subscription,
            threshold: threshold.clamp(0.0, 1.0),
            observed: Vec::new(),
            connected: true,
        }
    }

    /// Starts observing a target occupying `extent`. Re-observing a target replaces its extent.
    pub fn observe(&mut self, target: usize, extent: Extent) {
        if !self.connected {
            return;
        }
        if let Some(existing) = self.observed.iter_mut().find(|o| o.target == target) {
            existing.extent = extent;
            return;
        }
        self.observed.push(Observed {
            target,
            extent,
            above: None,
        });
    }

    #[must_use]
    /// Subscription this observer tags its events with.
    pub fn subscription(&self) -> SubscriptionId {
        self.subscription
    }

    #[must_use]
    /// Whether the observer still delivers events.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    #[must_use]
    /// Number of targets under observation.
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    #[must_use]
    /// Whether nothing is under observation.
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Recomputes visibility against `region` and returns the threshold crossings.
    pub fn update(&mut self, region: Extent) -> Vec<VisibilityEvent> {
        if !self.connected {
            return Vec::new();
        }
        let mut events = Vec::new();
        for observed in &mut self.observed {
            let (is_visible, ratio) = intersect(observed.extent, region);
            let above = ratio >= self.threshold && is_visible;
            if observed.above != Some(above) {
                observed.above = Some(above);
                events.push(VisibilityEvent {
                    subscription: self.subscription,
                    target: observed.target,
                    is_visible,
                    ratio,
                });
            }
        }
        events
    }

    /// Stops all observation. Safe to call more than once.
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.observed.clear();
    }
}

fn intersect(target: Extent, region: Extent) -> (bool, f64) {
    if target.height <= 0.0 {
        let inside = target.top >= region.top && target.top < region.bottom();
        return (inside, if inside { 1.0 } else { 0.0 });
    }
    let overlap = target.overlap(&region);
    (overlap > 0.0, (overlap / target.height).clamp(0.0, 1.0))
}

#[cfg(test)]
#[path = "tests/visibility.rs"]
mod tests;
