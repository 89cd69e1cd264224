//! Active-section tracking.
//!
//! The tracker owns the association between observed headings and panel entries and keeps at
//! most one entry active. Activation is driven purely by visibility events: a heading becomes
//! active when it is visible with a ratio at or above the threshold, which deactivates whatever
//! was active before. When the newly active entry is not fully shown in the panel's scrollable
//! area, the tracker asks for it to be scrolled to the centre.

use crate::visibility::{Extent, SubscriptionId, VisibilityEvent};
use std::collections::HashMap;

/// Geometry of the panel's scrollable entry list.
pub trait PanelLayout {
    /// Extent of an entry in content coordinates (0 is the top of the list).
    fn entry_extent(&self, entry: usize) -> Option<Extent>;
    /// Currently visible part of the list, in content coordinates.
    fn viewport(&self) -> Extent;
    /// Total height of the list.
    fn content_height(&self) -> f64;
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Fixed-height rows scrolled by an offset.
pub struct ListLayout {
    /// Height of a single entry row.
    pub row_height: f64,
    /// Number of rows.
    pub rows: usize,
    /// Scroll offset of the visible area.
    pub scroll: f64,
    /// Height of the visible area.
    pub visible_height: f64,
}

impl ListLayout {
    #[must_use]
    /// Creates an unscrolled layout.
    pub fn new(row_height: f64, rows: usize, visible_height: f64) -> Self {
        Self {
            row_height,
            rows,
            scroll: 0.0,
            visible_height,
        }
    }

    /// Applies a scroll request's offset.
    pub fn apply(&mut self, request: &ScrollRequest) {
        self.scroll = request.offset;
    }
}

impl PanelLayout for ListLayout {
    fn entry_extent(&self, entry: usize) -> Option<Extent> {
        (entry < self.rows).then(|| {
            #[allow(clippy::cast_precision_loss)]
            let top = entry as f64 * self.row_height;
            Extent::new(top, self.row_height)
        })
    }

    fn viewport(&self) -> Extent {
        Extent::new(self.scroll, self.visible_height)
    }

    fn content_height(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let rows = self.rows as f64;
        rows * self.row_height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Request to smoothly scroll the panel list so an entry sits in the centre.
pub struct ScrollRequest {
    /// Entry to bring into view.
    pub entry: usize,
    /// Target scroll offset, clamped to the scrollable range.
    pub offset: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Outcome of one activation.
pub struct Activation {
    /// Entry that became active.
    pub activated: usize,
    /// Entry that was active before, if any.
    pub deactivated: Option<usize>,
    /// Scroll needed to show the activated entry.
    pub scroll: Option<ScrollRequest>,
}

/// Single-active-entry state machine over a heading/entry association.
pub struct Tracker {
    subscription: SubscriptionId,
    threshold: f64,
    heading_to_entry: HashMap<usize, usize>,
    active: Option<usize>,
    released: bool,
}

impl Tracker {
    #[must_use]
    /// Creates a tracker for `(heading, entry)` pairs listening to `subscription`.
    pub fn new<I>(subscription: SubscriptionId, threshold: f64, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Self {
            subscription,
            threshold,
            heading_to_entry: pairs.into_iter().collect(),
            active: None,
            released: false,
        }
    }

    #[must_use]
    /// Currently active entry.
    pub fn active_entry(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    /// Entry associated with a heading.
    pub fn entry_for(&self, heading: usize) -> Option<usize> {
        self.heading_to_entry.get(&heading).copied()
    }

    #[must_use]
    /// Subscription whose events this tracker accepts.
    pub fn subscription(&self) -> SubscriptionId {
        self.subscription
    }

    #[must_use]
    /// Whether [`Tracker::release`] has been called.
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Applies a batch of visibility events.
    ///
    /// Events from other subscriptions and for unknown targets are skipped. Every activation
    /// in the batch is reported in order.
    pub fn handle(
        &mut self,
        events: &[VisibilityEvent],
        layout: &dyn PanelLayout,
    ) -> Vec<Activation> {
        if self.released {
            return Vec::new();
        }
        let mut activations = Vec::new();
        for event in events {
            if event.subscription != self.subscription {
                continue;
            }
            let Some(entry) = self.entry_for(event.target) else {
                continue;
            };
            if !event.is_visible || event.ratio < self.threshold {
                continue;
            }
            activations.push(self.activate(entry, layout));
        }
        activations
    }

    fn activate(&mut self, entry: usize, layout: &dyn PanelLayout) -> Activation {
        let deactivated = self.active.replace(entry).filter(|previous| *previous != entry);
        Activation {
            activated: entry,
            deactivated,
            scroll: scroll_into_view(entry, layout),
        }
    }

    /// Drops the association and stops reacting to events. Safe to call more than once.
    pub fn release(&mut self) {
        self.released = true;
        self.active = None;
        self.heading_to_entry.clear();
    }
}

#[must_use]
/// Centres `entry` in the panel viewport if it is not already fully visible.
pub fn scroll_into_view(entry: usize, layout: &dyn PanelLayout) -> Option<ScrollRequest> {
    let extent = layout.entry_extent(entry)?;
    let viewport = layout.viewport();
    if viewport.contains(&extent) {
        return None;
    }
    let max = (layout.content_height() - viewport.height).max(0.0);
    let centred = extent.top + extent.height / 2.0 - viewport.height / 2.0;
    Some(ScrollRequest {
        entry,
        offset: centred.clamp(0.0, max),
    })
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;
