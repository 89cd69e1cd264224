//! The lifecycle controller ties extraction, navigation and tracking to the host.
//!
//! ```text
//! Idle --start--> Waiting --content ready--> Active --teardown--> Idle
//!                    |                         |  ^
//!                    | timeout                 +--+ location changed and content ready:
//!                    v                              release old observers, rebuild
//!                  GaveUp
//! ```
//!
//! The controller is the only owner of the panel. Every rebuild releases the previous
//! observer and tracker before the new ones are constructed, so an observer of a replaced
//! panel can never touch the current one. Timers are cancellable handles collected in one disposal bag.

use crate::document::Document;
use crate::heading::is_ready;
use crate::navigation::{panel_for_document, PanelModel};
use crate::positioner::{Point, PointerDown, Positioner};
use crate::scheduler::{Disposables, Scheduler, TaskHandle};
use crate::tracker::{Activation, ListLayout, Tracker};
use crate::visibility::{Extent, IntersectionObserver, SubscriptionId, VisibilityEvent};
use std::time::Duration;

/// The environment the navigator is attached to.
pub trait Host {
    /// Content root holding the headings, if it exists yet.
    fn content(&mut self) -> Option<&mut Document>;
    /// Current navigable address (absolute URL or bare fragment).
    fn location(&self) -> String;
    /// Extent of a document block in the observation region's coordinates.
    fn block_extent(&self, block: usize) -> Option<Extent>;
    /// Visible height of the panel's entry list.
    fn panel_list_height(&self) -> f64;
}

#[derive(Clone, Debug, PartialEq)]
/// Timings and presentation defaults for the controller.
pub struct Settings {
    /// How long to wait for content before giving up.
    pub ready_timeout: Duration,
    /// Interval of the location poll.
    pub path_poll: Duration,
    /// Visibility ratio at which a heading becomes active.
    pub threshold: f64,
    /// Panel title when the document has no rank 1 heading.
    pub fallback_title: String,
    /// Initial distance of the panel from the top edge.
    pub panel_top: f64,
    /// Initial distance of the panel from the right edge.
    pub panel_right: f64,
}

/// Activation threshold used when the configured one is not a number.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

impl Default for Settings {
    fn default() -> Self {
        Self {
            ready_timeout: Duration::from_millis(5000),
            path_poll: Duration::from_millis(500),
            threshold: DEFAULT_THRESHOLD,
            fallback_title: "Contents".to_string(),
            panel_top: 10.0,
            panel_right: 10.0,
        }
    }
}

#[must_use]
/// Brings an activation threshold into `0..=1`, warning when it had to be changed.
///
/// NaN falls back to [`DEFAULT_THRESHOLD`].
pub fn normalize_threshold(value: f64) -> f64 {
    if value.is_nan() {
        log::warn!("visibility threshold is NaN, using {DEFAULT_THRESHOLD}");
        return DEFAULT_THRESHOLD;
    }
    if !(0.0..=1.0).contains(&value) {
        let clamped = value.clamp(0.0, 1.0);
        log::warn!("visibility threshold {value} is outside 0..=1, using {clamped}");
        return clamped;
    }
    value
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Where the controller is in its lifecycle.
pub enum Phase {
    /// Not started, or torn down.
    Idle,
    /// Waiting for headings to appear, with a bounded timeout.
    Waiting,
    /// Panel built; polling the location and tracking visibility.
    Active,
    /// The readiness timeout elapsed; no panel will be shown.
    GaveUp,
}

struct PanelContent {
    model: PanelModel,
    tracker: Tracker,
    observer: IntersectionObserver,
    list: ListLayout,
}

impl PanelContent {
    fn release(&mut self) {
        self.observer.disconnect();
        self.tracker.release();
    }

    fn is_live(&self) -> bool {
        self.observer.is_connected() && !self.tracker.is_released()
    }
}

/// The single floating panel: its placement plus the content of the latest build.
pub struct PanelHandle {
    positioner: Positioner,
    content: Option<PanelContent>,
    builds: u64,
}

impl PanelHandle {
    fn create(settings: &Settings) -> Self {
        Self {
            positioner: Positioner::new(settings.panel_top, settings.panel_right),
            content: None,
            builds: 0,
        }
    }

    fn install(&mut self, content: PanelContent) {
        self.content = Some(content);
        self.builds += 1;
    }

    fn release(&mut self) {
        if let Some(content) = self.content.as_mut() {
            content.release();
        }
    }

    #[must_use]
    /// Panel model of the latest build.
    pub fn model(&self) -> Option<&PanelModel> {
        self.content.as_ref().map(|content| &content.model)
    }

    #[must_use]
    /// Active entry of the latest build.
    pub fn active_entry(&self) -> Option<usize> {
        self.content
            .as_ref()
            .and_then(|content| content.tracker.active_entry())
    }

    #[must_use]
    /// Whether the latest build's observer and tracker are still attached.
    pub fn is_live(&self) -> bool {
        self.content.as_ref().is_some_and(PanelContent::is_live)
    }

    fn live_content(&mut self) -> Option<&mut PanelContent> {
        self.content.as_mut().filter(|content| content.is_live())
    }

    #[must_use]
    /// Scroll state of the entry list.
    pub fn list(&self) -> Option<&ListLayout> {
        self.content.as_ref().map(|content| &content.list)
    }

    #[must_use]
    /// Subscription of the live visibility observer.
    pub fn subscription(&self) -> Option<SubscriptionId> {
        self.content
            .as_ref()
            .map(|content| content.observer.subscription())
    }

    #[must_use]
    /// Drag state and placement.
    pub fn positioner(&self) -> &Positioner {
        &self.positioner
    }

    #[must_use]
    /// How many times the content has been (re)built.
    pub fn builds(&self) -> u64 {
        self.builds
    }

    /// Updates the visible height of the entry list, keeping the scroll offset in range.
    pub fn resize_list(&mut self, visible_height: f64) {
        if let Some(content) = self.content.as_mut() {
            let list = &mut content.list;
            list.visible_height = visible_height;
            #[allow(clippy::cast_precision_loss)]
            let max = (list.rows as f64 * list.row_height - visible_height).max(0.0);
            list.scroll = list.scroll.clamp(0.0, max);
        }
    }
}

/// Drives the panel through its lifecycle on behalf of a [`Host`].
pub struct Controller<H: Host> {
    host: H,
    settings: Settings,
    scheduler: Scheduler,
    timers: Disposables,
    phase: Phase,
    readiness: Option<TaskHandle>,
    poll: Option<TaskHandle>,
    last_location: String,
    panel: Option<PanelHandle>,
    next_subscription: u64,
}

impl<H: Host> Controller<H> {
    #[must_use]
    /// Creates an idle controller.
    ///
    /// The threshold is normalized once here so the observer and the tracker share it.
    pub fn new(host: H, mut settings: Settings) -> Self {
        settings.threshold = normalize_threshold(settings.threshold);
        Self {
            host,
            settings,
            scheduler: Scheduler::new(),
            timers: Disposables::default(),
            phase: Phase::Idle,
            readiness: None,
            poll: None,
            last_location: String::new(),
            panel: None,
            next_subscription: 0,
        }
    }

    #[must_use]
    /// The attached host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the attached host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    /// The panel, once one has been created.
    pub fn panel(&self) -> Option<&PanelHandle> {
        self.panel.as_ref()
    }

    /// Mutable access to the panel.
    pub fn panel_mut(&mut self) -> Option<&mut PanelHandle> {
        self.panel.as_mut()
    }

    #[must_use]
    /// Settings in effect, after normalization.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    /// The controller's timer queue.
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    fn content_ready(&mut self) -> bool {
        is_ready(self.host.content().map(|document| &*document))
    }

    /// Runs the controller once the host document has finished loading.
    ///
    /// Builds the panel straight away if headings exist, otherwise waits for structural
    /// changes until the readiness timeout.
    pub fn start(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        if self.content_ready() && self.activate() {
            return;
        }
        let timeout = self.scheduler.set_timeout(self.settings.ready_timeout);
        self.timers.push(timeout);
        self.readiness = Some(timeout);
        self.phase = Phase::Waiting;
        log::debug!("waiting up to {:?} for headings", self.settings.ready_timeout);
    }

    /// Notifies the controller of a structural change in the host document.
    pub fn on_content_changed(&mut self) {
        if self.phase != Phase::Waiting || !self.content_ready() {
            return;
        }
        if let Some(timeout) = self.readiness.take() {
            self.scheduler.cancel(timeout);
        }
        self.activate();
    }

    /// Advances the controller's clock, firing due timers.
    pub fn tick(&mut self, dt: Duration) {
        let deadline = self.scheduler.now() + dt;
        while let Some(handle) = self.scheduler.pop_due(deadline) {
            if Some(handle) == self.readiness {
                self.readiness = None;
                self.phase = Phase::GaveUp;
                log::debug!("no headings appeared, giving up");
            } else if Some(handle) == self.poll {
                self.check_location();
            }
        }
        self.scheduler.settle(deadline);
    }

    fn check_location(&mut self) {
        let current = self.host.location();
        if current == self.last_location {
            return;
        }
        log::debug!("location changed: {} -> {current}", self.last_location);
        self.last_location = current;
        if self.content_ready() {
            self.regenerate();
        }
    }

    fn activate(&mut self) -> bool {
        if !self.regenerate() {
            return false;
        }
        if self.poll.is_none() {
            let poll = self.scheduler.set_interval(self.settings.path_poll);
            self.timers.push(poll);
            self.poll = Some(poll);
        }
        self.last_location = self.host.location();
        self.phase = Phase::Active;
        true
    }

    /// Rebuilds the panel from the current content, if any headings exist.
    ///
    /// The previous build's observer and tracker are released before the new ones are
    /// constructed. Nothing is released while the content has no headings.
    pub fn regenerate(&mut self) -> bool {
        if !self.content_ready() {
            return false;
        }
        if let Some(panel) = self.panel.as_mut() {
            panel.release();
        }
        let Some(content) = self.build_content() else {
            return false;
        };
        match self.panel.as_mut() {
            Some(panel) => {
                panel.install(content);
                log::info!("rebuilt panel (build {})", panel.builds);
            }
            None => {
                let mut panel = PanelHandle::create(&self.settings);
                panel.install(content);
                log::info!("created panel");
                self.panel = Some(panel);
            }
        }
        true
    }

    fn build_content(&mut self) -> Option<PanelContent> {
        let location = self.host.location();
        let document = self.host.content()?;
        let model = panel_for_document(document, &location, &self.settings.fallback_title)?;

        let subscription = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;

        let mut observer = IntersectionObserver::new(subscription, self.settings.threshold);
        for entry in &model.entries {
            if let Some(extent) = self.host.block_extent(entry.block) {
                observer.observe(entry.heading, extent);
            }
        }
        let tracker = Tracker::new(
            subscription,
            self.settings.threshold,
            model
                .entries
                .iter()
                .enumerate()
                .map(|(index, entry)| (entry.heading, index)),
        );
        let list = ListLayout::new(1.0, model.entries.len(), self.host.panel_list_height());

        Some(PanelContent {
            model,
            tracker,
            observer,
            list,
        })
    }

    /// Recomputes heading visibility for the host's observation region.
    pub fn on_scroll(&mut self, region: Extent) -> Vec<Activation> {
        let Some(content) = self.panel.as_mut().and_then(PanelHandle::live_content) else {
            return Vec::new();
        };
        let events = content.observer.update(region);
        apply(content, &events)
    }

    /// Feeds visibility events from a host-side observer.
    pub fn on_visibility(&mut self, events: &[VisibilityEvent]) -> Vec<Activation> {
        let Some(content) = self.panel.as_mut().and_then(PanelHandle::live_content) else {
            return Vec::new();
        };
        apply(content, events)
    }

    /// Pointer pressed on the panel surface whose top-left corner is at `panel`.
    pub fn pointer_down(&mut self, pointer: Point, panel: Point) -> Option<PointerDown> {
        self.panel
            .as_mut()
            .map(|handle| handle.positioner.pointer_down(pointer, panel))
    }

    /// Pointer moved anywhere while a drag may be in progress.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        self.panel
            .as_mut()
            .and_then(|handle| handle.positioner.pointer_move(pointer))
            .is_some()
    }

    /// Pointer released anywhere.
    pub fn pointer_up(&mut self) {
        if let Some(handle) = self.panel.as_mut() {
            handle.positioner.pointer_up();
        }
    }

    /// Releases every observer and timer and removes the panel.
    pub fn teardown(&mut self) {
        if let Some(mut panel) = self.panel.take() {
            panel.release();
        }
        self.timers.dispose(&mut self.scheduler);
        self.readiness = None;
        self.poll = None;
        self.phase = Phase::Idle;
    }
}

fn apply(content: &mut PanelContent, events: &[VisibilityEvent]) -> Vec<Activation> {
    let activations = content.tracker.handle(events, &content.list);
    if let Some(request) = activations.iter().rev().find_map(|a| a.scroll) {
        content.list.apply(&request);
    }
    activations
}

#[cfg(test)]
#[path = "tests/lifecycle.rs"]
mod tests;
