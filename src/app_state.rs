//! The terminal host the navigator is attached to.
//!
//! The workspace plays the part of the page: it owns the loaded documents, the current
//! location (a virtual route per document in the fragment) and the scroll position of the
//! document view. The lifecycle controller is driven from here on every input event and timer
//! tick, exactly as a page would drive it from its callbacks.

use crate::config::Config;
use crate::document::Document;
use crate::lifecycle::{Controller, Host, Phase};
use crate::location::{anchor, with_fragment};
use crate::positioner::Point;
use crate::visibility::Extent;
use ratatui::layout::Rect;

/// Scheme and authority prefixed to every route.
pub const ORIGIN: &str = "tocsync://docs/";

/// Loaded documents and the current location.
pub struct Workspace {
    /// Every document that can be shown.
    pub documents: Vec<Document>,
    /// Index of the document on screen.
    pub current: usize,
    /// Current address, `<origin>#/<document>[#<anchor>]`.
    pub location: String,
    /// Visible height of the panel's entry list, in rows.
    pub panel_rows: f64,
}

impl Workspace {
    #[must_use]
    /// Creates a workspace showing the first document at its route.
    pub fn new(documents: Vec<Document>) -> Self {
        let location = documents
            .first()
            .map_or_else(|| ORIGIN.to_string(), route_for);
        Self {
            documents,
            current: 0,
            location,
            panel_rows: 0.0,
        }
    }

    #[must_use]
    /// Document on screen.
    pub fn document(&self) -> Option<&Document> {
        self.documents.get(self.current)
    }
}

#[must_use]
/// Route of a document: `<origin>#/<name>`.
pub fn route_for(document: &Document) -> String {
    format!("{ORIGIN}#/{}", document.name)
}

impl Host for Workspace {
    fn content(&mut self) -> Option<&mut Document> {
        self.documents.get_mut(self.current)
    }

    fn location(&self) -> String {
        self.location.clone()
    }

    fn block_extent(&self, block: usize) -> Option<Extent> {
        let document = self.document()?;
        #[allow(clippy::cast_precision_loss)]
        let top = block as f64;
        (block < document.len()).then_some(Extent::new(top, 1.0))
    }

    fn panel_list_height(&self) -> f64 {
        self.panel_rows
    }
}

/// Document view state plus the controller driving the panel.
pub struct AppState {
    /// Lifecycle controller owning the panel.
    pub controller: Controller<Workspace>,
    /// First document row on screen.
    pub scroll: usize,
    /// Area the document is drawn into.
    pub viewport: Rect,
    /// Panel width in cells.
    pub panel_width: u16,
    /// Glyph in front of the panel title.
    pub title_glyph: String,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Entry picked with the keyboard, followed on Enter.
    pub selected: Option<usize>,
    /// Entry under the pointer when the current press started.
    pressed_entry: Option<usize>,
}

impl AppState {
    #[must_use]
    /// Wraps the documents in a workspace and starts the controller.
    ///
    /// A starting location naming a heading anchor opens the document at that heading.
    pub fn new(documents: Vec<Document>, cfg: &Config, location: Option<String>) -> Self {
        let mut workspace = Workspace::new(documents);
        if let Some(location) = location {
            workspace.location = location;
        }
        let mut controller = Controller::new(workspace, cfg.settings());
        controller.start();
        let mut app = Self {
            controller,
            scroll: 0,
            viewport: Rect::default(),
            panel_width: cfg.panel_width,
            title_glyph: cfg.title_glyph.clone(),
            message: None,
            selected: None,
            pressed_entry: None,
        };
        app.scroll_to_anchor();
        app
    }

    /// Scrolls to the heading named by the location's anchor, if the document has it.
    pub fn scroll_to_anchor(&mut self) {
        let host = self.controller.host();
        let Some(id) = anchor(&host.location) else {
            return;
        };
        match host.document().and_then(|document| document.find_anchor(&id)) {
            Some(block) => self.scroll_to(block),
            None => log::debug!("no heading with anchor {id}"),
        }
    }

    fn document_len(&self) -> usize {
        self.controller.host().document().map_or(0, Document::len)
    }

    /// Records the document area and resizes the panel's list to match.
    pub fn resize(&mut self, viewport: Rect) {
        self.viewport = viewport;
        let rows = self
            .panel_rect()
            .map_or(0, |rect| rect.height.saturating_sub(2));
        self.controller.host_mut().panel_rows = f64::from(rows);
        if let Some(panel) = self.controller.panel_mut() {
            panel.resize_list(f64::from(rows));
        }
        self.scroll_to(self.scroll);
    }

    #[must_use]
    /// Region of the document currently on screen.
    pub fn region(&self) -> Extent {
        #[allow(clippy::cast_precision_loss)]
        let top = self.scroll as f64;
        Extent::new(top, f64::from(self.viewport.height))
    }

    /// Re-runs visibility tracking for the current scroll position.
    pub fn sync(&mut self) {
        let region = self.region();
        self.controller.on_scroll(region);
    }

    /// Scrolls the document so `row` is at the top, clamped to the content.
    pub fn scroll_to(&mut self, row: usize) {
        let max = self
            .document_len()
            .saturating_sub(usize::from(self.viewport.height.max(1)));
        self.scroll = row.min(max);
    }

    /// Scrolls the document by `delta` rows.
    pub fn scroll_by(&mut self, delta: isize) {
        let row = self.scroll.saturating_add_signed(delta);
        self.scroll_to(row);
    }

    /// Shows the next document, changing the route; the panel follows on the next poll.
    pub fn next_document(&mut self) {
        self.switch_document(1);
    }

    /// Shows the previous document.
    pub fn prev_document(&mut self) {
        let len = self.controller.host().documents.len();
        self.switch_document(len.saturating_sub(1));
    }

    fn switch_document(&mut self, step: usize) {
        let host = self.controller.host_mut();
        let len = host.documents.len();
        if len < 2 {
            return;
        }
        host.current = (host.current + step) % len;
        host.location = route_for(&host.documents[host.current]);
        self.scroll = 0;
        self.message = None;
        self.selected = None;
    }

    fn entry_count(&self) -> usize {
        self.controller
            .panel()
            .and_then(|panel| panel.model())
            .map_or(0, |model| model.entries.len())
    }

    fn active_entry(&self) -> Option<usize> {
        self.controller.panel().and_then(|panel| panel.active_entry())
    }

    /// Moves the keyboard selection to the next entry, starting from the active one.
    pub fn select_next(&mut self) {
        let count = self.entry_count();
        if count == 0 {
            return;
        }
        let next = match (self.selected, self.active_entry()) {
            (Some(index), _) => index + 1,
            (None, Some(active)) => active,
            (None, None) => 0,
        };
        self.selected = Some(next.min(count - 1));
    }

    /// Moves the keyboard selection to the previous entry, starting from the active one.
    pub fn select_prev(&mut self) {
        let count = self.entry_count();
        if count == 0 {
            return;
        }
        let prev = match (self.selected, self.active_entry()) {
            (Some(index), _) => index.saturating_sub(1),
            (None, Some(active)) => active,
            (None, None) => 0,
        };
        self.selected = Some(prev.min(count - 1));
    }

    /// Follows the selected entry, or the active one when nothing is selected.
    pub fn follow_selected(&mut self) {
        if let Some(index) = self.selected.take().or_else(|| self.active_entry()) {
            self.jump_to_entry(index);
        }
    }

    /// Follows a panel entry: scrolls its heading to the top and updates the location.
    pub fn jump_to_entry(&mut self, index: usize) {
        let Some(entry) = self
            .controller
            .panel()
            .and_then(|panel| panel.model())
            .and_then(|model| model.entries.get(index))
            .cloned()
        else {
            return;
        };
        let host = self.controller.host_mut();
        host.location = with_fragment(&host.location, &entry.target);
        self.scroll_to(entry.block);
    }

    #[must_use]
    /// Screen area of the panel, clamped into the document viewport.
    pub fn panel_rect(&self) -> Option<Rect> {
        let panel = self.controller.panel()?;
        let model = panel.model()?;
        let area = self.viewport;
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let width = self.panel_width.min(area.width);
        let max_height = (u32::from(area.height) * 4 / 5).max(3);
        let wanted = u32::try_from(model.entries.len()).unwrap_or(u32::MAX).saturating_add(2);
        let height = u16::try_from(wanted.min(max_height))
            .unwrap_or(area.height)
            .min(area.height);

        let origin = panel
            .positioner()
            .placement()
            .origin(f64::from(area.width), f64::from(width));
        let x = clamp_cell(origin.x, area.width.saturating_sub(width));
        let y = clamp_cell(origin.y, area.height.saturating_sub(height));
        Some(Rect::new(area.x + x, area.y + y, width, height))
    }

    fn entry_at(&self, column: u16, row: u16) -> Option<usize> {
        let rect = self.panel_rect()?;
        let inner_top = rect.y + 1;
        let inner_bottom = rect.y + rect.height.saturating_sub(1);
        if column <= rect.x || column >= rect.x + rect.width - 1 {
            return None;
        }
        if row < inner_top || row >= inner_bottom {
            return None;
        }
        let panel = self.controller.panel()?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let offset = panel.list().map_or(0, |list| list.scroll.max(0.0) as usize);
        let index = offset + usize::from(row - inner_top);
        let entries = panel.model().map_or(0, |model| model.entries.len());
        (index < entries).then_some(index)
    }

    /// Pointer pressed: starts a drag when over the panel.
    pub fn mouse_down(&mut self, column: u16, row: u16) {
        let Some(rect) = self.panel_rect() else {
            return;
        };
        let inside = column >= rect.x
            && column < rect.x + rect.width
            && row >= rect.y
            && row < rect.y + rect.height;
        if !inside {
            return;
        }
        self.pressed_entry = self.entry_at(column, row);
        let origin = Point::new(
            f64::from(rect.x - self.viewport.x),
            f64::from(rect.y - self.viewport.y),
        );
        self.controller
            .pointer_down(Point::new(f64::from(column), f64::from(row)), origin);
    }

    /// Pointer moved with the button held.
    pub fn mouse_drag(&mut self, column: u16, row: u16) {
        let dragging = self
            .controller
            .panel()
            .is_some_and(|panel| panel.positioner().is_listening());
        if !dragging {
            return;
        }
        self.controller
            .pointer_move(Point::new(f64::from(column), f64::from(row)));
    }

    /// Pointer released: a press that did not move the panel acts as a click on its entry.
    pub fn mouse_up(&mut self) {
        let moved = self
            .controller
            .panel()
            .is_some_and(|panel| panel.positioner().moved());
        self.controller.pointer_up();
        if let Some(index) = self.pressed_entry.take() {
            if !moved {
                self.jump_to_entry(index);
            }
        }
    }

    #[must_use]
    /// One-line status for the help bar.
    pub fn status(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        match self.controller.phase() {
            Phase::Waiting => "waiting for headings…".to_string(),
            Phase::GaveUp => "no headings found".to_string(),
            Phase::Idle | Phase::Active => self.controller.host().location.clone(),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_cell(value: f64, max: u16) -> u16 {
    value.round().clamp(0.0, f64::from(max)) as u16
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
