//! Free-form dragging of the panel.
//!
//! ```text
//! Idle --pointer down--> Dragging --pointer up--> Idle
//!                          |  ^
//!                          +--+ pointer move (position tracks the pointer delta)
//! ```
//!
//! The panel starts anchored to the right edge of the viewport. The first movement switches it
//! to absolute left/top coordinates. The position lives only as long as the positioner does.

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
/// Screen coordinates.
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    #[must_use]
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
/// How the panel is placed on screen.
pub enum Placement {
    /// Offset from the top and right edges of the viewport.
    RightAnchored {
        /// Distance from the top edge.
        top: f64,
        /// Distance from the right edge.
        right: f64,
    },
    /// Absolute coordinates of the panel's top-left corner.
    Absolute {
        /// Distance from the top edge.
        top: f64,
        /// Distance from the left edge.
        left: f64,
    },
}

impl Placement {
    #[must_use]
    /// Top-left corner of a panel of `width` inside a viewport of `viewport_width`.
    pub fn origin(&self, viewport_width: f64, width: f64) -> Point {
        match *self {
            Self::RightAnchored { top, right } => Point::new(viewport_width - right - width, top),
            Self::Absolute { top, left } => Point::new(left, top),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
/// Pointer cursor the host should show over the panel.
pub enum Cursor {
    /// Panel can be picked up.
    Grab,
    /// Panel is being dragged.
    Grabbing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Drag state.
pub enum DragState {
    /// No drag in progress.
    Idle,
    /// A drag started at `pointer` while the panel was at `panel`.
    Dragging {
        /// Pointer position at pointer-down.
        pointer: Point,
        /// Panel top-left corner at pointer-down.
        panel: Point,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What the host must do after a pointer-down on the panel.
pub struct PointerDown {
    /// Suppress the default action (text selection).
    pub prevent_default: bool,
}

#[derive(Clone, Debug)]
/// Drag state machine and current placement of the panel.
pub struct Positioner {
    placement: Placement,
    state: DragState,
    moved: bool,
}

impl Positioner {
    #[must_use]
    /// Creates a right-anchored, idle positioner.
    pub fn new(top: f64, right: f64) -> Self {
        Self {
            placement: Placement::RightAnchored { top, right },
            state: DragState::Idle,
            moved: false,
        }
    }

    #[must_use]
    /// Current placement.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    #[must_use]
    /// Current drag state.
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    /// Whether movement and release listeners are installed.
    pub fn is_listening(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    #[must_use]
    /// Whether the current or last drag moved the panel at all.
    pub fn moved(&self) -> bool {
        self.moved
    }

    #[must_use]
    /// Cursor hint for the panel surface.
    pub fn cursor(&self) -> Cursor {
        match self.state {
            DragState::Idle => Cursor::Grab,
            DragState::Dragging { .. } => Cursor::Grabbing,
        }
    }

    /// Starts a drag. `panel` is the panel's current top-left corner on screen.
    pub fn pointer_down(&mut self, pointer: Point, panel: Point) -> PointerDown {
        self.state = DragState::Dragging { pointer, panel };
        self.moved = false;
        PointerDown {
            prevent_default: true,
        }
    }

    /// Tracks the pointer while dragging and returns the new placement.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<Placement> {
        let DragState::Dragging {
            pointer: start,
            panel,
        } = self.state
        else {
            return None;
        };
        self.placement = Placement::Absolute {
            top: panel.y + (pointer.y - start.y),
            left: panel.x + (pointer.x - start.x),
        };
        self.moved = true;
        Some(self.placement)
    }

    /// Ends the drag and releases the listeners.
    pub fn pointer_up(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
#[path = "tests/positioner.rs"]
mod tests;
