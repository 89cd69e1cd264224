//! tocsync: a floating table-of-contents navigator.
//!
//! Headings are read from a content root, given stable anchors and hierarchical numbers, and
//! turned into a panel of links. The panel follows the reader: the heading most in view is
//! highlighted, the panel can be dragged anywhere, and it is rebuilt when the location changes.
//! Everything is host-agnostic; [`lifecycle::Host`] is the seam to whatever renders the page.

pub mod anchor;
pub mod app_state;
pub mod config;
pub mod document;
pub mod error;
pub mod formats;
pub mod heading;
pub mod input;
pub mod lifecycle;
pub mod location;
pub mod navigation;
pub mod numbering;
pub mod positioner;
pub mod scheduler;
pub mod tracker;
pub mod ui;
pub mod visibility;
