//! Panel model construction.
//!
//! The panel model is the whole of the panel's content for one content snapshot: a title and
//! one entry per numbered heading. It is rebuilt wholesale whenever content or location change.

use crate::anchor::assign_anchors;
use crate::document::Document;
use crate::heading::{extract_headings, Heading, Rank};
use crate::location::{base_path_or_empty, link_target};
use crate::numbering::{number_headings, SectionNumber};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One clickable row of the panel.
pub struct NavEntry {
    /// Index of the heading in the extracted sequence.
    pub heading: usize,
    /// Block position of the heading in the document.
    pub block: usize,
    /// Anchor identifier of the heading.
    pub anchor: String,
    /// Section number shown in front of the text.
    pub number: Option<SectionNumber>,
    /// Rendered label, `"<number> <text>"`.
    pub label: String,
    /// Link fragment, `#<base>#<anchor>` or `#<anchor>`.
    pub target: String,
    /// Indentation depth: 0 for sections, 1 for subsections.
    pub depth: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Immutable content of the panel for one content snapshot.
pub struct PanelModel {
    /// Text of the first rank 1 heading, or the fallback label.
    pub title: String,
    /// Entries in document order.
    pub entries: Vec<NavEntry>,
}

impl PanelModel {
    #[must_use]
    /// Entry index for the heading at `heading` in the extracted sequence.
    pub fn entry_for_heading(&self, heading: usize) -> Option<usize> {
        self.entries.iter().position(|entry| entry.heading == heading)
    }

    #[must_use]
    /// Whether the panel lists no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[must_use]
/// Builds the panel model from settled headings and the current base path.
pub fn build_panel(headings: &[Heading], base_path: &str, fallback_title: &str) -> PanelModel {
    let title = headings
        .iter()
        .find(|heading| heading.rank == Rank::Title)
        .map_or_else(|| fallback_title.to_string(), |heading| heading.text.clone());

    let numbers = number_headings(headings.iter().map(|heading| heading.rank));

    let entries = headings
        .iter()
        .zip(numbers)
        .filter(|(heading, _)| heading.rank != Rank::Title)
        .map(|(heading, number)| {
            let label = match number {
                Some(number) => format!("{number} {}", heading.text),
                None => heading.text.clone(),
            };
            NavEntry {
                heading: heading.index,
                block: heading.block,
                anchor: heading.anchor.clone(),
                number,
                label,
                target: link_target(base_path, &heading.anchor),
                depth: usize::from(heading.rank.level() - 2),
            }
        })
        .collect();

    PanelModel { title, entries }
}

/// Runs extraction, anchor assignment and panel construction for one document snapshot.
///
/// Returns `None` while the document holds no recognised headings.
pub fn panel_for_document(
    document: &mut Document,
    location: &str,
    fallback_title: &str,
) -> Option<PanelModel> {
    let extracted = extract_headings(Some(&*document));
    if extracted.is_empty() {
        return None;
    }
    let headings = assign_anchors(document, extracted);
    Some(build_panel(
        &headings,
        &base_path_or_empty(location),
        fallback_title,
    ))
}

#[cfg(test)]
#[path = "tests/navigation.rs"]
mod tests;
