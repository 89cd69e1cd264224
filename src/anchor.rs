//! Anchor identifiers for headings.
//!
//! A heading that already has an identifier keeps it. Otherwise one is derived from the text by
//! trimming, collapsing whitespace runs to a single hyphen and lowercasing. Two headings with
//! the same text derive the same identifier; no de-duplication is attempted.

use crate::document::Document;
use crate::heading::{ExtractedHeading, Heading};

#[must_use]
/// Derives an identifier from heading text.
///
/// ```
/// assert_eq!(tocsync::anchor::slugify("  Getting   Started "), "getting-started");
/// ```
pub fn slugify(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Settles an anchor for every extracted heading and writes derived ones back to the document.
///
/// Writing back makes the assignment idempotent across rebuilds: the next extraction sees the
/// derived identifier as pre-existing.
pub fn assign_anchors(document: &mut Document, extracted: Vec<ExtractedHeading>) -> Vec<Heading> {
    extracted
        .into_iter()
        .enumerate()
        .map(|(index, heading)| {
            let anchor = match heading.existing_id.filter(|id| !id.is_empty()) {
                Some(id) => id,
                None => {
                    let id = slugify(&heading.text);
                    if let Some(node) = document.heading_mut(heading.block) {
                        node.id = Some(id.clone());
                    }
                    id
                }
            };
            Heading {
                rank: heading.rank,
                text: heading.text,
                anchor,
                index,
                block: heading.block,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/anchor.rs"]
mod tests;
