//! Heading extraction from a content root.
//!
//! Only the first three ranks are recognised. Rank 1 is the document title and is kept in the
//! extracted sequence (it supplies the panel title) but never numbered or listed.

use crate::document::{Block, Document};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// The heading ranks the navigator understands.
pub enum Rank {
    /// Rank 1, the document title.
    Title,
    /// Rank 2, a numbered section.
    Section,
    /// Rank 3, a numbered subsection.
    Subsection,
}

impl Rank {
    #[must_use]
    /// Maps a source heading level to a rank, or `None` for levels 4 and deeper.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Title),
            2 => Some(Self::Section),
            3 => Some(Self::Subsection),
            _ => None,
        }
    }

    #[must_use]
    /// Numeric rank (1, 2 or 3).
    pub fn level(self) -> u8 {
        match self {
            Self::Title => 1,
            Self::Section => 2,
            Self::Subsection => 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A heading found in the content root before identifiers are settled.
pub struct ExtractedHeading {
    /// Recognised rank.
    pub rank: Rank,
    /// Heading text as it appears in the content.
    pub text: String,
    /// Identifier already present on the heading, if any.
    pub existing_id: Option<String>,
    /// Position of the heading among the document's blocks.
    pub block: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A heading with a settled anchor identifier.
pub struct Heading {
    /// Recognised rank.
    pub rank: Rank,
    /// Raw text label.
    pub text: String,
    /// Fragment-navigable identifier.
    pub anchor: String,
    /// Index within the extracted heading sequence.
    pub index: usize,
    /// Position of the heading among the document's blocks.
    pub block: usize,
}

#[must_use]
/// Collects rank 1 to 3 headings in document order.
///
/// An absent root or a root without headings yields an empty sequence, which callers treat as
/// "content not ready yet" rather than a failure.
pub fn extract_headings(root: Option<&Document>) -> Vec<ExtractedHeading> {
    let Some(document) = root else {
        return Vec::new();
    };

    document
        .blocks
        .iter()
        .enumerate()
        .filter_map(|(block, content)| match content {
            Block::Heading(node) => Rank::from_level(node.level).map(|rank| ExtractedHeading {
                rank,
                text: node.text.clone(),
                existing_id: node.id.clone(),
                block,
            }),
            Block::Text(_) => None,
        })
        .collect()
}

#[must_use]
/// Whether the content root holds at least one recognised heading.
pub fn is_ready(root: Option<&Document>) -> bool {
    root.is_some_and(|document| {
        document.blocks.iter().any(|block| {
            matches!(block, Block::Heading(node) if Rank::from_level(node.level).is_some())
        })
    })
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
