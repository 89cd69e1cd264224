//! In-memory content root the navigator reads headings from.
//!
//! A document is a flat, ordered list of blocks. Each block occupies one row when a host lays
//! the document out, which gives headings a natural vertical position for visibility tracking.
//! Headings carry an optional identifier; the anchor assigner fills it in when absent, the same
//! way a page's heading element gains an `id` attribute.

#[derive(Clone, Debug, PartialEq, Eq)]
/// Heading element as found in the content root.
pub struct HeadingNode {
    /// Heading rank as written in the source (1 for `#`, 2 for `##` and so on).
    pub level: u8,
    /// Literal heading text, without markup.
    pub text: String,
    /// Pre-existing stable identifier, if the source supplied one.
    pub id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One row of document content.
pub enum Block {
    /// A heading of any rank.
    Heading(HeadingNode),
    /// Any other line of content.
    Text(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Ordered content blocks plus a name used to derive the document's virtual route.
pub struct Document {
    /// Short name of the document, typically the file stem.
    pub name: String,
    /// Content rows in document order.
    pub blocks: Vec<Block>,
}

impl Document {
    #[must_use]
    /// Creates an empty document.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: Vec::new(),
        }
    }

    /// Appends a heading without an identifier.
    pub fn push_heading(&mut self, level: u8, text: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Heading(HeadingNode {
            level,
            text: text.into(),
            id: None,
        }));
        self
    }

    /// Appends a heading that already carries an identifier.
    pub fn push_heading_with_id(
        &mut self,
        level: u8,
        text: impl Into<String>,
        id: impl Into<String>,
    ) -> &mut Self {
        self.blocks.push(Block::Heading(HeadingNode {
            level,
            text: text.into(),
            id: Some(id.into()),
        }));
        self
    }

    /// Appends a plain content row.
    pub fn push_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.blocks.push(Block::Text(text.into()));
        self
    }

    #[must_use]
    /// Heading at the given block position, if that block is a heading.
    pub fn heading(&self, block: usize) -> Option<&HeadingNode> {
        match self.blocks.get(block) {
            Some(Block::Heading(node)) => Some(node),
            _ => None,
        }
    }

    /// Mutable heading at the given block position.
    pub fn heading_mut(&mut self, block: usize) -> Option<&mut HeadingNode> {
        match self.blocks.get_mut(block) {
            Some(Block::Heading(node)) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    /// Number of rows the document occupies.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    /// Whether the document has no content rows.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[must_use]
    /// Block position of the heading whose identifier matches `id`.
    pub fn find_anchor(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|block| match block {
            Block::Heading(node) => node.id.as_deref() == Some(id),
            Block::Text(_) => false,
        })
    }
}
