//! Markdown format implementation using tree-sitter-md.
//!
//! This module provides the tree-sitter query for ATX-style headings (# syntax) and converts a
//! markdown source into a document with one block per source line. A trailing `{#id}` attribute
//! on a heading is taken as its pre-existing identifier, mirroring an `id` attribute on a page.

use crate::document::{Block, Document, HeadingNode};
use crate::error::{Result, TocError};
use crate::formats::Format;
use std::collections::HashMap;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

/// Tree-sitter queries for ATX-style markdown headings (# syntax).
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn file_extension(&self) -> &'static str {
        "md"
    }

    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "(atx_heading) @heading"
    }
}

impl MarkdownFormat {
    /// Parses markdown source into a document named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`TocError::Parser`] if the grammar or query cannot be loaded.
    pub fn parse(&self, name: &str, source: &str) -> Result<Document> {
        let language = self.language();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| TocError::Parser(e.to_string()))?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| TocError::Parser("parse cancelled".to_string()))?;
        let query =
            Query::new(&language, self.heading_query()).map_err(|e| TocError::Parser(e.to_string()))?;

        let bytes = source.as_bytes();
        let mut headings: HashMap<usize, HeadingNode> = HashMap::new();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, tree.root_node(), bytes);
        while let Some(m) = matches.next() {
            for capture in m.captures {
                if let Some(node) = heading_node(capture.node, bytes) {
                    headings.insert(capture.node.start_position().row, node);
                }
            }
        }

        let blocks = source
            .lines()
            .enumerate()
            .map(|(row, line)| match headings.remove(&row) {
                Some(heading) => Block::Heading(heading),
                None => Block::Text(line.to_string()),
            })
            .collect();

        Ok(Document {
            name: name.to_string(),
            blocks,
        })
    }
}

fn heading_node(node: Node<'_>, source: &[u8]) -> Option<HeadingNode> {
    let mut level = None;
    let mut text = String::new();
    let mut walker = node.walk();
    for child in node.children(&mut walker) {
        let kind = child.kind();
        if let Some(marker) = kind
            .strip_prefix("atx_h")
            .and_then(|rest| rest.strip_suffix("_marker"))
        {
            level = marker.parse::<u8>().ok();
        } else if kind == "inline" {
            text = child.utf8_text(source).ok()?.trim().to_string();
        }
    }
    let (text, id) = split_attribute(strip_closing_sequence(&text));
    Some(HeadingNode {
        level: level?,
        text,
        id,
    })
}

/// Drops an ATX closing sequence: a trailing run of `#` that is the whole text or follows
/// whitespace.
fn strip_closing_sequence(text: &str) -> &str {
    let without = text.trim_end_matches('#');
    if without.len() == text.len() {
        return text;
    }
    if without.is_empty() {
        return without;
    }
    if without.ends_with(char::is_whitespace) {
        return without.trim_end();
    }
    text
}

/// Splits a trailing `{#id}` attribute off heading text.
fn split_attribute(text: &str) -> (String, Option<String>) {
    if let Some(open) = text.rfind("{#") {
        let attribute = &text[open..];
        if let Some(id) = attribute
            .strip_prefix("{#")
            .and_then(|rest| rest.strip_suffix('}'))
        {
            if !id.is_empty() && !id.contains(char::is_whitespace) {
                return (text[..open].trim_end().to_string(), Some(id.to_string()));
            }
        }
    }
    (text.to_string(), None)
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
