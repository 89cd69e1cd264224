//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over different document formats by
//! providing the tree-sitter grammar and heading query for each, and turns a parsed source into
//! a [`Document`](crate::document::Document).

pub mod markdown;

/// A source format that can be parsed into headings and content rows.
pub trait Format {
    /// File suffix conventionally used by the format.
    fn file_extension(&self) -> &'static str;
    /// Grammar used to parse the format.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing each heading node as `@heading`.
    fn heading_query(&self) -> &str;
}
