use super::{assign_anchors, slugify};
use crate::document::Document;
use crate::heading::extract_headings;

#[test]
fn test_slugify_getting_started() {
    assert_eq!(slugify("Getting Started"), "getting-started");
}

#[test]
fn test_slugify_collapses_whitespace_and_trims() {
    assert_eq!(slugify("  Multiple   Spaces\tHere \n"), "multiple-spaces-here");
}

#[test]
fn test_slugify_is_idempotent() {
    let once = slugify("API Reference");
    assert_eq!(slugify("API Reference"), once);
    assert_eq!(slugify(&once), once);
}

#[test]
fn test_existing_id_is_kept() {
    let mut doc = Document::new("doc");
    doc.push_heading_with_id(2, "Props", "props-table");
    let extracted = extract_headings(Some(&doc));
    let headings = assign_anchors(&mut doc, extracted);
    assert_eq!(headings[0].anchor, "props-table");
}

#[test]
fn test_derived_id_is_written_back() {
    let mut doc = Document::new("doc");
    doc.push_heading(2, "Basic Usage");
    let extracted = extract_headings(Some(&doc));
    let headings = assign_anchors(&mut doc, extracted);

    assert_eq!(headings[0].anchor, "basic-usage");
    assert_eq!(
        doc.heading(0).and_then(|h| h.id.as_deref()),
        Some("basic-usage")
    );

    // A second pass sees the written identifier as pre-existing and keeps it.
    let again = extract_headings(Some(&doc));
    assert_eq!(again[0].existing_id.as_deref(), Some("basic-usage"));
    let headings = assign_anchors(&mut doc, again);
    assert_eq!(headings[0].anchor, "basic-usage");
}

#[test]
fn test_empty_existing_id_is_replaced() {
    let mut doc = Document::new("doc");
    doc.push_heading_with_id(3, "Events", "");
    let extracted = extract_headings(Some(&doc));
    let headings = assign_anchors(&mut doc, extracted);
    assert_eq!(headings[0].anchor, "events");
}

#[test]
fn test_same_text_headings_collide() {
    let mut doc = Document::new("doc");
    doc.push_heading(2, "Example").push_heading(2, "Example");
    let extracted = extract_headings(Some(&doc));
    let headings = assign_anchors(&mut doc, extracted);
    assert_eq!(headings[0].anchor, headings[1].anchor);
    assert_eq!(headings[1].index, 1);
}
