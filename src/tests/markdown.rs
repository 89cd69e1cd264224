use super::{split_attribute, strip_closing_sequence, MarkdownFormat};
use crate::document::Block;

const SOURCE: &str = "# Title

Intro text

## Getting Started

```sh
# not a heading
```

### Custom {#custom-id}
#### Too Deep
";

#[test]
fn test_parse_headings_by_row() {
    let doc = MarkdownFormat.parse("guide", SOURCE).unwrap();

    assert_eq!(doc.name, "guide");
    assert_eq!(doc.len(), SOURCE.lines().count());

    let title = doc.heading(0).unwrap();
    assert_eq!((title.level, title.text.as_str()), (1, "Title"));

    let section = doc.heading(4).unwrap();
    assert_eq!((section.level, section.text.as_str()), (2, "Getting Started"));
    assert_eq!(section.id, None);

    assert!(
        doc.heading(7).is_none(),
        "hash inside a code fence is not a heading"
    );
    assert_eq!(doc.blocks[7], Block::Text("# not a heading".to_string()));

    let custom = doc.heading(10).unwrap();
    assert_eq!(custom.level, 3);
    assert_eq!(custom.text, "Custom");
    assert_eq!(custom.id.as_deref(), Some("custom-id"));

    assert_eq!(doc.heading(11).map(|h| h.level), Some(4));
}

#[test]
fn test_split_attribute() {
    assert_eq!(
        split_attribute("Props {#props}"),
        ("Props".to_string(), Some("props".to_string()))
    );
    assert_eq!(split_attribute("Plain"), ("Plain".to_string(), None));
    assert_eq!(
        split_attribute("Broken {#has space}"),
        ("Broken {#has space}".to_string(), None)
    );
    assert_eq!(split_attribute("Empty {#}"), ("Empty {#}".to_string(), None));
}

#[test]
fn test_closing_sequence_is_not_heading_text() {
    let source = "# Title #\n\n## Closing Seq ##\n\n### Sub ###\n\n## Kept {#kept-id} ##\n";
    let doc = MarkdownFormat.parse("p", source).unwrap();

    assert_eq!(doc.heading(0).unwrap().text, "Title");
    assert_eq!(doc.heading(2).unwrap().text, "Closing Seq");
    assert_eq!(doc.heading(4).unwrap().text, "Sub");
    let kept = doc.heading(6).unwrap();
    assert_eq!(kept.text, "Kept");
    assert_eq!(kept.id.as_deref(), Some("kept-id"));

    let panel = crate::navigation::panel_for_document(&mut doc.clone(), "#/p#top", "Contents")
        .unwrap();
    assert_eq!(panel.title, "Title");
    assert_eq!(panel.entries[0].label, "1. Closing Seq");
    assert_eq!(panel.entries[0].target, "#/p#closing-seq");
    assert_eq!(panel.entries[1].label, "1.1 Sub");
}

#[test]
fn test_strip_closing_sequence() {
    assert_eq!(strip_closing_sequence("Foo ##"), "Foo");
    assert_eq!(strip_closing_sequence("Foo#"), "Foo#", "not preceded by whitespace");
    assert_eq!(strip_closing_sequence("C#"), "C#");
    assert_eq!(strip_closing_sequence("###"), "");
    assert_eq!(strip_closing_sequence("Plain"), "Plain");
}
