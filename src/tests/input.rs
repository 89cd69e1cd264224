use super::{document_name, find_documents, load_document};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

#[test]
fn test_find_documents_filters_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.md"), "# B").unwrap();
    fs::write(dir.path().join("a.md"), "# A").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("c.md"), "# C").unwrap();

    let found = find_documents(vec![dir.path().to_path_buf()], &["md".to_string()]).unwrap();
    let names: Vec<String> = found.iter().map(|p| document_name(p)).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_explicit_file_is_kept_regardless_of_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("README.txt");
    fs::write(&path, "# Readme").unwrap();

    let found = find_documents(vec![path.clone()], &["md".to_string()]).unwrap();
    assert_eq!(found, vec![path]);
}

#[test]
fn test_explicit_paths_keep_their_order() {
    let dir = tempfile::tempdir().unwrap();
    let zeta = dir.path().join("zeta.md");
    let alpha = dir.path().join("alpha.md");
    fs::write(&zeta, "# Zeta").unwrap();
    fs::write(&alpha, "# Alpha").unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs").join("b.md"), "# B").unwrap();
    fs::write(dir.path().join("docs").join("a.md"), "# A").unwrap();

    let paths = vec![zeta, dir.path().join("docs"), alpha];
    let found = find_documents(paths, &["md".to_string()]).unwrap();
    let names: Vec<String> = found.iter().map(|p| document_name(p)).collect();
    assert_eq!(names, vec!["zeta", "a", "b", "alpha"]);
}

#[test]
fn test_missing_path_is_an_error() {
    let err = find_documents(vec![PathBuf::from("/no/such/tocsync/path")], &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_load_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("button.md");
    fs::write(&path, "# Button\n\n## Usage\n").unwrap();

    let doc = load_document(&path).unwrap();
    assert_eq!(doc.name, "button");
    assert_eq!(doc.heading(2).map(|h| h.text.as_str()), Some("Usage"));
}
