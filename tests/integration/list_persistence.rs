//! Saving and loading `combine_pdf.json`.

use std::fs;
use tempfile::TempDir;

use crate::common::{session_in, write_pdf};

#[tokio::test]
async fn test_save_then_load_restores_order() {
    let dir = TempDir::new().unwrap();
    for name in ["c.pdf", "a.pdf", "b.pdf"] {
        write_pdf(dir.path(), name, 1);
    }
    let mut session = session_in(dir.path());
    session.ingest("c.pdf a.pdf b.pdf");
    session.save_list();

    let mut fresh = session_in(dir.path());
    fresh.load_list();

    assert_eq!(fresh.collection().snapshot(), session.collection().snapshot());
    assert_eq!(fresh.focus(), Some(0));
    assert_eq!(fresh.status(), Some("Loaded: combine_pdf.json"));
}

#[tokio::test]
async fn test_saved_file_is_pretty_json_array() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(dir.path());
    session.ingest("x.pdf");
    session.save_list();

    let text = fs::read_to_string(dir.path().join("combine_pdf.json")).unwrap();
    let expected = format!(
        "[\n  {}\n]\n",
        serde_json::to_string(&dir.path().join("x.pdf")).unwrap()
    );
    assert_eq!(text, expected);
}

#[tokio::test]
async fn test_saving_empty_collection() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(dir.path());

    session.save_list();
    session.load_list();

    assert_eq!(
        fs::read_to_string(dir.path().join("combine_pdf.json")).unwrap(),
        "[]\n"
    );
    assert!(session.collection().is_empty());
    assert_eq!(session.focus(), None);
}

#[tokio::test]
async fn test_missing_entry_rejects_whole_list() {
    let dir = TempDir::new().unwrap();
    let kept = write_pdf(dir.path(), "kept.pdf", 1);
    let gone = write_pdf(dir.path(), "gone.pdf", 1);
    let mut session = session_in(dir.path());
    session.ingest("kept.pdf gone.pdf");
    session.save_list();
    fs::remove_file(gone).unwrap();

    let mut fresh = session_in(dir.path());
    fresh.ingest("current.pdf");
    let before = fresh.collection().snapshot();
    fresh.load_list();

    assert_eq!(fresh.status(), Some("Missing: gone.pdf"));
    assert_eq!(fresh.collection().snapshot(), before);
    assert!(kept.exists());
}

#[tokio::test]
async fn test_malformed_list_reports_load_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("combine_pdf.json"), "{\"not\": \"a list\"}").unwrap();
    let mut session = session_in(dir.path());
    session.ingest("current.pdf");

    session.load_list();

    assert!(session.status().unwrap().starts_with("Load err: "));
    assert_eq!(session.collection().len(), 1);
}

#[tokio::test]
async fn test_list_follows_working_directory() {
    let root = TempDir::new().unwrap();
    let project = root.path().join("project");
    fs::create_dir(&project).unwrap();
    let mut session = session_in(root.path());

    session.ingest(&project.display().to_string());
    session.ingest("a.pdf");
    session.save_list();

    assert!(project.join("combine_pdf.json").exists());
    assert!(!root.path().join("combine_pdf.json").exists());
}
