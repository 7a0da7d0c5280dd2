//! Pasting text into the session.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::common::session_in;

#[tokio::test]
async fn test_quoted_paths_keep_spaces() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(dir.path());

    session.ingest(r#""/scans/tax return 2023.pdf" /scans/receipt.pdf"#);

    assert_eq!(
        session.collection().snapshot(),
        vec![
            PathBuf::from("/scans/tax return 2023.pdf"),
            PathBuf::from("/scans/receipt.pdf"),
        ]
    );
}

#[tokio::test]
async fn test_directory_and_documents_in_one_paste() {
    let root = TempDir::new().unwrap();
    let inbox = root.path().join("inbox");
    fs::create_dir(&inbox).unwrap();
    let mut session = session_in(root.path());

    let text = format!("first.pdf \"{}\" second.pdf", inbox.display());
    let summary = session.ingest(&text);

    let inbox = fs::canonicalize(inbox).unwrap();
    assert_eq!(summary.directory.as_deref(), Some(inbox.as_path()));
    assert_eq!(session.workdir(), inbox);
    assert_eq!(
        session.collection().snapshot(),
        vec![inbox.join("first.pdf"), inbox.join("second.pdf")]
    );
}

#[tokio::test]
async fn test_last_directory_wins() {
    let root = TempDir::new().unwrap();
    let one = root.path().join("one");
    let two = root.path().join("two");
    fs::create_dir(&one).unwrap();
    fs::create_dir(&two).unwrap();
    let mut session = session_in(root.path());

    session.ingest(&format!("{} {}", one.display(), two.display()));

    assert_eq!(session.workdir(), fs::canonicalize(two).unwrap());
    assert!(session.collection().is_empty());
    assert_eq!(session.focus(), None);
}

#[tokio::test]
async fn test_later_directory_change_keeps_existing_entries() {
    let root = TempDir::new().unwrap();
    let elsewhere = root.path().join("elsewhere");
    fs::create_dir(&elsewhere).unwrap();
    let mut session = session_in(root.path());

    session.ingest("kept.pdf");
    let before = session.collection().snapshot();
    session.ingest(&elsewhere.display().to_string());

    assert_eq!(session.collection().snapshot(), before);
}

#[tokio::test]
async fn test_relative_parent_segments_are_normalized() {
    let root = TempDir::new().unwrap();
    let sub = root.path().join("sub");
    fs::create_dir(&sub).unwrap();
    let mut session = session_in(&sub);

    session.ingest("../up.pdf ./here.pdf");

    assert_eq!(
        session.collection().snapshot(),
        vec![root.path().join("up.pdf"), sub.join("here.pdf")]
    );
}

#[tokio::test]
async fn test_non_documents_are_ignored() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(dir.path());

    let summary = session.ingest("notes.txt image.png \"no such folder\"");

    assert_eq!(summary.added, 0);
    assert_eq!(summary.ignored, 3);
    assert!(session.collection().is_empty());
    assert!(session.drain_events().is_empty());
}
