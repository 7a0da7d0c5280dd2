//! Failures must leave the directory and the collection untouched.

use pdfcombine::SessionEvent;
use pdfcombine::merge::MergeState;
use std::fs;
use tempfile::TempDir;

use crate::common::{merged_outputs, session_in, write_pdf};

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_collection_merge_only_rings() {
    let dir = TempDir::new().unwrap();
    let mut session = session_in(dir.path());

    session.merge();

    assert_eq!(session.drain_events(), vec![SessionEvent::Bell]);
    assert_eq!(session.status(), None);
    assert!(merged_outputs(dir.path()).is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_corrupt_second_document() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "good.pdf", 2);
    fs::write(dir.path().join("bad.pdf"), b"this is not a pdf").unwrap();
    let mut session = session_in(dir.path());

    session.ingest("good.pdf bad.pdf");
    session.merge();
    session.wait_merge().await;

    assert!(merged_outputs(dir.path()).is_empty());
    let status = session.status().unwrap();
    assert!(status.starts_with("Error: "), "status was {status}");
    assert!(status.contains("bad.pdf"), "status was {status}");
    assert_eq!(session.collection().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_document_deleted_before_merge() {
    let dir = TempDir::new().unwrap();
    let doomed = write_pdf(dir.path(), "doomed.pdf", 1);
    let mut session = session_in(dir.path());

    session.ingest("doomed.pdf");
    fs::remove_file(doomed).unwrap();
    session.merge();
    session.wait_merge().await;

    assert_eq!(session.status(), Some("Error: file not found: doomed.pdf"));
    assert!(matches!(session.merge_state(), MergeState::Failed(_)));
    assert!(merged_outputs(dir.path()).is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_second_merge_while_running_is_refused() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "a.pdf", 1);
    let mut session = session_in(dir.path());
    session.ingest("a.pdf");

    session.merge();
    session.drain_events();
    session.merge();

    let events = session.drain_events();
    assert_eq!(events.first(), Some(&SessionEvent::Bell));
    session.wait_merge().await;
    assert_eq!(merged_outputs(dir.path()).len(), 1);
}
