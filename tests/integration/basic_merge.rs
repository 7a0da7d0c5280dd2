//! End-to-end merges driven through the session.

use pdfcombine::merge::{MergeState, Merger, OutputNaming};
use regex::Regex;
use tempfile::TempDir;

use crate::common::{merged_outputs, page_labels, session_in, write_pdf};

#[tokio::test(flavor = "multi_thread")]
async fn test_merge_two_documents_in_order() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "a.pdf", 2);
    write_pdf(dir.path(), "b.pdf", 3);
    let mut session = session_in(dir.path());

    session.ingest("a.pdf b.pdf");
    session.merge();
    session.wait_merge().await;

    let outputs = merged_outputs(dir.path());
    assert_eq!(outputs.len(), 1);
    assert_eq!(
        page_labels(&outputs[0]),
        vec!["a.p1", "a.p2", "b.p1", "b.p2", "b.p3"]
    );
    assert_eq!(session.merge_state(), &MergeState::Completed(outputs[0].clone()));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_reordered_collection_merges_in_new_order() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "a.pdf", 1);
    write_pdf(dir.path(), "b.pdf", 2);
    let mut session = session_in(dir.path());

    session.ingest("a.pdf b.pdf");
    session.move_down();
    session.merge();
    session.wait_merge().await;

    let outputs = merged_outputs(dir.path());
    assert_eq!(page_labels(&outputs[0]), vec!["b.p1", "b.p2", "a.p1"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_output_name_has_timestamp() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "only.pdf", 1);
    let mut session = session_in(dir.path());

    session.ingest("only.pdf");
    session.merge();
    session.wait_merge().await;

    let name_pattern = Regex::new(r"^combined-\d{14}\.pdf$").unwrap();
    let outputs = merged_outputs(dir.path());
    let name = outputs[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name_pattern.is_match(&name), "unexpected output name {name}");
    assert_eq!(session.status(), Some(format!("Merged: {name}").as_str()));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_same_document_twice() {
    let dir = TempDir::new().unwrap();
    write_pdf(dir.path(), "a.pdf", 2);
    let mut session = session_in(dir.path());

    session.ingest("a.pdf a.pdf");
    session.merge();
    session.wait_merge().await;

    let outputs = merged_outputs(dir.path());
    assert_eq!(page_labels(&outputs[0]), vec!["a.p1", "a.p2", "a.p1", "a.p2"]);
}

#[test]
fn test_merger_without_session() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 1);
    let b = write_pdf(dir.path(), "b.pdf", 1);

    let report = Merger::new()
        .merge(&[a, b], &OutputNaming::new(dir.path(), "combined", "pdf"))
        .unwrap();

    assert_eq!(report.files_merged, 2);
    assert_eq!(report.total_pages, 2);
    assert!(report.file_size > 0);
    assert_eq!(page_labels(&report.output_path), vec!["a.p1", "b.p1"]);
}
