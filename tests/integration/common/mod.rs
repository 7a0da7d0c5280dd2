//! Shared helpers for the integration tests.
//!
//! Documents are generated on the fly with `lopdf`; every page carries a
//! `/Label` name so tests can check page order after a merge.

use lopdf::{Document, Object, Stream, dictionary};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::runtime::Handle;

use pdfcombine::{Config, Session, WorkingDirectory};

/// Write a document at `dir/name` with `pages` pages labelled
/// `{stem}.p1`, `{stem}.p2`, ...
pub fn write_pdf(dir: &Path, name: &str, pages: usize) -> PathBuf {
    let path = dir.join(name);
    let stem = Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let kids: Vec<Object> = (1..=pages)
        .map(|n| {
            let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Label" => Object::Name(format!("{stem}.p{n}").into_bytes()),
            });
            Object::Reference(page_id)
        })
        .collect();

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
            "MediaBox" => Object::Array(vec![0.into(), 0.into(), 612.into(), 792.into()]),
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(&path).expect("failed to write test document");
    path
}

/// Page labels of the document at `path`, in page order.
pub fn page_labels(path: &Path) -> Vec<String> {
    let doc = Document::load(path).expect("failed to load merged document");
    doc.get_pages()
        .into_values()
        .map(|id| {
            let page = doc.get_dictionary(id).expect("page is not a dictionary");
            match page.get(b"Label") {
                Ok(Object::Name(label)) => String::from_utf8_lossy(label).into_owned(),
                other => panic!("page {id:?} has no label: {other:?}"),
            }
        })
        .collect()
}

/// Files in `dir` whose names start with `combined-`.
pub fn merged_outputs(dir: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = fs::read_dir(dir)
        .expect("failed to read directory")
        .map(|entry| entry.expect("bad directory entry").path())
        .filter(|path| {
            path.file_name()
                .is_some_and(|name| name.to_string_lossy().starts_with("combined-"))
        })
        .collect();
    found.sort();
    found
}

/// A session rooted at `dir` with the default configuration.
pub fn session_in(dir: &Path) -> Session {
    let workdir = WorkingDirectory::new(dir).expect("test directory must exist");
    Session::new(Config::default(), workdir, Handle::current())
}
