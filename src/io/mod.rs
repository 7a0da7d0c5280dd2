//! Document I/O for pdfcombine.
//!
//! The merge pipeline only needs two things from the PDF format: open a
//! document and list its pages in order ([`PdfReader`], [`LoadedPdf`]), and
//! collect pages into a new document that is written out once
//! ([`PdfAssembler`]). Both sit on top of `lopdf`.

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfAssembler, WriteStatistics};
