//! Merging documents.
//!
//! [`Merger`] does the work synchronously: every page of every document, in
//! list order, into one new file. [`MergePipeline`] runs a [`Merger`] off the
//! interactive thread and reports back exactly once per job.

pub mod merger;
pub mod pipeline;

pub use merger::{MergeReport, Merger, OutputNaming};
pub use pipeline::{MergeOutcome, MergePipeline, MergeState};
