//! Running merges in the background.
//!
//! A [`MergePipeline`] runs at most one merge at a time on the tokio blocking
//! pool. The job works on its own copy of the document list and hands its
//! single outcome back over a oneshot channel, which the interactive loop
//! drains with [`MergePipeline::poll`] (or awaits with
//! [`MergePipeline::wait`]).

use futures::channel::oneshot;
use std::path::PathBuf;
use tokio::runtime::Handle;

use crate::error::{CombineError, Result};
use crate::merge::{MergeReport, Merger, OutputNaming};

/// Where the pipeline is in its lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MergeState {
    /// No merge has been started.
    #[default]
    Idle,
    /// A merge is running; its outcome has not been delivered yet.
    Running,
    /// The last merge created this document.
    Completed(PathBuf),
    /// The last merge failed with this description.
    Failed(String),
}

/// Terminal outcome of one merge job.
#[derive(Debug)]
pub enum MergeOutcome {
    /// The merged document was written.
    Completed(MergeReport),
    /// The merge stopped; nothing was written.
    Failed(CombineError),
}

/// Starts merge jobs and collects their outcomes.
#[derive(Debug)]
pub struct MergePipeline {
    runtime: Handle,
    merger: Merger,
    state: MergeState,
    pending: Option<oneshot::Receiver<MergeOutcome>>,
}

impl MergePipeline {
    /// Create a pipeline that spawns jobs on `runtime`.
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            merger: Merger::new(),
            state: MergeState::Idle,
            pending: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &MergeState {
        &self.state
    }

    /// Whether a job has been started and its outcome not yet collected.
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Start merging `snapshot` in the background.
    ///
    /// Returns as soon as the job is spawned.
    ///
    /// # Errors
    ///
    /// - [`CombineError::NothingToMerge`] if `snapshot` is empty
    /// - [`CombineError::MergeInProgress`] if the previous job's outcome has
    ///   not been collected yet
    pub fn start(&mut self, snapshot: Vec<PathBuf>, naming: OutputNaming) -> Result<()> {
        if snapshot.is_empty() {
            return Err(CombineError::NothingToMerge);
        }
        if self.is_running() {
            return Err(CombineError::MergeInProgress);
        }

        tracing::info!(files = snapshot.len(), dir = %naming.dir.display(), "merge started");

        let (tx, rx) = oneshot::channel();
        let merger = self.merger.clone();
        self.runtime.spawn_blocking(move || {
            let outcome = match merger.merge(&snapshot, &naming) {
                Ok(report) => MergeOutcome::Completed(report),
                Err(err) => MergeOutcome::Failed(err),
            };
            // The receiver is gone only if the session was dropped mid-merge.
            let _ = tx.send(outcome);
        });

        self.pending = Some(rx);
        self.state = MergeState::Running;
        Ok(())
    }

    /// Collect the running job's outcome if it has arrived.
    ///
    /// Never blocks. Each job's outcome is returned exactly once.
    pub fn poll(&mut self) -> Option<MergeOutcome> {
        let rx = self.pending.as_mut()?;
        let outcome = match rx.try_recv() {
            Ok(Some(outcome)) => outcome,
            Ok(None) => return None,
            Err(oneshot::Canceled) => abandoned(),
        };
        self.pending = None;
        Some(self.record(outcome))
    }

    /// Wait for the running job's outcome.
    ///
    /// Returns `None` when no job is pending.
    pub async fn wait(&mut self) -> Option<MergeOutcome> {
        let rx = self.pending.take()?;
        let outcome = rx.await.unwrap_or_else(|oneshot::Canceled| abandoned());
        Some(self.record(outcome))
    }

    fn record(&mut self, outcome: MergeOutcome) -> MergeOutcome {
        self.state = match &outcome {
            MergeOutcome::Completed(report) => {
                tracing::info!(
                    output = %report.output_path.display(),
                    files = report.files_merged,
                    pages = report.total_pages,
                    size = %report.format_file_size(),
                    elapsed_ms = report.merge_time.as_millis() as u64,
                    "merge completed"
                );
                MergeState::Completed(report.output_path.clone())
            }
            MergeOutcome::Failed(err) => {
                tracing::warn!(error = %err, "merge failed");
                MergeState::Failed(err.status_text())
            }
        };
        outcome
    }
}

fn abandoned() -> MergeOutcome {
    MergeOutcome::Failed(CombineError::merge_failed(
        "merge task ended without a result",
    ))
}
