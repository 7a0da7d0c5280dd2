//! The interactive session.
//!
//! [`Session`] is everything the terminal interface talks to. It owns the
//! document collection, the working directory and the merge pipeline, turns
//! pasted text and key-binding actions into changes, and reports each change
//! as a [`SessionEvent`]. The interface only reads state back and drains
//! events; it never mutates the collection itself.

use std::path::{Path, PathBuf};
use tokio::runtime::Handle;

use crate::collection::Collection;
use crate::config::Config;
use crate::error::CombineError;
use crate::merge::{MergeOutcome, MergePipeline, MergeState, OutputNaming};
use crate::persist::ListStore;
use crate::tokenizer::tokenize;
use crate::utils::{expand_glob, is_glob_pattern};
use crate::workdir::WorkingDirectory;

/// Change notifications for the interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The collection changed; `focus` is the entry to highlight.
    CollectionChanged {
        /// Index to focus, if any.
        focus: Option<usize>,
    },
    /// The working directory moved.
    DirectoryChanged(PathBuf),
    /// New transient status text.
    Status(String),
    /// An action was refused; alert the user.
    Bell,
}

/// What a paste event did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    /// Documents appended to the collection.
    pub added: usize,
    /// Tokens that were neither directories nor documents.
    pub ignored: usize,
    /// New working directory, when a directory was pasted.
    pub directory: Option<PathBuf>,
}

/// Core state of one interactive run.
#[derive(Debug)]
pub struct Session {
    config: Config,
    workdir: WorkingDirectory,
    collection: Collection,
    store: ListStore,
    pipeline: MergePipeline,
    focus: Option<usize>,
    status: Option<String>,
    events: Vec<SessionEvent>,
}

impl Session {
    /// Start an empty session in `workdir`, spawning merges on `runtime`.
    pub fn new(config: Config, workdir: WorkingDirectory, runtime: Handle) -> Self {
        let store = ListStore::new(config.list_file.clone());
        Self {
            config,
            workdir,
            collection: Collection::new(),
            store,
            pipeline: MergePipeline::new(runtime),
            focus: None,
            status: None,
            events: Vec::new(),
        }
    }

    /// Session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current working directory.
    pub fn workdir(&self) -> &Path {
        self.workdir.path()
    }

    /// The documents, in merge order.
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Index of the highlighted entry.
    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Latest status text.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// State of the merge pipeline.
    pub fn merge_state(&self) -> &MergeState {
        self.pipeline.state()
    }

    /// Take all events raised since the last call.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Handle a block of pasted or dropped text.
    ///
    /// Directory tokens move the working directory first; the remaining
    /// tokens (after glob expansion) that carry the document extension are
    /// appended, resolved against the possibly new directory. Everything else
    /// is dropped silently.
    pub fn ingest(&mut self, text: &str) -> IngestSummary {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return IngestSummary::default();
        }

        let (tokens, directory) = self.workdir.absorb_directories(tokens);
        if let Some(dir) = &directory {
            self.events.push(SessionEvent::DirectoryChanged(dir.clone()));
        }

        let mut documents = Vec::new();
        let mut ignored = 0;
        for token in tokens {
            for candidate in self.expand(&token) {
                if self.config.is_document(&candidate) {
                    documents.push(candidate);
                } else {
                    tracing::debug!(token = %candidate.display(), "ignored non-document token");
                    ignored += 1;
                }
            }
        }

        let added = documents.len();
        if let Some(first) = self.collection.append(documents, &self.workdir) {
            self.set_focus(Some(first));
            tracing::info!(added, total = self.collection.len(), "documents added");
        }

        IngestSummary {
            added,
            ignored,
            directory,
        }
    }

    /// Move the highlighted entry one place up.
    pub fn move_up(&mut self) {
        if let Some(index) = self.focus {
            let moved = self.collection.swap_up(index);
            if moved != index {
                self.set_focus(Some(moved));
            }
        }
    }

    /// Move the highlighted entry one place down.
    pub fn move_down(&mut self) {
        if let Some(index) = self.focus {
            let moved = self.collection.swap_down(index);
            if moved != index {
                self.set_focus(Some(moved));
            }
        }
    }

    /// Highlight the previous entry without reordering.
    pub fn focus_previous(&mut self) {
        if let Some(index) = self.focus {
            self.focus = Some(index.saturating_sub(1));
        } else if !self.collection.is_empty() {
            self.focus = Some(0);
        }
    }

    /// Highlight the next entry without reordering.
    pub fn focus_next(&mut self) {
        let last = match self.collection.len() {
            0 => return,
            len => len - 1,
        };
        self.focus = Some(self.focus.map_or(0, |index| (index + 1).min(last)));
    }

    /// Write the collection to the list file.
    pub fn save_list(&mut self) {
        match self.store.save(self.collection.as_slice(), &self.workdir) {
            Ok(_) => {
                let message = format!("Saved: {}", self.config.list_file.display());
                self.set_status(message);
            }
            Err(err) => self.report(err),
        }
    }

    /// Replace the collection with the list file's contents.
    ///
    /// On any failure the collection is left as it was.
    pub fn load_list(&mut self) {
        match self.store.load(&self.workdir) {
            Ok(paths) => {
                let focus = (!paths.is_empty()).then_some(0);
                self.collection.replace_all(paths);
                self.set_focus(focus);
                let message = format!("Loaded: {}", self.config.list_file.display());
                self.set_status(message);
            }
            Err(err) => self.report(err),
        }
    }

    /// Start merging a snapshot of the collection in the background.
    ///
    /// An empty collection, or a merge whose outcome has not arrived yet,
    /// rings the bell instead.
    pub fn merge(&mut self) {
        let naming = OutputNaming::new(
            self.workdir.path(),
            self.config.output_prefix.clone(),
            self.config.extension.clone(),
        );
        match self.pipeline.start(self.collection.snapshot(), naming) {
            Ok(()) => self.set_status("Merging…".to_string()),
            Err(CombineError::NothingToMerge) => self.events.push(SessionEvent::Bell),
            Err(err) => {
                self.events.push(SessionEvent::Bell);
                self.report(err);
            }
        }
    }

    /// Pick up a finished merge, if any. Call once per interface tick.
    pub fn poll_merge(&mut self) -> Option<&MergeState> {
        let outcome = self.pipeline.poll()?;
        self.finish_merge(outcome);
        Some(self.pipeline.state())
    }

    /// Wait for the running merge to finish.
    pub async fn wait_merge(&mut self) -> Option<&MergeState> {
        let outcome = self.pipeline.wait().await?;
        self.finish_merge(outcome);
        Some(self.pipeline.state())
    }

    fn finish_merge(&mut self, outcome: MergeOutcome) {
        match outcome {
            MergeOutcome::Completed(report) => {
                self.set_status(format!("Merged: {}", report.file_name()));
            }
            MergeOutcome::Failed(err) => self.report(err),
        }
    }

    fn expand(&self, token: &str) -> Vec<PathBuf> {
        let literal = self.workdir.resolve(token);
        if !is_glob_pattern(token) || literal.exists() {
            return vec![PathBuf::from(token)];
        }

        match expand_glob(self.workdir.path(), token) {
            Ok(matches) if !matches.is_empty() => matches,
            Ok(_) => vec![PathBuf::from(token)],
            Err(err) => {
                tracing::debug!(token, %err, "invalid glob pattern");
                vec![PathBuf::from(token)]
            }
        }
    }

    fn set_focus(&mut self, focus: Option<usize>) {
        self.focus = focus;
        self.events.push(SessionEvent::CollectionChanged { focus });
    }

    fn set_status(&mut self, message: String) {
        self.status = Some(message.clone());
        self.events.push(SessionEvent::Status(message));
    }

    fn report(&mut self, err: CombineError) {
        tracing::warn!(error = %err, "action failed");
        self.set_status(err.status_text());
    }
}
