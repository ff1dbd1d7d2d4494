//! Submission controller: the detection lifecycle state machine.
//!
//! The controller owns the phase (with its payloads) and the preview manager.
//! Asynchronous work happens outside: [`DetectionController::begin_submit`]
//! hands out a [`SubmissionTicket`], the caller performs the request, and
//! [`DetectionController::complete_submit`] applies the outcome only if the
//! ticket is still current.

use super::error::{SubmitError, UploadNotice};
use super::preview::{PreviewManager, PreviewSource};
use super::types::{PredictionResult, SelectedFile};

/// Payload-free view of the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// No file selected
    Idle,
    /// File selected and previewed, nothing in flight
    PreviewReady,
    /// Classification request in flight
    Submitting,
    /// Response received and parsed
    ResultShown,
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle {
        notice: Option<UploadNotice>,
    },
    PreviewReady {
        file: SelectedFile,
        notice: Option<UploadNotice>,
    },
    Submitting {
        file: SelectedFile,
        generation: u64,
    },
    ResultShown {
        file: SelectedFile,
        result: PredictionResult,
    },
}

/// Identity of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionTicket {
    generation: u64,
    file: SelectedFile,
}

impl SubmissionTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn file(&self) -> &SelectedFile {
        &self.file
    }
}

/// Identity of one selection whose file is still being read.
///
/// Issued by [`DetectionController::begin_selection`]. Any later selection
/// or reset makes it stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionToken {
    seq: u64,
}

/// What happened to a completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Result stored, state is `ResultShown`
    Shown,
    /// Request failed, back to `PreviewReady` with a notice
    Failed,
    /// Ticket no longer current; nothing changed
    Stale,
}

#[derive(Debug)]
pub struct DetectionController<S: PreviewSource> {
    phase: Phase,
    previews: PreviewManager<S>,
    generation: u64,
    selection: u64,
}

impl<S: PreviewSource> DetectionController<S> {
    pub fn new(source: S) -> Self {
        Self {
            phase: Phase::Idle { notice: None },
            previews: PreviewManager::new(source),
            generation: 0,
            selection: 0,
        }
    }

    pub fn state(&self) -> LifecycleState {
        match self.phase {
            Phase::Idle { .. } => LifecycleState::Idle,
            Phase::PreviewReady { .. } => LifecycleState::PreviewReady,
            Phase::Submitting { .. } => LifecycleState::Submitting,
            Phase::ResultShown { .. } => LifecycleState::ResultShown,
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        match &self.phase {
            Phase::Idle { .. } => None,
            Phase::PreviewReady { file, .. }
            | Phase::Submitting { file, .. }
            | Phase::ResultShown { file, .. } => Some(file),
        }
    }

    pub fn preview(&self) -> Option<&S::Handle> {
        self.previews.current()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match &self.phase {
            Phase::ResultShown { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&UploadNotice> {
        match &self.phase {
            Phase::Idle { notice } | Phase::PreviewReady { notice, .. } => notice.as_ref(),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn preview_source(&self) -> &S {
        self.previews.source()
    }

    /// Start a submission. Only valid from `PreviewReady`; every other state
    /// is left untouched.
    pub fn begin_submit(&mut self) -> Result<SubmissionTicket, SubmitError> {
        let file = match &self.phase {
            Phase::PreviewReady { file, .. } => file.clone(),
            Phase::Idle { .. } => return Err(SubmitError::NoFileSelected),
            Phase::Submitting { .. } => return Err(SubmitError::AlreadySubmitting),
            Phase::ResultShown { .. } => return Err(SubmitError::ResultAlreadyShown),
        };

        self.generation += 1;
        self.phase = Phase::Submitting {
            file: file.clone(),
            generation: self.generation,
        };

        Ok(SubmissionTicket {
            generation: self.generation,
            file,
        })
    }

    /// Apply the outcome of the request identified by `ticket`.
    pub fn complete_submit(
        &mut self,
        ticket: &SubmissionTicket,
        outcome: Result<PredictionResult, String>,
    ) -> CompletionOutcome {
        let file = match &self.phase {
            Phase::Submitting { file, generation } if *generation == ticket.generation => {
                file.clone()
            }
            _ => return CompletionOutcome::Stale,
        };

        match outcome {
            Ok(result) => {
                self.phase = Phase::ResultShown { file, result };
                CompletionOutcome::Shown
            }
            Err(msg) => {
                self.phase = Phase::PreviewReady {
                    file,
                    notice: Some(UploadNotice::Upload(msg)),
                };
                CompletionOutcome::Failed
            }
        }
    }

    /// Back to `Idle` from any state. Releases the preview and invalidates
    /// any request in flight.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.selection += 1;
        self.previews.clear();
        self.phase = Phase::Idle { notice: None };
    }

    /// Reserve a selection before its file has been read. Supersedes any
    /// selection still pending.
    pub fn begin_selection(&mut self) -> SelectionToken {
        self.selection += 1;
        SelectionToken {
            seq: self.selection,
        }
    }

    pub(crate) fn is_current_selection(&self, token: &SelectionToken) -> bool {
        token.seq == self.selection
    }

    /// Take `file` as the new selection, or clear everything on `None`.
    pub(crate) fn adopt(&mut self, file: Option<SelectedFile>) {
        let Some(file) = file else {
            self.reset();
            return;
        };

        self.generation += 1;
        self.selection += 1;
        self.phase = match self.previews.replace(&file) {
            Ok(_) => Phase::PreviewReady { file, notice: None },
            Err(e) => Phase::Idle {
                notice: Some(e.into()),
            },
        };
    }
}
