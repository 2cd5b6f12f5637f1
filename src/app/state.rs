use crate::upload::{ImportOutcome, StagedCsv};
use std::sync::mpsc::Receiver;

/// Display status of the import flow.
///
/// Acceptance parks the status at `InProgress`; the server reports ingestion
/// asynchronously and this UI does not poll for completion, so there is no
/// separate terminal success state and no way back to `Idle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportStatus {
    Idle,
    InProgress,
    Failed(String),
}

impl Default for ImportStatus {
    fn default() -> Self {
        Self::Idle
    }
}

impl ImportStatus {
    pub fn label(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::InProgress => "In Progress".to_string(),
            Self::Failed(message) => format!("Upload Failed: {message}"),
        }
    }
}

#[derive(Default)]
pub struct DashboardState {
    pub status: ImportStatus,
    pub staged: Option<StagedCsv>,
    pub is_uploading: bool,
    pub outcome_receiver: Option<Receiver<ImportOutcome>>,
}

impl DashboardState {
    /// Fold a finished upload into the display status.
    pub fn apply_outcome(&mut self, outcome: ImportOutcome) {
        self.is_uploading = false;
        self.outcome_receiver = None;
        match outcome {
            Ok(_receipt) => self.status = ImportStatus::InProgress,
            Err(err) => self.status = ImportStatus::Failed(err.to_string()),
        }
    }
}
