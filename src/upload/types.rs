use super::error::ImportError;
use serde_json::Value;

/// Parsed body of an accepted import response.
///
/// The ingest contract does not specify the payload; it is logged for
/// diagnostics and then dropped. Acceptance means the server has queued the
/// import, not that it finished.
#[derive(Debug, Clone)]
pub struct ImportReceipt {
    pub file_name: String,
    pub body: Value,
}

/// Display record of the file currently staged for upload. Replaced wholesale
/// by the next picker selection; never persisted.
#[derive(Debug, Clone)]
pub struct StagedCsv {
    pub name: String,
    pub size_bytes: u64,
}

/// What the upload worker thread reports back to the UI thread.
pub type ImportOutcome = Result<ImportReceipt, ImportError>;
