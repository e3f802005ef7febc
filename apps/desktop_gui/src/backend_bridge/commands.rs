//! Backend commands queued from UI to backend worker.

use shared::domain::NewSubmission;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    /// Hold a validated submission for the processing delay, then hand it
    /// back to the UI for storage.
    ProcessSubmission { submission: NewSubmission },
    Shutdown,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::ProcessSubmission { .. } => "process_submission",
            BackendCommand::Shutdown => "shutdown",
        }
    }
}
