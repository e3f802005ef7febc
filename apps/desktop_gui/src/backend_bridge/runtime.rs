//! Runtime bridge between UI command queue and backend event intake.

use std::{
    thread::{self, JoinHandle},
    time::Duration,
};

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, error, info};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Spawns the worker thread. It exits when the command queue disconnects or
/// a `Shutdown` command arrives.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    processing_delay: Duration,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("portal-backend".to_string())
        .spawn(move || run_worker(cmd_rx, ui_tx, processing_delay))
}

fn run_worker(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, delay: Duration) {
    info!(delay_ms = delay.as_millis() as u64, "backend worker started");
    while let Ok(cmd) = cmd_rx.recv() {
        debug!(command = cmd.name(), "backend worker received command");
        let event = match cmd {
            BackendCommand::ProcessSubmission { submission } => {
                thread::sleep(delay);
                UiEvent::SubmissionProcessed(submission)
            }
            BackendCommand::Shutdown => break,
        };
        if ui_tx.send(event).is_err() {
            error!("ui event queue disconnected; stopping backend worker");
            return;
        }
    }
    info!("backend worker stopped");
}

/// Error event for when the worker could not be started at all.
pub fn startup_failure(err: &std::io::Error) -> UiEvent {
    UiEvent::Error(UiError::from_message(
        UiErrorContext::BackendStartup,
        format!("backend worker startup failure: {err}"),
    ))
}
