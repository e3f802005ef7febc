mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::Context;
use backend_bridge::{commands::BackendCommand, runtime};
use clap::Parser;
use config::{AppPaths, Args, LoadedSettings};
use controller::{
    events::{UiError, UiErrorCategory, UiErrorContext, UiEvent},
    reducer::ShellState,
};
use crossbeam_channel::bounded;
use eframe::egui;
use portal_core::{ControllerConfig, SessionController};
use storage::{JsonFileStore, KeyValueStore, MemoryStore};
use tracing_subscriber::EnvFilter;

const WINDOW_TITLE: &str = "CDAAS Sector Portal";

/// Opens the durable store. A store that cannot be opened at all degrades to
/// an in-memory one so the portal still runs for this session; an unreadable
/// file is moved aside and reported as corrupt data.
fn open_store(paths: &AppPaths) -> (Box<dyn KeyValueStore>, Option<UiError>) {
    match JsonFileStore::open_or_recover(&paths.store_path) {
        Ok((store, moved)) => {
            let problem = moved.map(|moved| {
                tracing::warn!(
                    store = %paths.store_path.display(),
                    backup = %moved.display(),
                    "store file was unreadable; moved aside and started fresh"
                );
                UiError::corruption(
                    UiErrorContext::Storage,
                    format!(
                        "{} was unreadable and has been moved to {}",
                        paths.store_path.display(),
                        moved.display()
                    ),
                )
            });
            tracing::info!(store = %store.path().display(), "opened durable store");
            (Box::new(store), problem)
        }
        Err(err) => {
            tracing::error!(store = %paths.store_path.display(), error = %err, "falling back to in-memory store");
            (
                Box::new(MemoryStore::new()),
                Some(UiError::from_message(
                    UiErrorContext::Storage,
                    format!("Could not open {}: {err}", paths.store_path.display()),
                )),
            )
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let LoadedSettings {
        settings,
        source,
        warnings,
    } = config::load_settings(&args)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    tracing::info!(
        config = ?source,
        delay_ms = settings.processing_delay_ms,
        dashboard_access = settings.dashboard_access.as_str(),
        "starting portal"
    );

    let (store, store_problem) = match AppPaths::from_settings(&settings) {
        Ok(paths) => open_store(&paths),
        Err(err) => {
            tracing::error!(error = %err, "no data directory; using in-memory store");
            (
                Box::new(MemoryStore::new()) as Box<dyn KeyValueStore>,
                Some(UiError::from_message(UiErrorContext::Storage, err.to_string())),
            )
        }
    };

    let controller = SessionController::new(
        store,
        ControllerConfig {
            dashboard_access: settings.dashboard_access,
        },
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    let worker = match runtime::launch(cmd_rx, ui_tx.clone(), settings.processing_delay()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            tracing::error!(error = %err, "backend worker failed to start");
            // Queue is sized for this one startup event.
            let _ = ui_tx.try_send(runtime::startup_failure(&err));
            None
        }
    };
    drop(ui_tx);

    let mut state = ShellState::new(controller);
    if let Some(problem) = store_problem {
        match problem.category() {
            UiErrorCategory::Corruption => state.show_warning(&problem),
            _ => state.show_error(&problem),
        }
    }

    let shutdown_tx = cmd_tx.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1180.0, 820.0])
            .with_min_inner_size([860.0, 600.0]),
        ..Default::default()
    };
    let run = eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(ui::PortalApp::new(state, cmd_tx, ui_rx)))),
    );

    if let Some(worker) = worker {
        let _ = shutdown_tx.send(BackendCommand::Shutdown);
        if worker.join().is_err() {
            tracing::error!("backend worker panicked");
        }
    }
    run.map_err(|err| anyhow::anyhow!("{err}"))
        .context("portal window exited with an error")
}
