//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use roster::{RosterError, RosterSource};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Spawns the backend worker thread. It runs until the command queue closes.
pub fn launch(
    source: Result<Box<dyn RosterSource>, RosterError>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || run_backend(source, cmd_rx, ui_tx))
}

fn run_backend(
    source: Result<Box<dyn RosterSource>, RosterError>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    let source = match source {
        Ok(source) => source,
        Err(err) => {
            tracing::error!("roster source unavailable: {err}");
            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                err.to_string(),
            )));
            return;
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                format!("backend worker startup failure: failed to build runtime: {err}"),
            )));
            tracing::error!("failed to build backend runtime: {err}");
            return;
        }
    };

    let _ = ui_tx.try_send(UiEvent::Info(format!(
        "Roster source: {}",
        source.describe()
    )));

    runtime.block_on(async move {
        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                BackendCommand::FetchRoster => {
                    let description = source.describe();
                    let _ = ui_tx.try_send(UiEvent::RosterLoading {
                        source: description.clone(),
                    });

                    let event = match source.fetch().await {
                        Ok(champions) => UiEvent::RosterLoaded {
                            source: description,
                            champions,
                        },
                        Err(err) => {
                            tracing::warn!(source = %description, "roster fetch failed: {err}");
                            UiEvent::Error(UiError::from_message(
                                UiErrorContext::RosterFetch,
                                err.to_string(),
                            ))
                        }
                    };
                    if ui_tx.send(event).is_err() {
                        break;
                    }
                }
            }
        }
        tracing::debug!("backend command queue closed; worker exiting");
    });
}
