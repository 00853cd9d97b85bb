//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use crossbeam_channel::{Receiver, Sender};
use intake_core::SubmissionGateway;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the backend worker thread. Commands are handled one at a time, so
/// a submission always completes before the next command is looked at.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    gateway: Arc<dyn SubmissionGateway>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
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

        runtime.block_on(async move {
            tracing::info!("backend worker ready");
            let _ = ui_tx.try_send(UiEvent::Info("Ready".to_string()));
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::SubmitIntake { submission } => {
                        let result = gateway.submit(&submission).await;
                        if ui_tx.send(UiEvent::SubmissionFinished(result)).is_err() {
                            tracing::warn!("ui event channel closed; stopping backend worker");
                            break;
                        }
                    }
                }
            }
            tracing::info!("backend worker stopped");
        });
    });
}
