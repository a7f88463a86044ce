//! Background task executing remote calls for the UI.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use tasklist_client::TaskApi;
use tasklist_core::{Command, Request};

use crate::event::{BackendCommand, UiEvent};

const ABORTED: &str = "request aborted";

/// Run the backend loop.
///
/// This function runs in a separate thread with its own tokio runtime. Each
/// request runs in its own task, so completions reach the UI in the order the
/// remote service answers, not the order requests were sent. Every request
/// produces exactly one completion event, even if its task panics.
pub async fn run_backend(
    api: Arc<dyn TaskApi>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    mut cmd_rx: mpsc::UnboundedReceiver<BackendCommand>,
) {
    info!("Backend started");

    while let Some(cmd) = cmd_rx.recv().await {
        if cmd == BackendCommand::Quit {
            info!("Received quit command, shutting down backend");
            break;
        }
        tokio::spawn(complete(Arc::clone(&api), ui_tx.clone(), cmd));
    }

    info!("Backend shutdown complete");
}

/// Perform one request and deliver its completion.
async fn complete(
    api: Arc<dyn TaskApi>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    cmd: BackendCommand,
) {
    let (request, fallback) = match cmd {
        BackendCommand::Refresh => (
            tokio::spawn(fetch(api)),
            UiEvent::FetchFailed(ABORTED.to_string()),
        ),
        BackendCommand::Execute(command) => {
            let fallback = UiEvent::CommandFailed {
                command: command.clone(),
                reason: ABORTED.to_string(),
            };
            (tokio::spawn(execute(api, command)), fallback)
        }
        BackendCommand::Quit => return,
    };

    let event = request.await.unwrap_or_else(|e| {
        error!(error = %e, "Request task failed");
        fallback
    });

    if ui_tx.send(event).is_err() {
        debug!("UI is gone, dropping completion");
    }
}

async fn fetch(api: Arc<dyn TaskApi>) -> UiEvent {
    match api.list().await {
        Ok(tasks) => {
            debug!(count = tasks.len(), "Fetched tasks");
            UiEvent::TasksLoaded(tasks)
        }
        Err(e) => {
            warn!(error = %e, "Failed to fetch tasks");
            UiEvent::FetchFailed(e.to_string())
        }
    }
}

async fn execute(api: Arc<dyn TaskApi>, command: Command) -> UiEvent {
    let result = match command.request() {
        Request::Create(body) => api.create(&body).await,
        Request::Update(id, patch) => api.update(id, &patch).await,
        Request::Delete(id) => api.delete(id).await,
    };

    match result {
        Ok(()) => UiEvent::CommandSucceeded(command),
        Err(e) => {
            warn!(command = %command.kind(), error = %e, "Command failed");
            UiEvent::CommandFailed {
                command,
                reason: e.to_string(),
            }
        }
    }
}
