//! Task List Terminal UI.
//!
//! A single-screen task list: add tasks, toggle and delete them, retitle them
//! inline, and filter the list. All persistence lives in a remote REST
//! service; this program only mirrors it.

use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod backend;
mod config;
mod event;
mod screen;
mod store;
mod toast;
mod ui;

#[cfg(test)]
mod testing;

use app::App;
use config::Config;
use event::{BackendCommand, UiEvent};
use screen::TaskScreen;
use tasklist_client::{HttpClient, TaskApi};
use toast::ToastQueue;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();
    init_logging(&config);

    info!(api_url = %config.api_url, "Starting task list TUI");

    let client = HttpClient::with_timeout(&config.api_url, config.request_timeout())?;
    let api: Arc<dyn TaskApi> = Arc::new(client);

    // Create channels for UI <-> backend communication
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<BackendCommand>();

    // Spawn background thread with its own tokio runtime
    let runtime = tokio::runtime::Runtime::new()?;
    let bg_handle = std::thread::spawn(move || {
        runtime.block_on(backend::run_backend(api, ui_tx, cmd_rx));
    });

    let screen = TaskScreen::new(cmd_tx, ToastQueue::new(config.toast_ttl()));

    // Initialize terminal (enters alternate screen, enables raw mode)
    let terminal = ratatui::init();

    let mut app = App::new(screen, ui_rx);
    let result = app.run(terminal);

    // Restore terminal (exits alternate screen, disables raw mode)
    ratatui::restore();

    // Dropping the app closes the command channel if Quit never got through
    drop(app);
    join_backend(bg_handle);

    info!("TUI shutdown complete");

    result.map_err(|e| e.into())
}

/// Log to a file so output never interferes with the terminal.
///
/// If the file cannot be created, logging is disabled.
fn init_logging(config: &Config) {
    if let Ok(file) = std::fs::File::create(&config.log_file) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_env_filter(filter)
            .with_ansi(false)
            .init();
    }
}

/// Wait for the backend thread. Returns false if it panicked.
fn join_backend(handle: std::thread::JoinHandle<()>) -> bool {
    match handle.join() {
        Ok(()) => true,
        Err(panic) => {
            let reason = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            error!(%reason, "Backend thread panicked");
            false
        }
    }
}
