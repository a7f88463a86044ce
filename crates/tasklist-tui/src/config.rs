//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Task list TUI configuration from CLI arguments and environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "tasklist-tui")]
#[command(about = "Terminal task list backed by a remote task service")]
#[command(version)]
pub struct Config {
    /// Base URL of the task service (serves /tasks)
    #[arg(long, env = "TASKLIST_API_URL", default_value = "http://localhost:5000")]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "TASKLIST_TIMEOUT_SECS", default_value = "10")]
    pub timeout_secs: u64,

    /// How long notifications stay on screen, in seconds
    #[arg(long, env = "TASKLIST_TOAST_SECS", default_value = "3")]
    pub toast_secs: u64,

    /// Log file (logs never go to the terminal)
    #[arg(long, env = "TASKLIST_LOG_FILE", default_value = "/tmp/tasklist-tui.log")]
    pub log_file: PathBuf,

    /// Tracing filter directive, overridden by RUST_LOG
    #[arg(
        long,
        env = "TASKLIST_LOG",
        default_value = "tasklist_tui=debug,tasklist_client=debug"
    )]
    pub log_filter: String,
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_secs(self.toast_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Config::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "tasklist-tui",
            "--api-url",
            "http://tasks.internal:8080",
            "--timeout-secs",
            "2",
            "--toast-secs",
            "5",
        ])
        .unwrap();

        assert_eq!(config.api_url, "http://tasks.internal:8080");
        assert_eq!(config.request_timeout(), Duration::from_secs(2));
        assert_eq!(config.toast_ttl(), Duration::from_secs(5));
    }

    #[test]
    fn test_default_log_filter_covers_tui_and_client() {
        let config = Config::try_parse_from(["tasklist-tui"]).unwrap();
        assert_eq!(config.log_filter, "tasklist_tui=debug,tasklist_client=debug");
        assert_eq!(config.log_file, PathBuf::from("/tmp/tasklist-tui.log"));
    }

    #[test]
    fn test_rejects_non_numeric_timeout() {
        assert!(Config::try_parse_from(["tasklist-tui", "--timeout-secs", "soon"]).is_err());
    }
}
