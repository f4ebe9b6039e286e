//! Runtime configuration from environment variables.
//!
//! - `TUI2048_SEED`: RNG seed (u32). Defaults to a wall-clock derived value.
//! - `TUI2048_STATE_PATH`: preferences file. Defaults to `$HOME/.tui-2048.json`,
//!   or `./.tui-2048.json` when `HOME` is unset.
//! - `TUI2048_LOG_PATH`: log file. Logging is off when unset.
//! - `TUI2048_LOG_LEVEL`: `trace`, `debug`, `info`, `warn` or `error` (default `info`).
//!
//! Empty values count as unset.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

const STATE_FILE_NAME: &str = ".tui-2048.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub state_path: PathBuf,
    pub log_path: Option<PathBuf>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            state_path: PathBuf::from(STATE_FILE_NAME),
            log_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Create from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var("TUI2048_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let state_path = var("TUI2048_STATE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| match var("HOME") {
                Some(home) => PathBuf::from(home).join(STATE_FILE_NAME),
                None => PathBuf::from(STATE_FILE_NAME),
            });

        let log_path = var("TUI2048_LOG_PATH").map(PathBuf::from);

        let log_level = var("TUI2048_LOG_LEVEL")
            .map(|s| s.to_ascii_lowercase())
            .filter(|s| matches!(s.as_str(), "trace" | "debug" | "info" | "warn" | "error"))
            .unwrap_or_else(|| "info".to_string());

        Self {
            seed,
            state_path,
            log_path,
            log_level,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
