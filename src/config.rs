#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    str::FromStr,
    sync::{Arc, Mutex, OnceLock},
    time::Duration,
};

use tracing::Level;

use crate::constants::{GROCERY_INTRO_PAUSE_MS, GROCERY_LIST_PAUSE_MS};

/// Runtime configuration read from the environment once per process.
#[derive(Debug, Clone)]
pub struct ConfigState {
    /// Maximum level of log events written to stderr.
    log_level:           Level,
    /// Pause after the grocery list title.
    grocery_intro_pause: Duration,
    /// Pause after the grocery list instructions.
    grocery_list_pause:  Duration,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self {
            log_level:           Level::WARN,
            grocery_intro_pause: Duration::from_millis(GROCERY_INTRO_PAUSE_MS),
            grocery_list_pause:  Duration::from_millis(GROCERY_LIST_PAUSE_MS),
        }
    }
}

impl ConfigState {
    /// Reads configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self {
            log_level:           parse_log_level(std::env::var("DRILLS_LOG").ok()),
            grocery_intro_pause: read_pause_ms(
                "DRILLS_GROCERY_INTRO_PAUSE_MS",
                GROCERY_INTRO_PAUSE_MS,
            ),
            grocery_list_pause:  read_pause_ms(
                "DRILLS_GROCERY_LIST_PAUSE_MS",
                GROCERY_LIST_PAUSE_MS,
            ),
        }
    }

    /// Returns the configured log level.
    pub fn log_level(&self) -> Level {
        self.log_level
    }

    /// Returns the pause after the grocery list title.
    pub fn grocery_intro_pause(&self) -> Duration {
        self.grocery_intro_pause
    }

    /// Returns the pause after the grocery list instructions.
    pub fn grocery_list_pause(&self) -> Duration {
        self.grocery_list_pause
    }
}

/// Shared configuration handle used throughout the crate.
#[derive(Clone, Debug)]
pub struct ConfigHandle(Arc<ConfigState>);

impl std::ops::Deref for ConfigHandle {
    type Target = ConfigState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG_SLOT: OnceLock<Mutex<Option<Arc<ConfigState>>>> = OnceLock::new();

/// Returns the mutex guarding the global configuration slot.
fn slot() -> &'static Mutex<Option<Arc<ConfigState>>> {
    CONFIG_SLOT.get_or_init(|| Mutex::new(None))
}

/// Returns the active configuration, reading the environment on first use.
pub fn get() -> ConfigHandle {
    let mut guard = slot().lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(cfg) = guard.as_ref() {
        return ConfigHandle(Arc::clone(cfg));
    }

    let cfg = Arc::new(ConfigState::from_env());
    *guard = Some(Arc::clone(&cfg));
    ConfigHandle(cfg)
}

/// Parses a log level name, defaulting to `WARN` when unset or unrecognised.
fn parse_log_level(val: Option<String>) -> Level {
    val.and_then(|s| Level::from_str(s.trim()).ok())
        .unwrap_or(Level::WARN)
}

/// Parses an environment variable into a `Duration` of milliseconds, falling
/// back to `default_ms` when parsing fails or the variable is missing.
fn read_pause_ms(env: &str, default_ms: u64) -> Duration {
    std::env::var(env)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or_else(|| Duration::from_millis(default_ms))
}
