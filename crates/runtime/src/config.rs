//! Runtime configuration resolved from the process environment.
use std::env;
use std::path::{Path, PathBuf};

use arena_content::{ConfigLoader, Roster, RosterLoader};
use arena_core::GameConfig;

use crate::error::{Result, RuntimeError};

/// Directories and content sources for one game session.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Directory holding `arena_save.dat`.
    pub save_dir: PathBuf,
    /// Directory for the battle transcript and diagnostic logs.
    pub log_dir: PathBuf,
    /// Write the battle transcript (default: true).
    pub battle_logs: bool,
    /// RON roster replacing the built-in one.
    pub roster_path: Option<PathBuf>,
    /// TOML rules replacing the defaults.
    pub rules_path: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            save_dir: default_save_dir(),
            log_dir: default_log_dir(),
            battle_logs: true,
            roster_path: None,
            rules_path: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_SAVE_DIR` - Directory for the save file (default: platform-specific)
    /// - `ARENA_LOG_DIR` - Directory for logs (default: platform-specific)
    /// - `ARENA_BATTLE_LOGS` - Write the battle transcript (default: true)
    /// - `ARENA_ROSTER` - RON roster file (default: built-in roster)
    /// - `ARENA_RULES` - TOML rules file (default: built-in rules)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("ARENA_SAVE_DIR") {
            config.save_dir = PathBuf::from(dir);
        }
        if let Some(dir) = env::var_os("ARENA_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }
        if let Some(enable) = read_env::<bool>("ARENA_BATTLE_LOGS") {
            config.battle_logs = enable;
        }
        config.roster_path = env::var_os("ARENA_ROSTER").map(PathBuf::from);
        config.rules_path = env::var_os("ARENA_RULES").map(PathBuf::from);

        config
    }

    /// Roster from `roster_path`, or the built-in roster.
    pub fn load_roster(&self) -> Result<Roster> {
        match &self.roster_path {
            Some(path) => RosterLoader::load(path).map_err(content_error),
            None => Ok(Roster::builtin()),
        }
    }

    /// Rules from `rules_path`, or the defaults.
    pub fn load_rules(&self) -> Result<GameConfig> {
        match &self.rules_path {
            Some(path) => ConfigLoader::load(path).map_err(content_error),
            None => Ok(GameConfig::default()),
        }
    }

    /// Directory for the battle transcript, if enabled.
    pub fn battle_log_dir(&self) -> Option<&Path> {
        self.battle_logs.then_some(self.log_dir.as_path())
    }
}

fn content_error(err: impl std::fmt::Display) -> RuntimeError {
    RuntimeError::Content(format!("{err:#}"))
}

/// Platform data directory, e.g. `~/.local/share/arena` on Linux.
fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "arena")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Platform cache directory, e.g. `~/.cache/arena/logs` on Linux.
fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "arena")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("/tmp/arena/logs"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
