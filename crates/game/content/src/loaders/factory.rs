//! Content factory for loading content from a data directory.

use std::path::{Path, PathBuf};

use arena_core::GameConfig;

use crate::loaders::{ConfigLoader, LoadResult, RosterLoader};
use crate::roster::Roster;

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── roster.ron
/// └── rules.toml
/// ```
///
/// Missing files fall back to the built-in roster and default rules.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the roster from `roster.ron`, or the built-in roster if absent.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        let path = self.data_dir.join("roster.ron");
        if !path.exists() {
            return Ok(Roster::builtin());
        }
        RosterLoader::load(&path)
    }

    /// Load rules from `rules.toml`, or the defaults if absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("rules.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_data_directory_loads() {
        let factory = ContentFactory::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"));
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
        assert_eq!(factory.load_roster().unwrap().arenas().len(), 5);
    }

    #[test]
    fn empty_directory_falls_back_to_builtin_content() {
        let dir = tempfile::TempDir::new().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_roster().unwrap(), Roster::builtin());
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
        assert_eq!(factory.data_dir(), dir.path());
    }

    #[test]
    fn malformed_roster_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("roster.ron"), "not ron at all").unwrap();

        let factory = ContentFactory::new(dir.path());
        assert!(factory.load_roster().is_err());
    }
}
