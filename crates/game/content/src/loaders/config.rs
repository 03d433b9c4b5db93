//! Battle rules loader.

use std::path::Path;

use arena_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle rules from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load rules from a TOML file.
    ///
    /// Missing keys fall back to the defaults in [`GameConfig`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(
            config.reflect_percent <= 100,
            "reflect_percent must be at most 100 (got {})",
            config.reflect_percent
        );
        anyhow::ensure!(
            (1..=100).contains(&config.resurrection_percent),
            "resurrection_percent must be between 1 and 100 (got {})",
            config.resurrection_percent
        );
        anyhow::ensure!(
            config.evasive_defense_percent <= 100,
            "evasive_defense_percent must be at most 100 (got {})",
            config.evasive_defense_percent
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse("reflect_percent = 40").unwrap();
        assert_eq!(config.reflect_percent, 40);
        assert_eq!(
            config.resurrection_percent,
            GameConfig::DEFAULT_RESURRECTION_PERCENT
        );
    }

    #[test]
    fn out_of_range_percent_is_rejected() {
        let err = ConfigLoader::parse("resurrection_percent = 0").unwrap_err();
        assert!(err.to_string().contains("resurrection_percent"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ConfigLoader::load(Path::new("/nonexistent/rules.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/rules.toml"));
    }
}
