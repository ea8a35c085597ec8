use crate::core::dirs::default_config_path;
use crate::core::error::{AssistantError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_QUICK_COMMITS: [&str; 8] = [
    "🚀 Quick update",
    "🐛 Bug fix",
    "✨ New feature",
    "📝 Documentation",
    "♻️ Refactoring",
    "🎨 UI improvements",
    "⚡ Performance",
    "🔧 Configuration",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AssistantConfig {
    pub git_binary: String,
    pub quick_commits: Vec<String>,
    pub clear_screen: bool,
    pub log_limit: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            git_binary: "git".to_string(),
            quick_commits: DEFAULT_QUICK_COMMITS.iter().map(|s| s.to_string()).collect(),
            clear_screen: true,
            log_limit: 15,
        }
    }
}

impl AssistantConfig {
    /// Load the config at `path`, or at the default location when `None`.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_file: PathBuf = path
            .map(Path::to_path_buf)
            .unwrap_or_else(default_config_path);

        if !config_file.exists() {
            log::debug!(
                "No config at {}, using defaults",
                config_file.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_file).map_err(|source| {
            AssistantError::ConfigReadFailed {
                path: config_file.clone(),
                source,
            }
        })?;
        let mut config: Self = serde_json::from_str(&content).map_err(|source| {
            AssistantError::ConfigParseFailed {
                path: config_file.clone(),
                source,
            }
        })?;

        // Quick commit needs at least one template to fall back to.
        if config.quick_commits.is_empty() {
            log::warn!("Config has no quick commit templates, restoring defaults");
            config.quick_commits = Self::default().quick_commits;
        }
        log::debug!("Loaded config from {}", config_file.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = AssistantConfig::load(Some(&temp_dir.path().join("absent.json")))?;
        assert_eq!(config, AssistantConfig::default());
        assert_eq!(config.quick_commits.len(), 8);
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "clear_screen": false, "quick_commits": ["wip"] }"#)?;

        let config = AssistantConfig::load(Some(&path))?;
        assert!(!config.clear_screen);
        assert_eq!(config.quick_commits, vec!["wip"]);
        assert_eq!(config.git_binary, "git");
        assert_eq!(config.log_limit, 15);
        Ok(())
    }

    #[test]
    fn test_empty_templates_restore_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "quick_commits": [] }"#)?;

        let config = AssistantConfig::load(Some(&path))?;
        assert_eq!(config.quick_commits[0], DEFAULT_QUICK_COMMITS[0]);
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json")?;

        let result = AssistantConfig::load(Some(&path));
        assert!(matches!(
            result,
            Err(AssistantError::ConfigParseFailed { .. })
        ));
        Ok(())
    }
}
