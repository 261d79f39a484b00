use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::store::{DEFAULT_INITIAL_TASK, TrackStore};

const CONFIG_FILE: &str = ".conductor.toml";
const DEFAULT_CONDUCTOR_DIR: &str = "conductor";
pub const CONDUCTOR_DIR_ENV: &str = "CONDUCTOR_DIR";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub conductor_dir: PathBuf,
    pub initial_task: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            conductor_dir: PathBuf::from(DEFAULT_CONDUCTOR_DIR),
            initial_task: DEFAULT_INITIAL_TASK.to_string(),
        }
    }
}

impl Config {
    /// Absolute or project-relative location of the `conductor/` tree.
    pub fn workspace_root(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.conductor_dir)
    }

    pub fn open_store(&self, project_dir: &Path) -> TrackStore {
        TrackStore::new(self.workspace_root(project_dir)).with_initial_task(&self.initial_task)
    }

    fn apply_env_override(&mut self, value: Option<String>) {
        if let Some(dir) = value.filter(|v| !v.trim().is_empty()) {
            tracing::debug!(dir = %dir, "Using {} override", CONDUCTOR_DIR_ENV);
            self.conductor_dir = PathBuf::from(dir);
        }
    }
}

pub fn get_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(CONFIG_FILE)
}

pub fn config_exists(project_dir: &Path) -> bool {
    get_config_path(project_dir).exists()
}

/// Loads `.conductor.toml` from the project directory, falling back to
/// defaults when the file is absent. `CONDUCTOR_DIR` wins over the file.
pub fn load_config(project_dir: &Path) -> Result<Config> {
    let mut config = read_config_file(project_dir)?;
    config.apply_env_override(std::env::var(CONDUCTOR_DIR_ENV).ok());
    Ok(config)
}

fn read_config_file(project_dir: &Path) -> Result<Config> {
    let config_path = get_config_path(project_dir);

    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            return Err(anyhow::anyhow!(
                "Failed to read config from {}: {}",
                config_path.display(),
                e
            ));
        }
    };

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", config_path.display()))
}

pub fn save_config(project_dir: &Path, config: &Config) -> Result<()> {
    let config_path = get_config_path(project_dir);
    let content =
        toml::to_string_pretty(config).with_context(|| "Failed to serialize config to TOML")?;

    std::fs::write(&config_path, content)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = read_config_file(tmp.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.workspace_root(tmp.path()), tmp.path().join("conductor"));
    }

    #[test]
    fn save_then_load() {
        let tmp = TempDir::new().unwrap();
        let config = Config {
            conductor_dir: PathBuf::from("docs/conductor"),
            initial_task: "Outline the spec".into(),
        };
        save_config(tmp.path(), &config).unwrap();
        assert!(config_exists(tmp.path()));
        assert_eq!(read_config_file(tmp.path()).unwrap(), config);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(get_config_path(tmp.path()), "initial_task = \"Kickoff\"\n").unwrap();
        let config = read_config_file(tmp.path()).unwrap();
        assert_eq!(config.conductor_dir, PathBuf::from("conductor"));
        assert_eq!(config.initial_task, "Kickoff");
    }

    #[test]
    fn invalid_file_reports_path() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(get_config_path(tmp.path()), "conductor_dir = [").unwrap();
        let err = read_config_file(tmp.path()).unwrap_err();
        assert!(err.to_string().contains(".conductor.toml"));
    }

    #[test]
    fn env_override_replaces_dir() {
        let mut config = Config::default();
        config.apply_env_override(Some("planning".into()));
        assert_eq!(config.conductor_dir, PathBuf::from("planning"));

        config.apply_env_override(Some("  ".into()));
        assert_eq!(config.conductor_dir, PathBuf::from("planning"));
    }

    #[test]
    fn open_store_uses_initial_task() {
        let tmp = TempDir::new().unwrap();
        let config = Config {
            initial_task: "Kickoff".into(),
            ..Default::default()
        };
        let store = config.open_store(tmp.path());
        store.create_track("t", "T").unwrap();
        assert!(store.read_plan("t").unwrap().ends_with("- [ ] Kickoff"));
    }
}
