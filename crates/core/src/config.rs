use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs::read_to_string;

use crate::error::Error;

pub const CONFIG_DIR: &str = ".buildver";
pub const CONFIG_FILE: &str = "config.json";

/// User-declared semantic version fields.
///
/// These are inputs, not derived values: the user edits them in the config and
/// the store resets the patch counter when the major/minor pair changes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeclaredVersion {
    pub major: u64,
    pub minor: u64,
    /// Optional label such as "beta"; empty means a plain release version
    #[serde(default)]
    pub pre_release: String,
}

/// Loaded from `.buildver/config.json`, controls intent classification,
/// the declared version, and publish commands.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Task name that forces Clean intent (default: "clean")
    #[serde(default = "default_skip_on_task")]
    pub skip_on_task: String,

    /// Task names that select Release intent (default: assembleRelease, bundleRelease)
    #[serde(default = "default_release_trigger_tasks")]
    pub release_trigger_tasks: Vec<String>,

    /// User-declared major/minor/preRelease applied before each bump
    #[serde(default)]
    pub version: Option<DeclaredVersion>,

    /// Publish commands keyed by module name, with "default" as fallback
    #[serde(default)]
    pub publish: HashMap<String, String>,
}

fn default_skip_on_task() -> String {
    "clean".to_string()
}

fn default_release_trigger_tasks() -> Vec<String> {
    vec!["assembleRelease".to_string(), "bundleRelease".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_on_task: default_skip_on_task(),
            release_trigger_tasks: default_release_trigger_tasks(),
            version: None,
            publish: HashMap::new(),
        }
    }
}

impl Config {
    /// Read the config from `<root>/.buildver/config.json`.
    ///
    /// A missing file yields the defaults; an unreadable or invalid file is a
    /// config error.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the file exists but is not valid JSON, or
    /// if the loaded values fail [`Config::validate`].
    pub async fn load(root: &Path) -> Result<Self, Error> {
        let config_file = root.join(CONFIG_DIR).join(CONFIG_FILE);
        let config = if config_file.is_file() {
            let raw = read_to_string(&config_file).await.map_err(|e| {
                Error::Config(format!("failed to read {}: {}", config_file.display(), e))
            })?;
            serde_json::from_str(&raw).map_err(|e| {
                Error::Config(format!("invalid JSON in {}: {}", config_file.display(), e))
            })?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns [`Error::Config`] if the skip task is empty or the release
    /// trigger set is empty.
    pub fn validate(&self) -> Result<(), Error> {
        if self.skip_on_task.is_empty() {
            return Err(Error::Config("skipOnTask must not be empty".to_string()));
        }
        if self.release_trigger_tasks.is_empty()
            || self.release_trigger_tasks.iter().any(|task| task.is_empty())
        {
            return Err(Error::Config(
                "releaseTriggerTasks must contain at least one non-empty task name".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::fs::{create_dir_all, write};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.skip_on_task, "clean");
        assert_eq!(
            config.release_trigger_tasks,
            vec!["assembleRelease", "bundleRelease"]
        );
        assert!(config.version.is_none());
        assert!(config.publish.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_release_tasks() {
        let config = Config {
            release_trigger_tasks: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_empty_skip_task() {
        let config = Config {
            skip_on_task: String::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_config_deserialize_camel_case() {
        let raw = r#"{
            "skipOnTask": "wipe",
            "releaseTriggerTasks": ["ship"],
            "version": { "major": 1, "minor": 4, "preRelease": "beta" },
            "publish": { "default": "./publish.sh" }
        }"#;
        let config: Config = serde_json::from_str(raw).unwrap();
        assert_eq!(config.skip_on_task, "wipe");
        assert_eq!(config.release_trigger_tasks, vec!["ship"]);
        let version = config.version.unwrap();
        assert_eq!(version.major, 1);
        assert_eq!(version.minor, 4);
        assert_eq!(version.pre_release, "beta");
        assert_eq!(config.publish["default"], "./publish.sh");
    }

    #[tokio::test]
    async fn test_load_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).await.unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_load_reads_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_dir = temp_dir.path().join(CONFIG_DIR);
        create_dir_all(&config_dir).await.unwrap();
        write(
            config_dir.join(CONFIG_FILE),
            r#"{ "releaseTriggerTasks": ["publishRelease"] }"#,
        )
        .await
        .unwrap();

        let config = Config::load(temp_dir.path()).await.unwrap();
        assert_eq!(config.release_trigger_tasks, vec!["publishRelease"]);
        // unspecified fields fall back to the defaults
        assert_eq!(config.skip_on_task, "clean");
    }

    #[tokio::test]
    async fn test_load_rejects_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_dir = temp_dir.path().join(CONFIG_DIR);
        create_dir_all(&config_dir).await.unwrap();
        write(config_dir.join(CONFIG_FILE), "{ not json")
            .await
            .unwrap();

        let result = Config::load(temp_dir.path()).await;
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_load_rejects_empty_release_tasks_in_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_dir = temp_dir.path().join(CONFIG_DIR);
        create_dir_all(&config_dir).await.unwrap();
        write(
            config_dir.join(CONFIG_FILE),
            r#"{ "releaseTriggerTasks": [] }"#,
        )
        .await
        .unwrap();

        let result = Config::load(temp_dir.path()).await;
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
