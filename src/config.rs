use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// "dark" or "light"
    #[serde(default)]
    pub color_mode: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            color_mode: "dark".to_string(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".inventory-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    pub fn load_or_default() -> Config {
        Self::load().unwrap_or_default()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;
        self.write_to(&config_path)
    }

    fn write_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.color_mode, "dark");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.api_url, "http://localhost:8000");
    }

    #[test]
    fn test_saved_config_round_trips() {
        let dir = env::temp_dir().join("inventory-tui-config-test");
        let path = dir.join("config.json");
        let config = Config {
            api_url: "http://10.0.0.5:8000".to_string(),
            color_mode: "light".to_string(),
        };
        config.write_to(&path).unwrap();

        let loaded: Config = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.api_url, "http://10.0.0.5:8000");
        assert_eq!(loaded.color_mode, "light");

        fs::remove_file(&path).ok();
    }
}
