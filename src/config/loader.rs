use super::types::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE_NAME: &str = "menus.toml";

pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Loader for `menus.toml` next to the executable
    pub fn new() -> Self {
        let config_path = Self::get_config_path();
        Self { config_path }
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    fn get_config_path() -> PathBuf {
        // Each plugin binary keeps its own config beside it
        let exe_path = std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("."));

        let exe_dir = exe_path.parent()
            .unwrap_or_else(|| Path::new("."));

        exe_dir.join(CONFIG_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.is_file()
    }

    /// Read the config file, writing the defaults first when it is missing
    pub fn load(&self) -> Result<Config> {
        if !self.exists() {
            debug!("No config at {:?}, writing defaults", self.config_path);
            let config = Config::default();
            self.save(&config)?;
            return Ok(config);
        }
        self.read()
    }

    fn read(&self) -> Result<Config> {
        let contents = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config file {:?}", self.config_path))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {:?}", self.config_path))
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let serialized = toml::to_string_pretty(config)
            .context("Failed to serialize config")?;

        if let Some(dir) = self.config_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }
        fs::write(&self.config_path, serialized)
            .with_context(|| format!("Failed to write config file {:?}", self.config_path))?;

        debug!("Saved configuration to {:?}", self.config_path);
        Ok(())
    }

    /// Load, modify and write back; returns the stored config
    pub fn update_property<F>(&self, updater: F) -> Result<Config>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.load()?;
        updater(&mut config);
        self.save(&config)?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
