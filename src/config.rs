use crate::api::TransportConfig;
use crate::auth::Credentials;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A named credential set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub base_uri: String,
    pub username: String,
    pub password: String,
}

impl Profile {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.base_uri, &self.username, &self.password)
    }
}

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub current_profile: Option<String>,
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
    #[serde(default)]
    pub transport: TransportSettings,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TransportSettings {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default)]
    pub accept_invalid_certs: bool,
    #[serde(default)]
    pub http_errors: bool,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            accept_invalid_certs: false,
            http_errors: false,
        }
    }
}

impl TransportSettings {
    /// A timeout of 0 disables it
    pub fn to_transport_config(&self) -> TransportConfig {
        let mut builder = TransportConfig::builder()
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .accept_invalid_certs(self.accept_invalid_certs)
            .http_errors(self.http_errors);
        builder = if self.timeout_secs == 0 {
            builder.no_timeout()
        } else {
            builder.timeout(Duration::from_secs(self.timeout_secs))
        };
        builder.build()
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("nextcloud-admin")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".nextcloud-admin")
        };

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using default config");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!("Loaded config with {} profiles", config.profiles.len());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", config_path);

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir)
                    .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
                info!("Created config directory: {:?}", config_dir);
            }
        }

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    /// Add or replace a profile; the first profile becomes the current one
    pub fn add_profile(&mut self, name: String, profile: Profile) {
        info!("Adding profile: {}", name);
        self.profiles.insert(name.clone(), profile);

        if self.current_profile.is_none() {
            info!("Set {} as current profile", name);
            self.current_profile = Some(name);
        }
    }

    pub fn remove_profile(&mut self, name: &str) -> Result<()> {
        self.profiles
            .remove(name)
            .ok_or_else(|| anyhow::anyhow!("Profile '{}' not found", name))?;

        if self.current_profile.as_deref() == Some(name) {
            self.current_profile = None;
        }
        Ok(())
    }

    pub fn select_profile(&mut self, name: &str) -> Result<()> {
        if !self.profiles.contains_key(name) {
            anyhow::bail!("Profile '{}' not found", name);
        }
        self.current_profile = Some(name.to_string());
        Ok(())
    }

    pub fn get_profile(&self, name: &str) -> Result<&Profile> {
        self.profiles
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("Profile '{}' not found", name))
    }

    pub fn get_current_profile(&self) -> Result<&Profile> {
        let name = self.current_profile.as_deref().ok_or_else(|| {
            anyhow::anyhow!("No profile selected. Use 'nextcloud-admin profile add' to create one.")
        })?;
        self.get_profile(name)
    }
}
