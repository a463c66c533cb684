use anyhow::Result;
use log::info;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

pub const BASE_URI_VAR: &str = "NEXTCLOUD_URL";
pub const USERNAME_VAR: &str = "NEXTCLOUD_USERNAME";
pub const PASSWORD_VAR: &str = "NEXTCLOUD_PASSWORD";

/// Base URI and basic-auth credentials shared by every call.
///
/// `base_uri` points at the OCS root, e.g. `https://cloud.example.com/ocs/`.
/// `password` may be an app password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub base_uri: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_uri", &self.base_uri)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Credentials {
    pub fn new(
        base_uri: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Credentials {
        Credentials {
            base_uri: base_uri.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_env() -> Result<Credentials> {
        info!("Importing from environment variables");

        let base_uri = std::env::var(BASE_URI_VAR)
            .map_err(|_| anyhow::anyhow!("{} environment variable not set", BASE_URI_VAR))?;
        let username = std::env::var(USERNAME_VAR)
            .map_err(|_| anyhow::anyhow!("{} environment variable not set", USERNAME_VAR))?;
        let password = std::env::var(PASSWORD_VAR)
            .map_err(|_| anyhow::anyhow!("{} environment variable not set", PASSWORD_VAR))?;

        Ok(Credentials {
            base_uri,
            username,
            password,
        })
    }

    /// Read credentials from a `.env` file without touching the process environment
    pub fn from_env_file(path: &str) -> Result<Credentials> {
        info!("Importing from .env file: {}", path);

        if !Path::new(path).exists() {
            anyhow::bail!("Environment file not found: {}", path);
        }

        let vars = dotenvy::from_path_iter(path)
            .map_err(|e| anyhow::anyhow!("Failed to load .env file '{}': {}", path, e))?
            .collect::<std::result::Result<HashMap<String, String>, _>>()
            .map_err(|e| anyhow::anyhow!("Failed to parse .env file '{}': {}", path, e))?;

        let lookup = |name: &str| {
            vars.get(name)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("{} not found in .env file: {}", name, path))
        };

        Ok(Credentials {
            base_uri: lookup(BASE_URI_VAR)?,
            username: lookup(USERNAME_VAR)?,
            password: lookup(PASSWORD_VAR)?,
        })
    }
}
