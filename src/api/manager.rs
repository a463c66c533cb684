use super::clients::{AppsClient, FederatedSharesClient, GroupsClient, SharesClient, UsersClient};
use super::connection::{Connection, TransportConfig};
use super::error::Result;
use crate::auth::Credentials;
use log::debug;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Entry point: owns the shared connection and hands out one client per
/// resource group, created on first use
pub struct ClientManager {
    connection: Arc<Connection>,
    apps: OnceCell<AppsClient>,
    users: OnceCell<UsersClient>,
    groups: OnceCell<GroupsClient>,
    shares: OnceCell<SharesClient>,
    federated_shares: OnceCell<FederatedSharesClient>,
}

impl ClientManager {
    /// Build a manager for `base_uri` (the OCS root, e.g.
    /// `https://cloud.example.com/ocs/`) with default transport settings
    pub fn build(
        base_uri: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(
            Credentials::new(base_uri, username, password),
            TransportConfig::default(),
        )
    }

    pub fn with_config(credentials: Credentials, config: TransportConfig) -> Result<Self> {
        let connection = Connection::with_config(credentials, config)?;
        Ok(Self::from_connection(Arc::new(connection)))
    }

    pub fn from_connection(connection: Arc<Connection>) -> Self {
        Self {
            connection,
            apps: OnceCell::new(),
            users: OnceCell::new(),
            groups: OnceCell::new(),
            shares: OnceCell::new(),
            federated_shares: OnceCell::new(),
        }
    }

    /// Credentials from `NEXTCLOUD_URL`, `NEXTCLOUD_USERNAME` and
    /// `NEXTCLOUD_PASSWORD`, loading `.env` first if there is one
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let credentials = Credentials::from_env()?;
        Ok(Self::with_config(credentials, TransportConfig::default())?)
    }

    pub fn connection(&self) -> &Arc<Connection> {
        &self.connection
    }

    pub fn apps_client(&self) -> &AppsClient {
        self.apps.get_or_init(|| {
            debug!("Initializing apps client");
            AppsClient::new(self.connection.clone())
        })
    }

    pub fn users_client(&self) -> &UsersClient {
        self.users.get_or_init(|| {
            debug!("Initializing users client");
            UsersClient::new(self.connection.clone())
        })
    }

    pub fn groups_client(&self) -> &GroupsClient {
        self.groups.get_or_init(|| {
            debug!("Initializing groups client");
            GroupsClient::new(self.connection.clone())
        })
    }

    pub fn shares_client(&self) -> &SharesClient {
        self.shares.get_or_init(|| {
            debug!("Initializing shares client");
            SharesClient::new(self.connection.clone())
        })
    }

    pub fn federated_shares_client(&self) -> &FederatedSharesClient {
        self.federated_shares.get_or_init(|| {
            debug!("Initializing federated shares client");
            FederatedSharesClient::new(self.connection.clone())
        })
    }
}
