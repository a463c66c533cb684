//! Nextcloud OCS administration API
//!
//! Thin async bindings for the user, group, share, federated share and app
//! endpoints. Every operation is one HTTP call that comes back as a parsed
//! [`Envelope`]; remote failures are returned as data, and only transport
//! errors, unparseable bodies and local validation failures are errors.
//!
//! ```no_run
//! # async fn demo() -> nextcloud_admin::api::Result<()> {
//! use nextcloud_admin::api::{ClientManager, Params};
//!
//! let manager = ClientManager::build("https://cloud.example.com/ocs/", "admin", "app-token")?;
//! let users = manager.users_client().get_users(Params::new().with("search", "ali")).await?;
//! for user in users.data_list("users") {
//!     println!("{}", user);
//! }
//! # Ok(())
//! # }
//! ```

pub mod clients;
pub mod connection;
pub mod constants;
pub mod error;
pub mod manager;
pub mod params;
pub mod request;
pub mod response;

pub use clients::{AppFilter, AppsClient, FederatedSharesClient, GroupsClient, SharesClient, UsersClient};
pub use connection::{Connection, TransportConfig, TransportConfigBuilder};
pub use error::{ApiError, Result};
pub use manager::ClientManager;
pub use params::{ensure_allowed, AllowList, ParamSpec, ParamValue, Params};
pub use request::{Method, RequestDescriptor};
pub use response::{DataMap, DataValue, Envelope, RawResponse};
