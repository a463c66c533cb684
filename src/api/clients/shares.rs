//! Share API

use super::segment;
use crate::api::connection::Connection;
use crate::api::constants::{self, SHARE_UPDATABLE_FIELDS, SHARES_PATH};
use crate::api::error::{ApiError, Result};
use crate::api::params::{ensure_allowed, ParamSpec, ParamValue, Params};
use crate::api::request::{Method, RequestDescriptor};
use crate::api::response::Envelope;
use std::sync::Arc;

/// Flags accepted when listing the shares of a path
pub const SHARES_FOR_PATH_SPEC: ParamSpec = ParamSpec::new(&[], &["reshares", "subfiles"]);

/// Options accepted when creating a share.
///
/// `shareWith` must be given but may be null (public links).
pub const CREATE_SHARE_SPEC: ParamSpec = ParamSpec::new(
    &["path", "shareType", "shareWith"],
    &["publicUpload", "password", "permissions"],
);

/// OCS share types
pub mod share_type {
    pub const USER: i64 = 0;
    pub const GROUP: i64 = 1;
    pub const PUBLIC_LINK: i64 = 3;
    pub const FEDERATED_CLOUD: i64 = 6;
}

pub struct SharesClient {
    connection: Arc<Connection>,
}

impl SharesClient {
    pub fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// Every share of the current user
    pub async fn get_all_shares(&self) -> Result<Envelope> {
        self.connection.request(Method::Get, SHARES_PATH).await
    }

    /// Shares of one file or folder; `params` may carry `reshares` and `subfiles`
    pub async fn get_shares_from_file_or_folder(&self, path: &str, params: Params) -> Result<Envelope> {
        if path.trim().is_empty() {
            return Err(ApiError::invalid_options("path must not be empty"));
        }
        let query = SHARES_FOR_PATH_SPEC.resolve(params)?.with("path", path);

        self.connection
            .execute(RequestDescriptor::get(SHARES_PATH).query(query))
            .await
    }

    pub async fn get_share_information(&self, share_id: &str) -> Result<Envelope> {
        let path = share_path(share_id)?;
        self.connection.request(Method::Get, path).await
    }

    /// Share a file or folder; see [`CREATE_SHARE_SPEC`] for the accepted keys
    pub async fn create_share(&self, params: Params) -> Result<Envelope> {
        let form = CREATE_SHARE_SPEC.resolve(params)?;
        self.connection
            .submit_request(Method::Post, SHARES_PATH, form)
            .await
    }

    /// Update one attribute of a share; `key` must be in [`SHARE_UPDATABLE_FIELDS`]
    pub async fn update_share(
        &self,
        share_id: &str,
        key: &str,
        value: impl Into<ParamValue>,
    ) -> Result<Envelope> {
        ensure_allowed(key, &SHARE_UPDATABLE_FIELDS)?;
        let path = share_path(share_id)?;

        self.connection
            .push_data_request(Method::Put, path, Some(Params::new().with(key, value)))
            .await
    }

    pub async fn delete_share(&self, share_id: &str) -> Result<Envelope> {
        let path = share_path(share_id)?;
        self.connection.request(Method::Delete, path).await
    }
}

fn share_path(share_id: &str) -> Result<String> {
    let share = segment("share id", share_id)?;
    Ok(constants::endpoint(SHARES_PATH, &[share.as_str()]))
}
