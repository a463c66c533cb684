//! Federated cloud shares received from remote instances

use super::segment;
use crate::api::connection::Connection;
use crate::api::constants::{self, REMOTE_SHARES_PATH};
use crate::api::error::Result;
use crate::api::request::Method;
use crate::api::response::Envelope;
use std::sync::Arc;

pub struct FederatedSharesClient {
    connection: Arc<Connection>,
}

impl FederatedSharesClient {
    pub fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// Federated shares the user has accepted
    pub async fn list_accepted_cloud_shares(&self) -> Result<Envelope> {
        self.connection
            .request(Method::Get, REMOTE_SHARES_PATH)
            .await
    }

    pub async fn get_cloud_share_information(&self, share_id: &str) -> Result<Envelope> {
        let share = segment("share id", share_id)?;
        self.connection
            .request(Method::Get, constants::endpoint(REMOTE_SHARES_PATH, &[share.as_str()]))
            .await
    }

    /// Locally delete an accepted federated share
    pub async fn delete_cloud_share(&self, share_id: &str) -> Result<Envelope> {
        let share = segment("share id", share_id)?;
        self.connection
            .request(Method::Delete, constants::endpoint(REMOTE_SHARES_PATH, &[share.as_str()]))
            .await
    }

    pub async fn list_pending_cloud_shares(&self) -> Result<Envelope> {
        self.connection
            .request(Method::Get, constants::endpoint(REMOTE_SHARES_PATH, &["pending"]))
            .await
    }

    pub async fn accept_pending_cloud_share(&self, share_id: &str) -> Result<Envelope> {
        self.connection
            .request(Method::Post, pending_path(share_id)?)
            .await
    }

    pub async fn decline_pending_cloud_share(&self, share_id: &str) -> Result<Envelope> {
        self.connection
            .request(Method::Delete, pending_path(share_id)?)
            .await
    }
}

fn pending_path(share_id: &str) -> Result<String> {
    let share = segment("share id", share_id)?;
    Ok(constants::endpoint(REMOTE_SHARES_PATH, &["pending", share.as_str()]))
}
