//! Group provisioning

use super::segment;
use crate::api::connection::Connection;
use crate::api::constants::{self, GROUPS_PATH};
use crate::api::error::Result;
use crate::api::params::Params;
use crate::api::request::{Method, RequestDescriptor};
use crate::api::response::Envelope;
use std::sync::Arc;

pub struct GroupsClient {
    connection: Arc<Connection>,
}

impl GroupsClient {
    pub fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// Search groups by substring; `None` lists every group
    pub async fn search_groups(&self, search: Option<&str>) -> Result<Envelope> {
        let query = Params::new().with_opt("search", search);
        self.connection
            .execute(RequestDescriptor::get(GROUPS_PATH).query(query))
            .await
    }

    pub async fn create_group(&self, group_id: &str) -> Result<Envelope> {
        segment("group id", group_id)?;
        self.connection
            .submit_request(Method::Post, GROUPS_PATH, Params::new().with("groupid", group_id))
            .await
    }

    /// Members of a group
    pub async fn get_group_users(&self, group_id: &str) -> Result<Envelope> {
        let path = group_path(group_id, None)?;
        self.connection.request(Method::Get, path).await
    }

    pub async fn get_group_sub_admins(&self, group_id: &str) -> Result<Envelope> {
        let path = group_path(group_id, Some("subadmins"))?;
        self.connection.request(Method::Get, path).await
    }

    pub async fn delete_group(&self, group_id: &str) -> Result<Envelope> {
        let path = group_path(group_id, None)?;
        self.connection.request(Method::Delete, path).await
    }
}

fn group_path(group_id: &str, action: Option<&str>) -> Result<String> {
    let group = segment("group id", group_id)?;
    Ok(match action {
        Some(action) => constants::endpoint(GROUPS_PATH, &[group.as_str(), action]),
        None => constants::endpoint(GROUPS_PATH, &[group.as_str()]),
    })
}
