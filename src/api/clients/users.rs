//! User provisioning

use super::segment;
use crate::api::connection::Connection;
use crate::api::constants::{self, USER_EDITABLE_FIELDS, USER_FIELDS_PATH, USERS_PATH};
use crate::api::error::{ApiError, Result};
use crate::api::params::{ensure_allowed, ParamSpec, ParamValue, Params};
use crate::api::request::{Method, RequestDescriptor};
use crate::api::response::Envelope;
use std::sync::Arc;

/// Options accepted when creating a user
pub const ADD_USER_SPEC: ParamSpec = ParamSpec::new(
    &["userid"],
    &["email", "password", "displayName", "quota", "language"],
);

/// Query parameters accepted when listing users
pub const LIST_USERS_SPEC: ParamSpec = ParamSpec::new(&[], &["search", "limit", "offset"]);

pub struct UsersClient {
    connection: Arc<Connection>,
}

impl UsersClient {
    pub fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// Create a user.
    ///
    /// `userid` defaults to `user_id` and may be overridden (but not nulled) by `options`;
    /// any other key outside [`ADD_USER_SPEC`] is rejected before sending.
    pub async fn add_user(&self, user_id: &str, options: Params) -> Result<Envelope> {
        segment("user id", user_id)?;
        let params = ADD_USER_SPEC.resolve(Params::new().with("userid", user_id).merged(options))?;
        if params.get("userid") == Some(None) {
            return Err(ApiError::invalid_options("userid must not be null"));
        }

        self.connection
            .submit_request(Method::Post, USERS_PATH, params)
            .await
    }

    /// Create a user with just a password
    pub async fn add_user_with_password(&self, user_id: &str, password: &str) -> Result<Envelope> {
        self.add_user(user_id, Params::new().with("password", password))
            .await
    }

    /// List users; accepts `search`, `limit` and `offset`
    pub async fn get_users(&self, params: Params) -> Result<Envelope> {
        let query = LIST_USERS_SPEC.resolve(params)?;
        self.connection
            .execute(RequestDescriptor::get(USERS_PATH).query(query))
            .await
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Envelope> {
        let path = user_path(user_id, None)?;
        self.connection.request(Method::Get, path).await
    }

    /// Set one field of a user; `key` must be in [`USER_EDITABLE_FIELDS`]
    pub async fn edit_user(
        &self,
        user_id: &str,
        key: &str,
        value: impl Into<ParamValue>,
    ) -> Result<Envelope> {
        ensure_allowed(key, &USER_EDITABLE_FIELDS)?;
        let path = user_path(user_id, None)?;

        self.connection
            .submit_request(
                Method::Put,
                path,
                Params::new().with("key", key).with("value", value),
            )
            .await
    }

    pub async fn disable_user(&self, user_id: &str) -> Result<Envelope> {
        let path = user_path(user_id, Some("disable"))?;
        self.connection
            .push_data_request(Method::Put, path, None)
            .await
    }

    pub async fn enable_user(&self, user_id: &str) -> Result<Envelope> {
        let path = user_path(user_id, Some("enable"))?;
        self.connection
            .push_data_request(Method::Put, path, None)
            .await
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<Envelope> {
        let path = user_path(user_id, None)?;
        self.connection.request(Method::Delete, path).await
    }

    pub async fn get_user_groups(&self, user_id: &str) -> Result<Envelope> {
        let path = user_path(user_id, Some("groups"))?;
        self.connection.request(Method::Get, path).await
    }

    pub async fn add_user_to_group(&self, user_id: &str, group_id: &str) -> Result<Envelope> {
        self.group_membership(Method::Post, user_id, "groups", group_id)
            .await
    }

    pub async fn remove_user_from_group(&self, user_id: &str, group_id: &str) -> Result<Envelope> {
        self.group_membership(Method::Delete, user_id, "groups", group_id)
            .await
    }

    pub async fn promote_user_sub_admin_of_group(
        &self,
        user_id: &str,
        group_id: &str,
    ) -> Result<Envelope> {
        self.group_membership(Method::Post, user_id, "subadmins", group_id)
            .await
    }

    pub async fn demote_user_sub_admin_of_group(
        &self,
        user_id: &str,
        group_id: &str,
    ) -> Result<Envelope> {
        self.group_membership(Method::Delete, user_id, "subadmins", group_id)
            .await
    }

    /// Groups in which the user is sub-admin
    pub async fn get_user_sub_admin_groups(&self, user_id: &str) -> Result<Envelope> {
        let path = user_path(user_id, Some("subadmins"))?;
        self.connection.request(Method::Get, path).await
    }

    pub async fn resend_welcome_email(&self, user_id: &str) -> Result<Envelope> {
        let path = user_path(user_id, Some("welcome"))?;
        self.connection.request(Method::Post, path).await
    }

    /// Fields the current user may edit
    pub async fn get_user_fields(&self) -> Result<Envelope> {
        self.connection
            .request(Method::Get, USER_FIELDS_PATH)
            .await
    }

    async fn group_membership(
        &self,
        method: Method,
        user_id: &str,
        relation: &str,
        group_id: &str,
    ) -> Result<Envelope> {
        let path = user_path(user_id, Some(relation))?;
        segment("group id", group_id)?;

        self.connection
            .submit_request(method, path, Params::new().with("groupid", group_id))
            .await
    }
}

fn user_path(user_id: &str, action: Option<&str>) -> Result<String> {
    let user = segment("user id", user_id)?;
    Ok(match action {
        Some(action) => constants::endpoint(USERS_PATH, &[user.as_str(), action]),
        None => constants::endpoint(USERS_PATH, &[user.as_str()]),
    })
}
