//! Apps management

use super::segment;
use crate::api::connection::Connection;
use crate::api::constants::{self, APPS_PATH};
use crate::api::error::{ApiError, Result};
use crate::api::params::Params;
use crate::api::request::{Method, RequestDescriptor};
use crate::api::response::Envelope;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Filter for [`AppsClient::get_apps`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppFilter {
    Enabled,
    Disabled,
}

impl AppFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppFilter::Enabled => "enabled",
            AppFilter::Disabled => "disabled",
        }
    }
}

impl fmt::Display for AppFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppFilter {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "enabled" => Ok(AppFilter::Enabled),
            "disabled" => Ok(AppFilter::Disabled),
            other => Err(ApiError::invalid_options(format!(
                "Unknown app filter '{}', expected 'enabled' or 'disabled'",
                other
            ))),
        }
    }
}

pub struct AppsClient {
    connection: Arc<Connection>,
}

impl AppsClient {
    pub fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// List installed apps, optionally only enabled or disabled ones
    pub async fn get_apps(&self, filter: Option<AppFilter>) -> Result<Envelope> {
        let query = Params::new().with_opt("filter", filter.map(|f| f.as_str()));
        self.connection
            .execute(RequestDescriptor::get(APPS_PATH).query(query))
            .await
    }

    pub async fn get_app_info(&self, app_name: &str) -> Result<Envelope> {
        let path = app_path(app_name)?;
        self.connection.request(Method::Get, path).await
    }

    pub async fn enable_app(&self, app_name: &str) -> Result<Envelope> {
        let path = app_path(app_name)?;
        self.connection.request(Method::Post, path).await
    }

    pub async fn disable_app(&self, app_name: &str) -> Result<Envelope> {
        let path = app_path(app_name)?;
        self.connection.request(Method::Delete, path).await
    }
}

fn app_path(app_name: &str) -> Result<String> {
    let app = segment("app name", app_name)?;
    Ok(constants::endpoint(APPS_PATH, &[app.as_str()]))
}
