//! Resource clients
//!
//! One flat catalog of operations per OCS endpoint family. Each operation
//! validates its arguments locally, builds a single request and returns the
//! parsed [`Envelope`](super::Envelope), whatever status the server reports.

pub mod apps;
pub mod federated;
pub mod groups;
pub mod shares;
pub mod users;

pub use apps::{AppFilter, AppsClient};
pub use federated::FederatedSharesClient;
pub use groups::GroupsClient;
pub use shares::SharesClient;
pub use users::UsersClient;

use super::error::{ApiError, Result};

/// Validate and percent-encode one path segment
pub(crate) fn segment(name: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(ApiError::invalid_options(format!("{} must not be empty", name)));
    }
    // dot segments would be collapsed when the path is resolved against the base URI
    if matches!(value, "." | "..") {
        return Err(ApiError::invalid_options(format!(
            "{} must not be '{}'",
            name, value
        )));
    }
    Ok(urlencoding::encode(value).into_owned())
}
