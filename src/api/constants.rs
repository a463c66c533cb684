//! API Constants for the Nextcloud OCS API

use super::params::AllowList;

/// Apps management endpoint
pub const APPS_PATH: &str = "v1.php/cloud/apps";

/// User provisioning endpoint
pub const USERS_PATH: &str = "v1.php/cloud/users";

/// Editable user fields endpoint
pub const USER_FIELDS_PATH: &str = "v1.php/cloud/user/fields";

/// Group provisioning endpoint
pub const GROUPS_PATH: &str = "v1.php/cloud/groups";

/// Share API endpoint
pub const SHARES_PATH: &str = "v2.php/apps/files_sharing/api/v1/shares";

/// Federated cloud share endpoint
pub const REMOTE_SHARES_PATH: &str = "v2.php/apps/files_sharing/api/v1/remote_shares";

/// Fields accepted by a single-field user edit
pub const USER_EDITABLE_FIELDS: AllowList = AllowList::new(&[
    "email",
    "quota",
    "displayname",
    "phone",
    "address",
    "website",
    "twitter",
    "password",
]);

/// Fields accepted by a single-field share update
pub const SHARE_UPDATABLE_FIELDS: AllowList =
    AllowList::new(&["permissions", "password", "publicUpload", "expireDate"]);

/// Standard headers for OCS requests
pub mod headers {
    /// Marker header every OCS call must carry; lowercase for `HeaderName::from_static`
    pub const OCS_API_REQUEST: &str = "ocs-apirequest";

    pub const OCS_API_REQUEST_VALUE: &str = "true";

    /// Content type for pushed form data
    pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";
}

/// Default user agent sent by the transport
pub fn user_agent() -> String {
    format!("nextcloud-admin/{}", env!("CARGO_PKG_VERSION"))
}

/// Join an endpoint and already-encoded path segments
pub fn endpoint(base: &str, segments: &[&str]) -> String {
    let mut path = base.to_string();
    for segment in segments {
        path.push('/');
        path.push_str(segment);
    }
    path
}
