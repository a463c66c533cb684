use super::support::{self, PASSWORD, USERNAME};
use nextcloud_admin::api::{ClientManager, Connection, Params, TransportConfig};
use nextcloud_admin::auth::Credentials;
use std::sync::Arc;
use wiremock::matchers::{basic_auth, header, method};
use wiremock::Mock;

#[tokio::test]
async fn test_all_clients_share_one_connection() {
    let (server, manager) = support::start().await;
    Mock::given(method("GET"))
        .and(basic_auth(USERNAME, PASSWORD))
        .and(header("OCS-APIRequest", "true"))
        .respond_with(support::ok(""))
        .expect(5)
        .mount(&server)
        .await;

    manager.apps_client().get_apps(None).await.unwrap();
    manager.users_client().get_users(Params::new()).await.unwrap();
    manager.groups_client().search_groups(None).await.unwrap();
    manager.shares_client().get_all_shares().await.unwrap();
    manager.federated_shares_client().list_accepted_cloud_shares().await.unwrap();

    assert_eq!(Arc::strong_count(manager.connection()), 6);
}

#[tokio::test]
async fn test_repeated_accessor_calls_reuse_client() {
    let (_server, manager) = support::start().await;

    let first = manager.groups_client() as *const _;
    let second = manager.groups_client() as *const _;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_from_connection_with_custom_client() {
    let server = wiremock::MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "admin-scripts/1.0"))
        .respond_with(support::ok("<apps/>"))
        .expect(1)
        .mount(&server)
        .await;

    let http_client = reqwest::Client::builder()
        .user_agent("admin-scripts/1.0")
        .build()
        .unwrap();
    let connection = Connection::with_custom_client(
        Credentials::new(support::base_uri(&server), USERNAME, PASSWORD),
        http_client,
        TransportConfig::default(),
    )
    .unwrap();
    let manager = ClientManager::from_connection(Arc::new(connection));

    manager.apps_client().get_apps(None).await.unwrap();
}

#[tokio::test]
async fn test_with_config_applies_user_agent() {
    let server = wiremock::MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "provisioning-bot"))
        .respond_with(support::ok(""))
        .expect(1)
        .mount(&server)
        .await;

    let config = TransportConfig::builder().user_agent("provisioning-bot").build();
    let manager = support::manager_with_config(&server, config);

    manager.groups_client().search_groups(None).await.unwrap();
}
