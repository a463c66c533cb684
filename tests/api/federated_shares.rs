use super::support;
use wiremock::matchers::{method, path};
use wiremock::Mock;

const REMOTE_SHARES: &str = "/ocs/v2.php/apps/files_sharing/api/v1/remote_shares";

#[tokio::test]
async fn test_list_accepted_and_pending() {
    let (server, manager) = support::start().await;
    Mock::given(method("GET"))
        .and(path(REMOTE_SHARES))
        .respond_with(support::ok(
            "<element><id>4</id><remote>https://other.example.org/</remote><name>/Shared</name></element>",
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/pending", REMOTE_SHARES)))
        .respond_with(support::ok(""))
        .expect(1)
        .mount(&server)
        .await;

    let client = manager.federated_shares_client();
    let accepted = client.list_accepted_cloud_shares().await.unwrap();
    let pending = client.list_pending_cloud_shares().await.unwrap();

    let share = accepted.data_value("element").unwrap();
    assert_eq!(share.get("remote").and_then(|v| v.as_text()), Some("https://other.example.org/"));
    assert!(pending.data().is_none());
}

#[tokio::test]
async fn test_get_and_delete_cloud_share() {
    let (server, manager) = support::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/4", REMOTE_SHARES)))
        .respond_with(support::ok("<id>4</id>"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{}/4", REMOTE_SHARES)))
        .respond_with(support::ok(""))
        .expect(1)
        .mount(&server)
        .await;

    let client = manager.federated_shares_client();
    let info = client.get_cloud_share_information("4").await.unwrap();
    client.delete_cloud_share("4").await.unwrap();

    assert_eq!(info.data_value("id").and_then(|v| v.as_text()), Some("4"));
}

#[tokio::test]
async fn test_accept_and_decline_pending_share() {
    let (server, manager) = support::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{}/pending/9", REMOTE_SHARES)))
        .respond_with(support::ok(""))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{}/pending/10", REMOTE_SHARES)))
        .respond_with(support::ok(""))
        .expect(1)
        .mount(&server)
        .await;

    let client = manager.federated_shares_client();
    assert!(client.accept_pending_cloud_share("9").await.unwrap().is_ok());
    assert!(client.decline_pending_cloud_share("10").await.unwrap().is_ok());
}

#[tokio::test]
async fn test_unknown_share_is_failure_envelope() {
    let (server, manager) = support::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{}/pending/99", REMOTE_SHARES)))
        .respond_with(support::failure(404, "wrong share ID, share doesn't exist."))
        .mount(&server)
        .await;

    let envelope = manager
        .federated_shares_client()
        .accept_pending_cloud_share("99")
        .await
        .unwrap();

    assert_eq!(envelope.status(), "failure");
    assert_eq!(envelope.status_code(), 404);
    assert_eq!(envelope.http_status(), 200);
}
