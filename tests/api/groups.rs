use super::support;
use nextcloud_admin::api::ApiError;
use wiremock::matchers::{body_string, method, path, query_param};
use wiremock::Mock;

#[tokio::test]
async fn test_search_groups() {
    let (server, manager) = support::start().await;
    Mock::given(method("GET"))
        .and(path("/ocs/v1.php/cloud/groups"))
        .and(query_param("search", "adm"))
        .respond_with(support::ok("<groups><element>admin</element></groups>"))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = manager.groups_client().search_groups(Some("adm")).await.unwrap();
    assert_eq!(envelope.data_list("groups"), vec!["admin"]);
}

#[tokio::test]
async fn test_search_groups_without_filter_sends_no_query() {
    let (server, manager) = support::start().await;
    Mock::given(method("GET"))
        .and(path("/ocs/v1.php/cloud/groups"))
        .respond_with(support::ok("<groups><element>admin</element><element>staff</element></groups>"))
        .mount(&server)
        .await;

    let envelope = manager.groups_client().search_groups(None).await.unwrap();

    assert_eq!(envelope.data_list("groups"), vec!["admin", "staff"]);
    assert_eq!(support::requests(&server).await[0].url.query(), None);
}

#[tokio::test]
async fn test_create_group() {
    let (server, manager) = support::start().await;
    Mock::given(method("POST"))
        .and(path("/ocs/v1.php/cloud/groups"))
        .and(body_string("groupid=staff"))
        .respond_with(support::ok(""))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = manager.groups_client().create_group("staff").await.unwrap();
    assert!(envelope.is_ok());
}

#[tokio::test]
async fn test_group_members_and_sub_admins() {
    let (server, manager) = support::start().await;
    Mock::given(method("GET"))
        .and(path("/ocs/v1.php/cloud/groups/staff"))
        .respond_with(support::ok("<users><element>alice</element><element>bob</element></users>"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ocs/v1.php/cloud/groups/staff/subadmins"))
        .respond_with(support::ok("<element>carol</element>"))
        .expect(1)
        .mount(&server)
        .await;

    let members = manager.groups_client().get_group_users("staff").await.unwrap();
    let sub_admins = manager.groups_client().get_group_sub_admins("staff").await.unwrap();

    assert_eq!(members.data_list("users"), vec!["alice", "bob"]);
    assert_eq!(sub_admins.data_list_at(&[]), vec!["carol"]);
}

#[tokio::test]
async fn test_delete_group() {
    let (server, manager) = support::start().await;
    Mock::given(method("DELETE"))
        .and(path("/ocs/v1.php/cloud/groups/staff"))
        .respond_with(support::ok(""))
        .expect(1)
        .mount(&server)
        .await;

    manager.groups_client().delete_group("staff").await.unwrap();
}

#[tokio::test]
async fn test_missing_group_is_failure_envelope() {
    let (server, manager) = support::start().await;
    Mock::given(method("GET"))
        .and(path("/ocs/v1.php/cloud/groups/ghosts"))
        .respond_with(support::failure(998, "The requested group could not be found"))
        .mount(&server)
        .await;

    let envelope = manager.groups_client().get_group_users("ghosts").await.unwrap();

    assert!(!envelope.is_ok());
    assert_eq!(envelope.status_code(), 998);
    assert!(envelope.data().is_none());
}

#[tokio::test]
async fn test_blank_group_id_is_rejected() {
    let (server, manager) = support::start().await;

    let err = manager.groups_client().delete_group("").await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidOptions(_)));
    assert!(support::requests(&server).await.is_empty());
}

#[tokio::test]
async fn test_dot_segment_group_id_is_rejected() {
    let (server, manager) = support::start().await;

    let err = manager.groups_client().delete_group("..").await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidOptions(_)));
    assert!(support::requests(&server).await.is_empty());
}
