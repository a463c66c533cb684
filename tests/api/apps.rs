use super::support;
use nextcloud_admin::api::AppFilter;
use wiremock::matchers::{method, path, query_param};
use wiremock::Mock;

#[tokio::test]
async fn test_get_apps_lists_entries() {
    let (server, manager) = support::start().await;
    Mock::given(method("GET"))
        .and(path("/ocs/v1.php/cloud/apps"))
        .respond_with(support::ok(
            "<apps><element>files</element><element>activity</element><element>news</element></apps>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = manager.apps_client().get_apps(None).await.unwrap();

    assert_eq!(envelope.data_list("apps"), vec!["files", "activity", "news"]);
    let requests = support::requests(&server).await;
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_get_apps_with_filter() {
    let (server, manager) = support::start().await;
    Mock::given(method("GET"))
        .and(path("/ocs/v1.php/cloud/apps"))
        .and(query_param("filter", "disabled"))
        .respond_with(support::ok("<apps><element>news</element></apps>"))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = manager
        .apps_client()
        .get_apps(Some(AppFilter::Disabled))
        .await
        .unwrap();
    assert_eq!(envelope.data_list("apps"), vec!["news"]);
}

#[tokio::test]
async fn test_get_app_info() {
    let (server, manager) = support::start().await;
    Mock::given(method("GET"))
        .and(path("/ocs/v1.php/cloud/apps/files"))
        .respond_with(support::ok("<id>files</id><name>Files</name><version>1.22</version>"))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = manager.apps_client().get_app_info("files").await.unwrap();

    assert_eq!(envelope.data_value("name").and_then(|v| v.as_text()), Some("Files"));
    assert_eq!(envelope.data_value("version").and_then(|v| v.as_text()), Some("1.22"));
}

#[tokio::test]
async fn test_enable_and_disable_app() {
    let (server, manager) = support::start().await;
    Mock::given(method("POST"))
        .and(path("/ocs/v1.php/cloud/apps/news"))
        .respond_with(support::ok(""))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/ocs/v1.php/cloud/apps/news"))
        .respond_with(support::ok(""))
        .expect(1)
        .mount(&server)
        .await;

    let enabled = manager.apps_client().enable_app("news").await.unwrap();
    let disabled = manager.apps_client().disable_app("news").await.unwrap();

    assert!(enabled.is_ok());
    assert!(disabled.is_ok());
    assert!(enabled.data().is_none());
}

#[tokio::test]
async fn test_unknown_app_is_failure_envelope() {
    let (server, manager) = support::start().await;
    Mock::given(method("GET"))
        .and(path("/ocs/v1.php/cloud/apps/nope"))
        .respond_with(support::failure(998, "The requested app was not found"))
        .mount(&server)
        .await;

    let envelope = manager.apps_client().get_app_info("nope").await.unwrap();

    assert_eq!(envelope.status(), "failure");
    assert_eq!(envelope.status_code(), 998);
    assert!(!envelope.is_ok());
}
