use super::support::{self, PASSWORD, USERNAME};
use nextcloud_admin::api::{ApiError, Connection, Method, Params, RequestDescriptor, TransportConfig};
use nextcloud_admin::auth::Credentials;
use wiremock::matchers::{basic_auth, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn connection(server: &MockServer, config: TransportConfig) -> Connection {
    Connection::with_config(Credentials::new(support::base_uri(server), USERNAME, PASSWORD), config)
        .expect("connection")
}

#[tokio::test]
async fn test_sends_ocs_header_and_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ocs/v1.php/cloud/users"))
        .and(header("OCS-APIRequest", "true"))
        .and(basic_auth(USERNAME, PASSWORD))
        .respond_with(support::ok("<users/>"))
        .expect(1)
        .mount(&server)
        .await;

    let connection = connection(&server, TransportConfig::default());
    let envelope = connection.request(Method::Get, "v1.php/cloud/users").await.unwrap();

    assert!(envelope.is_ok());
    assert_eq!(envelope.status_code(), 100);
    assert_eq!(envelope.http_status(), 200);
}

#[tokio::test]
async fn test_base_uri_without_trailing_slash() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ocs/v1.php/cloud/apps"))
        .respond_with(support::ok("<apps/>"))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = Credentials::new(format!("{}/ocs", server.uri()), USERNAME, PASSWORD);
    let connection = Connection::new(credentials).unwrap();
    connection.request(Method::Get, "v1.php/cloud/apps").await.unwrap();
}

#[tokio::test]
async fn test_without_auth_omits_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(support::ok(""))
        .mount(&server)
        .await;

    let connection = connection(&server, TransportConfig::default());
    connection
        .execute(RequestDescriptor::get("v1.php/cloud/capabilities").without_auth())
        .await
        .unwrap();

    let requests = support::requests(&server).await;
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(requests[0].headers.get("ocs-apirequest").unwrap(), "true");
}

#[tokio::test]
async fn test_extra_headers_override_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("OCS-APIRequest", "false"))
        .and(header("X-Trace", "abc"))
        .respond_with(support::ok(""))
        .expect(1)
        .mount(&server)
        .await;

    let connection = connection(&server, TransportConfig::default());
    connection
        .execute(
            RequestDescriptor::get("v1.php/cloud/users")
                .header("ocs-apirequest", "false")
                .header("X-Trace", "abc"),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_form_body_skips_null_values() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(support::ok(""))
        .mount(&server)
        .await;

    let connection = connection(&server, TransportConfig::default());
    let form = Params::new().with("a", "1").with_null("b").with("c", true);
    connection
        .submit_request(Method::Post, "v1.php/cloud/users", form)
        .await
        .unwrap();

    let requests = support::requests(&server).await;
    assert_eq!(support::body(&requests[0]), "a=1&c=true");
    assert_eq!(
        support::content_type(&requests[0]).as_deref(),
        Some("application/x-www-form-urlencoded")
    );
}

#[tokio::test]
async fn test_push_data_without_body_declares_form_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(support::ok(""))
        .mount(&server)
        .await;

    let connection = connection(&server, TransportConfig::default());
    connection
        .push_data_request(Method::Put, "v1.php/cloud/users/alice/disable", None)
        .await
        .unwrap();

    let requests = support::requests(&server).await;
    assert!(requests[0].body.is_empty());
    assert_eq!(
        support::content_type(&requests[0]).as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert!(requests[0].headers.get("authorization").is_some());
}

#[tokio::test]
async fn test_http_error_status_is_not_an_error_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(support::xml_response(404, support::ocs_xml("failure", 998, "Not found", "")))
        .mount(&server)
        .await;

    let connection = connection(&server, TransportConfig::default());
    let envelope = connection.request(Method::Get, "v1.php/cloud/users/ghost").await.unwrap();

    assert!(!envelope.is_ok());
    assert_eq!(envelope.status(), "failure");
    assert_eq!(envelope.status_code(), 998);
    assert_eq!(envelope.message(), Some("Not found"));
    assert_eq!(envelope.http_status(), 404);
}

#[tokio::test]
async fn test_http_errors_knob_turns_status_into_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(support::xml_response(404, support::ocs_xml("failure", 998, "Not found", "")))
        .mount(&server)
        .await;

    let config = TransportConfig::builder().http_errors(true).build();
    let connection = connection(&server, config);
    let err = connection.request(Method::Get, "v1.php/cloud/users/ghost").await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn test_non_xml_body_is_envelope_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("<html><body>Unauthorized"))
        .mount(&server)
        .await;

    let connection = connection(&server, TransportConfig::default());
    let err = connection.request(Method::Get, "v1.php/cloud/users").await.unwrap_err();

    match &err {
        ApiError::EnvelopeParse { status, raw_body, .. } => {
            assert_eq!(*status, 401);
            assert_eq!(raw_body, "<html><body>Unauthorized");
        }
        other => panic!("expected EnvelopeParse, got {:?}", other),
    }
    assert_eq!(err.raw_body(), Some("<html><body>Unauthorized"));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let config = TransportConfig::builder()
        .connect_timeout(std::time::Duration::from_secs(2))
        .build();
    let credentials = Credentials::new("http://127.0.0.1:1/ocs/", USERNAME, PASSWORD);
    let connection = Connection::with_config(credentials, config).unwrap();
    let err = connection.request(Method::Get, "v1.php/cloud/users").await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
}

#[test]
fn test_rejects_non_http_base_uri() {
    let err = Connection::new(Credentials::new("ftp://cloud.example.com/ocs", USERNAME, PASSWORD)).unwrap_err();
    assert!(matches!(err, ApiError::InvalidBaseUri { .. }));

    let err = Connection::new(Credentials::new("not a url", USERNAME, PASSWORD)).unwrap_err();
    assert!(matches!(err, ApiError::InvalidBaseUri { .. }));
}
