//! Integration tests for eureka-http

use eureka_http::*;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_response_is_fully_buffered() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/eureka/apps/api"))
        .and(header("accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string(r#"{"ok":true}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::default_client().unwrap();
    let response = client
        .get(format!("{}/eureka/apps/api", server.uri()))
        .header("Accept", "application/json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.header("content-type"), Some("application/json"));
    assert_eq!(response.text_lossy(), r#"{"ok":true}"#);

    let value: serde_json::Value = serde_json::from_slice(response.bytes()).unwrap();
    assert_eq!(value["ok"], true);
}

#[tokio::test]
async fn test_non_success_status_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&server)
        .await;

    let client = HttpClient::default_client().unwrap();
    let response = client.post(server.uri()).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.text_lossy(), "down");
}

#[tokio::test]
async fn test_form_and_default_headers_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(header("x-env", "staging"))
        .and(body_string("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .default_header("X-Env", "staging")
        .build();
    let client = HttpClient::new(config).unwrap();

    let response = client
        .post(format!("{}/oauth/token", server.uri()))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = HttpClient::default_client().unwrap();
    let result = client.get(format!("http://127.0.0.1:{port}/")).send().await;

    let err = result.unwrap_err();
    assert!(matches!(err, HttpClientError::Connection(_)));
    assert!(err.is_connection());
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(2)))
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .timeout(std::time::Duration::from_millis(200))
        .build();
    let client = HttpClient::new(config).unwrap();

    let err = client.get(server.uri()).send().await.unwrap_err();
    assert!(matches!(err, HttpClientError::Timeout(d) if d == std::time::Duration::from_millis(200)));
    assert!(err.is_timeout());
}
