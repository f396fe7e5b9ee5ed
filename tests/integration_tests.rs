//! Integration tests using mock HTTP servers
//!
//! Tests the public client end to end: endpoint + token + content in,
//! raw response body (or transport error) out.

use futures::future::join_all;
use instagram_graph::{Content, Error, GraphApi};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use tokio::net::TcpListener;
use wiremock::matchers::{body_bytes, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helpers
// ============================================================================

async fn call(
    client: &GraphApi,
    verb: &str,
    endpoint: &str,
    token: &str,
) -> Result<String, Error> {
    match verb {
        "GET" => client.get(endpoint, token).await,
        "POST" => client.post(endpoint, token, Content::text("body")).await,
        "PUT" => client.put(endpoint, token, Content::text("body")).await,
        "DELETE" => client.delete(endpoint, token).await,
        other => panic!("unsupported verb {other}"),
    }
}

/// Base URL of a port nothing listens on
fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Base URL of a server that accepts connections and drops them unanswered
async fn resetting_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            drop(socket);
        }
    });
    format!("http://{addr}")
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_get_me() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(query_param("fields", "id,username"))
        .and(header("Authorization", "Bearer TOKEN123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"id":"123","username":"alice"}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GraphApi::with_base_url(mock_server.uri()).unwrap();
    let body = client.get("me?fields=id,username", "TOKEN123").await.unwrap();

    assert_eq!(body, r#"{"id":"123","username":"alice"}"#);
}

#[tokio::test]
async fn test_delete_media() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/12345"))
        .and(header("Authorization", "Bearer TOKEN123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success":true}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GraphApi::with_base_url(mock_server.uri()).unwrap();
    let body = client.delete("12345", "TOKEN123").await.unwrap();

    assert_eq!(body, r#"{"success":true}"#);
}

#[tokio::test]
async fn test_media_publish_error_is_returned_as_body() {
    let mock_server = MockServer::start().await;
    let error_body = r#"{"error":{"message":"Invalid creation_id"}}"#;

    Mock::given(method("POST"))
        .and(path("/media_publish"))
        .and(header("Authorization", "Bearer TOKEN123"))
        .and(header("Content-Type", "application/json"))
        .and(body_bytes(br#"{"creation_id":"999"}"#.to_vec()))
        .respond_with(ResponseTemplate::new(400).set_body_string(error_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GraphApi::with_base_url(mock_server.uri()).unwrap();
    let content = Content::json(&json!({"creation_id": "999"})).unwrap();
    let body = client
        .post("media_publish", "TOKEN123", content)
        .await
        .unwrap();

    assert_eq!(body, error_body);
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["error"]["message"], "Invalid creation_id");
}

#[test_case("GET" ; "get")]
#[test_case("POST" ; "post")]
#[test_case("PUT" ; "put")]
#[test_case("DELETE" ; "delete")]
#[tokio::test]
async fn test_one_request_per_call(verb: &str) {
    let mock_server = MockServer::start().await;

    Mock::given(method(verb))
        .and(path("/17890"))
        .and(header("Authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(401).set_body_string("expired"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GraphApi::with_base_url(mock_server.uri()).unwrap();
    let body = call(&client, verb, "17890", "T").await.unwrap();

    assert_eq!(body, "expired");
}

#[tokio::test]
async fn test_form_content_is_sent_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/me/media"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_bytes(b"image_url=https%3A%2F%2Fx.test%2Fa.jpg&caption=hi".to_vec()))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"1"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GraphApi::with_base_url(mock_server.uri()).unwrap();
    let content = Content::form([("image_url", "https://x.test/a.jpg"), ("caption", "hi")]);
    let body = client.post("me/media", "T", content).await.unwrap();

    assert_eq!(body, r#"{"id":"1"}"#);
}

#[tokio::test]
async fn test_concurrent_calls_get_their_own_responses() {
    let mock_server = MockServer::start().await;

    for i in 0..8 {
        Mock::given(method("GET"))
            .and(path(format!("/{i}")))
            .and(header("Authorization", format!("Bearer token-{i}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_string(format!("media-{i}")))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = GraphApi::with_base_url(mock_server.uri()).unwrap();
    let calls = (0..8).map(|i| {
        let client = client.clone();
        async move {
            client
                .get(&i.to_string(), &format!("token-{i}"))
                .await
                .unwrap()
        }
    });
    let bodies = join_all(calls).await;

    let expected: Vec<String> = (0..8).map(|i| format!("media-{i}")).collect();
    assert_eq!(bodies, expected);
}

// ============================================================================
// Transport Failures
// ============================================================================

#[test_case("GET" ; "get")]
#[test_case("POST" ; "post")]
#[test_case("PUT" ; "put")]
#[test_case("DELETE" ; "delete")]
#[tokio::test]
async fn test_connection_refused_propagates(verb: &str) {
    let client = GraphApi::with_base_url(refused_base_url()).unwrap();
    let err = call(&client, verb, "me", "T").await.unwrap_err();

    assert!(err.is_transport());
    assert!(matches!(err, Error::Http(ref e) if e.is_connect()));
}

#[test_case("GET" ; "get")]
#[test_case("POST" ; "post")]
#[test_case("PUT" ; "put")]
#[test_case("DELETE" ; "delete")]
#[tokio::test]
async fn test_connection_reset_propagates(verb: &str) {
    let client = GraphApi::with_base_url(resetting_base_url().await).unwrap();
    let err = call(&client, verb, "me", "T").await.unwrap_err();

    assert!(err.is_transport());
}

#[tokio::test]
async fn test_client_usable_after_transport_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    let refused = GraphApi::with_base_url(refused_base_url()).unwrap();
    assert!(refused.get("me", "T").await.is_err());

    let client = GraphApi::with_base_url(mock_server.uri()).unwrap();
    assert_eq!(client.get("me", "T").await.unwrap(), "ok");
    assert_eq!(client.get("me", "T").await.unwrap(), "ok");
}
