use atrium_client::{
    CONVERSATIONS_PATH, ClientError, ConversationBackend, ConversationRequest, HttpBackend,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_request() -> ConversationRequest {
    ConversationRequest::new("p1", "hello", "s1")
}

#[tokio::test]
async fn posts_exact_wire_body_and_parses_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CONVERSATIONS_PATH))
        .and(body_json(serde_json::json!({
            "property_id": "p1",
            "message": "hello",
            "session_id": "s1",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "Rooms start at $99/night.",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&server.uri()).unwrap();
    let reply = backend.send_message(&sample_request()).await.unwrap();
    assert_eq!(reply.response, "Rooms start at $99/night.");
}

#[tokio::test]
async fn trailing_slash_on_base_url_is_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CONVERSATIONS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "response": "Welcome back." })),
        )
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&format!("{}/", server.uri())).unwrap();
    let reply = backend.send_message(&sample_request()).await.unwrap();
    assert_eq!(reply.response, "Welcome back.");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CONVERSATIONS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&server.uri()).unwrap();
    let error = backend.send_message(&sample_request()).await.unwrap_err();
    assert!(matches!(
        error,
        ClientError::UnexpectedStatus { status: 503, .. }
    ));
}

#[tokio::test]
async fn malformed_reply_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CONVERSATIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&server.uri()).unwrap();
    let error = backend.send_message(&sample_request()).await.unwrap_err();
    assert!(matches!(error, ClientError::DecodeReply { .. }));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // Nothing listens on the mock server's port once it is dropped.
    // A builder-created server is not pooled, so dropping it really
    // closes the listener (pooled `MockServer::start` keeps it alive).
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let backend = HttpBackend::new(&uri).unwrap();
    let error = backend.send_message(&sample_request()).await.unwrap_err();
    assert!(matches!(error, ClientError::RequestSend { .. }));
}

#[test]
fn garbage_base_url_is_rejected_at_construction() {
    let error = HttpBackend::new("not a url").unwrap_err();
    assert!(matches!(error, ClientError::InvalidEndpoint { .. }));
}
