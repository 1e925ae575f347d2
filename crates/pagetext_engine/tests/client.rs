use std::time::Duration;

use pagetext_engine::{ClientSettings, ExtractClient, FailureKind, ReaderClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> ClientSettings {
    ClientSettings {
        relay_endpoint: format!("{}/raw", server.uri()),
        ..ClientSettings::default()
    }
}

#[tokio::test]
async fn extract_returns_the_body_verbatim() {
    let server = MockServer::start().await;
    let body = "Title: Example\n\nExtracted text body.\n";
    Mock::given(method("GET"))
        .and(path("/raw"))
        .and(query_param(
            "url",
            "https://r.jina.ai/https://example.com/doc",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let client = ReaderClient::new(settings_for(&server));
    let content = client
        .extract("https://example.com/doc")
        .await
        .expect("extract ok");

    assert_eq!(content, body);
}

#[tokio::test]
async fn extract_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/raw"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = ReaderClient::new(settings_for(&server));
    let err = client.extract("https://example.com/doc").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(502));
    assert!(err.message.contains("502"));
}

#[tokio::test]
async fn extract_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/raw"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let client = ReaderClient::new(settings);
    let err = client.extract("https://example.com/doc").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
    assert_eq!(err.message, "timeout");
}

#[tokio::test]
async fn extract_fails_on_unreachable_relay() {
    let settings = ClientSettings {
        // Nothing listens here; the connection is refused.
        relay_endpoint: "http://127.0.0.1:9/raw".to_string(),
        request_timeout: Duration::from_secs(2),
        ..ClientSettings::default()
    };
    let client = ReaderClient::new(settings);
    let err = client.extract("https://example.com/doc").await.unwrap_err();

    assert!(matches!(
        err.kind,
        FailureKind::Network | FailureKind::Timeout
    ));
}
