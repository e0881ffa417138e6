use std::time::Duration;

use dadjoke_engine::{
    fetch_json, FailureKind, FetchSettings, Fetcher, JokeResponse, ReqwestFetcher,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const JOKE_BODY: &str = r#"{"id":"R7UfaahVfFd","joke":"My dog used to chase people on a bike a lot. It got so bad I had to take his bike away.","status":200}"#;

fn fetcher(settings: FetchSettings) -> ReqwestFetcher {
    dadjoke_logging::initialize_for_tests();
    ReqwestFetcher::new(settings).expect("client")
}

#[tokio::test]
async fn fetcher_sends_accept_header_and_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(JOKE_BODY, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = fetcher(FetchSettings::default());
    let url = format!("{}/", server.uri());

    let output = fetcher.fetch(&url).await.expect("fetch ok");
    assert_eq!(output.metadata.url, url);
    assert_eq!(output.metadata.status, 200);
    assert_eq!(output.metadata.content_type.as_deref(), Some("application/json"));
    assert_eq!(output.bytes, JOKE_BODY.as_bytes());
}

#[tokio::test]
async fn fetch_json_decodes_joke() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(JOKE_BODY, "application/json"))
        .mount(&server)
        .await;

    let fetcher = fetcher(FetchSettings::default());
    let joke: JokeResponse = fetch_json(&fetcher, &server.uri()).await.expect("joke");

    assert_eq!(
        joke,
        JokeResponse {
            id: "R7UfaahVfFd".to_string(),
            joke: "My dog used to chase people on a bike a lot. It got so bad I had to take his bike away.".to_string(),
            status: 200,
        }
    );
}

#[tokio::test]
async fn fetch_json_reports_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>hi</html>", "text/html"))
        .mount(&server)
        .await;

    let fetcher = fetcher(FetchSettings::default());
    let err = fetch_json::<JokeResponse>(&fetcher, &server.uri())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = fetcher(FetchSettings::default());
    let url = format!("{}/missing", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string(JOKE_BODY),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..FetchSettings::default()
    };
    let fetcher = fetcher(settings);
    let url = format!("{}/slow", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string("01234567890"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let fetcher = fetcher(settings);
    let url = format!("{}/large", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn fetcher_rejects_invalid_addresses() {
    let fetcher = fetcher(FetchSettings::default());

    let err = fetcher.fetch("not a url").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);

    let err = fetcher.fetch("ftp://example.com/joke").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn fetcher_reports_network_failure() {
    // Nothing listens on port 9 of the loopback in the test environment.
    let fetcher = fetcher(FetchSettings::default());
    let err = fetcher.fetch("http://127.0.0.1:9/").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}
