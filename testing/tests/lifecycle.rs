//! Integration tests: the full lifecycle driven through `MockTransport`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use getkit_core::{Driver, FailureKind, Fetcher, Outcome};
use getkit_testing::MockTransport;
use serde_json::json;

#[tokio::test]
async fn success_passes_body_through_unmodified() {
    let mock = MockTransport::new().with_response(
        200,
        r#"{"bpi":{"USD":{"rate":"17,727.23","code":"USD"}}}"#,
    );
    let fetcher = Fetcher::new(mock);

    let outcome = fetcher.issue("http://mock/v1/bpi/currentprice.json").await;
    let ok = outcome.success().unwrap();
    assert_eq!(ok.body["bpi"]["USD"]["rate"], json!("17,727.23"));
}

#[tokio::test]
async fn mixed_script_classifies_each_outcome_independently() {
    let mock = MockTransport::new()
        .with_response(200, r#"["quote one"]"#)
        .with_response(500, "oops")
        .with_response(200, "not-json")
        .with_refusal("no route to host");
    let fetcher = Fetcher::new(mock.clone());

    let kinds: Vec<Option<FailureKind>> = [
        fetcher.issue("http://mock/q").await,
        fetcher.issue("http://mock/q").await,
        fetcher.issue("http://mock/q").await,
        fetcher.issue("http://mock/q").await,
    ]
    .iter()
    .map(|outcome| outcome.failure().map(|f| f.kind))
    .collect();

    assert_eq!(
        kinds,
        vec![
            None,
            Some(FailureKind::Http),
            Some(FailureKind::Parse),
            Some(FailureKind::Network),
        ]
    );
    assert_eq!(mock.issued().len(), 4);
    assert_eq!(mock.remaining(), 0);
}

#[tokio::test]
async fn http_failure_detail_is_the_status_code() {
    let fetcher = Fetcher::new(MockTransport::new().with_response(404, "{}"));

    let outcome = fetcher.issue("http://mock/missing").await;
    let err = outcome.failure().unwrap();
    assert_eq!(err.kind, FailureKind::Http);
    assert_eq!(err.detail, "404");
}

#[tokio::test]
async fn driver_renders_exactly_once_per_activation() {
    let mock = MockTransport::new()
        .with_response(200, r#"{"message":"https://images.dog.ceo/1.jpg"}"#)
        .with_refusal("connection refused");

    let rendered = std::sync::Mutex::new(Vec::new());
    let mut driver = Driver::new(
        Fetcher::new(mock.clone()),
        "http://mock/breeds/image/random",
        |outcome: Outcome| rendered.lock().unwrap().push(outcome),
    );

    driver.activate().await;
    driver.activate().await;
    drop(driver);

    let rendered = rendered.into_inner().unwrap();
    assert_eq!(rendered.len(), 2);
    assert!(rendered[0].is_success());
    assert_eq!(
        rendered[1].failure().map(|f| f.kind),
        Some(FailureKind::Network)
    );
    // Every activation issued the same spec against the transport.
    assert!(mock.issued().iter().all(|s| s.url() == "http://mock/breeds/image/random"));
}

#[tokio::test]
async fn concurrent_issues_each_resolve_exactly_once() {
    let mock = MockTransport::new()
        .with_response(200, "[1]")
        .with_response(200, "[2]");
    let fetcher = Fetcher::new(mock);

    let (a, b) = tokio::join!(
        fetcher.issue("http://mock/a"),
        fetcher.issue("http://mock/b"),
    );

    // No ordering guarantee between completions; both terminal, both 2xx.
    assert!(a.is_success());
    assert!(b.is_success());
}
