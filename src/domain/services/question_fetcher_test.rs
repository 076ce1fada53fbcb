use std::sync::atomic::Ordering;

use anyhow::Result;
use test_utils::completion_fixture;
use test_utils::empty_completion_fixture;
use test_utils::vendor_error_fixture;

use super::QuestionFetcher;
use crate::domain::models::FakeTransport;
use crate::domain::models::FetchError;
use crate::domain::models::SamplingOptions;

fn fetcher(transport: FakeTransport) -> QuestionFetcher {
    return QuestionFetcher::new(Box::new(transport), SamplingOptions::default());
}

#[tokio::test]
async fn it_fetches_a_normalized_question() -> Result<()> {
    let transport = FakeTransport::responding(200, &completion_fixture(" Is this really urgent... "));
    let res = fetcher(transport).fetch().await?;

    assert_eq!(res, "Is this really urgent?");
    return Ok(());
}

#[tokio::test]
async fn it_sends_the_prompt_pair_without_streaming() -> Result<()> {
    let transport = FakeTransport::responding(200, &completion_fixture("Why now?"));
    let sent = transport.sent();
    fetcher(transport).fetch().await?;

    let bodies = sent.lock().unwrap().clone();
    assert_eq!(bodies.len(), 1);

    let req: serde_json::Value = serde_json::from_str(&bodies[0])?;
    assert_eq!(req["messages"][0]["role"], "system");
    assert_eq!(req["messages"][1]["role"], "user");
    assert_eq!(req["stream"], false);
    assert_eq!(req["max_tokens"], 120);

    return Ok(());
}

#[tokio::test]
async fn it_does_not_call_out_when_encoding_fails() {
    let transport = FakeTransport::responding(200, &completion_fixture("Why now?"));
    let calls = transport.calls();
    let options = SamplingOptions {
        stop: Some(vec!["1", "2", "3", "4", "5"].into_iter().map(|s| return s.to_string()).collect()),
        ..SamplingOptions::default()
    };

    let err = QuestionFetcher::new(Box::new(transport), options)
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Encoding(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn it_surfaces_transport_errors() {
    let err = fetcher(FakeTransport::failing("dns lookup failed"))
        .fetch()
        .await
        .unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"Could not reach the question service: dns lookup failed");
}

#[tokio::test]
async fn it_hides_the_vendor_body_on_server_errors() {
    let err = fetcher(FakeTransport::responding(503, &vendor_error_fixture()))
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Server(503)));
    assert!(!err.to_string().contains("shard"));
}

#[tokio::test]
async fn it_reports_decode_errors() {
    let err = fetcher(FakeTransport::responding(200, "<html>gateway</html>"))
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn it_reports_empty_results() {
    let err = fetcher(FakeTransport::responding(200, &empty_completion_fixture()))
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::EmptyResult));
}

#[tokio::test]
async fn it_makes_exactly_one_attempt() {
    let transport = FakeTransport::failing("timed out");
    let calls = transport.calls();
    let res = fetcher(transport).fetch().await;

    assert!(res.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
