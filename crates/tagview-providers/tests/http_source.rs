use tagview_providers::{Error, HttpPostSource, PostSource, load_posts};
use tagview_testing::fixtures::{response_json, sample_posts};
use tagview_testing::{FailingSource, StaticSource, StubServer};

#[tokio::test]
async fn test_fetch_requests_limit_and_decodes_posts() {
    let server = StubServer::serve(200, response_json(&sample_posts())).unwrap();
    let source = HttpPostSource::new(&server.endpoint("/posts")).unwrap();

    let posts = source.fetch_posts().await.unwrap();

    assert_eq!(posts, sample_posts());
    assert_eq!(
        server.received_request().as_deref(),
        Some("GET /posts?limit=100 HTTP/1.1")
    );
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = StubServer::serve(500, "{}").unwrap();
    let source = HttpPostSource::new(&server.endpoint("/posts")).unwrap();

    let err = source.fetch_posts().await.unwrap_err();
    assert!(matches!(err, Error::Status(500)), "unexpected error: {}", err);
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    let server = StubServer::serve(200, r#"{"items": []}"#).unwrap();
    let source = HttpPostSource::new(&server.endpoint("/posts")).unwrap();

    let err = source.fetch_posts().await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "unexpected error: {}", err);
}

#[tokio::test]
async fn test_load_posts_turns_failure_into_empty_batch() {
    let posts = load_posts(&FailingSource::default()).await;
    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_load_posts_asks_source_once() {
    let source = StaticSource::new(sample_posts());
    let posts = load_posts(&source).await;

    assert_eq!(posts.len(), 4);
    assert_eq!(source.calls(), 1);
}
