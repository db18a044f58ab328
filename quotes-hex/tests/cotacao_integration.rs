//! HTTP-level tests for `GET /cotacao`.
//!
//! The upstream provider is a wiremock server; quotes land in an in-memory
//! SQLite store through the background persistence worker.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use exchange_rates::AwesomeApiProvider;
use http_body_util::BodyExt;
use quotes_hex::{QuoteService, inbound::HttpServer, persistence_channel};
use quotes_repo::SqliteRepo;
use quotes_types::QuoteRepository;
use tower::ServiceExt;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn usdbrl_body(bid: &str) -> String {
    serde_json::json!({
        "USDBRL": {
            "code": "USD",
            "codein": "BRL",
            "name": "Dólar Americano/Real Brasileiro",
            "high": "5.0512",
            "low": "5.0101",
            "varBid": "0.0123",
            "pctChange": "0.24",
            "bid": bid,
            "ask": "5.0431",
            "timestamp": "1700000000",
            "create_date": "2023-11-14 19:13:20"
        }
    })
    .to_string()
}

/// Helper to wire a server against `upstream` with a fresh store.
async fn create_test_server(upstream: &MockServer) -> (axum::Router, SqliteRepo) {
    let repo = SqliteRepo::new("sqlite::memory:").await.unwrap();
    let (handle, worker) = persistence_channel(repo.clone());
    tokio::spawn(worker.run());

    let provider = AwesomeApiProvider::new(upstream.uri()).unwrap();
    let server = HttpServer::new(QuoteService::new(provider, handle));
    (server.router(), repo)
}

fn cotacao_request() -> Request<Body> {
    Request::builder()
        .uri("/cotacao")
        .body(Body::empty())
        .unwrap()
}

/// Polls until the store holds `expected` rows or a short deadline passes.
async fn wait_for_rows(repo: &SqliteRepo, expected: i64) -> i64 {
    for _ in 0..100 {
        let count = repo.count_quotes().await.unwrap();
        if count >= expected {
            return count;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    repo.count_quotes().await.unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_cotacao_returns_bid_and_stores_quote() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(usdbrl_body("5.0421")))
        .mount(&upstream)
        .await;

    let (app, repo) = create_test_server(&upstream).await;
    let response = app.oneshot(cotacao_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "Dolar": "5.0421" })
    );

    assert_eq!(wait_for_rows(&repo, 1).await, 1);
    let stored = &repo.list_quotes().await.unwrap()[0].quote;
    assert_eq!(stored.bid, "5.0421");
    assert_eq!(stored.code, "USD");
    assert_eq!(stored.codein, "BRL");
    assert_eq!(stored.var_bid, "0.0123");
    assert_eq!(stored.timestamp, "1700000000");
    assert_eq!(stored.create_date, "2023-11-14 19:13:20");
}

#[tokio::test]
async fn test_cotacao_missing_bid_is_bad_request() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(usdbrl_body("")))
        .mount(&upstream)
        .await;

    let (app, repo) = create_test_server(&upstream).await;
    let response = app.oneshot(cotacao_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["code"], 400);
    assert!(json["error"].as_str().unwrap().contains("bid"));

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(repo.count_quotes().await.unwrap(), 0);
}

#[tokio::test]
async fn test_cotacao_null_bid_or_pair_is_bad_request() {
    for body in [r#"{"USDBRL": {"code": "USD", "bid": null}}"#, r#"{"USDBRL": null}"#] {
        let upstream = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&upstream)
            .await;

        let (app, repo) = create_test_server(&upstream).await;
        let response = app.oneshot(cotacao_request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(json_body(response).await["code"], 400);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(repo.count_quotes().await.unwrap(), 0, "body: {body}");
    }
}

#[tokio::test]
async fn test_cotacao_upstream_timeout_is_server_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(usdbrl_body("5.0421"))
                .set_delay(Duration::from_millis(800)),
        )
        .mount(&upstream)
        .await;

    let (app, repo) = create_test_server(&upstream).await;
    let response = app.oneshot(cotacao_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await["code"], 500);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(repo.count_quotes().await.unwrap(), 0);
}

#[tokio::test]
async fn test_cotacao_upstream_error_status_is_server_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&upstream)
        .await;

    let (app, repo) = create_test_server(&upstream).await;
    let response = app.oneshot(cotacao_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(repo.count_quotes().await.unwrap(), 0);
}

#[tokio::test]
async fn test_each_request_appends_one_row() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(usdbrl_body("5.0421")))
        .mount(&upstream)
        .await;

    let (app, repo) = create_test_server(&upstream).await;
    for _ in 0..3 {
        let response = app.clone().oneshot(cotacao_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(wait_for_rows(&repo, 3).await, 3);
}

#[tokio::test]
async fn test_health_endpoint() {
    let upstream = MockServer::start().await;
    let (app, _repo) = create_test_server(&upstream).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({ "status": "healthy" })
    );
}
