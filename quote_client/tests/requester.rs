//! Integration tests for the client against a local stand-in for the quote server.

use std::time::Duration;

use axum::{Router, http::StatusCode, routing::get};
use quote_client::{QuoteRequester, write_quote};
use quote_common::QuoteError;
use tokio::net::TcpListener;

async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/get-dollar-quote", addr)
}

fn output_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("{}_{}.txt", name, std::process::id()))
}

#[tokio::test]
async fn writes_bid_to_output_file() {
    let url = spawn_server(Router::new().route(
        "/get-dollar-quote",
        get(|| async { r#"{"dolar":"5.32"}"# }),
    ))
    .await;
    let output = output_path("cotacao_ok");

    let requester = QuoteRequester::new(&url, Duration::from_millis(300)).unwrap();
    let quote = requester.fetch().await.unwrap();
    write_quote(&output, &quote).unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "Dólar: 5.32\n");
    let _ = std::fs::remove_file(&output);
}

#[tokio::test]
async fn slow_server_times_out() {
    let url = spawn_server(Router::new().route(
        "/get-dollar-quote",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            r#"{"dolar":"5.32"}"#
        }),
    ))
    .await;

    let requester = QuoteRequester::new(&url, Duration::from_millis(100)).unwrap();
    let err = requester.fetch().await.unwrap_err();

    assert!(matches!(err, QuoteError::Request(_)));
}

#[tokio::test]
async fn server_error_is_reported_with_its_text() {
    let url = spawn_server(Router::new().route(
        "/get-dollar-quote",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Fetch error: upstream answered 503",
            )
        }),
    ))
    .await;

    let requester = QuoteRequester::new(&url, Duration::from_millis(300)).unwrap();
    let err = requester.fetch().await.unwrap_err();

    assert!(matches!(err, QuoteError::Request(msg) if msg.contains("500") && msg.contains("upstream answered 503")));
}

#[tokio::test]
async fn unexpected_body_is_a_json_error() {
    let url = spawn_server(Router::new().route(
        "/get-dollar-quote",
        get(|| async { r#"{"bid":"5.32"}"# }),
    ))
    .await;

    let requester = QuoteRequester::new(&url, Duration::from_millis(300)).unwrap();
    let err = requester.fetch().await.unwrap_err();

    assert!(matches!(err, QuoteError::Json(_)));
}

#[tokio::test]
async fn save_to_writes_the_quote() {
    let url = spawn_server(Router::new().route(
        "/get-dollar-quote",
        get(|| async { r#"{"dolar":"5.4711"}"# }),
    ))
    .await;
    let output = output_path("cotacao_save");

    let requester = QuoteRequester::new(&url, Duration::from_millis(300)).unwrap();
    let quote = requester.save_to(&output).await.unwrap();

    assert_eq!(quote.dolar, "5.4711");
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "Dólar: 5.4711\n");
    let _ = std::fs::remove_file(&output);
}

#[tokio::test]
async fn server_error_leaves_no_output_file() {
    let url = spawn_server(Router::new().route(
        "/get-dollar-quote",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Store error: disk full") }),
    ))
    .await;
    let output = output_path("cotacao_absent");
    let _ = std::fs::remove_file(&output);

    let requester = QuoteRequester::new(&url, Duration::from_millis(300)).unwrap();
    let result = requester.save_to(&output).await;

    assert!(matches!(result, Err(QuoteError::Request(_))));
    assert!(!output.exists());
}

#[tokio::test]
async fn timeout_keeps_previous_output() {
    let url = spawn_server(Router::new().route(
        "/get-dollar-quote",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            r#"{"dolar":"9.99"}"#
        }),
    ))
    .await;
    let output = output_path("cotacao_previous");
    std::fs::write(&output, "Dólar: 5.32\n").unwrap();

    let requester = QuoteRequester::new(&url, Duration::from_millis(100)).unwrap();
    assert!(requester.save_to(&output).await.is_err());

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "Dólar: 5.32\n");
    let _ = std::fs::remove_file(&output);
}
