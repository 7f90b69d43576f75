use std::net::SocketAddr;
use std::time::Duration;

use axum::routing::post;
use axum::Router;
use text_hasher_client::{
    spawn_hash, wait_for_outcome, ClientError, HashClient, HashEvent, History,
};
use text_hasher_server::{build_router, AppState};
use tokio::net::TcpListener;

const HELLO_DIGEST: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn hash_service() -> HashClient {
    let addr = serve(build_router(AppState::default())).await;
    HashClient::new(format!("http://{addr}/api/hash"), Duration::from_secs(10)).unwrap()
}

/// Accepts connections and never answers.
async fn silent_endpoint() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    addr
}

/// An address nothing is listening on.
async fn closed_endpoint() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

async fn refused_error() -> ClientError {
    let addr = closed_endpoint().await;
    let client = HashClient::new(format!("http://{addr}/api/hash"), Duration::from_secs(5)).unwrap();
    client.hash("hello").await.unwrap_err()
}

async fn timeout_error() -> ClientError {
    let addr = silent_endpoint().await;
    let client =
        HashClient::new(format!("http://{addr}/api/hash"), Duration::from_millis(300)).unwrap();
    client.hash("hello").await.unwrap_err()
}

async fn malformed_error() -> ClientError {
    let app = Router::new().route("/api/hash", post(|| async { "definitely not json" }));
    let addr = serve(app).await;
    let client = HashClient::new(format!("http://{addr}/api/hash"), Duration::from_secs(5)).unwrap();
    client.hash("hello").await.unwrap_err()
}

#[tokio::test]
async fn test_hash_success() {
    let client = hash_service().await;
    let resp = client.hash("hello").await.unwrap();
    assert_eq!(resp.original_text, "hello");
    assert_eq!(resp.hashed_value, HELLO_DIGEST);
}

#[tokio::test]
async fn test_service_validation_message_surfaced() {
    let client = hash_service().await;
    let err = client.hash("    ").await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Api("'text' field cannot be empty or consist only of whitespace".into())
    );
}

#[tokio::test]
async fn test_empty_input_not_sent() {
    let addr = closed_endpoint().await;
    let client = HashClient::new(format!("http://{addr}/api/hash"), Duration::from_secs(5)).unwrap();
    assert_eq!(client.hash("").await.unwrap_err(), ClientError::EmptyInput);
}

#[tokio::test]
async fn test_connection_refused_is_unreachable() {
    assert_eq!(refused_error().await, ClientError::Unreachable);
}

#[tokio::test]
async fn test_silent_server_times_out() {
    assert_eq!(timeout_error().await, ClientError::Timeout);
}

#[tokio::test]
async fn test_non_json_reply_is_invalid_response() {
    assert_eq!(malformed_error().await, ClientError::InvalidResponse);
}

#[tokio::test]
async fn test_failure_messages_are_distinct() {
    let refused = refused_error().await.to_string();
    let timeout = timeout_error().await.to_string();
    let malformed = malformed_error().await.to_string();

    assert_ne!(refused, timeout);
    assert_ne!(refused, malformed);
    assert_ne!(timeout, malformed);
}

#[tokio::test]
async fn test_spawned_hash_reports_progress_then_result() {
    let client = hash_service().await;
    let mut events = spawn_hash(client, "hello".to_owned());

    let mut seen = Vec::new();
    while let Some(event) = events.recv().await {
        let done = event.is_terminal();
        seen.push(event);
        if done {
            break;
        }
    }

    let (last, progress) = seen.split_last().unwrap();
    assert!(progress.iter().all(|e| matches!(e, HashEvent::Progress(_))));
    let pcts: Vec<u8> = progress
        .iter()
        .filter_map(|e| match e {
            HashEvent::Progress(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert_eq!(pcts, [20_u8, 50, 80, 100]);
    match last {
        HashEvent::Completed(resp) => assert_eq!(resp.hashed_value, HELLO_DIGEST),
        other => panic!("expected completion, got {other:?}"),
    }
}

#[tokio::test]
async fn test_spawned_hash_failure_is_delivered() {
    let addr = closed_endpoint().await;
    let client = HashClient::new(format!("http://{addr}/api/hash"), Duration::from_secs(5)).unwrap();

    let mut progress = Vec::new();
    let outcome = wait_for_outcome(spawn_hash(client, "hello".to_owned()), |p| progress.push(p)).await;
    assert_eq!(outcome, Err(ClientError::Unreachable));
    assert_eq!(progress, [20_u8, 50]);
}

#[tokio::test]
async fn test_service_rejection_reports_response_progress() {
    let client = hash_service().await;

    let mut progress = Vec::new();
    let outcome = wait_for_outcome(spawn_hash(client, "   ".to_owned()), |p| progress.push(p)).await;
    assert!(matches!(outcome, Err(ClientError::Api(_))));
    assert_eq!(progress, [20_u8, 50, 80]);
}

#[tokio::test]
async fn test_results_feed_history() {
    let client = hash_service().await;
    let mut history = History::new();
    for text in ["alpha", "beta"] {
        let resp = wait_for_outcome(spawn_hash(client.clone(), text.to_owned()), |_| {})
            .await
            .unwrap();
        history.record_now(&resp);
    }
    assert_eq!(history.latest().unwrap().original_text, "beta");
    assert_eq!(history.filter("ALPHA").len(), 1);
}
