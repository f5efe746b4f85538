//! HTTP API routes driven in-process through the router.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use credits_gateway::blockchain::{TransportError, VmOutput};
use credits_gateway::cache::MemoryCache;
use credits_gateway::config::GatewayConfig;
use credits_gateway::http::{AppState, HttpServer};
use credits_gateway::lifecycle::build_config_handler;

mod common;
use common::{StubProvider, CONTRACT};

fn router(provider: Arc<StubProvider>) -> Router {
    let mut config = GatewayConfig::default();
    config.blockchain.contract_address = CONTRACT.to_string();
    config.service.wallet_url = "https://wallet.example".to_string();
    config.service.explorer_url = "https://explorer.example".to_string();
    config.service.minimum_balance = 0.1;

    let config_handler =
        build_config_handler(&config, provider, Arc::new(MemoryCache::new())).unwrap();
    HttpServer::build_router(AppState { config_handler }, Duration::from_secs(5))
}

async fn get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(router(StubProvider::contract(false, 1)), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_config_snapshot() {
    let (status, body) = get(router(StubProvider::contract(true, 500)), "/config").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isContractPaused"], true);
    assert_eq!(body["creditsPerEGLD"], 500);
    assert_eq!(body["walletURL"], "https://wallet.example");
    assert_eq!(body["explorerURL"], "https://explorer.example");
    assert_eq!(body["minimumBalance"], 0.1);
}

#[tokio::test]
async fn test_config_bad_gateway_on_query_failure() {
    let provider = StubProvider::new(|_| Err(TransportError::Http("connection refused".into())));
    let (status, body) = get(router(provider), "/config").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn test_credits() {
    let provider = StubProvider::contract(false, 1);
    let (status, body) = get(router(provider.clone()), "/credits/300").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 300);
    assert_eq!(body["credits"], 300);
    assert_eq!(provider.requests()[0].args, vec!["012c".to_string()]);
}

#[tokio::test]
async fn test_credits_invalid_id() {
    let provider = StubProvider::contract(false, 1);
    for uri in ["/credits/abc", "/credits/-1", "/credits/18446744073709551616"] {
        let (status, body) = get(router(provider.clone()), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["error"].as_str().unwrap().contains("invalid account id"));
    }
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_credits_bad_gateway_on_failed_execution() {
    let provider = StubProvider::new(|_| Ok(VmOutput::with_code("user error").into()));
    let (status, body) = get(router(provider), "/credits/7").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("getCredits"));
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, _) = get(router(StubProvider::contract(false, 1)), "/status").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
