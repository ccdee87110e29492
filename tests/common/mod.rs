//! Shared test utilities for delegator integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use delegator::api::{create_router, AppState};
use delegator::config::DelegatorConfig;
use delegator::registry::AgentRegistry;
use std::sync::Arc;

/// UUID v4 string length: "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx"
pub const UUID_V4_STRING_LEN: usize = 36;

/// Task fixtures with known routing outcomes.
pub const COMPLEX_TASK: &str = "создать систему для анализа";
pub const MEDIUM_CODING_TASK: &str = "нужен анализ перед реализацией";
pub const SIMPLE_FALLBACK_TASK: &str = "привет, как дела";
pub const SIMPLE_DASHKA_TASK: &str = "нужна координация интерфейса";

/// Default config with the routing gate set as requested.
pub fn test_config(routing_enabled: bool) -> DelegatorConfig {
    let mut config = DelegatorConfig::default();
    config.delegation.enabled = routing_enabled;
    config
}

/// Build app state over the built-in registry.
pub fn make_state(config: DelegatorConfig) -> Arc<AppState> {
    let registry = Arc::new(AgentRegistry::builtin());
    Arc::new(AppState::new(registry, Arc::new(config)).unwrap())
}

/// Build router and state together so tests can inspect state after requests.
pub fn make_app(routing_enabled: bool) -> (axum::Router, Arc<AppState>) {
    let state = make_state(test_config(routing_enabled));
    (create_router(Arc::clone(&state)), state)
}

/// JSON request with the given method, path and body.
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// GET request with an empty body.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as text.
pub async fn read_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
