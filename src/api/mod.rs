//! # Delegation API
//!
//! HTTP and WebSocket surface over the delegation engine.
//!
//! ## Endpoints
//!
//! - `POST /api/delegation/route` - Plan a chain for a task (gated)
//! - `GET /api/delegation/status` - Gate state and routing scheme level
//! - `GET /api/agents` - List registered agents
//! - `GET /api/agents/:key` - Look up one agent
//! - `POST /api/delegations/log` - Record a delegation outcome
//! - `GET /api/delegations/recent` - Recent delegation log entries
//! - `GET /ws/dashboard` - Live delegation feed
//! - `GET /health` - Service health
//! - `GET /metrics` - Prometheus metrics
//!
//! ## Example
//!
//! ```no_run
//! use delegator::api::{create_router, AppState};
//! use delegator::config::DelegatorConfig;
//! use delegator::registry::AgentRegistry;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Arc::new(AgentRegistry::builtin());
//! let config = Arc::new(DelegatorConfig::default());
//!
//! let state = Arc::new(AppState::new(registry, config)?);
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Errors share one envelope:
//! ```json
//! {
//!   "error": {
//!     "message": "Task text must not be empty",
//!     "type": "invalid_request_error",
//!     "code": "invalid_request_error"
//!   }
//! }
//! ```

mod agents;
mod delegation;
mod health;
mod history;
pub mod types;

pub use types::*;

use crate::config::{DelegatorConfig, ServerConfig};
use crate::dashboard::DashboardMessage;
use crate::history::DelegationLog;
use crate::metrics::MetricsCollector;
use crate::registry::{AgentRegistry, RegistryError};
use crate::routing::DelegationEngine;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::broadcast;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size (1 MB).
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Buffered dashboard updates per subscriber before it starts lagging.
const WS_BROADCAST_CAPACITY: usize = 100;

/// Shared application state accessible to all handlers.
pub struct AppState {
    pub engine: Arc<DelegationEngine>,
    pub history: Arc<DelegationLog>,
    pub config: Arc<DelegatorConfig>,
    /// Server startup time for uptime tracking
    pub start_time: Instant,
    /// Dashboard update fan-out
    pub ws_broadcast: broadcast::Sender<DashboardMessage>,
    /// Metrics collector for observability
    pub metrics_collector: Arc<MetricsCollector>,
}

impl AppState {
    /// Create application state over the given registry.
    ///
    /// Fails if the registry lacks one of the roles the engine hands off to.
    pub fn new(
        registry: Arc<AgentRegistry>,
        config: Arc<DelegatorConfig>,
    ) -> Result<Self, RegistryError> {
        let engine = DelegationEngine::new(registry)?
            .with_minutes_per_agent(config.delegation.minutes_per_agent);
        let history = DelegationLog::with_capacity(config.delegation.history_capacity);
        let (ws_broadcast, _) = broadcast::channel(WS_BROADCAST_CAPACITY);

        let start_time = Instant::now();
        let metrics_collector = Arc::new(MetricsCollector::new(
            start_time,
            crate::metrics::setup_or_detached_handle(),
        ));

        Ok(Self {
            engine: Arc::new(engine),
            history: Arc::new(history),
            config,
            start_time,
            ws_broadcast,
            metrics_collector,
        })
    }
}

/// Create the main API router with all endpoints configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.server);
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    Router::new()
        .route("/api/delegation/route", post(delegation::route))
        .route("/api/delegation/status", get(delegation::status))
        .route("/api/agents", get(agents::list))
        .route("/api/agents/:key", get(agents::get))
        .route("/api/delegations/log", post(history::log))
        .route("/api/delegations/recent", get(history::recent))
        .route("/ws/dashboard", get(crate::dashboard::websocket_handler))
        .route("/health", get(health::handle))
        .route("/metrics", get(crate::metrics::handler::metrics_handler))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.allows_any_origin() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server
        .cors_allow_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}
