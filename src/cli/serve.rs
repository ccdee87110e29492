//! Serve command implementation

use crate::api::{create_router, AppState};
use crate::cli::ServeArgs;
use crate::config::{DelegatorConfig, LogFormat};
use crate::registry::AgentRegistry;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(
    args: &ServeArgs,
) -> Result<DelegatorConfig, Box<dyn std::error::Error>> {
    let mut config = if args.config.exists() {
        DelegatorConfig::load(Some(&args.config))?
    } else {
        tracing::debug!("Config file not found, using defaults");
        DelegatorConfig::default()
    };

    config = config.with_env_overrides();

    // CLI overrides (highest priority)
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }
    if args.enable_routing {
        config.delegation.enabled = true;
    }

    Ok(config)
}

/// Initialize tracing based on configuration
pub fn init_tracing(
    config: &crate::config::LoggingConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter_str = crate::logging::build_filter_directives(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    if config.log_task_preview {
        eprintln!("WARNING: Task previews are enabled. Task text will appear in logs.");
    }

    match config.format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()?;
        }
    }

    Ok(())
}

/// Build API router with all endpoints
fn build_api_router(
    registry: Arc<AgentRegistry>,
    config: Arc<DelegatorConfig>,
) -> Result<(axum::Router, Arc<AppState>), Box<dyn std::error::Error>> {
    let app_state = Arc::new(AppState::new(registry, config)?);
    let router = create_router(Arc::clone(&app_state));
    Ok((router, app_state))
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
        _ = cancel_token.cancelled() => {}
    }

    cancel_token.cancel();
}

/// Main serve command handler
pub async fn run_serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_overrides(&args)?;
    config.validate()?;

    init_tracing(&config.logging)?;

    tracing::info!("Starting delegator");
    tracing::debug!(?config, "Loaded configuration");

    let registry = Arc::new(AgentRegistry::builtin());
    let (app, app_state) = build_api_router(registry, Arc::new(config.clone()))?;

    if config.delegation.enabled {
        tracing::info!(
            agents = %app_state.engine.registry().keys().join(", "),
            minutes_per_agent = app_state.engine.minutes_per_agent(),
            "Delegation routing enabled"
        );
    } else {
        tracing::info!("Delegation routing disabled; POST /api/delegation/route answers 404");
    }

    let cancel_token = CancellationToken::new();
    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!(addr = %addr, "Delegator API server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel_token.clone()))
        .await?;

    tracing::info!(
        delegations_logged = app_state.history.len(),
        "Delegator server stopped"
    );
    Ok(())
}
