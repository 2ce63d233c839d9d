//! API Server Entry Point
//!
//! Loads and validates the environment, then serves the Logto session
//! routes and the dashboard. Uses `anyhow` for startup errors; request-level
//! errors go through `kernel::error::AppError`.

use std::net::SocketAddr;
use std::sync::Arc;

use auth::{EnvConfig, LogtoClient, SessionCookieCodec, logto_router, provide_auth_context};
use axum::{Router, middleware};
use dashboard::{DashboardState, dashboard_router, mock_projects};
use platform::fetch::AuthFailure;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,dashboard=info,platform=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fail fast on missing or malformed configuration
    let env = EnvConfig::from_env()?;
    tracing::info!(config = ?env, "Environment loaded");

    // Global interceptor for outgoing requests
    platform::fetch::install(Arc::new(|failure: &AuthFailure| {
        tracing::warn!(
            url = %failure.url,
            status = failure.status.as_u16(),
            "Upstream authentication failed; the user may need to sign in again"
        );
    }));

    let logto_config = Arc::new(env.server_config());
    let codec = Arc::new(SessionCookieCodec::new(&logto_config));
    let logto_client = LogtoClient::new(logto_config.clone())?;

    let dashboard_state = DashboardState {
        projects: mock_projects(),
        client_config: Arc::new(env.client_config()),
    };

    // Build router
    let app = Router::new()
        .nest("/api/logto", logto_router(logto_client, logto_config))
        .merge(dashboard_router(dashboard_state))
        .layer(middleware::from_fn_with_state(codec, provide_auth_context))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], env.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
